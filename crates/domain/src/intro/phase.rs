//! Intro phases and the forward-only state holding them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Discrete stage of the intro experience.
///
/// Ordered: a phase may only ever move to a later variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Start screen is shown, nothing else is interactive
    #[default]
    AwaitingStart,
    /// Start was requested, the mask overlay is animating
    Starting,
    /// Real content is fading in underneath the remaining animation
    Revealing,
    /// Terminal: mask released, main content visible
    Ready,
}

impl Phase {
    /// The phase that normally follows this one, `None` for Ready.
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::AwaitingStart => Some(Phase::Starting),
            Phase::Starting => Some(Phase::Revealing),
            Phase::Revealing => Some(Phase::Ready),
            Phase::Ready => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Phase::Ready
    }

    /// Whether the mask overlay belongs on screen in this phase.
    pub fn shows_mask(self) -> bool {
        matches!(self, Phase::Starting | Phase::Revealing)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::AwaitingStart => "awaiting_start",
            Phase::Starting => "starting",
            Phase::Revealing => "revealing",
            Phase::Ready => "ready",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single observed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseChange {
    pub from: Phase,
    pub to: Phase,
}

/// Current phase of the intro, advanced monotonically.
///
/// # Invariants
///
/// - `phase` never moves backwards
/// - Starting is never skipped: AwaitingStart can only move to Starting
/// - Ready is terminal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceState {
    phase: Phase,
}

impl SequenceState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Move to `to`.
    ///
    /// Forward jumps past Revealing are allowed (the setup-failure path goes
    /// Starting -> Ready), but leaving AwaitingStart always lands on Starting.
    pub fn advance_to(&mut self, to: Phase) -> Result<PhaseChange, DomainError> {
        let from = self.phase;
        if to <= from {
            return Err(DomainError::invalid_state_transition(format!(
                "{from} -> {to}"
            )));
        }
        if from == Phase::AwaitingStart && to != Phase::Starting {
            return Err(DomainError::invalid_state_transition(format!(
                "{from} -> {to} skips {}",
                Phase::Starting
            )));
        }
        self.phase = to;
        Ok(PhaseChange { from, to })
    }
}
