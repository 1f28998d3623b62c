//! Intro sequence aggregate
//!
//! Owns the phase, the reveal progress and the running timeline. The gate
//! (`request_start`) is the only way out of AwaitingStart; only the timeline
//! (or a failed setup) moves the sequence past Starting.
//!
//! # Invariants
//!
//! - Phases are visited in order; Ready is terminal
//! - Revealing is entered only once the reveal stage has crossed its threshold
//! - After `unmount`, no event is ever produced again

use super::driver::{StageEvent, TimelineDriver};
use super::error::IntroError;
use super::phase::{Phase, PhaseChange, SequenceState};
use super::progress::RevealProgress;
use super::timeline::Timeline;
use super::view::IntroView;
use super::audio::AudioState;
use crate::error::DomainError;

/// Output of advancing the sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum SequenceEvent {
    Phase(PhaseChange),
    Stage(StageEvent),
}

/// The hero introduction sequence for one page mount.
#[derive(Debug, Clone, Default)]
pub struct IntroSequence {
    state: SequenceState,
    progress: RevealProgress,
    driver: Option<TimelineDriver>,
    /// Absolute (start, end) seconds over which real content fades in
    reveal_window: Option<(f64, f64)>,
    content_opacity: f64,
    unmounted: bool,
}

impl IntroSequence {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[inline]
    pub fn progress(&self) -> RevealProgress {
        self.progress
    }

    pub fn is_unmounted(&self) -> bool {
        self.unmounted
    }

    /// Whether a timeline is attached and still playing.
    pub fn is_animating(&self) -> bool {
        self.driver.is_some()
    }

    /// Opacity of the real hero content underneath the mask, `[0, 1]`.
    pub fn content_opacity(&self) -> f64 {
        match self.phase() {
            Phase::AwaitingStart | Phase::Starting => 0.0,
            Phase::Revealing => self.content_opacity,
            Phase::Ready => 1.0,
        }
    }

    /// Gate: user asked to start. Idempotent.
    pub fn request_start(&mut self) -> Option<PhaseChange> {
        if self.unmounted || self.phase() != Phase::AwaitingStart {
            return None;
        }
        self.state.advance_to(Phase::Starting).ok()
    }

    /// Hand the sequencer its timeline. Only valid once, while Starting.
    pub fn attach_timeline(&mut self, timeline: Timeline) -> Result<(), DomainError> {
        if self.unmounted {
            return Err(DomainError::invalid_state_transition(
                "cannot attach a timeline after unmount",
            ));
        }
        if self.phase() != Phase::Starting || self.driver.is_some() {
            return Err(DomainError::invalid_state_transition(format!(
                "timeline attached while {}",
                self.phase()
            )));
        }
        self.reveal_window = Some((timeline.reveal_at(), timeline.total_duration()));
        self.driver = Some(TimelineDriver::new(timeline));
        Ok(())
    }

    /// Setup failed: skip straight to Ready so nothing stays behind the mask.
    pub fn abort_to_ready(&mut self) -> Option<PhaseChange> {
        if self.unmounted || !self.phase().shows_mask() {
            return None;
        }
        self.driver = None;
        self.progress.complete();
        self.state.advance_to(Phase::Ready).ok()
    }

    /// Advance the running timeline by `dt` seconds.
    pub fn advance(&mut self, dt: f64) -> Vec<SequenceEvent> {
        if self.unmounted {
            return Vec::new();
        }
        let Some(driver) = self.driver.as_mut() else {
            return Vec::new();
        };

        let reveal_stage = driver.timeline().reveal_stage();
        let threshold = driver.timeline().reveal_threshold();
        let stage_events = driver.advance(dt);
        let elapsed = driver.elapsed();
        let overall = driver.progress();
        let finished = driver.is_finished();

        let mut events = Vec::with_capacity(stage_events.len() + 2);
        for event in stage_events {
            let crosses = matches!(
                &event,
                StageEvent::Frame { index, progress, .. }
                    if *index == reveal_stage && *progress >= threshold
            );
            events.push(SequenceEvent::Stage(event));
            if crosses && self.phase() == Phase::Starting {
                if let Ok(change) = self.state.advance_to(Phase::Revealing) {
                    events.push(SequenceEvent::Phase(change));
                }
            }
        }

        self.progress.advance_to(overall);
        self.update_content_opacity(elapsed);

        if finished {
            if self.phase() == Phase::Starting {
                if let Ok(change) = self.state.advance_to(Phase::Revealing) {
                    events.push(SequenceEvent::Phase(change));
                }
            }
            if let Ok(change) = self.state.advance_to(Phase::Ready) {
                events.push(SequenceEvent::Phase(change));
            }
            self.progress.complete();
            self.content_opacity = 1.0;
            self.driver = None;
        }
        events
    }

    /// Owning view is going away: cancel everything still scheduled.
    ///
    /// Returns the interruption when a sequence was in flight.
    pub fn unmount(&mut self) -> Option<IntroError> {
        if self.unmounted {
            return None;
        }
        self.unmounted = true;
        let phase = self.phase();
        self.driver.take().map(|mut driver| {
            driver.cancel();
            IntroError::Unmounted { phase }
        })
    }

    /// Read-only snapshot for the presenter.
    pub fn view(&self, audio: AudioState) -> IntroView {
        IntroView::new(self.phase(), self.progress, self.content_opacity(), audio)
    }

    fn update_content_opacity(&mut self, elapsed: f64) {
        if let Some((start, end)) = self.reveal_window {
            let span = end - start;
            let opacity = if span <= 0.0 {
                1.0
            } else {
                ((elapsed - start) / span).clamp(0.0, 1.0)
            };
            self.content_opacity = self.content_opacity.max(opacity);
        }
    }
}
