//! Failure taxonomy of the intro sequence.
//!
//! None of these ever reach the user. They exist so adapters can describe
//! what was absorbed when they log it.

use thiserror::Error;

use super::timeline::TimelineError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntroError {
    /// Autoplay rejected by runtime policy; recovered by the interaction fallback
    #[error("playback blocked by autoplay policy: {0}")]
    PlaybackBlocked(String),

    /// Source format or decoding failure; audio stays off for the mount
    #[error("playback unsupported: {0}")]
    PlaybackUnsupported(String),

    /// Target missing or animation runtime failure; recovered by skipping to Ready
    #[error("animation setup failed: {0}")]
    AnimationSetup(String),

    /// Owning view went away mid-sequence; pending work was released
    #[error("intro unmounted during {phase}")]
    Unmounted { phase: super::Phase },
}

impl From<TimelineError> for IntroError {
    fn from(err: TimelineError) -> Self {
        Self::AnimationSetup(err.to_string())
    }
}
