//! Hero introduction sequence
//!
//! Gate -> audio bootstrap -> mask reveal -> main content. All types here are
//! pure state machines driven by the caller; the site crate supplies time,
//! playback and rendering through its ports.

mod audio;
mod driver;
mod error;
mod mask;
mod phase;
mod progress;
mod sequence;
mod timeline;
mod view;

pub use audio::{AudioBootstrap, AudioState, AudioUpdate, PlayAttempt, PlayOutcome, DEFAULT_VOLUME};
pub use driver::{StageEvent, TimelineDriver};
pub use error::IntroError;
pub use mask::{
    mask_reveal_timeline, Viewport, COMPACT_BREAKPOINT_PX, EXPAND_STAGE, MASK_TARGET,
    REVEAL_THRESHOLD,
};
pub use phase::{Phase, PhaseChange, SequenceState};
pub use progress::RevealProgress;
pub use sequence::{IntroSequence, SequenceEvent};
pub use timeline::{
    AnimatedProperty, Slot, Stage, Timeline, TimelineBuilder, TimelineError, MAX_TIMELINE_SECS,
};
pub use view::IntroView;
