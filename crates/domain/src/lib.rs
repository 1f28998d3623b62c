//! SAE Web domain.
//!
//! Pure state machines and value objects for the society website. No I/O,
//! no clocks, no logging: callers drive everything and log the returned
//! outcomes.

pub mod error;
pub mod intro;
pub mod value_objects;

pub use error::DomainError;

pub use intro::{
    mask_reveal_timeline, AnimatedProperty, AudioBootstrap, AudioState, AudioUpdate,
    IntroError, IntroSequence, IntroView, Phase, PhaseChange, PlayAttempt, PlayOutcome,
    RevealProgress, SequenceEvent, SequenceState, Stage, StageEvent, Timeline, TimelineDriver,
    TimelineError, Viewport, DEFAULT_VOLUME, MASK_TARGET, REVEAL_THRESHOLD,
};

pub use value_objects::{Chamber, LoadingProgress, Page, CHAMBERS, LOADING_STEP_MS};
