//! Animation Port - applies timeline values to rendered targets
//!
//! The domain's `TimelineDriver` decides *what* value each target property
//! has at a given instant; implementations of this port decide *how* it is
//! shown (inline CSS, canvas, nothing at all in tests).

use saeweb_domain::{AnimatedProperty, Timeline};
use thiserror::Error;

/// Why an animation could not be set up
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimationSetupError {
    /// A stage names a target that is not mounted
    #[error("animation target not mounted: {0}")]
    TargetMissing(String),

    /// The runtime was cancelled and cannot be reused
    #[error("animation runtime already cancelled")]
    Cancelled,
}

/// Port for the runtime that renders timeline frames
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait AnimationRuntime {
    /// Check every target of `timeline` is available and reset it to the
    /// timeline's starting values.
    fn prepare(&self, timeline: &Timeline) -> Result<(), AnimationSetupError>;

    /// Set one property of one target.
    fn apply(&self, target: &str, property: AnimatedProperty, value: f64);

    /// Stage `index` reached its end.
    fn stage_completed(&self, index: usize);

    /// Release everything. No further calls follow.
    fn cancel(&self);
}
