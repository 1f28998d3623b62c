//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with the browser (or the desktop
//! webview) without depending on concrete implementations.

pub mod animation_port;
pub mod platform;
pub mod platform_port;
pub mod playback_port;

pub use animation_port::{AnimationRuntime, AnimationSetupError};
pub use platform::{DocumentProvider, SleepProvider, TimeProvider, ViewportProvider};
pub use platform_port::PlatformPort;
pub use playback_port::PlaybackSource;

#[cfg(any(test, feature = "testing"))]
pub use animation_port::MockAnimationRuntime;
#[cfg(any(test, feature = "testing"))]
pub use playback_port::MockPlaybackSource;
