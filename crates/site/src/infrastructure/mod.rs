//! Infrastructure adapters: platform services, audio element, animation runtime.

pub mod animation;
pub mod platform;
pub mod playback;

pub use animation::{StyleTable, TargetStyle};
pub use playback::{DomAudioPlayback, HERO_AUDIO_ID};
