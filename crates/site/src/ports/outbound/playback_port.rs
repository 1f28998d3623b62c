//! Playback Port - ambient audio source
//!
//! Abstracts the media element behind the hero soundtrack. Attempts never
//! fail with an error: the adapter classifies the runtime's answer into a
//! [`PlayOutcome`] and the controller decides what to do with it.

use futures_util::future::LocalBoxFuture;
use saeweb_domain::PlayOutcome;

/// Port for the hero's ambient audio element
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait PlaybackSource {
    /// Ask the runtime to start playback.
    ///
    /// Resolves once the runtime has accepted or refused. Autoplay refusals
    /// resolve to `Blocked`, missing/undecodable sources to `Unsupported`.
    fn attempt_play(&self) -> LocalBoxFuture<'static, PlayOutcome>;

    fn set_muted(&self, muted: bool);

    /// Volume in `[0, 1]`
    fn set_volume(&self, volume: f64);

    fn pause(&self);
}
