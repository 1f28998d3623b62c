//! Presenter-facing snapshot of the intro.

use serde::{Deserialize, Serialize};

use super::audio::AudioState;
use super::phase::Phase;
use super::progress::RevealProgress;

/// Everything the content presenter needs, and nothing it can mutate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IntroView {
    pub phase: Phase,
    pub show_start_screen: bool,
    /// Mask overlay on screen (Starting or Revealing)
    pub show_mask: bool,
    /// HUD, mini-map, hero text (Ready only)
    pub show_main_content: bool,
    /// Opacity of the hero background under the mask
    pub content_opacity: f64,
    pub reveal_fraction: f64,
    pub audio: AudioState,
}

impl IntroView {
    pub fn new(
        phase: Phase,
        progress: RevealProgress,
        content_opacity: f64,
        audio: AudioState,
    ) -> Self {
        Self {
            phase,
            show_start_screen: phase == Phase::AwaitingStart,
            show_mask: phase.shows_mask(),
            show_main_content: phase == Phase::Ready,
            content_opacity: content_opacity.clamp(0.0, 1.0),
            reveal_fraction: progress.fraction(),
            audio,
        }
    }

    /// Audio toggle is offered once the ambient track actually plays.
    pub fn show_audio_toggle(&self) -> bool {
        self.audio.playing()
    }
}
