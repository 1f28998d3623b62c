//! Ambient audio bootstrap
//!
//! Best-effort start of the looping ambient track under browser autoplay
//! policy. The bootstrap never performs playback itself: it decides *when* an
//! attempt should be made and folds the reported [`PlayOutcome`] back into
//! [`AudioState`]. Adapters own the actual media element.
//!
//! Flow:
//! 1. Source reports readiness -> one `Initial` attempt
//! 2. `Blocked` -> a single one-shot fallback listener is armed
//! 3. Next user interaction anywhere -> listener detaches, one `Fallback` attempt
//!
//! Nothing here ever fails loudly; every outcome is returned as an
//! [`AudioUpdate`] for the caller to log.

use serde::{Deserialize, Serialize};

/// Default playback volume of the ambient track.
pub const DEFAULT_VOLUME: f64 = 0.8;

/// Playback status of the ambient track.
///
/// # Invariants
///
/// - `playing` implies `ready`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AudioState {
    ready: bool,
    playing: bool,
    muted: bool,
}

impl AudioState {
    /// Source can decode and play
    #[inline]
    pub fn ready(&self) -> bool {
        self.ready
    }

    #[inline]
    pub fn playing(&self) -> bool {
        self.playing
    }

    #[inline]
    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Playing and not muted.
    pub fn audible(&self) -> bool {
        self.playing && !self.muted
    }
}

/// Result of asking the playback source to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayOutcome {
    Started,
    /// Rejected by the runtime's autoplay policy
    Blocked,
    /// No playable source (format, decoding, missing element)
    Unsupported,
}

/// Which trigger produced a play attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayAttempt {
    /// Fired from the source readiness signal
    Initial,
    /// Fired from the first user interaction after a blocked start
    Fallback,
}

/// State of the one-shot "first interaction" listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FallbackListener {
    #[default]
    Idle,
    Armed,
    /// Fired or disarmed; never re-armed within a mount
    Spent,
}

/// What an audio event changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioUpdate {
    Started { attempt: PlayAttempt },
    FallbackArmed,
    /// Blocked with no further retry available
    Blocked { attempt: PlayAttempt },
    Unsupported,
    MuteChanged { muted: bool },
    PlayingChanged { playing: bool },
    /// Event arrived after detach or had no effect
    Ignored,
}

/// Decides when to attempt ambient playback and tracks the result.
#[derive(Debug, Clone, Default)]
pub struct AudioBootstrap {
    state: AudioState,
    fallback: FallbackListener,
    in_flight: Option<PlayAttempt>,
    initial_attempted: bool,
    unsupported: bool,
    detached: bool,
}

impl AudioBootstrap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bootstrap whose source starts muted (user preference).
    pub fn muted() -> Self {
        let mut bootstrap = Self::default();
        bootstrap.state.muted = true;
        bootstrap
    }

    #[inline]
    pub fn state(&self) -> AudioState {
        self.state
    }

    /// Whether a first-interaction listener is currently pending.
    pub fn fallback_armed(&self) -> bool {
        self.fallback == FallbackListener::Armed
    }

    pub fn attempt_in_flight(&self) -> Option<PlayAttempt> {
        self.in_flight
    }

    pub fn is_unsupported(&self) -> bool {
        self.unsupported
    }

    /// Source readiness signal (`canplay`, `canplaythrough`, ...).
    ///
    /// Returns the attempt to run, at most once per mount.
    pub fn on_source_ready(&mut self) -> Option<PlayAttempt> {
        if self.detached || self.unsupported {
            return None;
        }
        self.state.ready = true;
        if self.initial_attempted || self.state.playing || self.in_flight.is_some() {
            return None;
        }
        self.initial_attempted = true;
        self.in_flight = Some(PlayAttempt::Initial);
        Some(PlayAttempt::Initial)
    }

    /// Any pointer interaction anywhere on the page.
    ///
    /// Consumes the armed listener regardless of what the retry will report.
    pub fn on_user_interaction(&mut self) -> Option<PlayAttempt> {
        if self.detached || self.fallback != FallbackListener::Armed {
            return None;
        }
        self.fallback = FallbackListener::Spent;
        if self.unsupported || self.state.playing || !self.state.ready || self.in_flight.is_some()
        {
            return None;
        }
        self.in_flight = Some(PlayAttempt::Fallback);
        Some(PlayAttempt::Fallback)
    }

    /// Fold the outcome of an attempt back into the state.
    pub fn complete_attempt(&mut self, attempt: PlayAttempt, outcome: PlayOutcome) -> AudioUpdate {
        if self.in_flight == Some(attempt) {
            self.in_flight = None;
        }
        if self.detached {
            return AudioUpdate::Ignored;
        }

        match outcome {
            PlayOutcome::Started => {
                if !self.state.ready || self.unsupported {
                    return AudioUpdate::Ignored;
                }
                self.state.playing = true;
                if self.fallback == FallbackListener::Armed {
                    self.fallback = FallbackListener::Spent;
                }
                AudioUpdate::Started { attempt }
            }
            PlayOutcome::Blocked => {
                if attempt == PlayAttempt::Initial && self.fallback == FallbackListener::Idle {
                    self.fallback = FallbackListener::Armed;
                    AudioUpdate::FallbackArmed
                } else {
                    AudioUpdate::Blocked { attempt }
                }
            }
            PlayOutcome::Unsupported => {
                self.mark_unsupported();
                AudioUpdate::Unsupported
            }
        }
    }

    /// Source reported a decoding / loading error.
    pub fn on_source_error(&mut self) -> AudioUpdate {
        if self.detached {
            return AudioUpdate::Ignored;
        }
        self.mark_unsupported();
        self.state.ready = false;
        AudioUpdate::Unsupported
    }

    /// Media element emitted `play`.
    pub fn on_source_playing(&mut self) -> AudioUpdate {
        if self.detached || !self.state.ready || self.unsupported || self.state.playing {
            return AudioUpdate::Ignored;
        }
        self.state.playing = true;
        AudioUpdate::PlayingChanged { playing: true }
    }

    /// Media element emitted `pause`.
    pub fn on_source_paused(&mut self) -> AudioUpdate {
        if self.detached || !self.state.playing {
            return AudioUpdate::Ignored;
        }
        self.state.playing = false;
        AudioUpdate::PlayingChanged { playing: false }
    }

    /// Flip `muted`. Independent of `playing`; never retries playback.
    pub fn toggle_mute(&mut self) -> AudioUpdate {
        self.state.muted = !self.state.muted;
        AudioUpdate::MuteChanged {
            muted: self.state.muted,
        }
    }

    /// Owning view unmounted: drop the listener and reset the state.
    pub fn detach(&mut self) {
        self.detached = true;
        self.fallback = FallbackListener::Spent;
        self.in_flight = None;
        self.state = AudioState::default();
    }

    fn mark_unsupported(&mut self) {
        self.unsupported = true;
        self.state.playing = false;
        if self.fallback == FallbackListener::Armed {
            self.fallback = FallbackListener::Spent;
        }
    }
}
