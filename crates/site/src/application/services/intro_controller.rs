//! Intro controller
//!
//! Drives the hero introduction for one mount of the home page: the gate,
//! the ambient audio bootstrap and the mask-reveal animation. The state
//! machines live in the domain crate; this service feeds them events, runs
//! the side effects they ask for through the playback and animation ports,
//! and publishes an [`IntroView`] after every change.
//!
//! Everything runs on the UI thread. Shared state sits in a `RefCell` and is
//! never borrowed across an `.await`.

use std::cell::RefCell;
use std::rc::Rc;

use futures_util::future::{select, Either};
use saeweb_domain::{
    mask_reveal_timeline, AudioBootstrap, AudioUpdate, IntroError, IntroSequence, IntroView,
    Phase, PlayAttempt, PlayOutcome, SequenceEvent, StageEvent, Viewport, DEFAULT_VOLUME,
};
use tokio_util::sync::CancellationToken;

use crate::ports::outbound::{AnimationRuntime, PlatformPort, PlaybackSource};

/// Delay between two animation frames (~60 fps)
pub const FRAME_MS: u64 = 16;

/// Per-mount settings of the intro
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntroSettings {
    pub viewport: Viewport,
    pub volume: f64,
    pub start_muted: bool,
}

impl Default for IntroSettings {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            volume: DEFAULT_VOLUME,
            start_muted: false,
        }
    }
}

type Observer = Rc<dyn Fn(IntroView)>;

struct IntroInner {
    sequence: IntroSequence,
    audio: AudioBootstrap,
    observer: Option<Observer>,
}

impl IntroInner {
    fn view(&self) -> IntroView {
        self.sequence.view(self.audio.state())
    }
}

/// Application service for the hero intro. Clones share the same state.
#[derive(Clone)]
pub struct IntroController {
    inner: Rc<RefCell<IntroInner>>,
    playback: Rc<dyn PlaybackSource>,
    animation: Rc<dyn AnimationRuntime>,
    settings: IntroSettings,
}

impl IntroController {
    pub fn new(
        playback: Rc<dyn PlaybackSource>,
        animation: Rc<dyn AnimationRuntime>,
        settings: IntroSettings,
    ) -> Self {
        let audio = if settings.start_muted {
            AudioBootstrap::muted()
        } else {
            AudioBootstrap::new()
        };
        Self {
            inner: Rc::new(RefCell::new(IntroInner {
                sequence: IntroSequence::new(),
                audio,
                observer: None,
            })),
            playback,
            animation,
            settings,
        }
    }

    /// Called with a fresh view after every change, until unmount.
    pub fn set_observer(&self, observer: impl Fn(IntroView) + 'static) {
        self.inner.borrow_mut().observer = Some(Rc::new(observer));
    }

    pub fn view(&self) -> IntroView {
        self.inner.borrow().view()
    }

    pub fn phase(&self) -> Phase {
        self.inner.borrow().sequence.phase()
    }

    pub fn is_animating(&self) -> bool {
        self.inner.borrow().sequence.is_animating()
    }

    pub fn is_unmounted(&self) -> bool {
        self.inner.borrow().sequence.is_unmounted()
    }

    pub fn settings(&self) -> IntroSettings {
        self.settings
    }

    // -------------------------------------------------------------------------
    // Gate + reveal
    // -------------------------------------------------------------------------

    /// The user asked to start. Returns `false` when the request was a
    /// duplicate (or came after unmount).
    pub fn request_start(&self) -> bool {
        let change = self.inner.borrow_mut().sequence.request_start();
        let Some(change) = change else {
            tracing::debug!(phase = %self.phase(), "Ignoring repeated start request");
            return false;
        };
        tracing::info!(from = %change.from, to = %change.to, "Intro started");

        self.begin_reveal();
        self.notify();
        true
    }

    fn begin_reveal(&self) {
        let timeline = match mask_reveal_timeline(self.settings.viewport) {
            Ok(timeline) => timeline,
            Err(e) => return self.abort_to_ready(IntroError::from(e)),
        };

        if let Err(e) = self.animation.prepare(&timeline) {
            return self.abort_to_ready(IntroError::AnimationSetup(e.to_string()));
        }

        let total = timeline.total_duration();
        let attached = self.inner.borrow_mut().sequence.attach_timeline(timeline);
        match attached {
            Ok(()) => tracing::debug!(
                viewport = ?self.settings.viewport,
                total_secs = total,
                "Mask reveal scheduled"
            ),
            Err(e) => self.abort_to_ready(IntroError::AnimationSetup(e.to_string())),
        }
    }

    fn abort_to_ready(&self, error: IntroError) {
        tracing::warn!(error = %error, "Mask reveal unavailable, showing content directly");
        let change = self.inner.borrow_mut().sequence.abort_to_ready();
        if let Some(change) = change {
            tracing::info!(from = %change.from, to = %change.to, "Intro phase changed");
        }
    }

    /// Advance the reveal by `dt_secs`. Returns whether it is still running.
    pub fn tick(&self, dt_secs: f64) -> bool {
        let (events, animating) = {
            let mut inner = self.inner.borrow_mut();
            let events = inner.sequence.advance(dt_secs);
            (events, inner.sequence.is_animating())
        };
        if events.is_empty() {
            return animating;
        }

        for event in &events {
            match event {
                SequenceEvent::Stage(StageEvent::Started { index }) => {
                    tracing::trace!(stage = *index, "Stage started");
                }
                SequenceEvent::Stage(StageEvent::Frame {
                    target,
                    property,
                    value,
                    ..
                }) => self.animation.apply(target, *property, *value),
                SequenceEvent::Stage(StageEvent::Completed { index }) => {
                    self.animation.stage_completed(*index);
                }
                SequenceEvent::Phase(change) => {
                    tracing::info!(from = %change.from, to = %change.to, "Intro phase changed");
                }
            }
        }

        self.notify();
        animating
    }

    /// Frame loop: one `tick` per frame until the reveal ends, the
    /// controller unmounts or `cancel` fires.
    pub async fn run_reveal(&self, platform: &dyn PlatformPort, cancel: CancellationToken) {
        let mut last = platform.now_millis();
        while self.is_animating() {
            if cancel.is_cancelled() {
                break;
            }
            let frame = platform.sleep_ms(FRAME_MS);
            let cancelled = std::pin::pin!(cancel.cancelled());
            if let Either::Right(_) = select(frame, cancelled).await {
                break;
            }

            let now = platform.now_millis();
            let dt = now.saturating_sub(last) as f64 / 1000.0;
            last = now;
            self.tick(dt);
        }
        tracing::debug!(phase = %self.phase(), "Reveal loop finished");
    }

    // -------------------------------------------------------------------------
    // Audio
    // -------------------------------------------------------------------------

    /// The audio element can play (`canplay` / `canplaythrough`).
    pub async fn on_audio_ready(&self) {
        let attempt = self.inner.borrow_mut().audio.on_source_ready();
        self.notify();
        if let Some(attempt) = attempt {
            self.run_attempt(attempt).await;
        }
    }

    /// Any click anywhere on the page.
    pub async fn on_user_interaction(&self) {
        let attempt = self.inner.borrow_mut().audio.on_user_interaction();
        if let Some(attempt) = attempt {
            tracing::debug!("Retrying playback after first interaction");
            self.run_attempt(attempt).await;
        }
    }

    async fn run_attempt(&self, attempt: PlayAttempt) {
        let muted = self.inner.borrow().audio.state().muted();
        self.playback.set_volume(self.settings.volume);
        self.playback.set_muted(muted);

        let outcome = self.playback.attempt_play().await;
        let update = self.inner.borrow_mut().audio.complete_attempt(attempt, outcome);

        if update == AudioUpdate::Ignored
            && outcome == PlayOutcome::Started
            && self.is_unmounted()
        {
            // Resolved after the page went away.
            self.playback.pause();
        }
        log_audio_update(update);
        self.notify();
    }

    /// Media element reported an error.
    pub fn on_source_error(&self) {
        let update = self.inner.borrow_mut().audio.on_source_error();
        log_audio_update(update);
        self.notify();
    }

    /// Media element emitted `play`.
    pub fn on_source_playing(&self) {
        let update = self.inner.borrow_mut().audio.on_source_playing();
        log_audio_update(update);
        self.notify();
    }

    /// Media element emitted `pause`.
    pub fn on_source_paused(&self) {
        let update = self.inner.borrow_mut().audio.on_source_paused();
        log_audio_update(update);
        self.notify();
    }

    /// Flip mute. Never retries playback. Returns the new `muted`.
    pub fn toggle_mute(&self) -> bool {
        let muted = {
            let mut inner = self.inner.borrow_mut();
            inner.audio.toggle_mute();
            inner.audio.state().muted()
        };
        self.playback.set_muted(muted);
        tracing::debug!(muted, "Audio mute toggled");
        self.notify();
        muted
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// The hero is going away. Cancels the reveal, detaches the audio
    /// fallback and stops publishing views.
    pub fn unmount(&self) {
        let interrupted = {
            let mut inner = self.inner.borrow_mut();
            if inner.sequence.is_unmounted() {
                return;
            }
            let interrupted = inner.sequence.unmount();
            inner.audio.detach();
            inner.observer = None;
            interrupted
        };
        match interrupted {
            Some(e) => tracing::debug!(error = %e, "Intro interrupted"),
            None => tracing::debug!("Intro unmounted"),
        }
        self.animation.cancel();
        self.playback.pause();
    }

    fn notify(&self) {
        let (view, observer) = {
            let inner = self.inner.borrow();
            (inner.view(), inner.observer.clone())
        };
        if let Some(observer) = observer {
            observer(view);
        }
    }
}

fn log_audio_update(update: AudioUpdate) {
    match update {
        AudioUpdate::Started { attempt } => {
            tracing::info!(?attempt, "Ambient audio playing");
        }
        AudioUpdate::FallbackArmed => {
            let e = IntroError::PlaybackBlocked("initial attempt".to_string());
            tracing::info!(error = %e, "Waiting for first interaction to start audio");
        }
        AudioUpdate::Blocked { attempt } => {
            let e = IntroError::PlaybackBlocked(format!("{attempt:?} attempt"));
            tracing::warn!(error = %e, "Audio stays off for this visit");
        }
        AudioUpdate::Unsupported => {
            let e = IntroError::PlaybackUnsupported("source cannot be played".to_string());
            tracing::warn!(error = %e, "Audio disabled");
        }
        AudioUpdate::MuteChanged { muted } => tracing::debug!(muted, "Mute changed"),
        AudioUpdate::PlayingChanged { playing } => tracing::debug!(playing, "Playback changed"),
        AudioUpdate::Ignored => tracing::trace!("Audio event ignored"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::create_mock_platform;
    use crate::ports::outbound::{
        AnimationSetupError, MockAnimationRuntime, MockPlaybackSource,
    };
    use futures_util::future::LocalBoxFuture;
    use saeweb_domain::{AnimatedProperty, Timeline};
    use std::collections::VecDeque;

    // -------------------------------------------------------------------------
    // Fakes
    // -------------------------------------------------------------------------

    #[derive(Debug, Clone, PartialEq)]
    enum RuntimeCall {
        Prepare,
        Apply(AnimatedProperty),
        Completed(usize),
        Cancel,
    }

    /// Records every call made to the animation runtime.
    #[derive(Clone, Default)]
    struct RecordingRuntime {
        calls: Rc<RefCell<Vec<RuntimeCall>>>,
        fail_prepare: bool,
    }

    impl RecordingRuntime {
        fn calls(&self) -> Vec<RuntimeCall> {
            self.calls.borrow().clone()
        }
    }

    impl AnimationRuntime for RecordingRuntime {
        fn prepare(&self, _timeline: &Timeline) -> Result<(), AnimationSetupError> {
            self.calls.borrow_mut().push(RuntimeCall::Prepare);
            if self.fail_prepare {
                Err(AnimationSetupError::TargetMissing("mask".to_string()))
            } else {
                Ok(())
            }
        }

        fn apply(&self, _target: &str, property: AnimatedProperty, _value: f64) {
            self.calls.borrow_mut().push(RuntimeCall::Apply(property));
        }

        fn stage_completed(&self, index: usize) {
            self.calls.borrow_mut().push(RuntimeCall::Completed(index));
        }

        fn cancel(&self) {
            self.calls.borrow_mut().push(RuntimeCall::Cancel);
        }
    }

    /// Answers play attempts from a script; counts them.
    #[derive(Clone, Default)]
    struct ScriptedPlayback {
        outcomes: Rc<RefCell<VecDeque<PlayOutcome>>>,
        attempts: Rc<RefCell<usize>>,
        muted: Rc<RefCell<Vec<bool>>>,
        paused: Rc<RefCell<usize>>,
    }

    impl ScriptedPlayback {
        fn with(outcomes: &[PlayOutcome]) -> Self {
            let playback = Self::default();
            playback.outcomes.borrow_mut().extend(outcomes.iter().copied());
            playback
        }

        fn attempts(&self) -> usize {
            *self.attempts.borrow()
        }
    }

    impl PlaybackSource for ScriptedPlayback {
        fn attempt_play(&self) -> LocalBoxFuture<'static, PlayOutcome> {
            *self.attempts.borrow_mut() += 1;
            let outcome = self
                .outcomes
                .borrow_mut()
                .pop_front()
                .unwrap_or(PlayOutcome::Unsupported);
            Box::pin(async move { outcome })
        }

        fn set_muted(&self, muted: bool) {
            self.muted.borrow_mut().push(muted);
        }

        fn set_volume(&self, _volume: f64) {}

        fn pause(&self) {
            *self.paused.borrow_mut() += 1;
        }
    }

    struct Harness {
        controller: IntroController,
        runtime: RecordingRuntime,
        playback: ScriptedPlayback,
        phases: Rc<RefCell<Vec<Phase>>>,
    }

    impl Harness {
        fn new(outcomes: &[PlayOutcome]) -> Self {
            Self::with_runtime(outcomes, RecordingRuntime::default())
        }

        fn with_runtime(outcomes: &[PlayOutcome], runtime: RecordingRuntime) -> Self {
            let playback = ScriptedPlayback::with(outcomes);
            let controller = IntroController::new(
                Rc::new(playback.clone()),
                Rc::new(runtime.clone()),
                IntroSettings::default(),
            );
            let phases = Rc::new(RefCell::new(Vec::new()));
            let sink = phases.clone();
            controller.set_observer(move |view| {
                let mut phases = sink.borrow_mut();
                if phases.last() != Some(&view.phase) {
                    phases.push(view.phase);
                }
            });
            Self {
                controller,
                runtime,
                playback,
                phases,
            }
        }

        fn phases(&self) -> Vec<Phase> {
            self.phases.borrow().clone()
        }

        fn run_to_end(&self) {
            let mut guard = 0;
            while self.controller.tick(1.0 / 60.0) {
                guard += 1;
                assert!(guard < 10_000, "reveal never finished");
            }
        }
    }

    // -------------------------------------------------------------------------
    // Gate and reveal
    // -------------------------------------------------------------------------

    mod reveal {
        use super::*;

        #[test]
        fn phases_are_visited_in_order_and_end_ready() {
            let h = Harness::new(&[]);
            assert!(h.controller.request_start());
            h.run_to_end();

            assert_eq!(
                h.phases(),
                vec![Phase::Starting, Phase::Revealing, Phase::Ready]
            );
            let view = h.controller.view();
            assert!(view.show_main_content);
            assert!(!view.show_mask);
            assert_eq!(view.reveal_fraction, 1.0);
        }

        #[test]
        fn duplicate_start_is_ignored() {
            let h = Harness::new(&[]);
            assert!(h.controller.request_start());
            assert!(!h.controller.request_start());

            let prepares = h
                .runtime
                .calls()
                .into_iter()
                .filter(|c| *c == RuntimeCall::Prepare)
                .count();
            assert_eq!(prepares, 1);
        }

        #[test]
        fn nothing_runs_before_start() {
            let h = Harness::new(&[]);
            assert!(!h.controller.tick(1.0));
            assert_eq!(h.controller.phase(), Phase::AwaitingStart);
            assert!(h.runtime.calls().is_empty());
        }

        #[test]
        fn revealing_waits_for_expansion_threshold() {
            let h = Harness::new(&[]);
            h.controller.request_start();

            // Expansion starts at 2.0s and lasts 1.5s: 30% lands at 2.45s.
            h.controller.tick(2.4);
            assert_eq!(h.controller.phase(), Phase::Starting);
            assert!(h.controller.view().show_mask);

            h.controller.tick(0.1);
            assert_eq!(h.controller.phase(), Phase::Revealing);
            assert!(h.controller.view().show_mask);
            assert!(!h.controller.view().show_main_content);
        }

        #[test]
        fn every_stage_completes_once() {
            let h = Harness::new(&[]);
            h.controller.request_start();
            h.run_to_end();

            let completed: Vec<usize> = h
                .runtime
                .calls()
                .into_iter()
                .filter_map(|c| match c {
                    RuntimeCall::Completed(i) => Some(i),
                    _ => None,
                })
                .collect();
            assert_eq!(completed, vec![0, 1, 2, 3]);
        }

        #[test]
        fn setup_failure_skips_to_ready() {
            let runtime = RecordingRuntime {
                fail_prepare: true,
                ..RecordingRuntime::default()
            };
            let h = Harness::with_runtime(&[], runtime);

            assert!(h.controller.request_start());

            assert_eq!(h.controller.phase(), Phase::Ready);
            assert!(!h.controller.is_animating());
            assert!(h.controller.view().show_main_content);
            assert_eq!(h.runtime.calls(), vec![RuntimeCall::Prepare]);
        }

        #[test]
        fn mocked_runtime_failure_is_absorbed() {
            let mut runtime = MockAnimationRuntime::new();
            runtime
                .expect_prepare()
                .times(1)
                .returning(|_| Err(AnimationSetupError::Cancelled));
            let controller = IntroController::new(
                Rc::new(MockPlaybackSource::new()),
                Rc::new(runtime),
                IntroSettings::default(),
            );

            controller.request_start();

            assert_eq!(controller.phase(), Phase::Ready);
        }

        #[test]
        fn compact_viewport_finishes_sooner() {
            let mut runtime = MockAnimationRuntime::new();
            runtime
                .expect_prepare()
                .withf(|timeline: &Timeline| (timeline.total_duration() - 3.3).abs() < 1e-9)
                .times(1)
                .returning(|_| Ok(()));
            runtime.expect_apply().returning(|_, _, _| ());
            runtime.expect_stage_completed().returning(|_| ());
            let controller = IntroController::new(
                Rc::new(MockPlaybackSource::new()),
                Rc::new(runtime),
                IntroSettings {
                    viewport: Viewport::Compact,
                    ..IntroSettings::default()
                },
            );

            controller.request_start();
            controller.tick(4.0);

            assert_eq!(controller.phase(), Phase::Ready);
        }
    }

    // -------------------------------------------------------------------------
    // Audio
    // -------------------------------------------------------------------------

    mod audio {
        use super::*;

        #[tokio::test]
        async fn autoplay_allowed_plays_on_ready() {
            let h = Harness::new(&[PlayOutcome::Started]);
            h.controller.on_audio_ready().await;

            let audio = h.controller.view().audio;
            assert!(audio.ready());
            assert!(audio.playing());
            assert!(!audio.muted());
            assert!(h.controller.view().show_audio_toggle());
            assert_eq!(h.playback.attempts(), 1);
        }

        #[tokio::test]
        async fn repeated_ready_signals_attempt_once() {
            let h = Harness::new(&[PlayOutcome::Blocked]);
            h.controller.on_audio_ready().await;
            h.controller.on_audio_ready().await;

            assert_eq!(h.playback.attempts(), 1);
        }

        #[tokio::test]
        async fn blocked_autoplay_retries_on_first_click_only() {
            let h = Harness::new(&[PlayOutcome::Blocked, PlayOutcome::Started]);
            h.controller.on_audio_ready().await;
            assert!(!h.controller.view().audio.playing());

            h.controller.on_user_interaction().await;
            assert!(h.controller.view().audio.playing());

            h.controller.on_user_interaction().await;
            assert_eq!(h.playback.attempts(), 2);
        }

        #[tokio::test]
        async fn click_before_any_block_does_nothing() {
            let h = Harness::new(&[PlayOutcome::Started]);
            h.controller.on_user_interaction().await;
            assert_eq!(h.playback.attempts(), 0);
        }

        #[tokio::test]
        async fn unsupported_source_never_plays_and_reveal_still_finishes() {
            let h = Harness::new(&[PlayOutcome::Unsupported]);
            h.controller.on_audio_ready().await;
            h.controller.on_user_interaction().await;

            h.controller.request_start();
            h.run_to_end();

            assert_eq!(h.playback.attempts(), 1);
            assert!(!h.controller.view().audio.playing());
            assert_eq!(h.controller.phase(), Phase::Ready);
        }

        #[test]
        fn mute_toggle_never_retries_playback() {
            let mut playback = MockPlaybackSource::new();
            playback.expect_set_muted().times(2).returning(|_| ());
            let controller = IntroController::new(
                Rc::new(playback),
                Rc::new(RecordingRuntime::default()),
                IntroSettings::default(),
            );

            assert!(controller.toggle_mute());
            assert!(!controller.toggle_mute());
            assert!(!controller.view().audio.playing());
        }

        #[tokio::test]
        async fn attempts_use_configured_volume_and_mute() {
            let mut playback = MockPlaybackSource::new();
            playback
                .expect_set_volume()
                .withf(|v| (*v - 0.4).abs() < f64::EPSILON)
                .times(1)
                .returning(|_| ());
            playback
                .expect_set_muted()
                .withf(|m| *m)
                .times(1)
                .returning(|_| ());
            playback
                .expect_attempt_play()
                .times(1)
                .returning(|| Box::pin(async { PlayOutcome::Started }));
            let controller = IntroController::new(
                Rc::new(playback),
                Rc::new(RecordingRuntime::default()),
                IntroSettings {
                    volume: 0.4,
                    start_muted: true,
                    ..IntroSettings::default()
                },
            );

            controller.on_audio_ready().await;

            let audio = controller.view().audio;
            assert!(audio.playing());
            assert!(audio.muted());
            assert!(!audio.audible());
        }

        #[tokio::test]
        async fn media_events_keep_playing_consistent() {
            let h = Harness::new(&[PlayOutcome::Started]);
            h.controller.on_source_playing();
            assert!(!h.controller.view().audio.playing());

            h.controller.on_audio_ready().await;
            h.controller.on_source_paused();
            assert!(!h.controller.view().audio.playing());
            h.controller.on_source_playing();
            assert!(h.controller.view().audio.playing());

            h.controller.on_source_error();
            assert!(!h.controller.view().audio.playing());
        }
    }

    // -------------------------------------------------------------------------
    // Unmount and the frame loop
    // -------------------------------------------------------------------------

    mod lifecycle {
        use super::*;

        #[test]
        fn unmount_mid_reveal_stops_all_runtime_calls() {
            let h = Harness::new(&[]);
            h.controller.request_start();
            h.controller.tick(2.6);
            assert_eq!(h.controller.phase(), Phase::Revealing);

            h.controller.unmount();
            let calls_at_unmount = h.runtime.calls().len();
            assert_eq!(h.runtime.calls().last(), Some(&RuntimeCall::Cancel));

            assert!(!h.controller.tick(1.0));
            assert!(!h.controller.request_start());
            h.controller.unmount();

            assert_eq!(h.runtime.calls().len(), calls_at_unmount);
            assert_eq!(h.controller.phase(), Phase::Revealing);
            assert_eq!(h.phases().last(), Some(&Phase::Revealing));
        }

        #[tokio::test]
        async fn unmount_detaches_audio_fallback() {
            let h = Harness::new(&[PlayOutcome::Blocked, PlayOutcome::Started]);
            h.controller.on_audio_ready().await;
            h.controller.unmount();

            h.controller.on_user_interaction().await;

            assert_eq!(h.playback.attempts(), 1);
            assert_eq!(*h.playback.paused.borrow(), 1);
            assert!(!h.controller.view().audio.ready());
        }

        #[tokio::test]
        async fn frame_loop_runs_reveal_to_ready() {
            let (platform, handles) = create_mock_platform(1280.0);
            let h = Harness::new(&[]);
            h.controller.request_start();

            h.controller
                .run_reveal(&platform, CancellationToken::new())
                .await;

            assert_eq!(h.controller.phase(), Phase::Ready);
            assert!(handles.clock.now() >= 4100);
            assert_eq!(
                h.phases(),
                vec![Phase::Starting, Phase::Revealing, Phase::Ready]
            );
        }

        #[tokio::test]
        async fn cancelled_frame_loop_does_not_tick() {
            let (platform, handles) = create_mock_platform(1280.0);
            let h = Harness::new(&[]);
            h.controller.request_start();
            let token = CancellationToken::new();
            token.cancel();

            h.controller.run_reveal(&platform, token).await;

            assert_eq!(handles.clock.now(), 0);
            assert_eq!(h.controller.phase(), Phase::Starting);
            assert_eq!(h.runtime.calls(), vec![RuntimeCall::Prepare]);
        }
    }
}
