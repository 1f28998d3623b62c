//! Hero section of the home page
//!
//! Owns the intro controller for one mount: builds it, wires the audio
//! element's media events into it, runs the reveal frame loop once the
//! user starts, and tears everything down on unmount.

use std::rc::Rc;

use dioxus::prelude::*;
use saeweb_domain::{Phase, Viewport};
use tokio_util::sync::CancellationToken;

use super::{
    AudioToggle, HeroText, Hud, InfoButton, InfoOverlay, MaskOverlay, MiniMap, StartScreen,
};
use crate::application::services::{IntroController, IntroSettings};
use crate::config::AudioConfig;
use crate::infrastructure::{DomAudioPlayback, StyleTable, HERO_AUDIO_ID};
use crate::ui::presentation::state::IntroState;
use crate::use_platform;

const HERO_BACKGROUND: &str = "/hero-background.webp";

#[component]
pub fn Hero() -> Element {
    let platform = use_platform();
    let audio_config = use_context::<AudioConfig>();

    let viewport_width = platform.viewport_width();
    let volume = audio_config.volume;
    let start_muted = audio_config.start_muted;
    let intro = use_context_provider(move || {
        let styles = StyleTable::new();
        let settings = IntroSettings {
            viewport: Viewport::from_width(viewport_width),
            volume,
            start_muted,
        };
        let controller = IntroController::new(
            Rc::new(DomAudioPlayback::default()),
            Rc::new(styles.clone()),
            settings,
        );
        IntroState::new(controller, styles)
    });

    let cancel = use_hook(CancellationToken::new);

    // Start the frame loop the first time the gate opens.
    let mut loop_started = use_signal(|| false);
    {
        let intro = intro.clone();
        let cancel = cancel.clone();
        let platform = platform.clone();
        use_effect(move || {
            let phase = intro.view.read().phase;
            if phase != Phase::Starting || *loop_started.peek() {
                return;
            }
            loop_started.set(true);
            let controller = intro.controller().clone();
            let cancel = cancel.clone();
            let platform = platform.clone();
            spawn(async move {
                controller.run_reveal(&*platform, cancel).await;
            });
        });
    }

    {
        let controller = intro.controller().clone();
        let cancel = cancel.clone();
        use_drop(move || {
            cancel.cancel();
            controller.unmount();
        });
    }

    let view = *intro.view.read();
    let on_ready = intro.controller().clone();
    let on_ready_through = intro.controller().clone();
    let on_click = intro.controller().clone();
    let on_play = intro.controller().clone();
    let on_pause = intro.controller().clone();
    let on_error = intro.controller().clone();

    rsx! {
        div {
            class: "relative w-full h-full overflow-hidden bg-black",
            // Any click counts as the interaction that unlocks audio.
            onclick: move |_| {
                let controller = on_click.clone();
                spawn(async move {
                    controller.on_user_interaction().await;
                });
            },

            audio {
                id: HERO_AUDIO_ID,
                src: "{audio_config.src}",
                preload: "auto",
                r#loop: true,
                class: "hidden",
                oncanplay: move |_| {
                    let controller = on_ready.clone();
                    spawn(async move {
                        controller.on_audio_ready().await;
                    });
                },
                oncanplaythrough: move |_| {
                    let controller = on_ready_through.clone();
                    spawn(async move {
                        controller.on_audio_ready().await;
                    });
                },
                onplay: move |_| on_play.on_source_playing(),
                onpause: move |_| on_pause.on_source_paused(),
                onerror: move |_| on_error.on_source_error(),
            }

            // Real hero background, fading in under the mask
            div {
                class: "absolute inset-0 bg-cover bg-center",
                style: "background-image: url({HERO_BACKGROUND}); opacity: {view.content_opacity};",
            }

            if view.show_main_content {
                Hud {}
                HeroText {}
                MiniMap {}
                InfoButton {}
                if view.show_audio_toggle() {
                    AudioToggle {}
                }
            }

            MaskOverlay { background: HERO_BACKGROUND }

            if view.show_start_screen {
                StartScreen {}
            }

            InfoOverlay {}
        }
    }
}
