//! Simulated loading bar
//!
//! Used once while the app boots and again by pages that "load" their
//! gallery before showing it.

use dioxus::prelude::*;
use saeweb_domain::{LoadingProgress, LOADING_STEP_MS};

use crate::use_platform;

#[component]
pub fn LoadingScreen(on_complete: EventHandler<()>) -> Element {
    let platform = use_platform();
    let mut progress = use_signal(LoadingProgress::new);

    use_hook(move || {
        spawn(async move {
            loop {
                platform.sleep_ms(LOADING_STEP_MS).await;
                let mut next = *progress.peek();
                if !next.step() {
                    break;
                }
                progress.set(next);
                if next.is_complete() {
                    tracing::debug!("Loading complete");
                    on_complete.call(());
                    break;
                }
            }
        })
    });

    let percent = progress.read().percent();

    rsx! {
        div {
            class: "fixed inset-0 z-[300] bg-black flex flex-col items-center justify-center",
            div {
                class: "w-64 h-1 bg-white/10 overflow-hidden",
                div {
                    class: "h-full bg-white transition-all",
                    style: "width: {percent}%;",
                }
            }
            p {
                class: "mt-4 text-white/70 font-mono text-sm tracking-[0.3em]",
                "LOADING {percent}%"
            }
        }
    }
}

/// Show the loading screen, then `children`
#[component]
pub fn LoadingGate(children: Element) -> Element {
    let mut loaded = use_signal(|| false);

    if loaded() {
        return rsx! { {children} };
    }

    rsx! {
        LoadingScreen { on_complete: move |_| loaded.set(true) }
    }
}
