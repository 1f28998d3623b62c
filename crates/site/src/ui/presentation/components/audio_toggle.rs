use dioxus::prelude::*;

use crate::ui::presentation::state::use_intro_state;

/// Mute button, offered once the soundtrack plays
#[component]
pub fn AudioToggle() -> Element {
    let intro = use_intro_state();
    let muted = intro.view.read().audio.muted();
    let (icon, label) = if muted {
        ("🔇", "Unmute soundtrack")
    } else {
        ("🔊", "Mute soundtrack")
    };

    rsx! {
        button {
            class: "absolute top-6 right-6 z-30 w-12 h-12 rounded-full bg-black/70 border border-white/30 text-xl text-white",
            title: label,
            onclick: move |evt| {
                evt.stop_propagation();
                intro.controller().toggle_mute();
            },
            "{icon}"
        }
    }
}
