//! "Learn more" overlay with the society's philosophy and divisions

use dioxus::prelude::*;

use crate::ui::presentation::state::use_intro_state;

const PHILOSOPHY: [&str; 4] = [
    "Hands-on learning that transcends textbooks",
    "Competition-driven excellence",
    "Industry collaboration and mentorship",
    "Innovation through research and development",
];

const DIVISIONS: [(&str, &str); 4] = [
    ("BAJA", "Conquer Every Terrain"),
    ("SUPRA", "Speed Redefined"),
    ("Aero", "Mastering Flight"),
    ("DISCO", "Digital Revolution"),
];

#[component]
pub fn InfoButton() -> Element {
    let intro = use_intro_state();
    let mut info_open = intro.info_open;

    rsx! {
        button {
            class: "absolute bottom-6 right-6 z-30 px-6 py-3 border border-white/40 bg-black/70 text-white text-sm tracking-widest",
            onclick: move |evt| {
                evt.stop_propagation();
                info_open.set(true);
            },
            "LEARN MORE"
        }
    }
}

#[component]
pub fn InfoOverlay() -> Element {
    let intro = use_intro_state();
    let mut info_open = intro.info_open;

    if !info_open() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fixed inset-0 z-[250] bg-black/90 flex items-center justify-center p-6",
            onclick: move |evt| {
                evt.stop_propagation();
                info_open.set(false);
            },
            div {
                class: "max-w-3xl w-full bg-gray-900 border border-white/20 rounded-xl p-8 text-white",
                onclick: move |evt| evt.stop_propagation(),
                div {
                    class: "flex justify-between items-center mb-6",
                    h2 { class: "text-2xl font-bold tracking-wider", "OUR PHILOSOPHY" }
                    button {
                        class: "text-white/60 hover:text-white text-2xl",
                        onclick: move |_| info_open.set(false),
                        "×"
                    }
                }
                ul {
                    class: "space-y-2 mb-8 text-gray-300",
                    for line in PHILOSOPHY {
                        li { key: "{line}", "▸ {line}" }
                    }
                }
                div {
                    class: "grid grid-cols-2 gap-4",
                    for (name, motto) in DIVISIONS {
                        div {
                            key: "{name}",
                            class: "border border-white/10 rounded-lg p-4",
                            h4 { class: "font-bold", "{name}" }
                            p { class: "text-gray-400 text-sm", "{motto}" }
                        }
                    }
                }
            }
        }
    }
}
