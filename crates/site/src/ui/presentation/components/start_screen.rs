//! Start screen shown until the visitor opens the gate

use dioxus::prelude::*;

use crate::ui::presentation::state::use_intro_state;

#[component]
pub fn StartScreen() -> Element {
    let intro = use_intro_state();

    rsx! {
        div {
            class: "fixed inset-0 z-[200] bg-black flex items-center justify-center",
            div {
                class: "text-center max-w-4xl px-6 flex flex-col justify-center min-h-screen",
                div {
                    class: "text-white/60 text-sm font-mono tracking-[0.5em] mb-8 uppercase",
                    "Society of Automotive Engineers"
                }
                h1 {
                    class: "text-white text-4xl sm:text-6xl font-bold mb-12 leading-tight",
                    "Ready to see the "
                    br {}
                    span { class: "font-black", "NEXT LEVEL" }
                    br {}
                    " experience?"
                }
                button {
                    class: "mx-auto px-12 py-4 border-2 border-white text-white font-bold tracking-widest hover:bg-white hover:text-black transition-colors",
                    onclick: move |_| {
                        intro.controller().request_start();
                    },
                    "LET'S BEGIN"
                }
                p {
                    class: "text-white/40 text-xs mt-6 tracking-wider",
                    "Press to begin your journey"
                }
                p {
                    class: "text-white/30 text-xs mt-16",
                    "MMMUT © 2024"
                }
            }
        }
    }
}
