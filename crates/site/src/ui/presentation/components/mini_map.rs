//! Decorative mini-map in the bottom-left corner

use dioxus::prelude::*;

#[component]
pub fn MiniMap() -> Element {
    rsx! {
        div {
            class: "absolute bottom-6 left-6 z-20 w-48 h-32 rounded-lg overflow-hidden border border-white/20 bg-gray-900/80",
            div {
                class: "absolute top-2 right-2 text-white text-xs font-bold",
                "N"
            }
            // Player arrow
            div {
                class: "absolute left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2",
                style: "width: 0; height: 0; border-left: 8px solid transparent; border-right: 8px solid transparent; border-bottom: 16px solid white;",
            }
            div {
                class: "absolute left-1/4 top-1/4 w-5 h-5 rounded-full bg-yellow-400 text-black text-xs font-bold flex items-center justify-center animate-bounce",
                "S"
            }
        }
    }
}
