//! Chapter badge in the top-left corner

use dioxus::prelude::*;

#[component]
pub fn Hud() -> Element {
    rsx! {
        div {
            class: "absolute top-6 left-6 z-20 hidden sm:block",
            div {
                class: "w-72 h-32 rounded-xl border border-gray-600/50 bg-black/80 p-4 flex items-center space-x-3",
                div {
                    class: "w-12 h-12 rounded-full border border-gray-600 bg-gray-700 flex items-center justify-center",
                    span { class: "text-gray-300 text-xs font-bold", "SAE" }
                }
                div {
                    h3 { class: "text-white font-bold text-sm", "Society of Automotive Engineers" }
                    p { class: "text-gray-400 text-xs", "Chief Engineer" }
                    p { class: "text-gray-500 text-xs", "MMMUT CHAPTER" }
                }
            }
        }
    }
}
