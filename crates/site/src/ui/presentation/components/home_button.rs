use dioxus::prelude::*;

use crate::ui::routes::Route;

/// Fixed link back to the home page
#[component]
pub fn HomeButton() -> Element {
    rsx! {
        Link {
            to: Route::Home {},
            class: "fixed top-6 left-6 z-[100] px-5 py-2 border border-white/40 bg-black/70 text-white text-sm tracking-widest",
            "HOME"
        }
    }
}
