use dioxus::prelude::*;

/// Fallback shown when a render below the root boundary fails
#[component]
pub fn ErrorPrompt() -> Element {
    rsx! {
        div {
            class: "fixed inset-0 z-[400] bg-black flex items-center justify-center p-6",
            div {
                class: "max-w-md w-full border border-red-500/50 rounded-xl p-8 text-center",
                h2 { class: "text-red-400 text-2xl font-bold tracking-widest mb-4", "SYSTEM ERROR" }
                p { class: "text-gray-300 mb-6", "Something went wrong. Please refresh the page." }
                button {
                    class: "px-8 py-3 border border-white text-white tracking-widest hover:bg-white hover:text-black",
                    onclick: move |_| {
                        // Re-run the whole app from scratch.
                        let _ = document::eval("window.location.reload()");
                    },
                    "RELOAD PAGE"
                }
            }
        }
    }
}
