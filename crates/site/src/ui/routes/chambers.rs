//! The four chambers of the society

use dioxus::prelude::*;
use saeweb_domain::{Page, CHAMBERS};

use super::use_page_title;
use crate::ui::presentation::components::{HomeButton, LoadingGate};

#[component]
pub fn Chambers() -> Element {
    use_page_title(Page::Chambers);

    rsx! {
        LoadingGate {
            HomeButton {}
            div {
                class: "min-h-screen bg-black text-white px-6 py-24",
                div {
                    class: "text-center mb-16",
                    h1 { class: "text-5xl font-black tracking-wider", "4 CHAMBERS" }
                    p { class: "mt-4 text-gray-400 tracking-[0.3em] text-sm", "SOCIETY OF AUTOMOTIVE ENGINEERS" }
                }
                div {
                    class: "max-w-6xl mx-auto grid gap-8 sm:grid-cols-2",
                    for chamber in CHAMBERS {
                        div {
                            key: "{chamber.slug}",
                            class: "border border-white/20 rounded-2xl p-8 bg-white/5 hover:bg-white/10 transition-colors",
                            h2 { class: "text-3xl font-bold tracking-widest", "{chamber.title}" }
                            p { class: "mt-3 text-gray-400 text-sm tracking-wider", "{chamber.tagline}" }
                            img {
                                class: "mt-6 h-24 object-contain",
                                src: "/chambers/{chamber.slug}.png",
                                alt: "{chamber.title} Logo",
                            }
                        }
                    }
                }
            }
        }
    }
}
