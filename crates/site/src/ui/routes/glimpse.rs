//! Photo gallery page

use dioxus::prelude::*;
use saeweb_domain::Page;

use super::use_page_title;
use crate::ui::presentation::components::{HomeButton, LoadingGate};

/// Gallery tiles: image path and grid span classes.
const GALLERY: [(&str, &str); 6] = [
    ("/glimpse/IMG.01.jpg", "col-span-2 row-span-2"),
    ("/glimpse/IMG.02.jpg", "col-span-2 row-span-1"),
    ("/glimpse/IMG.03.jpg", "col-span-1 row-span-2"),
    ("/glimpse/IMG.04.jpg", "col-span-2 row-span-1"),
    ("/glimpse/IMG.05.jpg", "col-span-1 row-span-1"),
    ("/glimpse/IMG.06.jpg", "col-span-1 row-span-1"),
];

const STORY_FRAMES: [&str; 4] = [
    "/glimpse/IMG.07.jpg",
    "/glimpse/IMG.08.jpg",
    "/glimpse/IMG.09.jpg",
    "/glimpse/IMG.10.jpg",
];

#[component]
pub fn Glimpse() -> Element {
    use_page_title(Page::Glimpse);

    rsx! {
        LoadingGate {
            HomeButton {}
            div {
                class: "min-h-screen bg-black text-white",
                div {
                    class: "max-w-7xl mx-auto px-6 py-24 space-y-32",

                    section {
                        class: "grid lg:grid-cols-2 gap-10 lg:gap-20 items-center",
                        div {
                            class: "grid grid-cols-3 gap-4 p-8 rounded-3xl bg-white/10",
                            for (src, span) in GALLERY {
                                div {
                                    key: "{src}",
                                    class: "{span} rounded-2xl overflow-hidden bg-gray-800",
                                    img { class: "w-full h-full object-cover", src: "{src}", alt: "Glimpse" }
                                }
                            }
                        }
                        div {
                            class: "space-y-8",
                            h1 { class: "text-5xl lg:text-6xl font-light", "Glimpses" }
                            p { class: "text-sm uppercase tracking-wider text-gray-500", "Collection 2024" }
                            p {
                                class: "text-xl text-gray-300 font-light",
                                "A curated collection of moments that define our journey, captured in fleeting glimpses of beauty, innovation, and human connection."
                            }
                            p {
                                class: "text-lg text-gray-400 font-light",
                                "Each frame tells a story of discovery, where light meets purpose and vision transforms into reality."
                            }
                            p {
                                class: "text-base text-gray-500",
                                "Explore the intersection of artistry and authenticity, where every detail has been thoughtfully considered and every moment carefully preserved."
                            }
                        }
                    }

                    section {
                        class: "grid md:grid-cols-2 gap-16 text-center",
                        div {
                            h2 { class: "text-3xl font-light mb-6", "Moments of Creation" }
                            p {
                                class: "text-gray-400",
                                "\"Captures the raw energy of creation, where ideas take shape, hands build dreams, and challenges spark innovation.\""
                            }
                        }
                        div {
                            h2 { class: "text-3xl font-light mb-6", "Spirit of Togetherness" }
                            p {
                                class: "text-gray-400",
                                "\"The story unfolds through bonds of friendship, shared laughter, and collective spirit.\""
                            }
                        }
                    }

                    section {
                        class: "grid lg:grid-cols-2 gap-10 lg:gap-20 items-center",
                        div {
                            class: "space-y-8",
                            h2 { class: "text-5xl font-light", "Our Story in Frames" }
                            p { class: "text-sm uppercase tracking-wider text-gray-500", "Highlights 2024" }
                            p {
                                class: "text-xl text-gray-300 font-light",
                                "Moments captured with care, preserving the beauty of experiences."
                            }
                            p {
                                class: "text-lg text-gray-400 font-light",
                                "Through these glimpses, we celebrate creativity, purpose, and the endless pursuit of discovery."
                            }
                        }
                        div {
                            class: "grid grid-cols-2 gap-4",
                            for src in STORY_FRAMES {
                                img {
                                    key: "{src}",
                                    class: "w-full h-48 object-cover rounded-2xl",
                                    src: "{src}",
                                    alt: "Story frame",
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
