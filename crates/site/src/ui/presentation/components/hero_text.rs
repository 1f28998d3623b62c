use dioxus::prelude::*;

#[component]
pub fn HeroText() -> Element {
    rsx! {
        div {
            class: "relative flex flex-col items-center justify-center h-full text-center px-4 z-20",
            div {
                class: "flex justify-center items-center space-x-4 mb-6",
                for letter in ["S", "A", "E"] {
                    span {
                        key: "{letter}",
                        class: "font-black text-[8rem] sm:text-[12rem] leading-none text-white",
                        style: "font-family: Impact, Arial Black, sans-serif;",
                        "{letter}"
                    }
                }
            }
            h3 {
                class: "text-xl md:text-2xl font-bold tracking-wider text-white",
                "SOCIETY OF AUTOMOTIVE ENGINEERS"
            }
            div {
                class: "flex justify-center items-center mt-4 space-x-3 text-white",
                span { "★" }
                div { class: "w-24 h-0.5 bg-white/60" }
                span { class: "text-3xl", "★" }
                div { class: "w-24 h-0.5 bg-white/60" }
                span { "★" }
            }
        }
    }
}
