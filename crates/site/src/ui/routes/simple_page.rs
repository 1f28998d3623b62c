//! Placeholder pages that only carry a heading and the home button

use dioxus::prelude::*;
use saeweb_domain::Page;

use super::use_page_title;
use crate::ui::presentation::components::HomeButton;

#[component]
fn SimplePage(page: Page) -> Element {
    use_page_title(page);
    let title = page.title();

    rsx! {
        HomeButton {}
        div {
            class: "min-h-screen bg-black text-white flex flex-col items-center justify-center",
            h1 { class: "text-4xl font-bold mb-4", "{title} Page" }
            p { class: "text-gray-400", "Welcome to the {title} page!" }
        }
    }
}

#[component]
pub fn Sponsors() -> Element {
    rsx! { SimplePage { page: Page::Sponsors } }
}

#[component]
pub fn Team() -> Element {
    rsx! { SimplePage { page: Page::Team } }
}

#[component]
pub fn Creators() -> Element {
    rsx! { SimplePage { page: Page::Creators } }
}

#[component]
pub fn Events() -> Element {
    rsx! { SimplePage { page: Page::Events } }
}
