use dioxus::prelude::*;
use saeweb_domain::Page;

use super::use_page_title;
use crate::ui::presentation::components::Hero;

#[component]
pub fn Home() -> Element {
    use_page_title(Page::Home);

    rsx! {
        div {
            class: "w-screen h-screen",
            Hero {}
        }
    }
}
