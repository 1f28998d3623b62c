//! Floating navigation menu

use dioxus::prelude::*;
use saeweb_domain::Page;

use crate::ui::presentation::state::use_nav_state;
use crate::ui::routes::Route;

#[component]
pub fn FloatingNav() -> Element {
    let mut menu = use_nav_state();
    let open = (menu.open)();

    rsx! {
        div {
            class: "fixed top-6 right-24 z-[120]",
            button {
                class: "px-5 py-2 border border-white/40 bg-black/70 text-white text-sm tracking-widest",
                onclick: move |evt| {
                    evt.stop_propagation();
                    menu.toggle();
                },
                if open { "CLOSE" } else { "MENU" }
            }
            if open {
                nav {
                    class: "mt-2 flex flex-col bg-black/90 border border-white/20 rounded-lg overflow-hidden",
                    for page in Page::nav_items() {
                        Link {
                            key: "{page}",
                            to: Route::from(page),
                            class: "px-6 py-3 text-white text-sm tracking-widest hover:bg-white hover:text-black",
                            onclick: move |_| menu.close(),
                            {page.nav_label()}
                        }
                    }
                }
            }
        }
    }
}
