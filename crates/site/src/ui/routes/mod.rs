//! Route surface of the site
//!
//! Every page sits under [`SiteLayout`], which carries the floating menu.
//! Unknown paths are caught by `NotFound` and render the home page.

use dioxus::prelude::*;
use saeweb_domain::Page;

use crate::ui::presentation::components::FloatingNav;
use crate::use_platform;

mod chambers;
mod glimpse;
mod home;
mod simple_page;

use chambers::Chambers;
use glimpse::Glimpse;
use home::Home;
use simple_page::{Creators, Events, Sponsors, Team};

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/sponsors")]
        Sponsors {},
        #[route("/team")]
        Team {},
        #[route("/chambers")]
        Chambers {},
        #[route("/glimpse")]
        Glimpse {},
        #[route("/creators")]
        Creators {},
        #[route("/events")]
        Events {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Route::Home {},
            Page::Sponsors => Route::Sponsors {},
            Page::Team => Route::Team {},
            Page::Chambers => Route::Chambers {},
            Page::Glimpse => Route::Glimpse {},
            Page::Creators => Route::Creators {},
            Page::Events => Route::Events {},
        }
    }
}

impl Route {
    /// Page rendered for this route
    pub fn page(&self) -> Page {
        match self {
            Route::Home {} | Route::NotFound { .. } => Page::Home,
            Route::Sponsors {} => Page::Sponsors,
            Route::Team {} => Page::Team,
            Route::Chambers {} => Page::Chambers,
            Route::Glimpse {} => Page::Glimpse,
            Route::Creators {} => Page::Creators,
            Route::Events {} => Page::Events,
        }
    }
}

#[component]
fn SiteLayout() -> Element {
    rsx! {
        FloatingNav {}
        Outlet::<Route> {}
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "Unknown path, showing home");
    rsx! {
        Home {}
    }
}

/// Keep the document title in sync with the mounted page
pub(crate) fn use_page_title(page: Page) {
    let platform = use_platform();
    use_effect(move || {
        platform.set_page_title(&page.document_title());
    });
}
