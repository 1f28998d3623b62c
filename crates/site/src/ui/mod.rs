use crate::ports::outbound::PlatformPort;
use dioxus::prelude::*;
use std::sync::Arc;

pub mod presentation;
pub mod routes;

pub use crate::config::ShellKind;
pub use routes::Route;

use presentation::components::{ErrorPrompt, LoadingGate};
use presentation::state::NavState;

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/site/src/main.rs`).
    let shell = use_context::<ShellKind>();

    use_context_provider(NavState::new);

    rsx! {
        document::Stylesheet {
            href: asset!("/assets/css/site.css"),
        }

        ErrorBoundary {
            handle_error: |errors: ErrorContext| {
                tracing::error!(?errors, "Render failed");
                rsx! { ErrorPrompt {} }
            },
            LoadingGate {
                {
                    match shell {
                        ShellKind::Desktop => rsx! {
                            DesktopShell {
                                Router::<routes::Route> {}
                            }
                        },
                        ShellKind::Mobile => rsx! {
                            MobileShell {
                                Router::<routes::Route> {}
                            }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn DesktopShell(children: Element) -> Element {
    rsx! {
        div {
            style: "width: 100vw; height: 100vh; overflow-x: hidden; background: #000;",
            {children}
        }
    }
}

#[component]
fn MobileShell(children: Element) -> Element {
    rsx! {
        // Pages scroll vertically on narrow screens; the hero still fills the viewport.
        div {
            style: "width: 100vw; min-height: 100vh; overflow-x: hidden; overflow-y: auto; background: #000; touch-action: manipulation;",
            {children}
        }
    }
}
