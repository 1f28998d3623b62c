//! Presentation state held in Dioxus signals.

mod intro_state;
mod nav_state;

pub use intro_state::{use_intro_state, IntroState};
pub use nav_state::{use_nav_state, NavState};
