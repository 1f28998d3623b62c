//! SAE Web site crate.
//!
//! UI, application logic and platform adapters for the society website.
//! Web and desktop builds are selected at compile time via `cfg`.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod state;
pub mod ui;

pub use ui::presentation;
pub use ui::routes;

// Re-export commonly used entrypoints
pub use ui::app;
pub use ui::{use_platform, Platform, Route, ShellKind};
