//! Application services
//!
//! Services depend on port traits, not concrete infrastructure
//! implementations.

pub mod intro_controller;

pub use intro_controller::{IntroController, IntroSettings, FRAME_MS};
