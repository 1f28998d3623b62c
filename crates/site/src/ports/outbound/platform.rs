//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. Application/presentation code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with fake implementations (virtual clocks)
//!
//! NOTE: The `Platform` struct (DI container) that aggregates these traits
//! lives in `state/platform.rs`, not here. Ports contain only trait definitions.

use std::{future::Future, pin::Pin};

/// Time operations abstraction
pub trait TimeProvider: Clone + 'static {
    /// Get current time in milliseconds since an arbitrary, monotonic origin
    fn now_millis(&self) -> u64;
}

/// Async sleep abstraction
///
/// Used to avoid `#[cfg]` branches in UI code (animation frames, loading bars).
pub trait SleepProvider: Clone + 'static {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

/// Browser document operations (page title, etc.)
pub trait DocumentProvider: Clone + 'static {
    /// Set the browser page title (window title on desktop)
    fn set_page_title(&self, title: &str);
}

/// Viewport metrics
pub trait ViewportProvider: Clone + 'static {
    /// Current layout width in CSS pixels
    fn viewport_width(&self) -> f64;
}
