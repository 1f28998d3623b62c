//! PlatformPort - Unified platform services interface
//!
//! This trait provides a unified interface for all platform-specific operations
//! needed by the UI and application layers. The concrete implementation
//! (`Platform`) lives in `state/platform.rs`.

use std::{future::Future, pin::Pin};

/// Unified platform services port
///
/// Use via Dioxus context: `use_context::<Arc<dyn PlatformPort>>()`
pub trait PlatformPort: Send + Sync {
    // -------------------------------------------------------------------------
    // Time operations
    // -------------------------------------------------------------------------

    /// Get current time in milliseconds
    fn now_millis(&self) -> u64;

    // -------------------------------------------------------------------------
    // Sleep operations
    // -------------------------------------------------------------------------

    /// Sleep for the given number of milliseconds
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;

    // -------------------------------------------------------------------------
    // Document operations
    // -------------------------------------------------------------------------

    /// Set the browser page title
    fn set_page_title(&self, title: &str);

    // -------------------------------------------------------------------------
    // Viewport operations
    // -------------------------------------------------------------------------

    /// Current layout width in CSS pixels
    fn viewport_width(&self) -> f64;
}
