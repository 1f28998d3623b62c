//! Desktop platform implementations
//!
//! Provides platform-specific implementations for desktop using
//! the standard library and tokio.

use crate::ports::outbound::platform::{
    DocumentProvider, SleepProvider, TimeProvider, ViewportProvider,
};
use crate::state::Platform;
use std::time::Instant;
use std::{future::Future, pin::Pin};

/// Default window width when nothing else is known
pub const DEFAULT_DESKTOP_WIDTH: f64 = 1280.0;

/// Desktop time provider, monotonic from process start
#[derive(Clone)]
pub struct DesktopTimeProvider {
    origin: Instant,
}

impl Default for DesktopTimeProvider {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl TimeProvider for DesktopTimeProvider {
    fn now_millis(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Desktop sleep provider using tokio timer
#[derive(Clone, Default)]
pub struct DesktopSleepProvider;

impl SleepProvider for DesktopSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async move {
            tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
        })
    }
}

/// Desktop document provider, forwards the title to the webview window
#[derive(Clone, Default)]
pub struct DesktopDocumentProvider;

impl DocumentProvider for DesktopDocumentProvider {
    fn set_page_title(&self, title: &str) {
        dioxus::document::document().set_title(title.to_string());
    }
}

/// Desktop viewport provider with a configured width
#[derive(Clone)]
pub struct DesktopViewportProvider {
    width: f64,
}

impl DesktopViewportProvider {
    pub fn new(width: f64) -> Self {
        Self { width }
    }
}

impl Default for DesktopViewportProvider {
    fn default() -> Self {
        Self::new(DEFAULT_DESKTOP_WIDTH)
    }
}

impl ViewportProvider for DesktopViewportProvider {
    fn viewport_width(&self) -> f64 {
        self.width
    }
}

/// Create platform services for desktop
pub fn create_platform(viewport_width: f64) -> Platform {
    Platform::new(
        DesktopTimeProvider::default(),
        DesktopSleepProvider,
        DesktopDocumentProvider,
        DesktopViewportProvider::new(viewport_width),
    )
}
