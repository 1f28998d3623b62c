//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates all platform-specific service implementations behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` in infrastructure/platform/desktop.rs or wasm.rs
//! - Injected into Dioxus context by the composition root as `Arc<dyn PlatformPort>`
//! - Accessed in UI via `use_platform()`

use std::{future::Future, pin::Pin, sync::Arc};

use crate::ports::outbound::{
    DocumentProvider, PlatformPort, SleepProvider, TimeProvider, ViewportProvider,
};

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    time: Arc<dyn TimeProviderDyn>,
    sleep: Arc<dyn SleepProviderDyn>,
    document: Arc<dyn DocumentProviderDyn>,
    viewport: Arc<dyn ViewportProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage (need Send + Sync for Dioxus context)
// =============================================================================

trait TimeProviderDyn: Send + Sync {
    fn now_millis(&self) -> u64;
}

trait SleepProviderDyn: Send + Sync {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

trait DocumentProviderDyn: Send + Sync {
    fn set_page_title(&self, title: &str);
}

trait ViewportProviderDyn: Send + Sync {
    fn viewport_width(&self) -> f64;
}

// =============================================================================
// Blanket implementations - convert port traits to dyn-safe wrappers
// =============================================================================

impl<T: TimeProvider + Send + Sync> TimeProviderDyn for T {
    fn now_millis(&self) -> u64 {
        TimeProvider::now_millis(self)
    }
}

impl<T: SleepProvider + Send + Sync> SleepProviderDyn for T {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        SleepProvider::sleep_ms(self, ms)
    }
}

impl<T: DocumentProvider + Send + Sync> DocumentProviderDyn for T {
    fn set_page_title(&self, title: &str) {
        DocumentProvider::set_page_title(self, title)
    }
}

impl<T: ViewportProvider + Send + Sync> ViewportProviderDyn for T {
    fn viewport_width(&self) -> f64 {
        ViewportProvider::viewport_width(self)
    }
}

// =============================================================================
// Platform implementation
// =============================================================================

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<Tm, Sl, D, V>(time: Tm, sleep: Sl, document: D, viewport: V) -> Self
    where
        Tm: TimeProvider + Send + Sync,
        Sl: SleepProvider + Send + Sync,
        D: DocumentProvider + Send + Sync,
        V: ViewportProvider + Send + Sync,
    {
        Self {
            time: Arc::new(time),
            sleep: Arc::new(sleep),
            document: Arc::new(document),
            viewport: Arc::new(viewport),
        }
    }
}

impl PlatformPort for Platform {
    fn now_millis(&self) -> u64 {
        self.time.now_millis()
    }

    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        self.sleep.sleep_ms(ms)
    }

    fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }

    fn viewport_width(&self) -> f64 {
        self.viewport.viewport_width()
    }
}
