//! WASM platform implementations
//!
//! Provides platform-specific implementations for the browser using
//! web-sys, js-sys and gloo-timers.

use crate::ports::outbound::platform::{
    DocumentProvider, SleepProvider, TimeProvider, ViewportProvider,
};
use crate::state::Platform;
use std::{future::Future, pin::Pin};

/// Width assumed when the window cannot be queried
const FALLBACK_WIDTH: f64 = 1024.0;

/// WASM time provider using `Date.now()`
#[derive(Clone, Default)]
pub struct WasmTimeProvider;

impl TimeProvider for WasmTimeProvider {
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

/// WASM sleep provider using gloo-timers
#[derive(Clone, Default)]
pub struct WasmSleepProvider;

impl SleepProvider for WasmSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        Box::pin(gloo_timers::future::TimeoutFuture::new(ms))
    }
}

/// WASM document provider using web-sys
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

/// WASM viewport provider reading `window.innerWidth`
#[derive(Clone, Default)]
pub struct WasmViewportProvider;

impl ViewportProvider for WasmViewportProvider {
    fn viewport_width(&self) -> f64 {
        window_width().unwrap_or(FALLBACK_WIDTH)
    }
}

/// Current `window.innerWidth`, if a window exists
pub fn window_width() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}

/// Create platform services for WASM
pub fn create_platform(_viewport_width: f64) -> Platform {
    Platform::new(
        WasmTimeProvider,
        WasmSleepProvider,
        WasmDocumentProvider,
        WasmViewportProvider,
    )
}
