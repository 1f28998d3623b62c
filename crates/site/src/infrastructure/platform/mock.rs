//! Virtual-clock platform for tests
//!
//! `sleep_ms` never waits: it moves the shared clock forward and resolves
//! immediately, so animation loops run to completion deterministically.

use crate::ports::outbound::platform::{
    DocumentProvider, SleepProvider, TimeProvider, ViewportProvider,
};
use crate::state::Platform;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::{future::Future, pin::Pin};

/// Shared virtual clock
#[derive(Clone, Default)]
pub struct MockClock {
    now_ms: Arc<AtomicU64>,
}

impl MockClock {
    pub fn now(&self) -> u64 {
        self.now_ms.load(Ordering::SeqCst)
    }

    pub fn advance(&self, ms: u64) {
        self.now_ms.fetch_add(ms, Ordering::SeqCst);
    }
}

impl TimeProvider for MockClock {
    fn now_millis(&self) -> u64 {
        self.now()
    }
}

impl SleepProvider for MockClock {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        self.advance(ms);
        Box::pin(std::future::ready(()))
    }
}

/// Records every title it is given
#[derive(Clone, Default)]
pub struct MockDocumentProvider {
    titles: Arc<Mutex<Vec<String>>>,
}

impl MockDocumentProvider {
    pub fn titles(&self) -> Vec<String> {
        self.titles.lock().map(|t| t.clone()).unwrap_or_default()
    }
}

impl DocumentProvider for MockDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Ok(mut titles) = self.titles.lock() {
            titles.push(title.to_string());
        }
    }
}

#[derive(Clone)]
pub struct MockViewportProvider {
    pub width: f64,
}

impl ViewportProvider for MockViewportProvider {
    fn viewport_width(&self) -> f64 {
        self.width
    }
}

/// Handles kept by a test to inspect the mock platform
#[derive(Clone, Default)]
pub struct MockPlatformHandles {
    pub clock: MockClock,
    pub document: MockDocumentProvider,
}

/// Create a virtual-clock platform of the given width
pub fn create_mock_platform(width: f64) -> (Platform, MockPlatformHandles) {
    let handles = MockPlatformHandles::default();
    let platform = Platform::new(
        handles.clock.clone(),
        handles.clock.clone(),
        handles.document.clone(),
        MockViewportProvider { width },
    );
    (platform, handles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::PlatformPort;

    #[tokio::test]
    async fn sleeping_moves_the_shared_clock() {
        let (platform, handles) = create_mock_platform(800.0);
        assert_eq!(platform.now_millis(), 0);

        platform.sleep_ms(16).await;
        platform.sleep_ms(16).await;

        assert_eq!(platform.now_millis(), 32);
        assert_eq!(handles.clock.now(), 32);
    }

    #[test]
    fn titles_are_recorded_in_order() {
        let (platform, handles) = create_mock_platform(800.0);
        platform.set_page_title("SAE | Team");
        platform.set_page_title("SAE | Events");

        assert_eq!(handles.document.titles(), vec!["SAE | Team", "SAE | Events"]);
        assert_eq!(platform.viewport_width(), 800.0);
    }
}
