//! Floating navigation menu state

use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct NavState {
    pub open: Signal<bool>,
}

impl NavState {
    pub fn new() -> Self {
        Self {
            open: Signal::new(false),
        }
    }

    pub fn toggle(&mut self) {
        let next = !*self.open.peek();
        self.open.set(next);
    }

    pub fn close(&mut self) {
        self.open.set(false);
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_nav_state() -> NavState {
    use_context::<NavState>()
}
