//! Hero intro state
//!
//! Provided by the `Hero` component for its own subtree. The controller
//! pushes every new [`IntroView`] into `view`; components only read it and
//! talk back through the controller.

use dioxus::prelude::*;
use saeweb_domain::IntroView;

use crate::application::services::IntroController;
use crate::infrastructure::StyleTable;

#[derive(Clone)]
pub struct IntroState {
    /// Latest snapshot published by the controller
    pub view: Signal<IntroView>,
    /// "Learn more" overlay visibility
    pub info_open: Signal<bool>,
    controller: IntroController,
    styles: StyleTable,
}

impl IntroState {
    /// Wire `controller` to a fresh view signal. Must run inside a Dioxus scope.
    pub fn new(controller: IntroController, styles: StyleTable) -> Self {
        let view = Signal::new(controller.view());
        controller.set_observer(move |next| {
            let mut view = view;
            view.set(next);
        });
        Self {
            view,
            info_open: Signal::new(false),
            controller,
            styles,
        }
    }

    pub fn controller(&self) -> &IntroController {
        &self.controller
    }

    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }
}

/// Hook to access the intro state of the enclosing hero
pub fn use_intro_state() -> IntroState {
    use_context::<IntroState>()
}
