//! Value objects - Immutable objects defined by their attributes

mod chamber;
mod loading_progress;
mod page;

pub use chamber::{Chamber, CHAMBERS};
pub use loading_progress::{LoadingProgress, LOADING_STEP_MS, LOADING_STEP_PERCENT};
pub use page::Page;
