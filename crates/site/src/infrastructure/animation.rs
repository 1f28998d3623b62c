//! Inline-style animation runtime.
//!
//! Targets register themselves when their element mounts. Each frame writes
//! the new value into a [`TargetStyle`]; components read it back as inline
//! CSS on their next render.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use saeweb_domain::{AnimatedProperty, Timeline};

use crate::ports::outbound::{AnimationRuntime, AnimationSetupError};

/// Current transform of one animated element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetStyle {
    pub rotation_deg: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl Default for TargetStyle {
    fn default() -> Self {
        Self {
            rotation_deg: 0.0,
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

impl TargetStyle {
    fn set(&mut self, property: AnimatedProperty, value: f64) {
        match property {
            AnimatedProperty::Rotation => self.rotation_deg = value,
            AnimatedProperty::Scale => self.scale = value,
            AnimatedProperty::Opacity => self.opacity = value.clamp(0.0, 1.0),
        }
    }

    pub fn css(&self) -> String {
        format!(
            "transform: rotate({}deg) scale({}); opacity: {};",
            self.rotation_deg, self.scale, self.opacity
        )
    }
}

#[derive(Debug, Default)]
struct Table {
    mounted: HashSet<String>,
    styles: HashMap<String, TargetStyle>,
    completed: Vec<usize>,
    cancelled: bool,
}

/// Shared table of target styles. Clones share the same table.
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    table: Rc<RefCell<Table>>,
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Element for `target` is in the DOM.
    pub fn register(&self, target: &str) {
        let mut table = self.table.borrow_mut();
        table.mounted.insert(target.to_string());
        table.styles.entry(target.to_string()).or_default();
    }

    pub fn unregister(&self, target: &str) {
        let mut table = self.table.borrow_mut();
        table.mounted.remove(target);
        table.styles.remove(target);
    }

    pub fn style(&self, target: &str) -> Option<TargetStyle> {
        self.table.borrow().styles.get(target).copied()
    }

    /// Inline CSS for `target`, empty when unknown.
    pub fn css_for(&self, target: &str) -> String {
        self.style(target).map(|s| s.css()).unwrap_or_default()
    }

    pub fn completed_stages(&self) -> Vec<usize> {
        self.table.borrow().completed.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.table.borrow().cancelled
    }
}

impl AnimationRuntime for StyleTable {
    fn prepare(&self, timeline: &Timeline) -> Result<(), AnimationSetupError> {
        let mut table = self.table.borrow_mut();
        if table.cancelled {
            return Err(AnimationSetupError::Cancelled);
        }
        if let Some(missing) = timeline
            .targets()
            .into_iter()
            .find(|target| !table.mounted.contains(*target))
        {
            return Err(AnimationSetupError::TargetMissing(missing.to_string()));
        }

        table.completed.clear();
        // Walk backwards so each property ends on its earliest stage's start value.
        for stage in timeline.stages().iter().rev() {
            table
                .styles
                .entry(stage.target.clone())
                .or_default()
                .set(stage.property, stage.from);
        }
        Ok(())
    }

    fn apply(&self, target: &str, property: AnimatedProperty, value: f64) {
        let mut table = self.table.borrow_mut();
        if table.cancelled {
            return;
        }
        if let Some(style) = table.styles.get_mut(target) {
            style.set(property, value);
        }
    }

    fn stage_completed(&self, index: usize) {
        let mut table = self.table.borrow_mut();
        if !table.cancelled {
            table.completed.push(index);
        }
    }

    fn cancel(&self) {
        self.table.borrow_mut().cancelled = true;
    }
}
