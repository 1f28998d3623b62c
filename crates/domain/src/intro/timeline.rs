//! Declarative animation timelines
//!
//! A [`Timeline`] is an ordered list of [`Stage`] records. Each stage tweens
//! one property of one target from a start value to an end value. Stages are
//! laid out sequentially, with an optional offset relative to the end of the
//! previous stage (negative values overlap). A stage is never scheduled
//! before the stage preceding it has started.
//!
//! Timelines carry no behaviour; [`super::TimelineDriver`] interprets them.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on a timeline's total duration, in seconds.
pub const MAX_TIMELINE_SECS: f64 = 30.0;

/// Visual property a stage animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimatedProperty {
    /// Degrees
    Rotation,
    /// Uniform scale factor
    Scale,
    /// 0.0 (transparent) to 1.0 (opaque)
    Opacity,
}

impl AnimatedProperty {
    pub fn as_str(self) -> &'static str {
        match self {
            AnimatedProperty::Rotation => "rotation",
            AnimatedProperty::Scale => "scale",
            AnimatedProperty::Opacity => "opacity",
        }
    }
}

impl fmt::Display for AnimatedProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One timed property transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub name: String,
    /// Identifier of the visual element being animated
    pub target: String,
    pub property: AnimatedProperty,
    pub from: f64,
    pub to: f64,
    /// Seconds relative to the previous stage's end; negative overlaps
    pub offset: f64,
    /// Seconds
    pub duration: f64,
}

impl Stage {
    pub fn new(
        name: impl Into<String>,
        target: impl Into<String>,
        property: AnimatedProperty,
        from: f64,
        to: f64,
        duration: f64,
    ) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            property,
            from,
            to,
            offset: 0.0,
            duration,
        }
    }

    /// Start `offset` seconds relative to the previous stage's end.
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Value at local progress `t` (clamped to `[0, 1]`), linear.
    pub fn value_at(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        self.from + (self.to - self.from) * t
    }
}

/// Absolute placement of a stage on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub start: f64,
    pub end: f64,
}

impl Slot {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Local progress of the stage at absolute time `at`.
    pub fn progress_at(&self, at: f64) -> f64 {
        if at <= self.start {
            return if self.duration() <= 0.0 && at >= self.start {
                1.0
            } else {
                0.0
            };
        }
        if at >= self.end || self.duration() <= 0.0 {
            return 1.0;
        }
        (at - self.start) / self.duration()
    }
}

/// Reasons a timeline cannot be built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimelineError {
    #[error("timeline has no stages")]
    Empty,

    #[error("stage '{stage}' has a non-finite value")]
    NonFinite { stage: String },

    #[error("stage '{stage}' has a negative duration")]
    NegativeDuration { stage: String },

    #[error("stage '{stage}' has no target")]
    MissingTarget { stage: String },

    #[error("timeline runs {total:.2}s, longer than the {max:.0}s limit")]
    TooLong { total: f64, max: f64 },

    #[error("reveal stage index {index} is out of range for {len} stages")]
    RevealStageOutOfRange { index: usize, len: usize },

    #[error("reveal threshold {0} is outside [0, 1]")]
    InvalidThreshold(f64),
}

/// Validated, scheduled list of stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    stages: Vec<Stage>,
    slots: Vec<Slot>,
    total: f64,
    reveal_stage: usize,
    reveal_threshold: f64,
}

impl Timeline {
    /// Start building a timeline.
    pub fn builder() -> TimelineBuilder {
        TimelineBuilder::default()
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Total duration in seconds.
    pub fn total_duration(&self) -> f64 {
        self.total
    }

    /// Index of the stage whose progress gates the content reveal.
    pub fn reveal_stage(&self) -> usize {
        self.reveal_stage
    }

    /// Local progress of the reveal stage at which content starts fading in.
    pub fn reveal_threshold(&self) -> f64 {
        self.reveal_threshold
    }

    /// Distinct targets referenced by the stages, in first-use order.
    pub fn targets(&self) -> Vec<&str> {
        let mut targets: Vec<&str> = Vec::new();
        for stage in &self.stages {
            if !targets.contains(&stage.target.as_str()) {
                targets.push(stage.target.as_str());
            }
        }
        targets
    }

    /// Absolute time at which the reveal threshold is crossed.
    pub fn reveal_at(&self) -> f64 {
        let slot = self.slots[self.reveal_stage];
        slot.start + slot.duration() * self.reveal_threshold
    }
}

/// Builder for [`Timeline`].
#[derive(Debug, Clone, Default)]
pub struct TimelineBuilder {
    stages: Vec<Stage>,
    reveal: Option<(usize, f64)>,
}

impl TimelineBuilder {
    pub fn stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    /// Mark the stage at `index` as the reveal gate, crossed at `threshold`.
    pub fn reveal_on(mut self, index: usize, threshold: f64) -> Self {
        self.reveal = Some((index, threshold));
        self
    }

    /// Validate and schedule. Without an explicit reveal gate the last stage
    /// gates at its start.
    pub fn build(self) -> Result<Timeline, TimelineError> {
        if self.stages.is_empty() {
            return Err(TimelineError::Empty);
        }

        let mut slots = Vec::with_capacity(self.stages.len());
        let mut previous: Option<Slot> = None;
        for stage in &self.stages {
            if stage.target.trim().is_empty() {
                return Err(TimelineError::MissingTarget {
                    stage: stage.name.clone(),
                });
            }
            let values = [stage.from, stage.to, stage.offset, stage.duration];
            if values.iter().any(|v| !v.is_finite()) {
                return Err(TimelineError::NonFinite {
                    stage: stage.name.clone(),
                });
            }
            if stage.duration < 0.0 {
                return Err(TimelineError::NegativeDuration {
                    stage: stage.name.clone(),
                });
            }

            let start = match previous {
                None => stage.offset.max(0.0),
                Some(prev) => (prev.end + stage.offset).max(prev.start),
            };
            let slot = Slot {
                start,
                end: start + stage.duration,
            };
            slots.push(slot);
            previous = Some(slot);
        }

        let total = slots.iter().map(|s| s.end).fold(0.0_f64, f64::max);
        if total > MAX_TIMELINE_SECS {
            return Err(TimelineError::TooLong {
                total,
                max: MAX_TIMELINE_SECS,
            });
        }

        let (reveal_stage, reveal_threshold) = self.reveal.unwrap_or((self.stages.len() - 1, 0.0));
        if reveal_stage >= self.stages.len() {
            return Err(TimelineError::RevealStageOutOfRange {
                index: reveal_stage,
                len: self.stages.len(),
            });
        }
        if !(0.0..=1.0).contains(&reveal_threshold) {
            return Err(TimelineError::InvalidThreshold(reveal_threshold));
        }

        Ok(Timeline {
            stages: self.stages,
            slots,
            total,
            reveal_stage,
            reveal_threshold,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(name: &str, duration: f64) -> Stage {
        Stage::new(name, "mask", AnimatedProperty::Scale, 1.0, 2.0, duration)
    }

    mod scheduling {
        use super::*;

        #[test]
        fn sequential_stages_follow_each_other() {
            let timeline = Timeline::builder()
                .stage(stage("a", 1.0))
                .stage(stage("b", 2.0))
                .build()
                .expect("valid timeline");

            assert_eq!(timeline.slots()[0], Slot { start: 0.0, end: 1.0 });
            assert_eq!(timeline.slots()[1], Slot { start: 1.0, end: 3.0 });
            assert_eq!(timeline.total_duration(), 3.0);
        }

        #[test]
        fn negative_offset_overlaps_previous_stage() {
            let timeline = Timeline::builder()
                .stage(stage("a", 2.5))
                .stage(stage("b", 1.5).with_offset(-0.5))
                .build()
                .expect("valid timeline");

            assert_eq!(timeline.slots()[1].start, 2.0);
            assert_eq!(timeline.slots()[1].end, 3.5);
        }

        #[test]
        fn overlap_never_starts_before_previous_stage() {
            let timeline = Timeline::builder()
                .stage(stage("a", 1.0))
                .stage(stage("b", 1.0).with_offset(-5.0))
                .build()
                .expect("valid timeline");

            assert_eq!(timeline.slots()[1].start, 0.0);
            for pair in timeline.slots().windows(2) {
                assert!(pair[1].start >= pair[0].start);
            }
        }

        #[test]
        fn total_is_latest_end_not_last_stage() {
            let timeline = Timeline::builder()
                .stage(stage("long", 4.0))
                .stage(stage("short", 0.5).with_offset(-3.0))
                .build()
                .expect("valid timeline");

            assert_eq!(timeline.total_duration(), 4.0);
        }

        #[test]
        fn reveal_at_uses_threshold_of_gate_stage() {
            let timeline = Timeline::builder()
                .stage(stage("a", 2.0))
                .stage(stage("b", 1.0))
                .reveal_on(1, 0.3)
                .build()
                .expect("valid timeline");

            assert!((timeline.reveal_at() - 2.3).abs() < 1e-9);
        }

        #[test]
        fn targets_are_deduplicated() {
            let timeline = Timeline::builder()
                .stage(stage("a", 1.0))
                .stage(Stage::new("b", "hud", AnimatedProperty::Opacity, 0.0, 1.0, 1.0))
                .stage(stage("c", 1.0))
                .build()
                .expect("valid timeline");

            assert_eq!(timeline.targets(), vec!["mask", "hud"]);
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn empty_timeline_is_rejected() {
            assert_eq!(Timeline::builder().build(), Err(TimelineError::Empty));
        }

        #[test]
        fn non_finite_values_are_rejected() {
            let result = Timeline::builder().stage(stage("a", f64::INFINITY)).build();
            assert!(matches!(result, Err(TimelineError::NonFinite { .. })));
        }

        #[test]
        fn negative_duration_is_rejected() {
            let result = Timeline::builder().stage(stage("a", -1.0)).build();
            assert!(matches!(result, Err(TimelineError::NegativeDuration { .. })));
        }

        #[test]
        fn blank_target_is_rejected() {
            let result = Timeline::builder()
                .stage(Stage::new("a", " ", AnimatedProperty::Scale, 0.0, 1.0, 1.0))
                .build();
            assert!(matches!(result, Err(TimelineError::MissingTarget { .. })));
        }

        #[test]
        fn unbounded_duration_is_rejected() {
            let result = Timeline::builder().stage(stage("a", 31.0)).build();
            assert!(matches!(result, Err(TimelineError::TooLong { .. })));
        }

        #[test]
        fn reveal_gate_must_exist() {
            let result = Timeline::builder()
                .stage(stage("a", 1.0))
                .reveal_on(3, 0.3)
                .build();
            assert_eq!(
                result,
                Err(TimelineError::RevealStageOutOfRange { index: 3, len: 1 })
            );

            let result = Timeline::builder()
                .stage(stage("a", 1.0))
                .reveal_on(0, 1.5)
                .build();
            assert_eq!(result, Err(TimelineError::InvalidThreshold(1.5)));
        }
    }

    mod values {
        use super::*;

        #[test]
        fn value_interpolates_linearly_and_clamps() {
            let s = Stage::new("spin", "mask", AnimatedProperty::Rotation, 0.0, 5.0, 2.5);
            assert_eq!(s.value_at(0.0), 0.0);
            assert_eq!(s.value_at(0.5), 2.5);
            assert_eq!(s.value_at(2.0), 5.0);
        }

        #[test]
        fn zero_length_slot_is_complete_once_reached() {
            let slot = Slot { start: 1.0, end: 1.0 };
            assert_eq!(slot.progress_at(0.5), 0.0);
            assert_eq!(slot.progress_at(1.0), 1.0);
        }

        #[test]
        fn slot_progress_is_relative_to_start() {
            let slot = Slot { start: 2.0, end: 3.5 };
            assert_eq!(slot.progress_at(1.0), 0.0);
            assert!((slot.progress_at(2.45) - 0.3).abs() < 1e-9);
            assert_eq!(slot.progress_at(9.0), 1.0);
        }
    }
}
