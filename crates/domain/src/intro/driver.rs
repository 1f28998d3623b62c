//! Virtual-time interpreter for [`Timeline`]s.
//!
//! The driver owns no clock. Callers feed elapsed time through
//! [`TimelineDriver::advance`] (one animation frame in the browser, an
//! arbitrary jump in tests) and receive the stage events that fall inside it.

use super::timeline::{AnimatedProperty, Timeline};

/// Something that happened to a stage during one advance.
#[derive(Debug, Clone, PartialEq)]
pub enum StageEvent {
    Started {
        index: usize,
    },
    /// New property value for the stage's target
    Frame {
        index: usize,
        target: String,
        property: AnimatedProperty,
        value: f64,
        /// Local progress of the stage in `[0, 1]`
        progress: f64,
    },
    Completed {
        index: usize,
    },
}

impl StageEvent {
    pub fn index(&self) -> usize {
        match self {
            StageEvent::Started { index }
            | StageEvent::Frame { index, .. }
            | StageEvent::Completed { index } => *index,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum StageStatus {
    #[default]
    Pending,
    Running,
    Done,
}

/// Plays a timeline forward in virtual time.
#[derive(Debug, Clone)]
pub struct TimelineDriver {
    timeline: Timeline,
    elapsed: f64,
    status: Vec<StageStatus>,
    cancelled: bool,
}

impl TimelineDriver {
    pub fn new(timeline: Timeline) -> Self {
        let status = vec![StageStatus::Pending; timeline.len()];
        Self {
            timeline,
            elapsed: 0.0,
            status,
            cancelled: false,
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Seconds of timeline played so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Overall completion in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        let total = self.timeline.total_duration();
        if total <= 0.0 {
            return if self.is_finished() { 1.0 } else { 0.0 };
        }
        (self.elapsed / total).clamp(0.0, 1.0)
    }

    /// Local progress of stage `index` at the current position.
    pub fn stage_progress(&self, index: usize) -> Option<f64> {
        self.timeline
            .slots()
            .get(index)
            .map(|slot| slot.progress_at(self.elapsed))
    }

    pub fn is_finished(&self) -> bool {
        self.status.iter().all(|s| *s == StageStatus::Done)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Abort playback. No further events are produced.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Move forward by `dt` seconds and report what happened, in stage order.
    ///
    /// Negative or non-finite `dt` is treated as zero.
    pub fn advance(&mut self, dt: f64) -> Vec<StageEvent> {
        if self.cancelled || self.is_finished() {
            return Vec::new();
        }
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.elapsed = (self.elapsed + dt).min(self.timeline.total_duration());

        let mut events = Vec::new();
        for (index, (stage, slot)) in self
            .timeline
            .stages()
            .iter()
            .zip(self.timeline.slots())
            .enumerate()
        {
            if self.status[index] == StageStatus::Done || self.elapsed < slot.start {
                continue;
            }
            if self.status[index] == StageStatus::Pending {
                self.status[index] = StageStatus::Running;
                events.push(StageEvent::Started { index });
            }

            let progress = slot.progress_at(self.elapsed);
            events.push(StageEvent::Frame {
                index,
                target: stage.target.clone(),
                property: stage.property,
                value: stage.value_at(progress),
                progress,
            });

            if progress >= 1.0 {
                self.status[index] = StageStatus::Done;
                events.push(StageEvent::Completed { index });
            }
        }
        events
    }

    /// Play to the end in fixed steps, collecting every event. Test helper
    /// for fast-forwarding virtual time.
    pub fn run_to_end(&mut self, step: f64) -> Vec<StageEvent> {
        let mut events = Vec::new();
        let step = if step.is_finite() && step > 0.0 { step } else { 1.0 / 60.0 };
        while !self.cancelled && !self.is_finished() {
            events.extend(self.advance(step));
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intro::mask::{mask_reveal_timeline, Viewport};
    use crate::intro::timeline::Stage;

    fn two_stage_timeline() -> Timeline {
        Timeline::builder()
            .stage(Stage::new("a", "mask", AnimatedProperty::Rotation, 0.0, 10.0, 1.0))
            .stage(
                Stage::new("b", "mask", AnimatedProperty::Opacity, 1.0, 0.0, 1.0)
                    .with_offset(-0.5),
            )
            .build()
            .expect("valid timeline")
    }

    #[test]
    fn first_stage_starts_immediately() {
        let mut driver = TimelineDriver::new(two_stage_timeline());
        let events = driver.advance(0.0);

        assert_eq!(events[0], StageEvent::Started { index: 0 });
        assert!(matches!(
            events[1],
            StageEvent::Frame { index: 0, value, .. } if value == 0.0
        ));
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn overlapping_stage_starts_before_previous_completes() {
        let mut driver = TimelineDriver::new(two_stage_timeline());
        driver.advance(0.6);
        let events = driver.advance(0.0);

        let indices: Vec<usize> = events.iter().map(StageEvent::index).collect();
        assert!(indices.contains(&0));
        assert!(indices.contains(&1));
        assert!(!events.contains(&StageEvent::Completed { index: 0 }));
    }

    #[test]
    fn large_step_emits_start_frame_and_completion() {
        let mut driver = TimelineDriver::new(two_stage_timeline());
        let events = driver.advance(10.0);

        assert!(driver.is_finished());
        assert_eq!(driver.progress(), 1.0);
        assert!(events.contains(&StageEvent::Completed { index: 0 }));
        assert!(events.contains(&StageEvent::Completed { index: 1 }));
        assert!(driver.advance(1.0).is_empty());
    }

    #[test]
    fn starts_are_reported_in_stage_order() {
        let mut driver = TimelineDriver::new(mask_reveal_timeline(Viewport::Wide).expect("timeline"));
        let events = driver.run_to_end(1.0 / 60.0);

        let starts: Vec<usize> = events
            .iter()
            .filter_map(|e| match e {
                StageEvent::Started { index } => Some(*index),
                _ => None,
            })
            .collect();
        assert_eq!(starts, vec![0, 1, 2, 3]);
    }

    #[test]
    fn every_stage_completes_exactly_once() {
        let mut driver = TimelineDriver::new(mask_reveal_timeline(Viewport::Compact).expect("timeline"));
        let events = driver.run_to_end(0.05);

        for index in 0..4 {
            let completions = events
                .iter()
                .filter(|e| **e == StageEvent::Completed { index })
                .count();
            assert_eq!(completions, 1, "stage {index}");
        }
    }

    #[test]
    fn cancelled_driver_goes_quiet() {
        let mut driver = TimelineDriver::new(two_stage_timeline());
        driver.advance(0.2);
        driver.cancel();

        assert!(driver.advance(0.5).is_empty());
        assert!(driver.run_to_end(0.1).is_empty());
        assert!(!driver.is_finished());
    }

    #[test]
    fn bad_dt_does_not_move_time() {
        let mut driver = TimelineDriver::new(two_stage_timeline());
        driver.advance(f64::NAN);
        driver.advance(-3.0);
        assert_eq!(driver.elapsed(), 0.0);
    }

    #[test]
    fn stage_progress_tracks_position() {
        let mut driver = TimelineDriver::new(two_stage_timeline());
        driver.advance(0.75);
        assert_eq!(driver.stage_progress(0), Some(0.75));
        assert_eq!(driver.stage_progress(1), Some(0.25));
        assert_eq!(driver.stage_progress(7), None);
    }
}
