//! The SAE mask-reveal timeline.

use serde::{Deserialize, Serialize};

use super::timeline::{AnimatedProperty, Stage, Timeline, TimelineError};

/// Element id of the SVG group carrying the SAE letter mask.
pub const MASK_TARGET: &str = "sae-mask-group";

/// Viewports narrower than this (CSS px) use the compact timeline.
pub const COMPACT_BREAKPOINT_PX: f64 = 640.0;

/// Fraction of the expand stage after which content starts fading in.
pub const REVEAL_THRESHOLD: f64 = 0.3;

/// Index of the expand stage in [`mask_reveal_timeline`].
pub const EXPAND_STAGE: usize = 1;

/// Coarse viewport class driving animation magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Viewport {
    /// Phones
    Compact,
    #[default]
    Wide,
}

impl Viewport {
    pub fn from_width(width_px: f64) -> Self {
        if width_px.is_finite() && width_px < COMPACT_BREAKPOINT_PX {
            Viewport::Compact
        } else {
            Viewport::Wide
        }
    }
}

struct MaskMagnitudes {
    rotation: f64,
    rotation_secs: f64,
    expand_scale: f64,
    expand_secs: f64,
    cover_scale: f64,
}

impl MaskMagnitudes {
    fn for_viewport(viewport: Viewport) -> Self {
        match viewport {
            Viewport::Compact => Self {
                rotation: 3.0,
                rotation_secs: 2.0,
                expand_scale: 15.0,
                expand_secs: 1.2,
                cover_scale: 45.0,
            },
            Viewport::Wide => Self {
                rotation: 5.0,
                rotation_secs: 2.5,
                expand_scale: 25.0,
                expand_secs: 1.5,
                cover_scale: 60.0,
            },
        }
    }
}

/// Slow tilt, fast expansion, full-screen cover, fade out.
pub fn mask_reveal_timeline(viewport: Viewport) -> Result<Timeline, TimelineError> {
    let m = MaskMagnitudes::for_viewport(viewport);

    Timeline::builder()
        .stage(Stage::new(
            "tilt",
            MASK_TARGET,
            AnimatedProperty::Rotation,
            0.0,
            m.rotation,
            m.rotation_secs,
        ))
        .stage(
            Stage::new(
                "expand",
                MASK_TARGET,
                AnimatedProperty::Scale,
                1.0,
                m.expand_scale,
                m.expand_secs,
            )
            .with_offset(-0.5),
        )
        .stage(
            Stage::new(
                "cover",
                MASK_TARGET,
                AnimatedProperty::Scale,
                m.expand_scale,
                m.cover_scale,
                0.6,
            )
            .with_offset(-0.2),
        )
        .stage(
            Stage::new("fade", MASK_TARGET, AnimatedProperty::Opacity, 1.0, 0.0, 0.4)
                .with_offset(-0.2),
        )
        .reveal_on(EXPAND_STAGE, REVEAL_THRESHOLD)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_breakpoint() {
        assert_eq!(Viewport::from_width(375.0), Viewport::Compact);
        assert_eq!(Viewport::from_width(640.0), Viewport::Wide);
        assert_eq!(Viewport::from_width(f64::NAN), Viewport::Wide);
    }

    #[test]
    fn wide_timeline_layout() {
        let timeline = mask_reveal_timeline(Viewport::Wide).expect("valid timeline");
        let starts: Vec<f64> = timeline.slots().iter().map(|s| s.start).collect();

        assert_eq!(timeline.len(), 4);
        assert!((starts[1] - 2.0).abs() < 1e-9);
        assert!((starts[2] - 3.3).abs() < 1e-9);
        assert!((starts[3] - 3.7).abs() < 1e-9);
        assert!((timeline.total_duration() - 4.1).abs() < 1e-9);
        assert_eq!(timeline.reveal_stage(), EXPAND_STAGE);
        assert_eq!(timeline.targets(), vec![MASK_TARGET]);
    }

    #[test]
    fn compact_timeline_is_shorter() {
        let compact = mask_reveal_timeline(Viewport::Compact).expect("valid timeline");
        let wide = mask_reveal_timeline(Viewport::Wide).expect("valid timeline");

        assert!(compact.total_duration() < wide.total_duration());
        assert_eq!(compact.stages()[2].to, 45.0);
        assert!((compact.total_duration() - 3.3).abs() < 1e-9);
    }

    #[test]
    fn finishes_within_a_few_seconds() {
        for viewport in [Viewport::Compact, Viewport::Wide] {
            let timeline = mask_reveal_timeline(viewport).expect("valid timeline");
            assert!(timeline.total_duration() > 0.0);
            assert!(timeline.total_duration() < 5.0);
        }
    }
}
