//! Reveal progress value object.

use serde::{Deserialize, Serialize};

/// Completion fraction of the mask transition, in `[0, 1]`.
///
/// Only ever moves forward; lower or non-finite inputs are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RevealProgress {
    fraction: f64,
}

impl RevealProgress {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    pub fn is_complete(&self) -> bool {
        self.fraction >= 1.0
    }

    /// Advance to `fraction` (clamped). Returns whether the value moved.
    pub fn advance_to(&mut self, fraction: f64) -> bool {
        if !fraction.is_finite() {
            return false;
        }
        let clamped = fraction.clamp(0.0, 1.0);
        if clamped > self.fraction {
            self.fraction = clamped;
            true
        } else {
            false
        }
    }

    pub fn complete(&mut self) {
        self.fraction = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let progress = RevealProgress::new();
        assert_eq!(progress.fraction(), 0.0);
        assert!(!progress.is_complete());
    }

    #[test]
    fn never_moves_backwards() {
        let mut progress = RevealProgress::new();
        assert!(progress.advance_to(0.6));
        assert!(!progress.advance_to(0.4));
        assert_eq!(progress.fraction(), 0.6);
    }

    #[test]
    fn clamps_and_ignores_nan() {
        let mut progress = RevealProgress::new();
        assert!(!progress.advance_to(f64::NAN));
        assert!(progress.advance_to(4.0));
        assert_eq!(progress.fraction(), 1.0);
        assert!(progress.is_complete());
    }
}
