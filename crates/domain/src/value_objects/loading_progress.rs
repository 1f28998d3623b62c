//! Loading bar progress used by the boot and page loading screens.

/// Milliseconds between two progress steps.
pub const LOADING_STEP_MS: u64 = 200;

/// Percent added on every step.
pub const LOADING_STEP_PERCENT: u8 = 10;

/// Simulated loading progress, `0..=100` in fixed steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadingProgress {
    percent: u8,
}

impl LoadingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= 100
    }

    /// Add one step. Returns `false` once already complete.
    pub fn step(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.percent = self.percent.saturating_add(LOADING_STEP_PERCENT).min(100);
        true
    }

    /// Total time from empty to complete.
    pub fn total_ms() -> u64 {
        let steps = 100_u64.div_ceil(u64::from(LOADING_STEP_PERCENT));
        steps * LOADING_STEP_MS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_by_ten_until_full() {
        let mut progress = LoadingProgress::new();
        let mut steps = 0;
        while progress.step() {
            steps += 1;
        }
        assert_eq!(steps, 10);
        assert_eq!(progress.percent(), 100);
        assert!(progress.is_complete());
    }

    #[test]
    fn stays_at_hundred() {
        let mut progress = LoadingProgress::new();
        for _ in 0..20 {
            progress.step();
        }
        assert_eq!(progress.percent(), 100);
    }

    #[test]
    fn full_load_takes_two_seconds() {
        assert_eq!(LoadingProgress::total_ms(), 2000);
    }
}
