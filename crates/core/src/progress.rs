/// Current-versus-goal view of one metric, useful for UI fills.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricProgress {
    pub current: f64,
    pub goal: f64,
}

impl MetricProgress {
    #[must_use]
    pub fn new(current: f64, goal: f64) -> Self {
        Self { current, goal }
    }

    /// Fill proportion in `[0, 1]` for progress bars and illustrations.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.goal <= 0.0 {
            return 0.0;
        }
        (self.current / self.goal).clamp(0.0, 1.0)
    }

    /// Goal-reached check on the raw, unclamped values.
    #[must_use]
    pub fn is_met(&self) -> bool {
        self.current >= self.goal
    }

    /// True when a single action moved the metric from below the goal to at
    /// or above it. Drives the one-time congratulation.
    #[must_use]
    pub fn crossed_from(&self, previous: f64) -> bool {
        previous < self.goal && self.is_met()
    }
}
