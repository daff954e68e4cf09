/// Cumulative running average.
/// Tracks the exact mean of every observation seen so far (not a window,
/// never reset). The percolation engine uses one of these to steer its
/// cell density toward the grid's percolation threshold.
#[derive(Debug, Clone, Copy)]
pub struct RunningAverage {
    count: u64,
    value: f64,
}

impl RunningAverage {
    /// Start at 0.5 with no observations.
    pub fn new() -> Self {
        RunningAverage {
            count: 0,
            value: 0.5,
        }
    }

    /// Start from a chosen value, counted as the first observation.
    pub fn with_seed(value: f64) -> Self {
        RunningAverage { count: 1, value }
    }

    /// Fold one observation into the mean.
    pub fn update(&mut self, input: f64) {
        self.count += 1;
        let scale = 1.0 / self.count as f64;
        self.value = input * scale + self.value * (1.0 - scale);
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

impl Default for RunningAverage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_mean_closed_form() {
        // Seeded with (v0, count 1), then n updates of 1.0, the mean is
        // (v0 + n) / (n + 1).
        let v0 = 0.25;
        let mut avg = RunningAverage::with_seed(v0);
        let n = 17;
        for _ in 0..n {
            avg.update(1.0);
        }
        let expected = (v0 + n as f64) / (n as f64 + 1.0);
        assert!((avg.value() - expected).abs() < 1e-12);
        assert_eq!(avg.count(), n + 1);
    }

    #[test]
    fn unseeded_first_update_replaces_initial_value() {
        // With count 0 the 0.5 starting point carries no weight.
        let mut avg = RunningAverage::new();
        avg.update(1.0);
        assert_eq!(avg.value(), 1.0);
        avg.update(0.0);
        assert_eq!(avg.value(), 0.5);
    }

    #[test]
    fn mean_of_mixed_outcomes() {
        let mut avg = RunningAverage::new();
        for i in 0..10 {
            avg.update(if i % 2 == 0 { 1.0 } else { 0.0 });
        }
        assert!((avg.value() - 0.5).abs() < 1e-12);
        assert_eq!(avg.count(), 10);
    }
}
