//! Exponentially smoothed frame-arrival-rate estimator.

use std::time::Instant;

/// Weight kept from the previous estimate each arrival.
const SMOOTHING_RETAINED: f32 = 0.9;
/// Weight given to the newest instantaneous sample.
const SMOOTHING_SAMPLE: f32 = 0.1;

/// Tracks how fast frames physically arrive, independent of whether their
/// payloads survive sequence-ordering checks.
///
/// Each arrival contributes `1 / delta_seconds` to a fixed-weight
/// exponential moving average. Non-positive deltas (same instant, or a clock
/// that went backwards) skip the rate update but still adopt the new
/// timestamp.
#[derive(Debug, Clone)]
pub struct FrameRateEstimator {
    last_arrival: Instant,
    smoothed_fps: f32,
}

impl FrameRateEstimator {
    pub fn new() -> Self {
        Self::new_at(Instant::now())
    }

    /// Start the estimator with an explicit "now", for deterministic tests.
    pub fn new_at(now: Instant) -> Self {
        Self {
            last_arrival: now,
            smoothed_fps: 0.0,
        }
    }

    /// Fold one physical frame arrival into the estimate.
    pub fn record_arrival(&mut self, now: Instant) {
        if let Some(delta) = now.checked_duration_since(self.last_arrival) {
            let seconds = delta.as_secs_f32();
            if seconds > 0.0 {
                let instantaneous = 1.0 / seconds;
                self.smoothed_fps =
                    SMOOTHING_RETAINED * self.smoothed_fps + SMOOTHING_SAMPLE * instantaneous;
            }
        }
        self.last_arrival = now;
    }

    /// Smoothed frames-per-second estimate; 0.0 until samples accumulate.
    pub fn smoothed_fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Forget all history and restart from `now` at 0 fps.
    pub fn reset_at(&mut self, now: Instant) {
        *self = Self::new_at(now);
    }
}

impl Default for FrameRateEstimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "{a} != {b}");
    }

    #[test]
    fn test_smoothing_from_reset() {
        let t0 = Instant::now();
        let mut estimator = FrameRateEstimator::new_at(t0);
        assert_close(estimator.smoothed_fps(), 0.0);

        estimator.record_arrival(t0 + Duration::from_millis(100));
        assert_close(estimator.smoothed_fps(), 1.0);

        estimator.record_arrival(t0 + Duration::from_millis(200));
        assert_close(estimator.smoothed_fps(), 1.9);
    }

    #[test]
    fn test_zero_delta_skips_rate_update() {
        let t0 = Instant::now();
        let mut estimator = FrameRateEstimator::new_at(t0);
        estimator.record_arrival(t0);
        assert_close(estimator.smoothed_fps(), 0.0);
    }

    #[test]
    fn test_backwards_clock_skips_but_adopts_timestamp() {
        let t0 = Instant::now();
        let mut estimator = FrameRateEstimator::new_at(t0 + Duration::from_millis(100));

        // Clock went backwards: no rate update.
        estimator.record_arrival(t0 + Duration::from_millis(50));
        assert_close(estimator.smoothed_fps(), 0.0);

        // The earlier instant was still adopted, so this delta is 100ms.
        estimator.record_arrival(t0 + Duration::from_millis(150));
        assert_close(estimator.smoothed_fps(), 1.0);
    }

    #[test]
    fn test_reset_clears_estimate() {
        let t0 = Instant::now();
        let mut estimator = FrameRateEstimator::new_at(t0);
        estimator.record_arrival(t0 + Duration::from_millis(100));
        assert!(estimator.smoothed_fps() > 0.0);

        estimator.reset_at(t0 + Duration::from_secs(1));
        assert_close(estimator.smoothed_fps(), 0.0);
    }
}
