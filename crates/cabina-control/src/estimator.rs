// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Sliding-window frame-rate estimation.

use crate::metrics::RingBuffer;
use std::time::Instant;

/// Number of instantaneous rates the estimator averages over.
pub const WINDOW_CAPACITY: usize = 20;

/// Smooths per-frame timestamps into a rolling frames-per-second figure.
///
/// Each [`sample`](Self::sample) turns the time since the previous sample into
/// an instantaneous rate (`1000 / delta_ms`) and pushes it into a fixed window
/// of [`WINDOW_CAPACITY`] values. Consumers only ever read the window's mean.
#[derive(Debug, Clone)]
pub struct FrameRateEstimator {
    window: RingBuffer<f32, WINDOW_CAPACITY>,
    last_timestamp: Instant,
    skipped: u64,
}

impl FrameRateEstimator {
    /// Creates an estimator seeded with the time the frame loop started.
    pub fn new(start: Instant) -> Self {
        Self {
            window: RingBuffer::new(),
            last_timestamp: start,
            skipped: 0,
        }
    }

    /// Records a frame that finished at `now`.
    ///
    /// Returns the instantaneous rate that was recorded, or `None` if the
    /// timestamp did not advance past the previous one and was skipped.
    pub fn sample(&mut self, now: Instant) -> Option<f32> {
        let delta = match now.checked_duration_since(self.last_timestamp) {
            Some(delta) if !delta.is_zero() => delta,
            _ => {
                self.skipped += 1;
                log::trace!("Skipping frame sample with non-positive delta");
                return None;
            }
        };
        self.last_timestamp = now;

        let delta_ms = delta.as_secs_f64() * 1000.0;
        let rate = (1000.0 / delta_ms) as f32;
        self.window.push(rate);
        Some(rate)
    }

    /// The mean of the window, or `None` before the first recorded sample.
    pub fn smoothed_rate(&self) -> Option<f32> {
        self.window.average()
    }

    /// Number of rates currently in the window, at most [`WINDOW_CAPACITY`].
    pub fn sample_count(&self) -> usize {
        self.window.count()
    }

    /// Number of samples dropped because their timestamp did not advance.
    pub fn skipped_samples(&self) -> u64 {
        self.skipped
    }

    /// Empties the window and re-seeds the reference timestamp.
    ///
    /// Call this when the frame loop resumes after a suspension so the pause
    /// is not recorded as one very long frame.
    pub fn reset(&mut self, now: Instant) {
        self.window.clear();
        self.last_timestamp = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn feed(est: &mut FrameRateEstimator, start: Instant, frames: u32, step_ms: u64) -> Instant {
        let mut now = start;
        for _ in 0..frames {
            now += Duration::from_millis(step_ms);
            est.sample(now);
        }
        now
    }

    #[test]
    fn test_empty_window_has_no_rate() {
        let estimator = FrameRateEstimator::new(Instant::now());
        assert_eq!(estimator.smoothed_rate(), None);
        assert_eq!(estimator.sample_count(), 0);
    }

    #[test]
    fn test_steady_rate() {
        let start = Instant::now();
        let mut estimator = FrameRateEstimator::new(start);
        feed(&mut estimator, start, 5, 20);
        let rate = estimator.smoothed_rate().unwrap();
        assert!((rate - 50.0).abs() < 0.01, "got {rate}");
    }

    #[test]
    fn test_window_is_bounded() {
        let start = Instant::now();
        let mut estimator = FrameRateEstimator::new(start);
        let now = feed(&mut estimator, start, 30, 10);
        assert_eq!(estimator.sample_count(), WINDOW_CAPACITY);

        // Twenty slow frames fully replace the fast ones.
        feed(&mut estimator, now, 20, 40);
        let rate = estimator.smoothed_rate().unwrap();
        assert!((rate - 25.0).abs() < 0.01, "got {rate}");
    }

    #[test]
    fn test_zero_delta_is_skipped() {
        let start = Instant::now();
        let mut estimator = FrameRateEstimator::new(start);
        assert_eq!(estimator.sample(start), None);
        assert_eq!(estimator.sample_count(), 0);
        assert_eq!(estimator.skipped_samples(), 1);
        assert!(estimator.smoothed_rate().is_none());
    }

    #[test]
    fn test_backwards_timestamp_is_skipped() {
        let start = Instant::now();
        let mut estimator = FrameRateEstimator::new(start + Duration::from_millis(100));
        assert_eq!(estimator.sample(start), None);
        assert_eq!(estimator.skipped_samples(), 1);
    }

    #[test]
    fn test_reset_forgets_pause() {
        let start = Instant::now();
        let mut estimator = FrameRateEstimator::new(start);
        let now = feed(&mut estimator, start, 10, 16);

        let resumed = now + Duration::from_secs(30);
        estimator.reset(resumed);
        assert_eq!(estimator.sample_count(), 0);

        estimator.sample(resumed + Duration::from_millis(20));
        let rate = estimator.smoothed_rate().unwrap();
        assert!((rate - 50.0).abs() < 0.01, "got {rate}");
    }
}
