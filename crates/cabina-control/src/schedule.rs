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

//! Frame-driven periodic tasks.

use std::time::{Duration, Instant};

/// A cancellable timer polled from the frame loop.
///
/// There is no background thread: the owner calls [`poll`](Self::poll) every
/// frame and acts when it returns `true`. Once cancelled the task never fires
/// again.
#[derive(Debug, Clone)]
pub struct PeriodicTask {
    interval: Duration,
    next_due: Instant,
    cancelled: bool,
    fired: u64,
}

impl PeriodicTask {
    /// Creates a task that first fires `interval` after `start`.
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            next_due: start + interval,
            cancelled: false,
            fired: 0,
        }
    }

    /// Returns `true` if the task is due at `now`, and schedules the next run.
    ///
    /// Missed periods are not replayed: after a long stall the task fires once
    /// and the next run is one interval after `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.cancelled || now < self.next_due {
            return false;
        }
        self.next_due = now + self.interval;
        self.fired += 1;
        true
    }

    /// Pushes the next run one full interval past `now`.
    pub fn postpone(&mut self, now: Instant) {
        self.next_due = now + self.interval;
    }

    /// Stops the task permanently.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Number of times the task has fired.
    pub fn fired_count(&self) -> u64 {
        self.fired
    }

    /// The configured interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
