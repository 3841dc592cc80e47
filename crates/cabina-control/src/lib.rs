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

//! # Cabina Control
//!
//! The cold-path half of the adaptive rendering controller. Everything in here
//! is pure decision logic: it observes (device signals, frame timestamps) and
//! decides (device tier, quality tier transitions, when to re-optimize), but
//! never touches the scene or the renderer itself. Acting on decisions is the
//! job of `cabina-lanes` and `cabina-agents`.

#![warn(missing_docs)]

pub mod config;
pub mod device;
pub mod estimator;
pub mod metrics;
pub mod schedule;
pub mod tier;

pub use config::{ConfigError, QualityConfig};
pub use device::DeviceClassifier;
pub use estimator::FrameRateEstimator;
pub use schedule::PeriodicTask;
pub use tier::{HysteresisBand, QualityTierController};
