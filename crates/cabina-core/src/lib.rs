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

//! # Cabina Core
//!
//! Foundational crate containing traits, core types, and interface contracts
//! shared by the adaptive rendering controller.
//!
//! Nothing in here knows about a concrete renderer: the scene graph, the
//! renderer's global switches and the GPU texture allocator are all reached
//! through the capability traits in [`scene`] and [`renderer`].

#![warn(missing_docs)]

pub mod agent;
pub mod context;
pub mod lane;
pub mod math;
pub mod platform;
pub mod quality;
pub mod renderer;
pub mod scene;

pub use context::FrameContext;
pub use lane::{Lane, LaneKind};
pub use platform::{DeviceProfile, DeviceTier, HostEnvironment};
pub use quality::{QualityTier, QualityTierReader, QualityTierWriter, TierDecision};
