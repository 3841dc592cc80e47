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

//! # Cabina Lanes
//!
//! Hot-path execution strategies. A lane does the actual work once the
//! control layer has decided what should happen:
//!
//! - [`scene_lane`] rewrites the scene graph for a quality tier.
//! - [`resource_lane`] builds the procedural textures the ambience agent uploads.

#![warn(missing_docs)]

pub mod resource_lane;
pub mod scene_lane;

pub use resource_lane::ResourceMaterializer;
pub use scene_lane::{OptimizationTarget, PassStats, SceneOptimizationLane};
