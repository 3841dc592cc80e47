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

//! The scene-graph capability contract.
//!
//! The adaptive controller does not own the cabin scene. It walks whatever
//! graph the scene layer hands it through these traits and only touches the
//! performance-relevant fields they expose; geometry and topology are never
//! modified.

mod light;
mod material;
mod node;
mod texture;

pub use light::{LightKind, LightSource, ShadowSettings};
pub use material::{MapSlot, MaterialScalar, ShaderPrecision, SurfaceMaterial};
pub use node::SceneNode;
pub use texture::{FilterMode, MipmapFilterMode, SamplerState, TextureResource};
