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

//! Per-frame context handed to every agent.

use crate::renderer::{RendererControls, TextureAllocator};
use crate::scene::SceneNode;
use std::time::Instant;

/// Borrowed access to the live scene and renderer for the duration of one frame.
pub struct FrameContext<'a> {
    /// Presentation timestamp of the frame being rendered.
    pub now: Instant,
    /// Root of the renderable scene graph.
    pub scene: &'a mut dyn SceneNode,
    /// Global renderer switches.
    pub renderer: &'a mut dyn RendererControls,
    /// Allocator for derived GPU textures.
    pub textures: &'a mut dyn TextureAllocator,
}
