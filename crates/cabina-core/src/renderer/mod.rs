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

//! Renderer-level contracts: global switches, derived texture allocation and
//! the associated error type.

mod error;
mod texture;

pub use error::ResourceError;
pub use texture::{CpuTexture, TextureId};

/// Global renderer switches driven by tier transitions.
pub trait RendererControls {
    /// The display's native device pixel ratio.
    fn native_pixel_ratio(&self) -> f32;

    /// Returns the pixel ratio the renderer currently draws at.
    fn pixel_ratio(&self) -> f32;
    /// Sets the pixel ratio the renderer draws at.
    fn set_pixel_ratio(&mut self, ratio: f32);

    /// Returns `true` if shadow maps are rendered at all.
    fn shadow_maps_enabled(&self) -> bool;
    /// Enables or disables shadow map rendering globally.
    fn set_shadow_maps_enabled(&mut self, enabled: bool);

    /// Binds (or clears) the texture used as ambient environment lighting.
    fn set_environment_map(&mut self, texture: Option<TextureId>);
}

/// Uploads derived textures to the GPU and releases them.
///
/// The caller that obtained a [`TextureId`] owns it and must release it.
pub trait TextureAllocator {
    /// Uploads `texture` and returns its handle.
    fn allocate(&mut self, label: &str, texture: &CpuTexture) -> Result<TextureId, ResourceError>;

    /// Releases a texture previously returned by [`allocate`](Self::allocate).
    fn release(&mut self, id: TextureId) -> Result<(), ResourceError>;
}
