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

//! Texture-level capabilities.

use crate::renderer::ResourceError;

/// Texel filtering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterMode {
    /// Point sampling. Returns the value of the nearest texel.
    Nearest,
    /// Linear interpolation. Returns a weighted average of the four nearest texels.
    Linear,
}

/// Defines the filtering mode between mipmap levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MipmapFilterMode {
    /// Use the nearest mipmap level.
    Nearest,
    /// Linearly interpolate between the two nearest mipmap levels.
    Linear,
}

/// Sampling parameters attached to a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SamplerState {
    /// The filter mode for magnification.
    pub mag_filter: FilterMode,
    /// The filter mode for minification.
    pub min_filter: FilterMode,
    /// The filter between mip levels, or `None` to sample the base level only.
    pub mipmap_filter: Option<MipmapFilterMode>,
    /// The maximum anisotropy level.
    pub anisotropy_clamp: u16,
}

impl SamplerState {
    /// Bilinear sampling of the base level only.
    pub const LINEAR: Self = Self {
        mag_filter: FilterMode::Linear,
        min_filter: FilterMode::Linear,
        mipmap_filter: None,
        anisotropy_clamp: 1,
    };

    /// Trilinear sampling with the given anisotropy.
    pub const fn trilinear(anisotropy_clamp: u16) -> Self {
        Self {
            mag_filter: FilterMode::Linear,
            min_filter: FilterMode::Linear,
            mipmap_filter: Some(MipmapFilterMode::Linear),
            anisotropy_clamp,
        }
    }
}

impl Default for SamplerState {
    fn default() -> Self {
        Self::trilinear(1)
    }
}

/// A texture bound to a material slot.
pub trait TextureResource {
    /// Returns the sampler state.
    fn sampler(&self) -> SamplerState;
    /// Replaces the sampler state.
    fn set_sampler(&mut self, sampler: SamplerState);

    /// Returns `true` if mip levels are generated on upload.
    fn generate_mipmaps(&self) -> bool;
    /// Enables or disables mip generation on upload.
    fn set_generate_mipmaps(&mut self, enabled: bool);

    /// Returns the source image size, or `None` while the image is still loading.
    fn dimensions(&self) -> Option<(u32, u32)>;

    /// Downsamples the source image so its longest side is at most `max_side`,
    /// preserving the aspect ratio. Returns `Ok(false)` if nothing had to change.
    fn downsample_to_fit(&mut self, max_side: u32) -> Result<bool, ResourceError>;

    /// Returns `true` once the dispose guard is installed.
    fn dispose_guarded(&self) -> bool;
    /// Wraps the texture's dispose behaviour so a pending image-load callback
    /// is detached before the GPU storage is released. Installing it twice is
    /// a no-op.
    fn install_dispose_guard(&mut self);

    /// Flags the texture for re-upload.
    fn mark_dirty(&mut self);
}
