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

//! Image-backed textures.

use cabina_core::renderer::ResourceError;
use cabina_core::scene::{SamplerState, TextureResource};
use image::imageops::{self, FilterType};
use image::RgbaImage;
use std::fmt;

/// Callback invoked once the source image of a texture finishes loading.
pub type LoadCallback = Box<dyn FnOnce(&RgbaImage) + Send>;

/// A texture owned by a material slot.
///
/// The image may still be loading, in which case a [`LoadCallback`] is
/// attached and fired by [`finish_loading`](Texture::finish_loading).
pub struct Texture {
    label: String,
    image: Option<RgbaImage>,
    pending_load: Option<LoadCallback>,
    sampler: SamplerState,
    generate_mipmaps: bool,
    dispose_guarded: bool,
    disposed: bool,
    version: u32,
}

impl Texture {
    /// Creates a texture from an already decoded image.
    pub fn from_image(label: impl Into<String>, image: RgbaImage) -> Self {
        Self {
            label: label.into(),
            image: Some(image),
            pending_load: None,
            sampler: SamplerState::default(),
            generate_mipmaps: true,
            dispose_guarded: false,
            disposed: false,
            version: 0,
        }
    }

    /// Creates a texture whose image is still in flight.
    pub fn loading(label: impl Into<String>, on_load: LoadCallback) -> Self {
        Self {
            label: label.into(),
            image: None,
            pending_load: Some(on_load),
            sampler: SamplerState::default(),
            generate_mipmaps: true,
            dispose_guarded: false,
            disposed: false,
            version: 0,
        }
    }

    /// The texture's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The decoded image, if loaded and not disposed.
    pub fn image(&self) -> Option<&RgbaImage> {
        self.image.as_ref()
    }

    /// Whether an image load is still pending.
    pub fn is_loading(&self) -> bool {
        self.pending_load.is_some()
    }

    /// Whether GPU storage for this texture has been released.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Bumped every time the texture is marked dirty.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Delivers the loaded image.
    ///
    /// Returns `true` if a pending callback was fired. On a disposed texture
    /// the image itself is dropped, but a callback that was never detached
    /// still fires.
    pub fn finish_loading(&mut self, image: RgbaImage) -> bool {
        let fired = match self.pending_load.take() {
            Some(callback) => {
                callback(&image);
                true
            }
            None => false,
        };
        if !self.disposed {
            self.image = Some(image);
            self.mark_dirty();
        }
        fired
    }

    /// Releases the texture's storage.
    ///
    /// With a dispose guard installed, a pending load callback is detached
    /// first so it can never fire against released storage.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        if self.dispose_guarded && self.pending_load.take().is_some() {
            log::trace!("Detached pending load of texture '{}'", self.label);
        }
        self.image = None;
        self.disposed = true;
    }
}

impl fmt::Debug for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture")
            .field("label", &self.label)
            .field("dimensions", &self.dimensions())
            .field("loading", &self.is_loading())
            .field("sampler", &self.sampler)
            .field("generate_mipmaps", &self.generate_mipmaps)
            .field("dispose_guarded", &self.dispose_guarded)
            .field("disposed", &self.disposed)
            .finish()
    }
}

impl TextureResource for Texture {
    fn sampler(&self) -> SamplerState {
        self.sampler
    }

    fn set_sampler(&mut self, sampler: SamplerState) {
        self.sampler = sampler;
    }

    fn generate_mipmaps(&self) -> bool {
        self.generate_mipmaps
    }

    fn set_generate_mipmaps(&mut self, enabled: bool) {
        self.generate_mipmaps = enabled;
    }

    fn dimensions(&self) -> Option<(u32, u32)> {
        self.image.as_ref().map(|img| img.dimensions())
    }

    fn downsample_to_fit(&mut self, max_side: u32) -> Result<bool, ResourceError> {
        if self.disposed {
            return Err(ResourceError::ImageUnavailable);
        }
        let Some(image) = self.image.as_ref() else {
            return Ok(false);
        };
        let (width, height) = image.dimensions();
        let longest = width.max(height);
        if longest <= max_side || max_side == 0 {
            return Ok(false);
        }

        let scale = max_side as f32 / longest as f32;
        let new_width = ((width as f32 * scale).round() as u32).clamp(1, max_side);
        let new_height = ((height as f32 * scale).round() as u32).clamp(1, max_side);
        let resized = imageops::resize(image, new_width, new_height, FilterType::Triangle);
        log::trace!(
            "Downsampled texture '{}' from {}x{} to {}x{}",
            self.label,
            width,
            height,
            new_width,
            new_height
        );
        self.image = Some(resized);
        self.mark_dirty();
        Ok(true)
    }

    fn dispose_guarded(&self) -> bool {
        self.dispose_guarded
    }

    fn install_dispose_guard(&mut self) {
        self.dispose_guarded = true;
    }

    fn mark_dirty(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}
