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

//! Renderer-wide state the quality controller drives.

use cabina_core::renderer::{RendererControls, TextureId};

/// The renderer's global switches.
#[derive(Debug, Clone, PartialEq)]
pub struct RendererState {
    native_pixel_ratio: f32,
    pixel_ratio: f32,
    shadow_maps_enabled: bool,
    environment_map: Option<TextureId>,
    /// Logical viewport size in CSS-like pixels.
    pub viewport: (u32, u32),
}

impl RendererState {
    /// Creates a renderer for a display with the given native pixel ratio.
    ///
    /// Non-finite or non-positive ratios are treated as 1.0.
    pub fn new(native_pixel_ratio: f32, viewport: (u32, u32)) -> Self {
        let native = if native_pixel_ratio.is_finite() && native_pixel_ratio > 0.0 {
            native_pixel_ratio
        } else {
            1.0
        };
        Self {
            native_pixel_ratio: native,
            pixel_ratio: native,
            shadow_maps_enabled: false,
            environment_map: None,
            viewport,
        }
    }

    /// The environment map currently bound, if any.
    pub fn environment_map(&self) -> Option<TextureId> {
        self.environment_map
    }

    /// Size of the drawing buffer in physical pixels.
    pub fn drawing_buffer_size(&self) -> (u32, u32) {
        let (w, h) = self.viewport;
        (
            (w as f32 * self.pixel_ratio).round() as u32,
            (h as f32 * self.pixel_ratio).round() as u32,
        )
    }
}

impl RendererControls for RendererState {
    fn native_pixel_ratio(&self) -> f32 {
        self.native_pixel_ratio
    }

    fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    fn set_pixel_ratio(&mut self, ratio: f32) {
        self.pixel_ratio = ratio;
    }

    fn shadow_maps_enabled(&self) -> bool {
        self.shadow_maps_enabled
    }

    fn set_shadow_maps_enabled(&mut self, enabled: bool) {
        self.shadow_maps_enabled = enabled;
    }

    fn set_environment_map(&mut self, texture: Option<TextureId>) {
        self.environment_map = texture;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_native_ratio_falls_back() {
        let state = RendererState::new(f32::NAN, (800, 600));
        assert_eq!(state.native_pixel_ratio(), 1.0);
    }

    #[test]
    fn test_drawing_buffer_follows_ratio() {
        let mut state = RendererState::new(2.0, (800, 600));
        assert_eq!(state.drawing_buffer_size(), (1600, 1200));
        state.set_pixel_ratio(1.5);
        assert_eq!(state.drawing_buffer_size(), (1200, 900));
    }
}
