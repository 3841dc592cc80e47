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

//! Procedural derived resources.
//!
//! Both producers are pure: the same inputs always give byte-identical
//! textures, and nothing is uploaded here. Uploading and releasing the
//! result is the caller's business.

use cabina_core::lane::{Lane, LaneKind};
use cabina_core::math::LinearRgba;
use cabina_core::renderer::CpuTexture;
use cabina_core::QualityTier;
use image::{Rgba, RgbaImage};

/// Side length of derived textures at `High`.
pub const HIGH_RESOURCE_SIZE: u32 = 256;
/// Side length of derived textures at `Low`.
pub const LOW_RESOURCE_SIZE: u32 = 128;

/// Colour at the top of the environment gradient.
const SKY_COLOR: LinearRgba = LinearRgba::rgb(1.0, 1.0, 1.0);
/// Colour at the bottom of the environment gradient.
const GROUND_COLOR: LinearRgba = LinearRgba::rgb(0.02, 0.02, 0.025);

/// Side length of a derived texture for `tier`.
pub fn resource_size(tier: QualityTier) -> u32 {
    match tier {
        QualityTier::High => HIGH_RESOURCE_SIZE,
        QualityTier::Low => LOW_RESOURCE_SIZE,
    }
}

fn into_cpu_texture(image: RgbaImage) -> CpuTexture {
    let (width, height) = image.dimensions();
    CpuTexture {
        pixels: image.into_raw(),
        width,
        height,
    }
}

/// Builds the procedural textures used for ambient lighting and light pools.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResourceMaterializer;

impl ResourceMaterializer {
    /// Creates a new materializer.
    pub fn new() -> Self {
        Self
    }

    /// A square vertical gradient, light at the top and dark at the bottom.
    ///
    /// Used as the scene's environment map to fake soft ambient shadowing.
    pub fn environment_map(&self, tier: QualityTier) -> CpuTexture {
        let size = resource_size(tier);
        let last_row = (size - 1).max(1) as f32;
        let rows: Vec<[u8; 3]> = (0..size)
            .map(|y| LinearRgba::lerp(SKY_COLOR, GROUND_COLOR, y as f32 / last_row).to_srgb8())
            .collect();

        let image = RgbaImage::from_fn(size, size, |_, y| {
            let [r, g, b] = rows[y as usize];
            Rgba([r, g, b, 255])
        });
        into_cpu_texture(image)
    }

    /// A radial sprite tinted with `color`, opaque at the centre and fully
    /// transparent at the edge.
    pub fn light_spot(&self, color: LinearRgba, tier: QualityTier) -> CpuTexture {
        let size = resource_size(tier);
        let [r, g, b] = color.to_srgb8();
        let center = size as f32 / 2.0;

        let image = RgbaImage::from_fn(size, size, |x, y| {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            let falloff = (1.0 - (dx * dx + dy * dy).sqrt() / center).clamp(0.0, 1.0);
            let alpha = (falloff * falloff * 255.0).round() as u8;
            Rgba([r, g, b, alpha])
        });
        into_cpu_texture(image)
    }
}

impl Lane for ResourceMaterializer {
    fn strategy_name(&self) -> &'static str {
        "CB_PROCEDURAL_RESOURCES"
    }

    fn lane_kind(&self) -> LaneKind {
        LaneKind::Resource
    }
}
