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

//! Texture quality strategy.

use crate::scene_lane::PassStats;
use cabina_core::scene::{SamplerState, TextureResource};
use cabina_core::QualityTier;

/// Longest side a texture may keep at `Low`.
pub const LOW_MAX_TEXTURE_SIZE: u32 = 512;
/// Anisotropic filtering level used at `High`.
pub const HIGH_ANISOTROPY: u16 = 4;

/// The sampler a texture should use at `tier`.
pub fn sampler_for(tier: QualityTier) -> SamplerState {
    match tier {
        QualityTier::Low => SamplerState::LINEAR,
        QualityTier::High => SamplerState::trilinear(HIGH_ANISOTROPY),
    }
}

/// Brings `texture` in line with `tier` and makes sure it is dispose-guarded.
///
/// Returns `true` if any field changed. A failed downsample is logged and the
/// texture keeps its current image.
pub fn optimize(
    texture: &mut dyn TextureResource,
    tier: QualityTier,
    stats: &mut PassStats,
) -> bool {
    let mut changed = false;

    if !texture.dispose_guarded() {
        texture.install_dispose_guard();
        changed = true;
    }

    let sampler = sampler_for(tier);
    if texture.sampler() != sampler {
        texture.set_sampler(sampler);
        changed = true;
    }

    let mipmaps = tier == QualityTier::High;
    if texture.generate_mipmaps() != mipmaps {
        texture.set_generate_mipmaps(mipmaps);
        changed = true;
    }

    if changed {
        texture.mark_dirty();
    }

    if tier == QualityTier::Low {
        match texture.downsample_to_fit(LOW_MAX_TEXTURE_SIZE) {
            Ok(true) => {
                stats.textures_downsampled += 1;
                changed = true;
            }
            Ok(false) => {}
            Err(e) => log::warn!("Could not downsample texture: {}", e),
        }
    }

    if changed {
        stats.textures_changed += 1;
    }
    changed
}
