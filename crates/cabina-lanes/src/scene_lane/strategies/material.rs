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

//! Material quality strategy.

use super::texture;
use crate::scene_lane::PassStats;
use cabina_core::math::approx_eq;
use cabina_core::scene::{MapSlot, MaterialScalar, ShaderPrecision, SurfaceMaterial};
use cabina_core::QualityTier;

/// Ambient occlusion intensity used at `Low`.
pub const LOW_AO_INTENSITY: f32 = 0.5;
/// Factor applied to the authored normal scale at `Low`.
pub const LOW_NORMAL_SCALE_FACTOR: f32 = 0.5;
/// Roughness written in place of a stripped roughness map.
pub const STRIPPED_ROUGHNESS: f32 = 0.5;
/// Metalness written in place of a stripped metalness map.
pub const STRIPPED_METALNESS: f32 = 0.3;

/// Maps removed at `Low`, with the scalar that replaces each one.
const STRIPPED_MAPS: [(MapSlot, MaterialScalar, f32); 2] = [
    (MapSlot::Roughness, MaterialScalar::Roughness, STRIPPED_ROUGHNESS),
    (MapSlot::Metalness, MaterialScalar::Metalness, STRIPPED_METALNESS),
];

/// Brings `material` and its textures in line with `tier`.
///
/// Returns `true` if any material field changed, in which case the material
/// has been marked dirty.
pub fn optimize(
    material: &mut dyn SurfaceMaterial,
    tier: QualityTier,
    stats: &mut PassStats,
) -> bool {
    let low = tier == QualityTier::Low;
    let mut changed = false;

    let precision = if low {
        ShaderPrecision::Medium
    } else {
        ShaderPrecision::High
    };
    if material.precision() != precision {
        material.set_precision(precision);
        changed = true;
    }

    let flat = low || material.authored_flat_shading();
    if material.flat_shading() != flat {
        material.set_flat_shading(flat);
        changed = true;
    }

    if let Some(authored) = material.authored_ao_intensity() {
        let wanted = if low { LOW_AO_INTENSITY } else { authored };
        if !material
            .scalar(MaterialScalar::AoIntensity)
            .is_some_and(|current| approx_eq(current, wanted))
        {
            material.set_scalar(MaterialScalar::AoIntensity, wanted);
            changed = true;
        }
    }

    if let Some(authored) = material.authored_normal_scale() {
        let wanted = if low {
            [
                authored[0] * LOW_NORMAL_SCALE_FACTOR,
                authored[1] * LOW_NORMAL_SCALE_FACTOR,
            ]
        } else {
            authored
        };
        let matches = material
            .normal_scale()
            .is_some_and(|s| approx_eq(s[0], wanted[0]) && approx_eq(s[1], wanted[1]));
        if !matches {
            material.set_normal_scale(wanted);
            changed = true;
        }
    }

    if low {
        for (slot, scalar, fallback) in STRIPPED_MAPS {
            let Some(map) = material.map_mut(slot) else {
                continue;
            };
            // Removal disposes the texture; the guard must already be there.
            if !map.dispose_guarded() {
                map.install_dispose_guard();
            }
            if material.remove_map(slot) {
                material.set_scalar(scalar, fallback);
                stats.maps_stripped += 1;
                changed = true;
                log::trace!("Stripped {:?} map from '{}'", slot, material.label());
            }
        }
    }

    for slot in MapSlot::ALL {
        if let Some(map) = material.map_mut(slot) {
            texture::optimize(map, tier, stats);
        }
    }

    if changed {
        material.mark_dirty();
        stats.materials_changed += 1;
    }
    changed
}
