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

//! Light quality strategy.

use crate::scene_lane::OptimizationTarget;
use cabina_core::scene::{LightKind, LightSource, ShadowSettings};
use cabina_core::QualityTier;

/// Shadow map resolution on mobile devices.
pub const MOBILE_SHADOW_MAP_SIZE: u32 = 1024;
/// Shadow map resolution everywhere else.
pub const DESKTOP_SHADOW_MAP_SIZE: u32 = 2048;
/// Penumbra given to spot lights at `High`.
pub const SPOT_PENUMBRA: f32 = 0.4;

/// The shadow parameters a light of `kind` should use at `High`.
pub fn shadow_settings_for(kind: LightKind, target: &OptimizationTarget) -> ShadowSettings {
    let map_size = if target.mobile {
        MOBILE_SHADOW_MAP_SIZE
    } else {
        DESKTOP_SHADOW_MAP_SIZE
    };
    let near = (target.scene_scale * 0.01).max(0.05);
    let far = target.scene_scale * 3.0;

    match kind {
        LightKind::Spot => ShadowSettings {
            map_size,
            near,
            far,
            bias: -0.0005,
            normal_bias: 0.02,
            radius: 4.0,
            blur_samples: 16,
        },
        LightKind::Point | LightKind::Directional => ShadowSettings {
            map_size,
            near,
            far,
            bias: -0.0001,
            normal_bias: 0.01,
            radius: 2.0,
            blur_samples: 8,
        },
    }
}

/// Brings `light` in line with the target tier. Returns `true` if anything changed.
///
/// At `Low` every light stops casting shadows. At `High` only lights that
/// carry shadow settings are switched back on; the others are left alone.
pub fn optimize(light: &mut dyn LightSource, target: &OptimizationTarget) -> bool {
    match target.tier {
        QualityTier::Low => {
            if light.casts_shadow() {
                light.set_casts_shadow(false);
                true
            } else {
                false
            }
        }
        QualityTier::High => {
            let kind = light.kind();
            let Some(shadow) = light.shadow_mut() else {
                return false;
            };

            let mut changed = false;
            let wanted = shadow_settings_for(kind, target);
            if *shadow != wanted {
                *shadow = wanted;
                changed = true;
            }
            if !light.casts_shadow() {
                light.set_casts_shadow(true);
                changed = true;
            }
            if kind == LightKind::Spot && light.penumbra() != Some(SPOT_PENUMBRA) {
                light.set_penumbra(SPOT_PENUMBRA);
                changed = true;
            }
            changed
        }
    }
}
