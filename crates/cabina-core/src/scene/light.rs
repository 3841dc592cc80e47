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

//! Light-level capabilities.

/// The kind of light source, which selects the shadow tuning profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightKind {
    /// Infinitely distant light with parallel rays.
    Directional,
    /// Omni-directional light with distance falloff.
    Point,
    /// Cone-shaped light with distance and angular falloff.
    Spot,
}

/// Shadow-map parameters of a shadow-capable light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowSettings {
    /// Side length of the square shadow map, in texels.
    pub map_size: u32,
    /// Near clip plane of the shadow camera.
    pub near: f32,
    /// Far clip plane of the shadow camera.
    pub far: f32,
    /// Depth bias applied when sampling the shadow map.
    pub bias: f32,
    /// Bias along the surface normal.
    pub normal_bias: f32,
    /// Blur radius of the soft shadow filter.
    pub radius: f32,
    /// Number of samples taken by the soft shadow filter.
    pub blur_samples: u32,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            map_size: 512,
            near: 0.5,
            far: 500.0,
            bias: 0.0,
            normal_bias: 0.0,
            radius: 1.0,
            blur_samples: 8,
        }
    }
}

/// A light source attached to a scene node.
///
/// A light is shadow-capable when it exposes [`ShadowSettings`]; lights
/// without settings are never asked to cast shadows.
pub trait LightSource {
    /// Returns the kind of light.
    fn kind(&self) -> LightKind;

    /// Returns `true` if the light currently casts shadows.
    fn casts_shadow(&self) -> bool;
    /// Enables or disables shadow casting.
    fn set_casts_shadow(&mut self, enabled: bool);

    /// Returns the shadow settings, if the light is shadow-capable.
    fn shadow_mut(&mut self) -> Option<&mut ShadowSettings>;

    /// Returns the cone penumbra, for spot lights.
    fn penumbra(&self) -> Option<f32>;
    /// Sets the cone penumbra. Non-spot lights ignore the call.
    fn set_penumbra(&mut self, penumbra: f32);
}
