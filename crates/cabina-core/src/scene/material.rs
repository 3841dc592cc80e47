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

//! Material-level capabilities.

use super::TextureResource;

/// Shader float precision hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShaderPrecision {
    /// `mediump` equivalent.
    Medium,
    /// `highp` equivalent.
    #[default]
    High,
}

/// Named texture map slots of a PBR material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapSlot {
    /// Base colour (albedo).
    Color,
    /// Tangent-space normal map.
    Normal,
    /// Roughness map.
    Roughness,
    /// Metalness map.
    Metalness,
    /// Ambient occlusion map.
    AmbientOcclusion,
}

impl MapSlot {
    /// Every slot, in a stable order.
    pub const ALL: [MapSlot; 5] = [
        MapSlot::Color,
        MapSlot::Normal,
        MapSlot::Roughness,
        MapSlot::Metalness,
        MapSlot::AmbientOcclusion,
    ];
}

/// Scalar material parameters that can stand in for a stripped map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialScalar {
    /// Roughness factor.
    Roughness,
    /// Metalness factor.
    Metalness,
    /// Ambient occlusion intensity.
    AoIntensity,
}

/// A surface material instance the optimization pass may tune.
///
/// The `authored_*` accessors return the values the scene layer created the
/// material with; the pass derives every tier-dependent value from them so
/// that running it repeatedly converges instead of compounding.
pub trait SurfaceMaterial {
    /// A human-readable label, used in logs.
    fn label(&self) -> &str;

    /// Returns the shader precision hint.
    fn precision(&self) -> ShaderPrecision;
    /// Sets the shader precision hint.
    fn set_precision(&mut self, precision: ShaderPrecision);

    /// Returns `true` if flat shading is forced.
    fn flat_shading(&self) -> bool;
    /// Forces or releases flat shading.
    fn set_flat_shading(&mut self, flat: bool);
    /// Returns `true` if the material was authored flat-shaded.
    fn authored_flat_shading(&self) -> bool;

    /// Returns `true` if a texture is bound to `slot`.
    fn has_map(&self, slot: MapSlot) -> bool;
    /// Returns the texture bound to `slot`, if any.
    fn map_mut(&mut self, slot: MapSlot) -> Option<&mut dyn TextureResource>;
    /// Unbinds and disposes the texture bound to `slot`. Returns `true` if a
    /// texture was removed.
    fn remove_map(&mut self, slot: MapSlot) -> bool;

    /// Returns a scalar parameter, or `None` if the material has no such parameter.
    fn scalar(&self, scalar: MaterialScalar) -> Option<f32>;
    /// Sets a scalar parameter. Materials without the parameter ignore the call.
    fn set_scalar(&mut self, scalar: MaterialScalar, value: f32);
    /// Returns the authored ambient occlusion intensity, if the material has one.
    fn authored_ao_intensity(&self) -> Option<f32>;

    /// Returns the current normal scale, if the material has a normal scale vector.
    fn normal_scale(&self) -> Option<[f32; 2]>;
    /// Sets the normal scale vector. Materials without one ignore the call.
    fn set_normal_scale(&mut self, scale: [f32; 2]);
    /// Returns the authored normal scale vector, if any.
    fn authored_normal_scale(&self) -> Option<[f32; 2]>;

    /// Flags the material for shader/uniform re-upload.
    fn mark_dirty(&mut self);
}
