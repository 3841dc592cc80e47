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

//! Physically based surface materials.

use super::Texture;
use cabina_core::scene::{
    MapSlot, MaterialScalar, ShaderPrecision, SurfaceMaterial, TextureResource,
};

fn slot_index(slot: MapSlot) -> usize {
    match slot {
        MapSlot::Color => 0,
        MapSlot::Normal => 1,
        MapSlot::Roughness => 2,
        MapSlot::Metalness => 3,
        MapSlot::AmbientOcclusion => 4,
    }
}

/// A metallic-roughness material.
///
/// The values it was authored with are kept next to the live ones so a
/// quality pass can always reach back to them.
#[derive(Debug)]
pub struct PbrMaterial {
    label: String,
    precision: ShaderPrecision,
    flat_shading: bool,
    authored_flat_shading: bool,
    maps: [Option<Texture>; 5],
    roughness: Option<f32>,
    metalness: Option<f32>,
    ao_intensity: Option<f32>,
    authored_ao_intensity: Option<f32>,
    normal_scale: Option<[f32; 2]>,
    authored_normal_scale: Option<[f32; 2]>,
    version: u32,
}

impl PbrMaterial {
    /// Creates a fully rough, non-metallic material with no maps.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            precision: ShaderPrecision::High,
            flat_shading: false,
            authored_flat_shading: false,
            maps: Default::default(),
            roughness: Some(1.0),
            metalness: Some(0.0),
            ao_intensity: None,
            authored_ao_intensity: None,
            normal_scale: None,
            authored_normal_scale: None,
            version: 0,
        }
    }

    /// Sets the base roughness.
    pub fn with_roughness(mut self, value: f32) -> Self {
        self.roughness = Some(value);
        self
    }

    /// Sets the base metalness.
    pub fn with_metalness(mut self, value: f32) -> Self {
        self.metalness = Some(value);
        self
    }

    /// Attaches a texture to `slot`.
    ///
    /// Attaching an ambient occlusion map authors an intensity of 1.0 and a
    /// normal map authors a scale of `[1.0, 1.0]`, unless set explicitly.
    pub fn with_map(mut self, slot: MapSlot, texture: Texture) -> Self {
        match slot {
            MapSlot::AmbientOcclusion if self.authored_ao_intensity.is_none() => {
                self.authored_ao_intensity = Some(1.0);
                self.ao_intensity = Some(1.0);
            }
            MapSlot::Normal if self.authored_normal_scale.is_none() => {
                self.authored_normal_scale = Some([1.0, 1.0]);
                self.normal_scale = Some([1.0, 1.0]);
            }
            _ => {}
        }
        self.maps[slot_index(slot)] = Some(texture);
        self
    }

    /// Authors faceted (flat) shading.
    pub fn with_flat_shading(mut self, flat: bool) -> Self {
        self.authored_flat_shading = flat;
        self.flat_shading = flat;
        self
    }

    /// Authors the ambient occlusion intensity.
    pub fn with_ao_intensity(mut self, value: f32) -> Self {
        self.authored_ao_intensity = Some(value);
        self.ao_intensity = Some(value);
        self
    }

    /// Authors the normal map scale.
    pub fn with_normal_scale(mut self, scale: [f32; 2]) -> Self {
        self.authored_normal_scale = Some(scale);
        self.normal_scale = Some(scale);
        self
    }

    /// Read access to the texture in `slot`.
    pub fn texture(&self, slot: MapSlot) -> Option<&Texture> {
        self.maps[slot_index(slot)].as_ref()
    }

    /// Mutable access to the concrete texture in `slot`.
    pub fn texture_mut(&mut self, slot: MapSlot) -> Option<&mut Texture> {
        self.maps[slot_index(slot)].as_mut()
    }

    /// Iterates over every attached texture.
    pub fn textures(&self) -> impl Iterator<Item = &Texture> {
        self.maps.iter().flatten()
    }

    /// Bumped every time the material is marked dirty.
    pub fn version(&self) -> u32 {
        self.version
    }
}

impl SurfaceMaterial for PbrMaterial {
    fn label(&self) -> &str {
        &self.label
    }

    fn precision(&self) -> ShaderPrecision {
        self.precision
    }

    fn set_precision(&mut self, precision: ShaderPrecision) {
        self.precision = precision;
    }

    fn flat_shading(&self) -> bool {
        self.flat_shading
    }

    fn set_flat_shading(&mut self, flat: bool) {
        self.flat_shading = flat;
    }

    fn authored_flat_shading(&self) -> bool {
        self.authored_flat_shading
    }

    fn has_map(&self, slot: MapSlot) -> bool {
        self.maps[slot_index(slot)].is_some()
    }

    fn map_mut(&mut self, slot: MapSlot) -> Option<&mut dyn TextureResource> {
        self.maps[slot_index(slot)]
            .as_mut()
            .map(|t| t as &mut dyn TextureResource)
    }

    fn remove_map(&mut self, slot: MapSlot) -> bool {
        match self.maps[slot_index(slot)].take() {
            Some(mut texture) => {
                texture.dispose();
                true
            }
            None => false,
        }
    }

    fn scalar(&self, scalar: MaterialScalar) -> Option<f32> {
        match scalar {
            MaterialScalar::Roughness => self.roughness,
            MaterialScalar::Metalness => self.metalness,
            MaterialScalar::AoIntensity => self.ao_intensity,
        }
    }

    fn set_scalar(&mut self, scalar: MaterialScalar, value: f32) {
        let field = match scalar {
            MaterialScalar::Roughness => &mut self.roughness,
            MaterialScalar::Metalness => &mut self.metalness,
            MaterialScalar::AoIntensity => &mut self.ao_intensity,
        };
        *field = Some(value);
    }

    fn authored_ao_intensity(&self) -> Option<f32> {
        self.authored_ao_intensity
    }

    fn normal_scale(&self) -> Option<[f32; 2]> {
        self.normal_scale
    }

    fn set_normal_scale(&mut self, scale: [f32; 2]) {
        self.normal_scale = Some(scale);
    }

    fn authored_normal_scale(&self) -> Option<[f32; 2]> {
        self.authored_normal_scale
    }

    fn mark_dirty(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}
