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

//! Scene lights.

use cabina_core::math::LinearRgba;
use cabina_core::scene::{LightKind, LightSource, ShadowSettings};

/// A light attached to a scene node.
#[derive(Debug, Clone)]
pub struct Light {
    /// What kind of light this is.
    pub kind: LightKind,
    /// Linear colour of the emitted light.
    pub color: LinearRgba,
    /// Intensity in renderer units.
    pub intensity: f32,
    /// Whether the light currently renders into a shadow map.
    pub cast_shadow: bool,
    /// Shadow parameters; `None` for lights that can never cast shadows.
    pub shadow: Option<ShadowSettings>,
    /// Penumbra of the cone, spot lights only.
    pub penumbra: Option<f32>,
}

impl Light {
    fn new(kind: LightKind, color: LinearRgba, intensity: f32) -> Self {
        Self {
            kind,
            color,
            intensity,
            cast_shadow: false,
            shadow: Some(ShadowSettings::default()),
            penumbra: None,
        }
    }

    /// A sun-like light.
    pub fn directional(color: LinearRgba, intensity: f32) -> Self {
        Self::new(LightKind::Directional, color, intensity)
    }

    /// An omnidirectional light.
    pub fn point(color: LinearRgba, intensity: f32) -> Self {
        Self::new(LightKind::Point, color, intensity)
    }

    /// A cone light, such as a ceiling downlight.
    pub fn spot(color: LinearRgba, intensity: f32) -> Self {
        Self {
            penumbra: Some(0.0),
            ..Self::new(LightKind::Spot, color, intensity)
        }
    }

    /// Removes shadow support (ambient fill lights).
    pub fn without_shadows(mut self) -> Self {
        self.shadow = None;
        self.cast_shadow = false;
        self
    }
}

impl LightSource for Light {
    fn kind(&self) -> LightKind {
        self.kind
    }

    fn casts_shadow(&self) -> bool {
        self.cast_shadow
    }

    fn set_casts_shadow(&mut self, enabled: bool) {
        self.cast_shadow = enabled;
    }

    fn shadow_mut(&mut self) -> Option<&mut ShadowSettings> {
        self.shadow.as_mut()
    }

    fn penumbra(&self) -> Option<f32> {
        self.penumbra
    }

    fn set_penumbra(&mut self, penumbra: f32) {
        if self.penumbra.is_some() {
            self.penumbra = Some(penumbra);
        }
    }
}
