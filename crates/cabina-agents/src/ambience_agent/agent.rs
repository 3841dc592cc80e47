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

//! Defines the AmbienceAgent, which owns the procedural ambient textures.

use cabina_core::agent::{Agent, AgentId, AgentStatus};
use cabina_core::math::LinearRgba;
use cabina_core::renderer::{CpuTexture, TextureAllocator, TextureId};
use cabina_core::{FrameContext, Lane, QualityTier, QualityTierReader};
use cabina_lanes::ResourceMaterializer;

/// A derived texture and the inputs it was built from.
///
/// `id` is `None` when the last allocation for `key` failed; the agent then
/// treats the feature as absent until `key` changes.
#[derive(Debug, Clone, Copy)]
struct Derived<K> {
    key: K,
    id: Option<TextureId>,
}

type SpotKey = (QualityTier, [u8; 3]);

/// Keeps the environment map and the light-spot sprite in sync with the tier.
///
/// Once torn down the agent ignores further updates.
pub struct AmbienceAgent {
    tier: QualityTierReader,
    materializer: ResourceMaterializer,
    spot_color: LinearRgba,
    spot_enabled: bool,
    environment: Option<Derived<QualityTier>>,
    light_spot: Option<Derived<SpotKey>>,
    allocations: u64,
    torn_down: bool,
}

impl AmbienceAgent {
    /// Creates the agent, following the tier published through `tier`.
    pub fn new(tier: QualityTierReader) -> Self {
        Self {
            tier,
            materializer: ResourceMaterializer::new(),
            spot_color: LinearRgba::WHITE,
            spot_enabled: true,
            environment: None,
            light_spot: None,
            allocations: 0,
            torn_down: false,
        }
    }

    /// Sets the tint of the light pool under the ceiling lights.
    pub fn set_light_spot_color(&mut self, color: LinearRgba) {
        self.spot_color = color;
    }

    /// Shows or hides the light pool.
    pub fn set_light_spot_enabled(&mut self, enabled: bool) {
        self.spot_enabled = enabled;
    }

    /// The live environment map texture, if any.
    pub fn environment_map(&self) -> Option<TextureId> {
        self.environment.and_then(|d| d.id)
    }

    /// The live light-spot texture, if any.
    pub fn light_spot(&self) -> Option<TextureId> {
        self.light_spot.and_then(|d| d.id)
    }

    /// Number of successful uploads since creation.
    pub fn allocation_count(&self) -> u64 {
        self.allocations
    }

    fn upload(
        &mut self,
        textures: &mut dyn TextureAllocator,
        label: &str,
        texture: &CpuTexture,
    ) -> Option<TextureId> {
        match textures.allocate(label, texture) {
            Ok(id) => {
                self.allocations += 1;
                log::debug!(
                    "{} uploaded {} ({}x{})",
                    self.materializer.strategy_name(),
                    label,
                    texture.width,
                    texture.height
                );
                Some(id)
            }
            Err(e) => {
                log::warn!("Could not upload {}, continuing without it: {}", label, e);
                None
            }
        }
    }

    fn release(textures: &mut dyn TextureAllocator, label: &str, id: Option<TextureId>) {
        if let Some(id) = id {
            if let Err(e) = textures.release(id) {
                log::warn!("Could not release {}: {}", label, e);
            }
        }
    }

    fn sync_environment(&mut self, context: &mut FrameContext<'_>, tier: QualityTier) {
        if self.environment.is_some_and(|d| d.key == tier) {
            return;
        }
        if let Some(old) = self.environment.take() {
            Self::release(context.textures, "environment map", old.id);
        }

        let texture = self.materializer.environment_map(tier);
        let id = self.upload(context.textures, "environment map", &texture);
        context.renderer.set_environment_map(id);
        self.environment = Some(Derived { key: tier, id });
    }

    fn sync_light_spot(&mut self, context: &mut FrameContext<'_>, tier: QualityTier) {
        let wanted = self.spot_enabled.then(|| (tier, self.spot_color.to_srgb8()));
        if self.light_spot.map(|d| d.key) == wanted {
            return;
        }
        if let Some(old) = self.light_spot.take() {
            Self::release(context.textures, "light spot", old.id);
        }

        if let Some(key) = wanted {
            let texture = self.materializer.light_spot(self.spot_color, tier);
            let id = self.upload(context.textures, "light spot", &texture);
            self.light_spot = Some(Derived { key, id });
        }
    }
}

impl Agent for AmbienceAgent {
    fn id(&self) -> AgentId {
        AgentId::Ambience
    }

    fn update(&mut self, context: &mut FrameContext<'_>) {
        if self.torn_down {
            return;
        }
        let tier = self.tier.get();
        self.sync_environment(context, tier);
        self.sync_light_spot(context, tier);
    }

    fn report_status(&self) -> AgentStatus {
        let state = |present: bool, id: Option<TextureId>| match (present, id) {
            (false, _) => "off",
            (true, Some(_)) => "live",
            (true, None) => "unavailable",
        };
        AgentStatus {
            agent_id: AgentId::Ambience,
            tier: self.tier.get(),
            message: format!(
                "environment map {}, light spot {}, {} uploads",
                state(self.environment.is_some(), self.environment_map()),
                state(self.light_spot.is_some(), self.light_spot()),
                self.allocations
            ),
        }
    }

    fn teardown(&mut self, context: &mut FrameContext<'_>) {
        if let Some(old) = self.environment.take() {
            Self::release(context.textures, "environment map", old.id);
            context.renderer.set_environment_map(None);
        }
        if let Some(old) = self.light_spot.take() {
            Self::release(context.textures, "light spot", old.id);
        }
        self.torn_down = true;
        log::debug!("Ambience resources released");
    }
}

impl Drop for AmbienceAgent {
    fn drop(&mut self) {
        if self.environment_map().is_some() || self.light_spot().is_some() {
            log::warn!("AmbienceAgent dropped without teardown; derived textures leaked");
        }
    }
}
