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

//! Shared fixtures for the agent integration tests.

#![allow(dead_code)]

use cabina_agents::QualityAgent;
use cabina_control::{DeviceClassifier, QualityConfig};
use cabina_core::agent::Agent;
use cabina_core::scene::{MapSlot, SurfaceMaterial, TextureResource};
use cabina_core::{FrameContext, HostEnvironment};
use cabina_data::scene::recipe::demo_cabin;
use cabina_data::{Node, RendererState, TextureStore};
use std::time::{Duration, Instant};

/// Frame delta giving an instantaneous rate of ~60 fps.
pub const FPS_60: Duration = Duration::from_micros(16_667);
/// Frame delta giving an instantaneous rate of ~35 fps.
pub const FPS_35: Duration = Duration::from_micros(28_571);
/// Frame delta giving an instantaneous rate of ~30 fps.
pub const FPS_30: Duration = Duration::from_micros(33_333);

pub const DESKTOP: &str = "Mozilla/5.0 (X11; Linux x86_64)";
pub const PHONE: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) Mobile";

/// A host with fixed answers.
pub struct FakeHost {
    pub cores: Option<usize>,
    pub signature: &'static str,
    pub advanced_gpu: bool,
}

impl HostEnvironment for FakeHost {
    fn logical_cores(&self) -> Option<usize> {
        self.cores
    }

    fn platform_signature(&self) -> String {
        self.signature.to_string()
    }

    fn advanced_gpu_api_available(&self) -> bool {
        self.advanced_gpu
    }
}

pub fn high_end_classifier() -> DeviceClassifier {
    DeviceClassifier::new(Box::new(FakeHost {
        cores: Some(16),
        signature: DESKTOP,
        advanced_gpu: true,
    }))
}

pub fn standard_classifier() -> DeviceClassifier {
    DeviceClassifier::new(Box::new(FakeHost {
        cores: Some(4),
        signature: PHONE,
        advanced_gpu: false,
    }))
}

/// Everything a frame needs, plus a clock the test advances by hand.
pub struct Harness {
    pub scene: Node,
    pub renderer: RendererState,
    pub store: TextureStore,
    pub now: Instant,
}

impl Harness {
    /// The demo cabin on a 2x display.
    pub fn new(start: Instant) -> Self {
        Self {
            scene: demo_cabin(),
            renderer: RendererState::new(2.0, (1280, 720)),
            store: TextureStore::unbounded(),
            now: start,
        }
    }

    pub fn with_store(mut self, store: TextureStore) -> Self {
        self.store = store;
        self
    }

    fn context(&mut self) -> FrameContext<'_> {
        FrameContext {
            now: self.now,
            scene: &mut self.scene,
            renderer: &mut self.renderer,
            textures: &mut self.store,
        }
    }

    /// Advances the clock by `dt` and runs one frame of `agent`.
    pub fn step(&mut self, agent: &mut dyn Agent, dt: Duration) {
        self.now += dt;
        let mut context = self.context();
        agent.update(&mut context);
    }

    /// Runs `frames` frames of `agent`, `dt` apart.
    pub fn run(&mut self, agent: &mut dyn Agent, frames: usize, dt: Duration) {
        for _ in 0..frames {
            self.step(agent, dt);
        }
    }

    pub fn teardown(&mut self, agent: &mut dyn Agent) {
        let mut context = self.context();
        agent.teardown(&mut context);
    }
}

pub fn quality_agent(classifier: &DeviceClassifier, start: Instant) -> QualityAgent {
    QualityAgent::new(QualityConfig::default(), classifier, start)
}

/// Visits every material under visible nodes.
pub fn visible_materials(node: &Node, visit: &mut dyn FnMut(&cabina_data::PbrMaterial)) {
    if !node.visible {
        return;
    }
    if let Some(mesh) = &node.mesh {
        mesh.materials.iter().for_each(&mut *visit);
    }
    for child in &node.children {
        visible_materials(child, visit);
    }
}

/// A textual snapshot of every node, material and texture in the graph.
///
/// Light shadow parameters are left out: `Low` only switches shadows off and
/// keeps whatever parameters `High` configured.
pub fn snapshot(root: &Node) -> Vec<String> {
    let mut lines = Vec::new();
    root.walk(&mut |node| {
        lines.push(format!(
            "node {} visible={} culled={}",
            node.name, node.visible, node.frustum_culled
        ));
        if let Some(light) = &node.light {
            lines.push(format!("  light casts_shadow={}", light.cast_shadow));
        }
        let Some(mesh) = &node.mesh else {
            return;
        };
        for material in &mesh.materials {
            lines.push(format!(
                "  material {} {:?} flat={} ao={:?} normal={:?} rough={:?} metal={:?}",
                material.label(),
                material.precision(),
                material.flat_shading(),
                material.scalar(cabina_core::scene::MaterialScalar::AoIntensity),
                material.normal_scale(),
                material.scalar(cabina_core::scene::MaterialScalar::Roughness),
                material.scalar(cabina_core::scene::MaterialScalar::Metalness),
            ));
            for slot in MapSlot::ALL {
                if let Some(texture) = material.texture(slot) {
                    lines.push(format!(
                        "    {:?} {} {:?} mips={} dims={:?} guarded={}",
                        slot,
                        texture.label(),
                        texture.sampler(),
                        texture.generate_mipmaps(),
                        texture.dimensions(),
                        texture.dispose_guarded()
                    ));
                }
            }
        }
    });
    lines
}
