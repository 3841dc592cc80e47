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

use anyhow::{bail, Context, Result};
use cabina_agents::{AmbienceAgent, QualityAgent};
use cabina_control::{DeviceClassifier, QualityConfig};
use cabina_core::agent::Agent;
use cabina_core::math::LinearRgba;
use cabina_core::renderer::RendererControls;
use cabina_core::FrameContext;
use cabina_data::scene::recipe::demo_cabin;
use cabina_data::{Node, RendererState, TextureStore};
use cabina_infra::NativeHostEnvironment;
use std::time::{Duration, Instant};

/// GPU memory granted to derived textures in the simulated session.
const TEXTURE_BUDGET: usize = 8 * 1024 * 1024;

/// One stretch of simulated frames at a fixed frame time.
struct LoadPhase {
    name: &'static str,
    seconds: f32,
    frame_time: Duration,
}

const PHASES: [LoadPhase; 3] = [
    LoadPhase {
        name: "idle cabin",
        seconds: 4.0,
        frame_time: Duration::from_micros(16_667),
    },
    LoadPhase {
        name: "heavy finish preview",
        seconds: 6.0,
        frame_time: Duration::from_micros(33_333),
    },
    LoadPhase {
        name: "recovered",
        seconds: 14.0,
        frame_time: Duration::from_micros(16_667),
    },
];

const USAGE: &str = "usage: sandbox [--dump-config] [--no-gpu-probe] [CONFIG.ron]";

#[derive(Debug, Default, PartialEq)]
struct Options {
    config_path: Option<String>,
    dump_config: bool,
    no_gpu_probe: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options> {
    let mut options = Options::default();
    for arg in args {
        match arg.as_str() {
            "--dump-config" => options.dump_config = true,
            "--no-gpu-probe" => options.no_gpu_probe = true,
            flag if flag.starts_with("--") => bail!("unknown option '{}'\n{}", flag, USAGE),
            path => {
                if let Some(first) = &options.config_path {
                    bail!("more than one config path ('{}', '{}')\n{}", first, path, USAGE);
                }
                options.config_path = Some(path.to_string());
            }
        }
    }
    Ok(options)
}

fn frame(
    agents: &mut [&mut dyn Agent],
    now: Instant,
    scene: &mut Node,
    renderer: &mut RendererState,
    store: &mut TextureStore,
    teardown: bool,
) {
    let mut context = FrameContext {
        now,
        scene,
        renderer,
        textures: store,
    };
    for agent in agents.iter_mut() {
        if teardown {
            agent.teardown(&mut context);
        } else {
            agent.update(&mut context);
        }
    }
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};
    Builder::from_env(Env::default().default_filter_or("info"))
        .filter_module("wgpu_hal", log::LevelFilter::Error)
        .init();

    let options = parse_args(std::env::args().skip(1))?;
    let config = match &options.config_path {
        Some(path) => QualityConfig::load(path)
            .with_context(|| format!("failed to load quality config '{}'", path))?,
        None => QualityConfig::default(),
    };
    if options.dump_config {
        println!("{}", config.to_ron_string()?);
        return Ok(());
    }

    let host = if options.no_gpu_probe {
        NativeHostEnvironment::without_gpu_probe()
    } else {
        NativeHostEnvironment::new()
    };
    let classifier = DeviceClassifier::new(Box::new(host)).with_override(config.device_override);

    let mut now = Instant::now();
    let mut scene = demo_cabin();
    let mut renderer = RendererState::new(2.0, (1280, 720));
    let mut store = TextureStore::with_budget(TEXTURE_BUDGET);

    let mut quality = QualityAgent::new(config, &classifier, now);
    let mut ambience = AmbienceAgent::new(quality.tier_reader());
    let viewport = quality.viewport_notifier();
    log::info!("Device profile: {:?}", quality.device_profile());

    for phase in &PHASES {
        log::info!("--- Phase: {} ---", phase.name);
        let frames = (phase.seconds / phase.frame_time.as_secs_f32()).round() as usize;
        for i in 0..frames {
            now += phase.frame_time;
            if i == frames / 2 {
                viewport.resized(1600, 900);
                ambience.set_light_spot_color(LinearRgba::from_hex("#FFD9A0"));
            }
            let mut agents: [&mut dyn Agent; 2] = [&mut quality, &mut ambience];
            frame(&mut agents, now, &mut scene, &mut renderer, &mut store, false);
        }
        for status in [quality.report_status(), ambience.report_status()] {
            log::info!("[{}] {}: {}", status.agent_id, status.tier, status.message);
        }
        log::info!(
            "Renderer: pixel ratio {:.2}, shadows {}, buffer {:?}, {} bytes of textures",
            renderer.pixel_ratio(),
            renderer.shadow_maps_enabled(),
            renderer.drawing_buffer_size(),
            store.used_bytes()
        );
    }

    let mut agents: [&mut dyn Agent; 2] = [&mut quality, &mut ambience];
    frame(&mut agents, now, &mut scene, &mut renderer, &mut store, true);
    log::info!(
        "Session ended with {} transitions, {} live textures",
        quality.transition_count(),
        store.live_count()
    );
    Ok(())
}
