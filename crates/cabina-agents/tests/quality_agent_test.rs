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

mod common;

use cabina_agents::QualityAgent;
use cabina_control::QualityConfig;
use cabina_core::agent::{Agent, AgentId};
use cabina_core::renderer::RendererControls;
use cabina_core::scene::{MapSlot, SurfaceMaterial};
use cabina_core::QualityTier;
use cabina_data::scene::recipe::demo_cabin;
use cabina_data::{Mesh, Node, PbrMaterial};
use cabina_lanes::{OptimizationTarget, SceneOptimizationLane};
use common::*;
use std::time::{Duration, Instant};

#[test]
fn test_upgrade_at_60_fps_on_high_device() {
    // --- 1. ARRANGE ---
    let start = Instant::now();
    let classifier = high_end_classifier();
    let mut agent = quality_agent(&classifier, start).with_initial_tier(QualityTier::Low);
    let mut harness = Harness::new(start);

    // --- 2. ACT ---
    // Nine frames: still warming up, the initial Low tier is in place.
    harness.run(&mut agent, 9, FPS_60);
    assert_eq!(agent.current_tier(), QualityTier::Low);
    assert_eq!(harness.renderer.pixel_ratio(), 1.0);
    assert!(!harness.renderer.shadow_maps_enabled());

    // The tenth sample completes the warm-up.
    harness.step(&mut agent, FPS_60);

    // --- 3. ASSERT ---
    let rate = agent.smoothed_rate().unwrap();
    assert!((rate - 60.0).abs() < 0.1, "smoothed rate {rate}");
    assert_eq!(agent.current_tier(), QualityTier::High);
    assert_eq!(agent.transition_count(), 1);
    assert_eq!(harness.renderer.pixel_ratio(), 1.5);
    assert!(harness.renderer.shadow_maps_enabled());

    // The scene pass ran with the High tier.
    assert!(harness.scene.frustum_culled);
    let downlight = harness.scene.find("downlight.left").unwrap();
    assert!(downlight.light.as_ref().unwrap().cast_shadow);
    visible_materials(&harness.scene, &mut |m| assert!(!m.flat_shading(), "{}", m.label()));
}

#[test]
fn test_downgrade_at_35_fps() {
    // --- 1. ARRANGE ---
    let start = Instant::now();
    let classifier = high_end_classifier();
    let mut agent = quality_agent(&classifier, start);
    let mut harness = Harness::new(start);
    assert_eq!(agent.current_tier(), QualityTier::High);

    // --- 2. ACT ---
    harness.run(&mut agent, 10, FPS_35);

    // --- 3. ASSERT ---
    assert_eq!(agent.current_tier(), QualityTier::Low);
    assert_eq!(harness.renderer.pixel_ratio(), 1.0);
    assert!(!harness.renderer.shadow_maps_enabled());

    let mut count = 0;
    visible_materials(&harness.scene, &mut |m| {
        count += 1;
        assert!(m.flat_shading(), "{} should be flat shaded", m.label());
    });
    assert!(count > 0);

    // The hidden mirror is left exactly as authored.
    let mirror = harness.scene.find("mirror").unwrap();
    let glass = &mirror.mesh.as_ref().unwrap().materials[0];
    assert!(!glass.flat_shading());
    assert!(glass.has_map(MapSlot::Roughness));
}

#[test]
fn test_pixel_ratio_never_exceeds_native() {
    let start = Instant::now();
    let classifier = high_end_classifier();
    let mut agent = quality_agent(&classifier, start);
    let mut harness = Harness::new(start);
    harness.renderer = cabina_data::RendererState::new(1.25, (1280, 720));

    harness.step(&mut agent, FPS_60);
    assert_eq!(agent.current_tier(), QualityTier::High);
    assert_eq!(harness.renderer.pixel_ratio(), 1.25);
}

#[test]
fn test_standard_device_never_upgrades() {
    let start = Instant::now();
    let classifier = standard_classifier();
    let mut agent = quality_agent(&classifier, start).with_initial_tier(QualityTier::High);
    let mut harness = Harness::new(start);

    assert_eq!(agent.current_tier(), QualityTier::Low);
    harness.run(&mut agent, 200, Duration::from_millis(4));

    assert_eq!(agent.current_tier(), QualityTier::Low);
    assert_eq!(agent.transition_count(), 0);
    assert!(agent.device_profile().mobile);
}

#[test]
fn test_dead_zone_holds_tier() {
    let start = Instant::now();
    let classifier = high_end_classifier();
    let mut agent = quality_agent(&classifier, start);
    let mut harness = Harness::new(start);

    // ~45 fps sits between the thresholds.
    harness.run(&mut agent, 100, Duration::from_micros(22_222));
    assert_eq!(agent.current_tier(), QualityTier::High);
    assert_eq!(agent.transition_count(), 0);
}

#[test]
fn test_round_trip_matches_fresh_low_pass() {
    // --- 1. ARRANGE ---
    let start = Instant::now();
    let classifier = high_end_classifier();
    let mut agent = quality_agent(&classifier, start).with_initial_tier(QualityTier::Low);
    let mut harness = Harness::new(start);

    // --- 2. ACT ---
    harness.run(&mut agent, 10, FPS_60);
    assert_eq!(agent.current_tier(), QualityTier::High);

    let mut frames = 0;
    while agent.current_tier() == QualityTier::High && frames < 100 {
        harness.step(&mut agent, FPS_30);
        frames += 1;
    }
    assert_eq!(agent.current_tier(), QualityTier::Low);
    assert_eq!(agent.transition_count(), 2);

    // --- 3. ASSERT ---
    let mut fresh = demo_cabin();
    SceneOptimizationLane::new().apply(&mut fresh, &OptimizationTarget::new(QualityTier::Low, 3.0));
    assert_eq!(snapshot(&harness.scene), snapshot(&fresh));
}

#[test]
fn test_periodic_pass_catches_late_nodes() {
    let start = Instant::now();
    let classifier = standard_classifier();
    let mut agent = quality_agent(&classifier, start);
    let mut harness = Harness::new(start);
    harness.run(&mut agent, 5, FPS_60);

    // A finish swapped in by the configurator after the last pass.
    harness.scene.children.push(Node::with_mesh(
        "late.panel",
        Mesh::new("late.panel", PbrMaterial::new("late.paint")),
    ));
    let late_flat = |h: &Harness| {
        h.scene.find("late.panel").unwrap().mesh.as_ref().unwrap().materials[0].flat_shading()
    };

    harness.step(&mut agent, Duration::from_secs(1));
    assert!(!late_flat(&harness));

    harness.step(&mut agent, Duration::from_secs(10));
    assert!(late_flat(&harness));
}

#[test]
fn test_resize_triggers_pass() {
    let start = Instant::now();
    let classifier = standard_classifier();
    let mut agent = quality_agent(&classifier, start);
    let notifier = agent.viewport_notifier();
    let mut harness = Harness::new(start);
    harness.step(&mut agent, FPS_60);

    harness.scene.children.push(Node::with_mesh(
        "late.panel",
        Mesh::new("late.panel", PbrMaterial::new("late.paint")),
    ));
    assert!(notifier.resized(1920, 1080));
    assert!(notifier.resized(1920, 1000));
    harness.step(&mut agent, FPS_60);

    let late = harness.scene.find("late.panel").unwrap();
    assert!(late.mesh.as_ref().unwrap().materials[0].flat_shading());
}

#[test]
fn test_resize_queue_overflow_is_harmless() {
    let start = Instant::now();
    let config = QualityConfig {
        viewport_event_capacity: 2,
        ..Default::default()
    };
    let classifier = standard_classifier();
    let agent = QualityAgent::new(config, &classifier, start);
    let notifier = agent.viewport_notifier();

    assert!(notifier.resized(1, 1));
    assert!(notifier.resized(2, 2));
    assert!(!notifier.resized(3, 3));

    drop(agent);
    assert!(!notifier.resized(4, 4));
}

#[test]
fn test_teardown_cancels_periodic_pass() {
    let start = Instant::now();
    let classifier = standard_classifier();
    let mut agent = quality_agent(&classifier, start);
    let mut harness = Harness::new(start);
    harness.step(&mut agent, FPS_60);
    harness.teardown(&mut agent);

    harness.scene.children.push(Node::with_mesh(
        "late.panel",
        Mesh::new("late.panel", PbrMaterial::new("late.paint")),
    ));
    harness.run(&mut agent, 3, Duration::from_secs(30));

    let late = harness.scene.find("late.panel").unwrap();
    assert!(!late.mesh.as_ref().unwrap().materials[0].flat_shading());
}

#[test]
fn test_resize_after_teardown_leaves_scene_alone() {
    // --- 1. ARRANGE ---
    let start = Instant::now();
    let classifier = standard_classifier();
    let mut agent = quality_agent(&classifier, start);
    let notifier = agent.viewport_notifier();
    let mut harness = Harness::new(start);
    harness.step(&mut agent, FPS_60);
    let ratio_before = harness.renderer.pixel_ratio();

    // --- 2. ACT ---
    harness.teardown(&mut agent);
    harness.scene.children.push(Node::with_mesh(
        "late.panel",
        Mesh::new("late.panel", PbrMaterial::new("late.paint")),
    ));
    harness.renderer.set_pixel_ratio(2.0);
    notifier.resized(10, 10);
    harness.step(&mut agent, FPS_60);

    // --- 3. ASSERT ---
    let late = harness.scene.find("late.panel").unwrap();
    assert!(!late.mesh.as_ref().unwrap().materials[0].flat_shading());
    assert_eq!(harness.renderer.pixel_ratio(), 2.0);
    assert_ne!(ratio_before, 2.0);
}

#[test]
fn test_resume_discards_pause() {
    let start = Instant::now();
    let classifier = high_end_classifier();
    let mut agent = quality_agent(&classifier, start);
    let mut harness = Harness::new(start);
    harness.run(&mut agent, 20, FPS_60);

    // A 5 s suspension would read as a 0.2 fps frame without the reset.
    harness.now += Duration::from_secs(5);
    agent.resume(harness.now);
    harness.run(&mut agent, 20, FPS_60);

    assert_eq!(agent.current_tier(), QualityTier::High);
    assert!(agent.smoothed_rate().unwrap() > 59.0);
}

#[test]
fn test_status_report() {
    let start = Instant::now();
    let classifier = high_end_classifier();
    let mut agent = quality_agent(&classifier, start);
    assert!(agent.report_status().message.contains("no samples yet"));

    let mut harness = Harness::new(start);
    harness.run(&mut agent, 3, FPS_60);
    let status = agent.report_status();
    assert_eq!(status.agent_id, AgentId::Quality);
    assert_eq!(status.tier, QualityTier::High);
    assert!(status.message.contains("3 samples"), "{}", status.message);
}
