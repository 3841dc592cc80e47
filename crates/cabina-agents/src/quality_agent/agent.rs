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

//! Defines the QualityAgent, the owner of the adaptive quality loop.

use cabina_control::{
    DeviceClassifier, FrameRateEstimator, PeriodicTask, QualityConfig, QualityTierController,
};
use cabina_core::agent::{Agent, AgentId, AgentStatus};
use cabina_core::{
    DeviceProfile, DeviceTier, FrameContext, Lane, QualityTier, QualityTierReader,
    QualityTierWriter, TierDecision,
};
use cabina_lanes::{OptimizationTarget, PassStats, SceneOptimizationLane};
use crossbeam_channel::{Receiver, Sender, TrySendError};
use std::time::Instant;

/// Notifications from the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportEvent {
    /// The viewport was resized to the given logical size.
    Resized {
        /// New width in logical pixels.
        width: u32,
        /// New height in logical pixels.
        height: u32,
    },
}

/// Why the tier settings are being (re)applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ApplyReason {
    Initial,
    Transition(TierDecision),
    Resize,
    Periodic,
}

/// Sends viewport notifications to a [`QualityAgent`] from any thread.
#[derive(Debug, Clone)]
pub struct ViewportNotifier {
    tx: Sender<ViewportEvent>,
}

impl ViewportNotifier {
    /// Queues a resize notification.
    ///
    /// Returns `false` if the event was dropped. The agent coalesces resizes,
    /// so a full queue already guarantees a re-optimization is pending.
    pub fn resized(&self, width: u32, height: u32) -> bool {
        match self.tx.try_send(ViewportEvent::Resized { width, height }) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => false,
            Err(TrySendError::Disconnected(_)) => {
                log::debug!("Viewport notification after the quality agent was dropped");
                false
            }
        }
    }
}

/// The agent that adapts rendering quality to the measured frame rate.
///
/// After [`Agent::teardown`] every update is a no-op and pending viewport
/// events are discarded.
pub struct QualityAgent {
    config: QualityConfig,
    profile: DeviceProfile,
    estimator: FrameRateEstimator,
    controller: QualityTierController,
    tier: QualityTierWriter,
    lane: SceneOptimizationLane,
    reoptimize: PeriodicTask,
    viewport_tx: Sender<ViewportEvent>,
    viewport_rx: Receiver<ViewportEvent>,
    frames_since_evaluation: u32,
    initial_tier_applied: bool,
    torn_down: bool,
    transitions: u64,
    last_pass: Option<PassStats>,
}

impl QualityAgent {
    /// Creates the agent.
    ///
    /// `config` is expected to have been validated; an invalid hysteresis
    /// band falls back to the default one. The device is classified right
    /// away and the initial tier is `High` only on a `High` device.
    pub fn new(config: QualityConfig, classifier: &DeviceClassifier, start: Instant) -> Self {
        let profile = classifier.classify();
        let band = config.hysteresis_band().unwrap_or_else(|e| {
            log::warn!("{}; using the default hysteresis band", e);
            Default::default()
        });
        let initial = QualityTier::initial_for(profile.tier);
        let (viewport_tx, viewport_rx) =
            crossbeam_channel::bounded(config.viewport_event_capacity.max(1));

        log::info!(
            "Quality agent starting at {} on a {:?} device",
            initial,
            profile.tier
        );

        Self {
            estimator: FrameRateEstimator::new(start),
            controller: QualityTierController::new(band),
            tier: QualityTierWriter::new(initial),
            lane: SceneOptimizationLane::new(),
            reoptimize: PeriodicTask::new(config.reoptimize_interval(), start),
            viewport_tx,
            viewport_rx,
            frames_since_evaluation: 0,
            initial_tier_applied: false,
            torn_down: false,
            transitions: 0,
            last_pass: None,
            profile,
            config,
        }
    }

    /// Starts the session at `tier` instead of the device default, for
    /// example to restore the tier a previous session ended on.
    ///
    /// The device ceiling still applies: a `Standard` device never starts at
    /// `High`. Has no effect once the first frame has been processed.
    pub fn with_initial_tier(self, tier: QualityTier) -> Self {
        let tier = if self.profile.tier == DeviceTier::Standard {
            QualityTier::Low
        } else {
            tier
        };
        if !self.initial_tier_applied {
            self.tier.set(tier);
        }
        self
    }

    /// A read-only handle on the published tier.
    pub fn tier_reader(&self) -> QualityTierReader {
        self.tier.reader()
    }

    /// The currently published tier.
    pub fn current_tier(&self) -> QualityTier {
        self.tier.get()
    }

    /// The device profile this agent was created with.
    pub fn device_profile(&self) -> DeviceProfile {
        self.profile
    }

    /// A handle the windowing layer uses to report resizes.
    pub fn viewport_notifier(&self) -> ViewportNotifier {
        ViewportNotifier {
            tx: self.viewport_tx.clone(),
        }
    }

    /// The current smoothed frame rate, if any frame has been sampled.
    pub fn smoothed_rate(&self) -> Option<f32> {
        self.estimator.smoothed_rate()
    }

    /// Number of tier transitions since creation.
    pub fn transition_count(&self) -> u64 {
        self.transitions
    }

    /// Statistics of the most recent scene pass.
    pub fn last_pass(&self) -> Option<PassStats> {
        self.last_pass
    }

    /// Restarts frame-rate sampling after the frame loop was suspended.
    pub fn resume(&mut self, now: Instant) {
        log::debug!("Quality agent resumed; frame-rate window cleared");
        self.estimator.reset(now);
        self.reoptimize.postpone(now);
        self.frames_since_evaluation = 0;
    }

    /// Cancels periodic re-optimization. The agent keeps sampling and
    /// evaluating, but the scene pass only runs on transitions and resizes.
    pub fn stop(&mut self) {
        if !self.reoptimize.is_cancelled() {
            self.reoptimize.cancel();
            log::debug!("Periodic scene re-optimization cancelled");
        }
    }

    fn target(&self, tier: QualityTier) -> OptimizationTarget {
        OptimizationTarget::new(tier, self.config.scene_scale).on_mobile(self.profile.mobile)
    }

    /// Applies every tier-dependent setting for `tier` in one go.
    fn apply_tier(
        &mut self,
        context: &mut FrameContext<'_>,
        tier: QualityTier,
        reason: ApplyReason,
    ) {
        let cap = match tier {
            QualityTier::Low => self.config.low_pixel_ratio_cap,
            QualityTier::High => self.config.high_pixel_ratio_cap,
        };
        let ratio = context.renderer.native_pixel_ratio().min(cap);
        context.renderer.set_pixel_ratio(ratio);
        context
            .renderer
            .set_shadow_maps_enabled(tier == QualityTier::High);

        let stats = self.lane.apply(&mut *context.scene, &self.target(tier));
        self.last_pass = Some(stats);

        match reason {
            ApplyReason::Initial => {
                log::info!("Applied initial quality tier {} (pixel ratio {:.2})", tier, ratio)
            }
            ApplyReason::Transition(decision) => log::info!(
                "Quality {:?} to {} at {:.1} fps (pixel ratio {:.2}, {})",
                decision,
                tier,
                self.estimator.smoothed_rate().unwrap_or_default(),
                ratio,
                stats
            ),
            ApplyReason::Resize | ApplyReason::Periodic => {
                log::debug!(
                    "{} ran ({:?}): {}",
                    self.lane.strategy_name(),
                    reason,
                    stats
                )
            }
        }
    }
}

impl Agent for QualityAgent {
    fn id(&self) -> AgentId {
        AgentId::Quality
    }

    fn update(&mut self, context: &mut FrameContext<'_>) {
        if self.torn_down {
            return;
        }

        // ── 1. Sampling ──────────────────────────────────────────────────
        self.estimator.sample(context.now);

        if !self.initial_tier_applied {
            self.initial_tier_applied = true;
            let tier = self.tier.get();
            self.apply_tier(context, tier, ApplyReason::Initial);
        }

        // ── 2. Viewport events ───────────────────────────────────────────
        let mut resized = false;
        while let Ok(event) = self.viewport_rx.try_recv() {
            match event {
                ViewportEvent::Resized { width, height } => {
                    log::trace!("Viewport resized to {}x{}", width, height);
                    resized = true;
                }
            }
        }

        // ── 3. Periodic re-optimization ──────────────────────────────────
        let periodic_due = self.reoptimize.poll(context.now);

        // ── 4. Tier evaluation ───────────────────────────────────────────
        self.frames_since_evaluation = self.frames_since_evaluation.saturating_add(1);
        let warm = self.estimator.sample_count() >= self.config.warmup_samples;
        if warm && self.frames_since_evaluation >= self.config.evaluation_interval_frames {
            self.frames_since_evaluation = 0;
            if let Some(rate) = self.estimator.smoothed_rate() {
                let current = self.tier.get();
                let decision = self.controller.evaluate(rate, self.profile.tier, current);
                log::trace!("Evaluated {:.1} fps at {}: {:?}", rate, current, decision);

                if decision != TierDecision::Unchanged {
                    let next = decision.apply_to(current);
                    self.tier.set(next);
                    self.transitions += 1;
                    self.apply_tier(context, next, ApplyReason::Transition(decision));
                    // The transition already ran the full pass.
                    self.reoptimize.postpone(context.now);
                    return;
                }
            }
        }

        // ── 5. Scheduled re-optimization ─────────────────────────────────
        if resized || periodic_due {
            if resized {
                self.reoptimize.postpone(context.now);
            }
            let reason = if resized {
                ApplyReason::Resize
            } else {
                ApplyReason::Periodic
            };
            let tier = self.tier.get();
            self.apply_tier(context, tier, reason);
        }
    }

    fn report_status(&self) -> AgentStatus {
        let rate = match self.estimator.smoothed_rate() {
            Some(rate) => format!("{:.1} fps over {} samples", rate, self.estimator.sample_count()),
            None => "no samples yet".to_string(),
        };
        let pass = self
            .last_pass
            .map_or_else(|| "no pass yet".to_string(), |stats| stats.to_string());
        AgentStatus {
            agent_id: AgentId::Quality,
            tier: self.tier.get(),
            message: format!("{}; {} transitions; last pass: {}", rate, self.transitions, pass),
        }
    }

    fn teardown(&mut self, _context: &mut FrameContext<'_>) {
        self.stop();
        self.torn_down = true;
        let dropped = self.viewport_rx.try_iter().count();
        if dropped > 0 {
            log::trace!("Discarded {} viewport events at teardown", dropped);
        }
    }
}

impl Drop for QualityAgent {
    fn drop(&mut self) {
        self.stop();
    }
}
