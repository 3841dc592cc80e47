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

//! Traits for the frame-driven subsystems (Agents).

use crate::quality::QualityTier;
use crate::FrameContext;
use std::fmt;

/// Unique identifier for agents, in their default update order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AgentId {
    /// Samples frame timing, owns the quality tier and re-optimizes the scene.
    Quality,
    /// Owns the derived lighting resources (environment map, light spot).
    Ambience,
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A snapshot of an agent's current state, for logs and diagnostics.
#[derive(Debug, Clone)]
pub struct AgentStatus {
    /// The ID of the reporting agent.
    pub agent_id: AgentId,
    /// The quality tier the agent is currently operating at.
    pub tier: QualityTier,
    /// Human-readable status message.
    pub message: String,
}

/// A subsystem driven once per rendered frame.
///
/// Agents run on the render thread, in [`AgentId`] order, and must finish
/// within the frame: no blocking, no deferred work across frames.
pub trait Agent {
    /// Returns the unique identifier for this agent.
    fn id(&self) -> AgentId;

    /// Runs the agent's work for the current frame.
    fn update(&mut self, context: &mut FrameContext<'_>);

    /// Reports the current status of the agent.
    fn report_status(&self) -> AgentStatus;

    /// Releases everything the agent owns and cancels its scheduled work.
    /// Called once when the owning view is torn down.
    fn teardown(&mut self, context: &mut FrameContext<'_>);
}
