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

//! # Lane Abstraction
//!
//! A **Lane** is a hot-path processing strategy an agent drives every time
//! its decision logic asks for work to be done. Lanes hold no scheduling
//! state of their own; they receive everything they need as arguments.

use std::fmt;

/// Classification of lane types, used in logs and status reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneKind {
    /// Walks and rewrites the scene graph.
    Scene,
    /// Builds derived GPU resources.
    Resource,
}

impl fmt::Display for LaneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaneKind::Scene => write!(f, "Scene"),
            LaneKind::Resource => write!(f, "Resource"),
        }
    }
}

/// The common interface shared by all lanes.
pub trait Lane {
    /// A stable, human-readable strategy name, e.g. `"CB_SCENE_QUALITY_PASS"`.
    fn strategy_name(&self) -> &'static str;

    /// The lane's classification.
    fn lane_kind(&self) -> LaneKind;
}
