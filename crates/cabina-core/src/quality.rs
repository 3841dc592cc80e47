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

//! Quality tiers and the single-writer cell that publishes the active one.

use crate::platform::DeviceTier;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// The active rendering quality level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QualityTier {
    /// Reduced pixel ratio, no shadows, stripped materials, clamped textures.
    #[default]
    Low,
    /// Full material set, shadows and filtered textures.
    High,
}

impl QualityTier {
    /// The tier a session starts at for a given device class.
    pub fn initial_for(device: DeviceTier) -> Self {
        match device {
            DeviceTier::High => QualityTier::High,
            DeviceTier::Standard => QualityTier::Low,
        }
    }

    fn to_raw(self) -> u8 {
        match self {
            QualityTier::Low => 0,
            QualityTier::High => 1,
        }
    }

    fn from_raw(raw: u8) -> Self {
        if raw == 0 {
            QualityTier::Low
        } else {
            QualityTier::High
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Outcome of a tier evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierDecision {
    /// Keep the current tier.
    Unchanged,
    /// Move from `Low` to `High`.
    Upgrade,
    /// Move from `High` to `Low`.
    Downgrade,
}

impl TierDecision {
    /// Returns the tier that results from applying this decision to `current`.
    pub fn apply_to(self, current: QualityTier) -> QualityTier {
        match self {
            TierDecision::Unchanged => current,
            TierDecision::Upgrade => QualityTier::High,
            TierDecision::Downgrade => QualityTier::Low,
        }
    }
}

/// The only handle allowed to change the published quality tier.
///
/// It is intentionally not `Clone`: whoever owns it is the single writer.
#[derive(Debug)]
pub struct QualityTierWriter {
    cell: Arc<AtomicU8>,
}

/// A read-only view of the published quality tier.
#[derive(Debug, Clone)]
pub struct QualityTierReader {
    cell: Arc<AtomicU8>,
}

impl QualityTierWriter {
    /// Creates a new writer publishing `initial`.
    pub fn new(initial: QualityTier) -> Self {
        Self {
            cell: Arc::new(AtomicU8::new(initial.to_raw())),
        }
    }

    /// Publishes a new tier.
    pub fn set(&self, tier: QualityTier) {
        self.cell.store(tier.to_raw(), Ordering::Release);
    }

    /// Returns the currently published tier.
    pub fn get(&self) -> QualityTier {
        QualityTier::from_raw(self.cell.load(Ordering::Acquire))
    }

    /// Creates a reader observing this writer.
    pub fn reader(&self) -> QualityTierReader {
        QualityTierReader {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl QualityTierReader {
    /// Returns the currently published tier.
    pub fn get(&self) -> QualityTier {
        QualityTier::from_raw(self.cell.load(Ordering::Acquire))
    }
}
