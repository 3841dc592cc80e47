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

//! The quality tier state machine.

use crate::config::ConfigError;
use cabina_core::{DeviceTier, QualityTier, TierDecision};

/// A pair of frame-rate thresholds with a dead zone between them.
///
/// Rates inside `[downgrade_below, upgrade_above]` never cause a transition,
/// which keeps the tier from oscillating around a single threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HysteresisBand {
    downgrade_below: f32,
    upgrade_above: f32,
}

impl HysteresisBand {
    /// Creates a band, rejecting one whose upgrade threshold is not strictly
    /// above its downgrade threshold.
    pub fn new(downgrade_below: f32, upgrade_above: f32) -> Result<Self, ConfigError> {
        let finite = downgrade_below.is_finite() && upgrade_above.is_finite();
        if !finite || upgrade_above <= downgrade_below {
            return Err(ConfigError::InvalidHysteresis {
                downgrade_below,
                upgrade_above,
            });
        }
        Ok(Self {
            downgrade_below,
            upgrade_above,
        })
    }

    /// The rate below which `High` sessions are downgraded.
    pub fn downgrade_below(&self) -> f32 {
        self.downgrade_below
    }

    /// The rate above which eligible `Low` sessions are upgraded.
    pub fn upgrade_above(&self) -> f32 {
        self.upgrade_above
    }
}

impl Default for HysteresisBand {
    fn default() -> Self {
        Self {
            downgrade_below: 40.0,
            upgrade_above: 50.0,
        }
    }
}

/// Decides tier transitions from the smoothed frame rate.
///
/// The device tier acts as a ceiling: a `Standard` device is never upgraded,
/// though it can still be downgraded if it somehow runs at `High`.
#[derive(Debug, Clone, Default)]
pub struct QualityTierController {
    band: HysteresisBand,
}

impl QualityTierController {
    /// Creates a controller using `band`.
    pub fn new(band: HysteresisBand) -> Self {
        Self { band }
    }

    /// The band this controller evaluates against.
    pub fn band(&self) -> HysteresisBand {
        self.band
    }

    /// Evaluates the current situation.
    ///
    /// The downgrade rule is checked first, then the upgrade rule. A
    /// non-finite rate always yields [`TierDecision::Unchanged`].
    pub fn evaluate(
        &self,
        smoothed_rate: f32,
        device_tier: DeviceTier,
        current_tier: QualityTier,
    ) -> TierDecision {
        if !smoothed_rate.is_finite() {
            return TierDecision::Unchanged;
        }

        if smoothed_rate < self.band.downgrade_below && current_tier == QualityTier::High {
            TierDecision::Downgrade
        } else if smoothed_rate > self.band.upgrade_above
            && current_tier == QualityTier::Low
            && device_tier == DeviceTier::High
        {
            TierDecision::Upgrade
        } else {
            TierDecision::Unchanged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> QualityTierController {
        QualityTierController::default()
    }

    #[test]
    fn test_band_rejects_inverted_thresholds() {
        assert!(HysteresisBand::new(50.0, 40.0).is_err());
        assert!(HysteresisBand::new(45.0, 45.0).is_err());
        assert!(HysteresisBand::new(f32::NAN, 45.0).is_err());
        assert!(HysteresisBand::new(30.0, 45.0).is_ok());
    }

    #[test]
    fn test_downgrade_below_threshold() {
        let decision = controller().evaluate(35.0, DeviceTier::High, QualityTier::High);
        assert_eq!(decision, TierDecision::Downgrade);
    }

    #[test]
    fn test_upgrade_above_threshold_on_capable_device() {
        let decision = controller().evaluate(60.0, DeviceTier::High, QualityTier::Low);
        assert_eq!(decision, TierDecision::Upgrade);
    }

    #[test]
    fn test_standard_device_never_upgrades() {
        for rate in [45.0, 60.0, 120.0, 1000.0] {
            let decision = controller().evaluate(rate, DeviceTier::Standard, QualityTier::Low);
            assert_eq!(decision, TierDecision::Unchanged, "rate {rate}");
        }
    }

    #[test]
    fn test_dead_zone_holds_both_tiers() {
        for rate in [40.0, 45.0, 50.0] {
            for tier in [QualityTier::Low, QualityTier::High] {
                assert_eq!(
                    controller().evaluate(rate, DeviceTier::High, tier),
                    TierDecision::Unchanged,
                    "rate {rate} tier {tier}"
                );
            }
        }
    }

    #[test]
    fn test_no_redundant_transitions() {
        assert_eq!(
            controller().evaluate(20.0, DeviceTier::High, QualityTier::Low),
            TierDecision::Unchanged
        );
        assert_eq!(
            controller().evaluate(90.0, DeviceTier::High, QualityTier::High),
            TierDecision::Unchanged
        );
    }

    #[test]
    fn test_non_finite_rate_is_ignored() {
        assert_eq!(
            controller().evaluate(f32::NAN, DeviceTier::High, QualityTier::High),
            TierDecision::Unchanged
        );
        assert_eq!(
            controller().evaluate(f32::INFINITY, DeviceTier::High, QualityTier::Low),
            TierDecision::Unchanged
        );
    }

    #[test]
    fn test_custom_band() {
        let band = HysteresisBand::new(25.0, 30.0).unwrap();
        let controller = QualityTierController::new(band);
        assert_eq!(
            controller.evaluate(28.0, DeviceTier::High, QualityTier::High),
            TierDecision::Unchanged
        );
        assert_eq!(
            controller.evaluate(31.0, DeviceTier::High, QualityTier::Low),
            TierDecision::Upgrade
        );
    }
}
