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

//! Tunable parameters of the quality controller.
//!
//! Every field has a default, so a configuration file only needs to name the
//! values it changes:
//!
//! ```ron
//! (
//!     downgrade_below_fps: 35.0,
//!     device_override: Some(High),
//! )
//! ```

use crate::tier::HysteresisBand;
use cabina_core::DeviceTier;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading or validating a [`QualityConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file '{}': {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The RON text could not be parsed.
    #[error("invalid config syntax: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// The configuration could not be written out.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),
    /// The upgrade threshold is not strictly above the downgrade threshold.
    #[error(
        "upgrade threshold ({upgrade_above} fps) must be above downgrade threshold ({downgrade_below} fps)"
    )]
    InvalidHysteresis {
        /// Configured downgrade threshold.
        downgrade_below: f32,
        /// Configured upgrade threshold.
        upgrade_above: f32,
    },
    /// A numeric field that must be strictly positive is not.
    #[error("'{field}' must be positive, got {value}")]
    NotPositive {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Parameters of the quality controller, loadable from RON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// Samples the estimator must hold before the first evaluation.
    pub warmup_samples: usize,
    /// Evaluate the tier every this many frames once warm.
    pub evaluation_interval_frames: u32,
    /// Smoothed rate below which a `High` session drops to `Low`.
    pub downgrade_below_fps: f32,
    /// Smoothed rate above which a `Low` session on a capable device goes `High`.
    pub upgrade_above_fps: f32,
    /// Pixel ratio ceiling applied at `Low`.
    pub low_pixel_ratio_cap: f32,
    /// Pixel ratio ceiling applied at `High`.
    pub high_pixel_ratio_cap: f32,
    /// Seconds between periodic scene re-optimizations.
    pub reoptimize_interval_secs: u64,
    /// Characteristic size of the scene in world units; drives shadow near/far planes.
    pub scene_scale: f32,
    /// Capacity of the viewport resize channel.
    pub viewport_event_capacity: usize,
    /// Forces the device tier instead of probing the host.
    pub device_override: Option<DeviceTier>,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            warmup_samples: 10,
            evaluation_interval_frames: 1,
            downgrade_below_fps: 40.0,
            upgrade_above_fps: 50.0,
            low_pixel_ratio_cap: 1.0,
            high_pixel_ratio_cap: 1.5,
            reoptimize_interval_secs: 10,
            scene_scale: 3.0,
            viewport_event_capacity: 16,
            device_override: None,
        }
    }
}

impl QualityConfig {
    /// Parses and validates a configuration from RON text.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron_str(&text)?;
        log::info!("Loaded quality config from '{}'", path.display());
        Ok(config)
    }

    /// Renders the configuration as pretty-printed RON.
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::default().indentor("  ".to_string());
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// Checks the invariants the controller relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.hysteresis_band()?;

        let positive = [
            ("low_pixel_ratio_cap", self.low_pixel_ratio_cap as f64),
            ("high_pixel_ratio_cap", self.high_pixel_ratio_cap as f64),
            ("scene_scale", self.scene_scale as f64),
            ("evaluation_interval_frames", self.evaluation_interval_frames as f64),
            ("reoptimize_interval_secs", self.reoptimize_interval_secs as f64),
            ("viewport_event_capacity", self.viewport_event_capacity as f64),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        Ok(())
    }

    /// The hysteresis band described by the two thresholds.
    pub fn hysteresis_band(&self) -> Result<HysteresisBand, ConfigError> {
        HysteresisBand::new(self.downgrade_below_fps, self.upgrade_above_fps)
    }

    /// Interval between periodic re-optimizations.
    pub fn reoptimize_interval(&self) -> Duration {
        Duration::from_secs(self.reoptimize_interval_secs)
    }
}
