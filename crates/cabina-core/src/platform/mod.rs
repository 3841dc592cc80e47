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

//! Provides abstractions over the host platform.
//!
//! The classifier in `cabina-control` never talks to the operating system
//! directly. It reads the few signals it needs through [`HostEnvironment`],
//! which `cabina-infra` implements for native targets and tests implement
//! with fixed values.

use serde::{Deserialize, Serialize};

/// Coarse capability class of the device the configurator runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeviceTier {
    /// Integrated GPUs, phones and tablets, or anything we could not identify.
    #[default]
    Standard,
    /// Desktop-class hardware able to sustain the full quality preset.
    High,
}

/// The result of classifying the host, cached for the lifetime of the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceProfile {
    /// The capability tier used as the quality ceiling.
    pub tier: DeviceTier,
    /// `true` if the platform signature matched a known mobile token.
    pub mobile: bool,
    /// Number of logical cores, if the host reported it.
    pub logical_cores: Option<usize>,
    /// `true` if a modern GPU API (Vulkan, Metal, DX12 or WebGPU) is available.
    pub advanced_gpu_api: bool,
}

impl DeviceProfile {
    /// A conservative profile used when nothing is known about the host.
    pub const fn conservative() -> Self {
        Self {
            tier: DeviceTier::Standard,
            mobile: false,
            logical_cores: None,
            advanced_gpu_api: false,
        }
    }
}

/// Trait for reading the host signals the device classifier relies on.
///
/// Every method must answer synchronously and must not fail: a signal that
/// cannot be read is reported as absent (`None`, an empty string, `false`).
pub trait HostEnvironment: Send + Sync {
    /// Returns the number of logical cores, or `None` if unavailable.
    fn logical_cores(&self) -> Option<usize>;

    /// Returns a free-form platform signature (a browser user agent, or the
    /// OS name and version on native targets) used for mobile detection.
    fn platform_signature(&self) -> String;

    /// Returns `true` if an advanced GPU API is available on this host.
    fn advanced_gpu_api_available(&self) -> bool;
}
