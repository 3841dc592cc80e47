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

//! sysinfo-based implementation of the HostEnvironment trait.

use cabina_core::HostEnvironment;
use sysinfo::System;

/// Operating systems whose devices are handheld.
const MOBILE_OSES: [&str; 2] = ["android", "ios"];

/// Reads device signals from the native host.
#[derive(Debug, Clone)]
pub struct NativeHostEnvironment {
    #[cfg_attr(not(feature = "gpu-probe"), allow(dead_code))]
    probe_gpu: bool,
}

impl NativeHostEnvironment {
    /// Creates a host environment that probes the GPU when asked.
    ///
    /// Without the `gpu-probe` feature no adapter is ever requested.
    pub fn new() -> Self {
        Self {
            probe_gpu: cfg!(feature = "gpu-probe"),
        }
    }

    /// Creates a host environment that never touches the GPU (headless runs).
    pub fn without_gpu_probe() -> Self {
        Self { probe_gpu: false }
    }
}

impl Default for NativeHostEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl HostEnvironment for NativeHostEnvironment {
    fn logical_cores(&self) -> Option<usize> {
        let mut system = System::new();
        system.refresh_cpu_all();
        match system.cpus().len() {
            0 => std::thread::available_parallelism().ok().map(|n| n.get()),
            n => Some(n),
        }
    }

    fn platform_signature(&self) -> String {
        let os = std::env::consts::OS;
        let version = System::long_os_version().unwrap_or_else(|| os.to_string());
        let mut signature = format!("{} ({}; {})", version, os, std::env::consts::ARCH);
        if MOBILE_OSES.contains(&os) {
            signature.push_str(" Mobile");
        }
        signature
    }

    #[cfg(feature = "gpu-probe")]
    fn advanced_gpu_api_available(&self) -> bool {
        self.probe_gpu && crate::graphics::probe_advanced_gpu_api()
    }

    #[cfg(not(feature = "gpu-probe"))]
    fn advanced_gpu_api_available(&self) -> bool {
        false
    }
}
