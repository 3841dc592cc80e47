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

//! wgpu-based detection of modern GPU APIs.

use wgpu::{Backend, PowerPreference, RequestAdapterOptions};

/// Returns `true` for backends considered "advanced": Vulkan, Metal, DX12 and WebGPU.
pub fn is_advanced_backend(backend: Backend) -> bool {
    matches!(
        backend,
        Backend::Vulkan | Backend::Metal | Backend::Dx12 | Backend::BrowserWebGpu
    )
}

/// Requests a high-performance adapter and reports whether it runs on an
/// advanced backend.
///
/// Any failure to obtain an adapter is reported as `false`.
pub fn probe_advanced_gpu_api() -> bool {
    let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::new_without_display_handle());
    let adapter = pollster::block_on(instance.request_adapter(&RequestAdapterOptions {
        power_preference: PowerPreference::HighPerformance,
        compatible_surface: None,
        force_fallback_adapter: false,
    }));

    match adapter {
        Ok(adapter) => {
            let info = adapter.get_info();
            let advanced = is_advanced_backend(info.backend);
            log::debug!(
                "GPU probe: \"{}\" on {:?} (advanced: {})",
                info.name,
                info.backend,
                advanced
            );
            advanced
        }
        Err(e) => {
            log::warn!("GPU probe found no adapter: {}", e);
            false
        }
    }
}
