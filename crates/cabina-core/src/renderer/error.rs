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

//! Error type for derived GPU resources.

use super::TextureId;
use thiserror::Error;

/// An error related to the creation or release of a GPU resource.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The allocator does not have room for the requested texture.
    #[error("texture '{label}' needs {requested} bytes but only {available} are left")]
    OutOfMemory {
        /// The label of the texture being allocated.
        label: String,
        /// Bytes requested.
        requested: usize,
        /// Bytes still available.
        available: usize,
    },
    /// The pixel buffer does not match the declared dimensions.
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    InvalidPixelData {
        /// Expected byte length.
        expected: usize,
        /// Actual byte length.
        actual: usize,
    },
    /// The handle used to reference a resource is unknown or already released.
    #[error("invalid texture handle {0:?}")]
    InvalidHandle(TextureId),
    /// The source image is not available (e.g. still loading or released).
    #[error("source image is not available")]
    ImageUnavailable,
}
