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

//! Small mathematics helpers shared across the workspace.
//!
//! The controller only needs colours and a float comparison helper, so this
//! is deliberately tiny.

/// A small constant for floating-point comparisons.
pub const EPSILON: f32 = 1e-5;

pub mod color;

pub use self::color::LinearRgba;

/// Returns `true` if two floats are within [`EPSILON`] of each other.
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}
