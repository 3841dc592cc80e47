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

//! Acts as the **[A]gent** for rendering quality.
//!
//! The quality agent owns the adaptive loop: it samples the frame rate every
//! frame, lets the tier controller decide whether to move between `Low` and
//! `High`, and applies the consequences (pixel ratio, shadow maps, scene pass)
//! all in the same frame. It also re-runs the scene pass periodically and
//! after viewport resizes so late-loaded objects are brought in line.

mod agent;

pub use agent::*;
