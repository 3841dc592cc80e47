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

//! # Cabina Agents
//!
//! Agents are the per-frame glue between the cold-path decision logic in
//! `cabina-control` and the hot-path lanes in `cabina-lanes`. Each one
//! implements [`cabina_core::agent::Agent`] and is driven by the host's frame
//! loop through a [`cabina_core::FrameContext`].

#![warn(missing_docs)]

pub mod ambience_agent;
pub mod quality_agent;

pub use ambience_agent::AmbienceAgent;
pub use quality_agent::{QualityAgent, ViewportEvent, ViewportNotifier};
