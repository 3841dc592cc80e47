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

//! # Cabina Data
//!
//! Concrete, in-memory implementations of the capability traits declared in
//! `cabina-core`: the scene graph the configurator renders, the renderer's
//! global state and a budgeted store for derived textures.

#![warn(missing_docs)]

pub mod assets;
pub mod renderer;
pub mod scene;

pub use assets::TextureStore;
pub use renderer::RendererState;
pub use scene::{Light, Mesh, Node, PbrMaterial, Texture};
