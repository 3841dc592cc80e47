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

//! Node-level capabilities.

use super::{LightSource, SurfaceMaterial};

/// A node of the renderable scene graph.
///
/// Nodes without a mesh return no materials and nodes without a light return
/// `None`; absence simply means there is nothing to optimize.
pub trait SceneNode {
    /// A human-readable name, used in logs.
    fn name(&self) -> &str;

    /// Returns `true` if the node (and therefore its subtree) is rendered.
    fn is_visible(&self) -> bool;

    /// Returns `true` if frustum culling is enabled for this node.
    fn frustum_culled(&self) -> bool;

    /// Enables or disables frustum culling for this node.
    fn set_frustum_culled(&mut self, enabled: bool);

    /// Returns every material slot of the node's mesh, in slot order.
    fn materials_mut(&mut self) -> Vec<&mut dyn SurfaceMaterial>;

    /// Returns the node's light, if it carries one.
    fn light_mut(&mut self) -> Option<&mut dyn LightSource>;

    /// Returns the node's children, in draw order.
    fn children_mut(&mut self) -> Vec<&mut dyn SceneNode>;
}
