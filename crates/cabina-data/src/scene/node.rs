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

//! Scene graph nodes.

use super::{Light, PbrMaterial};
use cabina_core::scene::{LightSource, SceneNode, SurfaceMaterial};

/// Renderable geometry with one or more material slots.
#[derive(Debug)]
pub struct Mesh {
    /// Label of the geometry buffer this mesh draws.
    pub geometry: String,
    /// Material slots, one per geometry group.
    pub materials: Vec<PbrMaterial>,
}

impl Mesh {
    /// Creates a single-slot mesh.
    pub fn new(geometry: impl Into<String>, material: PbrMaterial) -> Self {
        Self {
            geometry: geometry.into(),
            materials: vec![material],
        }
    }

    /// Creates a multi-slot mesh.
    pub fn multi(geometry: impl Into<String>, materials: Vec<PbrMaterial>) -> Self {
        Self {
            geometry: geometry.into(),
            materials,
        }
    }
}

/// A node of the cabin scene graph.
///
/// A node may carry a mesh, a light, both or neither (pure grouping nodes).
#[derive(Debug)]
pub struct Node {
    /// Node name, unique among siblings by convention.
    pub name: String,
    /// Whether the node and its subtree are rendered.
    pub visible: bool,
    /// Whether the renderer tests the node against the view frustum.
    pub frustum_culled: bool,
    /// Optional geometry.
    pub mesh: Option<Mesh>,
    /// Optional light source.
    pub light: Option<Light>,
    /// Child nodes in draw order.
    pub children: Vec<Node>,
}

impl Node {
    /// Creates an empty, visible grouping node.
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            frustum_culled: true,
            mesh: None,
            light: None,
            children: Vec::new(),
        }
    }

    /// Creates a visible node carrying a mesh.
    pub fn with_mesh(name: impl Into<String>, mesh: Mesh) -> Self {
        Self {
            mesh: Some(mesh),
            ..Self::group(name)
        }
    }

    /// Creates a visible node carrying a light.
    pub fn with_light(name: impl Into<String>, light: Light) -> Self {
        Self {
            light: Some(light),
            ..Self::group(name)
        }
    }

    /// Appends a child and returns `self`, for builder-style construction.
    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    /// Marks the node hidden and returns `self`.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Finds a node by name anywhere in this subtree (depth-first).
    pub fn find(&self, name: &str) -> Option<&Node> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }

    /// Mutable variant of [`find`](Self::find).
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Node> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(name))
    }

    /// Visits every node of this subtree, parent before children.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Node)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Counts the nodes of this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }
}

impl SceneNode for Node {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn frustum_culled(&self) -> bool {
        self.frustum_culled
    }

    fn set_frustum_culled(&mut self, enabled: bool) {
        self.frustum_culled = enabled;
    }

    fn materials_mut(&mut self) -> Vec<&mut dyn SurfaceMaterial> {
        match self.mesh.as_mut() {
            Some(mesh) => mesh
                .materials
                .iter_mut()
                .map(|m| m as &mut dyn SurfaceMaterial)
                .collect(),
            None => Vec::new(),
        }
    }

    fn light_mut(&mut self) -> Option<&mut dyn LightSource> {
        self.light.as_mut().map(|l| l as &mut dyn LightSource)
    }

    fn children_mut(&mut self) -> Vec<&mut dyn SceneNode> {
        self.children
            .iter_mut()
            .map(|c| c as &mut dyn SceneNode)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Node {
        Node::group("root")
            .child(Node::group("a").child(Node::group("a1")))
            .child(Node::group("b").hidden())
    }

    #[test]
    fn test_find_and_count() {
        let tree = sample_tree();
        assert_eq!(tree.node_count(), 4);
        assert!(tree.find("a1").is_some());
        assert!(!tree.find("b").map(|n| n.visible).unwrap_or(true));
        assert!(tree.find("missing").is_none());
    }

    #[test]
    fn test_walk_is_parent_first() {
        let tree = sample_tree();
        let mut names = Vec::new();
        tree.walk(&mut |n| names.push(n.name.clone()));
        assert_eq!(names, vec!["root", "a", "a1", "b"]);
    }

    #[test]
    fn test_group_has_no_materials_or_light() {
        let mut node = Node::group("empty");
        assert!(node.materials_mut().is_empty());
        assert!(node.light_mut().is_none());
    }
}
