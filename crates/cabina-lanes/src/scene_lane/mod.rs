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

//! The scene quality pass.
//!
//! [`SceneOptimizationLane::apply`] walks the scene graph depth-first and
//! brings every visible node in line with an [`OptimizationTarget`]. The pass
//! only ever derives values from the target and from what the materials were
//! authored with, so running it twice in a row changes nothing the second time.

pub mod strategies;

use cabina_core::lane::{Lane, LaneKind};
use cabina_core::scene::SceneNode;
use cabina_core::QualityTier;
use std::fmt;

/// What the pass should converge the scene to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizationTarget {
    /// The tier to apply.
    pub tier: QualityTier,
    /// Whether the device was classified as mobile (smaller shadow maps).
    pub mobile: bool,
    /// Characteristic scene size in world units.
    pub scene_scale: f32,
}

impl OptimizationTarget {
    /// Creates a desktop target for `tier`.
    pub fn new(tier: QualityTier, scene_scale: f32) -> Self {
        Self {
            tier,
            mobile: false,
            scene_scale,
        }
    }

    /// Marks the target as running on a mobile device.
    pub fn on_mobile(mut self, mobile: bool) -> Self {
        self.mobile = mobile;
        self
    }
}

/// Counters describing what a single pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Visible nodes processed.
    pub nodes_visited: usize,
    /// Hidden subtrees skipped (counted once per hidden root).
    pub subtrees_skipped: usize,
    /// Nodes whose frustum-culling flag changed.
    pub nodes_changed: usize,
    /// Materials with at least one changed field.
    pub materials_changed: usize,
    /// Maps removed and replaced by a scalar.
    pub maps_stripped: usize,
    /// Textures with at least one changed field.
    pub textures_changed: usize,
    /// Textures whose image was scaled down.
    pub textures_downsampled: usize,
    /// Lights with at least one changed field.
    pub lights_changed: usize,
}

impl PassStats {
    /// Total number of objects modified by the pass.
    pub fn total_changes(&self) -> usize {
        self.nodes_changed + self.materials_changed + self.textures_changed + self.lights_changed
    }
}

impl fmt::Display for PassStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes ({} hidden subtrees), {} materials, {} textures ({} downsampled), {} maps stripped, {} lights",
            self.nodes_visited,
            self.subtrees_skipped,
            self.materials_changed,
            self.textures_changed,
            self.textures_downsampled,
            self.maps_stripped,
            self.lights_changed
        )
    }
}

/// Applies a quality tier to every visible node of a scene graph.
#[derive(Debug, Default, Clone, Copy)]
pub struct SceneOptimizationLane;

impl SceneOptimizationLane {
    /// Creates a new scene optimization lane.
    pub fn new() -> Self {
        Self
    }

    /// Runs the pass over the graph rooted at `root`.
    ///
    /// Nodes are visited depth-first, a parent before its children and
    /// children left to right. An invisible node is skipped together with its
    /// whole subtree.
    pub fn apply(&self, root: &mut dyn SceneNode, target: &OptimizationTarget) -> PassStats {
        let mut stats = PassStats::default();
        let mut stack: Vec<&mut dyn SceneNode> = vec![root];

        while let Some(node) = stack.pop() {
            if !node.is_visible() {
                log::trace!("Skipping hidden subtree '{}'", node.name());
                stats.subtrees_skipped += 1;
                continue;
            }
            stats.nodes_visited += 1;
            Self::optimize_node(&mut *node, target, &mut stats);

            // Reversed so the leftmost child is popped first.
            let mut children = node.children_mut();
            children.reverse();
            stack.extend(children);
        }

        log::debug!("Scene pass at {}: {}", target.tier, stats);
        stats
    }

    fn optimize_node(node: &mut dyn SceneNode, target: &OptimizationTarget, stats: &mut PassStats) {
        let culled = target.tier == QualityTier::High;
        if node.frustum_culled() != culled {
            node.set_frustum_culled(culled);
            stats.nodes_changed += 1;
        }

        for material in node.materials_mut() {
            strategies::material::optimize(material, target.tier, stats);
        }

        if let Some(light) = node.light_mut() {
            if strategies::light::optimize(light, target) {
                stats.lights_changed += 1;
            }
        }
    }
}

impl Lane for SceneOptimizationLane {
    fn strategy_name(&self) -> &'static str {
        "CB_SCENE_QUALITY_PASS"
    }

    fn lane_kind(&self) -> LaneKind {
        LaneKind::Scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabina_core::scene::{LightSource, SurfaceMaterial};
    use cabina_data::scene::recipe::demo_cabin;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// A bare node that records the order in which the pass touches it.
    struct TraceNode {
        name: &'static str,
        visible: bool,
        culled: bool,
        log: Rc<RefCell<Vec<&'static str>>>,
        children: Vec<TraceNode>,
    }

    impl TraceNode {
        fn new(name: &'static str, log: &Rc<RefCell<Vec<&'static str>>>) -> Self {
            Self {
                name,
                visible: true,
                culled: false,
                log: Rc::clone(log),
                children: Vec::new(),
            }
        }

        fn with(mut self, children: Vec<TraceNode>) -> Self {
            self.children = children;
            self
        }

        fn hidden(mut self) -> Self {
            self.visible = false;
            self
        }
    }

    impl SceneNode for TraceNode {
        fn name(&self) -> &str {
            self.name
        }
        fn is_visible(&self) -> bool {
            self.visible
        }
        fn frustum_culled(&self) -> bool {
            self.culled
        }
        fn set_frustum_culled(&mut self, enabled: bool) {
            self.culled = enabled;
        }
        fn materials_mut(&mut self) -> Vec<&mut dyn SurfaceMaterial> {
            self.log.borrow_mut().push(self.name);
            Vec::new()
        }
        fn light_mut(&mut self) -> Option<&mut dyn LightSource> {
            None
        }
        fn children_mut(&mut self) -> Vec<&mut dyn SceneNode> {
            self.children
                .iter_mut()
                .map(|c| c as &mut dyn SceneNode)
                .collect()
        }
    }

    #[test]
    fn test_parent_before_children_left_to_right() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut root = TraceNode::new("root", &log).with(vec![
            TraceNode::new("a", &log).with(vec![
                TraceNode::new("a1", &log),
                TraceNode::new("a2", &log),
            ]),
            TraceNode::new("b", &log).with(vec![TraceNode::new("b1", &log)]),
            TraceNode::new("c", &log),
        ]);

        let target = OptimizationTarget::new(QualityTier::High, 3.0);
        SceneOptimizationLane::new().apply(&mut root, &target);

        assert_eq!(*log.borrow(), vec!["root", "a", "a1", "a2", "b", "b1", "c"]);
    }

    #[test]
    fn test_hidden_subtree_is_not_touched() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut root = TraceNode::new("root", &log).with(vec![
            TraceNode::new("hidden", &log)
                .hidden()
                .with(vec![TraceNode::new("under_hidden", &log)]),
            TraceNode::new("shown", &log),
        ]);

        let target = OptimizationTarget::new(QualityTier::High, 3.0);
        let stats = SceneOptimizationLane::new().apply(&mut root, &target);

        assert_eq!(*log.borrow(), vec!["root", "shown"]);
        assert_eq!(stats.nodes_visited, 2);
        assert_eq!(stats.subtrees_skipped, 1);
        assert!(!root.children[0].culled);
        assert!(!root.children[0].children[0].culled);
    }

    #[test]
    fn test_frustum_culling_follows_tier() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut root = TraceNode::new("root", &log);
        let lane = SceneOptimizationLane::new();

        let high = lane.apply(&mut root, &OptimizationTarget::new(QualityTier::High, 3.0));
        assert!(root.culled);
        assert_eq!(high.nodes_changed, 1);

        lane.apply(&mut root, &OptimizationTarget::new(QualityTier::Low, 3.0));
        assert!(!root.culled);
    }

    #[test]
    fn test_hidden_root_skips_everything() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut root = TraceNode::new("root", &log).hidden();
        let stats = SceneOptimizationLane::new()
            .apply(&mut root, &OptimizationTarget::new(QualityTier::Low, 3.0));
        assert_eq!(stats.nodes_visited, 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_second_pass_over_cabin_changes_nothing() {
        let lane = SceneOptimizationLane::new();
        for tier in [QualityTier::High, QualityTier::Low, QualityTier::High] {
            let mut cabin = demo_cabin();
            let target = OptimizationTarget::new(tier, 3.0);

            let first = lane.apply(&mut cabin, &target);
            let after_first = format!("{:?}", cabin);
            let second = lane.apply(&mut cabin, &target);

            assert!(first.total_changes() > 0, "{} first pass", tier);
            assert_eq!(second.total_changes(), 0, "{} second pass", tier);
            assert_eq!(second.maps_stripped, 0);
            assert_eq!(second.textures_downsampled, 0);
            assert_eq!(format!("{:?}", cabin), after_first);
        }
    }

    #[test]
    fn test_switching_tiers_on_cabin_converges() {
        let lane = SceneOptimizationLane::new();
        let low = OptimizationTarget::new(QualityTier::Low, 3.0);
        let high = OptimizationTarget::new(QualityTier::High, 3.0);

        let mut cabin = demo_cabin();
        lane.apply(&mut cabin, &high);
        lane.apply(&mut cabin, &low);
        lane.apply(&mut cabin, &high);
        let settled = format!("{:?}", cabin);

        assert_eq!(lane.apply(&mut cabin, &high).total_changes(), 0);
        assert_eq!(format!("{:?}", cabin), settled);
    }

    #[test]
    fn test_lane_identity() {
        let lane = SceneOptimizationLane::new();
        assert_eq!(lane.strategy_name(), "CB_SCENE_QUALITY_PASS");
        assert_eq!(lane.lane_kind(), LaneKind::Scene);
    }
}
