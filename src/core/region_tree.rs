//! Region and ride hierarchy stored as an arena.
//!
//! Nodes are addressed by a stable [`NodeIndex`]; each node keeps the indices
//! of its children in insertion order. The root is always index 0.

use serde::{Deserialize, Serialize};

use crate::core::{DispatchError, DispatchResult};

/// Stable handle into a [`RegionTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// Position in the arena.
    pub const fn get(self) -> usize {
        self.0
    }
}

/// What a node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// The tree root.
    System,
    /// A service region such as `Kigali-Huye`.
    Region,
    /// A ride registered under a region.
    Ride,
}

/// One node of the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionNode {
    /// Node id (`root`, `region_{id}`, `ride_{id}`).
    pub id: String,
    /// Node kind.
    pub kind: NodeKind,
    /// Free-form description or ride data.
    pub data: String,
    children: Vec<NodeIndex>,
}

impl RegionNode {
    /// Child indices in insertion order.
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }
}

/// Arena-backed ownership tree of regions and rides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionTree {
    nodes: Vec<RegionNode>,
}

impl Default for RegionTree {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionTree {
    /// Index of the root node.
    pub const ROOT: NodeIndex = NodeIndex(0);

    /// Tree with only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![RegionNode {
                id: "root".into(),
                kind: NodeKind::System,
                data: "Taxi Booking System Root".into(),
                children: Vec::new(),
            }],
        }
    }

    /// Attach a `region_{region_id}` node under the root.
    pub fn add_region(&mut self, region_id: &str, description: impl Into<String>) -> NodeIndex {
        self.attach(
            Self::ROOT,
            RegionNode {
                id: format!("region_{region_id}"),
                kind: NodeKind::Region,
                data: description.into(),
                children: Vec::new(),
            },
        )
    }

    /// Attach a `ride_{ride_id}` node under the region named `region_{region_id}`.
    pub fn add_ride(
        &mut self,
        region_id: &str,
        ride_id: &str,
        data: impl Into<String>,
    ) -> DispatchResult<NodeIndex> {
        let node_id = format!("region_{region_id}");
        let parent = self
            .find(&node_id)
            .ok_or(DispatchError::RegionNotFound(node_id))?;
        Ok(self.attach(
            parent,
            RegionNode {
                id: format!("ride_{ride_id}"),
                kind: NodeKind::Ride,
                data: data.into(),
                children: Vec::new(),
            },
        ))
    }

    /// First node with `node_id` in pre-order.
    pub fn find(&self, node_id: &str) -> Option<NodeIndex> {
        self.walk()
            .find(|(_, index)| self.nodes[index.0].id == node_id)
            .map(|(_, index)| index)
    }

    /// Node at `index`.
    pub fn node(&self, index: NodeIndex) -> Option<&RegionNode> {
        self.nodes.get(index.0)
    }

    /// Children of `index`, empty when the index is unknown.
    pub fn children(&self, index: NodeIndex) -> impl Iterator<Item = &RegionNode> {
        self.node(index)
            .map(RegionNode::children)
            .unwrap_or_default()
            .iter()
            .map(|child| &self.nodes[child.0])
    }

    /// Pre-order traversal yielding `(depth, index)`, root first.
    pub fn walk(&self) -> impl Iterator<Item = (usize, NodeIndex)> + '_ {
        let mut stack = vec![(0, Self::ROOT)];
        std::iter::from_fn(move || {
            let (depth, index) = stack.pop()?;
            // Reverse so the first child is visited first.
            stack.extend(
                self.nodes[index.0]
                    .children
                    .iter()
                    .rev()
                    .map(|&child| (depth + 1, child)),
            );
            Some((depth, index))
        })
    }

    /// Total node count including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; the root is always present.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn attach(&mut self, parent: NodeIndex, node: RegionNode) -> NodeIndex {
        let index = NodeIndex(self.nodes.len());
        self.nodes.push(node);
        self.nodes[parent.0].children.push(index);
        index
    }
}
