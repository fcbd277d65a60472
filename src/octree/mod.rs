// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

pub mod enumerate;

use std::array;

use num_traits::Zero;

use crate::geometry::{aabb::Aabb, point::Point3, tolerance::Tolerance, triangle::Triangle};

pub const CHILD_NUM: usize = 8;

/// A node holding more candidates than this is split.
pub const DEFAULT_NODE_CAPACITY: usize = 32;

/// Nodes at this depth are never split, whatever their size.
pub const DEFAULT_MAX_DEPTH: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OctreeConfig {
    pub node_capacity: usize,
    pub max_depth: usize,
    pub tolerance: Tolerance,
}

impl Default for OctreeConfig {
    fn default() -> Self {
        OctreeConfig {
            node_capacity: DEFAULT_NODE_CAPACITY,
            max_depth: DEFAULT_MAX_DEPTH,
            tolerance: Tolerance::default(),
        }
    }
}

impl OctreeConfig {
    pub fn with_node_capacity(mut self, node_capacity: usize) -> Self {
        self.node_capacity = node_capacity;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Index of a node in the octree arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
pub struct OctreeNode {
    center: Point3,
    half_width: f64,
    depth: usize,
    entries: Vec<usize>,
    children: [Option<NodeId>; CHILD_NUM],
    active: u8,
}

impl OctreeNode {
    fn new(center: Point3, half_width: f64, depth: usize, entries: Vec<usize>) -> Self {
        OctreeNode {
            center,
            half_width,
            depth,
            entries,
            children: [None; CHILD_NUM],
            active: 0,
        }
    }

    pub fn center(&self) -> &Point3 {
        &self.center
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Ids of the triangles retained at this node.
    pub fn entries(&self) -> &[usize] {
        &self.entries
    }

    /// Bit `i` is set iff child slot `i` holds triangles.
    pub fn active_mask(&self) -> u8 {
        self.active
    }

    pub fn child(&self, slot: usize) -> Option<NodeId> {
        self.children[slot]
    }

    pub fn children(&self) -> &[Option<NodeId>; CHILD_NUM] {
        &self.children
    }

    pub fn active_children(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..CHILD_NUM)
            .filter(|slot| self.active & (1 << slot) != 0)
            .filter_map(|slot| self.children[slot])
    }

    pub fn is_leaf(&self) -> bool {
        self.active == 0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::cube(&self.center, self.half_width)
    }

    /// Slot bits: 0 for +x, 1 for +y, 2 for +z.
    fn child_center(&self, slot: usize) -> Point3 {
        let offset = self.half_width / 2.0;
        Point3::from(array::from_fn(|axis| {
            if slot & (1 << axis) != 0 {
                self.center[axis] + offset
            } else {
                self.center[axis] - offset
            }
        }))
    }

    fn octant_of(&self, p: &Point3) -> usize {
        (0..3)
            .filter(|&axis| p[axis] >= self.center[axis])
            .fold(0, |slot, axis| slot | (1 << axis))
    }
}

/// Octree over a borrowed, static triangle set.
///
/// Nodes live in one arena and refer to their children by [`NodeId`];
/// the root is always the first node. The tree is immutable once built.
#[derive(Clone, Debug)]
pub struct Octree<'a> {
    triangles: &'a [Triangle],
    nodes: Vec<OctreeNode>,
    config: OctreeConfig,
}

impl<'a> Octree<'a> {
    /// Insert every triangle at the root cube, then split overfull nodes.
    pub fn build(triangles: &'a [Triangle], config: OctreeConfig) -> Self {
        let (center, half_width) =
            match Aabb::enclosing(triangles.iter().flat_map(|t| t.vertices().iter())) {
                Some(bounds) => (bounds.center_point(), bounds.max_half_extent()),
                None => (Point3::zero(), 0.0),
            };

        let root = OctreeNode::new(center, half_width, 0, (0..triangles.len()).collect());
        let mut tree = Octree {
            triangles,
            nodes: vec![root],
            config,
        };

        let mut pending = vec![tree.root()];
        while let Some(id) = pending.pop() {
            pending.extend(tree.split(id));
        }

        log::debug!(
            "octree: {} triangles, {} nodes, depth {}, {} retained at the root",
            triangles.len(),
            tree.nodes.len(),
            tree.depth(),
            tree.nodes[0].entries.len()
        );
        tree
    }

    /// Hand every candidate of an overfull node to the unique child cube
    /// containing it. Returns the children created.
    fn split(&mut self, id: NodeId) -> Vec<NodeId> {
        let eps = self.config.tolerance.eps();
        let node = &self.nodes[id.0];

        if node.entries.len() <= self.config.node_capacity {
            return Vec::new();
        }
        if node.depth >= self.config.max_depth {
            log::warn!(
                "octree: depth limit {} reached with {} triangles in one node",
                self.config.max_depth,
                node.entries.len()
            );
            return Vec::new();
        }

        let child_half_width = node.half_width / 2.0;
        // Shrunk cubes keep triangles of sibling nodes at least 2·eps apart
        // on some axis, beyond what `intersects` accepts.
        let fit = child_half_width - eps;
        if fit <= 0.0 {
            return Vec::new();
        }

        let depth = node.depth + 1;
        let centers: [Point3; CHILD_NUM] = array::from_fn(|slot| node.child_center(slot));
        let mut buckets: [Vec<usize>; CHILD_NUM] = Default::default();
        let mut retained = Vec::new();

        for &tid in &node.entries {
            let tri = &self.triangles[tid];
            let slot = node.octant_of(&tri.vertices()[0]);
            if tri.is_in_cube(&centers[slot], fit) {
                buckets[slot].push(tid);
            } else {
                retained.push(tid);
            }
        }

        if retained.len() == self.nodes[id.0].entries.len() {
            return Vec::new();
        }

        let mut created = Vec::new();
        for (slot, bucket) in buckets.into_iter().enumerate() {
            if bucket.is_empty() {
                continue;
            }
            let child = NodeId(self.nodes.len());
            self.nodes
                .push(OctreeNode::new(centers[slot], child_half_width, depth, bucket));

            let parent = &mut self.nodes[id.0];
            parent.children[slot] = Some(child);
            parent.active |= 1 << slot;
            created.push(child);
        }

        log::trace!(
            "octree: split node {} at depth {} into {} children, {} boundary triangles",
            id.0,
            depth - 1,
            created.len(),
            retained.len()
        );
        self.nodes[id.0].entries = retained;
        created
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &OctreeNode {
        &self.nodes[id.0]
    }

    pub fn nodes(&self) -> &[OctreeNode] {
        &self.nodes
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Never true: the root always exists.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Deepest node depth; the root is at depth 0.
    pub fn depth(&self) -> usize {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    pub fn triangles(&self) -> &'a [Triangle] {
        self.triangles
    }

    pub fn triangle(&self, id: usize) -> &'a Triangle {
        debug_assert!(id < self.triangles.len());
        &self.triangles[id]
    }

    pub fn config(&self) -> &OctreeConfig {
        &self.config
    }
}
