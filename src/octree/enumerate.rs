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

use std::collections::BTreeSet;

use crate::geometry::{
    aabb::Aabb, tolerance::Tolerance, tri_tri_intersect::intersects, triangle::Triangle,
};
use crate::octree::{NodeId, Octree, OctreeNode};

/// Ids of every triangle touching at least one other triangle, ascending.
///
/// Each node pairs its own entries, then tests every entry against the
/// subtrees hanging below it. Any two triangles meet at exactly one of
/// these steps, at the deepest node holding either of them.
pub fn enumerate(tree: &Octree) -> BTreeSet<usize> {
    let mut found = BTreeSet::new();
    for node in tree.nodes() {
        scan_node(tree, node, &mut found);
    }

    log::debug!(
        "enumerate: {} of {} triangles intersect",
        found.len(),
        tree.triangles().len()
    );
    found
}

/// Same result as [`enumerate`], one rayon task per node.
#[cfg(feature = "parallel")]
pub fn enumerate_par(tree: &Octree) -> BTreeSet<usize> {
    use rayon::prelude::*;

    let found = tree
        .nodes()
        .par_iter()
        .map(|node| {
            let mut local = BTreeSet::new();
            scan_node(tree, node, &mut local);
            local
        })
        .reduce(BTreeSet::new, |mut a, mut b| {
            if a.len() < b.len() {
                std::mem::swap(&mut a, &mut b);
            }
            a.append(&mut b);
            a
        });

    log::debug!(
        "enumerate_par: {} of {} triangles intersect",
        found.len(),
        tree.triangles().len()
    );
    found
}

/// Test every pair. Reference answer for the octree.
pub fn brute_force(triangles: &[Triangle], tol: &Tolerance) -> BTreeSet<usize> {
    let mut found = BTreeSet::new();
    for (i, a) in triangles.iter().enumerate() {
        for (j, b) in triangles.iter().enumerate().skip(i + 1) {
            if found.contains(&i) && found.contains(&j) {
                continue;
            }
            if intersects(a, b, tol) {
                found.insert(i);
                found.insert(j);
            }
        }
    }
    found
}

fn test_pair(tree: &Octree, a: usize, b: usize, found: &mut BTreeSet<usize>) {
    // Already both reported: the answer cannot change.
    if found.contains(&a) && found.contains(&b) {
        return;
    }
    if intersects(tree.triangle(a), tree.triangle(b), &tree.config().tolerance) {
        found.insert(a);
        found.insert(b);
    }
}

fn scan_node(tree: &Octree, node: &OctreeNode, found: &mut BTreeSet<usize>) {
    let entries = node.entries();
    for (i, &a) in entries.iter().enumerate() {
        for &b in &entries[i + 1..] {
            test_pair(tree, a, b, found);
        }

        let bounds = tree.triangle(a).aabb();
        for child in node.active_children() {
            scan_subtree(tree, a, &bounds, child, found);
        }
    }
}

fn scan_subtree(
    tree: &Octree,
    id: usize,
    bounds: &Aabb,
    node_id: NodeId,
    found: &mut BTreeSet<usize>,
) {
    let node = tree.node(node_id);
    let margin = tree.config().tolerance.eps();
    if !bounds.intersects(&node.bounds().grown(margin)) {
        return;
    }

    for &other in node.entries() {
        test_pair(tree, id, other, found);
    }
    for child in node.active_children() {
        scan_subtree(tree, id, bounds, child, found);
    }
}
