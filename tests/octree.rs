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

use approx::assert_relative_eq;
use rand::{SeedableRng, rngs::StdRng};
use tritouch::geometry::{Point3, Tolerance, Triangle};
use tritouch::octree::enumerate::{brute_force, enumerate};
use tritouch::octree::{NodeId, Octree, OctreeConfig};
use tritouch::{find_intersecting, generate};

fn random_soup(seed: u64, n: usize) -> Vec<Triangle> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate::uniform(&mut rng, n, 30.0, 5.0)
}

fn walk(tree: &Octree, id: NodeId, seen: &mut Vec<usize>) {
    let node = tree.node(id);
    seen.extend_from_slice(node.entries());
    for child in node.active_children() {
        walk(tree, child, seen);
    }
}

#[test]
fn test_root_cube_encloses_input() {
    let triangles = vec![
        Triangle::new(
            Point3::new(10.0, 10.0, 10.0),
            Point3::new(20.0, 10.0, 10.0),
            Point3::new(10.0, 30.0, 10.0),
        ),
        Triangle::new(
            Point3::new(12.0, 12.0, 40.0),
            Point3::new(14.0, 12.0, 40.0),
            Point3::new(12.0, 14.0, 40.0),
        ),
    ];
    let tree = Octree::build(&triangles, OctreeConfig::default());
    let root = tree.node(tree.root());
    assert_eq!(root.center(), &Point3::new(15.0, 20.0, 25.0));
    assert_relative_eq!(root.half_width(), 15.0);
    assert_eq!(root.entries(), &[0, 1]);
    assert!(root.is_leaf());
}

#[test]
fn test_every_triangle_lives_in_exactly_one_node() {
    let triangles = random_soup(1, 800);
    let config = OctreeConfig::default().with_node_capacity(8);
    let tree = Octree::build(&triangles, config);
    assert!(tree.len() > 1);

    let mut seen = Vec::new();
    walk(&tree, tree.root(), &mut seen);
    seen.sort_unstable();
    assert_eq!(seen, (0..triangles.len()).collect::<Vec<_>>());

    let eps = config.tolerance.eps();
    for node in tree.nodes() {
        for &id in node.entries() {
            assert!(tree.triangle(id).is_in_cube(node.center(), node.half_width() + eps));
        }
        for slot in 0..8 {
            let active = node.active_mask() & (1 << slot) != 0;
            assert_eq!(active, node.children()[slot].is_some());
            if let Some(child) = node.child(slot) {
                let child = tree.node(child);
                assert_eq!(child.depth(), node.depth() + 1);
                assert_relative_eq!(child.half_width(), node.half_width() / 2.0);
                assert!(!child.entries().is_empty() || !child.is_leaf());
            }
        }
    }
}

#[test]
fn test_depth_limit_stops_identical_stack() {
    let t = Triangle::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1e-3, 0.0, 0.0),
        Point3::new(0.0, 1e-3, 0.0),
    );
    let mut triangles = vec![t.clone(); 50];
    triangles.push(Triangle::new(
        Point3::new(10.0, 10.0, 10.0),
        Point3::new(11.0, 10.0, 10.0),
        Point3::new(10.0, 11.0, 10.0),
    ));

    let config = OctreeConfig::default().with_node_capacity(4).with_max_depth(3);
    let tree = Octree::build(&triangles, config);
    assert!(tree.depth() <= 3);

    let found = enumerate(&tree);
    assert_eq!(found, (0..50).collect::<BTreeSet<_>>());
}

#[test]
fn test_empty_and_single_inputs() {
    let none: Vec<Triangle> = Vec::new();
    let tree = Octree::build(&none, OctreeConfig::default());
    assert_eq!(tree.len(), 1);
    assert!(enumerate(&tree).is_empty());

    let one = random_soup(3, 1);
    assert!(find_intersecting(&one, &OctreeConfig::default()).is_empty());
}

#[test]
fn test_result_independent_of_capacity() {
    let triangles = random_soup(11, 600);
    let tol = Tolerance::default();
    let expected = brute_force(&triangles, &tol);
    assert!(!expected.is_empty());
    assert!(expected.len() < triangles.len());

    for capacity in [1, 2, 4, 16, 32, 1000] {
        let config = OctreeConfig::default().with_node_capacity(capacity);
        let tree = Octree::build(&triangles, config);
        assert_eq!(enumerate(&tree), expected, "capacity {capacity}");
    }
}

#[test]
fn test_thousand_random_triangles_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(2024);
    let triangles = generate::uniform(&mut rng, 1000, 100.0, 8.0);
    let tol = Tolerance::default();
    assert_eq!(
        find_intersecting(&triangles, &OctreeConfig::default()),
        brute_force(&triangles, &tol)
    );
}

#[test]
fn test_boundary_triangles_meet_subtree_triangles() {
    // Straddles the root center, so it stays at the root while the small
    // triangles piercing it sink into children.
    let mut triangles = vec![Triangle::new(
        Point3::new(-1.0, -1.0, 0.5),
        Point3::new(1.0, -1.0, 0.5),
        Point3::new(0.0, 1.0, 0.5),
    )];
    for i in 0..20 {
        let x = 0.02 * i as f64 + 0.05;
        triangles.push(Triangle::new(
            Point3::new(x, 0.1, 0.4),
            Point3::new(x, 0.1, 0.6),
            Point3::new(x + 0.01, 0.11, 0.5),
        ));
    }
    triangles.push(Triangle::new(
        Point3::new(-3.0, -3.0, -3.0),
        Point3::new(-2.9, -3.0, -3.0),
        Point3::new(-3.0, -2.9, -3.0),
    ));
    triangles.push(Triangle::new(
        Point3::new(3.0, 3.0, 3.0),
        Point3::new(2.9, 3.0, 3.0),
        Point3::new(3.0, 2.9, 3.0),
    ));

    let tree = Octree::build(&triangles, OctreeConfig::default().with_node_capacity(2));
    assert!(tree.node(tree.root()).entries().contains(&0));
    assert!(tree.depth() >= 1);

    let found = enumerate(&tree);
    assert_eq!(found, (0..21).collect::<BTreeSet<_>>());
    assert_eq!(found, brute_force(&triangles, &Tolerance::default()));
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_matches_sequential() {
    use tritouch::octree::enumerate::enumerate_par;

    let triangles = random_soup(5, 900);
    let tree = Octree::build(&triangles, OctreeConfig::default().with_node_capacity(8));
    assert_eq!(enumerate_par(&tree), enumerate(&tree));
}

/// Two far-corner anchors fix the root cube to `[-10, 10]³`, so the plane
/// `x = 0` is the first split.
fn anchored(extra: Vec<Triangle>) -> Vec<Triangle> {
    let mut triangles = vec![
        Triangle::new(
            Point3::new(-10.0, -10.0, -10.0),
            Point3::new(-9.9, -10.0, -10.0),
            Point3::new(-10.0, -9.9, -10.0),
        ),
        Triangle::new(
            Point3::new(10.0, 10.0, 10.0),
            Point3::new(9.9, 10.0, 10.0),
            Point3::new(10.0, 9.9, 10.0),
        ),
    ];
    triangles.extend(extra);
    triangles
}

fn dot(x: f64, y: f64, z: f64) -> Triangle {
    let p = Point3::new(x, y, z);
    Triangle::new(p, p, p)
}

fn assert_capacity_invariant(triangles: &[Triangle], expected: &BTreeSet<usize>) {
    assert_eq!(&brute_force(triangles, &Tolerance::default()), expected);
    for capacity in [1, 2, 32] {
        let tree = Octree::build(triangles, OctreeConfig::default().with_node_capacity(capacity));
        assert_eq!(&enumerate(&tree), expected, "capacity {capacity}");
    }
}

#[test]
fn test_sharp_vertex_across_split_plane() {
    let thin = Triangle::new(
        Point3::new(0.001, 1.0, 1.0),
        Point3::new(3.0, 1.0 - 1.5e-4, 1.0),
        Point3::new(3.0, 1.0 + 1.5e-4, 1.0),
    );
    assert!(thin.is_proper());

    // 1.5e-3 past the apex, on the other side of x = 0.
    let beyond = anchored(vec![thin.clone(), dot(-0.0005, 1.0, 1.0)]);
    assert_capacity_invariant(&beyond, &BTreeSet::new());

    let at_apex = anchored(vec![thin, dot(0.001 - 1e-8, 1.0, 1.0)]);
    assert_capacity_invariant(&at_apex, &BTreeSet::from([2, 3]));
}

#[test]
fn test_touching_points_straddling_split_plane() {
    let straddling = anchored(vec![dot(-4e-8, 1.0, 1.0), dot(4e-8, 1.0, 1.0)]);
    assert_capacity_invariant(&straddling, &BTreeSet::from([2, 3]));

    let apart = anchored(vec![dot(-1e-6, 1.0, 1.0), dot(1e-6, 1.0, 1.0)]);
    assert_capacity_invariant(&apart, &BTreeSet::new());
}

#[test]
fn test_near_parallel_segments_across_split_plane() {
    let lower = Triangle::new(
        Point3::new(0.5, 0.5, -1e-3),
        Point3::new(5.0, 0.5, -1e-3),
        Point3::new(9.0, 0.5, -1e-3),
    );
    let upper = Triangle::new(
        Point3::new(0.5, 0.5 - 5e-5, 1e-3),
        Point3::new(5.0, 0.5, 1e-3),
        Point3::new(9.5, 0.5 + 5e-5, 1e-3),
    );
    assert!(lower.is_segment() && upper.is_segment());
    assert_capacity_invariant(&anchored(vec![lower, upper]), &BTreeSet::new());
}
