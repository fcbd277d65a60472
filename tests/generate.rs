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

use rand::{SeedableRng, rngs::StdRng};
use tritouch::generate;
use tritouch::geometry::{Tolerance, Triangle, intersects};
use tritouch::octree::enumerate::brute_force;
use tritouch::{OctreeConfig, find_intersecting};

fn agrees_with_brute_force(triangles: &[Triangle]) {
    let expected = brute_force(triangles, &Tolerance::default());
    for capacity in [4, 32] {
        let config = OctreeConfig::default().with_node_capacity(capacity);
        assert_eq!(find_intersecting(triangles, &config), expected, "capacity {capacity}");
    }
}

#[test]
fn test_uniform() {
    let mut rng = StdRng::seed_from_u64(1);
    let triangles = generate::uniform(&mut rng, 300, 20.0, 3.0);
    assert_eq!(triangles.len(), 300);
    assert!(triangles.iter().all(Triangle::is_proper));
    agrees_with_brute_force(&triangles);
}

#[test]
fn test_points_on_big_triangle() {
    let mut rng = StdRng::seed_from_u64(2);
    let triangles = generate::points_on_big_triangle(&mut rng, 400, 1000.0);
    assert_eq!(triangles.len(), 400);
    assert!(triangles[0].is_proper());
    assert!(triangles[1..].iter().all(Triangle::is_point));
    assert!(generate::points_on_big_triangle(&mut rng, 0, 10.0).is_empty());

    // Distinct points only ever touch the big triangle.
    let found = brute_force(&triangles, &Tolerance::default());
    assert!(found.is_empty() || found.contains(&0));
    agrees_with_brute_force(&triangles);
}

#[test]
fn test_parallel_planes() {
    let mut rng = StdRng::seed_from_u64(3);
    let per_plane = 100;
    let triangles = generate::parallel_planes(&mut rng, 4, per_plane, 1000.0, 1e-3);
    assert_eq!(triangles.len(), 400);
    assert!(triangles.iter().all(Triangle::is_proper));

    let tol = Tolerance::default();
    for (i, a) in triangles.iter().enumerate() {
        for (j, b) in triangles.iter().enumerate().skip(i + 1) {
            if i / per_plane != j / per_plane {
                assert!(!intersects(a, b, &tol), "planes of {i} and {j} touch");
            }
        }
    }
    agrees_with_brute_force(&triangles);
}

#[test]
fn test_segments_on_plane() {
    let mut rng = StdRng::seed_from_u64(4);
    let triangles = generate::segments_on_plane(&mut rng, 400, 1000.0);
    assert!(triangles.iter().all(Triangle::is_segment));
    agrees_with_brute_force(&triangles);
}

#[test]
fn test_segments_on_line() {
    let mut rng = StdRng::seed_from_u64(5);
    let triangles = generate::segments_on_line(&mut rng, 400, 1000.0);
    assert!(triangles.iter().all(Triangle::is_segment));

    let found = brute_force(&triangles, &Tolerance::default());
    assert!(!found.is_empty());
    agrees_with_brute_force(&triangles);
}

#[test]
fn test_triangles_on_line() {
    let mut rng = StdRng::seed_from_u64(6);
    let triangles = generate::triangles_on_line(&mut rng, 300, 1000.0);
    assert_eq!(triangles.len(), 300);
    agrees_with_brute_force(&triangles);
}
