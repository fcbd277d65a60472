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

//! Random stress scenarios.
//!
//! Every generator draws from the caller's RNG, so a seeded `StdRng` gives
//! a reproducible input.

use rand::Rng;

use crate::geometry::{point::Point3, triangle::Triangle};

/// Half-length of the segments laid along the main diagonal.
pub const DIAGONAL_HALF_LENGTH: f64 = 2.0;

/// `n` proper triangles: one vertex uniform in `[-extent, extent]³`, the
/// other two within `max_size` of it on every axis.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, n: usize, extent: f64, max_size: f64) -> Vec<Triangle> {
    let mut triangles = Vec::with_capacity(n);
    while triangles.len() < n {
        let anchor = random_point(rng, -extent, extent);
        let p1 = offset(rng, &anchor, max_size);
        let p2 = offset(rng, &anchor, max_size);
        let tri = Triangle::new(anchor, p1, p2);
        if tri.is_proper() {
            triangles.push(tri);
        }
    }
    triangles
}

/// One large triangle on `x + y + z = 0` followed by `n - 1` point
/// triangles on the same plane.
pub fn points_on_big_triangle<R: Rng + ?Sized>(rng: &mut R, n: usize, extent: f64) -> Vec<Triangle> {
    let mut triangles = Vec::with_capacity(n);
    if n == 0 {
        return triangles;
    }

    let [a, b, c] = [(); 3].map(|_| on_origin_plane(rng, extent));
    triangles.push(Triangle::new(a, b, c));

    for _ in 1..n {
        let p = on_origin_plane(rng, extent);
        triangles.push(Triangle::new(p, p, p));
    }
    triangles
}

/// `per_plane` small triangles on each of the planes
/// `x + y + z = spacing·i`, `i` in `0..planes`.
pub fn parallel_planes<R: Rng + ?Sized>(
    rng: &mut R,
    planes: usize,
    per_plane: usize,
    extent: f64,
    spacing: f64,
) -> Vec<Triangle> {
    let spread = extent * 0.01;
    let mut triangles = Vec::with_capacity(planes * per_plane);
    for i in 0..planes {
        let level = spacing * i as f64;
        for _ in 0..per_plane {
            let base = on_origin_plane(rng, extent);
            let [a, b, c] = [(); 3].map(|_| {
                let x = base.x() + rng.random_range(0.0..=spread);
                let y = base.y() + rng.random_range(0.0..=spread);
                Point3::new(x, y, level - x - y)
            });
            triangles.push(Triangle::new(a, b, c));
        }
    }
    triangles
}

/// `n` segment triangles on `x + y + z = 0`, two coincident vertices each.
pub fn segments_on_plane<R: Rng + ?Sized>(rng: &mut R, n: usize, extent: f64) -> Vec<Triangle> {
    let spread = extent * 0.1;
    (0..n)
        .map(|_| {
            let base = on_origin_plane(rng, extent);
            let [a, c] = [(); 2].map(|_| {
                let r = rng.random_range(0.0..=spread);
                Point3::new(base.x() + r, base.y() + r, -(base.x() + r) - (base.y() + r))
            });
            Triangle::new(a, a, c)
        })
        .collect()
}

/// `n` short segment triangles on the line `x = y = z`.
pub fn segments_on_line<R: Rng + ?Sized>(rng: &mut R, n: usize, extent: f64) -> Vec<Triangle> {
    (0..n)
        .map(|_| {
            let (hi, lo) = diagonal_pair(rng, extent);
            Triangle::new(hi, hi, lo)
        })
        .collect()
}

/// `n` triangles, each with one edge on the line `x = y = z` and a
/// free third vertex.
pub fn triangles_on_line<R: Rng + ?Sized>(rng: &mut R, n: usize, extent: f64) -> Vec<Triangle> {
    (0..n)
        .map(|_| {
            let (hi, lo) = diagonal_pair(rng, extent);
            let apex = random_point(rng, 0.0, extent);
            Triangle::new(hi, apex, lo)
        })
        .collect()
}

fn random_point<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> Point3 {
    Point3::new(
        rng.random_range(lo..=hi),
        rng.random_range(lo..=hi),
        rng.random_range(lo..=hi),
    )
}

fn offset<R: Rng + ?Sized>(rng: &mut R, p: &Point3, max_size: f64) -> Point3 {
    Point3::new(
        p.x() + rng.random_range(-max_size..=max_size),
        p.y() + rng.random_range(-max_size..=max_size),
        p.z() + rng.random_range(-max_size..=max_size),
    )
}

/// Point with `x, y` in `[0, extent]` on the plane `x + y + z = 0`.
fn on_origin_plane<R: Rng + ?Sized>(rng: &mut R, extent: f64) -> Point3 {
    let x = rng.random_range(0.0..=extent);
    let y = rng.random_range(0.0..=extent);
    Point3::new(x, y, -x - y)
}

fn diagonal_pair<R: Rng + ?Sized>(rng: &mut R, extent: f64) -> (Point3, Point3) {
    let t = rng.random_range(0.0..=extent);
    let hi = t + DIAGONAL_HALF_LENGTH;
    let lo = t - DIAGONAL_HALF_LENGTH;
    (Point3::new(hi, hi, hi), Point3::new(lo, lo, lo))
}
