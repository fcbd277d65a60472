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

use crate::geometry::{
    point::{Point3, PointOps},
    tolerance::Tolerance,
    vector::{Vector3, VectorOps},
};

/// Relative position of two lines or two planes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    Coincident,
    Parallel,
    Intersecting,
    /// Disjoint and not coplanar. Only lines can be skew.
    Skew,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub origin: Point3,
    pub dir: Vector3,
}

impl Line {
    pub fn new(origin: Point3, dir: Vector3) -> Self {
        Line { origin, dir }
    }

    pub fn through(a: &Point3, b: &Point3) -> Self {
        Line::new(*a, a.vector_to(b))
    }

    pub fn point_at(&self, t: f64) -> Point3 {
        self.origin.add_vector(&(self.dir * t))
    }

    /// Both directions are normalized first, and the coplanarity check
    /// divides by `|u1 × u2|`, so every branch compares a true distance
    /// against the tolerance.
    pub fn relative_location(&self, other: &Line, tol: &Tolerance) -> Location {
        debug_assert!(!tol.is_zero(self.dir.norm()) && !tol.is_zero(other.dir.norm()));

        let u1 = self.dir.normalized();
        let u2 = other.dir.normalized();
        let connector = self.origin.vector_to(&other.origin);

        if u1.is_collinear(&u2, tol) {
            return if u1.is_collinear(&connector, tol) {
                Location::Coincident
            } else {
                Location::Parallel
            };
        }

        let normal = u1.cross(&u2);
        if tol.is_zero(normal.dot(&connector) / normal.norm()) {
            Location::Intersecting
        } else {
            Location::Skew
        }
    }

    pub fn contains_point(&self, p: &Point3, tol: &Tolerance) -> bool {
        self.dir
            .normalized()
            .is_collinear(&self.origin.vector_to(p), tol)
    }

    /// Crossing point of two coplanar, non-parallel lines.
    ///
    /// Solves `origin + s·u1 = other.origin + r·u2` on the first
    /// coordinate pair whose minor is not negligible, tried in the order
    /// (x,y), (y,z), (x,z).
    pub fn crossing_point(&self, other: &Line, tol: &Tolerance) -> Option<Point3> {
        let u1 = self.dir.normalized();
        let u2 = other.dir.normalized();
        let r = self.origin.vector_to(&other.origin);

        let det_xy = -u1.x() * u2.y() + u1.y() * u2.x();
        let det_yz = -u1.y() * u2.z() + u1.z() * u2.y();
        let det_xz = -u1.x() * u2.z() + u1.z() * u2.x();

        let s = if !tol.is_zero(det_xy) {
            (r.x() * -u2.y() - r.y() * -u2.x()) / det_xy
        } else if !tol.is_zero(det_yz) {
            (r.y() * -u2.z() - r.z() * -u2.y()) / det_yz
        } else if !tol.is_zero(det_xz) {
            (r.x() * -u2.z() - r.z() * -u2.x()) / det_xz
        } else {
            return None;
        };

        Some(self.origin.add_vector(&(u1 * s)))
    }
}
