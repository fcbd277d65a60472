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
    line::{Line, Location},
    point::{Point3, PointOps},
    tolerance::Tolerance,
    vector::{Vector3, VectorOps},
};

/// Plane `a·x + b·y + c·z + d = 0` with `(a, b, c)` of unit length, so
/// `signed_distance` is a true distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub normal: Vector3,
}

impl Plane {
    /// Plane through three points; `None` when they are collinear, i.e. the
    /// sine of the angle at `p1` is within tolerance of zero.
    pub fn from_points(p1: &Point3, p2: &Point3, p3: &Point3, tol: &Tolerance) -> Option<Self> {
        let (u, v) = (p1.vector_to(p2), p1.vector_to(p3));
        let n = u.cross(&v);
        let len = n.norm();
        // Sine of the angle at `p1`, so the test does not scale with size.
        let scale = u.norm() * v.norm();
        if scale == 0.0 || tol.is_zero(len / scale) {
            return None;
        }

        let normal = n / len;
        let d = -normal.dot(&p1.as_vector());
        Some(Plane {
            a: normal.x(),
            b: normal.y(),
            c: normal.z(),
            d,
            normal,
        })
    }

    pub fn signed_distance(&self, p: &Point3) -> f64 {
        self.a * p.x() + self.b * p.y() + self.c * p.z() + self.d
    }

    /// `point` is any point of `other`.
    pub fn relative_location(&self, other: &Plane, point: &Point3, tol: &Tolerance) -> Location {
        if self.normal.is_collinear(&other.normal, tol) {
            if tol.is_zero(self.signed_distance(point)) {
                Location::Coincident
            } else {
                Location::Parallel
            }
        } else {
            Location::Intersecting
        }
    }

    /// Line shared by two crossing planes.
    ///
    /// One coordinate of the anchor is fixed to 1 and the other two are
    /// solved from the 2×2 minor picked in the order (b,c), (a,c), (a,b).
    /// The order is the pivoting strategy; keep it.
    pub fn intersection(&self, other: &Plane, tol: &Tolerance) -> Option<Line> {
        let dir = self.normal.cross(&other.normal);
        let (p, q) = (self, other);

        let det_bc = p.b * q.c - q.b * p.c;
        let det_ac = p.a * q.c - q.a * p.c;
        let det_ab = p.a * q.b - q.a * p.b;

        let origin = if !tol.is_zero(det_bc) {
            let x = 1.0;
            let y = (-q.c * (p.d + p.a * x) + p.c * (q.d + q.a * x)) / det_bc;
            let z = (-p.b * (q.d + q.a * x) + q.b * (p.d + p.a * x)) / det_bc;
            Point3::new(x, y, z)
        } else if !tol.is_zero(det_ac) {
            let y = 1.0;
            let x = (-q.c * (p.d + p.b * y) + p.c * (q.d + q.b * y)) / det_ac;
            let z = (-p.a * (q.d + q.b * y) + q.a * (p.d + p.b * y)) / det_ac;
            Point3::new(x, y, z)
        } else if !tol.is_zero(det_ab) {
            let z = 1.0;
            let x = (-q.b * (p.d + p.c * z) + p.b * (q.d + q.c * z)) / det_ab;
            let y = (-p.a * (q.d + q.c * z) + q.a * (p.d + p.c * z)) / det_ab;
            Point3::new(x, y, z)
        } else {
            return None;
        };

        Some(Line::new(origin, dir))
    }

    /// Where segment `[a, b]` meets the plane, if its endpoints are not
    /// strictly on the same side.
    pub fn crossing(&self, a: &Point3, b: &Point3, tol: &Tolerance) -> Option<Point3> {
        let da = self.signed_distance(a);
        let db = self.signed_distance(b);

        if (tol.is_positive(da) && tol.is_positive(db))
            || (tol.is_negative(da) && tol.is_negative(db))
        {
            return None;
        }

        let denominator = da - db;
        if tol.is_zero(denominator) {
            // Parallel to the plane: either no crossing or lying in it.
            return None;
        }

        let t = da / denominator;
        Some(a.add_vector(&(a.vector_to(b) * t)))
    }
}
