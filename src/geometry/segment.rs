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
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub a: Point3,
    pub b: Point3,
    pub line: Line,
}

impl LineSegment {
    pub fn new(a: Point3, b: Point3) -> Self {
        LineSegment {
            a,
            b,
            line: Line::through(&a, &b),
        }
    }

    pub fn length(&self) -> f64 {
        self.a.distance_to(&self.b)
    }

    pub fn midpoint(&self) -> Point3 {
        self.a.midpoint(&self.b)
    }

    /// Zero length within tolerance, i.e. a single point.
    pub fn is_degenerate(&self, tol: &Tolerance) -> bool {
        self.a.approx_eq(&self.b, tol)
    }

    /// Per-axis sum-of-distances test, `|p - a| + |p - b| == |b - a|` on
    /// every coordinate, plus `p` on the supporting line.
    pub fn contains_point(&self, p: &Point3, tol: &Tolerance) -> bool {
        let within = (0..3).all(|i| {
            tol.equal(
                (p[i] - self.a[i]).abs() + (p[i] - self.b[i]).abs(),
                (self.a[i] - self.b[i]).abs(),
            )
        });
        within && (self.is_degenerate(tol) || self.line.contains_point(p, tol))
    }

    /// The part of this segment lying on `line`: the whole segment when the
    /// two are coincident, a zero-length segment at the crossing point, or
    /// `None`.
    pub fn line_intersection(&self, line: &Line, tol: &Tolerance) -> Option<LineSegment> {
        if self.is_degenerate(tol) {
            return line.contains_point(&self.a, tol).then_some(*self);
        }

        match self.line.relative_location(line, tol) {
            Location::Coincident => Some(*self),
            Location::Intersecting => {
                let p = self.line.crossing_point(line, tol)?;
                self.contains_point(&p, tol)
                    .then(|| LineSegment::new(p, p))
            }
            Location::Parallel | Location::Skew => None,
        }
    }

    /// Boundary-inclusive segment/segment test.
    pub fn intersects(&self, other: &LineSegment, tol: &Tolerance) -> bool {
        if other.is_degenerate(tol) {
            return self.contains_point(&other.a, tol);
        }

        match self.line_intersection(&other.line, tol) {
            Some(hit) if hit.is_degenerate(tol) => other.contains_point(&hit.a, tol),
            // Both on one line: overlap iff an endpoint of one lies on the other.
            Some(_) => {
                self.contains_point(&other.a, tol)
                    || self.contains_point(&other.b, tol)
                    || other.contains_point(&self.a, tol)
                    || other.contains_point(&self.b, tol)
            }
            None => false,
        }
    }
}
