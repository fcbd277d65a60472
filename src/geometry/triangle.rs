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

use num_traits::Zero;

use crate::geometry::{
    aabb::Aabb,
    line::Line,
    plane::Plane,
    point::{Point3, PointOps},
    segment::LineSegment,
    tolerance::Tolerance,
    vector::VectorOps,
};

/// What three vertices actually describe. Fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriangleKind {
    /// Non-collinear vertices, carrying the supporting plane.
    Proper(Plane),
    /// Collinear, not all coincident; carries the longest edge.
    Segment(LineSegment),
    /// All three vertices coincide.
    Point(Point3),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    vertices: [Point3; 3],
    edges: [LineSegment; 3],
    centroid: Point3,
    reach: f64,
    kind: TriangleKind,
}

impl Triangle {
    /// Classify with the default tolerance.
    pub fn new(p0: Point3, p1: Point3, p2: Point3) -> Self {
        Self::with_tolerance(p0, p1, p2, &Tolerance::default())
    }

    pub fn with_tolerance(p0: Point3, p1: Point3, p2: Point3, tol: &Tolerance) -> Self {
        debug_assert!(p0.is_valid() && p1.is_valid() && p2.is_valid());

        let vertices = [p0, p1, p2];
        let edges = [
            LineSegment::new(p0, p1),
            LineSegment::new(p1, p2),
            LineSegment::new(p2, p0),
        ];
        let centroid = vertices.iter().fold(Point3::zero(), |acc, p| acc + *p) / 3.0;

        let longest = (1..3).fold(0, |best, i| {
            if edges[i].length() > edges[best].length() {
                i
            } else {
                best
            }
        });
        let reach = edges[longest].length();

        let (c01, c12, c20) = (p0.approx_eq(&p1, tol), p1.approx_eq(&p2, tol), p2.approx_eq(&p0, tol));
        let kind = if c01 && c12 {
            TriangleKind::Point(p0)
        } else if c01 || c12 || c20 {
            TriangleKind::Segment(edges[longest])
        } else {
            match Plane::from_points(&p0, &p1, &p2, tol) {
                Some(plane) => TriangleKind::Proper(plane),
                None => TriangleKind::Segment(edges[longest]),
            }
        };

        Triangle {
            vertices,
            edges,
            centroid,
            reach,
            kind,
        }
    }

    /// Nine coordinates, three per vertex.
    pub fn from_coords(c: [f64; 9], tol: &Tolerance) -> Self {
        Self::with_tolerance(
            Point3::new(c[0], c[1], c[2]),
            Point3::new(c[3], c[4], c[5]),
            Point3::new(c[6], c[7], c[8]),
            tol,
        )
    }

    pub fn vertices(&self) -> &[Point3; 3] {
        &self.vertices
    }

    /// Edges v0v1, v1v2, v2v0.
    pub fn edges(&self) -> &[LineSegment; 3] {
        &self.edges
    }

    pub fn centroid(&self) -> &Point3 {
        &self.centroid
    }

    /// Longest edge length. No vertex is farther than this from the
    /// centroid.
    pub fn reach(&self) -> f64 {
        self.reach
    }

    pub fn kind(&self) -> &TriangleKind {
        &self.kind
    }

    pub fn is_proper(&self) -> bool {
        matches!(self.kind, TriangleKind::Proper(_))
    }

    pub fn is_segment(&self) -> bool {
        matches!(self.kind, TriangleKind::Segment(_))
    }

    pub fn is_point(&self) -> bool {
        matches!(self.kind, TriangleKind::Point(_))
    }

    pub fn aabb(&self) -> Aabb {
        let [a, b, c] = &self.vertices;
        let mut aabb = Aabb::from_points(a, b);
        aabb.expand(c);
        aabb
    }

    pub fn is_in_cube(&self, center: &Point3, half_width: f64) -> bool {
        self.vertices
            .iter()
            .all(|p| p.is_in_cube(center, half_width))
    }

    /// Inside-or-on test for a point already known to lie on `plane`.
    ///
    /// For every edge the sign of `((v - p) × e) · n` is taken exactly; the
    /// point is inside or on the boundary iff no two signs disagree. Points
    /// outside count only when within tolerance of an edge, so the test
    /// never reaches farther than the tolerance past the boundary.
    pub(crate) fn contains_coplanar_point(&self, plane: &Plane, p: &Point3, tol: &Tolerance) -> bool {
        let sides = [0, 1, 2].map(|i| {
            p.vector_to(&self.vertices[i])
                .cross(&self.edges[i].line.dir)
                .dot(&plane.normal)
        });

        let inside = sides.iter().all(|s| *s >= 0.0) || sides.iter().all(|s| *s <= 0.0);
        inside || self.edges.iter().any(|e| e.contains_point(p, tol))
    }

    /// Portion of a proper triangle lying on a line of its own plane.
    ///
    /// An edge on the line is returned whole. Otherwise the two farthest
    /// edge crossings bound the chord; a lone crossing is a zero-length
    /// segment.
    pub(crate) fn line_intersection(&self, line: &Line, tol: &Tolerance) -> Option<LineSegment> {
        let hits = self.edges.each_ref().map(|e| e.line_intersection(line, tol));

        if let Some(edge) = hits.iter().flatten().find(|s| !s.is_degenerate(tol)) {
            return Some(*edge);
        }

        let points: [Option<Point3>; 3] = hits.map(|h| h.map(|s| s.a));
        let mut chord: Option<(Point3, Point3)> = None;
        for i in 0..3 {
            let Some(p) = points[i] else { continue };
            if chord.is_none() {
                chord = Some((p, p));
            }
            for q in points[i + 1..].iter().flatten() {
                let span = chord.map_or(0.0, |(a, b)| a.distance_to(&b));
                if p.distance_to(q) > span {
                    chord = Some((p, *q));
                }
            }
        }

        chord.map(|(a, b)| LineSegment::new(a, b))
    }
}
