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

use std::cmp::Ordering;

use crate::geometry::{
    line::Location,
    plane::Plane,
    point::Point3,
    segment::LineSegment,
    tolerance::Tolerance,
    triangle::{Triangle, TriangleKind},
};

/// Do `a` and `b` share at least one point?
///
/// Vertex contact, edge overlap, coplanar overlap and transversal crossing
/// all count, for proper and degenerate triangles alike. The result does
/// not depend on argument order.
pub fn intersects(a: &Triangle, b: &Triangle, tol: &Tolerance) -> bool {
    // Both argument orders run the same arithmetic.
    let (a, b) = canonical_order(a, b);

    let gap = a.centroid().distance_to(b.centroid()) - (a.reach() + b.reach());
    if tol.is_positive(gap) {
        return false;
    }

    match (a.kind(), b.kind()) {
        (TriangleKind::Proper(pa), TriangleKind::Proper(pb)) => proper_proper(a, pa, b, pb, tol),
        (TriangleKind::Segment(sa), TriangleKind::Segment(sb)) => sa.intersects(sb, tol),
        (TriangleKind::Point(pa), TriangleKind::Point(pb)) => pa.approx_eq(pb, tol),

        (TriangleKind::Proper(plane), TriangleKind::Point(p)) => proper_point(a, plane, p, tol),
        (TriangleKind::Point(p), TriangleKind::Proper(plane)) => proper_point(b, plane, p, tol),

        (TriangleKind::Proper(plane), TriangleKind::Segment(s)) => {
            proper_segment(a, plane, s, tol)
        }
        (TriangleKind::Segment(s), TriangleKind::Proper(plane)) => {
            proper_segment(b, plane, s, tol)
        }

        (TriangleKind::Segment(s), TriangleKind::Point(p)) => segment_point(s, p, tol),
        (TriangleKind::Point(p), TriangleKind::Segment(s)) => segment_point(s, p, tol),
    }
}

/// Lexicographic order on the nine vertex coordinates.
fn compare_vertices(a: &Triangle, b: &Triangle) -> Ordering {
    a.vertices()
        .iter()
        .flat_map(|p| p.coords)
        .zip(b.vertices().iter().flat_map(|p| p.coords))
        .map(|(x, y)| x.total_cmp(&y))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn canonical_order<'t>(a: &'t Triangle, b: &'t Triangle) -> (&'t Triangle, &'t Triangle) {
    if compare_vertices(a, b) == Ordering::Greater {
        (b, a)
    } else {
        (a, b)
    }
}

/// All three vertices strictly on one side of `plane`.
fn all_on_one_side(plane: &Plane, vertices: &[Point3; 3], tol: &Tolerance) -> bool {
    let d = vertices.map(|p| plane.signed_distance(&p));
    d.iter().all(|x| tol.is_positive(*x)) || d.iter().all(|x| tol.is_negative(*x))
}

fn proper_proper(a: &Triangle, pa: &Plane, b: &Triangle, pb: &Plane, tol: &Tolerance) -> bool {
    if all_on_one_side(pa, b.vertices(), tol) || all_on_one_side(pb, a.vertices(), tol) {
        return false;
    }

    match pa.relative_location(pb, &b.vertices()[0], tol) {
        Location::Coincident => coplanar(a, pa, b, pb, tol),
        Location::Parallel => false,
        Location::Intersecting => crossing_planes(a, pa, b, pb, tol),
        Location::Skew => unreachable!("planes are never skew"),
    }
}

fn coplanar(a: &Triangle, pa: &Plane, b: &Triangle, pb: &Plane, tol: &Tolerance) -> bool {
    let edges_cross = a
        .edges()
        .iter()
        .any(|ea| b.edges().iter().any(|eb| ea.intersects(eb, tol)));

    // No edge crossings: either disjoint or one triangle holds the other.
    // Only b's first vertex is known to lie on pa; a's is checked against pb.
    let (va, vb) = (&a.vertices()[0], &b.vertices()[0]);
    edges_cross
        || a.contains_coplanar_point(pa, vb, tol)
        || (tol.is_zero(pb.signed_distance(va)) && b.contains_coplanar_point(pb, va, tol))
}

fn crossing_planes(a: &Triangle, pa: &Plane, b: &Triangle, pb: &Plane, tol: &Tolerance) -> bool {
    let Some(line) = pa.intersection(pb, tol) else {
        return false;
    };

    let (Some(sa), Some(sb)) = (
        a.line_intersection(&line, tol),
        b.line_intersection(&line, tol),
    ) else {
        return false;
    };

    if sa.is_degenerate(tol) {
        return sb.contains_point(&sa.a, tol);
    }
    if sb.is_degenerate(tol) {
        return sa.contains_point(&sb.a, tol);
    }

    // 1-D overlap along the common line.
    sa.contains_point(&sb.a, tol)
        || sa.contains_point(&sb.b, tol)
        || sb.contains_point(&sa.a, tol)
        || sb.contains_point(&sa.b, tol)
}

fn proper_point(tri: &Triangle, plane: &Plane, p: &Point3, tol: &Tolerance) -> bool {
    tol.is_zero(plane.signed_distance(p)) && tri.contains_coplanar_point(plane, p, tol)
}

fn proper_segment(tri: &Triangle, plane: &Plane, seg: &LineSegment, tol: &Tolerance) -> bool {
    let da = plane.signed_distance(&seg.a);
    let db = plane.signed_distance(&seg.b);

    if tol.is_zero(da) && tol.is_zero(db) {
        return tri.edges().iter().any(|e| e.intersects(seg, tol))
            || tri.contains_coplanar_point(plane, &seg.a, tol)
            || tri.contains_coplanar_point(plane, &seg.b, tol);
    }

    match plane.crossing(&seg.a, &seg.b, tol) {
        Some(p) => tri.contains_coplanar_point(plane, &p, tol),
        None => false,
    }
}

fn segment_point(seg: &LineSegment, p: &Point3, tol: &Tolerance) -> bool {
    seg.line.contains_point(p, tol) && seg.contains_point(p, tol)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri(c: [f64; 9]) -> Triangle {
        Triangle::from_coords(c, &Tolerance::default())
    }

    #[test]
    fn canonical_order_is_stable() {
        let a = tri([0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        let b = tri([0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(compare_vertices(&a, &b), Ordering::Less);
        let (first, _) = canonical_order(&b, &a);
        assert_eq!(first, &a);
    }

    #[test]
    fn one_side_rejects_only_strict_sides() {
        let tol = Tolerance::default();
        let a = tri([0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        let TriangleKind::Proper(plane) = a.kind() else {
            panic!("expected a proper triangle");
        };
        let above = [
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 2.0),
            Point3::new(0.0, 1.0, 3.0),
        ];
        let touching = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 2.0),
            Point3::new(0.0, 1.0, 3.0),
        ];
        assert!(all_on_one_side(plane, &above, &tol));
        assert!(!all_on_one_side(plane, &touching, &tol));
    }
}
