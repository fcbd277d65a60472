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

use crate::geometry::point::Point3;

/// An axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb {
    pub fn new(min: Point3, max: Point3) -> Self {
        Aabb { min, max }
    }

    /// Build the smallest AABB containing two points.
    pub fn from_points(a: &Point3, b: &Point3) -> Self {
        let mins = std::array::from_fn(|i| a[i].min(b[i]));
        let maxs = std::array::from_fn(|i| a[i].max(b[i]));
        Aabb::new(Point3::from(mins), Point3::from(maxs))
    }

    /// Smallest AABB containing every point, `None` for an empty input.
    pub fn enclosing<'p, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'p Point3>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut aabb = Aabb::from_points(first, first);
        for p in points {
            aabb.expand(p);
        }
        Some(aabb)
    }

    /// Axis-aligned cube given by its center and half-width.
    pub fn cube(center: &Point3, half_width: f64) -> Self {
        let mins = std::array::from_fn(|i| center[i] - half_width);
        let maxs = std::array::from_fn(|i| center[i] + half_width);
        Aabb::new(Point3::from(mins), Point3::from(maxs))
    }

    pub fn expand(&mut self, p: &Point3) {
        for i in 0..3 {
            self.min[i] = self.min[i].min(p[i]);
            self.max[i] = self.max[i].max(p[i]);
        }
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        let mins = std::array::from_fn(|i| self.min[i].min(other.min[i]));
        let maxs = std::array::from_fn(|i| self.max[i].max(other.max[i]));
        Aabb::new(Point3::from(mins), Point3::from(maxs))
    }

    /// Grow every face outwards by `margin`.
    pub fn grown(&self, margin: f64) -> Aabb {
        let mins = std::array::from_fn(|i| self.min[i] - margin);
        let maxs = std::array::from_fn(|i| self.max[i] + margin);
        Aabb::new(Point3::from(mins), Point3::from(maxs))
    }

    /// Does this AABB intersect `other`? Touching faces count.
    pub fn intersects(&self, other: &Aabb) -> bool {
        (0..3).all(|i| self.max[i] >= other.min[i] && other.max[i] >= self.min[i])
    }

    /// Center coordinate along axis `i`.
    pub fn center(&self, i: usize) -> f64 {
        (self.min[i] + self.max[i]) * 0.5
    }

    pub fn center_point(&self) -> Point3 {
        Point3::from(std::array::from_fn(|i| self.center(i)))
    }

    /// Length along axis `i`.
    pub fn extent(&self, i: usize) -> f64 {
        (self.max[i] - self.min[i]).abs()
    }

    /// Return the axis index with largest extent.
    pub fn longest_axis(&self) -> usize {
        let mut best_i = 0usize;
        let mut best = self.extent(0);
        for i in 1..3 {
            let e = self.extent(i);
            if e > best {
                best_i = i;
                best = e;
            }
        }
        best_i
    }

    /// Half-width of the smallest cube sharing this box's center and
    /// containing it.
    pub fn max_half_extent(&self) -> f64 {
        self.extent(self.longest_axis()) * 0.5
    }
}
