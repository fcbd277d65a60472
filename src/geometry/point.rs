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

use std::ops::{Add, Div, Index, IndexMut, Sub};

use num_traits::Zero;

use crate::geometry::{
    tolerance::Tolerance,
    vector::{Vector3, VectorOps},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point3 {
    pub coords: [f64; 3],
}

pub trait PointOps: Sized {
    type Vector;

    fn as_vector(&self) -> Self::Vector;
    fn add_vector(&self, v: &Self::Vector) -> Self;
    fn vector_to(&self, other: &Self) -> Self::Vector;
    fn midpoint(&self, other: &Self) -> Self;
}

/// The default point has no coordinates at all and is not valid.
impl Default for Point3 {
    fn default() -> Self {
        Point3 {
            coords: [f64::NAN; 3],
        }
    }
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Point3 { coords: [x, y, z] }
    }

    pub fn x(&self) -> f64 {
        self.coords[0]
    }

    pub fn y(&self) -> f64 {
        self.coords[1]
    }

    pub fn z(&self) -> f64 {
        self.coords[2]
    }

    /// Valid iff no coordinate is NaN.
    pub fn is_valid(&self) -> bool {
        self.coords.iter().all(|c| !c.is_nan())
    }

    pub fn approx_eq(&self, other: &Point3, tol: &Tolerance) -> bool {
        (0..3).all(|i| tol.equal(self.coords[i], other.coords[i]))
    }

    pub fn distance_to(&self, other: &Point3) -> f64 {
        self.vector_to(other).norm()
    }

    /// Strictly inside the axis-aligned cube of half-width `half_width`.
    pub fn is_in_cube(&self, center: &Point3, half_width: f64) -> bool {
        (0..3).all(|i| (self.coords[i] - center.coords[i]).abs() < half_width)
    }
}

impl PointOps for Point3 {
    type Vector = Vector3;

    fn as_vector(&self) -> Vector3 {
        Vector3 {
            coords: self.coords,
        }
    }

    fn add_vector(&self, v: &Vector3) -> Self {
        Point3::new(self[0] + v[0], self[1] + v[1], self[2] + v[2])
    }

    fn vector_to(&self, other: &Self) -> Vector3 {
        Vector3::new(other[0] - self[0], other[1] - self[1], other[2] - self[2])
    }

    fn midpoint(&self, other: &Self) -> Self {
        (*self + *other) / 2.0
    }
}

impl Index<usize> for Point3 {
    type Output = f64;
    fn index(&self, i: usize) -> &f64 {
        &self.coords[i]
    }
}

impl IndexMut<usize> for Point3 {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.coords[i]
    }
}

// Coordinate-wise sum, used for centroids.
impl Add for Point3 {
    type Output = Point3;
    fn add(self, rhs: Point3) -> Point3 {
        Point3::new(self[0] + rhs[0], self[1] + rhs[1], self[2] + rhs[2])
    }
}

impl Sub for Point3 {
    type Output = Vector3;
    fn sub(self, rhs: Point3) -> Vector3 {
        rhs.vector_to(&self)
    }
}

impl Div<f64> for Point3 {
    type Output = Point3;
    fn div(self, rhs: f64) -> Point3 {
        Point3::new(self[0] / rhs, self[1] / rhs, self[2] / rhs)
    }
}

impl Zero for Point3 {
    fn zero() -> Self {
        Point3::new(0.0, 0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.coords.iter().all(|c| *c == 0.0)
    }
}

impl From<[f64; 3]> for Point3 {
    fn from(coords: [f64; 3]) -> Self {
        Point3 { coords }
    }
}

impl From<Point3> for [f64; 3] {
    fn from(p: Point3) -> Self {
        p.coords
    }
}
