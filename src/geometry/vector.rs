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

use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use num_traits::Zero;

use crate::geometry::tolerance::Tolerance;

pub trait VectorOps: Sized {
    fn dot(&self, other: &Self) -> f64;
    fn cross(&self, other: &Self) -> Self;
    fn norm(&self) -> f64;
    fn normalized(&self) -> Self;
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vector3 {
    pub coords: [f64; 3],
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { coords: [x, y, z] }
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

    /// `|self × other| ≈ 0`. A zero vector is collinear with everything.
    pub fn is_collinear(&self, other: &Vector3, tol: &Tolerance) -> bool {
        tol.is_zero(self.cross(other).norm())
    }

    /// Collinear and pointing the same way.
    pub fn is_co_dir(&self, other: &Vector3, tol: &Tolerance) -> bool {
        self.is_collinear(other, tol) && tol.is_positive(self.dot(other))
    }
}

impl VectorOps for Vector3 {
    fn dot(&self, other: &Vector3) -> f64 {
        self[0] * other[0] + self[1] * other[1] + self[2] * other[2]
    }

    fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3::new(
            self[1] * other[2] - self[2] * other[1],
            self[2] * other[0] - self[0] * other[2],
            self[0] * other[1] - self[1] * other[0],
        )
    }

    fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    fn normalized(&self) -> Vector3 {
        *self / self.norm()
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;
    fn index(&self, i: usize) -> &f64 {
        &self.coords[i]
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self[0] + rhs[0], self[1] + rhs[1], self[2] + rhs[2])
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self[0] - rhs[0], self[1] - rhs[1], self[2] - rhs[2])
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3::new(-self[0], -self[1], -self[2])
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, rhs: f64) -> Vector3 {
        Vector3::new(self[0] * rhs, self[1] * rhs, self[2] * rhs)
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;
    fn div(self, rhs: f64) -> Vector3 {
        Vector3::new(self[0] / rhs, self[1] / rhs, self[2] / rhs)
    }
}

impl Zero for Vector3 {
    fn zero() -> Self {
        Vector3::new(0.0, 0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.coords.iter().all(|c| *c == 0.0)
    }
}
