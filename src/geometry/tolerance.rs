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

use num_traits::Float;

/// Canonical absolute tolerance for every comparison in the kernel.
pub const DEFAULT_EPS: f64 = 1e-7;

/// `|a - b| < eps`: the only floating comparison primitive.
#[inline(always)]
pub fn equal<F: Float>(a: F, b: F, eps: F) -> bool {
    (a - b).abs() < eps
}

/// Tolerance threaded through every geometric predicate.
///
/// Plane coefficients and line directions are normalized before they are
/// compared, so in most predicates `eps` reads as a distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    eps: f64,
}

impl Tolerance {
    pub const fn new(eps: f64) -> Self {
        Tolerance { eps }
    }

    pub fn eps(&self) -> f64 {
        self.eps
    }

    #[inline(always)]
    pub fn equal(&self, a: f64, b: f64) -> bool {
        equal(a, b, self.eps)
    }

    #[inline(always)]
    pub fn is_zero(&self, x: f64) -> bool {
        self.equal(x, 0.0)
    }

    /// Strictly positive, i.e. positive and not `is_zero`.
    #[inline(always)]
    pub fn is_positive(&self, x: f64) -> bool {
        x >= self.eps
    }

    /// Strictly negative, i.e. negative and not `is_zero`.
    #[inline(always)]
    pub fn is_negative(&self, x: f64) -> bool {
        x <= -self.eps
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::new(DEFAULT_EPS)
    }
}
