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

//! Find every triangle of a 3-D soup that touches another one.
//!
//! Triangles may be degenerate: collinear vertices act as a segment and
//! coincident vertices as a point. [`find_intersecting`] is the one-call
//! entry point; [`octree`] exposes the tree and enumerators it is built on.

pub mod error;
pub mod generate;
pub mod geometry;
pub mod io;
pub mod octree;

use std::collections::BTreeSet;

pub use error::ParseError;
pub use geometry::{Tolerance, Triangle};
pub use octree::{Octree, OctreeConfig};

/// Ids of all triangles intersecting at least one other, ascending.
pub fn find_intersecting(triangles: &[Triangle], config: &OctreeConfig) -> BTreeSet<usize> {
    let tree = Octree::build(triangles, *config);

    #[cfg(feature = "parallel")]
    {
        octree::enumerate::enumerate_par(&tree)
    }
    #[cfg(not(feature = "parallel"))]
    {
        octree::enumerate::enumerate(&tree)
    }
}
