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

use std::io;

/// Errors raised while reading the triangle text format.
///
/// Triangle and coordinate indices are 0-based; a coordinate index runs
/// over the nine numbers of one triangle.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("missing triangle count")]
    MissingCount,
    #[error("invalid triangle count `{0}`")]
    InvalidCount(String),
    #[error("triangle {triangle}: missing coordinate {coordinate}")]
    MissingCoordinate { triangle: usize, coordinate: usize },
    #[error("triangle {triangle}: invalid coordinate {coordinate} `{token}`")]
    InvalidCoordinate {
        triangle: usize,
        coordinate: usize,
        token: String,
    },
    #[error("triangle {triangle}: coordinate {coordinate} is NaN")]
    NanCoordinate { triangle: usize, coordinate: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
}
