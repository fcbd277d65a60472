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

use std::io::{self, BufRead, Write};

use crate::{error::ParseError, geometry::triangle::Triangle};

/// Read the whitespace-separated triangle format: a count, then nine
/// coordinates per triangle. Anything after the last triangle is ignored.
pub fn read_triangles<R: BufRead>(mut reader: R) -> Result<Vec<Triangle>, ParseError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_triangles(&input)
}

pub fn parse_triangles(input: &str) -> Result<Vec<Triangle>, ParseError> {
    let mut tokens = input.split_whitespace();

    let count = tokens.next().ok_or(ParseError::MissingCount)?;
    let count: usize = count
        .parse()
        .map_err(|_| ParseError::InvalidCount(count.to_string()))?;

    // A bogus count must not reserve gigabytes up front.
    let mut triangles = Vec::with_capacity(count.min(1 << 16));
    for triangle in 0..count {
        let mut coords = [0.0f64; 9];
        for (coordinate, slot) in coords.iter_mut().enumerate() {
            let token = tokens.next().ok_or(ParseError::MissingCoordinate {
                triangle,
                coordinate,
            })?;
            let value: f64 = token.parse().map_err(|_| ParseError::InvalidCoordinate {
                triangle,
                coordinate,
                token: token.to_string(),
            })?;
            if value.is_nan() {
                return Err(ParseError::NanCoordinate {
                    triangle,
                    coordinate,
                });
            }
            *slot = value;
        }
        triangles.push(Triangle::from_coords(coords, &Default::default()));
    }

    log::debug!("parsed {} triangles", triangles.len());
    Ok(triangles)
}

/// Write triangles in the format [`read_triangles`] accepts, one triangle
/// per line.
pub fn write_triangles<W: Write>(out: &mut W, triangles: &[Triangle]) -> io::Result<()> {
    writeln!(out, "{}", triangles.len())?;
    for tri in triangles {
        let [a, b, c] = tri.vertices();
        writeln!(
            out,
            "{:?} {:?} {:?} {:?} {:?} {:?} {:?} {:?} {:?}",
            a.x(),
            a.y(),
            a.z(),
            b.x(),
            b.y(),
            b.z(),
            c.x(),
            c.y(),
            c.z()
        )?;
    }
    out.flush()
}

/// One id per line, in iteration order.
pub fn write_ids<W, I>(out: &mut W, ids: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = usize>,
{
    for id in ids {
        writeln!(out, "{id}")?;
    }
    out.flush()
}
