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

use std::{
    env,
    io::{self, BufWriter},
    process::ExitCode,
};

use tritouch::{OctreeConfig, ParseError, find_intersecting, io::read_triangles, io::write_ids};

/// Overrides the octree node capacity.
const NODE_CAPACITY_VAR: &str = "TRITOUCH_NODE_CAPACITY";

fn config_from_env() -> OctreeConfig {
    let config = OctreeConfig::default();
    match env::var(NODE_CAPACITY_VAR).ok().map(|v| v.trim().parse::<usize>()) {
        Some(Ok(capacity)) if capacity > 0 => config.with_node_capacity(capacity),
        Some(_) => {
            eprintln!("warning: ignoring invalid {NODE_CAPACITY_VAR}, using {}", config.node_capacity);
            config
        }
        None => config,
    }
}

fn run() -> Result<(), ParseError> {
    let triangles = read_triangles(io::stdin().lock())?;
    let found = find_intersecting(&triangles, &config_from_env());

    let mut out = BufWriter::new(io::stdout().lock());
    write_ids(&mut out, found)?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
