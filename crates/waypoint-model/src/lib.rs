// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Waypoint Model
//!
//! **Problem data for the Waypoint travelling-salesman solver.**
//!
//! This crate describes *what* is solved: a directed, possibly asymmetric
//! matrix of edge costs in which some edges may be forbidden. It is the
//! exchange layer between user input and the search engine (`waypoint_bnb`).
//!
//! ## Architecture
//!
//! * **`cost`**: `Cost<T>`, a finite cost or the forbidden marker `INF`,
//!   encoded in a single word with saturating arithmetic.
//! * **`matrix`**: `CostMatrix<T>` with the row/column reduction and
//!   exclusion-cost arithmetic the branch-and-bound search relies on.
//! * **`model`**: the validated `Model` and its `ModelBuilder`.
//! * **`solution`**: `TourSolution`, a closed tour with its cost.
//! * **`index`** / **`edge`**: typed city indices and directed edges.
//! * **`error`**: `ModelError`, raised for malformed input.
//!
//! ## Design Philosophy
//!
//! 1. **Type Safety**: cities are `CityIndex`, not bare `usize`.
//! 2. **Memory Layout**: matrices are flat row-major vectors, cheap to copy
//!    per search node.
//! 3. **Fail-Fast**: input is validated once at construction; the solver
//!    never sees a malformed matrix.

pub mod cost;
pub mod edge;
pub mod error;
pub mod index;
pub mod matrix;
pub mod model;
pub mod num;
pub mod solution;
