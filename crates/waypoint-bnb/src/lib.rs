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

//! Waypoint-BnB: exact travelling-salesman tours by branch-and-bound
//!
//! Solves directed (asymmetric) TSP instances with Little's method: every
//! search node reduces its cost matrix until each open row and column holds
//! a zero, the reduction total being an admissible lower bound, and then
//! branches on the zero cell whose exclusion is most expensive.
//!
//! Core flow
//! - Provide a `waypoint_model::model::Model<T>` or raw rows to `bnb::solve_tsp`.
//! - Run `bnb::BnbSolver`, optionally with a `monitor::TreeSearchMonitor`.
//! - Read every tour of minimum cost from the `result::BnbSolverOutcome`.
//!
//! Design highlights
//! - Depth-first: the include branch is followed in place, exclude branches
//!   wait on an explicit stack. No recursion, no shared mutable nodes.
//! - Ties are kept: nodes whose bound equals the incumbent are explored, so
//!   all optimal tours are found.
//! - Committing an edge forbids the edge that would close its partial path,
//!   so sub-tours never reach a leaf.
//!
//! Module map
//! - `bnb`: the solver engine and session orchestration.
//! - `state`: per-node matrix, bound and edge bookkeeping.
//! - `branch`: edge choices and the exclusion branch factory.
//! - `incumbent` / `filter`: candidate collection and the final filter.
//! - `monitor`: tree-search monitors (log, composite, no-op).
//! - `result`: solver outcomes with termination reasons.
//! - `stats`: lightweight counters/timing.
//! - `error`: input and invariant errors.

pub mod bnb;
pub mod branch;
pub mod error;
pub mod filter;
pub mod incumbent;
pub mod monitor;
pub mod result;
mod stack;
pub mod state;
pub mod stats;
