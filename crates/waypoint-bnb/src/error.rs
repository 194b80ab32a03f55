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

//! Error types of the branch-and-bound solver.
//!
//! Two things can go wrong: the input is malformed, which is reported before
//! the search starts, or the search reaches a state that a correct
//! implementation never produces. The latter is never swallowed.

use waypoint_model::error::ModelError;

/// A structural defect detected while turning a leaf into a tour.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    /// Tour reconstruction was attempted on a node that is not a leaf.
    #[error("tour reconstruction at level {level}, expected level {expected}")]
    NotALeaf { level: usize, expected: usize },
    /// The residual matrix of a leaf does not hold exactly two usable edges.
    #[error("residual matrix holds {found} usable edges, expected 2")]
    ResidualEdgeCount { found: usize },
    /// Two edges leave the same city.
    #[error("city {city} has more than one successor")]
    DuplicateSuccessor { city: usize },
    /// No edge leaves a city reached by the tour.
    #[error("city {city} has no successor")]
    MissingSuccessor { city: usize },
    /// Following successors closes a cycle that misses some cities.
    #[error("sub-cycle of length {length} returns to city {city}, expected a tour over {num_cities} cities")]
    SubCycle {
        city: usize,
        length: usize,
        num_cities: usize,
    },
    /// The reconstructed tour uses an edge the input forbids.
    #[error("tour uses the forbidden edge ({from}, {to})")]
    ForbiddenEdge { from: usize, to: usize },
}

/// Errors returned by the solver entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BnbError {
    /// The input matrix was rejected before the search started.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ModelError),
    /// The search produced an inconsistent state. This indicates a defect
    /// in the solver, not in the input.
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(#[from] InvariantViolation),
}
