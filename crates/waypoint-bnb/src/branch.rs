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

//! Branching on a single edge.
//!
//! Every expansion splits the search on the chosen edge: the *include*
//! branch is the parent itself, committed in place, and the *exclude*
//! branch is a copy of the parent in which the edge is forbidden. This
//! module builds the latter.

use crate::state::StageState;
use waypoint_model::{cost::Cost, edge::Edge, num::CostNumeric};

/// A zero cell selected for branching, together with the penalty of not
/// using it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeChoice<T>
where
    T: CostNumeric,
{
    edge: Edge,
    exclusion_cost: Cost<T>,
}

impl<T> EdgeChoice<T>
where
    T: CostNumeric,
{
    #[inline]
    pub fn new(edge: Edge, exclusion_cost: Cost<T>) -> Self {
        Self {
            edge,
            exclusion_cost,
        }
    }

    #[inline]
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// The minimum extra cost any tour avoiding `edge` has to pay. `INF` if
    /// no tour can avoid it.
    #[inline]
    pub fn exclusion_cost(&self) -> Cost<T> {
        self.exclusion_cost
    }
}

impl<T> std::fmt::Display for EdgeChoice<T>
where
    T: CostNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EdgeChoice(edge: {}, exclusion_cost: {})", self.edge, self.exclusion_cost)
    }
}

/// Builds the sibling of `parent` in which `edge` is not used.
///
/// The sibling copies the parent's matrix, fixed edges and level, forbids
/// `edge`, and starts with `bound` as its lower bound (the parent's bound
/// plus the exclusion cost of `edge`).
pub fn make_excluded_branch<T>(parent: &StageState<T>, edge: Edge, bound: T) -> StageState<T>
where
    T: CostNumeric,
{
    let mut sibling = parent.clone();
    sibling.forbid_edge(edge);
    sibling.set_lower_bound(bound);
    sibling
}
