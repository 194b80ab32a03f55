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

//! Incumbent bookkeeping for one solve.
//!
//! `Incumbent<T>` is the search controller threaded through the driver: it
//! holds the best bound reached at any leaf so far and every candidate tour
//! recorded along the way. It lives exactly as long as one `solve` call and
//! is consumed when the candidates are filtered.
//!
//! Notes
//! - A node is *dominated* when its bound is strictly greater than the best
//!   bound. Equal bounds are kept, so tied optima all reach the candidate list.
//! - Candidates recorded before a better leaf was found stay in the list;
//!   `filter::filter_solutions` removes them at the end.

use waypoint_model::{num::CostNumeric, solution::TourSolution};

/// A tour recorded at a leaf, with the bound the leaf had.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate<T>
where
    T: CostNumeric,
{
    bound: T,
    solution: TourSolution<T>,
}

impl<T> Candidate<T>
where
    T: CostNumeric,
{
    #[inline]
    pub fn new(bound: T, solution: TourSolution<T>) -> Self {
        Self { bound, solution }
    }

    #[inline]
    pub fn bound(&self) -> T {
        self.bound
    }

    #[inline]
    pub fn solution(&self) -> &TourSolution<T> {
        &self.solution
    }

    #[inline]
    pub fn into_solution(self) -> TourSolution<T> {
        self.solution
    }
}

#[derive(Clone, Debug)]
pub struct Incumbent<T>
where
    T: CostNumeric,
{
    best_bound: Option<T>,
    candidates: Vec<Candidate<T>>,
}

impl<T> Default for Incumbent<T>
where
    T: CostNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Incumbent<T>
where
    T: CostNumeric,
{
    /// An incumbent without any solution; nothing is dominated yet.
    #[inline]
    pub fn new() -> Self {
        Self {
            best_bound: None,
            candidates: Vec::new(),
        }
    }

    /// The best bound recorded so far, `None` before the first leaf.
    #[inline]
    pub fn best_bound(&self) -> Option<T> {
        self.best_bound
    }

    /// Returns `true` if a node with `bound` cannot lead to a tour at least
    /// as good as the incumbent.
    #[inline]
    pub fn is_dominated(&self, bound: T) -> bool {
        self.best_bound.is_some_and(|best| bound > best)
    }

    /// Records a candidate and moves the best bound to `bound`.
    pub fn record(&mut self, bound: T, solution: TourSolution<T>) {
        debug_assert!(
            !self.is_dominated(bound),
            "called `Incumbent::record` with a dominated bound {} (best is {:?})",
            bound,
            self.best_bound
        );

        self.best_bound = Some(match self.best_bound {
            Some(best) => best.min(bound),
            None => bound,
        });
        self.candidates.push(Candidate::new(bound, solution));
    }

    #[inline]
    pub fn num_candidates(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    pub fn candidates(&self) -> &[Candidate<T>] {
        &self.candidates
    }

    #[inline]
    pub fn into_candidates(self) -> Vec<Candidate<T>> {
        self.candidates
    }
}
