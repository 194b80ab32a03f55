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

//! Tree search monitoring interface
//!
//! Declares the `TreeSearchMonitor` trait and `PruneReason` for observing the
//! branch-and-bound driver.
//!
//! Lifecycle
//! - enter → pop → {lower bound → branch → commit}* → {prune | solution} → ... → exit
//! - `BnbSolverStatistics` is provided to every callback for telemetry.
//!
//! Design notes
//! - Methods take `&mut self`; monitors are assumed single-threaded.
//! - The sibling passed to `on_branch` is pushed right after the call; the
//!   state passed to `on_commit` already contains the committed edge.

use crate::{branch::EdgeChoice, state::StageState, stats::BnbSolverStatistics};
use waypoint_model::{edge::Edge, model::Model, num::CostNumeric, solution::TourSolution};

/// Reasons for pruning a search state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PruneReason {
    /// The subtree contains no tour.
    Infeasible,
    /// The subtree cannot contain a tour cheaper than the incumbent.
    BoundDominated,
}

impl std::fmt::Display for PruneReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PruneReason::Infeasible => write!(f, "Infeasible"),
            PruneReason::BoundDominated => write!(f, "BoundDominated"),
        }
    }
}

/// Trait for observing the search process of the solver.
pub trait TreeSearchMonitor<T>
where
    T: CostNumeric,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called when the search starts.
    fn on_enter_search(&mut self, model: &Model<T>, statistics: &BnbSolverStatistics<T>);
    /// Called when the search ends.
    fn on_exit_search(&mut self, statistics: &BnbSolverStatistics<T>);
    /// Called when a node is taken from the stack.
    fn on_node_popped(&mut self, state: &StageState<T>, statistics: &BnbSolverStatistics<T>);
    /// Called after a node's matrix was reduced and its bound tightened.
    /// `reduction` is the amount subtracted by this reduction step.
    fn on_lower_bound_computed(
        &mut self,
        state: &StageState<T>,
        reduction: T,
        statistics: &BnbSolverStatistics<T>,
    );
    /// Called when the exclusion sibling of `choice` is pushed onto the stack.
    fn on_branch(
        &mut self,
        sibling: &StageState<T>,
        choice: &EdgeChoice<T>,
        statistics: &BnbSolverStatistics<T>,
    );
    /// Called after `edge` was included in the current node.
    fn on_commit(&mut self, state: &StageState<T>, edge: Edge, statistics: &BnbSolverStatistics<T>);
    /// Called when a search state is pruned.
    fn on_prune(
        &mut self,
        state: &StageState<T>,
        reason: PruneReason,
        statistics: &BnbSolverStatistics<T>,
    );
    /// Called when a candidate tour is recorded.
    fn on_solution_found(
        &mut self,
        solution: &TourSolution<T>,
        statistics: &BnbSolverStatistics<T>,
    );
}

impl<T> std::fmt::Debug for dyn TreeSearchMonitor<T>
where
    T: CostNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSearchMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn TreeSearchMonitor<T>
where
    T: CostNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSearchMonitor({})", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_reason_display() {
        assert_eq!(PruneReason::Infeasible.to_string(), "Infeasible");
        assert_eq!(PruneReason::BoundDominated.to_string(), "BoundDominated");
    }
}
