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

use crate::{
    branch::EdgeChoice,
    monitor::tree_search_monitor::{PruneReason, TreeSearchMonitor},
    state::StageState,
    stats::BnbSolverStatistics,
};
use std::marker::PhantomData;
use waypoint_model::{edge::Edge, model::Model, num::CostNumeric, solution::TourSolution};

/// A monitor that ignores every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoOperationMonitor<T> {
    _phantom: PhantomData<T>,
}

impl<T> Default for NoOperationMonitor<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NoOperationMonitor<T> {
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T> TreeSearchMonitor<T> for NoOperationMonitor<T>
where
    T: CostNumeric,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }

    #[inline(always)]
    fn on_enter_search(&mut self, _model: &Model<T>, _statistics: &BnbSolverStatistics<T>) {}

    #[inline(always)]
    fn on_exit_search(&mut self, _statistics: &BnbSolverStatistics<T>) {}

    #[inline(always)]
    fn on_node_popped(&mut self, _state: &StageState<T>, _statistics: &BnbSolverStatistics<T>) {}

    #[inline(always)]
    fn on_lower_bound_computed(
        &mut self,
        _state: &StageState<T>,
        _reduction: T,
        _statistics: &BnbSolverStatistics<T>,
    ) {
    }

    #[inline(always)]
    fn on_branch(
        &mut self,
        _sibling: &StageState<T>,
        _choice: &EdgeChoice<T>,
        _statistics: &BnbSolverStatistics<T>,
    ) {
    }

    #[inline(always)]
    fn on_commit(
        &mut self,
        _state: &StageState<T>,
        _edge: Edge,
        _statistics: &BnbSolverStatistics<T>,
    ) {
    }

    #[inline(always)]
    fn on_prune(
        &mut self,
        _state: &StageState<T>,
        _reason: PruneReason,
        _statistics: &BnbSolverStatistics<T>,
    ) {
    }

    #[inline(always)]
    fn on_solution_found(
        &mut self,
        _solution: &TourSolution<T>,
        _statistics: &BnbSolverStatistics<T>,
    ) {
    }
}
