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

//! Lightweight counters and timing for one solver run.
//!
//! All counters saturate instead of wrapping. The struct is handed to every
//! monitor callback and returned inside the solver outcome.

use std::time::Duration;
use waypoint_core::num::{constants::Zero, saturating::SaturatingAddVal};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BnbSolverStatistics<T> {
    /// Nodes popped from the stack.
    pub nodes_explored: u64,
    /// Reduce-and-branch steps, one per edge decision.
    pub expansions: u64,
    /// Exclude-branches pushed onto the stack.
    pub branches: u64,
    /// Edges included by committing them in place.
    pub edges_committed: u64,
    pub max_level: u64,
    pub max_stack_len: u64,
    pub prunings_infeasible: u64,
    pub prunings_bound: u64,
    /// Candidate tours recorded, including ones later filtered out.
    pub solutions_found: u64,
    pub root_lower_bound: T,
    pub time_total: Duration,
}

impl<T> Default for BnbSolverStatistics<T>
where
    T: Zero,
{
    fn default() -> Self {
        Self {
            nodes_explored: 0,
            expansions: 0,
            branches: 0,
            edges_committed: 0,
            max_level: 0,
            max_stack_len: 0,
            prunings_infeasible: 0,
            prunings_bound: 0,
            solutions_found: 0,
            root_lower_bound: T::ZERO,
            time_total: Duration::ZERO,
        }
    }
}

impl<T> BnbSolverStatistics<T> {
    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add_val(1);
    }

    #[inline]
    pub fn on_expansion(&mut self) {
        self.expansions = self.expansions.saturating_add_val(1);
    }

    #[inline]
    pub fn on_branch(&mut self, stack_len: usize) {
        self.branches = self.branches.saturating_add_val(1);
        self.max_stack_len = self.max_stack_len.max(stack_len as u64);
    }

    #[inline]
    pub fn on_edge_committed(&mut self, level: usize) {
        self.edges_committed = self.edges_committed.saturating_add_val(1);
        self.max_level = self.max_level.max(level as u64);
    }

    #[inline]
    pub fn on_pruning_infeasible(&mut self) {
        self.prunings_infeasible = self.prunings_infeasible.saturating_add_val(1);
    }

    #[inline]
    pub fn on_pruning_bound(&mut self) {
        self.prunings_bound = self.prunings_bound.saturating_add_val(1);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add_val(1);
    }

    #[inline]
    pub fn set_root_lower_bound(&mut self, bound: T) {
        self.root_lower_bound = bound;
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    /// All prunings, regardless of reason.
    #[inline]
    pub fn prunings(&self) -> u64 {
        self.prunings_bound.saturating_add_val(self.prunings_infeasible)
    }
}

impl<T> std::fmt::Display for BnbSolverStatistics<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Waypoint-BnB Solver Statistics:")?;
        writeln!(f, "  Nodes explored:        {}", self.nodes_explored)?;
        writeln!(f, "  Expansions:            {}", self.expansions)?;
        writeln!(f, "  Branches pushed:       {}", self.branches)?;
        writeln!(f, "  Edges committed:       {}", self.edges_committed)?;
        writeln!(f, "  Max level reached:     {}", self.max_level)?;
        writeln!(f, "  Max stack length:      {}", self.max_stack_len)?;
        writeln!(f, "  Prunings (infeasible): {}", self.prunings_infeasible)?;
        writeln!(f, "  Prunings (bound):      {}", self.prunings_bound)?;
        writeln!(f, "  Solutions found:       {}", self.solutions_found)?;
        writeln!(f, "  Root lower bound:      {}", self.root_lower_bound)?;
        writeln!(f, "  Total time:            {:.2?}", self.time_total)?;
        Ok(())
    }
}
