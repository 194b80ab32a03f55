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

//! Progress reporting through the `log` facade.
//!
//! `LogTreeSearchMonitor` prints a small progress table while the search
//! runs. Reading the clock on every node is too expensive, so the clock is
//! only consulted when `nodes_explored & clock_check_mask == 0`.

use crate::{
    branch::EdgeChoice,
    monitor::tree_search_monitor::{PruneReason, TreeSearchMonitor},
    state::StageState,
    stats::BnbSolverStatistics,
};
use std::time::{Duration, Instant};
use waypoint_model::{edge::Edge, model::Model, num::CostNumeric, solution::TourSolution};

const TABLE_WIDTH: usize = 86;

#[derive(Debug, Clone)]
pub struct LogTreeSearchMonitor<T> {
    level: ::log::Level,
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    best_cost: Option<T>,
}

impl<T> LogTreeSearchMonitor<T>
where
    T: CostNumeric,
{
    pub fn new(level: ::log::Level, log_interval: Duration, clock_check_mask: u64) -> Self {
        let now = Instant::now();
        Self {
            level,
            start_time: now,
            last_log_time: now,
            log_interval,
            clock_check_mask,
            best_cost: None,
        }
    }

    #[inline]
    pub fn level(&self) -> ::log::Level {
        self.level
    }

    #[inline]
    pub fn log_interval(&self) -> Duration {
        self.log_interval
    }

    #[inline]
    pub fn clock_check_mask(&self) -> u64 {
        self.clock_check_mask
    }

    /// The cheapest tour cost reported since the search started.
    #[inline]
    pub fn best_cost(&self) -> Option<T> {
        self.best_cost
    }

    fn log_header(&self) {
        ::log::log!(
            self.level,
            "{:<9} | {:<12} | {:<6} | {:<12} | {:<12} | {:<8} | {:<10}",
            "Elapsed",
            "Nodes",
            "Level",
            "Best Tour",
            "Lower Bound",
            "Stack",
            "Pruned"
        );
        ::log::log!(self.level, "{}", "-".repeat(TABLE_WIDTH));
    }

    fn log_line(&mut self, state: &StageState<T>, stats: &BnbSolverStatistics<T>) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();

        let best = match self.best_cost {
            Some(cost) => cost.to_string(),
            None => "INF".to_string(),
        };

        ::log::log!(
            self.level,
            "{:<9} | {:<12} | {:<6} | {:<12} | {:<12} | {:<8} | {:<10}",
            format!("{:.1}s", elapsed),
            stats.nodes_explored,
            state.level(),
            best,
            state.lower_bound(),
            stats.max_stack_len,
            stats.prunings()
        );

        self.last_log_time = now;
    }
}

impl<T> Default for LogTreeSearchMonitor<T>
where
    T: CostNumeric,
{
    fn default() -> Self {
        Self::new(::log::Level::Info, Duration::from_secs(1), 4095)
    }
}

impl<T> std::fmt::Display for LogTreeSearchMonitor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogTreeSearchMonitor(level: {}, log_interval: {:?}, clock_check_mask: {})",
            self.level, self.log_interval, self.clock_check_mask
        )
    }
}

impl<T> TreeSearchMonitor<T> for LogTreeSearchMonitor<T>
where
    T: CostNumeric,
{
    fn name(&self) -> &str {
        "LogTreeSearchMonitor"
    }

    fn on_enter_search(&mut self, model: &Model<T>, _statistics: &BnbSolverStatistics<T>) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.best_cost = None;

        ::log::log!(
            self.level,
            "Solving a tour over {} cities ({} candidate tours)",
            model.num_cities(),
            model.complexity()
        );
        self.log_header();
    }

    fn on_exit_search(&mut self, statistics: &BnbSolverStatistics<T>) {
        ::log::log!(self.level, "{}", "-".repeat(TABLE_WIDTH));
        match self.best_cost {
            Some(cost) => ::log::log!(
                self.level,
                "Search finished after {} nodes, best tour costs {}",
                statistics.nodes_explored,
                cost
            ),
            None => ::log::log!(
                self.level,
                "Search finished after {} nodes, no tour exists",
                statistics.nodes_explored
            ),
        }
    }

    fn on_node_popped(&mut self, state: &StageState<T>, statistics: &BnbSolverStatistics<T>) {
        if (statistics.nodes_explored & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(state, statistics);
        }
    }

    fn on_lower_bound_computed(
        &mut self,
        state: &StageState<T>,
        reduction: T,
        _statistics: &BnbSolverStatistics<T>,
    ) {
        ::log::trace!(
            "level {}: reduced by {}, bound {}",
            state.level(),
            reduction,
            state.lower_bound()
        );
    }

    fn on_branch(
        &mut self,
        sibling: &StageState<T>,
        choice: &EdgeChoice<T>,
        _statistics: &BnbSolverStatistics<T>,
    ) {
        ::log::trace!("{}, exclusion branch bound {}", choice, sibling.lower_bound());
    }

    fn on_commit(&mut self, state: &StageState<T>, edge: Edge, _statistics: &BnbSolverStatistics<T>) {
        ::log::trace!("level {}: committed {}", state.level(), edge);
    }

    fn on_prune(
        &mut self,
        state: &StageState<T>,
        reason: PruneReason,
        _statistics: &BnbSolverStatistics<T>,
    ) {
        ::log::trace!(
            "level {}: pruned ({}), bound {}",
            state.level(),
            reason,
            state.lower_bound()
        );
    }

    fn on_solution_found(
        &mut self,
        solution: &TourSolution<T>,
        statistics: &BnbSolverStatistics<T>,
    ) {
        let cost = solution.cost();
        if self.best_cost.is_none_or(|best| cost < best) {
            self.best_cost = Some(cost);
            ::log::log!(
                self.level,
                "New best tour of cost {} after {} nodes",
                cost,
                statistics.nodes_explored
            );
        } else {
            ::log::debug!("Tied tour of cost {} found", cost);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_model::index::CityIndex;

    type I = i64;

    fn tour(cost: I) -> TourSolution<I> {
        TourSolution::new(cost, vec![CityIndex::new(0), CityIndex::new(1), CityIndex::new(2)])
    }

    #[test]
    fn test_default_configuration() {
        let monitor = LogTreeSearchMonitor::<I>::default();
        assert_eq!(monitor.level(), ::log::Level::Info);
        assert_eq!(monitor.log_interval(), Duration::from_secs(1));
        assert_eq!(monitor.clock_check_mask(), 4095);
        assert_eq!(monitor.best_cost(), None);
        assert_eq!(monitor.name(), "LogTreeSearchMonitor");
    }

    #[test]
    fn test_display() {
        let monitor = LogTreeSearchMonitor::<I>::new(
            ::log::Level::Debug,
            Duration::from_millis(500),
            255,
        );
        assert_eq!(
            monitor.to_string(),
            "LogTreeSearchMonitor(level: DEBUG, log_interval: 500ms, clock_check_mask: 255)"
        );
    }

    #[test]
    fn test_tracks_best_cost() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut monitor = LogTreeSearchMonitor::<I>::default();
        let stats = BnbSolverStatistics::default();
        monitor.on_solution_found(&tour(12), &stats);
        monitor.on_solution_found(&tour(10), &stats);
        monitor.on_solution_found(&tour(11), &stats);
        assert_eq!(monitor.best_cost(), Some(10));
    }

    #[test]
    fn test_enter_search_resets_best_cost() {
        let _ = env_logger::builder().is_test(true).try_init();

        let model = Model::try_from_rows(vec![
            vec![None, Some(1), Some(2)],
            vec![Some(3), None, Some(4)],
            vec![Some(5), Some(6), None],
        ])
        .unwrap();
        let stats = BnbSolverStatistics::default();

        let mut monitor = LogTreeSearchMonitor::<I>::default();
        monitor.on_solution_found(&tour(10), &stats);
        monitor.on_enter_search(&model, &stats);
        assert_eq!(monitor.best_cost(), None);
        monitor.on_exit_search(&stats);
    }
}
