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

//! Branch-and-bound solver for the asymmetric travelling salesman problem.
//!
//! The solver explores a binary tree over edge decisions. Every node owns a
//! reduced copy of the cost matrix; expanding it picks the zero cell whose
//! exclusion costs the most, pushes the branch that forbids the cell and
//! continues in place with the branch that includes it. The search is
//! depth-first, so the first dive from the root reaches a leaf after
//! `num_cities - 2` commits and yields an incumbent early.
//!
//! Nodes whose bound is strictly worse than the incumbent are pruned, nodes
//! whose bound ties it are kept. Every tour of minimum cost is therefore
//! reported, in the order the search finds them. A search session object
//! encapsulates per-run state, statistics, and timing, while the solver
//! itself only keeps the node stack so repeated solves reuse its allocation.

use crate::{
    branch::{EdgeChoice, make_excluded_branch},
    error::{BnbError, InvariantViolation},
    filter::filter_solutions,
    incumbent::Incumbent,
    monitor::{
        no_op::NoOperationMonitor,
        tree_search_monitor::{PruneReason, TreeSearchMonitor},
    },
    result::BnbSolverOutcome,
    stack::NodeStack,
    state::StageState,
    stats::BnbSolverStatistics,
};
use waypoint_model::{
    index::CityIndex, model::Model, num::CostNumeric, solution::TourSolution,
};

/// A depth-first branch-and-bound solver over reduced cost matrices.
///
/// This is just the execution engine; bounding, branching and tour
/// reconstruction live on `StageState`.
#[derive(Clone, Debug)]
pub struct BnbSolver<T>
where
    T: CostNumeric,
{
    stack: NodeStack<T>,
}

impl<T> Default for BnbSolver<T>
where
    T: CostNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BnbSolver<T>
where
    T: CostNumeric,
{
    /// Create a new solver instance.
    #[inline]
    pub fn new() -> Self {
        Self {
            stack: NodeStack::new(),
        }
    }

    /// Create a new solver instance with storage preallocated for
    /// instances of `num_cities` cities.
    ///
    /// # Note
    ///
    /// The solver grows its storage on demand. Preallocating only moves the
    /// cost of the first allocations to construction time.
    #[inline]
    pub fn preallocated(num_cities: usize) -> Self {
        Self {
            stack: NodeStack::preallocated(num_cities),
        }
    }

    /// Solves `model` without observing the search.
    ///
    /// # Errors
    ///
    /// Returns `BnbError::InternalInvariantViolation` if the search reaches an
    /// inconsistent state.
    #[inline]
    pub fn solve(&mut self, model: &Model<T>) -> Result<BnbSolverOutcome<T>, BnbError> {
        self.solve_with_monitor(model, NoOperationMonitor::new())
    }

    /// Solves `model`, reporting every search event to `monitor`.
    ///
    /// # Errors
    ///
    /// Returns `BnbError::InternalInvariantViolation` if the search reaches an
    /// inconsistent state.
    pub fn solve_with_monitor<S>(
        &mut self,
        model: &Model<T>,
        mut monitor: S,
    ) -> Result<BnbSolverOutcome<T>, BnbError>
    where
        S: TreeSearchMonitor<T>,
    {
        let session = BnbSolverSearchSession::new(self, model, &mut monitor);
        session.run()
    }
}

/// Solves the instance given by `rows` and returns every tour of minimum
/// cost, starting at city 0, in the order the search found them.
///
/// `None` marks a forbidden edge; the diagonal must be `None`. An empty
/// result means that no tour exists.
///
/// # Errors
///
/// Returns `BnbError::InvalidInput` if the matrix is empty, not square,
/// smaller than 3×3, holds a negative cost or allows a self-loop.
///
/// # Examples
///
/// ```rust
/// # use waypoint_bnb::bnb::solve_tsp;
/// let tours = solve_tsp(vec![
///     vec![None, Some(1), Some(2)],
///     vec![Some(3), None, Some(4)],
///     vec![Some(5), Some(6), None],
/// ])
/// .unwrap();
/// assert_eq!(tours.len(), 1);
/// assert_eq!(tours[0].cost(), 10);
/// assert_eq!(tours[0].cities(), vec![0, 1, 2]);
/// ```
pub fn solve_tsp<T>(rows: Vec<Vec<Option<T>>>) -> Result<Vec<TourSolution<T>>, BnbError>
where
    T: CostNumeric,
{
    let model = Model::try_from_rows(rows)?;
    let mut solver = BnbSolver::preallocated(model.num_cities());
    Ok(solver.solve(&model)?.into_solutions())
}

/// A search session for the solver.
/// This struct encapsulates the state and logic
/// of a single search run.
struct BnbSolverSearchSession<'a, T, S>
where
    T: CostNumeric,
{
    solver: &'a mut BnbSolver<T>,
    model: &'a Model<T>,
    monitor: &'a mut S,
    incumbent: Incumbent<T>,
    stats: BnbSolverStatistics<T>,
    start_time: std::time::Instant,
}

impl<'a, T, S> std::fmt::Debug for BnbSolverSearchSession<'a, T, S>
where
    T: CostNumeric,
    S: TreeSearchMonitor<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSession")
            .field("model", &self.model)
            .field("monitor", &self.monitor.name())
            .field("pending_nodes", &self.solver.stack.len())
            .field("incumbent", &self.incumbent)
            .field("stats", &self.stats)
            .finish()
    }
}

impl<'a, T, S> std::fmt::Display for BnbSolverSearchSession<'a, T, S>
where
    T: CostNumeric,
    S: TreeSearchMonitor<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let best = match self.incumbent.best_bound() {
            Some(bound) => bound.to_string(),
            None => "INF".to_string(),
        };
        write!(
            f,
            "SearchSession(best_bound: {}, candidates: {}, pending_nodes: {}, stats: {})",
            best,
            self.incumbent.num_candidates(),
            self.solver.stack.len(),
            self.stats
        )
    }
}

impl<'a, T, S> BnbSolverSearchSession<'a, T, S>
where
    T: CostNumeric,
    S: TreeSearchMonitor<T>,
{
    /// Create a new search session.
    #[inline]
    fn new(solver: &'a mut BnbSolver<T>, model: &'a Model<T>, monitor: &'a mut S) -> Self {
        Self {
            solver,
            model,
            monitor,
            incumbent: Incumbent::new(),
            stats: BnbSolverStatistics::default(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Run the search session until the stack is exhausted.
    fn run(mut self) -> Result<BnbSolverOutcome<T>, BnbError> {
        self.monitor.on_enter_search(self.model, &self.stats);

        let num_cities = self.model.num_cities();
        self.solver.stack.reset();
        self.solver.stack.ensure_capacity(num_cities);
        self.solver
            .stack
            .push(StageState::root(self.model.matrix().clone()));

        while let Some(node) = self.solver.stack.pop() {
            self.stats.on_node_explored();
            self.monitor.on_node_popped(&node, &self.stats);

            if let Err(err) = self.explore(node) {
                // Leave the solver reusable even after a failed run.
                self.solver.stack.reset();
                return Err(err);
            }
        }

        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);
        Ok(self.finalize_result())
    }

    /// Dives from `node` by committing edges in place until it reaches a
    /// leaf or gets pruned. Every decision on the way leaves its exclusion
    /// branch on the stack.
    fn explore(&mut self, mut node: StageState<T>) -> Result<(), BnbError> {
        loop {
            if self.incumbent.is_dominated(node.lower_bound()) {
                self.prune(&node, PruneReason::BoundDominated);
                return Ok(());
            }
            if node.is_leaf() {
                return self.complete_leaf(node);
            }

            let reduction = node.reduce_cost_matrix();
            if node.level() == 0 {
                node.reset_lower_bound();
            }
            node.tighten_lower_bound();

            self.stats.on_expansion();
            if self.stats.expansions == 1 {
                self.stats.set_root_lower_bound(node.lower_bound());
            }
            self.monitor
                .on_lower_bound_computed(&node, reduction, &self.stats);

            if node.has_blocked_city() {
                self.prune(&node, PruneReason::Infeasible);
                return Ok(());
            }
            if self.incumbent.is_dominated(node.lower_bound()) {
                self.prune(&node, PruneReason::BoundDominated);
                return Ok(());
            }

            let Some(choice) = node.choose_next_edge() else {
                self.prune(&node, PruneReason::Infeasible);
                return Ok(());
            };

            self.push_excluded_branch(&node, &choice);

            let edge = choice.edge();
            node.commit_edge(edge);
            self.stats.on_edge_committed(node.level());
            self.monitor.on_commit(&node, edge, &self.stats);
        }
    }

    /// Pushes the branch that forbids the chosen edge, unless forbidding it
    /// leaves a city without any way in or out.
    #[inline]
    fn push_excluded_branch(&mut self, node: &StageState<T>, choice: &EdgeChoice<T>) {
        let Some(penalty) = choice.exclusion_cost().into_option() else {
            return;
        };

        let bound = node.lower_bound().saturating_add_val(penalty);
        let sibling = make_excluded_branch(node, choice.edge(), bound);

        self.stats.on_branch(self.solver.stack.len() + 1);
        self.monitor.on_branch(&sibling, choice, &self.stats);
        self.solver.stack.push(sibling);
    }

    /// Turns a leaf into a candidate tour if it survives the final bound.
    fn complete_leaf(&mut self, mut node: StageState<T>) -> Result<(), BnbError> {
        let Some(bound) = node.complete_leaf_bound() else {
            self.prune(&node, PruneReason::Infeasible);
            return Ok(());
        };
        if self.incumbent.is_dominated(bound) {
            self.prune(&node, PruneReason::BoundDominated);
            return Ok(());
        }

        let tour = node.reconstruct_tour()?;
        let cost = match self.model.tour_cost(&tour).into_option() {
            Some(cost) => cost,
            None => return Err(forbidden_leg(self.model, &tour).into()),
        };
        debug_assert_eq!(
            cost, bound,
            "leaf bound {} differs from the cost {} of its tour",
            bound, cost
        );

        let solution = TourSolution::new(cost, tour);
        self.stats.on_solution_found();
        self.monitor.on_solution_found(&solution, &self.stats);
        self.incumbent.record(bound, solution);
        Ok(())
    }

    #[inline]
    fn prune(&mut self, node: &StageState<T>, reason: PruneReason) {
        match reason {
            PruneReason::Infeasible => self.stats.on_pruning_infeasible(),
            PruneReason::BoundDominated => self.stats.on_pruning_bound(),
        }
        self.monitor.on_prune(node, reason, &self.stats);
    }

    /// Finalize the solver result from the recorded candidates.
    ///
    /// # Note
    ///
    /// This consumes self.
    fn finalize_result(self) -> BnbSolverOutcome<T> {
        let solutions: Vec<TourSolution<T>> = filter_solutions(self.incumbent.into_candidates())
            .into_iter()
            .map(|candidate| candidate.into_solution())
            .collect();

        if solutions.is_empty() {
            BnbSolverOutcome::infeasible(self.stats)
        } else {
            BnbSolverOutcome::optimal(solutions, self.stats)
        }
    }
}

/// Names the first leg of `tour` that `model` forbids.
fn forbidden_leg<T>(model: &Model<T>, tour: &[CityIndex]) -> InvariantViolation
where
    T: CostNumeric,
{
    let legs = tour.iter().zip(tour.iter().cycle().skip(1));
    let (from, to) = legs
        .map(|(&from, &to)| (from, to))
        .find(|&(from, to)| model.cost(from, to).is_infinite())
        .unwrap_or((CityIndex::new(0), CityIndex::new(0)));

    InvariantViolation::ForbiddenEdge {
        from: from.get(),
        to: to.get(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{composite::CompositeTreeSearchMonitor, log::LogTreeSearchMonitor};
    use itertools::Itertools;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use std::time::Duration;
    use waypoint_model::{error::ModelError, model::ModelBuilder};

    type IntegerType = i64;

    const INF: Option<IntegerType> = None;

    fn rows(values: &[&[Option<IntegerType>]]) -> Vec<Vec<Option<IntegerType>>> {
        values.iter().map(|row| row.to_vec()).collect()
    }

    fn sample_rows() -> Vec<Vec<Option<IntegerType>>> {
        rows(&[
            &[INF, Some(10), Some(8), Some(19), Some(12)],
            &[Some(10), INF, Some(20), Some(6), Some(3)],
            &[Some(8), Some(20), INF, Some(4), Some(2)],
            &[Some(19), Some(6), Some(4), INF, Some(7)],
            &[Some(12), Some(3), Some(2), Some(7), INF],
        ])
    }

    fn summary(tours: &[TourSolution<IntegerType>]) -> Vec<(IntegerType, Vec<usize>)> {
        tours.iter().map(|t| (t.cost(), t.cities())).collect()
    }

    /// Every tour of minimum cost, enumerated over all permutations that
    /// start at city 0.
    fn brute_force(rows: &[Vec<Option<IntegerType>>]) -> Vec<(IntegerType, Vec<usize>)> {
        let n = rows.len();
        let mut best: Option<IntegerType> = None;
        let mut tours = Vec::new();

        for rest in (1..n).permutations(n - 1) {
            let tour: Vec<usize> = std::iter::once(0).chain(rest).collect();
            let cost = (0..n)
                .map(|i| rows[tour[i]][tour[(i + 1) % n]])
                .try_fold(0, |acc, c| c.map(|c| acc + c));
            let Some(cost) = cost else {
                continue;
            };

            match best {
                Some(b) if cost > b => {}
                Some(b) if cost == b => tours.push((cost, tour)),
                _ => {
                    best = Some(cost);
                    tours.clear();
                    tours.push((cost, tour));
                }
            }
        }
        tours
    }

    fn random_rows(
        rng: &mut StdRng,
        n: usize,
        max_cost: IntegerType,
        forbidden_probability: f64,
    ) -> Vec<Vec<Option<IntegerType>>> {
        (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        if i == j || rng.random_bool(forbidden_probability) {
                            None
                        } else {
                            Some(rng.random_range(0..=max_cost))
                        }
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_sample_instance_reports_both_optimal_tours() {
        let tours = solve_tsp(sample_rows()).unwrap();
        assert_eq!(
            summary(&tours),
            vec![(32, vec![0, 2, 3, 4, 1]), (32, vec![0, 1, 4, 3, 2])]
        );
    }

    #[test]
    fn test_unique_optimum() {
        let tours = solve_tsp(rows(&[
            &[INF, Some(12), Some(3), Some(45), Some(6)],
            &[Some(78), INF, Some(90), Some(21), Some(3)],
            &[Some(5), Some(56), INF, Some(23), Some(98)],
            &[Some(12), Some(6), Some(8), INF, Some(34)],
            &[Some(3), Some(98), Some(3), Some(2), INF],
        ]))
        .unwrap();
        assert_eq!(summary(&tours), vec![(30, vec![0, 1, 4, 3, 2])]);
    }

    #[test]
    fn test_symmetric_instance_reports_both_directions() {
        let tours = solve_tsp(rows(&[
            &[INF, Some(3), Some(4), Some(2), Some(7)],
            &[Some(3), INF, Some(4), Some(6), Some(3)],
            &[Some(4), Some(4), INF, Some(5), Some(8)],
            &[Some(2), Some(6), Some(5), INF, Some(6)],
            &[Some(7), Some(3), Some(8), Some(6), INF],
        ]))
        .unwrap();
        assert_eq!(
            summary(&tours),
            vec![(19, vec![0, 2, 1, 4, 3]), (19, vec![0, 3, 4, 1, 2])]
        );
    }

    #[test]
    fn test_three_cities() {
        let tours = solve_tsp(rows(&[
            &[INF, Some(1), Some(2)],
            &[Some(3), INF, Some(4)],
            &[Some(5), Some(6), INF],
        ]))
        .unwrap();
        assert_eq!(summary(&tours), vec![(10, vec![0, 1, 2])]);
    }

    #[test]
    fn test_uniform_costs_report_every_tour() {
        let n = 5;
        let uniform: Vec<Vec<Option<IntegerType>>> = (0..n)
            .map(|i| (0..n).map(|j| if i == j { None } else { Some(1) }).collect())
            .collect();

        let tours = solve_tsp(uniform).unwrap();
        assert_eq!(tours.len(), 24);
        assert!(tours.iter().all(|t| t.cost() == 5));
        assert_eq!(tours.iter().map(|t| t.cities()).unique().count(), 24);
    }

    #[test]
    fn test_infeasible_instance_returns_no_tour() {
        let model = Model::try_from_rows(rows(&[
            &[INF, Some(1), INF],
            &[INF, INF, Some(1)],
            &[INF, Some(1), INF],
        ]))
        .unwrap();

        let outcome = BnbSolver::new().solve(&model).unwrap();
        assert!(outcome.is_infeasible());
        assert!(outcome.solutions().is_empty());
        assert!(outcome.statistics().prunings_infeasible > 0);
        assert_eq!(outcome.statistics().solutions_found, 0);
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        assert_eq!(
            solve_tsp::<IntegerType>(Vec::new()),
            Err(BnbError::InvalidInput(ModelError::Empty))
        );
        assert_eq!(
            solve_tsp(rows(&[&[INF, Some(1)], &[Some(1), INF]])),
            Err(BnbError::InvalidInput(ModelError::TooFewCities {
                num_cities: 2
            }))
        );
        assert!(matches!(
            solve_tsp(rows(&[
                &[INF, Some(1), Some(2)],
                &[Some(3), INF],
                &[Some(5), Some(6), INF],
            ])),
            Err(BnbError::InvalidInput(ModelError::NotSquare { .. }))
        ));
        assert!(matches!(
            solve_tsp(rows(&[
                &[INF, Some(-1), Some(2)],
                &[Some(3), INF, Some(4)],
                &[Some(5), Some(6), INF],
            ])),
            Err(BnbError::InvalidInput(ModelError::NegativeCost { .. }))
        ));
        assert!(matches!(
            solve_tsp(rows(&[
                &[Some(0), Some(1), Some(2)],
                &[Some(3), INF, Some(4)],
                &[Some(5), Some(6), INF],
            ])),
            Err(BnbError::InvalidInput(ModelError::DiagonalNotForbidden { .. }))
        ));
    }

    #[test]
    fn test_costs_too_large_for_the_type_are_rejected() {
        let rows: Vec<Vec<Option<i32>>> = vec![
            vec![None, Some(1_000_000_000), Some(2_000_000_000)],
            vec![Some(2_000_000_000), None, Some(1_000_000_000)],
            vec![Some(1_000_000_000), Some(2_000_000_000), None],
        ];
        assert_eq!(
            solve_tsp(rows),
            Err(BnbError::InvalidInput(ModelError::CostOverflow))
        );
    }

    #[test]
    fn test_large_costs_that_fit_are_solved_exactly() {
        let rows: Vec<Vec<Option<i32>>> = vec![
            vec![None, Some(100_000_000), Some(200_000_000)],
            vec![Some(200_000_000), None, Some(100_000_000)],
            vec![Some(100_000_000), Some(200_000_000), None],
        ];
        let tours = solve_tsp(rows).unwrap();
        let found: Vec<(i32, Vec<usize>)> =
            tours.iter().map(|t| (t.cost(), t.cities())).collect();
        assert_eq!(found, vec![(300_000_000, vec![0, 1, 2])]);
    }

    #[test]
    fn test_statistics_of_sample_instance() {
        let model = Model::try_from_rows(sample_rows()).unwrap();
        let outcome = BnbSolver::new().solve(&model).unwrap();
        let stats = outcome.statistics();

        assert!(outcome.is_optimal());
        assert_eq!(stats.root_lower_bound, 28);
        assert!(stats.nodes_explored >= 2);
        assert!(stats.edges_committed >= 3);
        assert!(stats.max_level >= 3);
        assert!(stats.solutions_found >= 2);
        assert!(stats.branches >= 1);
        println!("{}", outcome);
    }

    #[test]
    fn test_matches_brute_force_on_random_instances() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut solver = BnbSolver::new();

        for _ in 0..300 {
            let n = rng.random_range(3..=7);
            let instance = random_rows(&mut rng, n, 20, 0.1);
            let expected = brute_force(&instance);

            let model = Model::try_from_rows(instance.clone()).unwrap();
            let outcome = solver.solve(&model).unwrap();
            let mut found = summary(outcome.solutions());

            for tour in outcome.solutions() {
                assert_eq!(tour.num_cities(), n);
                assert_eq!(tour.tour()[0], CityIndex::new(0));
                assert_eq!(
                    model.tour_cost(tour.tour()).into_option(),
                    Some(tour.cost())
                );
            }

            found.sort();
            let mut expected = expected;
            expected.sort();
            assert_eq!(found, expected, "instance: {:?}", instance);
        }
    }

    #[test]
    fn test_reports_all_ties_on_small_cost_ranges() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let n = rng.random_range(3..=6);
            let instance = random_rows(&mut rng, n, 3, 0.0);
            let mut expected = brute_force(&instance);
            let mut found = summary(&solve_tsp(instance.clone()).unwrap());

            expected.sort();
            found.sort();
            assert_eq!(found, expected, "instance: {:?}", instance);
        }
    }

    #[test]
    fn test_sparse_instances_are_solved_or_proven_infeasible() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let n = rng.random_range(3..=6);
            let instance = random_rows(&mut rng, n, 9, 0.5);
            let expected = brute_force(&instance);

            let model = Model::try_from_rows(instance.clone()).unwrap();
            let outcome = BnbSolver::new().solve(&model).unwrap();
            assert_eq!(outcome.is_infeasible(), expected.is_empty());
        }
    }

    #[test]
    fn test_builder_model_and_reused_solver() {
        let mut builder = ModelBuilder::<IntegerType>::new(4);
        for i in 0..4 {
            for j in 0..4 {
                if i != j {
                    let cost = if (i + 1) % 4 == j { 1 } else { 10 };
                    builder.set_cost(CityIndex::new(i), CityIndex::new(j), Some(cost));
                }
            }
        }
        let ring = builder.build().unwrap();
        let sample = Model::try_from_rows(sample_rows()).unwrap();

        let mut solver = BnbSolver::preallocated(ring.num_cities());
        let first = solver.solve(&ring).unwrap();
        assert_eq!(summary(first.solutions()), vec![(4, vec![0, 1, 2, 3])]);

        let second = solver.solve(&sample).unwrap();
        assert_eq!(second.solutions().len(), 2);
        assert!(second.solutions().iter().all(|t| t.cost() == 32));

        let again = solver.solve(&ring).unwrap();
        assert_eq!(summary(again.solutions()), summary(first.solutions()));
    }

    #[test]
    fn test_solver_with_log_monitor() {
        let _ = env_logger::builder().is_test(true).try_init();

        let model = Model::try_from_rows(sample_rows()).unwrap();
        println!("{}", model.complexity());

        let mut composite = CompositeTreeSearchMonitor::new();
        composite.add_monitor(LogTreeSearchMonitor::new(
            ::log::Level::Info,
            Duration::ZERO,
            0,
        ));
        composite.add_monitor(LogTreeSearchMonitor::default());

        let outcome = BnbSolver::new()
            .solve_with_monitor(&model, composite)
            .unwrap();

        println!("{}", outcome.result());
        println!("{}", outcome.statistics());
        println!(
            "Coverage {}",
            model
                .complexity()
                .coverage(outcome.statistics().nodes_explored)
                .unwrap_or(0.0)
        );
        assert_eq!(outcome.solutions().len(), 2);
    }

    #[test]
    fn test_forbidden_leg_names_the_first_forbidden_edge() {
        let model = Model::try_from_rows(rows(&[
            &[INF, Some(1), Some(2)],
            &[Some(3), INF, INF],
            &[Some(5), Some(6), INF],
        ]))
        .unwrap();
        let tour: Vec<CityIndex> = [0, 1, 2].into_iter().map(CityIndex::new).collect();

        assert_eq!(
            forbidden_leg(&model, &tour),
            InvariantViolation::ForbiddenEdge { from: 1, to: 2 }
        );
    }
}
