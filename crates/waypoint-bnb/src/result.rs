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

//! Outcome types returned by the solver.

use crate::stats::BnbSolverStatistics;
use waypoint_model::{num::CostNumeric, solution::TourSolution};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverResult<T> {
    /// We have proven that no tour exists.
    Infeasible,
    /// Every tour of minimum cost found by the search, in discovery order.
    Optimal(Vec<TourSolution<T>>),
}

impl<T> SolverResult<T> {
    /// The optimal tours, empty if the instance is infeasible.
    #[inline]
    pub fn solutions(&self) -> &[TourSolution<T>] {
        match self {
            SolverResult::Infeasible => &[],
            SolverResult::Optimal(solutions) => solutions,
        }
    }
}

impl<T> std::fmt::Display for SolverResult<T>
where
    T: CostNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverResult::Infeasible => write!(f, "Infeasible"),
            SolverResult::Optimal(solutions) => match solutions.first() {
                Some(first) => write!(
                    f,
                    "Optimal(cost={}, tours={})",
                    first.cost(),
                    solutions.len()
                ),
                None => write!(f, "Optimal(tours=0)"),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// The search space was exhausted with at least one tour found.
    OptimalityProven,
    /// The search space was exhausted without finding a tour.
    InfeasibilityProven,
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            TerminationReason::InfeasibilityProven => write!(f, "Infeasibility Proven"),
        }
    }
}

/// Result of the solver after termination.
#[derive(Debug, Clone)]
pub struct BnbSolverOutcome<T> {
    result: SolverResult<T>,
    termination_reason: TerminationReason,
    statistics: BnbSolverStatistics<T>,
}

impl<T> BnbSolverOutcome<T> {
    #[inline]
    pub fn optimal(solutions: Vec<TourSolution<T>>, statistics: BnbSolverStatistics<T>) -> Self {
        debug_assert!(
            !solutions.is_empty(),
            "called `BnbSolverOutcome::optimal` without any solution"
        );

        Self {
            result: SolverResult::Optimal(solutions),
            termination_reason: TerminationReason::OptimalityProven,
            statistics,
        }
    }

    #[inline]
    pub fn infeasible(statistics: BnbSolverStatistics<T>) -> Self {
        Self {
            result: SolverResult::Infeasible,
            termination_reason: TerminationReason::InfeasibilityProven,
            statistics,
        }
    }

    /// Returns the solver result.
    #[inline]
    pub fn result(&self) -> &SolverResult<T> {
        &self.result
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> TerminationReason {
        self.termination_reason
    }

    /// Returns the solver statistics.
    #[inline]
    pub fn statistics(&self) -> &BnbSolverStatistics<T> {
        &self.statistics
    }

    #[inline]
    pub fn solutions(&self) -> &[TourSolution<T>] {
        self.result.solutions()
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self.result, SolverResult::Optimal(_))
    }

    #[inline]
    pub fn is_infeasible(&self) -> bool {
        matches!(self.result, SolverResult::Infeasible)
    }

    /// Consumes the outcome and returns the optimal tours.
    #[inline]
    pub fn into_solutions(self) -> Vec<TourSolution<T>> {
        match self.result {
            SolverResult::Infeasible => Vec::new(),
            SolverResult::Optimal(solutions) => solutions,
        }
    }
}

impl<T> std::fmt::Display for BnbSolverOutcome<T>
where
    T: CostNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Result:      {}", self.result)?;
        writeln!(f, "Termination: {}", self.termination_reason)?;
        write!(f, "{}", self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_model::index::CityIndex;

    type I = i64;

    fn stats() -> BnbSolverStatistics<I> {
        BnbSolverStatistics::default()
    }

    fn tour(cost: I, cities: &[usize]) -> TourSolution<I> {
        TourSolution::new(cost, cities.iter().copied().map(CityIndex::new).collect())
    }

    #[test]
    fn test_optimal_outcome() {
        let outcome = BnbSolverOutcome::optimal(vec![tour(10, &[0, 1, 2])], stats());
        assert!(outcome.is_optimal());
        assert!(!outcome.is_infeasible());
        assert_eq!(
            outcome.termination_reason(),
            TerminationReason::OptimalityProven
        );
        assert_eq!(outcome.solutions().len(), 1);
        assert_eq!(outcome.result().to_string(), "Optimal(cost=10, tours=1)");
        assert_eq!(outcome.into_solutions()[0].cost(), 10);
    }

    #[test]
    fn test_infeasible_outcome() {
        let outcome = BnbSolverOutcome::<I>::infeasible(stats());
        assert!(outcome.is_infeasible());
        assert_eq!(
            outcome.termination_reason(),
            TerminationReason::InfeasibilityProven
        );
        assert!(outcome.solutions().is_empty());
        assert_eq!(outcome.result().to_string(), "Infeasible");
        assert!(outcome.into_solutions().is_empty());
    }

    #[test]
    fn test_termination_reason_display() {
        assert_eq!(
            TerminationReason::OptimalityProven.to_string(),
            "Optimality Proven"
        );
        assert_eq!(
            TerminationReason::InfeasibilityProven.to_string(),
            "Infeasibility Proven"
        );
    }

    #[test]
    fn test_outcome_display_contains_statistics() {
        let outcome = BnbSolverOutcome::<I>::infeasible(stats());
        let text = outcome.to_string();
        assert!(text.starts_with("Result:      Infeasible\n"));
        assert!(text.contains("Waypoint-BnB Solver Statistics:"));
    }
}
