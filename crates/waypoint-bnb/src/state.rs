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

//! Per-node search state of the branch-and-bound tree.
//!
//! A `StageState` is one node of the binary search tree: an exclusively
//! owned snapshot of the reduced cost matrix, the edges fixed on the way down
//! and the lower bound of every tour that completes them.
//!
//! Key responsibilities:
//! - Reduce the matrix and keep the lower bound admissible.
//! - Pick the zero cell whose exclusion would hurt the most.
//! - Commit an edge: forbid its row and column and every cell that would
//!   close a cycle before all cities are visited.
//! - Turn a leaf (two open rows and columns left) into a tour.
//!
//! Bound bookkeeping:
//! - `reduction_total` is the exact amount subtracted from the original
//!   matrix to obtain this node's matrix. Any tour that completes the fixed
//!   edges costs `reduction_total` plus its reduced costs, so the ledger is
//!   always an admissible bound.
//! - `lower_bound` is the bound the search compares against the incumbent.
//!   It starts at the value the parent assigns and is tightened to at least
//!   the ledger after every reduction.
//!
//! Open rows and columns are tracked with `FixedBitSet`s; chain endpoints are
//! kept in two arrays so that the edge closing a partial path is found in
//! constant time.

use crate::{branch::EdgeChoice, error::InvariantViolation};
use fixedbitset::FixedBitSet;
use waypoint_model::{
    cost::Cost, edge::Edge, index::CityIndex, matrix::CostMatrix, num::CostNumeric,
};

/// One node of the search tree.
///
/// Invariants (debug-checked):
/// - `level == fixed_edges.len()`
/// - `level <= num_cities - 2`
/// - every fixed edge's row and column are fully forbidden in `matrix`
#[derive(Clone, Debug)]
pub struct StageState<T>
where
    T: CostNumeric,
{
    matrix: CostMatrix<T>,
    fixed_edges: Vec<Edge>,
    departed: FixedBitSet, // rows with a fixed outgoing edge
    arrived: FixedBitSet,  // columns with a fixed incoming edge
    chain_start: Vec<CityIndex>, // valid at the last city of a chain
    chain_end: Vec<CityIndex>,   // valid at the first city of a chain
    lower_bound: T,
    reduction_total: T,
    level: usize,
}

impl<T> StageState<T>
where
    T: CostNumeric,
{
    /// Creates the root node over a copy of the original matrix, at level 0
    /// with a bound of zero.
    pub fn root(matrix: CostMatrix<T>) -> Self {
        let n = matrix.size();
        debug_assert!(
            n >= 2,
            "called `StageState::root` with a matrix of size {}, expected at least 2",
            n
        );

        Self {
            matrix,
            fixed_edges: Vec::with_capacity(n.saturating_sub(2)),
            departed: FixedBitSet::with_capacity(n),
            arrived: FixedBitSet::with_capacity(n),
            chain_start: CityIndex::range(n).collect(),
            chain_end: CityIndex::range(n).collect(),
            lower_bound: T::ZERO,
            reduction_total: T::ZERO,
            level: 0,
        }
    }

    #[inline]
    pub fn num_cities(&self) -> usize {
        self.matrix.size()
    }

    /// The number of edges fixed on the path from the root to this node.
    #[inline]
    pub fn level(&self) -> usize {
        self.level
    }

    /// The level at which only a 2×2 residual remains.
    #[inline]
    pub fn leaf_level(&self) -> usize {
        self.num_cities().saturating_sub(2)
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.level >= self.leaf_level()
    }

    #[inline]
    pub fn lower_bound(&self) -> T {
        self.lower_bound
    }

    /// The total subtracted from the original matrix along this branch.
    #[inline]
    pub fn reduction_total(&self) -> T {
        self.reduction_total
    }

    #[inline]
    pub fn matrix(&self) -> &CostMatrix<T> {
        &self.matrix
    }

    /// The included edges in the order they were fixed.
    #[inline]
    pub fn fixed_edges(&self) -> &[Edge] {
        &self.fixed_edges
    }

    /// Returns `true` if `city` already has a fixed outgoing edge.
    #[inline]
    pub fn has_departed(&self, city: CityIndex) -> bool {
        self.departed.contains(city.get())
    }

    /// Returns `true` if `city` already has a fixed incoming edge.
    #[inline]
    pub fn has_arrived(&self, city: CityIndex) -> bool {
        self.arrived.contains(city.get())
    }

    /// Reduces rows, then columns, and returns the combined amount.
    ///
    /// The amount is recorded in `reduction_total`; the lower bound itself
    /// only moves in `tighten_lower_bound`.
    pub fn reduce_cost_matrix(&mut self) -> T {
        let reduction = self
            .matrix
            .reduce_rows()
            .saturating_add_val(self.matrix.reduce_columns());
        self.reduction_total = self.reduction_total.saturating_add_val(reduction);
        reduction
    }

    /// Drops the lower bound to zero. Used on level-0 nodes so that their
    /// bound is defined by reduction alone.
    #[inline]
    pub fn reset_lower_bound(&mut self) {
        self.lower_bound = T::ZERO;
    }

    /// Raises the lower bound to the reduction ledger if it lies below.
    ///
    /// The bound never decreases through this call.
    #[inline]
    pub fn tighten_lower_bound(&mut self) -> T {
        self.lower_bound = self.lower_bound.max(self.reduction_total);
        self.lower_bound
    }

    #[inline]
    pub(crate) fn set_lower_bound(&mut self, bound: T) {
        self.lower_bound = bound;
    }

    #[inline]
    pub(crate) fn forbid_edge(&mut self, edge: Edge) {
        self.matrix.forbid(edge.source(), edge.target());
    }

    /// Returns `true` if a city can no longer be left or entered.
    ///
    /// Such a node has no completion: some open row or open column holds no
    /// finite cell.
    pub fn has_blocked_city(&self) -> bool {
        let blocked_row = self
            .departed
            .zeroes()
            .any(|r| self.matrix.row(CityIndex::new(r)).iter().all(Cost::is_infinite));
        if blocked_row {
            return true;
        }

        self.arrived
            .zeroes()
            .any(|c| self.matrix.column(CityIndex::new(c)).all(|cell| cell.is_infinite()))
    }

    /// Selects the zero cell with the largest exclusion cost.
    ///
    /// Cells are scanned in row-major order and only a strictly larger cost
    /// replaces the current choice, so ties go to the first cell found. An
    /// `INF` exclusion cost beats every finite one. Returns `None` if the
    /// matrix holds no zero.
    pub fn choose_next_edge(&self) -> Option<EdgeChoice<T>> {
        let mut best: Option<EdgeChoice<T>> = None;
        for edge in self.matrix.zero_cells() {
            let exclusion_cost = self.matrix.exclusion_cost(edge.source(), edge.target());
            let better = match &best {
                Some(current) => exclusion_cost > current.exclusion_cost(),
                None => true,
            };
            if better {
                best = Some(EdgeChoice::new(edge, exclusion_cost));
            }
        }
        best
    }

    /// Includes `edge` in the tour.
    ///
    /// Forbids the whole row and column of the edge and the reverse cell.
    /// Also forbids the cell that would join the end of the chain now running
    /// through `edge` back to its start. For a fresh chain this is the
    /// reverse cell; for longer chains it rules out the cycles the reverse
    /// cell alone cannot.
    pub fn commit_edge(&mut self, edge: Edge) {
        let (row, col) = (edge.source(), edge.target());
        debug_assert!(
            !self.has_departed(row) && !self.has_arrived(col),
            "called `StageState::commit_edge` with edge {} touching a closed row or column",
            edge
        );
        debug_assert!(
            self.level < self.leaf_level(),
            "called `StageState::commit_edge` on a leaf at level {}",
            self.level
        );

        let start = self.chain_start[row.get()];
        let end = self.chain_end[col.get()];

        self.matrix.forbid_row(row);
        self.matrix.forbid_column(col);
        self.matrix.forbid(col, row);
        self.matrix.forbid(end, start);

        self.chain_end[start.get()] = end;
        self.chain_start[end.get()] = start;

        self.departed.insert(row.get());
        self.arrived.insert(col.get());
        self.fixed_edges.push(edge);
        self.level += 1;
    }

    /// The finite cells left among open rows and open columns, in row-major
    /// order. At a feasible leaf these are the last two edges of the tour.
    pub fn residual_edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(2);
        for r in self.departed.zeroes() {
            let row = CityIndex::new(r);
            for c in self.arrived.zeroes() {
                let col = CityIndex::new(c);
                if self.matrix.cost(row, col).is_finite() {
                    edges.push(Edge::new(row, col));
                }
            }
        }
        edges
    }

    /// Completes the bound of a leaf with the reduced costs of its residual
    /// edges, after which the bound equals the cost of the tour the leaf
    /// describes.
    ///
    /// Returns `None` if the leaf has no completion: the residual must be
    /// exactly two finite cells that leave different rows and enter
    /// different columns.
    pub fn complete_leaf_bound(&mut self) -> Option<T> {
        debug_assert!(
            self.is_leaf(),
            "called `StageState::complete_leaf_bound` at level {}, expected {}",
            self.level,
            self.leaf_level()
        );

        let residual = self.residual_edges();
        let [first, second] = residual.as_slice() else {
            return None;
        };
        if first.source() == second.source() || first.target() == second.target() {
            return None;
        }

        let closing = residual
            .iter()
            .filter_map(|e| self.matrix.cost(e.source(), e.target()).into_option())
            .fold(self.reduction_total, |acc, c| acc.saturating_add_val(c));
        self.lower_bound = self.lower_bound.max(closing);
        Some(self.lower_bound)
    }

    /// Linearizes the fixed edges and the two residual edges into a tour
    /// starting at city 0.
    ///
    /// # Errors
    ///
    /// Returns an `InvariantViolation` if the node is not a leaf or if the
    /// edges do not form exactly one Hamiltonian cycle.
    pub fn reconstruct_tour(&self) -> Result<Vec<CityIndex>, InvariantViolation> {
        let n = self.num_cities();
        if self.level != self.leaf_level() {
            return Err(InvariantViolation::NotALeaf {
                level: self.level,
                expected: self.leaf_level(),
            });
        }

        let residual = self.residual_edges();
        if residual.len() != 2 {
            return Err(InvariantViolation::ResidualEdgeCount {
                found: residual.len(),
            });
        }

        let mut successors: Vec<Option<CityIndex>> = vec![None; n];
        for edge in self.fixed_edges.iter().chain(&residual) {
            let slot = &mut successors[edge.source().get()];
            if slot.is_some() {
                return Err(InvariantViolation::DuplicateSuccessor {
                    city: edge.source().get(),
                });
            }
            *slot = Some(edge.target());
        }

        let mut visited = FixedBitSet::with_capacity(n);
        let mut tour = Vec::with_capacity(n);
        let mut city = CityIndex::new(0);
        loop {
            if visited.contains(city.get()) {
                if tour.len() == n && city.is_zero() {
                    return Ok(tour);
                }
                return Err(InvariantViolation::SubCycle {
                    city: city.get(),
                    length: tour.len(),
                    num_cities: n,
                });
            }

            visited.insert(city.get());
            tour.push(city);
            city = successors[city.get()]
                .ok_or(InvariantViolation::MissingSuccessor { city: city.get() })?;
        }
    }
}
