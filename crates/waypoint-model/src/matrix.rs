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

//! # Cost Matrix
//!
//! Square `n × n` table of directed edge costs, stored row-major in one flat
//! vector. Cell `(r, c)` is the cost of travelling from city `r` to city `c`.
//!
//! Besides plain access, the matrix implements the reduction arithmetic the
//! branch-and-bound search is built on:
//!
//! - `minimum_per_row` / `minimum_per_column`: the smallest finite entry of
//!   each line, `INF` for a line without one.
//! - `reduce_rows` / `reduce_columns`: subtract those minima from the finite
//!   cells of each line and report the total subtracted. The total is a lower
//!   bound on what any tour through the matrix still has to pay.
//! - `exclusion_cost`: the penalty of *not* using a zero cell, i.e. the
//!   cheapest alternative exit from its row plus the cheapest alternative
//!   entry into its column.
//!
//! The shape is fixed at construction; reductions and forbidding only mutate
//! cell values.

use crate::{cost::Cost, edge::Edge, error::ModelError, index::CityIndex, num::CostNumeric};

#[inline(always)]
fn flatten_index(size: usize, row: CityIndex, col: CityIndex) -> usize {
    row.get() * size + col.get()
}

#[derive(Clone, PartialEq, Eq)]
pub struct CostMatrix<T>
where
    T: CostNumeric,
{
    size: usize,
    cells: Vec<Cost<T>>, // len = size * size
}

impl<T> CostMatrix<T>
where
    T: CostNumeric,
{
    /// Creates a `size × size` matrix with every cell forbidden.
    pub fn forbidden(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cost::infinite(); size * size],
        }
    }

    /// Creates a matrix from its rows.
    ///
    /// Only the shape is checked here; problem-level rules such as a
    /// forbidden diagonal belong to `Model`.
    ///
    /// # Errors
    ///
    /// `ModelError::Empty` for zero rows and `ModelError::NotSquare` if any
    /// row length differs from the number of rows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use waypoint_model::{cost::Cost, matrix::CostMatrix};
    /// let inf = Cost::<i64>::infinite();
    /// let m = CostMatrix::try_from_rows(vec![
    ///     vec![inf, Cost::finite(1)],
    ///     vec![Cost::finite(2), inf],
    /// ])
    /// .unwrap();
    /// assert_eq!(m.size(), 2);
    /// ```
    pub fn try_from_rows(rows: Vec<Vec<Cost<T>>>) -> Result<Self, ModelError> {
        let size = rows.len();
        if size == 0 {
            return Err(ModelError::Empty);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(ModelError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            cells.extend(values);
        }

        Ok(Self { size, cells })
    }

    /// The number of rows, which equals the number of columns.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn cost(&self, row: CityIndex, col: CityIndex) -> Cost<T> {
        debug_assert!(
            row.get() < self.size && col.get() < self.size,
            "called `CostMatrix::cost` with a cell out of bounds: the size is {} but the cell is ({}, {})",
            self.size,
            row.get(),
            col.get()
        );

        self.cells[flatten_index(self.size, row, col)]
    }

    #[inline]
    pub fn set_cost(&mut self, row: CityIndex, col: CityIndex, cost: Cost<T>) {
        debug_assert!(
            row.get() < self.size && col.get() < self.size,
            "called `CostMatrix::set_cost` with a cell out of bounds: the size is {} but the cell is ({}, {})",
            self.size,
            row.get(),
            col.get()
        );

        let index = flatten_index(self.size, row, col);
        self.cells[index] = cost;
    }

    /// Marks a single cell as forbidden.
    #[inline]
    pub fn forbid(&mut self, row: CityIndex, col: CityIndex) {
        self.set_cost(row, col, Cost::infinite());
    }

    /// Marks every cell of `row` as forbidden.
    #[inline]
    pub fn forbid_row(&mut self, row: CityIndex) {
        let start = row.get() * self.size;
        self.cells[start..start + self.size].fill(Cost::infinite());
    }

    /// Marks every cell of `col` as forbidden.
    #[inline]
    pub fn forbid_column(&mut self, col: CityIndex) {
        let size = self.size;
        self.cells
            .iter_mut()
            .skip(col.get())
            .step_by(size)
            .for_each(|cell| *cell = Cost::infinite());
    }

    /// Returns the cells of `row`.
    #[inline]
    pub fn row(&self, row: CityIndex) -> &[Cost<T>] {
        let start = row.get() * self.size;
        &self.cells[start..start + self.size]
    }

    /// Returns an iterator over the cells of `col`, top to bottom.
    #[inline]
    pub fn column(&self, col: CityIndex) -> impl Iterator<Item = Cost<T>> + '_ {
        self.cells.iter().skip(col.get()).step_by(self.size).copied()
    }

    /// The smallest entry of each row. A row without finite entries yields `INF`.
    pub fn minimum_per_row(&self) -> Vec<Cost<T>> {
        self.cells
            .chunks_exact(self.size)
            .map(|row| row.iter().copied().min().unwrap_or_else(Cost::infinite))
            .collect()
    }

    /// The smallest entry of each column. A column without finite entries yields `INF`.
    pub fn minimum_per_column(&self) -> Vec<Cost<T>> {
        let mut minima = vec![Cost::infinite(); self.size];
        for row in self.cells.chunks_exact(self.size) {
            for (minimum, &cell) in minima.iter_mut().zip(row) {
                if cell < *minimum {
                    *minimum = cell;
                }
            }
        }
        minima
    }

    /// Subtracts each row's minimum from the finite cells of that row.
    ///
    /// Rows whose minimum is `INF` are left alone. Returns the sum of the
    /// finite minima.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use waypoint_model::{cost::Cost, matrix::CostMatrix};
    /// let inf = Cost::<i64>::infinite();
    /// let f = Cost::finite;
    /// let mut m = CostMatrix::try_from_rows(vec![
    ///     vec![inf, f(4), f(6)],
    ///     vec![f(3), inf, f(5)],
    ///     vec![f(9), f(2), inf],
    /// ])
    /// .unwrap();
    /// assert_eq!(m.reduce_rows(), 9);
    /// ```
    pub fn reduce_rows(&mut self) -> T {
        let minima = self.minimum_per_row();
        let mut total = T::ZERO;
        for (row, minimum) in self.cells.chunks_exact_mut(self.size).zip(minima) {
            let Some(amount) = minimum.into_option() else {
                continue;
            };
            for cell in row.iter_mut() {
                *cell = cell.saturating_sub(amount);
            }
            total = total.saturating_add_val(amount);
        }
        total
    }

    /// Subtracts each column's minimum from the finite cells of that column.
    ///
    /// Columns whose minimum is `INF` are left alone. Returns the sum of the
    /// finite minima.
    pub fn reduce_columns(&mut self) -> T {
        let minima = self.minimum_per_column();
        for row in self.cells.chunks_exact_mut(self.size) {
            for (cell, minimum) in row.iter_mut().zip(&minima) {
                if let Some(amount) = minimum.into_option() {
                    *cell = cell.saturating_sub(amount);
                }
            }
        }

        minima
            .iter()
            .filter_map(|m| m.into_option())
            .fold(T::ZERO, |acc, amount| acc.saturating_add_val(amount))
    }

    /// The cost of not taking the edge at `(row, col)`: the minimum of `row`
    /// without `col` plus the minimum of `col` without `row`.
    ///
    /// `INF` if either line has no finite alternative, meaning the edge is
    /// the only way out of `row` or into `col`.
    pub fn exclusion_cost(&self, row: CityIndex, col: CityIndex) -> Cost<T> {
        debug_assert!(
            row != col,
            "called `CostMatrix::exclusion_cost` on the diagonal cell ({}, {})",
            row.get(),
            col.get()
        );

        let row_alternative = self
            .row(row)
            .iter()
            .enumerate()
            .filter(|&(c, _)| c != col.get())
            .map(|(_, &cell)| cell)
            .min()
            .unwrap_or_else(Cost::infinite);

        let column_alternative = self
            .column(col)
            .enumerate()
            .filter(|&(r, _)| r != row.get())
            .map(|(_, cell)| cell)
            .min()
            .unwrap_or_else(Cost::infinite);

        row_alternative.saturating_add(column_alternative)
    }

    /// Returns every cell holding exactly zero, in row-major order.
    pub fn zero_cells(&self) -> impl Iterator<Item = Edge> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cost::zero())
            .map(move |(index, _)| Edge::new(CityIndex::new(index / size), CityIndex::new(index % size)))
    }
}

impl<T> std::fmt::Debug for CostMatrix<T>
where
    T: CostNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CostMatrix")
            .field("size", &self.size)
            .field("cells", &self.cells)
            .finish()
    }
}

impl<T> std::fmt::Display for CostMatrix<T>
where
    T: CostNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self
            .cells
            .iter()
            .map(|cell| cell.to_string().len())
            .max()
            .unwrap_or(0);

        for row in self.cells.chunks_exact(self.size.max(1)) {
            let line: Vec<String> = row
                .iter()
                .map(|cell| format!("{:>width$}", cell, width = width))
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
