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
    cost::Cost, error::ModelError, index::CityIndex, matrix::CostMatrix, num::CostNumeric,
};

/// Size of the tour space of an instance, kept in log10 space.
///
/// A complete directed instance with `n` cities has `(n - 1)!` distinct
/// Hamiltonian cycles once the start city is pinned. The count overflows
/// every integer type long before the search becomes hopeless, so only its
/// logarithm is stored.
///
/// # Examples
///
/// ```rust
/// # use waypoint_model::model::Complexity;
/// let c = Complexity::new(5); // 4! = 24 tours
/// assert_eq!(c.exponent(), 1);
/// assert!((c.mantissa() - 2.4).abs() < 1e-9);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Complexity {
    log_val: f64,
}

impl Complexity {
    pub fn new(num_cities: usize) -> Self {
        // log10((n - 1)!) = sum of log10(k) for k in 2..n
        let log_val = (2..num_cities).map(|k| (k as f64).log10()).sum();
        Complexity { log_val }
    }

    /// The share of the tour space, in percent, that `tours_seen` covers.
    ///
    /// Returns `Some(0.0)` once the space is too large for the ratio to be
    /// meaningful in `f64`.
    pub fn coverage(&self, tours_seen: u64) -> Option<f64> {
        if self.log_val > 15.0 {
            return Some(0.0);
        }

        let total_size = 10.0_f64.powf(self.log_val);
        if total_size == 0.0 {
            return None;
        }

        Some((tours_seen as f64 / total_size) * 100.0)
    }

    #[inline]
    pub fn exponent(&self) -> u64 {
        self.log_val.floor() as u64
    }

    #[inline]
    pub fn mantissa(&self) -> f64 {
        10.0_f64.powf(self.log_val - self.log_val.floor())
    }

    #[inline]
    pub fn raw(&self) -> f64 {
        self.log_val
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} × 10^{}", self.mantissa(), self.exponent())
    }
}

impl std::fmt::Debug for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Complexity(log10={:.4})", self.log_val)
    }
}

/// A validated travelling-salesman instance.
///
/// Holds the original cost matrix. Construction guarantees:
///
/// - at least three cities,
/// - a square matrix,
/// - every diagonal cell forbidden,
/// - no negative costs.
///
/// The solver works on reduced copies; the model itself never changes and
/// is the reference for true tour costs.
#[derive(Clone, Debug)]
pub struct Model<T>
where
    T: CostNumeric,
{
    matrix: CostMatrix<T>,
}

impl<T> Model<T>
where
    T: CostNumeric,
{
    /// Builds a model from rows of optional costs, `None` marking a forbidden edge.
    ///
    /// # Errors
    ///
    /// Returns a `ModelError` describing the first problem found, checking
    /// shape, size, costs and the diagonal in that order. Costs too large
    /// for `T` are rejected last with `ModelError::CostOverflow`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use waypoint_model::model::Model;
    /// let model = Model::try_from_rows(vec![
    ///     vec![None, Some(1), Some(2)],
    ///     vec![Some(3), None, Some(4)],
    ///     vec![Some(5), Some(6), None],
    /// ])
    /// .unwrap();
    /// assert_eq!(model.num_cities(), 3);
    /// ```
    pub fn try_from_rows(rows: Vec<Vec<Option<T>>>) -> Result<Self, ModelError> {
        let size = rows.len();
        if size == 0 {
            return Err(ModelError::Empty);
        }
        if let Some((row, values)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(ModelError::NotSquare {
                row,
                len: values.len(),
                expected: size,
            });
        }
        if size < 3 {
            return Err(ModelError::TooFewCities { num_cities: size });
        }

        for (from, values) in rows.iter().enumerate() {
            if let Some(to) = values
                .iter()
                .position(|v| v.is_some_and(|cost| cost < T::ZERO))
            {
                return Err(ModelError::NegativeCost { from, to });
            }
        }

        let matrix = CostMatrix::try_from_rows(
            rows.into_iter()
                .map(|r| r.into_iter().map(Cost::from_option).collect())
                .collect(),
        )?;
        Self::try_from_matrix(matrix)
    }

    /// Wraps an existing matrix after checking the problem-level rules.
    ///
    /// # Errors
    ///
    /// `ModelError::TooFewCities`, `ModelError::DiagonalNotForbidden`, or
    /// `ModelError::CostOverflow` if the costs are too large for `T`.
    pub fn try_from_matrix(matrix: CostMatrix<T>) -> Result<Self, ModelError> {
        let num_cities = matrix.size();
        if num_cities < 3 {
            return Err(ModelError::TooFewCities { num_cities });
        }
        if let Some(city) =
            CityIndex::range(num_cities).find(|&c| matrix.cost(c, c).is_finite())
        {
            return Err(ModelError::DiagonalNotForbidden { city: city.get() });
        }
        if cost_ceiling(&matrix).is_none() {
            return Err(ModelError::CostOverflow);
        }

        Ok(Self { matrix })
    }

    #[inline]
    pub fn num_cities(&self) -> usize {
        self.matrix.size()
    }

    /// The original cost matrix.
    #[inline]
    pub fn matrix(&self) -> &CostMatrix<T> {
        &self.matrix
    }

    #[inline]
    pub fn cost(&self, from: CityIndex, to: CityIndex) -> Cost<T> {
        debug_assert!(
            from.get() < self.num_cities() && to.get() < self.num_cities(),
            "called `Model::cost` with city index out of bounds: the len is {} but the edge is ({}, {})",
            self.num_cities(),
            from.get(),
            to.get()
        );

        self.matrix.cost(from, to)
    }

    #[inline]
    pub fn complexity(&self) -> Complexity {
        Complexity::new(self.num_cities())
    }

    /// The cost of the closed tour visiting `tour` in order and returning to
    /// its first city.
    ///
    /// `INF` if any leg is forbidden. An empty tour costs nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use waypoint_model::{cost::Cost, index::CityIndex, model::Model};
    /// let model = Model::try_from_rows(vec![
    ///     vec![None, Some(1), Some(2)],
    ///     vec![Some(3), None, Some(4)],
    ///     vec![Some(5), Some(6), None],
    /// ])
    /// .unwrap();
    /// let tour: Vec<CityIndex> = [0, 1, 2].into_iter().map(CityIndex::new).collect();
    /// assert_eq!(model.tour_cost(&tour), Cost::finite(10));
    /// ```
    pub fn tour_cost(&self, tour: &[CityIndex]) -> Cost<T> {
        let Some(&first) = tour.first() else {
            return Cost::zero();
        };

        tour.windows(2)
            .map(|leg| self.cost(leg[0], leg[1]))
            .chain(tour.last().map(|&last| self.cost(last, first)))
            .fold(Cost::zero(), Cost::saturating_add)
    }
}

/// The sum of the largest finite cost of every row and of every column, or
/// `None` if that sum does not fit in `T`.
///
/// The sum bounds every tour cost. It also bounds everything the search adds
/// up: a row (column) is never reduced by more than its largest original
/// cost, so reduction totals, exclusion costs and leaf bounds stay below it.
fn cost_ceiling<T>(matrix: &CostMatrix<T>) -> Option<T>
where
    T: CostNumeric,
{
    let row_maxima = CityIndex::range(matrix.size()).map(|r| {
        matrix
            .row(r)
            .iter()
            .filter_map(|c| c.into_option())
            .max()
            .unwrap_or(T::ZERO)
    });
    let column_maxima = CityIndex::range(matrix.size()).map(|c| {
        matrix
            .column(c)
            .filter_map(Cost::into_option)
            .max()
            .unwrap_or(T::ZERO)
    });

    row_maxima
        .chain(column_maxima)
        .try_fold(T::ZERO, |total, maximum| total.checked_add(&maximum))
}

impl<T> std::fmt::Display for Model<T>
where
    T: CostNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Model ({} cities, {} tours)", self.num_cities(), self.complexity())?;
        write!(f, "{}", self.matrix)
    }
}

/// Incremental construction of a `Model`.
///
/// Every edge starts out forbidden; only the edges given a cost through
/// `set_cost` are usable. Validation happens once, in `build`.
///
/// # Examples
///
/// ```rust
/// # use waypoint_model::{index::CityIndex, model::ModelBuilder};
/// let c = CityIndex::new;
/// let mut builder = ModelBuilder::<i64>::new(3);
/// builder
///     .set_cost(c(0), c(1), Some(4))
///     .set_cost(c(1), c(2), Some(5))
///     .set_cost(c(2), c(0), Some(6));
/// let model = builder.build().unwrap();
/// assert_eq!(model.num_cities(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct ModelBuilder<T>
where
    T: CostNumeric,
{
    num_cities: usize,
    costs: Vec<Option<T>>, // len = num_cities * num_cities
}

impl<T> ModelBuilder<T>
where
    T: CostNumeric,
{
    pub fn new(num_cities: usize) -> Self {
        Self {
            num_cities,
            costs: vec![None; num_cities * num_cities],
        }
    }

    #[inline]
    pub fn num_cities(&self) -> usize {
        self.num_cities
    }

    /// Sets the cost of the edge `from → to`; `None` forbids it.
    ///
    /// # Panics
    ///
    /// Panics if either city is out of bounds.
    pub fn set_cost(&mut self, from: CityIndex, to: CityIndex, cost: Option<T>) -> &mut Self {
        assert!(
            from.get() < self.num_cities && to.get() < self.num_cities,
            "called `ModelBuilder::set_cost` with city index out of bounds: the len is {} but the edge is ({}, {})",
            self.num_cities,
            from.get(),
            to.get()
        );

        self.costs[from.get() * self.num_cities + to.get()] = cost;
        self
    }

    /// Sets the cost of both `a → b` and `b → a`.
    pub fn set_symmetric_cost(&mut self, a: CityIndex, b: CityIndex, cost: Option<T>) -> &mut Self {
        self.set_cost(a, b, cost).set_cost(b, a, cost)
    }

    /// Validates the collected costs and produces the model.
    ///
    /// # Errors
    ///
    /// See `Model::try_from_rows`.
    pub fn build(self) -> Result<Model<T>, ModelError> {
        if self.num_cities == 0 {
            return Err(ModelError::Empty);
        }

        let rows = self
            .costs
            .chunks_exact(self.num_cities)
            .map(<[Option<T>]>::to_vec)
            .collect();
        Model::try_from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ci(i: usize) -> CityIndex {
        CityIndex::new(i)
    }

    fn tour(cities: &[usize]) -> Vec<CityIndex> {
        cities.iter().copied().map(ci).collect()
    }

    fn sample() -> Model<i64> {
        Model::try_from_rows(vec![
            vec![None, Some(10), Some(8), Some(19), Some(12)],
            vec![Some(10), None, Some(20), Some(6), Some(3)],
            vec![Some(8), Some(20), None, Some(4), Some(2)],
            vec![Some(19), Some(6), Some(4), None, Some(7)],
            vec![Some(12), Some(3), Some(2), Some(7), None],
        ])
        .expect("valid model")
    }

    #[test]
    fn test_try_from_rows_accepts_valid_input() {
        let model = sample();
        assert_eq!(model.num_cities(), 5);
        assert_eq!(model.cost(ci(0), ci(2)), Cost::finite(8));
        assert!(model.cost(ci(3), ci(3)).is_infinite());
    }

    #[test]
    fn test_try_from_rows_rejects_non_square() {
        let err = Model::<i64>::try_from_rows(vec![
            vec![None, Some(1), Some(2)],
            vec![Some(1), None],
            vec![Some(2), Some(1), None],
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ModelError::NotSquare {
                row: 1,
                len: 2,
                expected: 3
            }
        );
    }

    #[test]
    fn test_try_from_rows_rejects_too_few_cities() {
        let err = Model::<i64>::try_from_rows(vec![vec![None, Some(1)], vec![Some(1), None]])
            .unwrap_err();
        assert_eq!(err, ModelError::TooFewCities { num_cities: 2 });
        assert_eq!(
            Model::<i64>::try_from_rows(vec![]).unwrap_err(),
            ModelError::Empty
        );
    }

    #[test]
    fn test_try_from_rows_rejects_finite_diagonal() {
        let err = Model::<i64>::try_from_rows(vec![
            vec![None, Some(1), Some(2)],
            vec![Some(1), Some(0), Some(3)],
            vec![Some(2), Some(3), None],
        ])
        .unwrap_err();
        assert_eq!(err, ModelError::DiagonalNotForbidden { city: 1 });
    }

    #[test]
    fn test_try_from_rows_rejects_negative_costs() {
        let err = Model::<i64>::try_from_rows(vec![
            vec![None, Some(1), Some(2)],
            vec![Some(1), None, Some(-3)],
            vec![Some(2), Some(3), None],
        ])
        .unwrap_err();
        assert_eq!(err, ModelError::NegativeCost { from: 1, to: 2 });
    }

    #[test]
    fn test_try_from_rows_rejects_costs_too_large_for_the_type() {
        let err = Model::<i32>::try_from_rows(vec![
            vec![None, Some(1_000_000_000), Some(2_000_000_000)],
            vec![Some(2_000_000_000), None, Some(1_000_000_000)],
            vec![Some(1_000_000_000), Some(2_000_000_000), None],
        ])
        .unwrap_err();
        assert_eq!(err, ModelError::CostOverflow);

        // Every tour costs 1.2e9, but reductions may add up to the row maxima
        // plus the column maxima, 2.4e9.
        let err = Model::<i32>::try_from_rows(vec![
            vec![None, Some(400_000_000), Some(400_000_000)],
            vec![Some(400_000_000), None, Some(400_000_000)],
            vec![Some(400_000_000), Some(400_000_000), None],
        ])
        .unwrap_err();
        assert_eq!(err, ModelError::CostOverflow);
    }

    #[test]
    fn test_try_from_rows_accepts_large_costs_that_fit() {
        let model = Model::<i32>::try_from_rows(vec![
            vec![None, Some(100_000_000), Some(200_000_000)],
            vec![Some(200_000_000), None, Some(100_000_000)],
            vec![Some(100_000_000), Some(200_000_000), None],
        ])
        .expect("valid model");
        assert_eq!(
            model.tour_cost(&[ci(0), ci(1), ci(2)]),
            Cost::finite(300_000_000)
        );
        assert_eq!(
            model.tour_cost(&[ci(0), ci(2), ci(1)]),
            Cost::finite(600_000_000)
        );
    }

    #[test]
    fn test_try_from_matrix_ignores_forbidden_cells_in_the_ceiling() {
        let mut matrix = CostMatrix::<i8>::forbidden(3);
        matrix.set_cost(ci(0), ci(1), Cost::finite(20));
        matrix.set_cost(ci(1), ci(2), Cost::finite(20));
        matrix.set_cost(ci(2), ci(0), Cost::finite(20));
        assert!(Model::try_from_matrix(matrix.clone()).is_ok());

        matrix.set_cost(ci(0), ci(2), Cost::finite(40));
        assert_eq!(
            Model::try_from_matrix(matrix).unwrap_err(),
            ModelError::CostOverflow
        );
    }

    #[test]
    fn test_try_from_matrix_checks_diagonal() {
        let mut matrix = CostMatrix::<i32>::forbidden(3);
        assert!(Model::try_from_matrix(matrix.clone()).is_ok());
        matrix.set_cost(ci(2), ci(2), Cost::finite(0));
        assert_eq!(
            Model::try_from_matrix(matrix).unwrap_err(),
            ModelError::DiagonalNotForbidden { city: 2 }
        );
    }

    #[test]
    fn test_tour_cost_closes_the_cycle() {
        let model = sample();
        assert_eq!(model.tour_cost(&tour(&[0, 2, 3, 4, 1])), Cost::finite(32));
        assert_eq!(model.tour_cost(&tour(&[0, 1, 4, 3, 2])), Cost::finite(32));
        assert_eq!(model.tour_cost(&tour(&[0, 1, 2, 3, 4])), Cost::finite(10 + 20 + 4 + 7 + 12));
        assert_eq!(model.tour_cost(&[]), Cost::zero());
    }

    #[test]
    fn test_tour_cost_is_infinite_over_forbidden_edge() {
        let model = Model::<i64>::try_from_rows(vec![
            vec![None, Some(1), None],
            vec![Some(1), None, Some(1)],
            vec![Some(1), Some(1), None],
        ])
        .expect("valid model");
        assert!(model.tour_cost(&tour(&[0, 2, 1])).is_infinite());
        assert_eq!(model.tour_cost(&tour(&[0, 1, 2])), Cost::finite(3));
    }

    #[test]
    fn test_builder_defaults_to_forbidden_edges() {
        let model = ModelBuilder::<i64>::new(4).build().expect("valid model");
        assert!(
            CityIndex::range(4)
                .all(|r| CityIndex::range(4).all(|c| model.cost(r, c).is_infinite()))
        );
    }

    #[test]
    fn test_builder_sets_costs() {
        let mut builder = ModelBuilder::<i64>::new(3);
        builder
            .set_symmetric_cost(ci(0), ci(1), Some(2))
            .set_cost(ci(1), ci(2), Some(7))
            .set_cost(ci(2), ci(0), Some(9));
        assert_eq!(builder.num_cities(), 3);

        let model = builder.build().expect("valid model");
        assert_eq!(model.cost(ci(0), ci(1)), Cost::finite(2));
        assert_eq!(model.cost(ci(1), ci(0)), Cost::finite(2));
        assert_eq!(model.cost(ci(1), ci(2)), Cost::finite(7));
        assert!(model.cost(ci(2), ci(1)).is_infinite());
    }

    #[test]
    fn test_builder_reports_validation_errors() {
        assert_eq!(
            ModelBuilder::<i64>::new(0).build().unwrap_err(),
            ModelError::Empty
        );
        assert_eq!(
            ModelBuilder::<i64>::new(2).build().unwrap_err(),
            ModelError::TooFewCities { num_cities: 2 }
        );

        let mut builder = ModelBuilder::<i64>::new(3);
        builder.set_cost(ci(0), ci(0), Some(1));
        assert_eq!(
            builder.build().unwrap_err(),
            ModelError::DiagonalNotForbidden { city: 0 }
        );

        let mut builder = ModelBuilder::<i16>::new(3);
        builder
            .set_cost(ci(0), ci(1), Some(i16::MAX))
            .set_cost(ci(1), ci(2), Some(1))
            .set_cost(ci(2), ci(0), Some(1));
        assert_eq!(builder.build().unwrap_err(), ModelError::CostOverflow);
    }

    #[test]
    #[should_panic(expected = "called `ModelBuilder::set_cost` with city index out of bounds")]
    fn test_builder_panics_on_out_of_bounds_city() {
        ModelBuilder::<i64>::new(3).set_cost(ci(0), ci(3), Some(1));
    }

    #[test]
    fn test_complexity_counts_directed_tours() {
        let c = Complexity::new(3); // 2! = 2
        assert!((c.raw() - 2f64.log10()).abs() < 1e-12);
        assert_eq!(c.exponent(), 0);

        let c = Complexity::new(7); // 6! = 720
        assert_eq!(c.exponent(), 2);
        assert!((c.mantissa() - 7.2).abs() < 1e-9);
        assert_eq!(format!("{}", c), "7.20 × 10^2");

        let coverage = c.coverage(72).expect("finite space");
        assert!((coverage - 10.0).abs() < 1e-9);
        assert_eq!(Complexity::new(40).coverage(1), Some(0.0));
    }
}
