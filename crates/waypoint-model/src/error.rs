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

//! Errors raised while validating a travelling-salesman instance.

/// Why an input matrix was rejected.
///
/// Every variant describes malformed input. A model that has been built
/// successfully is always safe to hand to the solver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// The matrix has no rows at all.
    #[error("cost matrix is empty")]
    Empty,
    /// A row has a different length than the number of rows.
    #[error("cost matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// Fewer than three cities do not admit a meaningful tour.
    #[error("a tour needs at least 3 cities, got {num_cities}")]
    TooFewCities { num_cities: usize },
    /// A diagonal cell carries a finite cost, i.e. a self-loop is allowed.
    #[error("diagonal entry ({city}, {city}) must be forbidden")]
    DiagonalNotForbidden { city: usize },
    /// An off-diagonal cell carries a negative cost.
    #[error("edge ({from}, {to}) has a negative cost")]
    NegativeCost { from: usize, to: usize },
    /// The costs are so large that tour costs or lower bounds could exceed
    /// the range of the cost type.
    #[error("edge costs are too large for the cost type: the sum of all row and column maxima overflows")]
    CostOverflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_cell() {
        assert_eq!(
            ModelError::NotSquare {
                row: 2,
                len: 4,
                expected: 5
            }
            .to_string(),
            "cost matrix is not square: row 2 has 4 entries, expected 5"
        );
        assert_eq!(
            ModelError::DiagonalNotForbidden { city: 3 }.to_string(),
            "diagonal entry (3, 3) must be forbidden"
        );
        assert_eq!(
            ModelError::NegativeCost { from: 0, to: 1 }.to_string(),
            "edge (0, 1) has a negative cost"
        );
        assert_eq!(
            ModelError::TooFewCities { num_cities: 2 }.to_string(),
            "a tour needs at least 3 cities, got 2"
        );
        assert_eq!(ModelError::Empty.to_string(), "cost matrix is empty");
        assert_eq!(
            ModelError::CostOverflow.to_string(),
            "edge costs are too large for the cost type: the sum of all row and column maxima overflows"
        );
    }
}
