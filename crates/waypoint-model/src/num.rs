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

//! # Cost Numeric Trait
//!
//! `CostNumeric` gathers the integer capabilities the model and the solver
//! need from an edge-cost type into one alias, so generic signatures stay
//! short. Any signed primitive (`i8` through `i64`, `isize`) qualifies.
//!
//! Non-negative values are real costs; `-1` is reserved as the sentinel for a
//! forbidden edge (see `Cost`).

use std::hash::Hash;

use num_traits::{PrimInt, Signed};
use waypoint_core::num::{
    constants::{MinusOne, Zero},
    saturating::{SaturatingAddVal, SaturatingSubVal},
};

/// A trait alias for the integer types usable as edge costs.
///
/// # Note
///
/// `i128` satisfies the bounds as well but is noticeably slower on most
/// targets; prefer `i64` for large costs.
pub trait CostNumeric:
    PrimInt
    + Signed
    + std::fmt::Debug
    + std::fmt::Display
    + MinusOne
    + Zero
    + SaturatingAddVal
    + SaturatingSubVal
    + Send
    + Sync
    + Hash
{
}

impl<T> CostNumeric for T where
    T: PrimInt
        + Signed
        + std::fmt::Debug
        + std::fmt::Display
        + MinusOne
        + Zero
        + SaturatingAddVal
        + SaturatingSubVal
        + Send
        + Sync
        + Hash
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepts<T: CostNumeric>(value: T) -> T {
        value.saturating_add_val(T::ZERO)
    }

    #[test]
    fn test_signed_primitives_are_cost_numeric() {
        assert_eq!(accepts(3i8), 3);
        assert_eq!(accepts(3i16), 3);
        assert_eq!(accepts(3i32), 3);
        assert_eq!(accepts(3i64), 3);
        assert_eq!(accepts(3isize), 3);
    }
}
