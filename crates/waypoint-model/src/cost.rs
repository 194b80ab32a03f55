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

//! # Edge Costs
//!
//! `Cost<T>` is a single machine word holding either a finite, non-negative
//! edge cost or the forbidden marker `INF`. The marker is encoded as the raw
//! value `-1`, so a cost matrix is a flat `Vec<Cost<T>>` with no tag bytes.
//!
//! ## Semantics
//!
//! - `INF` orders above every finite value, so `min` never picks it unless
//!   every candidate is `INF`.
//! - `INF` absorbs arithmetic: `INF + x = INF` and `INF - x = INF`.
//! - Finite sums saturate at `T::MAX` and stay finite.
//!
//! ```rust
//! use waypoint_model::cost::Cost;
//!
//! let a = Cost::finite(3i64);
//! let inf = Cost::<i64>::infinite();
//! assert!(inf > a);
//! assert_eq!(a.min(inf), a);
//! assert!(inf.saturating_sub(2).is_infinite());
//! assert_eq!(format!("{}", inf), "INF");
//! ```

use crate::num::CostNumeric;

#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cost<T>(T)
where
    T: CostNumeric;

impl<T> Cost<T>
where
    T: CostNumeric,
{
    const INFINITE_SENTINEL: T = T::MINUS_ONE;

    /// Creates a finite cost.
    ///
    /// # Panics
    ///
    /// Panics if `value` is negative.
    #[inline]
    pub fn finite(value: T) -> Self {
        assert!(
            value >= T::ZERO,
            "called `Cost::finite` with a negative value: {}",
            value
        );

        Cost(value)
    }

    /// The forbidden marker.
    #[inline]
    pub fn infinite() -> Self {
        Cost(Self::INFINITE_SENTINEL)
    }

    /// A finite cost of zero.
    #[inline]
    pub fn zero() -> Self {
        Cost(T::ZERO)
    }

    /// Maps `Some(v)` to a finite cost and `None` to `INF`.
    ///
    /// # Panics
    ///
    /// Panics if the contained value is negative.
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::finite(v),
            None => Self::infinite(),
        }
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.0 <= Self::INFINITE_SENTINEL
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        !self.is_infinite()
    }

    #[inline]
    pub fn into_option(self) -> Option<T> {
        if self.is_infinite() { None } else { Some(self.0) }
    }

    /// Returns the finite value, or `default` for `INF`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.into_option().unwrap_or(default)
    }

    /// Returns the raw encoding, `-1` for `INF`.
    #[inline]
    pub fn raw(&self) -> T {
        self.0
    }

    /// Adds two costs. `INF` on either side yields `INF`.
    ///
    /// A validated `Model` keeps every sum the solver forms below `T::MAX`
    /// (see `ModelError::CostOverflow`), so the saturation never triggers
    /// on costs taken from one.
    #[inline]
    pub fn saturating_add(self, other: Self) -> Self {
        if self.is_infinite() || other.is_infinite() {
            return Self::infinite();
        }
        Cost(self.0.saturating_add_val(other.0))
    }

    /// Subtracts a finite amount. `INF` stays `INF`.
    ///
    /// Callers subtract minima of the row or column the cell belongs to, so a
    /// finite result never drops below zero.
    #[inline]
    pub fn saturating_sub(self, amount: T) -> Self {
        if self.is_infinite() {
            return self;
        }

        let result = self.0.saturating_sub_val(amount);
        debug_assert!(
            result >= T::ZERO,
            "called `Cost::saturating_sub` with an amount larger than the cost: {} - {}",
            self.0,
            amount
        );

        Cost(result.max(T::ZERO))
    }
}

impl<T> Ord for Cost<T>
where
    T: CostNumeric,
{
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        match (self.is_infinite(), other.is_infinite()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.0.cmp(&other.0),
        }
    }
}

impl<T> PartialOrd for Cost<T>
where
    T: CostNumeric,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Default for Cost<T>
where
    T: CostNumeric,
{
    #[inline]
    fn default() -> Self {
        Self::infinite()
    }
}

impl<T> std::fmt::Debug for Cost<T>
where
    T: CostNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_infinite() {
            write!(f, "Cost(INF)")
        } else {
            write!(f, "Cost({:?})", self.0)
        }
    }
}

impl<T> std::fmt::Display for Cost<T>
where
    T: CostNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_infinite() {
            f.pad("INF")
        } else {
            f.pad(&self.0.to_string())
        }
    }
}

impl<T> From<Option<T>> for Cost<T>
where
    T: CostNumeric,
{
    #[inline]
    fn from(value: Option<T>) -> Self {
        Cost::from_option(value)
    }
}

impl<T> From<Cost<T>> for Option<T>
where
    T: CostNumeric,
{
    #[inline]
    fn from(value: Cost<T>) -> Self {
        value.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_and_infinite_roundtrip_through_option() {
        assert_eq!(Cost::finite(5i64).into_option(), Some(5));
        assert_eq!(Cost::<i64>::infinite().into_option(), None);
        assert_eq!(Cost::from(Some(0i32)), Cost::zero());
        assert!(Cost::<i32>::from(None).is_infinite());
        assert_eq!(Option::<i64>::from(Cost::finite(9i64)), Some(9));
    }

    #[test]
    #[should_panic(expected = "called `Cost::finite` with a negative value")]
    fn test_finite_rejects_negative_values() {
        let _ = Cost::finite(-3i64);
    }

    #[test]
    fn test_infinite_orders_above_every_finite_value() {
        let inf = Cost::<i64>::infinite();
        assert!(inf > Cost::finite(i64::MAX));
        assert!(Cost::finite(0i64) < Cost::finite(1));
        assert_eq!(inf.cmp(&Cost::infinite()), std::cmp::Ordering::Equal);
    }

    #[test]
    fn test_min_picks_infinite_only_when_everything_is_infinite() {
        let values = [Cost::<i64>::infinite(), Cost::finite(4), Cost::finite(2)];
        assert_eq!(values.iter().copied().min(), Some(Cost::finite(2)));

        let all_inf = [Cost::<i64>::infinite(); 3];
        assert!(all_inf.iter().copied().min().is_some_and(|c| c.is_infinite()));
    }

    #[test]
    fn test_saturating_add_absorbs_infinite() {
        let inf = Cost::<i32>::infinite();
        assert!(inf.saturating_add(Cost::finite(1)).is_infinite());
        assert!(Cost::finite(1).saturating_add(inf).is_infinite());
        assert!(inf.saturating_add(inf).is_infinite());
        assert_eq!(Cost::finite(2).saturating_add(Cost::finite(3)), Cost::finite(5));
        assert_eq!(
            Cost::finite(0).saturating_add(Cost::finite(i32::MAX)),
            Cost::finite(i32::MAX)
        );
    }

    #[test]
    fn test_saturating_sub_keeps_infinite() {
        assert!(Cost::<i64>::infinite().saturating_sub(10).is_infinite());
        assert_eq!(Cost::finite(10i64).saturating_sub(3), Cost::finite(7));
        assert_eq!(Cost::finite(3i64).saturating_sub(3), Cost::zero());
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(format!("{}", Cost::finite(12i64)), "12");
        assert_eq!(format!("{}", Cost::<i64>::infinite()), "INF");
        assert_eq!(format!("{:>4}", Cost::<i64>::infinite()), " INF");
        assert_eq!(format!("{:?}", Cost::finite(12i64)), "Cost(12)");
        assert_eq!(format!("{:?}", Cost::<i64>::infinite()), "Cost(INF)");
    }

    #[test]
    fn test_default_is_infinite() {
        assert!(Cost::<i16>::default().is_infinite());
        assert_eq!(Cost::<i16>::infinite().unwrap_or(7), 7);
        assert_eq!(Cost::finite(3i16).unwrap_or(7), 3);
        assert_eq!(Cost::<i16>::infinite().raw(), -1);
    }
}
