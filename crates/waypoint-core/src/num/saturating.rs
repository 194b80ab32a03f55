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

use core::ops::{Add, Sub};

macro_rules! saturating_binary_val {
    ($trait_name:ident, $method:ident, $src_method:ident, [$($t:ty),* $(,)?]) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: Self) -> Self {
                    <$t>::$src_method(self, v)
                }
            }
        )*
    };
}

/// Saturating addition by value.
///
/// Clamps at the numeric bounds of the type instead of wrapping. Path costs
/// and lower bounds are accumulated with this operation, so an extreme input
/// degrades into a very large bound rather than a negative one.
///
/// # Examples
///
/// ```rust
/// # use waypoint_core::num::saturating::SaturatingAddVal;
///
/// assert_eq!(250u8.saturating_add_val(10), 255);
/// assert_eq!(i32::MAX.saturating_add_val(1), i32::MAX);
/// assert_eq!((-120i8).saturating_add_val(-20), -128);
/// ```
pub trait SaturatingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs saturating addition by value.
    fn saturating_add_val(self, v: Self) -> Self;
}

/// Saturating subtraction by value.
///
/// # Examples
///
/// ```rust
/// # use waypoint_core::num::saturating::SaturatingSubVal;
///
/// assert_eq!(5u8.saturating_sub_val(10), 0);
/// assert_eq!(i64::MIN.saturating_sub_val(1), i64::MIN);
/// ```
pub trait SaturatingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs saturating subtraction by value.
    fn saturating_sub_val(self, v: Self) -> Self;
}

saturating_binary_val!(
    SaturatingAddVal,
    saturating_add_val,
    saturating_add,
    [u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize]
);

saturating_binary_val!(
    SaturatingSubVal,
    saturating_sub_val,
    saturating_sub,
    [u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize]
);

#[cfg(test)]
mod tests {
    use super::*;

    fn add<T: SaturatingAddVal>(a: T, b: T) -> T {
        a.saturating_add_val(b)
    }

    fn sub<T: SaturatingSubVal>(a: T, b: T) -> T {
        a.saturating_sub_val(b)
    }

    #[test]
    fn test_saturating_add_val() {
        assert_eq!(add(255u8, 1u8), 255u8);
        assert_eq!(add(127i8, 1i8), 127i8);
        assert_eq!(add(-128i8, -1i8), -128i8);
        assert_eq!(add(19i64, 9i64), 28i64);
    }

    #[test]
    fn test_saturating_sub_val() {
        assert_eq!(sub(0u8, 1u8), 0u8);
        assert_eq!(sub(-128i8, 1i8), -128i8);
        assert_eq!(sub(127i8, -1i8), 127i8);
        assert_eq!(sub(45i32, 3i32), 42i32);
    }
}
