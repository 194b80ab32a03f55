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

/// Integer types with a constant for -1.
///
/// Only signed primitives implement this trait. The model uses the value as
/// the reserved sentinel for forbidden edges.
pub trait MinusOne {
    /// The value -1 of the implementing type.
    const MINUS_ONE: Self;
}

/// Integer types with a constant for 0.
pub trait Zero {
    /// The value 0 of the implementing type.
    const ZERO: Self;
}

macro_rules! impl_minus_one {
    ($($t:ty),* $(,)?) => {
        $(
            impl MinusOne for $t {
                const MINUS_ONE: Self = -1;
            }
        )*
    };
}

macro_rules! impl_zero {
    ($($t:ty),* $(,)?) => {
        $(
            impl Zero for $t {
                const ZERO: Self = 0;
            }
        )*
    };
}

impl_minus_one!(i8, i16, i32, i64, i128, isize);
impl_zero!(i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize);

#[cfg(test)]
mod tests {
    use super::*;

    fn minus_one<T: MinusOne>() -> T {
        T::MINUS_ONE
    }

    fn zero<T: Zero>() -> T {
        T::ZERO
    }

    #[test]
    fn test_minus_one_constants() {
        assert_eq!(minus_one::<i8>(), -1i8);
        assert_eq!(minus_one::<i32>(), -1i32);
        assert_eq!(minus_one::<i64>(), -1i64);
        assert_eq!(minus_one::<isize>(), -1isize);
    }

    #[test]
    fn test_zero_constants() {
        assert_eq!(zero::<u8>(), 0u8);
        assert_eq!(zero::<i32>(), 0i32);
        assert_eq!(zero::<u64>(), 0u64);
        assert_eq!(zero::<usize>(), 0usize);
    }
}
