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

use core::ops::{Add, Neg};

/// Wrapping addition by value.
///
/// Adds modulo `2^BITS`, which is what the accumulating multipliers use to
/// reproduce the native two's complement overflow behavior regardless of
/// whether overflow checks are enabled in the build profile.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::ops::wrapping_arithmetic::WrappingAddVal;
/// assert_eq!(250u8.wrapping_add_val(10), 4);
/// assert_eq!(i8::MAX.wrapping_add_val(1), i8::MIN);
/// ```
pub trait WrappingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs wrapping addition by value.
    fn wrapping_add_val(self, v: Self) -> Self;
}

/// Wrapping negation by value.
///
/// `MIN.wrapping_neg_val()` is `MIN`, every other value negates exactly.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::ops::wrapping_arithmetic::WrappingNegVal;
/// assert_eq!(42i16.wrapping_neg_val(), -42);
/// assert_eq!(i16::MIN.wrapping_neg_val(), i16::MIN);
/// ```
pub trait WrappingNegVal: Sized + Neg<Output = Self> {
    /// Performs wrapping negation by value.
    fn wrapping_neg_val(self) -> Self;
}

macro_rules! impl_wrapping_add_val {
    ($($t:ty),* $(,)?) => {
        $(
            impl WrappingAddVal for $t {
                #[inline(always)]
                fn wrapping_add_val(self, v: $t) -> $t {
                    <$t>::wrapping_add(self, v)
                }
            }
        )*
    };
}

macro_rules! impl_wrapping_neg_val {
    ($($t:ty),* $(,)?) => {
        $(
            impl WrappingNegVal for $t {
                #[inline(always)]
                fn wrapping_neg_val(self) -> $t {
                    <$t>::wrapping_neg(self)
                }
            }
        )*
    };
}

impl_wrapping_add_val!(u8, u16, u32, u64, u128, usize);
impl_wrapping_add_val!(i8, i16, i32, i64, i128, isize);

// Unsigned primitives do not implement `Neg`.
impl_wrapping_neg_val!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::{WrappingAddVal, WrappingNegVal};

    #[test]
    fn test_wrapping_add_val_wraps_unsigned() {
        assert_eq!(u64::MAX.wrapping_add_val(1), 0);
        assert_eq!(u64::MAX.wrapping_add_val(u64::MAX), u64::MAX - 1);
    }

    #[test]
    fn test_wrapping_add_val_wraps_signed() {
        assert_eq!(i64::MAX.wrapping_add_val(1), i64::MIN);
        assert_eq!(i64::MIN.wrapping_add_val(-1), i64::MAX);
        assert_eq!(3i64.wrapping_add_val(4), 7);
    }

    #[test]
    fn test_wrapping_neg_val() {
        assert_eq!(0i64.wrapping_neg_val(), 0);
        assert_eq!(i64::MAX.wrapping_neg_val(), i64::MIN + 1);
        assert_eq!(i64::MIN.wrapping_neg_val(), i64::MIN);
        assert_eq!(i128::MIN.wrapping_neg_val(), i128::MIN);
    }
}
