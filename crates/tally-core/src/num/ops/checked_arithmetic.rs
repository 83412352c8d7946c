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

use core::ops::Add;

/// Checked addition by value.
///
/// Mirrors the inherent `checked_add` of the integer primitives. The memoized
/// multiplier relies on it for every doubling and every partial sum, so that
/// an overflowing product is reported instead of silently wrapped.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::ops::checked_arithmetic::CheckedAddVal;
/// let half: u64 = 1 << 62;
/// assert_eq!(half.checked_add_val(half), Some(1 << 63));
///
/// let top: u64 = 1 << 63;
/// assert_eq!(top.checked_add_val(top), None);
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value, returning `None` if overflow occurs.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

macro_rules! impl_checked_add_val {
    ($($t:ty),* $(,)?) => {
        $(
            impl CheckedAddVal for $t {
                #[inline(always)]
                fn checked_add_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_add(self, v)
                }
            }
        )*
    };
}

impl_checked_add_val!(u8, u16, u32, u64, u128, usize);
impl_checked_add_val!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::CheckedAddVal;

    #[test]
    fn test_checked_add_val_unsigned_boundary() {
        assert_eq!(254u8.checked_add_val(1), Some(255));
        assert_eq!(255u8.checked_add_val(1), None);
        assert_eq!(u64::MAX.checked_add_val(0), Some(u64::MAX));
    }

    #[test]
    fn test_checked_add_val_signed_boundary() {
        assert_eq!(i64::MAX.checked_add_val(1), None);
        assert_eq!(i64::MIN.checked_add_val(-1), None);
        assert_eq!((-5i32).checked_add_val(7), Some(2));
    }

    #[test]
    fn test_checked_add_val_matches_inherent() {
        for a in 0..=u8::MAX {
            for b in [0u8, 1, 127, 128, 255] {
                assert_eq!(a.checked_add_val(b), a.checked_add(b));
            }
        }
    }
}
