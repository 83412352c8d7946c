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

//! Sign and magnitude normalization.
//!
//! Every multiplier in the workspace works on magnitudes and applies the
//! sign once at the end. `normalize` computes the result sign and the two
//! operand magnitudes, ordered so that the larger magnitude comes first:
//! the accumulating strategies then iterate (or recurse) over the smaller
//! one, which only affects speed, never the result.
//!
//! Magnitudes live in the unsigned counterpart of the signed type
//! (`u64` for `i64`). This keeps `|MIN|` representable, so `MIN` needs no
//! special casing at this level. Converting a magnitude back into the signed
//! type is either wrapping (`apply_sign_wrapping`, native overflow
//! semantics) or exact (`apply_sign_checked`).

use crate::num::ops::{
    checked_arithmetic::CheckedAddVal,
    wrapping_arithmetic::{WrappingAddVal, WrappingNegVal},
};
use num_traits::{PrimInt, Signed, Unsigned};

/// A signed primitive integer paired with the unsigned type that holds its
/// magnitude.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::magnitude::SignedMagnitude;
/// assert_eq!((-7i64).magnitude(), 7u64);
/// assert_eq!(i64::MIN.magnitude(), 1u64 << 63);
/// assert_eq!(i64::VALUE_BITS, 63);
/// assert_eq!(<i64 as SignedMagnitude>::max_magnitude(true), 1u64 << 63);
/// assert_eq!(<i64 as SignedMagnitude>::max_magnitude(false), (1u64 << 63) - 1);
/// ```
pub trait SignedMagnitude:
    PrimInt + Signed + WrappingNegVal + std::fmt::Debug + std::fmt::Display + Send + Sync
{
    /// The unsigned type holding `|self|` for every value, including `MIN`.
    type Magnitude: PrimInt
        + Unsigned
        + CheckedAddVal
        + WrappingAddVal
        + std::fmt::Debug
        + std::fmt::Display
        + Send
        + Sync;

    /// Number of bits available to a non-negative value (`BITS - 1`).
    const VALUE_BITS: u32;

    /// Returns the absolute value as an unsigned magnitude.
    fn magnitude(self) -> Self::Magnitude;

    /// Reinterprets a magnitude as a signed value, wrapping modulo `2^BITS`.
    fn from_magnitude_wrapping(magnitude: Self::Magnitude) -> Self;

    /// The largest magnitude a result with the given sign can have:
    /// `MAX` for non-negative results and `|MIN| = MAX + 1` for negative ones.
    fn max_magnitude(negative: bool) -> Self::Magnitude;
}

macro_rules! impl_signed_magnitude {
    ($($t:ty => $u:ty),* $(,)?) => {
        $(
            impl SignedMagnitude for $t {
                type Magnitude = $u;

                const VALUE_BITS: u32 = <$t>::BITS - 1;

                #[inline(always)]
                fn magnitude(self) -> $u {
                    self.unsigned_abs()
                }

                #[inline(always)]
                fn from_magnitude_wrapping(magnitude: $u) -> $t {
                    magnitude as $t
                }

                #[inline(always)]
                fn max_magnitude(negative: bool) -> $u {
                    if negative {
                        <$t>::MIN.unsigned_abs()
                    } else {
                        <$t>::MAX as $u
                    }
                }
            }
        )*
    };
}

impl_signed_magnitude!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
);

/// Two operands reduced to a result sign and an ordered magnitude pair.
///
/// Invariant: `larger >= smaller`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalized<T>
where
    T: SignedMagnitude,
{
    negative: bool,
    larger: T::Magnitude,
    smaller: T::Magnitude,
}

impl<T> Normalized<T>
where
    T: SignedMagnitude,
{
    /// Returns `true` if exactly one of the operands was negative.
    #[inline(always)]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// The larger of the two operand magnitudes.
    #[inline(always)]
    pub fn larger(&self) -> T::Magnitude {
        self.larger
    }

    /// The smaller of the two operand magnitudes.
    #[inline(always)]
    pub fn smaller(&self) -> T::Magnitude {
        self.smaller
    }

    /// The largest product magnitude that still fits the signed result type.
    #[inline(always)]
    pub fn max_magnitude(&self) -> T::Magnitude {
        T::max_magnitude(self.negative)
    }

    /// Applies the result sign to `magnitude`, wrapping modulo `2^BITS`.
    ///
    /// For any magnitude product computed with wrapping additions this yields
    /// exactly `lhs.wrapping_mul(rhs)`.
    #[inline]
    pub fn apply_sign_wrapping(&self, magnitude: T::Magnitude) -> T {
        let value = T::from_magnitude_wrapping(magnitude);
        if self.negative {
            value.wrapping_neg_val()
        } else {
            value
        }
    }

    /// Applies the result sign to `magnitude`, or returns `None` if the signed
    /// result is not representable.
    #[inline]
    pub fn apply_sign_checked(&self, magnitude: T::Magnitude) -> Option<T> {
        if magnitude > self.max_magnitude() {
            return None;
        }
        Some(self.apply_sign_wrapping(magnitude))
    }
}

/// Splits `a` and `b` into the sign of their product and their magnitudes,
/// larger magnitude first. Zero counts as non-negative.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::magnitude::normalize;
/// let n = normalize(-3i64, 12);
/// assert!(n.is_negative());
/// assert_eq!(n.larger(), 12);
/// assert_eq!(n.smaller(), 3);
/// ```
#[inline]
pub fn normalize<T>(a: T, b: T) -> Normalized<T>
where
    T: SignedMagnitude,
{
    let negative = a.is_negative() != b.is_negative();
    let (a_abs, b_abs) = (a.magnitude(), b.magnitude());
    let (larger, smaller) = if a_abs < b_abs {
        (b_abs, a_abs)
    } else {
        (a_abs, b_abs)
    };

    Normalized {
        negative,
        larger,
        smaller,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_orders_magnitudes() {
        let n = normalize(3i64, 11);
        assert_eq!((n.larger(), n.smaller()), (11, 3));

        let n = normalize(11i64, 3);
        assert_eq!((n.larger(), n.smaller()), (11, 3));

        let n = normalize(7i64, -7);
        assert_eq!((n.larger(), n.smaller()), (7, 7));
    }

    #[test]
    fn test_normalize_sign() {
        assert!(!normalize(2i64, 3).is_negative());
        assert!(normalize(-2i64, 3).is_negative());
        assert!(normalize(2i64, -3).is_negative());
        assert!(!normalize(-2i64, -3).is_negative());
    }

    #[test]
    fn test_normalize_zero_is_non_negative() {
        assert!(!normalize(0i64, 5).is_negative());
        assert!(normalize(0i64, -5).is_negative());
        assert!(!normalize(0i64, 0).is_negative());
    }

    #[test]
    fn test_normalize_min_magnitude_is_representable() {
        let n = normalize(i64::MIN, 1);
        assert!(n.is_negative());
        assert_eq!(n.larger(), 1u64 << 63);
        assert_eq!(n.smaller(), 1);

        let n = normalize(i64::MIN, i64::MAX);
        assert_eq!(n.larger(), 1u64 << 63);
        assert_eq!(n.smaller(), i64::MAX as u64);
    }

    #[test]
    fn test_apply_sign_wrapping_matches_wrapping_mul() {
        for a in i8::MIN..=i8::MAX {
            for b in i8::MIN..=i8::MAX {
                let n = normalize(a, b);
                let magnitude = n.larger().wrapping_mul(n.smaller());
                assert_eq!(n.apply_sign_wrapping(magnitude), a.wrapping_mul(b));
            }
        }
    }

    #[test]
    fn test_apply_sign_checked_bounds() {
        let positive = normalize(1i64, 1);
        assert_eq!(positive.apply_sign_checked(i64::MAX as u64), Some(i64::MAX));
        assert_eq!(positive.apply_sign_checked(1u64 << 63), None);

        let negative = normalize(-1i64, 1);
        assert_eq!(negative.apply_sign_checked(1u64 << 63), Some(i64::MIN));
        assert_eq!(negative.apply_sign_checked((1u64 << 63) + 1), None);
        assert_eq!(negative.apply_sign_checked(0), Some(0));
    }

    #[test]
    fn test_value_bits() {
        assert_eq!(i8::VALUE_BITS, 7);
        assert_eq!(i64::VALUE_BITS, 63);
        assert_eq!(i128::VALUE_BITS, 127);
    }
}
