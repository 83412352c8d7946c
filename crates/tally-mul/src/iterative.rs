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

//! Iterative accumulation
//!
//! Adds the larger magnitude to an accumulator once per unit of the smaller
//! magnitude. This is the loop form of `RecursiveMultiplier`: constant stack
//! usage, but still `O(n)` additions in the smaller magnitude, so large
//! operands make it slow rather than crash.
//!
//! The additions wrap, so the result equals `lhs.wrapping_mul(rhs)`.

use crate::{error::MultiplyError, multiplier::Multiplier, stats::MultiplyStatistics};
use num_traits::{PrimInt, Unsigned};
use tally_core::num::{
    magnitude::{SignedMagnitude, normalize},
    ops::wrapping_arithmetic::WrappingAddVal,
};

/// Multiplies with a counted loop of additions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoopMultiplier {
    statistics: MultiplyStatistics,
}

impl LoopMultiplier {
    /// Creates a new `LoopMultiplier`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes `lhs * rhs` with native wraparound on overflow.
    pub fn product<T>(&mut self, lhs: T, rhs: T) -> T
    where
        T: SignedMagnitude,
    {
        tracing::trace!(strategy = "loop", %lhs, %rhs, "multiplying");
        self.statistics.reset();

        let normalized = normalize(lhs, rhs);
        let magnitude = self.accumulate(normalized.larger(), normalized.smaller());
        normalized.apply_sign_wrapping(magnitude)
    }

    #[inline]
    fn accumulate<U>(&mut self, addend: U, count: U) -> U
    where
        U: PrimInt + Unsigned + WrappingAddVal,
    {
        let mut sum = U::zero();
        let mut remaining = count;
        while !remaining.is_zero() {
            sum = sum.wrapping_add_val(addend);
            remaining = remaining - U::one();
            self.statistics.additions += 1;
        }
        sum
    }
}

impl<T> Multiplier<T> for LoopMultiplier
where
    T: SignedMagnitude,
{
    #[inline]
    fn name(&self) -> &str {
        "LoopMultiplier"
    }

    #[inline]
    fn multiply(&mut self, lhs: T, rhs: T) -> Result<T, MultiplyError<T>> {
        Ok(self.product(lhs, rhs))
    }

    #[inline]
    fn statistics(&self) -> &MultiplyStatistics {
        &self.statistics
    }
}

/// Multiplies `lhs` by `rhs` using a loop of additions.
///
/// Overflow wraps like `wrapping_mul`. Runs in time linear in the smaller
/// operand magnitude.
///
/// # Examples
///
/// ```rust
/// # use tally_mul::iterative::loop_multiply;
/// assert_eq!(loop_multiply(10i64, 11), 110);
/// assert_eq!(loop_multiply(-1000i64, -1000), 1_000_000);
/// ```
#[inline]
pub fn loop_multiply<T>(lhs: T, rhs: T) -> T
where
    T: SignedMagnitude,
{
    LoopMultiplier::new().product(lhs, rhs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recursive::recursive_multiply;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_zero_times_zero() {
        assert_eq!(loop_multiply(0i64, 0), 0);
    }

    #[test]
    fn test_small_products() {
        assert_eq!(loop_multiply(10i64, 11), 110);
        assert_eq!(loop_multiply(0i64, 1), 0);
        assert_eq!(loop_multiply(1i64, 0), 0);
        assert_eq!(loop_multiply(0i64, -1), 0);
        assert_eq!(loop_multiply(1i64, -1), -1);
        assert_eq!(loop_multiply(511i64, 510), 260_610);
    }

    #[test]
    fn test_negative_operands() {
        assert_eq!(loop_multiply(-1000i64, -1000), 1_000_000);
        assert_eq!(loop_multiply(-1000i64, 999), -999_000);
    }

    #[test]
    fn test_max_times_one() {
        assert_eq!(loop_multiply(i64::MAX, 1), i64::MAX);
        assert_eq!(loop_multiply(-1, i64::MAX), -i64::MAX);
    }

    #[test]
    fn test_min_operand_wraps_natively() {
        assert_eq!(loop_multiply(i64::MIN, 1), i64::MIN);
        assert_eq!(loop_multiply(i64::MIN, -1), i64::MIN);
        assert_eq!(loop_multiply(-2, i64::MIN), 0);
    }

    #[test]
    fn test_exhaustive_i8_matches_wrapping_mul() {
        for a in i8::MIN..=i8::MAX {
            for b in i8::MIN..=i8::MAX {
                assert_eq!(loop_multiply(a, b), a.wrapping_mul(b), "{a} * {b}");
            }
        }
    }

    #[test]
    fn test_exhaustive_i16_by_small_factor() {
        for a in i16::MIN..=i16::MAX {
            for b in -4i16..=4 {
                assert_eq!(loop_multiply(a, b), a.wrapping_mul(b), "{a} * {b}");
            }
        }
    }

    #[test]
    fn test_random_pairs_match_wrapping_mul() {
        let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
        for _ in 0..2_000 {
            let a: i64 = rng.random();
            let b: i64 = rng.random_range(-4_096..=4_096);
            assert_eq!(loop_multiply(a, b), a.wrapping_mul(b), "{a} * {b}");
            assert_eq!(loop_multiply(b, a), a.wrapping_mul(b), "{b} * {a}");
        }
    }

    #[test]
    fn test_agrees_with_recursive() {
        let mut rng = StdRng::seed_from_u64(123456);
        for _ in 0..500 {
            let a: i64 = rng.random_range(-1_000_000..=1_000_000);
            let b: i64 = rng.random_range(-512..=512);
            assert_eq!(loop_multiply(a, b), recursive_multiply(a, b));
        }
    }

    #[test]
    fn test_sign_correctness() {
        for (a, b) in [(3i64, 7), (120, 45), (1 << 40, 3)] {
            assert_eq!(loop_multiply(-a, b), -loop_multiply(a, b));
            assert_eq!(loop_multiply(a, -b), -loop_multiply(a, b));
        }
    }

    #[test]
    fn test_additions_equal_smaller_magnitude() {
        let mut multiplier = LoopMultiplier::new();
        assert_eq!(multiplier.product(12i64, -250), -3000);

        let stats = Multiplier::<i64>::statistics(&multiplier);
        assert_eq!(stats.additions, 12);
        assert_eq!(stats.max_recursion_depth, 0);
    }
}
