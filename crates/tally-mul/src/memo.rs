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

//! Memoized power-of-two decomposition
//!
//! Decomposes the smaller magnitude `b` into its binary digits and sums the
//! matching power-of-two multiples of the larger magnitude `a`:
//! `a * b = sum(a * 2^k for every set bit k of b)`.
//!
//! The multiples come from a doubling chain, `value(k) = value(k - 1) * 2`
//! with `value(0) = a`, computed recursively and cached in a per-call
//! `MemoTable`. Bits are scanned from the highest position down, so the
//! first set bit fills the chain and every later set bit is a table hit.
//! This costs `O(log b)` doublings plus `O(popcount(b))` additions.
//!
//! # Overflow
//!
//! Unlike the accumulating strategies this one never returns a wrapped
//! value. Every doubling and every partial sum is checked, and the running
//! sum is compared against the largest representable result magnitude after
//! each addition. A product that does not fit yields
//! `MultiplyError::Overflow`.

use crate::{error::MultiplyError, multiplier::Multiplier, stats::MultiplyStatistics};
use num_traits::{PrimInt, Unsigned};
use smallvec::{SmallVec, smallvec};
use tally_core::num::{
    magnitude::{SignedMagnitude, normalize},
    ops::checked_arithmetic::CheckedAddVal,
};

/// Slots stored inline; enough for every type up to 64 bits.
const INLINE_MEMO_SLOTS: usize = 62;

/// Cache of power-of-two multiples of a single magnitude.
///
/// Slot `k - 1` holds `a * 2^k` for bit position `k` in `1..=len`. Bit 0
/// needs no slot, as `a * 2^0 = a`. Slots are written at most once; every
/// slot carries its own presence flag, so a cached zero is never confused
/// with an empty slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoTable<U>
where
    U: PrimInt + Unsigned,
{
    slots: SmallVec<[Option<U>; INLINE_MEMO_SLOTS]>,
}

impl<U> MemoTable<U>
where
    U: PrimInt + Unsigned,
{
    /// Creates an empty table covering bit positions `1..=max_bit`.
    #[inline]
    pub fn new(max_bit: u32) -> Self {
        Self {
            slots: smallvec![None; max_bit as usize],
        }
    }

    /// Returns the highest bit position the table can hold.
    #[inline(always)]
    pub fn max_bit(&self) -> u32 {
        self.slots.len() as u32
    }

    /// Returns the number of filled slots.
    #[inline]
    pub fn num_filled(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns the cached multiple for `bit`, if present.
    ///
    /// # Panics
    ///
    /// Panics if `bit` is zero or greater than `max_bit()`.
    #[inline]
    pub fn get(&self, bit: u32) -> Option<U> {
        assert!(
            (1..=self.max_bit()).contains(&bit),
            "called `MemoTable::get` with bit {} outside 1..={}",
            bit,
            self.max_bit()
        );
        self.slots[(bit - 1) as usize]
    }

    /// Stores the multiple for `bit`.
    ///
    /// # Panics
    ///
    /// Panics if `bit` is zero or greater than `max_bit()`. In debug builds,
    /// also panics if the slot is already filled.
    #[inline]
    pub fn fill(&mut self, bit: u32, value: U) {
        assert!(
            (1..=self.max_bit()).contains(&bit),
            "called `MemoTable::fill` with bit {} outside 1..={}",
            bit,
            self.max_bit()
        );
        let slot = &mut self.slots[(bit - 1) as usize];
        debug_assert!(
            slot.is_none(),
            "called `MemoTable::fill` on already filled bit {}",
            bit
        );
        *slot = Some(value);
    }
}

/// Multiplies by summing memoized power-of-two multiples, failing on overflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoMultiplier {
    statistics: MultiplyStatistics,
}

impl MemoMultiplier {
    /// Creates a new `MemoMultiplier`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes `lhs * rhs` exactly.
    ///
    /// Returns `MultiplyError::Overflow` if the product is not representable
    /// in `T`. `MIN` is a valid result: `MIN * 1` succeeds, `MIN * -1` fails.
    pub fn product<T>(&mut self, lhs: T, rhs: T) -> Result<T, MultiplyError<T>>
    where
        T: SignedMagnitude,
    {
        tracing::trace!(strategy = "memo", %lhs, %rhs, "multiplying");
        self.statistics.reset();

        let normalized = normalize(lhs, rhs);
        let limit = normalized.max_magnitude();

        self.magnitude_product(normalized.larger(), normalized.smaller(), limit, T::VALUE_BITS)
            .and_then(|magnitude| normalized.apply_sign_checked(magnitude))
            .ok_or_else(|| {
                tracing::debug!(strategy = "memo", %lhs, %rhs, "product overflowed");
                MultiplyError::Overflow { lhs, rhs }
            })
    }

    /// Returns `larger * smaller` if it does not exceed `limit`.
    fn magnitude_product<U>(
        &mut self,
        larger: U,
        smaller: U,
        limit: U,
        value_bits: u32,
    ) -> Option<U>
    where
        U: PrimInt + Unsigned + CheckedAddVal,
    {
        if smaller.is_zero() {
            return Some(U::zero());
        }

        // A smaller magnitude using the sign bit implies larger >= smaller
        // >= 2^value_bits, far beyond any representable product.
        if smaller.leading_zeros() < U::zero().count_zeros() - value_bits {
            return None;
        }

        let mut memo = MemoTable::new(value_bits - 1);
        let mut result = if smaller & U::one() == U::one() {
            larger
        } else {
            U::zero()
        };

        for bit in (1..value_bits).rev() {
            if (smaller >> bit as usize) & U::one() != U::one() {
                continue;
            }

            let contribution = self.power_of_two_multiple(larger, bit, &mut memo, 1)?;
            result = result.checked_add_val(contribution)?;
            self.statistics.additions += 1;
            if result > limit {
                return None;
            }
        }

        Some(result)
    }

    /// Returns `larger * 2^bit`, reading it from `memo` or doubling the
    /// multiple for `bit - 1`.
    fn power_of_two_multiple<U>(
        &mut self,
        larger: U,
        bit: u32,
        memo: &mut MemoTable<U>,
        depth: u64,
    ) -> Option<U>
    where
        U: PrimInt + Unsigned + CheckedAddVal,
    {
        if bit == 0 {
            return Some(larger);
        }
        if let Some(cached) = memo.get(bit) {
            self.statistics.memo_hits += 1;
            return Some(cached);
        }

        self.statistics.on_depth(depth);
        let half = self.power_of_two_multiple(larger, bit - 1, memo, depth + 1)?;
        let doubled = half.checked_add_val(half)?;
        self.statistics.doublings += 1;

        memo.fill(bit, doubled);
        self.statistics.memo_fills += 1;
        Some(doubled)
    }
}

impl<T> Multiplier<T> for MemoMultiplier
where
    T: SignedMagnitude,
{
    #[inline]
    fn name(&self) -> &str {
        "MemoMultiplier"
    }

    #[inline]
    fn multiply(&mut self, lhs: T, rhs: T) -> Result<T, MultiplyError<T>> {
        self.product(lhs, rhs)
    }

    #[inline]
    fn statistics(&self) -> &MultiplyStatistics {
        &self.statistics
    }
}

/// Multiplies `lhs` by `rhs` by summing memoized power-of-two multiples.
///
/// Returns the exact product, or `MultiplyError::Overflow` if it is not
/// representable.
///
/// # Examples
///
/// ```rust
/// # use tally_mul::memo::memo_multiply;
/// # use tally_mul::error::MultiplyError;
/// assert_eq!(memo_multiply(10i64, 11), Ok(110));
/// assert_eq!(
///     memo_multiply(i64::MAX, i64::MAX),
///     Err(MultiplyError::Overflow { lhs: i64::MAX, rhs: i64::MAX })
/// );
/// ```
#[inline]
pub fn memo_multiply<T>(lhs: T, rhs: T) -> Result<T, MultiplyError<T>>
where
    T: SignedMagnitude,
{
    MemoMultiplier::new().product(lhs, rhs)
}
