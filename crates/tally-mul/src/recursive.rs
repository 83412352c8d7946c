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

//! Recursive accumulation
//!
//! Multiplies by unary accumulation on the call stack:
//! `f(a, 0) = 0` and `f(a, n) = f(a, n - 1) + a`, where `n` is the smaller
//! magnitude. The recursion depth therefore equals the smaller magnitude,
//! which is the point of this strategy: it demonstrates the cost of
//! unbounded recursion next to `LoopMultiplier`, which computes the same
//! sum iteratively.
//!
//! # Stack depth
//!
//! Each level holds a frame on the thread stack. Once the smaller magnitude
//! exceeds what the stack can hold, the process aborts with a stack overflow.
//! The bound depends on the platform, the thread stack size (2 MiB for
//! spawned threads and the test harness by default) and the optimization
//! level; magnitudes in the low thousands are safe on common targets.
//! Nothing here detects or prevents the overflow.
//!
//! # Overflow
//!
//! The additions wrap, so the result equals `lhs.wrapping_mul(rhs)`.

use crate::{error::MultiplyError, multiplier::Multiplier, stats::MultiplyStatistics};
use num_traits::{PrimInt, Unsigned};
use tally_core::num::{
    magnitude::{SignedMagnitude, normalize},
    ops::wrapping_arithmetic::WrappingAddVal,
};

/// Multiplies by recursively adding the larger magnitude once per unit of
/// the smaller magnitude.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecursiveMultiplier {
    statistics: MultiplyStatistics,
}

impl RecursiveMultiplier {
    /// Creates a new `RecursiveMultiplier`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes `lhs * rhs` with native wraparound on overflow.
    ///
    /// Aborts the process on stack exhaustion when the smaller operand
    /// magnitude is large. See the module documentation.
    pub fn product<T>(&mut self, lhs: T, rhs: T) -> T
    where
        T: SignedMagnitude,
    {
        tracing::trace!(strategy = "recursive", %lhs, %rhs, "multiplying");
        self.statistics.reset();

        let normalized = normalize(lhs, rhs);
        let magnitude = self.accumulate(normalized.larger(), normalized.smaller(), 1);
        normalized.apply_sign_wrapping(magnitude)
    }

    /// Returns `addend * remaining`, wrapping, one stack frame per unit of
    /// `remaining`.
    fn accumulate<U>(&mut self, addend: U, remaining: U, depth: u64) -> U
    where
        U: PrimInt + Unsigned + WrappingAddVal,
    {
        if remaining.is_zero() {
            return U::zero();
        }

        self.statistics.on_depth(depth);
        let partial = self.accumulate(addend, remaining - U::one(), depth + 1);
        self.statistics.additions += 1;
        partial.wrapping_add_val(addend)
    }
}

impl<T> Multiplier<T> for RecursiveMultiplier
where
    T: SignedMagnitude,
{
    #[inline]
    fn name(&self) -> &str {
        "RecursiveMultiplier"
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

/// Multiplies `lhs` by `rhs` using recursive accumulation.
///
/// Overflow wraps like `wrapping_mul`. The recursion depth equals the smaller
/// operand magnitude; large magnitudes exhaust the stack.
///
/// # Examples
///
/// ```rust
/// # use tally_mul::recursive::recursive_multiply;
/// assert_eq!(recursive_multiply(10i64, 11), 110);
/// assert_eq!(recursive_multiply(-511i64, 510), -260_610);
/// ```
#[inline]
pub fn recursive_multiply<T>(lhs: T, rhs: T) -> T
where
    T: SignedMagnitude,
{
    RecursiveMultiplier::new().product(lhs, rhs)
}
