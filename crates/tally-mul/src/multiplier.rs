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

//! Multiplier interface
//!
//! Declares the `Multiplier` trait shared by all strategies. A multiplier is
//! a small stateful object: the computation itself is pure, the only state
//! kept between calls are the statistics of the most recent multiplication.
//!
//! Strategies that accept native wraparound never return `Err`; only
//! strategies that validate their result against overflow do.

use crate::{error::MultiplyError, stats::MultiplyStatistics};
use tally_core::num::magnitude::SignedMagnitude;

/// Trait for computing the product of two signed integers.
pub trait Multiplier<T>
where
    T: SignedMagnitude,
{
    /// Returns the name of the multiplier.
    fn name(&self) -> &str;

    /// Multiplies `lhs` by `rhs`.
    fn multiply(&mut self, lhs: T, rhs: T) -> Result<T, MultiplyError<T>>;

    /// Returns the statistics of the most recent call to `multiply`.
    fn statistics(&self) -> &MultiplyStatistics;
}

impl<T> std::fmt::Debug for dyn Multiplier<T>
where
    T: SignedMagnitude,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Multiplier({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn Multiplier<T>
where
    T: SignedMagnitude,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Multiplier({})", self.name())
    }
}
