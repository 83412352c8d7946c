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

/// Counters collected by a multiplier during its most recent call.
///
/// The counters make the cost profile of each strategy observable: the
/// accumulating strategies perform one addition per unit of the smaller
/// magnitude, while the memoized strategy performs at most one doubling per
/// bit and one addition per set bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MultiplyStatistics {
    /// Number of partial-sum additions.
    pub additions: u64,
    /// Number of doublings computed to fill the memo table.
    pub doublings: u64,
    /// Deepest recursion level reached.
    pub max_recursion_depth: u64,
    /// Number of memo lookups answered from the table.
    pub memo_hits: u64,
    /// Number of memo slots written.
    pub memo_fills: u64,
}

impl MultiplyStatistics {
    /// Creates a new `MultiplyStatistics` with all counters at zero.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets all counters to zero.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Records that the recursion reached `depth`.
    #[inline(always)]
    pub fn on_depth(&mut self, depth: u64) {
        if depth > self.max_recursion_depth {
            self.max_recursion_depth = depth;
        }
    }
}

impl std::fmt::Display for MultiplyStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Multiply Statistics:")?;
        writeln!(f, "  Additions: {}", self.additions)?;
        writeln!(f, "  Doublings: {}", self.doublings)?;
        writeln!(f, "  Max Recursion Depth: {}", self.max_recursion_depth)?;
        writeln!(f, "  Memo Hits: {}", self.memo_hits)?;
        writeln!(f, "  Memo Fills: {}", self.memo_fills)
    }
}
