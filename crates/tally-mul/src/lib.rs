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

//! # Tally Multiplication
//!
//! Three ways to multiply signed integers using nothing but additions, each
//! trading stack depth, running time and memory differently.
//!
//! | Strategy              | Time             | Stack          | Memory           | On overflow |
//! |-----------------------|------------------|----------------|------------------|-------------|
//! | `RecursiveMultiplier` | `O(b)` additions | `O(b)` frames  | constant         | wraps       |
//! | `LoopMultiplier`      | `O(b)` additions | constant       | constant         | wraps       |
//! | `MemoMultiplier`      | `O(log b)`       | `O(log b)`     | `BITS - 2` slots | `Err`       |
//!
//! Here `b` is the smaller operand magnitude. All strategies share the
//! sign/magnitude normalization of `tally_core::num::magnitude`.
//!
//! ## Modules
//!
//! - `recursive`: `recursive_multiply` and `RecursiveMultiplier`.
//! - `iterative`: `loop_multiply` and `LoopMultiplier`.
//! - `memo`: `memo_multiply`, `MemoMultiplier` and the per-call `MemoTable`.
//! - `multiplier`: The `Multiplier` trait implemented by every strategy.
//! - `strategy`: `Strategy` selection by name, in presentation order.
//! - `stats`: `MultiplyStatistics` collected during a call.
//! - `error`: `MultiplyError`.
//!
//! ## Example
//!
//! ```rust
//! use tally_mul::{loop_multiply, memo_multiply, recursive_multiply};
//!
//! assert_eq!(recursive_multiply(10i64, 11), 110);
//! assert_eq!(loop_multiply(10i64, 11), 110);
//! assert_eq!(memo_multiply(10i64, 11), Ok(110));
//! assert!(memo_multiply(i64::MAX, 2).is_err());
//! ```

pub mod error;
pub mod iterative;
pub mod memo;
pub mod multiplier;
pub mod recursive;
pub mod stats;
pub mod strategy;

pub use iterative::loop_multiply;
pub use memo::memo_multiply;
pub use recursive::recursive_multiply;
