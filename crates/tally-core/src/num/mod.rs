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

//! # Numeric Foundations
//!
//! Traits and utilities for integer-centric numeric programming used by the
//! addition-only multipliers.
//!
//! ## Submodules
//!
//! - `ops`: By-value checked addition, wrapping addition and wrapping
//!   negation, mirroring the inherent methods of the primitives.
//! - `magnitude`: The `SignedMagnitude` trait, pairing every signed primitive
//!   with its unsigned counterpart, and `normalize`, which turns two operands
//!   into a result sign plus an ordered pair of magnitudes.
//!
//! ## Motivation
//!
//! Working on unsigned magnitudes keeps `|MIN|` representable, so the sign
//! can be handled exactly once per multiplication instead of being threaded
//! through every addition.

pub mod magnitude;
pub mod ops;
