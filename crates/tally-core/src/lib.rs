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

//! # Tally Core
//!
//! Numeric foundations for the Tally multiplication crates. Everything here
//! is generic over the signed primitive integers and keeps the arithmetic
//! semantics explicit: every addition is either checked (`Option<T>`) or
//! wrapping (two's complement), never the build-profile dependent `+`.
//!
//! ## Modules
//!
//! - `num`: By-value checked and wrapping arithmetic traits, and the
//!   `SignedMagnitude` abstraction that splits a signed integer into a sign
//!   and an unsigned magnitude (`normalize`, `Normalized`).
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
