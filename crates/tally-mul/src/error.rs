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

use tally_core::num::magnitude::SignedMagnitude;

/// The error type of the multipliers that validate their result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiplyError<T>
where
    T: SignedMagnitude,
{
    /// The magnitude of `lhs * rhs` does not fit the signed result type.
    Overflow {
        /// The left operand as passed by the caller.
        lhs: T,
        /// The right operand as passed by the caller.
        rhs: T,
    },
}

impl<T> std::fmt::Display for MultiplyError<T>
where
    T: SignedMagnitude,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow { lhs, rhs } => {
                write!(f, "Multiplication overflowed: {} * {}", lhs, rhs)
            }
        }
    }
}

impl<T> std::error::Error for MultiplyError<T> where T: SignedMagnitude {}

#[cfg(test)]
mod tests {
    use super::MultiplyError;

    #[test]
    fn test_display_overflow() {
        let e = MultiplyError::Overflow {
            lhs: i64::MAX,
            rhs: -2i64,
        };
        assert_eq!(
            e.to_string(),
            "Multiplication overflowed: 9223372036854775807 * -2"
        );
    }

    #[test]
    fn test_is_std_error() {
        let e: Box<dyn std::error::Error> = Box::new(MultiplyError::Overflow { lhs: 3i8, rhs: 50 });
        assert_eq!(e.to_string(), "Multiplication overflowed: 3 * 50");
    }
}
