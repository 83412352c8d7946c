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

use crate::{
    iterative::LoopMultiplier, memo::MemoMultiplier, multiplier::Multiplier,
    recursive::RecursiveMultiplier,
};
use tally_core::num::magnitude::SignedMagnitude;

/// The available multiplication strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Unary accumulation through recursion (`RecursiveMultiplier`).
    Recursive,
    /// Unary accumulation in a loop (`LoopMultiplier`).
    Loop,
    /// Memoized power-of-two decomposition (`MemoMultiplier`).
    Memo,
}

impl Strategy {
    /// All strategies, in presentation order.
    pub const ALL: [Strategy; 3] = [Strategy::Recursive, Strategy::Loop, Strategy::Memo];

    /// Returns the human readable label of the strategy.
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Recursive => "Recursive",
            Strategy::Loop => "Loop",
            Strategy::Memo => "Memo",
        }
    }

    /// Returns `true` if the strategy reports overflow instead of wrapping.
    #[inline]
    pub fn detects_overflow(&self) -> bool {
        matches!(self, Strategy::Memo)
    }

    /// Creates a fresh multiplier implementing this strategy.
    pub fn multiplier<T>(&self) -> Box<dyn Multiplier<T>>
    where
        T: SignedMagnitude,
    {
        match self {
            Strategy::Recursive => Box::new(RecursiveMultiplier::new()),
            Strategy::Loop => Box::new(LoopMultiplier::new()),
            Strategy::Memo => Box::new(MemoMultiplier::new()),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError {
    /// The input that did not name a strategy.
    pub input: String,
}

impl std::fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown strategy '{}' (expected one of: recursive, loop, memo)",
            self.input
        )
    }
}

impl std::error::Error for ParseStrategyError {}

impl std::str::FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recursive" => Ok(Strategy::Recursive),
            "loop" | "iterative" => Ok(Strategy::Loop),
            "memo" | "memoized" => Ok(Strategy::Memo),
            _ => Err(ParseStrategyError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_in_presentation_order() {
        let labels: Vec<_> = Strategy::ALL.iter().map(Strategy::label).collect();
        assert_eq!(labels, ["Recursive", "Loop", "Memo"]);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Strategy::Recursive.to_string(), "Recursive");
        assert_eq!(Strategy::Loop.to_string(), "Loop");
        assert_eq!(Strategy::Memo.to_string(), "Memo");
    }

    #[test]
    fn test_parse() {
        assert_eq!("recursive".parse::<Strategy>(), Ok(Strategy::Recursive));
        assert_eq!("Loop".parse::<Strategy>(), Ok(Strategy::Loop));
        assert_eq!("iterative".parse::<Strategy>(), Ok(Strategy::Loop));
        assert_eq!(" MEMO ".parse::<Strategy>(), Ok(Strategy::Memo));
        assert_eq!(
            "karatsuba".parse::<Strategy>(),
            Err(ParseStrategyError {
                input: "karatsuba".to_string()
            })
        );
    }

    #[test]
    fn test_parse_error_display() {
        let e = "x".parse::<Strategy>().unwrap_err();
        assert_eq!(
            e.to_string(),
            "Unknown strategy 'x' (expected one of: recursive, loop, memo)"
        );
    }

    #[test]
    fn test_multiplier_names() {
        assert_eq!(
            Strategy::Recursive.multiplier::<i64>().name(),
            "RecursiveMultiplier"
        );
        assert_eq!(Strategy::Loop.multiplier::<i64>().name(), "LoopMultiplier");
        assert_eq!(Strategy::Memo.multiplier::<i64>().name(), "MemoMultiplier");
    }

    #[test]
    fn test_every_strategy_agrees_on_fitting_products() {
        let cases = [
            (0i64, 0i64),
            (10, 11),
            (-1000, -1000),
            (i64::MAX, 1),
            (511, 510),
            (-37, 64),
        ];
        for strategy in Strategy::ALL {
            let mut multiplier = strategy.multiplier::<i64>();
            for (a, b) in cases {
                assert_eq!(multiplier.multiply(a, b), Ok(a * b), "{strategy}: {a} * {b}");
                assert_eq!(multiplier.multiply(b, a), Ok(a * b), "{strategy}: {b} * {a}");
            }
        }
    }

    #[test]
    fn test_only_memo_detects_overflow() {
        for strategy in Strategy::ALL {
            let mut multiplier = strategy.multiplier::<i16>();
            let result = multiplier.multiply(i16::MAX, 3);
            assert_eq!(result.is_err(), strategy.detects_overflow(), "{strategy}");
            if !strategy.detects_overflow() {
                assert_eq!(result, Ok(i16::MAX.wrapping_mul(3)));
            }
        }
    }

    #[test]
    fn test_debug_and_display_of_trait_object() {
        let multiplier = Strategy::Memo.multiplier::<i32>();
        assert_eq!(format!("{:?}", multiplier), "Multiplier(MemoMultiplier)");
        assert_eq!(format!("{}", multiplier), "Multiplier(MemoMultiplier)");
    }
}
