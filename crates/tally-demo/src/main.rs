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

//! Prints the product of two integers as computed by every multiplication
//! strategy, one line per strategy:
//!
//! ```text
//! $ tally-demo 10 11
//! Recursive result: 110
//! Loop result: 110
//! Memo result: 110
//! ```
//!
//! Set `RUST_LOG=tally_mul=trace` to see the library's tracing events on
//! standard error.

use anyhow::Context;
use clap::Parser;
use std::io::Write;
use tally_mul::strategy::Strategy;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "tally-demo",
    version,
    about = "Multiply two integers using only additions",
    allow_negative_numbers = true
)]
struct Args {
    /// Left operand.
    #[arg(default_value_t = 10)]
    lhs: i64,

    /// Right operand.
    #[arg(default_value_t = 11)]
    rhs: i64,

    /// Strategies to run, comma separated (recursive, loop, memo).
    /// Defaults to all of them.
    #[arg(short, long, value_delimiter = ',')]
    strategy: Vec<Strategy>,

    /// Also print the statistics of every multiplication.
    #[arg(long)]
    stats: bool,
}

impl Args {
    fn strategies(&self) -> Vec<Strategy> {
        if self.strategy.is_empty() {
            Strategy::ALL.to_vec()
        } else {
            self.strategy.clone()
        }
    }
}

fn run(args: &Args, out: &mut impl Write) -> anyhow::Result<()> {
    for strategy in args.strategies() {
        let mut multiplier = strategy.multiplier::<i64>();
        let written = match multiplier.multiply(args.lhs, args.rhs) {
            Ok(product) => writeln!(out, "{} result: {}", strategy, product),
            Err(e) => writeln!(out, "{} result: {}", strategy, e),
        };
        written.context("failed to write result")?;

        if args.stats {
            write!(out, "{}", multiplier.statistics()).context("failed to write statistics")?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    tracing::debug!(?args, "starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&args, &mut out)?;
    out.flush().context("failed to flush stdout")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(argv: &[&str]) -> String {
        let args = Args::try_parse_from(argv).unwrap();
        let mut out = Vec::new();
        run(&args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_default_operands_print_all_strategies_in_order() {
        assert_eq!(
            render(&["tally-demo"]),
            "Recursive result: 110\nLoop result: 110\nMemo result: 110\n"
        );
    }

    #[test]
    fn test_negative_operands() {
        assert_eq!(
            render(&["tally-demo", "-1000", "-1000"]),
            "Recursive result: 1000000\nLoop result: 1000000\nMemo result: 1000000\n"
        );
    }

    #[test]
    fn test_strategy_filter() {
        assert_eq!(
            render(&["tally-demo", "--strategy", "memo,loop", "7", "6"]),
            "Memo result: 42\nLoop result: 42\n"
        );
    }

    #[test]
    fn test_memo_overflow_is_printed() {
        let max = i64::MAX.to_string();
        assert_eq!(
            render(&["tally-demo", "-s", "memo", max.as_str(), "2"]),
            format!("Memo result: Multiplication overflowed: {} * 2\n", max)
        );
    }

    #[test]
    fn test_stats_flag() {
        let s = render(&["tally-demo", "--stats", "-s", "loop", "3", "4"]);
        assert!(s.starts_with("Loop result: 12\n"));
        assert!(s.contains("Additions: 3"));
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        assert!(Args::try_parse_from(["tally-demo", "-s", "karatsuba"]).is_err());
    }
}
