
extern crate rx_dense_fsa;
extern crate rand;

mod rnd;
mod str_gen;
mod check;

use std::ops::Range;
use clap::{CommandFactory, Parser};
use clap::error::ErrorKind;
use log::{error, info, warn};
use rnd::*;

const DEFAULT_PATTERNS: &[&str] = &[
    "a*",
    "a{2,3}",
    "a{0,3}",
    "abc|def",
    "(a|b)*abb",
    "[a-z]+",
    "[:digit:]{3,4}",
    "abc(ab|cd*)*def",
    "([:digit:]{3}-){1,2}[:digit:]{4}",
];

/// Checks that the NFA and the DFA of each pattern accept the same strings.
#[derive(Parser, Debug)]
#[command(name = "rx_fuzzer", version)]
struct Args {
    /// Seed of the generator, taken from the clock when absent
    #[arg(long)]
    seed: Option<u64>,

    /// Strings to try per pattern
    #[arg(long, default_value_t = 1000)]
    iterations: usize,

    #[arg(long, default_value_t = 0)]
    min_len: usize,

    #[arg(long, default_value_t = 12)]
    max_len: usize,

    /// Patterns to check, a built-in list when none are given
    patterns: Vec<String>,
}

/// The half-open range of generated string lengths.
fn length_range(min_len: usize, max_len: usize) -> Result<Range<usize>, &'static str> {
    if min_len > max_len {
        return Err("--min-len can't be larger than --max-len");
    }
    match max_len.checked_add(1) {
        Some(end) => Ok(min_len..end),
        None => Err("--max-len is too large"),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let len = match length_range(args.min_len, args.max_len) {
        Ok(len) => len,
        Err(msg) => Args::command().error(ErrorKind::ArgumentConflict, msg).exit(),
    };

    let seed = args.seed.unwrap_or_else(seed_from_system_time);
    set_seed(seed);
    info!("seed: {}", seed);

    let patterns: Vec<String> = if args.patterns.is_empty() {
        DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect()
    }
    else {
        args.patterns.clone()
    };

    let mut failed = false;
    for pattern in &patterns {
        match check::check_pattern(pattern, len.clone(), args.iterations) {
            Ok(report) if report.disagreements.is_empty() => {
                info!("{:?}: {} strings checked, {} accepted", pattern, report.checked, report.accepted);
            },
            Ok(report) => {
                failed = true;
                warn!("{:?}: {} of {} strings disagree", pattern, report.disagreements.len(), report.checked);
                for d in &report.disagreements {
                    error!("{:?} on {:?}: NFA says {}, DFA says {}", pattern, d.text, d.nfa, d.dfa);
                }
            },
            Err(e) => {
                failed = true;
                error!("{:?}: {}", pattern, e);
            },
        }
    }

    if failed {
        std::process::exit(1);
    }
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod main_tests {
    use super::*;

    #[test]
    fn length_range_is_inclusive() {
        assert_eq!(length_range(0, 12), Ok(0..13));
        assert_eq!(length_range(3, 3), Ok(3..4));
    }

    #[test]
    fn length_range_rejects_bad_bounds() {
        assert!(length_range(5, 2).is_err());
        assert!(length_range(0, usize::MAX).is_err());
    }

    #[test]
    fn args_parse() {
        let args = Args::try_parse_from(vec!["rx_fuzzer", "--seed", "7", "--max-len", "4", "a*", "b"]).unwrap();
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.max_len, 4);
        assert_eq!(args.patterns, vec!["a*".to_string(), "b".to_string()]);
    }
}
