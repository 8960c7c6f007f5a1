
extern crate rx_regex_parse;
extern crate log;

pub mod nfa;
pub mod dfa;
pub mod thompson;
mod dot;

use log::debug;

pub use rx_regex_parse::Error;

/**
 * One-shot entry points from a pattern string.
 */

pub fn compile_to_nfa(pattern: &str) -> Result<nfa::Automaton, Error> {
    let rx = rx_regex_parse::parse(pattern)?;
    debug!("compiling {:?} as {}", pattern, rx);
    Ok(nfa::Automaton::from(&rx))
}

pub fn compile_to_dfa(pattern: &str) -> Result<dfa::Automaton, Error> {
    let nf = compile_to_nfa(pattern)?;
    Ok(dfa::Automaton::from(&nf))
}

pub fn match_nfa(pattern: &str, text: &str) -> Result<bool, Error> {
    Ok(compile_to_nfa(pattern)?.matches(text))
}

pub fn match_dfa(pattern: &str, text: &str) -> Result<bool, Error> {
    Ok(compile_to_dfa(pattern)?.matches(text))
}

#[test]
fn identifier() {
    let rx = r"[A-Za-z_][A-Za-z_0-9]*";
    let df = compile_to_dfa(rx).unwrap();
    assert!(df.matches("_foo12"));
    assert!(!df.matches("12foo"));
}
