
mod common;

use rx_dense_fsa::{compile_to_nfa, compile_to_dfa};
use common::random_strings;

const PATTERNS: &[&str] = &[
    "a*",
    "a{2,3}",
    "a{0,3}",
    "abc|def",
    "a|b|c",
    "(a|b)*abb",
    "a|b*",
    "[a-c]+d?",
    "abc(ab|cd*)*def",
    "((a|)b{1,2})*c",
    "(a*)*",
    "()*a",
];

/// Checks that both engines agree on random strings over the pattern's own
/// alphabet plus one symbol it never mentions.
fn check_agreement(pattern: &str, seed: u64) {
    let nf = compile_to_nfa(pattern).unwrap();
    let df = compile_to_dfa(pattern).unwrap();

    let mut charset: Vec<char> = nf.alphabet().into_iter().collect();
    charset.push('#');

    for text in random_strings(seed, 500, 12, &charset) {
        assert_eq!(nf.matches(&text), df.matches(&text),
            "engines disagree on {:?} for pattern {:?}", text, pattern);
    }
}

#[test]
fn nfa_and_dfa_agree() {
    for (i, pattern) in PATTERNS.iter().enumerate() {
        check_agreement(pattern, 0x5eed + i as u64);
    }
}

#[test]
fn agreement_over_named_classes() {
    check_agreement("[:xdigit:]{2}(-[:xdigit:]{2}){0,2}", 7);
}
