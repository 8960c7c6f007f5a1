
use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;
use rx_dense_fsa::{compile_to_nfa, compile_to_dfa};

/// Checks both engines against the expected outcome.
pub fn assert_matches(pattern: &str, accepted: &[&str], rejected: &[&str]) {
    let nf = compile_to_nfa(pattern).unwrap();
    let df = compile_to_dfa(pattern).unwrap();
    for text in accepted {
        assert!(nf.matches(text), "NFA of {:?} rejects {:?}", pattern, text);
        assert!(df.matches(text), "DFA of {:?} rejects {:?}", pattern, text);
    }
    for text in rejected {
        assert!(!nf.matches(text), "NFA of {:?} accepts {:?}", pattern, text);
        assert!(!df.matches(text), "DFA of {:?} accepts {:?}", pattern, text);
    }
}

pub fn random_strings(seed: u64, count: usize, max_len: usize, charset: &[char]) -> Vec<String> {
    assert!(!charset.is_empty());
    let mut rng = Mcg128Xsl64::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(0, max_len + 1);
            (0..len).map(|_| charset[rng.gen_range(0, charset.len())]).collect()
        })
        .collect()
}
