/**
 * Runs both engines of one pattern on generated input and collects every
 * string they disagree on.
 */

use std::ops::Range;
use log::debug;
use rx_dense_fsa::{compile_to_nfa, dfa, nfa, Error};
use crate::str_gen::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disagreement {
    pub text: String,
    pub nfa: bool,
    pub dfa: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Report {
    pub checked: usize,
    pub accepted: usize,
    pub disagreements: Vec<Disagreement>,
}

pub fn check_pattern(pattern: &str, len: Range<usize>, iterations: usize) -> Result<Report, Error> {
    let nf = compile_to_nfa(pattern)?;
    let df = dfa::Automaton::from(&nf);

    let mut charset: Vec<char> = nf.alphabet().into_iter().collect();
    // One character the pattern never mentions
    let outsider = ('#'..=std::char::MAX).find(|c| !charset.contains(c));
    charset.extend(outsider);
    debug!("{:?}: {} DFA states, fuzzing over {:?}", pattern, df.state_count(), charset);

    let mut gen = RandomStrategy::new();
    gen.add(RandomStringGenerator::with_len_and_charset(len.clone(), charset));
    gen.add(DfaWalkGenerator::with_len(&df, len));

    Ok(check_with(&nf, &df, &gen, iterations))
}

pub fn check_with(nf: &nfa::Automaton, df: &dfa::Automaton, gen: &dyn StringGenStrategy,
    iterations: usize) -> Report {

    let mut report = Report::default();
    for _ in 0..iterations {
        let text = gen.generate();
        let by_nfa = nf.matches(&text);
        let by_dfa = df.matches(&text);

        report.checked += 1;
        if by_nfa && by_dfa {
            report.accepted += 1;
        }
        if by_nfa != by_dfa {
            report.disagreements.push(Disagreement{ text, nfa: by_nfa, dfa: by_dfa });
        }
    }
    report
}

#[cfg(test)]
mod check_tests {
    use super::*;
    use crate::rnd::set_seed;
    use rx_dense_fsa::nfa::{State, Transition};

    #[test]
    fn engines_agree_on_composite() {
        set_seed(11);
        let report = check_pattern("abc(ab|cd*)*def", 0..16, 300).unwrap();
        assert_eq!(report.checked, 300);
        assert!(report.accepted > 0);
        assert!(report.disagreements.is_empty());
    }

    #[test]
    fn bad_pattern_is_reported() {
        assert_eq!(check_pattern("a{4,2}", 0..4, 10).err(), Some(Error::CountRange{ min: 4, max: 2 }));
    }

    #[test]
    fn disagreement_is_recorded() {
        struct Fixed;
        impl StringGenStrategy for Fixed {
            fn generate(&self) -> String {
                "a".into()
            }
        }

        let nf = compile_to_nfa("a").unwrap();
        // An NFA that rejects everything, so its DFA disagrees with `nf`
        let mut other = nfa::Automaton::new();
        other.add_transition(Transition::on_char(State::new(0), 'a', State::new(1)));
        let df = dfa::Automaton::from(&other);

        let report = check_with(&nf, &df, &Fixed, 3);
        assert_eq!(report.disagreements.len(), 3);
        assert_eq!(report.disagreements[0], Disagreement{ text: "a".into(), nfa: true, dfa: false });
    }
}
