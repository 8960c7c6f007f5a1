/**
 * String generation strategies.
 */

use std::collections::{HashMap, HashSet};
use std::ops::Range;
use rx_dense_fsa::dfa;
use crate::rnd::*;

pub trait StringGenStrategy {
    fn generate(&self) -> String;
}

/**
 * Random string from a charset.
 */

pub struct RandomStringGenerator {
    len: Range<usize>,
    charset: Vec<char>,
}

impl RandomStringGenerator {
    pub fn with_len_and_charset(len: Range<usize>, charset: Vec<char>) -> Self {
        Self{ len, charset }
    }
}

impl StringGenStrategy for RandomStringGenerator {
    fn generate(&self) -> String {
        rand_string(&self.len, &self.charset)
    }
}

/**
 * Random walk along the transitions of a DFA. Plain random strings rarely hit
 * anything a longer pattern accepts, walks get there much more often.
 */

pub struct DfaWalkGenerator {
    len: Range<usize>,
    start: dfa::State,
    accepting: HashSet<dfa::State>,
    /// Only edges into states that can still reach an accepting state
    outgoing: HashMap<dfa::State, Vec<(char, dfa::State)>>,
}

impl DfaWalkGenerator {
    pub fn with_len(dfa: &dfa::Automaton, len: Range<usize>) -> Self {
        let transitions = dfa.transitions();

        let mut incoming: HashMap<dfa::State, Vec<dfa::State>> = HashMap::new();
        for (from, _, to) in &transitions {
            incoming.entry(*to).or_default().push(*from);
        }
        let mut live: HashSet<dfa::State> = dfa.accepting().clone();
        let mut stk: Vec<dfa::State> = live.iter().copied().collect();
        while let Some(top) = stk.pop() {
            for pred in incoming.get(&top).into_iter().flatten() {
                if live.insert(*pred) {
                    stk.push(*pred);
                }
            }
        }

        let mut outgoing: HashMap<_, Vec<_>> = HashMap::new();
        for (from, on, to) in transitions {
            if live.contains(&to) {
                outgoing.entry(from).or_default().push((on, to));
            }
        }
        Self{ len, start: dfa.start, accepting: dfa.accepting().clone(), outgoing }
    }

    fn step(&self, current: dfa::State, result: &mut String) -> Option<dfa::State> {
        let edges = self.outgoing.get(&current)?;
        let (ch, next) = *sample(edges);
        result.push(ch);
        Some(next)
    }
}

impl StringGenStrategy for DfaWalkGenerator {
    /// Walks the drawn number of steps, then keeps going (for a bounded
    /// while) until it stands on an accepting state.
    fn generate(&self) -> String {
        let steps = rand_range(&self.len);
        let mut result = String::new();
        let mut current = self.start;
        for _ in 0..steps {
            match self.step(current, &mut result) {
                Some(next) => current = next,
                None => return result,
            }
        }
        for _ in 0..self.len.end {
            if self.accepting.contains(&current) {
                break;
            }
            match self.step(current, &mut result) {
                Some(next) => current = next,
                None => break,
            }
        }
        result
    }
}

/**
 * Chooses from a collection of strategies and uses that.
 */

pub struct RandomStrategy {
    strats: Vec<Box<dyn StringGenStrategy>>,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self{ strats: Vec::new() }
    }

    pub fn add<G>(&mut self, g: G) where G : StringGenStrategy + 'static {
        self.strats.push(Box::new(g));
    }
}

impl StringGenStrategy for RandomStrategy {
    fn generate(&self) -> String {
        sample(&self.strats).generate()
    }
}

#[cfg(test)]
mod str_gen_tests {
    use super::*;
    use rx_dense_fsa::compile_to_dfa;

    #[test]
    fn walks_stay_inside_the_alphabet() {
        set_seed(3);
        let df = compile_to_dfa("(ab|c)*").unwrap();
        let gen = DfaWalkGenerator::with_len(&df, 0..10);
        for _ in 0..100 {
            let s = gen.generate();
            assert!(s.chars().all(|c| "abc".contains(c)));
        }
    }

    #[test]
    fn walks_find_accepted_strings() {
        set_seed(5);
        let df = compile_to_dfa("abc(ab|cd*)*def").unwrap();
        let gen = DfaWalkGenerator::with_len(&df, 6..20);
        let accepted = (0..200).filter(|_| df.matches(&gen.generate())).count();
        assert!(accepted > 50);
    }

    #[test]
    fn random_strategy_uses_its_members() {
        set_seed(9);
        let mut gen = RandomStrategy::new();
        gen.add(RandomStringGenerator::with_len_and_charset(1..2, vec!['x']));
        gen.add(RandomStringGenerator::with_len_and_charset(1..2, vec!['y']));
        let seen: Vec<String> = (0..100).map(|_| gen.generate()).collect();
        assert!(seen.iter().any(|s| s == "x"));
        assert!(seen.iter().any(|s| s == "y"));
    }
}
