/**
 * Dense deterministic finite automaton over characters.
 */

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use log::{debug, trace};
use crate::nfa::{Automaton as NFA, State as NfaState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State(usize);

impl State {
    pub fn id(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    pub start: State,
    accepting: HashSet<State>,
    transitions: HashMap<State, HashMap<char, State>>,
}

impl Automaton {
    fn new() -> Self {
        Self{
            start: State(0),
            accepting: HashSet::new(),
            transitions: HashMap::new(),
        }
    }

    fn add_transition(&mut self, from: State, on: char, to: State) {
        self.transitions.entry(from).or_insert_with(HashMap::new).insert(on, to);
    }

    pub fn is_accepting(&self, state: State) -> bool {
        self.accepting.contains(&state)
    }

    pub fn accepting(&self) -> &HashSet<State> {
        &self.accepting
    }

    pub fn transition(&self, from: State, on: char) -> Option<State> {
        self.transitions.get(&from).and_then(|by_char| by_char.get(&on)).copied()
    }

    /// Every transition as `(from, on, to)`, ordered by source, then symbol.
    pub fn transitions(&self) -> Vec<(State, char, State)> {
        let mut result: Vec<_> = self.transitions.iter()
            .flat_map(|(from, by_char)| by_char.iter().map(move |(on, to)| (*from, *on, *to)))
            .collect();
        result.sort();
        result
    }

    pub fn state_count(&self) -> usize {
        let mut states: HashSet<State> = self.accepting.clone();
        states.insert(self.start);
        for (from, by_char) in &self.transitions {
            states.insert(*from);
            states.extend(by_char.values().copied());
        }
        states.len()
    }

    /// Whole-string match, a missing transition rejects.
    pub fn matches(&self, text: &str) -> bool {
        let mut current = self.start;
        for ch in text.chars() {
            match self.transition(current, ch) {
                Some(next) => current = next,
                None => return false,
            }
        }
        self.is_accepting(current)
    }
}

/**
 * Determinization.
 */

/// Interns subsets of NFA states, the id of a subset is the order in which it
/// was first seen.
struct Subsets {
    subsets: Vec<BTreeSet<NfaState>>,
    ids: BTreeMap<BTreeSet<NfaState>, State>,
}

impl Subsets {
    fn new() -> Self {
        Self{ subsets: Vec::new(), ids: BTreeMap::new() }
    }

    /// Returns the id of `subset` and whether it was seen for the first time.
    fn intern(&mut self, subset: BTreeSet<NfaState>) -> (State, bool) {
        if let Some(id) = self.ids.get(&subset) {
            return (*id, false);
        }
        let id = State(self.subsets.len());
        self.subsets.push(subset.clone());
        self.ids.insert(subset, id);
        (id, true)
    }

    fn get(&self, state: State) -> &BTreeSet<NfaState> {
        &self.subsets[state.0]
    }
}

impl From<&NFA> for Automaton {
    fn from(nfa: &NFA) -> Self {
        let alphabet = nfa.alphabet();
        let meets_accepting = |subset: &BTreeSet<NfaState>| {
            subset.iter().any(|s| nfa.is_accepting(*s))
        };

        let mut dfa = Self::new();
        let mut subsets = Subsets::new();
        let mut unmarked = Vec::new();
        let mut marked = HashSet::new();

        // We need the start state's mapping
        {
            let start_states = nfa.epsilon_closure(nfa.start);
            if meets_accepting(&start_states) {
                dfa.accepting.insert(dfa.start);
            }
            let (start, _) = subsets.intern(start_states);
            unmarked.push(start);
        }

        while let Some(dfa_state) = unmarked.pop() {
            for ch in &alphabet {
                let targets = nfa.move_on(subsets.get(dfa_state), *ch);
                let accepting = meets_accepting(&targets);
                let (dfa_to, fresh) = subsets.intern(targets);

                dfa.add_transition(dfa_state, *ch, dfa_to);
                if accepting {
                    dfa.accepting.insert(dfa_to);
                }
                if fresh {
                    trace!("DFA state {} is NFA subset {:?}", dfa_to.0, subsets.get(dfa_to));
                    unmarked.push(dfa_to);
                }
            }
            marked.insert(dfa_state);
        }

        debug!("determinized {} NFA states into {} DFA states over {} symbols",
            nfa.state_count(), marked.len(), alphabet.len());
        dfa
    }
}

impl From<NFA> for Automaton {
    fn from(nfa: NFA) -> Self {
        Self::from(&nfa)
    }
}
