/**
 * Dense nondeterministic finite automaton over characters.
 */

use std::collections::{BTreeMap, BTreeSet};
use log::debug;
use rx_regex_parse as regex;
use crate::thompson;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State(usize);

impl State {
    pub fn new(id: usize) -> Self {
        State(id)
    }

    pub fn id(&self) -> usize {
        self.0
    }

    pub(crate) fn succ(self) -> Self {
        State(self.0 + 1)
    }
}

/// Epsilon orders before every character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    Epsilon,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Transition {
    pub from: State,
    pub on: Symbol,
    pub to: State,
}

impl Transition {
    pub fn on_char(from: State, ch: char, to: State) -> Self {
        Self{ from, on: Symbol::Char(ch), to }
    }

    pub fn epsilon(from: State, to: State) -> Self {
        Self{ from, on: Symbol::Epsilon, to }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    pub start: State,
    accepting: BTreeSet<State>,
    transitions: BTreeMap<State, BTreeMap<Symbol, BTreeSet<State>>>,
}

impl Automaton {
    pub fn new() -> Self {
        Self{
            start: State(0),
            accepting: BTreeSet::new(),
            transitions: BTreeMap::new(),
        }
    }

    pub fn add_transition(&mut self, transition: Transition) {
        self.transitions
            .entry(transition.from)
            .or_insert_with(BTreeMap::new)
            .entry(transition.on)
            .or_insert_with(BTreeSet::new)
            .insert(transition.to);
    }

    pub fn add_transitions<I>(&mut self, transitions: I) where I : IntoIterator<Item = Transition> {
        for t in transitions {
            self.add_transition(t);
        }
    }

    /// Marks every state in the epsilon-closure of `state` as accepting.
    pub fn set_accepting(&mut self, state: State) {
        let closure = self.epsilon_closure(state);
        self.accepting.extend(closure);
    }

    pub fn is_accepting(&self, state: State) -> bool {
        self.accepting.contains(&state)
    }

    pub fn accepting(&self) -> &BTreeSet<State> {
        &self.accepting
    }

    pub fn transitions_from(&self, from: State) -> Option<&BTreeMap<Symbol, BTreeSet<State>>> {
        self.transitions.get(&from)
    }

    /// Every transition, ordered by source, then symbol, then destination.
    pub fn transitions(&self) -> impl Iterator<Item = Transition> + '_ {
        self.transitions.iter().flat_map(|(from, by_symbol)| {
            by_symbol.iter().flat_map(move |(on, targets)| {
                targets.iter().map(move |to| Transition{ from: *from, on: *on, to: *to })
            })
        })
    }

    /// Number of distinct states mentioned by any transition, the start state
    /// or the accepting set.
    pub fn state_count(&self) -> usize {
        let mut states: BTreeSet<State> = self.accepting.clone();
        states.insert(self.start);
        for t in self.transitions() {
            states.insert(t.from);
            states.insert(t.to);
        }
        states.len()
    }

    /// Every non-epsilon symbol used by some transition.
    pub fn alphabet(&self) -> BTreeSet<char> {
        self.transitions.values()
            .flat_map(|by_symbol| by_symbol.keys())
            .filter_map(|on| match on {
                Symbol::Char(c) => Some(*c),
                Symbol::Epsilon => None,
            })
            .collect()
    }

    pub fn epsilon_closure(&self, state: State) -> BTreeSet<State> {
        let mut result = BTreeSet::new();
        result.insert(state);

        let mut stk = vec![state];
        while let Some(top) = stk.pop() {
            if let Some(states) = self.successors(top, Symbol::Epsilon) {
                for s in states {
                    if result.insert(*s) {
                        stk.push(*s);
                    }
                }
            }
        }

        result
    }

    /// The states reachable from `states` by consuming `ch`, epsilon-closed.
    pub fn move_on(&self, states: &BTreeSet<State>, ch: char) -> BTreeSet<State> {
        let mut result = BTreeSet::new();
        for state in states {
            if let Some(targets) = self.successors(*state, Symbol::Char(ch)) {
                for target in targets {
                    result.extend(self.epsilon_closure(*target));
                }
            }
        }
        result
    }

    /// Whole-string match.
    pub fn matches(&self, text: &str) -> bool {
        let mut current = self.epsilon_closure(self.start);
        for ch in text.chars() {
            if current.is_empty() {
                return false;
            }
            current = self.move_on(&current, ch);
        }
        current.iter().any(|s| self.accepting.contains(s))
    }

    fn successors(&self, from: State, on: Symbol) -> Option<&BTreeSet<State>> {
        self.transitions.get(&from).and_then(|by_symbol| by_symbol.get(&on))
    }
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}

/**
 * Thompson's-construction.
 */

impl From<&regex::Node> for Automaton {
    fn from(rx: &regex::Node) -> Self {
        let (accept, transitions) = thompson::lower(rx, State(0));

        let mut nf = Self::new();
        nf.add_transitions(transitions);
        nf.set_accepting(accept);

        debug!("built NFA with {} states, {} transitions, accepting {:?}",
            nf.state_count(), nf.transitions().count(), nf.accepting);
        nf
    }
}

impl From<regex::Node> for Automaton {
    fn from(rx: regex::Node) -> Self {
        Self::from(&rx)
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
