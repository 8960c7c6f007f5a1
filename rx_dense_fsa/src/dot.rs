/**
 * Graphviz export for both automata, only meant for looking at them.
 */

use crate::{dfa, nfa};

const HEADER: &str = "digraph { rankdir = LR;";
const FOOTER: &str = " node [shape=plaintext label=\"\"]; nothing->\"0\"; }";

fn escape(label: char) -> String {
    match label {
        '"' => "\\\"".into(),
        '\\' => "\\\\".into(),
        c => c.to_string(),
    }
}

fn edge(out: &mut String, from: usize, to: usize, label: &str) {
    out.push_str(&format!(" \"{}\" -> \"{}\" [label=\"{}\"];", from, to, label));
}

fn accepting<I>(out: &mut String, states: I) where I : IntoIterator<Item = usize> {
    for s in states {
        out.push_str(&format!(" {} [shape=doublecircle];", s));
    }
}

impl nfa::Automaton {
    pub fn to_dot(&self) -> String {
        let mut out = String::from(HEADER);
        for t in self.transitions() {
            let label = match t.on {
                nfa::Symbol::Epsilon => "&epsilon;".into(),
                nfa::Symbol::Char(c) => escape(c),
            };
            edge(&mut out, t.from.id(), t.to.id(), &label);
        }
        accepting(&mut out, self.accepting().iter().map(|s| s.id()));
        out.push_str(FOOTER);
        out
    }
}

impl dfa::Automaton {
    pub fn to_dot(&self) -> String {
        let mut out = String::from(HEADER);
        for (from, on, to) in self.transitions() {
            edge(&mut out, from.id(), to.id(), &escape(on));
        }
        let mut accepting_states: Vec<usize> = self.accepting().iter().map(|s| s.id()).collect();
        accepting_states.sort();
        accepting(&mut out, accepting_states);
        out.push_str(FOOTER);
        out
    }
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod dot_tests {
    use super::*;
    use crate::nfa::{State, Transition};

    fn digraph(body: &str) -> String {
        format!("digraph {{ rankdir = LR; {} node [shape=plaintext label=\"\"]; nothing->\"0\"; }}", body)
    }

    fn s(id: usize) -> State {
        State::new(id)
    }

    #[test]
    fn single_transition() {
        let mut nf = nfa::Automaton::new();
        nf.add_transition(Transition::on_char(s(0), 'a', s(1)));
        assert_eq!(nf.to_dot(), digraph("\"0\" -> \"1\" [label=\"a\"];"));
    }

    #[test]
    fn sorted_transitions_and_accepting() {
        let mut nf = nfa::Automaton::new();
        nf.add_transitions(vec![
            Transition::on_char(s(0), 'b', s(2)),
            Transition::on_char(s(0), 'b', s(1)),
            Transition::on_char(s(0), 'a', s(1)),
        ]);
        nf.set_accepting(s(2));
        assert_eq!(nf.to_dot(), digraph(concat!(
            "\"0\" -> \"1\" [label=\"a\"]; ",
            "\"0\" -> \"1\" [label=\"b\"]; ",
            "\"0\" -> \"2\" [label=\"b\"]; ",
            "2 [shape=doublecircle];",
        )));
    }

    #[test]
    fn epsilon_and_escapes() {
        let mut nf = nfa::Automaton::new();
        nf.add_transitions(vec![
            Transition::epsilon(s(0), s(1)),
            Transition::on_char(s(1), '"', s(2)),
        ]);
        assert_eq!(nf.to_dot(), digraph(concat!(
            "\"0\" -> \"1\" [label=\"&epsilon;\"]; ",
            "\"1\" -> \"2\" [label=\"\\\"\"];",
        )));
    }

    #[test]
    fn dfa_export() {
        let mut nf = nfa::Automaton::new();
        nf.add_transition(Transition::on_char(s(0), 'a', s(1)));
        nf.set_accepting(s(1));
        let df = dfa::Automaton::from(&nf);
        assert_eq!(df.to_dot(), digraph(concat!(
            "\"0\" -> \"1\" [label=\"a\"]; ",
            "\"1\" -> \"2\" [label=\"a\"]; ",
            "\"2\" -> \"2\" [label=\"a\"]; ",
            "1 [shape=doublecircle];",
        )));
    }
}
