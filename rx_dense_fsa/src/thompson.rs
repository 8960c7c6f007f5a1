/**
 * Thompson's-construction, lowering a regex AST into NFA transitions.
 *
 * Every fragment occupies the contiguous states `entry..=exit`, so the first
 * free state after a fragment is `exit + 1`. A fragment's entry never has
 * incoming transitions from inside the fragment and its exit never has
 * outgoing ones, which is what lets a concatenation glue two fragments
 * together on a single shared state.
 */

use log::trace;
use rx_regex_parse::{Node, Bounds, Chain, CharSet};
use crate::nfa::{State, Transition};

/// Lowers `rx` starting at `entry`, returning the exit state of the fragment
/// and the transitions it is made of.
pub fn lower(rx: &Node, entry: State) -> (State, Vec<Transition>) {
    match rx {
        Node::Empty => (entry, Vec::new()),

        Node::Char(ch) => lower_char(*ch, entry),

        Node::CharSet(set) => lower_charset(set, entry),

        Node::Concatenation{ .. } | Node::Alternation{ .. } => lower_chain(rx, entry),

        Node::Closure(subnode) => lower_closure(subnode, entry),

        Node::Count{ subnode, bounds } => lower_count(subnode, *bounds, entry),
    }
}

fn lower_char(ch: char, entry: State) -> (State, Vec<Transition>) {
    let exit = entry.succ();
    (exit, vec![Transition::on_char(entry, ch, exit)])
}

fn lower_charset(set: &CharSet, entry: State) -> (State, Vec<Transition>) {
    let exit = entry.succ();
    let transitions = set.iter()
        .map(|ch| Transition::on_char(entry, ch, exit))
        .collect();
    (exit, transitions)
}

/// Lowers a left-leaning chain of concatenations and alternations with a loop,
/// numbering states exactly as the recursive definition would.
fn lower_chain(rx: &Node, entry: State) -> (State, Vec<Transition>) {
    let (leftmost, rights) = rx.left_chain();

    // Each alternation on the way down owns the state before its left operand
    let mut alternations = rights.iter()
        .filter(|(chain, _)| *chain == Chain::Alternation)
        .count();
    let (mut exit, mut transitions) = lower(leftmost, State::new(entry.id() + alternations));

    for (chain, right) in rights {
        match chain {
            Chain::Concatenation => {
                let (right_exit, right_transitions) = lower(right, exit);
                transitions.extend(right_transitions);
                exit = right_exit;
            },
            Chain::Alternation => {
                alternations -= 1;
                let alternation_entry = State::new(entry.id() + alternations);
                exit = join_alternation(alternation_entry, exit, right, &mut transitions);
            },
        }
    }
    (exit, transitions)
}

/// Lowers `right` after the left operand ending at `left_exit` and wires both
/// into one alternation, returning its exit.
fn join_alternation(entry: State, left_exit: State, right: &Node, transitions: &mut Vec<Transition>) -> State {
    let right_entry = left_exit.succ();
    let (right_exit, right_transitions) = lower(right, right_entry);
    let exit = right_exit.succ();

    transitions.extend(vec![
        Transition::epsilon(entry, entry.succ()),
        Transition::epsilon(entry, right_entry),
        Transition::epsilon(left_exit, exit),
        Transition::epsilon(right_exit, exit),
    ]);
    transitions.extend(right_transitions);
    exit
}

fn lower_closure(subnode: &Node, entry: State) -> (State, Vec<Transition>) {
    let sub_entry = entry.succ();
    let (sub_exit, sub_transitions) = lower(subnode, sub_entry);
    let exit = sub_exit.succ();

    let mut transitions = vec![
        Transition::epsilon(entry, sub_entry),
        // Skip
        Transition::epsilon(entry, exit),
        // Repeat
        Transition::epsilon(sub_exit, sub_entry),
        Transition::epsilon(sub_exit, exit),
    ];
    transitions.extend(sub_transitions);
    (exit, transitions)
}

/// Unrolls the repetition: `min` mandatory copies, then `max - min` optional
/// ones, each of which may be skipped straight to the end.
fn lower_count(subnode: &Node, bounds: Bounds, entry: State) -> (State, Vec<Transition>) {
    let mut transitions = Vec::new();
    let mut last = entry;

    for _ in 0..bounds.min() {
        let (exit, copy) = lower(subnode, last);
        transitions.extend(copy);
        last = exit;
    }

    let mut skip_from = Vec::with_capacity(bounds.max() - bounds.min());
    for _ in bounds.min()..bounds.max() {
        skip_from.push(last);
        let (exit, copy) = lower(subnode, last);
        transitions.extend(copy);
        last = exit;
    }

    for from in skip_from {
        transitions.push(Transition::epsilon(from, last));
    }

    trace!("unrolled {{{},{}}} into states {}..={}",
        bounds.min(), bounds.max(), entry.id(), last.id());
    (last, transitions)
}

// Tests ///////////////////////////////////////////////////////////////////////
