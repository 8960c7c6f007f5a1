/**
 * All of the regex syntax-tree (AST) data-structures.
 */

use std::{fmt, mem};
use crate::charset::CharSet;
use crate::error::Error;

#[derive(Debug, PartialEq, Eq)]
pub enum Node {
    /// Matches only the empty string, like `()` or the right side of `a|`
    Empty,

    Char(char),

    CharSet(CharSet),

    Concatenation{
        left: Box<Node>,
        right: Box<Node>,
    },

    Alternation{
        left: Box<Node>,
        right: Box<Node>,
    },

    Closure(Box<Node>),

    Count{
        subnode: Box<Node>,
        bounds: Bounds,
    },
}

/// Inclusive repetition bounds, always `min <= max` and `max >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    min: usize,
    max: usize,
}

impl Bounds {
    pub fn new(min: usize, max: usize) -> Result<Self, Error> {
        if min > max || max == 0 {
            Err(Error::CountRange{ min, max })
        }
        else {
            Ok(Self{ min, max })
        }
    }

    pub fn exactly(n: usize) -> Result<Self, Error> {
        Self::new(n, n)
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

/// The two binary constructs, as they appear along a left-leaning chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chain {
    Concatenation,
    Alternation,
}

impl Chain {
    pub fn join(self, left: Node, right: Node) -> Node {
        match self {
            Chain::Concatenation => Node::concatenation(left, right),
            Chain::Alternation => Node::alternation(left, right),
        }
    }
}

/**
 * Constructors, these also desugar '?' and '+'.
 */

impl Node {
    pub fn concatenation(left: Node, right: Node) -> Self {
        Node::Concatenation{ left: Box::new(left), right: Box::new(right) }
    }

    pub fn alternation(left: Node, right: Node) -> Self {
        Node::Alternation{ left: Box::new(left), right: Box::new(right) }
    }

    pub fn closure(subnode: Node) -> Self {
        Node::Closure(Box::new(subnode))
    }

    pub fn count(subnode: Node, bounds: Bounds) -> Self {
        Node::Count{ subnode: Box::new(subnode), bounds }
    }

    pub fn optional(subnode: Node) -> Self {
        Self::count(subnode, Bounds{ min: 0, max: 1 })
    }

    pub fn one_or_more(subnode: Node) -> Self {
        let repeated = Self::closure(subnode.clone());
        Self::concatenation(subnode, repeated)
    }

    /// Follows left children for as long as they are binary nodes. Returns the
    /// leftmost operand and the right operands innermost first, each with the
    /// construct that joins it.
    ///
    /// Sequences and alternatives fold to the left, so a long literal is a
    /// chain as deep as it is long. Everything that walks the whole tree goes
    /// through here instead of recursing on the left child.
    pub fn left_chain(&self) -> (&Node, Vec<(Chain, &Node)>) {
        let mut rights = Vec::new();
        let mut node = self;
        loop {
            match node {
                Node::Concatenation{ left, right } => {
                    rights.push((Chain::Concatenation, &**right));
                    node = &**left;
                },
                Node::Alternation{ left, right } => {
                    rights.push((Chain::Alternation, &**right));
                    node = &**left;
                },
                _ => break,
            }
        }
        rights.reverse();
        (node, rights)
    }

    /// Moves the children out, leaving `Empty` behind.
    fn take_children(&mut self, into: &mut Vec<Node>) {
        match self {
            Node::Concatenation{ left, right } | Node::Alternation{ left, right } => {
                into.push(mem::replace(&mut **left, Node::Empty));
                into.push(mem::replace(&mut **right, Node::Empty));
            },
            Node::Closure(subnode) | Node::Count{ subnode, .. } => {
                into.push(mem::replace(&mut **subnode, Node::Empty));
            },
            Node::Empty | Node::Char(_) | Node::CharSet(_) => (),
        }
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        match self {
            Node::Empty => Node::Empty,
            Node::Char(c) => Node::Char(*c),
            Node::CharSet(set) => Node::CharSet(set.clone()),
            Node::Closure(subnode) => Node::closure((**subnode).clone()),
            Node::Count{ subnode, bounds } => Node::count((**subnode).clone(), *bounds),
            Node::Concatenation{ .. } | Node::Alternation{ .. } => {
                let (leftmost, rights) = self.left_chain();
                rights.into_iter()
                    .fold(leftmost.clone(), |left, (chain, right)| chain.join(left, right.clone()))
            },
        }
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            // Dropped at the end of the iteration, already childless
            node.take_children(&mut pending);
        }
    }
}

/**
 * Fully parenthesized printing, mainly for debugging and tests.
 */

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Empty => write!(f, "()"),
            Node::Char(c) => write!(f, "{}", c),
            Node::CharSet(set) => write!(f, "{}", set),
            Node::Concatenation{ .. } | Node::Alternation{ .. } => {
                let (leftmost, rights) = self.left_chain();
                for (chain, _) in &rights {
                    if *chain == Chain::Alternation {
                        write!(f, "(")?;
                    }
                }
                write!(f, "{}", leftmost)?;
                for (chain, right) in rights {
                    match chain {
                        Chain::Concatenation => write!(f, "{}", right)?,
                        Chain::Alternation => write!(f, ")|({})", right)?,
                    }
                }
                Ok(())
            },
            Node::Closure(subnode) => write!(f, "({})*", subnode),
            Node::Count{ subnode, bounds } => {
                if bounds.min == bounds.max {
                    write!(f, "({}){{{}}}", subnode, bounds.min)
                }
                else {
                    write!(f, "({}){{{},{}}}", subnode, bounds.min, bounds.max)
                }
            },
        }
    }
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod ast_tests {
    use super::*;

    fn ch(c: char) -> Node {
        Node::Char(c)
    }

    #[test]
    fn bounds_ok() {
        let b = Bounds::new(2, 3).unwrap();
        assert_eq!((b.min(), b.max()), (2, 3));
        assert!(Bounds::new(0, 1).is_ok());
        assert!(Bounds::exactly(4).is_ok());
    }

    #[test]
    fn bounds_reversed() {
        assert_eq!(Bounds::new(4, 2), Err(Error::CountRange{ min: 4, max: 2 }));
    }

    #[test]
    fn bounds_zero() {
        assert_eq!(Bounds::exactly(0), Err(Error::CountRange{ min: 0, max: 0 }));
    }

    #[test]
    fn one_or_more_desugars() {
        assert_eq!(Node::one_or_more(ch('a')),
            Node::concatenation(ch('a'), Node::closure(ch('a'))));
    }

    #[test]
    fn display_closure() {
        assert_eq!(Node::closure(ch('a')).to_string(), "(a)*");
    }

    #[test]
    fn display_alternation() {
        assert_eq!(Node::alternation(ch('a'), ch('b')).to_string(), "(a)|(b)");
    }

    #[test]
    fn display_concatenation() {
        assert_eq!(Node::concatenation(ch('a'), ch('b')).to_string(), "ab");
    }

    #[test]
    fn display_count() {
        assert_eq!(Node::optional(ch('a')).to_string(), "(a){0,1}");
        assert_eq!(Node::count(ch('a'), Bounds::exactly(3).unwrap()).to_string(), "(a){3}");
    }

    #[test]
    fn display_nested_chains() {
        let ab = Node::alternation(ch('a'), ch('b'));
        assert_eq!(Node::alternation(ab.clone(), ch('c')).to_string(), "((a)|(b))|(c)");
        assert_eq!(Node::concatenation(ab.clone(), ch('c')).to_string(), "(a)|(b)c");
        let abc = Node::alternation(Node::concatenation(ch('a'), ch('b')), ch('c'));
        assert_eq!(Node::concatenation(abc, ch('d')).to_string(), "(ab)|(c)d");
    }

    #[test]
    fn left_chain_lists_right_operands_innermost_first() {
        let rx = Node::alternation(Node::concatenation(ch('a'), ch('b')), ch('c'));
        let (leftmost, rights) = rx.left_chain();
        assert_eq!(leftmost, &ch('a'));
        assert_eq!(rights, vec![(Chain::Concatenation, &ch('b')), (Chain::Alternation, &ch('c'))]);
    }

    #[test]
    fn long_chains_clone_print_and_drop() {
        let rx = (1..200_000).fold(ch('a'), |left, _| Node::concatenation(left, ch('a')));
        let copy = rx.clone();
        drop(rx);
        assert_eq!(copy.to_string().len(), 200_000);
        let (leftmost, rights) = copy.left_chain();
        assert_eq!(leftmost, &ch('a'));
        assert_eq!(rights.len(), 199_999);
    }

    #[test]
    fn display_empty() {
        assert_eq!(Node::alternation(ch('a'), Node::Empty).to_string(), "(a)|(())");
    }
}
