/**
 * Character sets, as written between brackets.
 */

use std::collections::BTreeSet;
use std::fmt;
use crate::error::{CharSetError, Error};

/// A non-empty set of code points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSet {
    chars: BTreeSet<char>,
}

impl CharSet {
    pub fn new(chars: BTreeSet<char>) -> Result<Self, CharSetError> {
        if chars.is_empty() {
            Err(CharSetError::Empty)
        }
        else {
            Ok(Self{ chars })
        }
    }

    /// Builds a set from a bracket body (without the brackets). A `-` between
    /// two characters is an inclusive range, a `-` at either end is literal.
    pub fn from_body(body: &[char]) -> Result<Self, CharSetError> {
        let mut chars = BTreeSet::new();
        let last = body.len().saturating_sub(1);
        let mut i = 0;
        while i < body.len() {
            let c = body[i];
            if c == '-' && i != 0 && i != last {
                let from = body[i - 1];
                let to = body[i + 1];
                if from > to {
                    return Err(CharSetError::ReversedRange{ from, to });
                }
                chars.extend(from..=to);
                // The right end is part of the range
                i += 1;
            }
            else {
                chars.insert(c);
            }
            i += 1;
        }
        Self::new(chars)
    }

    /// Looks up a named POSIX class, like `alpha` for `[:alpha:]`.
    pub fn named(name: &str) -> Result<Self, Error> {
        let definition = posix_class(name)
            .ok_or_else(|| Error::UnknownClass(name.into()))?;
        let body: Vec<char> = definition.chars().collect();
        Ok(Self::from_body(&body)?)
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Members in ascending code point order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

/// A single member prints bare, like a plain character would.
impl fmt::Display for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len() == 1 {
            for c in self.iter() {
                write!(f, "{}", c)?;
            }
            return Ok(());
        }
        write!(f, "[")?;
        for c in self.iter() {
            write!(f, "{}", c)?;
        }
        write!(f, "]")
    }
}

fn posix_class(name: &str) -> Option<&'static str> {
    Some(match name {
        "alnum" => "a-zA-Z0-9",
        "alpha" => "a-zA-Z",
        "ascii" => "\x00-\x7F",
        "blank" => " \t",
        "cntrl" => "\x00-\x1F\x7F",
        "digit" => "0-9",
        "graph" => "\x21-\x7E",
        "lower" => "a-z",
        "print" => "\x20-\x7E",
        "punct" => "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
        "space" => " \t\r\n\x0B\x0C",
        "upper" => "A-Z",
        "word" => "a-zA-Z0-9_",
        "xdigit" => "0-9a-fA-F",
        _ => return None,
    })
}

// Tests ///////////////////////////////////////////////////////////////////////
