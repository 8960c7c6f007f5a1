/**
 * Everything that can go wrong while turning a pattern into a tree.
 */

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("invalid character set: {0}")]
    CharSet(#[from] CharSetError),

    /// A `{min,max}` repetition with `min > max` or `max == 0`
    #[error("invalid repetition range {{{min},{max}}}")]
    CountRange{
        min: usize,
        max: usize,
    },

    #[error("unknown character class ':{0}:'")]
    UnknownClass(String),
}

/// The token stream does not reduce under the grammar. Positions are offsets
/// in code points from the start of the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("unexpected end of pattern, expected {expected}")]
    UnexpectedEnd{
        expected: &'static str,
    },

    #[error("unexpected '{found}' at offset {position}, expected {expected}")]
    Unexpected{
        found: char,
        position: usize,
        expected: &'static str,
    },

    #[error("'{operator}' at offset {position} has nothing to repeat")]
    MissingOperand{
        operator: char,
        position: usize,
    },

    #[error("repetition count at offset {position} does not fit in a usize")]
    CountOverflow{
        position: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CharSetError {
    #[error("the set is empty")]
    Empty,

    #[error("range '{from}-{to}' is reversed")]
    ReversedRange{
        from: char,
        to: char,
    },
}
