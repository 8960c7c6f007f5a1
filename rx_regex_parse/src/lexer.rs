/**
 * Splits a pattern into single code point tokens.
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    Star,
    Plus,
    QuestionMark,
    Bar,
    Colon,
    Comma,
    Digit,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub ch: char,
    /// Offset in code points, not bytes
    pub position: usize,
}

impl TokenKind {
    pub fn of(ch: char) -> Self {
        match ch {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '*' => TokenKind::Star,
            '+' => TokenKind::Plus,
            '?' => TokenKind::QuestionMark,
            '|' => TokenKind::Bar,
            ':' => TokenKind::Colon,
            ',' => TokenKind::Comma,
            c if c.is_ascii_digit() => TokenKind::Digit,
            _ => TokenKind::Other,
        }
    }

    /// True for the kinds that stand for themselves wherever the grammar
    /// expects a plain character.
    pub fn is_literal(&self) -> bool {
        match self {
            TokenKind::Colon | TokenKind::Comma | TokenKind::Digit | TokenKind::Other => true,
            _ => false,
        }
    }

    pub fn is_postfix(&self) -> bool {
        match self {
            TokenKind::Star | TokenKind::Plus | TokenKind::QuestionMark | TokenKind::LeftBrace => true,
            _ => false,
        }
    }
}

/// Spaces and tabs are skipped everywhere, positions still count them.
pub fn tokenize(source: &str) -> Vec<Token> {
    source.chars()
        .enumerate()
        .filter(|(_, ch)| !is_ignored(*ch))
        .map(|(position, ch)| Token{ kind: TokenKind::of(ch), ch, position })
        .collect()
}

fn is_ignored(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

// Tests ///////////////////////////////////////////////////////////////////////
