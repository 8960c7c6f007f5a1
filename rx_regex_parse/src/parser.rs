/**
 * A simple parser to parse a string into a regex AST.
 */

use log::trace;
use crate::ast::{Node, Bounds};
use crate::charset::CharSet;
use crate::error::{Error, SyntaxError};
use crate::lexer::{tokenize, Token, TokenKind};

/*
 * Reference grammar for the parser:
 *
 * alternation ::=
 *               | alternation '|' sequence
 *               | sequence
 *               ;
 *
 * sequence    ::=
 *               | sequence repeated
 *               | <empty>
 *               ;
 *
 * repeated    ::=
 *               | atom postfix
 *               | atom
 *               ;
 *
 * postfix     ::=
 *               | '?' | '*' | '+'
 *               | '{' NUMBER '}'
 *               | '{' NUMBER ',' NUMBER '}'
 *               ;
 *
 * atom        ::=
 *               | '(' alternation ')'
 *               | '[' set_body ']'
 *               | ANY_LITERAL_CHAR
 *               ;
 *
 * set_body    ::=
 *               | ':' NAME ':'
 *               | ANY_CHAR_BUT_CLOSING_BRACKET+
 *               ;
 *
 * Both binary constructs associate to the left. Digits, ',' and ':' are
 * literals outside of the constructs that give them a meaning.
 */

/// A small helper to ease the slice interface a bit
#[derive(Clone, Copy)]
struct Tokens<'a>(&'a [Token]);

impl <'a> Tokens<'a> {
    fn next(&self) -> Option<(Token, Tokens<'a>)> {
        self.0.split_first().map(|(t, rest)| (*t, Tokens(rest)))
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.0.first().map(|t| t.kind)
    }
}

/**
 * Actual parsing.
 */

pub fn parse(source: &str) -> Result<Node, Error> {
    let tokens = tokenize(source);
    let (node, it) = parse_alternation(Tokens(&tokens))?;
    if let Some((t, _)) = it.next() {
        return Err(unexpected(t, "end of pattern"));
    }
    trace!("parsed {:?} into {}", source, node);
    Ok(node)
}

type ParseResult<'a, T> = Result<(T, Tokens<'a>), Error>;

fn parse_alternation(it: Tokens<'_>) -> ParseResult<'_, Node> {
    let (mut node, mut it) = parse_sequence(it)?;
    while let Some((Token{ kind: TokenKind::Bar, .. }, rest)) = it.next() {
        let (right, rest) = parse_sequence(rest)?;
        node = Node::alternation(node, right);
        it = rest;
    }
    Ok((node, it))
}

fn parse_sequence(mut it: Tokens<'_>) -> ParseResult<'_, Node> {
    let mut node = None;
    loop {
        match it.peek_kind() {
            None | Some(TokenKind::Bar) | Some(TokenKind::RightParen) => break,
            Some(_) => (),
        }
        let (next, rest) = parse_repeated(it)?;
        node = Some(match node {
            Some(left) => Node::concatenation(left, next),
            None => next,
        });
        it = rest;
    }
    Ok((node.unwrap_or(Node::Empty), it))
}

fn parse_repeated(it: Tokens<'_>) -> ParseResult<'_, Node> {
    let (atom, it) = parse_atom(it)?;
    match it.next() {
        Some((Token{ kind: TokenKind::Star, .. }, rest)) => Ok((Node::closure(atom), rest)),
        Some((Token{ kind: TokenKind::Plus, .. }, rest)) => Ok((Node::one_or_more(atom), rest)),
        Some((Token{ kind: TokenKind::QuestionMark, .. }, rest)) => Ok((Node::optional(atom), rest)),
        Some((Token{ kind: TokenKind::LeftBrace, .. }, rest)) => {
            let (bounds, rest) = parse_count(rest)?;
            Ok((Node::count(atom, bounds), rest))
        },
        _ => Ok((atom, it)),
    }
}

fn parse_count(it: Tokens<'_>) -> ParseResult<'_, Bounds> {
    let (min, it) = parse_number(it)?;
    match it.next() {
        Some((Token{ kind: TokenKind::RightBrace, .. }, rest)) => Ok((Bounds::exactly(min)?, rest)),

        Some((Token{ kind: TokenKind::Comma, .. }, rest)) => {
            let (max, rest) = parse_number(rest)?;
            let rest = expect(rest, TokenKind::RightBrace, "'}'")?;
            Ok((Bounds::new(min, max)?, rest))
        },

        Some((t, _)) => Err(unexpected(t, "',' or '}'")),
        None => Err(unexpected_end("'}'")),
    }
}

fn parse_number(it: Tokens<'_>) -> ParseResult<'_, usize> {
    let (first, mut it) = match it.next() {
        Some((t, rest)) if t.kind == TokenKind::Digit => (t, rest),
        Some((t, _)) => return Err(unexpected(t, "a number")),
        None => return Err(unexpected_end("a number")),
    };

    let mut value = digit_value(first);
    while let Some((t, rest)) = it.next() {
        if t.kind != TokenKind::Digit {
            break;
        }
        value = value.checked_mul(10)
            .and_then(|v| v.checked_add(digit_value(t)))
            .ok_or(SyntaxError::CountOverflow{ position: first.position })?;
        it = rest;
    }
    Ok((value, it))
}

fn parse_atom(it: Tokens<'_>) -> ParseResult<'_, Node> {
    let (t, it) = match it.next() {
        Some(next) => next,
        None => return Err(unexpected_end("a character, '(' or '['")),
    };

    match t.kind {
        TokenKind::LeftParen => {
            let (node, it) = parse_alternation(it)?;
            let it = expect(it, TokenKind::RightParen, "')'")?;
            Ok((node, it))
        },

        TokenKind::LeftBracket => parse_charset(it),

        k if k.is_literal() => Ok((Node::Char(t.ch), it)),

        k if k.is_postfix() => {
            Err(SyntaxError::MissingOperand{ operator: t.ch, position: t.position }.into())
        },

        _ => Err(unexpected(t, "a character, '(' or '['")),
    }
}

fn parse_charset(mut it: Tokens<'_>) -> ParseResult<'_, Node> {
    // Everything up to the closing bracket is taken literally
    let mut body = Vec::new();
    loop {
        match it.next() {
            Some((Token{ kind: TokenKind::RightBracket, .. }, rest)) => {
                it = rest;
                break;
            },
            Some((t, rest)) => {
                body.push(t.ch);
                it = rest;
            },
            None => return Err(unexpected_end("']'")),
        }
    }

    let set = if is_class_name(&body) {
        let name: String = body[1..body.len() - 1].iter().collect();
        CharSet::named(&name)?
    }
    else {
        CharSet::from_body(&body)?
    };
    Ok((Node::CharSet(set), it))
}

/**
 * Helpers.
 */

fn is_class_name(body: &[char]) -> bool {
    body.len() >= 2 && body[0] == ':' && body[body.len() - 1] == ':'
}

fn digit_value(t: Token) -> usize {
    t.ch.to_digit(10).unwrap_or(0) as usize
}

fn expect<'a>(it: Tokens<'a>, kind: TokenKind, expected: &'static str) -> Result<Tokens<'a>, Error> {
    match it.next() {
        Some((t, rest)) if t.kind == kind => Ok(rest),
        Some((t, _)) => Err(unexpected(t, expected)),
        None => Err(unexpected_end(expected)),
    }
}

fn unexpected(t: Token, expected: &'static str) -> Error {
    SyntaxError::Unexpected{ found: t.ch, position: t.position, expected }.into()
}

fn unexpected_end(expected: &'static str) -> Error {
    SyntaxError::UnexpectedEnd{ expected }.into()
}

// Tests ///////////////////////////////////////////////////////////////////////
