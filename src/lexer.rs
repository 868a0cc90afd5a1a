use winnow::prelude::*;
use winnow::ascii::{digit1, multispace0};
use winnow::combinator::alt;
use winnow::token::{one_of, take_while};

use crate::error::ParseError;
use crate::token::{Token, TokenKind};

/// Splits one line of ERD notation into tokens, discarding whitespace.
/// Positions are byte offsets into `input`.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let mut rest = input;
    let mut tokens = Vec::new();
    loop {
        let _ = multispace0::<_, winnow::error::ContextError>.parse_next(&mut rest);
        let Some(character) = rest.chars().next() else {
            break;
        };
        let position = input.len() - rest.len();
        let (kind, text) =
            token(&mut rest).map_err(|_| ParseError::Lex { position, character })?;
        tokens.push(Token {
            kind,
            text,
            pos: position,
        });
    }
    tracing::trace!(input_len = input.len(), tokens = tokens.len(), "tokenized");
    Ok(tokens)
}

fn token<'s>(input: &mut &'s str) -> winnow::Result<(TokenKind, &'s str)> {
    alt((
        identifier.map(|s| (TokenKind::Ident, s)),
        "->".map(|s: &str| (TokenKind::Arrow, s)),
        ",".map(|s: &str| (TokenKind::Comma, s)),
        "(".map(|s: &str| (TokenKind::LParen, s)),
        ")".map(|s: &str| (TokenKind::RParen, s)),
        "_".map(|s: &str| (TokenKind::Underscore, s)),
        "[".map(|s: &str| (TokenKind::LBracket, s)),
        "]".map(|s: &str| (TokenKind::RBracket, s)),
        "*".map(|s: &str| (TokenKind::Star, s)),
        digit1.map(|s: &str| (TokenKind::Number, s)),
    ))
    .parse_next(input)
}

// One letter, then letters or digits.
fn identifier<'s>(input: &mut &'s str) -> winnow::Result<&'s str> {
    (
        one_of(|c: char| c.is_ascii_alphabetic()),
        take_while(0.., |c: char| c.is_ascii_alphanumeric()),
    )
        .take()
        .parse_next(input)
}
