use crate::ast::{Attribute, CardinalityBound, ErdExpression, MinMax, Ref};
use crate::error::ParseError;
use crate::lexer::tokenize;
use crate::token::{Token, TokenKind};

/// Parses one line of ERD notation into an [`ErdExpression`].
///
/// The whole input must be consumed; trailing tokens after the closing
/// `)` are a syntax error.
pub fn parse(input: &str) -> Result<ErdExpression, ParseError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        end: input.len(),
    };
    let expr = parser.expression()?;
    parser.finish()?;
    tracing::trace!(name = %expr.name, members = expr.members.len(), "parsed");
    Ok(expr)
}

/// Reusable handle around [`parse`]. Stateless, so one instance can be
/// shared across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct ErdParser;

impl ErdParser {
    pub fn new() -> Self {
        ErdParser
    }

    pub fn parse(&self, input: &str) -> Result<ErdExpression, ParseError> {
        parse(input)
    }
}

struct Parser<'t, 's> {
    tokens: &'t [Token<'s>],
    pos: usize,
    end: usize,
}

impl<'t, 's> Parser<'t, 's> {
    // ErdExpression := Ident "(" Ref ("," Ref)* ")"
    fn expression(&mut self) -> Result<ErdExpression, ParseError> {
        let name = self.expect(TokenKind::Ident)?;
        self.expect(TokenKind::LParen)?;
        let mut members = vec![self.member()?];
        while self.eat(TokenKind::Comma) {
            members.push(self.member()?);
        }
        self.expect(TokenKind::RParen)?;
        Ok(ErdExpression {
            name: name.text.to_string(),
            members,
        })
    }

    // Ref := Attribute ("[" MinMax "]")?
    fn member(&mut self) -> Result<Ref, ParseError> {
        let attribute = self.attribute()?;
        let cardinality = if self.eat(TokenKind::LBracket) {
            let min_max = self.min_max()?;
            self.expect(TokenKind::RBracket)?;
            Some(min_max)
        } else {
            None
        };
        Ok(Ref {
            attribute,
            cardinality,
        })
    }

    // Attribute := "_" Ident "_" | Ident
    fn attribute(&mut self) -> Result<Attribute, ParseError> {
        if self.eat(TokenKind::Underscore) {
            let name = self.expect(TokenKind::Ident)?;
            self.expect(TokenKind::Underscore)?;
            Ok(Attribute::PrimaryKey(name.text.to_string()))
        } else {
            match self.tokens.get(self.pos) {
                Some(&token) if token.kind == TokenKind::Ident => {
                    self.pos += 1;
                    Ok(Attribute::Plain(token.text.to_string()))
                }
                _ => Err(self.error("`_` or identifier")),
            }
        }
    }

    // MinMax := CardinalityBound "," CardinalityBound
    fn min_max(&mut self) -> Result<MinMax, ParseError> {
        let min = self.bound()?;
        self.expect(TokenKind::Comma)?;
        let max = self.bound()?;
        Ok(MinMax { min, max })
    }

    // CardinalityBound := Number | "*"
    fn bound(&mut self) -> Result<CardinalityBound, ParseError> {
        if self.eat(TokenKind::Star) {
            return Ok(CardinalityBound::Unbounded);
        }
        match self.tokens.get(self.pos) {
            Some(&token) if token.kind == TokenKind::Number => {
                self.pos += 1;
                let n = token.text.parse().map_err(|_| ParseError::Syntax {
                    position: token.pos,
                    expected: "cardinality bound within range".to_string(),
                    found: format!("`{}`", token.text),
                })?;
                Ok(CardinalityBound::Bounded(n))
            }
            _ => Err(self.error("number or `*`")),
        }
    }

    fn finish(&mut self) -> Result<(), ParseError> {
        if self.pos < self.tokens.len() {
            Err(self.error("end of input"))
        } else {
            Ok(())
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token<'s>, ParseError> {
        match self.tokens.get(self.pos) {
            Some(&token) if token.kind == kind => {
                self.pos += 1;
                Ok(token)
            }
            _ => Err(self.error(kind.describe())),
        }
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.tokens.get(self.pos).is_some_and(|t| t.kind == kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn error(&self, expected: &str) -> ParseError {
        match self.tokens.get(self.pos) {
            Some(token) => ParseError::Syntax {
                position: token.pos,
                expected: expected.to_string(),
                found: format!("`{}`", token.text),
            },
            None => ParseError::Syntax {
                position: self.end,
                expected: expected.to_string(),
                found: "end of input".to_string(),
            },
        }
    }
}
