use alloc::vec::Vec;
use embedded_io::Read;

use crate::error::{Error, ErrorType, Result};
use crate::expr::{BinaryOp, Expr, UnaryOp};
use crate::tokenizer::{Token, Tokenizer};

/// Parser configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// How deep parentheses and unary signs may nest
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}

impl Options {
    #[allow(clippy::must_use_candidate)]
    /// Creates new default options
    pub fn new() -> Self {
        Self::default()
    }
}

struct Parser<'t, 'r, R: Read + ?Sized> {
    tokenizer: &'t mut Tokenizer<'r, R>,
    max_depth: usize,
    depth: usize,
}

impl<R: Read + ?Sized> Parser<'_, '_, R> {
    fn error(&self, error_type: ErrorType) -> Error {
        Error::new(error_type, self.tokenizer.token_index())
    }

    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth == self.max_depth {
            return Err(self.error(ErrorType::DepthLimitExceeded {
                max_depth: self.max_depth,
            }));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    // expr := item (('+' | '-') item)*
    fn expr(&mut self) -> Result<Expr> {
        self.chain(Self::item, BinaryOp::additive)
    }

    // item := mult (('*' | '/') mult)*
    fn item(&mut self) -> Result<Expr> {
        self.chain(Self::mult, BinaryOp::multiplicative)
    }

    // Operands of one precedence level are collected flat, so a long run of
    // operators does not deepen the tree.
    fn chain(
        &mut self,
        operand: fn(&mut Self) -> Result<Expr>,
        operator: fn(u8) -> Option<BinaryOp>,
    ) -> Result<Expr> {
        let first = operand(self)?;
        let mut rest = Vec::new();
        while let Token::Symbol(symbol) = self.tokenizer.peek()? {
            let Some(op) = operator(symbol) else {
                break;
            };
            self.tokenizer.consume();
            rest.push((op, operand(self)?));
        }
        Ok(Expr::chain(first, rest))
    }

    // mult := NUMBER | ('+' | '-') mult | '(' expr ')'
    fn mult(&mut self) -> Result<Expr> {
        match self.tokenizer.peek()? {
            Token::Number(value) => {
                self.tokenizer.consume();
                Ok(Expr::Number(value))
            }
            Token::Symbol(b'(') => self.nested(|parser| {
                parser.tokenizer.consume();
                let inner = parser.expr()?;
                match parser.tokenizer.peek()? {
                    Token::Symbol(b')') => {
                        parser.tokenizer.consume();
                        Ok(inner)
                    }
                    _ => Err(parser.error(ErrorType::UnclosedParenthesis)),
                }
            }),
            Token::Symbol(symbol) => match UnaryOp::from_symbol(symbol) {
                Some(op) => self.nested(|parser| {
                    parser.tokenizer.consume();
                    Ok(Expr::unary(op, parser.mult()?))
                }),
                None => Err(self.error(ErrorType::UnexpectedSymbol(symbol))),
            },
            Token::End => Err(self.error(ErrorType::UnexpectedEnd)),
        }
    }
}

/// Parses one complete expression from the tokenizer.
///
/// The whole stream must be a single expression: anything after it is
/// `TrailingInput`. Parentheses must match.
///
/// # Errors
///
/// `Error` with the byte index where the input stopped making sense.
pub fn parse_expression<R: Read + ?Sized>(
    tokenizer: &mut Tokenizer<'_, R>,
    options: &Options,
) -> Result<Expr> {
    let mut parser = Parser {
        tokenizer,
        max_depth: options.max_depth,
        depth: 0,
    };
    let result = parser.expr().and_then(|expr| match parser.tokenizer.peek()? {
        Token::End => Ok(expr),
        _ => Err(parser.error(ErrorType::TrailingInput)),
    });
    if let Err(err) = &result {
        tracing::debug!(index = err.index, "parse failed: {}", err.error_type);
    }
    result
}
