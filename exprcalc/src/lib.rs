#![no_std]

//! `exprcalc`: integer arithmetic expressions read from a byte stream.
//!
//! The input is pulled through `embedded_io::Read`, tokenized into numbers
//! and single-byte symbols, parsed into an [`Expr`] tree and evaluated with
//! checked `i64` arithmetic.
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! expr := item (('+' | '-') item)*
//! item := mult (('*' | '/') mult)*
//! mult := NUMBER | ('+' | '-') mult | '(' expr ')'
//! ```
//!
//! Binary operators associate to the left; division truncates toward zero.
//! Whitespace between tokens is ignored.
//!
//! ```
//! use exprcalc::{evaluate_str, CalcError, ErrorType, EvalError, Options};
//!
//! let options = Options::default();
//! assert_eq!(evaluate_str("2 + 3 * (4 - 1)", &options), Ok(11));
//! assert_eq!(evaluate_str("-7 / 2", &options), Ok(-3));
//! assert_eq!(evaluate_str("1 / (2 - 2)", &options), Err(CalcError::Eval(EvalError::DivisionByZero)));
//!
//! let Err(CalcError::Parse(err)) = evaluate_str("(1 + 2", &options) else {
//!     panic!("expected a parse error");
//! };
//! assert_eq!(err.error_type, ErrorType::UnclosedParenthesis);
//! assert_eq!(err.index, 6);
//! ```
//!
//! Streaming from any reader:
//!
//! ```
//! use exprcalc::{parse_expression, Options, Tokenizer};
//!
//! let mut reader: &[u8] = b"10 - 4 - 3";
//! let mut tokenizer = Tokenizer::new(&mut reader);
//! let expr = parse_expression(&mut tokenizer, &Options::new()).unwrap();
//! assert_eq!(expr.evaluate(), Ok(3));
//! ```

extern crate alloc;

pub mod error;
pub mod expr;
pub mod parser;
pub mod tokenizer;

pub use error::{CalcError, Error, ErrorType, EvalError, Result};
pub use expr::{BinaryOp, Expr, UnaryOp};
pub use parser::{parse_expression, Options};
pub use tokenizer::{Token, Tokenizer};

/// Parses `input` as a single expression.
///
/// # Errors
///
/// See [`parse_expression`].
pub fn parse_str(input: &str, options: &Options) -> Result<Expr> {
    let mut reader = input.as_bytes();
    let mut tokenizer = Tokenizer::new(&mut reader);
    parse_expression(&mut tokenizer, options)
}

/// Parses and evaluates `input`.
///
/// # Errors
///
/// `CalcError::Parse` for malformed input, `CalcError::Eval` for division by
/// zero or overflow.
pub fn evaluate_str(input: &str, options: &Options) -> core::result::Result<i64, CalcError> {
    let value = parse_str(input, options)?.evaluate().map_err(|err| {
        tracing::debug!("evaluation failed: {err}");
        err
    })?;
    Ok(value)
}
