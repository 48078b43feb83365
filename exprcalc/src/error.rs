use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// What went wrong while reading or parsing an expression
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
#[allow(clippy::module_name_repetitions)]
pub enum ErrorType {
    /// A symbol that cannot start or continue an operand
    #[error("unexpected symbol {:?}", as_char(.0))]
    UnexpectedSymbol(u8),
    /// The input ended where an operand was required
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// A parenthesized group was not closed by `)`
    #[error("expected ')'")]
    UnclosedParenthesis,
    /// Input left over after a complete expression
    #[error("trailing input after expression")]
    TrailingInput,
    /// A number literal does not fit into `i64`
    #[error("number too large")]
    NumberOverflow,
    /// Parentheses or unary signs nested deeper than allowed
    #[error("nesting deeper than {max_depth} levels")]
    DepthLimitExceeded {
        /// The configured limit
        max_depth: usize,
    },
    /// The underlying reader failed
    #[error("read error: {0:?}")]
    Io(embedded_io::ErrorKind),
}

fn as_char(symbol: &u8) -> char {
    char::from(*symbol)
}

/// A parse failure and the byte index where it was detected
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
#[error("{error_type} at index {index}")]
pub struct Error {
    pub error_type: ErrorType,
    pub index: usize,
}

impl Error {
    pub(crate) fn new(error_type: ErrorType, index: usize) -> Error {
        Error { error_type, index }
    }

    pub(crate) fn from_io_error<E: embedded_io::Error>(index: usize, io_error: &E) -> Error {
        Error::new(ErrorType::Io(io_error.kind()), index)
    }
}

/// Evaluation failures of a well-formed expression
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,
    /// The result does not fit into `i64`
    #[error("integer overflow")]
    Overflow,
}

/// Either stage of `evaluate_str` failing
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum CalcError {
    #[error(transparent)]
    Parse(#[from] Error),
    #[error(transparent)]
    Eval(#[from] EvalError),
}
