use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::error::EvalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Minus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl UnaryOp {
    #[must_use]
    pub fn from_symbol(symbol: u8) -> Option<Self> {
        match symbol {
            b'+' => Some(UnaryOp::Plus),
            b'-' => Some(UnaryOp::Minus),
            _ => None,
        }
    }

    /// # Errors
    ///
    /// `Overflow` when negating `i64::MIN`.
    pub fn apply(self, operand: i64) -> Result<i64, EvalError> {
        match self {
            UnaryOp::Plus => Ok(operand),
            UnaryOp::Minus => operand.checked_neg().ok_or(EvalError::Overflow),
        }
    }

    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            UnaryOp::Plus => '+',
            UnaryOp::Minus => '-',
        }
    }
}

impl BinaryOp {
    /// Additive operators (`+`, `-`) bind looser than multiplicative ones.
    #[must_use]
    pub fn additive(symbol: u8) -> Option<Self> {
        match symbol {
            b'+' => Some(BinaryOp::Add),
            b'-' => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    #[must_use]
    pub fn multiplicative(symbol: u8) -> Option<Self> {
        match symbol {
            b'*' => Some(BinaryOp::Mul),
            b'/' => Some(BinaryOp::Div),
            _ => None,
        }
    }

    /// Applies the operator with checked arithmetic. Division truncates
    /// toward zero.
    ///
    /// # Errors
    ///
    /// `DivisionByZero`, or `Overflow` if the result does not fit into `i64`.
    pub fn apply(self, lhs: i64, rhs: i64) -> Result<i64, EvalError> {
        let result = match self {
            BinaryOp::Add => lhs.checked_add(rhs),
            BinaryOp::Sub => lhs.checked_sub(rhs),
            BinaryOp::Mul => lhs.checked_mul(rhs),
            BinaryOp::Div => {
                if rhs == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                lhs.checked_div(rhs)
            }
        };
        result.ok_or(EvalError::Overflow)
    }

    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
        }
    }
}

/// An evaluable expression tree
///
/// A run of operators of one precedence level, such as `1 - 2 + 3`, is a
/// single [`Expr::Chain`] folded from the left. Tree depth therefore follows
/// the nesting of parentheses and unary signs only, not the input length.
///
/// `Display` prints the tree fully parenthesized, which shows how the
/// parser grouped the input:
///
/// ```
/// # use exprcalc::{parse_str, Options};
/// let expr = parse_str("1 - 2 * -3 + 4", &Options::default()).unwrap();
/// assert_eq!(expr.to_string(), "((1 - (2 * (-3))) + 4)");
/// assert_eq!(expr.evaluate(), Ok(11));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Number(i64),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    /// `first op1 e1 op2 e2 ...`, evaluated as `((first op1 e1) op2 e2) ...`
    Chain {
        first: Box<Expr>,
        rest: Vec<(BinaryOp, Expr)>,
    },
}

impl Expr {
    #[must_use]
    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// A chain with a single operator.
    #[must_use]
    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Chain {
            first: Box::new(lhs),
            rest: vec![(op, rhs)],
        }
    }

    /// Folds `rest` onto `first`. An empty `rest` gives back `first`.
    #[must_use]
    pub fn chain(first: Expr, rest: Vec<(BinaryOp, Expr)>) -> Self {
        if rest.is_empty() {
            first
        } else {
            Expr::Chain {
                first: Box::new(first),
                rest,
            }
        }
    }

    /// Evaluates the tree, left operand before right.
    ///
    /// # Errors
    ///
    /// The first `EvalError` met in evaluation order.
    pub fn evaluate(&self) -> Result<i64, EvalError> {
        match self {
            Expr::Number(value) => Ok(*value),
            Expr::Unary { op, operand } => op.apply(operand.evaluate()?),
            Expr::Chain { first, rest } => rest
                .iter()
                .try_fold(first.evaluate()?, |lhs, (op, rhs)| {
                    op.apply(lhs, rhs.evaluate()?)
                }),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{value}"),
            Expr::Unary { op, operand } => write!(f, "({}{operand})", op.symbol()),
            Expr::Chain { first, rest } => {
                for _ in rest {
                    f.write_str("(")?;
                }
                write!(f, "{first}")?;
                for (op, rhs) in rest {
                    write!(f, " {} {rhs})", op.symbol())?;
                }
                Ok(())
            }
        }
    }
}
