use std::{cmp::Ordering, fmt, str::FromStr};

use crate::{VariantError, VariantResult};

use super::Comparison;

/// One of the six relational predicates, read as `dynamic <op> native`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    pub const ALL: [CompareOp; 6] = [
        CompareOp::Eq,
        CompareOp::Ne,
        CompareOp::Lt,
        CompareOp::Le,
        CompareOp::Gt,
        CompareOp::Ge,
    ];

    /// The operator that gives the same answer with the operands swapped.
    pub fn flip(self) -> CompareOp {
        match self {
            CompareOp::Lt => CompareOp::Gt,
            CompareOp::Le => CompareOp::Ge,
            CompareOp::Gt => CompareOp::Lt,
            CompareOp::Ge => CompareOp::Le,
            op => op,
        }
    }

    /// The operator that gives the opposite answer for the same operands.
    pub fn negate(self) -> CompareOp {
        match self {
            CompareOp::Eq => CompareOp::Ne,
            CompareOp::Ne => CompareOp::Eq,
            CompareOp::Lt => CompareOp::Ge,
            CompareOp::Le => CompareOp::Gt,
            CompareOp::Gt => CompareOp::Le,
            CompareOp::Ge => CompareOp::Lt,
        }
    }

    pub fn is_equality(self) -> bool {
        matches!(self, CompareOp::Eq | CompareOp::Ne)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }

    pub fn evaluate(self, comparison: Comparison) -> bool {
        match self {
            CompareOp::Eq => comparison.is_equal(),
            CompareOp::Ne => !comparison.is_equal(),
            CompareOp::Lt => comparison.sign() == Ordering::Less,
            CompareOp::Le => comparison.sign() != Ordering::Greater,
            CompareOp::Gt => comparison.sign() == Ordering::Greater,
            CompareOp::Ge => comparison.sign() != Ordering::Less,
        }
    }
}

impl FromStr for CompareOp {
    type Err = VariantError;

    fn from_str(s: &str) -> VariantResult<CompareOp> {
        CompareOp::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| VariantError::unknown_operator(s))
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
