use thiserror::Error;

use super::VariantKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariantError {
    #[error("cannot convert {found} value into {expected}")]
    Conversion {
        expected: &'static str,
        found: VariantKind,
    },

    #[error("invalid raw json literal: {0}")]
    InvalidRawJson(String),

    #[error("json error: {0}")]
    Json(String),

    #[error("unknown comparison operator '{0}'")]
    UnknownOperator(String),
}

pub type VariantResult<T> = Result<T, VariantError>;

impl VariantError {
    pub fn conversion(expected: &'static str, found: VariantKind) -> VariantError {
        VariantError::Conversion { expected, found }
    }

    pub fn invalid_raw_json(msg: &str) -> VariantError {
        VariantError::InvalidRawJson(msg.to_owned())
    }

    pub fn json(msg: &str) -> VariantError {
        VariantError::Json(msg.to_owned())
    }

    pub fn unknown_operator(op: &str) -> VariantError {
        VariantError::UnknownOperator(op.to_owned())
    }

    pub fn type_string(&self) -> &'static str {
        use VariantError::*;

        match self {
            Conversion { .. } => "CONVERSION",
            InvalidRawJson(_) => "INVALID_RAW_JSON",
            Json(_) => "JSON",
            UnknownOperator(_) => "UNKNOWN_OPERATOR",
        }
    }
}

impl From<serde_json::Error> for VariantError {
    fn from(value: serde_json::Error) -> Self {
        VariantError::Json(value.to_string())
    }
}
