use serde::{ser::Error as _, Serialize, Serializer};
use serde_json::value::RawValue;
use std::{collections::BTreeMap, fmt};

use crate::compare::VariantVisitor;

use super::{VariantError, VariantKind, VariantResult};

pub type VariantVec = Vec<VariantValue>;
pub type VariantMap = BTreeMap<String, VariantValue>;

/// A parsed or constructed document node.
///
/// The value only ever exposes its contents to the comparison layer through
/// [`VariantValue::accept`]; comparing two `VariantValue`s with each other is
/// deliberately not supported.
#[derive(Clone, Debug, Default)]
pub enum VariantValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    /// A pre-encoded json literal that is emitted verbatim.
    RawJson(String),
    Array(VariantVec),
    Object(VariantMap),
}

impl VariantValue {
    pub fn from_int(val: i64) -> VariantValue {
        VariantValue::Int(val)
    }

    pub fn from_uint(val: u64) -> VariantValue {
        VariantValue::UInt(val)
    }

    pub fn from_float(val: f64) -> VariantValue {
        VariantValue::Float(val)
    }

    pub fn from_bool(val: bool) -> VariantValue {
        VariantValue::Bool(val)
    }

    pub fn from_string(val: String) -> VariantValue {
        VariantValue::String(val)
    }

    pub fn from_str(val: &str) -> VariantValue {
        VariantValue::String(val.to_owned())
    }

    pub fn from_list(val: Vec<VariantValue>) -> VariantValue {
        VariantValue::Array(val)
    }

    pub fn from_map(val: VariantMap) -> VariantValue {
        VariantValue::Object(val)
    }

    pub fn from_null() -> VariantValue {
        VariantValue::Null
    }

    /// Wraps an already encoded json literal, rejecting text that does not
    /// parse as a single json value.
    pub fn raw(json: &str) -> VariantResult<VariantValue> {
        let raw: &RawValue =
            serde_json::from_str(json).map_err(|e| VariantError::invalid_raw_json(&e.to_string()))?;

        Ok(VariantValue::RawJson(raw.get().to_owned()))
    }

    /// Presents this value to `visitor`, invoking exactly one visit method.
    pub fn accept<V>(&self, visitor: &mut V)
    where
        V: VariantVisitor + ?Sized,
    {
        match self {
            VariantValue::Null => visitor.visit_null(),
            VariantValue::Bool(b) => visitor.visit_bool(*b),
            VariantValue::Int(i) if *i < 0 => visitor.visit_negative_integer(i.unsigned_abs()),
            VariantValue::Int(i) => visitor.visit_positive_integer(i.unsigned_abs()),
            VariantValue::UInt(u) => visitor.visit_positive_integer(*u),
            VariantValue::Float(f) => visitor.visit_float(*f),
            VariantValue::String(s) => visitor.visit_string(s),
            VariantValue::RawJson(raw) => visitor.visit_raw_json(raw),
            VariantValue::Array(_) => visitor.visit_array(),
            VariantValue::Object(_) => visitor.visit_object(),
        }
    }

    pub fn kind(&self) -> VariantKind {
        match self {
            VariantValue::Null => VariantKind::Null,
            VariantValue::Bool(_) => VariantKind::Bool,
            VariantValue::Int(i) if *i < 0 => VariantKind::NegativeInteger,
            VariantValue::Int(_) | VariantValue::UInt(_) => VariantKind::PositiveInteger,
            VariantValue::Float(_) => VariantKind::Float,
            VariantValue::String(_) => VariantKind::String,
            VariantValue::RawJson(_) => VariantKind::RawJson,
            VariantValue::Array(_) => VariantKind::Array,
            VariantValue::Object(_) => VariantKind::Object,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn is_null(&self) -> bool {
        matches!(self, VariantValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        if let VariantValue::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn container_len(&self) -> Option<usize> {
        match self {
            VariantValue::Array(items) => Some(items.len()),
            VariantValue::Object(map) => Some(map.len()),
            _ => None,
        }
    }
}

impl Serialize for VariantValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            VariantValue::Null => serializer.serialize_unit(),
            VariantValue::Bool(b) => serializer.serialize_bool(*b),
            VariantValue::Int(i) => serializer.serialize_i64(*i),
            VariantValue::UInt(u) => serializer.serialize_u64(*u),
            VariantValue::Float(f) => serializer.serialize_f64(*f),
            VariantValue::String(s) => serializer.serialize_str(s),
            VariantValue::RawJson(raw) => {
                let raw = RawValue::from_string(raw.clone()).map_err(S::Error::custom)?;
                raw.serialize(serializer)
            }
            VariantValue::Array(items) => serializer.collect_seq(items),
            VariantValue::Object(map) => serializer.collect_map(map),
        }
    }
}

impl fmt::Display for VariantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for VariantValue {
                fn from(val: $t) -> VariantValue {
                    VariantValue::Int(val as i64)
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for VariantValue {
                fn from(val: $t) -> VariantValue {
                    VariantValue::UInt(val as u64)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for VariantValue {
    fn from(val: f32) -> VariantValue {
        VariantValue::Float(val as f64)
    }
}

impl From<f64> for VariantValue {
    fn from(val: f64) -> VariantValue {
        VariantValue::Float(val)
    }
}

impl From<bool> for VariantValue {
    fn from(val: bool) -> VariantValue {
        VariantValue::Bool(val)
    }
}

impl From<&str> for VariantValue {
    fn from(val: &str) -> VariantValue {
        VariantValue::from_str(val)
    }
}

impl From<String> for VariantValue {
    fn from(val: String) -> VariantValue {
        VariantValue::String(val)
    }
}

impl From<VariantMap> for VariantValue {
    fn from(val: VariantMap) -> VariantValue {
        VariantValue::Object(val)
    }
}

impl<T: Into<VariantValue>> From<Vec<T>> for VariantValue {
    fn from(value: Vec<T>) -> Self {
        VariantValue::Array(value.into_iter().map(|v| v.into()).collect())
    }
}

impl<T: Into<VariantValue>> From<Option<T>> for VariantValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => VariantValue::Null,
        }
    }
}

impl TryFrom<VariantValue> for i64 {
    type Error = VariantError;

    fn try_from(value: VariantValue) -> VariantResult<i64> {
        match value {
            VariantValue::Int(i) => Ok(i),
            VariantValue::UInt(u) => {
                i64::try_from(u).map_err(|_| VariantError::conversion("i64", VariantKind::PositiveInteger))
            }
            other => Err(VariantError::conversion("i64", other.kind())),
        }
    }
}

impl TryFrom<VariantValue> for u64 {
    type Error = VariantError;

    fn try_from(value: VariantValue) -> VariantResult<u64> {
        match value {
            VariantValue::UInt(u) => Ok(u),
            VariantValue::Int(i) => u64::try_from(i).map_err(|_| {
                VariantError::conversion("u64", VariantKind::NegativeInteger)
            }),
            other => Err(VariantError::conversion("u64", other.kind())),
        }
    }
}

impl TryFrom<VariantValue> for f64 {
    type Error = VariantError;

    fn try_from(value: VariantValue) -> VariantResult<f64> {
        match value {
            VariantValue::Float(f) => Ok(f),
            VariantValue::Int(i) => Ok(i as f64),
            VariantValue::UInt(u) => Ok(u as f64),
            other => Err(VariantError::conversion("f64", other.kind())),
        }
    }
}

impl TryFrom<VariantValue> for bool {
    type Error = VariantError;

    fn try_from(value: VariantValue) -> VariantResult<bool> {
        if let VariantValue::Bool(b) = value {
            return Ok(b);
        }

        Err(VariantError::conversion("bool", value.kind()))
    }
}

impl TryFrom<VariantValue> for String {
    type Error = VariantError;

    fn try_from(value: VariantValue) -> VariantResult<String> {
        if let VariantValue::String(s) = value {
            return Ok(s);
        }

        Err(VariantError::conversion("string", value.kind()))
    }
}
