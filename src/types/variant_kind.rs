use std::fmt;

/// The kind a [`VariantValue`](super::VariantValue) presents to a visitor.
///
/// Integers are split by sign rather than by storage, matching the visit method
/// that receives them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    Null,
    Bool,
    String,
    RawJson,
    NegativeInteger,
    PositiveInteger,
    Float,
    Array,
    Object,
}

impl VariantKind {
    pub fn name(&self) -> &'static str {
        match self {
            VariantKind::Null => "null",
            VariantKind::Bool => "bool",
            VariantKind::String => "string",
            VariantKind::RawJson => "raw",
            VariantKind::NegativeInteger | VariantKind::PositiveInteger => "int",
            VariantKind::Float => "float",
            VariantKind::Array => "array",
            VariantKind::Object => "object",
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(
            self,
            VariantKind::NegativeInteger | VariantKind::PositiveInteger | VariantKind::Float
        )
    }

    pub fn is_container(&self) -> bool {
        matches!(self, VariantKind::Array | VariantKind::Object)
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
