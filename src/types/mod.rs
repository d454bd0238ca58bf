pub mod variant_error;
pub mod variant_kind;
pub mod variant_value;

mod variant_json;

pub use variant_error::{VariantError, VariantResult};
pub use variant_kind::VariantKind;
pub use variant_value::{VariantMap, VariantValue, VariantVec};
