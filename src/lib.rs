//! RsVariant models parsed document values (null, booleans, integers, floats,
//! strings, raw json literals, arrays and objects) and compares them against
//! plain Rust values with json-consistent semantics.
//!
//! The comparison rules are as follows:
//!   * Numbers only compare with numbers, booleans with booleans and strings
//!     with strings. A null value equals only the absent string (`None`).
//!   * Mixing families is never equal. Ordering a mixed pair always puts the
//!     dynamic value after the native one, whichever side it is written on.
//!   * Arrays and objects are never inspected; they only take part in the
//!     mixed-family rule above.
//!
//! The basic example of how to use:
//! ```
//! use rsvariant::{less, VariantValue};
//!
//! let v = VariantValue::from_json_str(r#"{"answer": 42}"#).unwrap();
//! let VariantValue::Object(map) = v else { unreachable!() };
//! let answer = &map["answer"];
//!
//! assert!(*answer == 42);
//! assert!(*answer > 41);
//! assert!(41 < *answer);
//! assert!(*answer != "42");
//! assert!(!less(answer, &41));
//! ```
//! Operands of an unsupported type simply do not compile:
//! ```compile_fail
//! use rsvariant::VariantValue;
//!
//! let v = VariantValue::from("a");
//! let _ = v < "b";
//! ```
pub mod compare;
mod types;

pub use compare::{
    compare, compare_with, compare_with_rev, equal, greater, greater_or_equal, less,
    less_or_equal, not_equal, CompareOp, Comparison, VariantVisitor,
};
pub use types::{VariantError, VariantKind, VariantMap, VariantResult, VariantValue, VariantVec};

// Some re-exports to allow a consistent use of serde
pub use serde;
pub use serde_json;

#[cfg(test)]
mod tests;
