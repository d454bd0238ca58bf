//! Comparison between a [`VariantValue`](crate::VariantValue) and a native operand.
//!
//! Numbers only compare with numbers, booleans with booleans and strings with
//! strings (plus null with the absent string). Any other pairing is never
//! equal and orders the dynamic value after the native one.
mod compare_op;
mod comparer;
mod comparison;
mod operand;
mod ops;
mod visitor;

pub use compare_op::CompareOp;
pub use comparer::{BoolComparer, Comparer, NumericComparer, StringComparer};
pub use comparison::{Comparison, UNMATCHED_ORDER};
pub use operand::{Comparand, NumericOperand, OrderedComparand};
pub use ops::{
    compare, compare_with, compare_with_rev, equal, greater, greater_or_equal, less,
    less_or_equal, not_equal,
};
pub use visitor::VariantVisitor;
