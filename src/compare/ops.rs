use std::{borrow::Cow, cmp::Ordering};

use crate::VariantValue;

use super::{
    operand::{Comparand, OrderedComparand},
    CompareOp, Comparison,
};

/// Shows `value` to the comparer selected by the type of `native`.
pub fn compare<T>(value: &VariantValue, native: &T) -> Comparison
where
    T: Comparand + ?Sized,
{
    native.compare_variant(value)
}

/// Evaluates `value <op> native`.
pub fn compare_with<T>(op: CompareOp, value: &VariantValue, native: &T) -> bool
where
    T: OrderedComparand + ?Sized,
{
    op.evaluate(compare(value, native))
}

/// Evaluates `native <op> value`.
pub fn compare_with_rev<T>(op: CompareOp, native: &T, value: &VariantValue) -> bool
where
    T: OrderedComparand + ?Sized,
{
    compare_with(op.flip(), value, native)
}

pub fn equal<T>(value: &VariantValue, native: &T) -> bool
where
    T: Comparand + ?Sized,
{
    CompareOp::Eq.evaluate(compare(value, native))
}

pub fn not_equal<T>(value: &VariantValue, native: &T) -> bool
where
    T: Comparand + ?Sized,
{
    !equal(value, native)
}

pub fn less<T>(value: &VariantValue, native: &T) -> bool
where
    T: OrderedComparand + ?Sized,
{
    compare_with(CompareOp::Lt, value, native)
}

pub fn less_or_equal<T>(value: &VariantValue, native: &T) -> bool
where
    T: OrderedComparand + ?Sized,
{
    compare_with(CompareOp::Le, value, native)
}

pub fn greater<T>(value: &VariantValue, native: &T) -> bool
where
    T: OrderedComparand + ?Sized,
{
    compare_with(CompareOp::Gt, value, native)
}

pub fn greater_or_equal<T>(value: &VariantValue, native: &T) -> bool
where
    T: OrderedComparand + ?Sized,
{
    compare_with(CompareOp::Ge, value, native)
}

macro_rules! impl_string_eq {
    ($($t:ty),*) => {
        $(
            impl PartialEq<$t> for VariantValue {
                fn eq(&self, other: &$t) -> bool {
                    equal(self, other)
                }
            }

            impl PartialEq<VariantValue> for $t {
                fn eq(&self, other: &VariantValue) -> bool {
                    equal(other, self)
                }
            }
        )*
    };
}

impl_string_eq!(str, &str, String, Cow<'_, str>, Option<&str>, Option<String>);

macro_rules! impl_ordered_cmp {
    ($($t:ty),*) => {
        $(
            impl PartialEq<$t> for VariantValue {
                fn eq(&self, other: &$t) -> bool {
                    equal(self, other)
                }
            }

            impl PartialEq<VariantValue> for $t {
                fn eq(&self, other: &VariantValue) -> bool {
                    equal(other, self)
                }
            }

            impl PartialOrd<$t> for VariantValue {
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    Some(compare(self, other).sign())
                }
            }

            impl PartialOrd<VariantValue> for $t {
                fn partial_cmp(&self, other: &VariantValue) -> Option<Ordering> {
                    Some(compare(other, self).sign().reverse())
                }
            }
        )*
    };
}

impl_ordered_cmp!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool);
