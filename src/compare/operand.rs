use num_traits::{AsPrimitive, NumCast};
use std::{any::type_name, borrow::Cow, fmt};
use tracing::trace;

use crate::VariantValue;

use super::{
    comparer::{BoolComparer, Comparer, NumericComparer, StringComparer},
    Comparison,
};

/// A native integer or floating point type that a [`NumericComparer`] can hold.
///
/// A positive payload wider than `Self` is narrowed the way an `as` cast does:
/// bits that do not fit are dropped silently and only traced. Negative
/// payloads keep their sign.
pub trait NumericOperand: Copy + PartialOrd + fmt::Debug + 'static {
    fn from_magnitude(magnitude: u64) -> Self;

    /// Rebuilds a negative integer from its magnitude, or `None` when `Self`
    /// has no negative values. Such a payload sorts below every operand.
    fn from_negative_magnitude(magnitude: u64) -> Option<Self>;

    fn to_f64(self) -> f64;
}

fn truncate<T>(value: i128) -> T
where
    T: NumCast + Copy + 'static,
    i128: AsPrimitive<T>,
{
    if let Some(fitted) = <T as NumCast>::from(value) {
        return fitted;
    }

    trace!(
        value = %value,
        native = type_name::<T>(),
        "integer payload truncated to native operand width"
    );

    value.as_()
}

macro_rules! impl_signed_operand {
    ($($t:ty),*) => {
        $(
            impl NumericOperand for $t {
                fn from_magnitude(magnitude: u64) -> Self {
                    truncate::<$t>(magnitude as i128)
                }

                fn from_negative_magnitude(magnitude: u64) -> Option<Self> {
                    Some(truncate::<$t>(-(magnitude as i128)))
                }

                fn to_f64(self) -> f64 {
                    self.as_()
                }
            }
        )*
    };
}

macro_rules! impl_unsigned_operand {
    ($($t:ty),*) => {
        $(
            impl NumericOperand for $t {
                fn from_magnitude(magnitude: u64) -> Self {
                    truncate::<$t>(magnitude as i128)
                }

                fn from_negative_magnitude(_magnitude: u64) -> Option<Self> {
                    None
                }

                fn to_f64(self) -> f64 {
                    self.as_()
                }
            }
        )*
    };
}

macro_rules! impl_float_operand {
    ($($t:ty),*) => {
        $(
            impl NumericOperand for $t {
                fn from_magnitude(magnitude: u64) -> Self {
                    magnitude.as_()
                }

                fn from_negative_magnitude(magnitude: u64) -> Option<Self> {
                    Some(-Self::from_magnitude(magnitude))
                }

                fn to_f64(self) -> f64 {
                    self.as_()
                }
            }
        )*
    };
}

impl_signed_operand!(i8, i16, i32, i64, isize);
impl_unsigned_operand!(u8, u16, u32, u64, usize);
impl_float_operand!(f32, f64);

/// A native operand that can be compared for equality with a [`VariantValue`].
///
/// The static type picks the comparer; types without an impl cannot be
/// compared at all.
pub trait Comparand {
    fn compare_variant(&self, value: &VariantValue) -> Comparison;
}

/// Operands that also support the four ordering predicates.
pub trait OrderedComparand: Comparand {}

impl Comparand for str {
    fn compare_variant(&self, value: &VariantValue) -> Comparison {
        StringComparer::new(Some(self)).run(value)
    }
}

impl Comparand for String {
    fn compare_variant(&self, value: &VariantValue) -> Comparison {
        StringComparer::new(Some(self.as_str())).run(value)
    }
}

impl<'s> Comparand for Cow<'s, str> {
    fn compare_variant(&self, value: &VariantValue) -> Comparison {
        StringComparer::new(Some(self.as_ref())).run(value)
    }
}

impl<'s> Comparand for Option<&'s str> {
    fn compare_variant(&self, value: &VariantValue) -> Comparison {
        StringComparer::new(*self).run(value)
    }
}

impl Comparand for Option<String> {
    fn compare_variant(&self, value: &VariantValue) -> Comparison {
        StringComparer::new(self.as_deref()).run(value)
    }
}

impl Comparand for bool {
    fn compare_variant(&self, value: &VariantValue) -> Comparison {
        BoolComparer::new(*self).run(value)
    }
}

impl OrderedComparand for bool {}

macro_rules! impl_numeric_comparand {
    ($($t:ty),*) => {
        $(
            impl Comparand for $t {
                fn compare_variant(&self, value: &VariantValue) -> Comparison {
                    NumericComparer::new(*self).run(value)
                }
            }

            impl OrderedComparand for $t {}
        )*
    };
}

impl_numeric_comparand!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: Comparand + ?Sized> Comparand for &T {
    fn compare_variant(&self, value: &VariantValue) -> Comparison {
        (**self).compare_variant(value)
    }
}

impl<T: OrderedComparand + ?Sized> OrderedComparand for &T {}
