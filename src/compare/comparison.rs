use std::cmp::Ordering;

/// Outcome of showing a [`VariantValue`](crate::VariantValue) to a comparer,
/// oriented as "dynamic value relative to native operand".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Comparison {
    Ordered(Ordering),
    /// The value's kind lies outside the operand's family, a NaN was involved,
    /// or a string operand simply did not match.
    #[default]
    Unmatched,
}

/// Order reported for [`Comparison::Unmatched`]: the dynamic value sorts after
/// the native operand. This makes mixed-family ordering stable but not
/// symmetric: a dynamic `"a"` is greater than a native `1`, a native `1` is
/// less than a dynamic `"a"`, and the two are never equal.
pub const UNMATCHED_ORDER: Ordering = Ordering::Greater;

impl Comparison {
    pub const EQUAL: Comparison = Comparison::Ordered(Ordering::Equal);

    pub fn sign(self) -> Ordering {
        match self {
            Comparison::Ordered(ord) => ord,
            Comparison::Unmatched => UNMATCHED_ORDER,
        }
    }

    /// -1, 0 or 1 for the effective sign.
    pub fn signum(self) -> i8 {
        self.sign() as i8
    }

    pub fn is_equal(self) -> bool {
        self == Comparison::EQUAL
    }

    pub fn is_unmatched(self) -> bool {
        matches!(self, Comparison::Unmatched)
    }

    pub fn reverse(self) -> Comparison {
        match self {
            Comparison::Ordered(ord) => Comparison::Ordered(ord.reverse()),
            Comparison::Unmatched => Comparison::Unmatched,
        }
    }
}

/// Sign of `dynamic - native` without performing the subtraction.
pub(crate) fn sign_of<T: PartialOrd>(dynamic: T, native: T) -> Comparison {
    match dynamic.partial_cmp(&native) {
        Some(ord) => Comparison::Ordered(ord),
        None => Comparison::Unmatched,
    }
}
