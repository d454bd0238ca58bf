use std::cmp::Ordering;

use crate::VariantValue;

use super::{
    comparison::{sign_of, Comparison},
    operand::NumericOperand,
    VariantVisitor,
};

/// A call-scoped visitor that records how a dynamic value relates to the
/// native operand it was built with.
pub trait Comparer: VariantVisitor {
    fn result(&self) -> Comparison;

    fn run(mut self, value: &VariantValue) -> Comparison
    where
        Self: Sized,
    {
        value.accept(&mut self);
        self.result()
    }
}

/// Compares against a string operand. Only equality is ever recorded.
///
/// `None` is the absent string and matches a null value.
#[derive(Debug)]
pub struct StringComparer<'a> {
    operand: Option<&'a str>,
    result: Comparison,
}

impl<'a> StringComparer<'a> {
    pub fn new(operand: Option<&'a str>) -> Self {
        StringComparer {
            operand,
            result: Comparison::Unmatched,
        }
    }
}

impl<'a> VariantVisitor for StringComparer<'a> {
    fn visit_string(&mut self, value: &str) {
        if self.operand == Some(value) {
            self.result = Comparison::EQUAL;
        }
    }

    fn visit_null(&mut self) {
        if self.operand.is_none() {
            self.result = Comparison::EQUAL;
        }
    }
}

impl<'a> Comparer for StringComparer<'a> {
    fn result(&self) -> Comparison {
        self.result
    }
}

#[derive(Debug)]
pub struct NumericComparer<T> {
    operand: T,
    result: Comparison,
}

impl<T: NumericOperand> NumericComparer<T> {
    pub fn new(operand: T) -> Self {
        NumericComparer {
            operand,
            result: Comparison::Unmatched,
        }
    }
}

impl<T: NumericOperand> VariantVisitor for NumericComparer<T> {
    fn visit_float(&mut self, value: f64) {
        self.result = sign_of(value, self.operand.to_f64());
    }

    fn visit_positive_integer(&mut self, magnitude: u64) {
        self.result = sign_of(T::from_magnitude(magnitude), self.operand);
    }

    fn visit_negative_integer(&mut self, magnitude: u64) {
        self.result = match T::from_negative_magnitude(magnitude) {
            Some(value) => sign_of(value, self.operand),
            None => Comparison::Ordered(Ordering::Less),
        };
    }
}

impl<T: NumericOperand> Comparer for NumericComparer<T> {
    fn result(&self) -> Comparison {
        self.result
    }
}

#[derive(Debug)]
pub struct BoolComparer {
    operand: bool,
    result: Comparison,
}

impl BoolComparer {
    pub fn new(operand: bool) -> Self {
        BoolComparer {
            operand,
            result: Comparison::Unmatched,
        }
    }
}

impl VariantVisitor for BoolComparer {
    fn visit_bool(&mut self, value: bool) {
        self.result = Comparison::Ordered(value.cmp(&self.operand));
    }
}

impl Comparer for BoolComparer {
    fn result(&self) -> Comparison {
        self.result
    }
}
