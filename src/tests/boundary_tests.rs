//! Integer payloads wider than the native operand are narrowed like an `as`
//! cast. These cases pin that behaviour down; none of them is an error.
//! Negative payloads keep their sign and sort below every unsigned operand.
use test_case::test_case;

use crate::{compare, equal, less, Comparison, VariantValue};

#[test_case(VariantValue::UInt(256 + 7), 7; "u8 wraps high bits")]
#[test_case(VariantValue::UInt(255), 255; "u8 max fits")]
fn test_truncated_u8(value: VariantValue, native: u8) {
    assert!(equal(&value, &native), "{value} vs {native}");
}

#[test_case(VariantValue::UInt(200), -56; "sign flips")]
#[test_case(VariantValue::Int(-200), 56; "negative magnitude overflows")]
#[test_case(VariantValue::Int(-128), -128; "min fits")]
fn test_truncated_i8(value: VariantValue, native: i8) {
    assert!(equal(&value, &native), "{value} vs {native}");
}

#[test_case(VariantValue::UInt(u64::MAX), -1; "u64 max reads as minus one")]
#[test_case(VariantValue::UInt(1 << 63), i64::MIN; "top bit reads as min")]
fn test_truncated_i64(value: VariantValue, native: i64) {
    assert!(equal(&value, &native), "{value} vs {native}");
}

#[test]
fn test_truncated_wide_unsigned() {
    assert!(VariantValue::UInt(1 << 32) == 0u32);
    assert!(VariantValue::UInt(u64::MAX) == usize::MAX as u64);
}

#[test_case(VariantValue::Int(-1), 255; "minus one vs u8 max")]
#[test_case(VariantValue::Int(-251), 5; "magnitude that would wrap onto the operand")]
#[test_case(VariantValue::Int(-5), 0; "below zero")]
#[test_case(VariantValue::Int(i64::MIN), 0; "min below zero")]
fn test_negative_below_u8(value: VariantValue, native: u8) {
    assert_eq!(compare(&value, &native), Comparison::Ordered(std::cmp::Ordering::Less));
    assert!(value != native);
    assert!(value < native);
    assert!(native > value);
}

#[test]
fn test_negative_below_wide_unsigned() {
    let v = VariantValue::Int(-1);

    assert!(v != u64::MAX);
    assert!(v != usize::MAX);
    assert!(v < 0u32);
    assert!(v < 0u64);
    assert!(less(&VariantValue::Int(-5), &0u16));
    assert!(u64::MAX > v);
}

#[test]
fn test_truncation_changes_order() {
    // 300 narrows to 44 in u8, so the large payload sorts below 100.
    assert!(less(&VariantValue::UInt(300), &100u8));
    assert!(VariantValue::UInt(300) > 100u16);
}

#[test]
fn test_i64_extremes_exact() {
    assert!(VariantValue::Int(i64::MIN) == i64::MIN);
    assert!(VariantValue::Int(i64::MAX) == i64::MAX);
    assert!(VariantValue::Int(i64::MIN) < i64::MIN + 1);
    assert!(VariantValue::UInt(u64::MAX) == u64::MAX);
}

#[test]
fn test_float_payload_is_not_narrowed() {
    // Floats are compared in f64, the native side is widened instead.
    assert!(VariantValue::Float(300.0) > 100u8);
    assert!(VariantValue::Float(0.5) != 0i32);
    assert_eq!(
        compare(&VariantValue::Float(f64::INFINITY), &i64::MAX),
        Comparison::Ordered(std::cmp::Ordering::Greater)
    );
}

#[test]
fn test_nan_never_equal() {
    let nan = VariantValue::Float(f64::NAN);

    assert!(nan != 0.0);
    assert_eq!(compare(&nan, &f64::NAN), Comparison::Unmatched);
    assert_eq!(compare(&nan, &0), Comparison::Unmatched);
    // Unmatched keeps the fixed order.
    assert!(nan > 0);
}
