/// Receives the kind and payload of a [`VariantValue`](crate::VariantValue).
///
/// [`VariantValue::accept`](crate::VariantValue::accept) calls exactly one of
/// these methods. Every method defaults to a no-op so an implementation only
/// spells out the kinds it cares about. Integers arrive as magnitudes split by
/// sign; containers arrive without their contents.
pub trait VariantVisitor {
    fn visit_null(&mut self) {}

    fn visit_bool(&mut self, _value: bool) {}

    fn visit_string(&mut self, _value: &str) {}

    fn visit_raw_json(&mut self, _json: &str) {}

    fn visit_negative_integer(&mut self, _magnitude: u64) {}

    fn visit_positive_integer(&mut self, _magnitude: u64) {}

    fn visit_float(&mut self, _value: f64) {}

    fn visit_array(&mut self) {}

    fn visit_object(&mut self) {}
}

#[cfg(test)]
mod test {
    use test_case::test_case;

    use super::VariantVisitor;
    use crate::{VariantKind, VariantValue};

    #[derive(Default)]
    struct KindRecorder {
        seen: Vec<(VariantKind, Option<u64>)>,
    }

    impl VariantVisitor for KindRecorder {
        fn visit_null(&mut self) {
            self.seen.push((VariantKind::Null, None));
        }

        fn visit_bool(&mut self, _value: bool) {
            self.seen.push((VariantKind::Bool, None));
        }

        fn visit_string(&mut self, _value: &str) {
            self.seen.push((VariantKind::String, None));
        }

        fn visit_raw_json(&mut self, _json: &str) {
            self.seen.push((VariantKind::RawJson, None));
        }

        fn visit_negative_integer(&mut self, magnitude: u64) {
            self.seen.push((VariantKind::NegativeInteger, Some(magnitude)));
        }

        fn visit_positive_integer(&mut self, magnitude: u64) {
            self.seen.push((VariantKind::PositiveInteger, Some(magnitude)));
        }

        fn visit_float(&mut self, _value: f64) {
            self.seen.push((VariantKind::Float, None));
        }

        fn visit_array(&mut self) {
            self.seen.push((VariantKind::Array, None));
        }

        fn visit_object(&mut self) {
            self.seen.push((VariantKind::Object, None));
        }
    }

    #[test_case(VariantValue::Null, VariantKind::Null, None; "null")]
    #[test_case(true.into(), VariantKind::Bool, None; "bool")]
    #[test_case("s".into(), VariantKind::String, None; "string")]
    #[test_case(VariantValue::raw("1").unwrap(), VariantKind::RawJson, None; "raw")]
    #[test_case((-5i64).into(), VariantKind::NegativeInteger, Some(5); "negative int")]
    #[test_case(i64::MIN.into(), VariantKind::NegativeInteger, Some(1 << 63); "min int")]
    #[test_case(5i64.into(), VariantKind::PositiveInteger, Some(5); "positive int")]
    #[test_case(u64::MAX.into(), VariantKind::PositiveInteger, Some(u64::MAX); "uint")]
    #[test_case(0.5f64.into(), VariantKind::Float, None; "float")]
    #[test_case(vec![1i64, 2].into(), VariantKind::Array, None; "array")]
    #[test_case(VariantValue::from_map(Default::default()), VariantKind::Object, None; "object")]
    fn test_single_dispatch(value: VariantValue, kind: VariantKind, magnitude: Option<u64>) {
        let mut recorder = KindRecorder::default();
        value.accept(&mut recorder);

        assert_eq!(recorder.seen, vec![(kind, magnitude)]);
        assert_eq!(value.kind(), kind);
    }
}
