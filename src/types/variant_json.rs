use serde_json::{value::RawValue, Number, Value};

use super::{VariantMap, VariantResult, VariantValue};

impl VariantValue {
    pub fn from_json_str(json: &str) -> VariantResult<VariantValue> {
        let value: Value = serde_json::from_str(json)?;
        Ok(value.into())
    }

    pub fn to_json_string(&self) -> VariantResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn from_number(val: &Number) -> VariantValue {
    if let Some(val) = val.as_i64() {
        return VariantValue::from_int(val);
    }

    if let Some(val) = val.as_u64() {
        return VariantValue::from_uint(val);
    }

    // Without arbitrary_precision every number is at least an f64.
    VariantValue::from_float(val.as_f64().unwrap_or(f64::NAN))
}

impl From<&Value> for VariantValue {
    fn from(value: &Value) -> VariantValue {
        match value {
            Value::Null => VariantValue::from_null(),
            Value::Bool(val) => VariantValue::from_bool(*val),
            Value::Number(val) => from_number(val),
            Value::String(val) => VariantValue::from_string(val.clone()),
            Value::Array(val) => VariantValue::from_list(val.iter().map(VariantValue::from).collect()),
            Value::Object(val) => VariantValue::from_map(
                val.iter()
                    .map(|(k, v)| (k.clone(), VariantValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for VariantValue {
    fn from(value: Value) -> VariantValue {
        match value {
            Value::Null => VariantValue::from_null(),
            Value::Bool(val) => VariantValue::from_bool(val),
            Value::Number(val) => from_number(&val),
            Value::String(val) => VariantValue::from_string(val),
            Value::Array(val) => {
                VariantValue::from_list(val.into_iter().map(VariantValue::from).collect())
            }
            Value::Object(val) => {
                let map: VariantMap = val
                    .into_iter()
                    .map(|(k, v)| (k, VariantValue::from(v)))
                    .collect();

                VariantValue::from_map(map)
            }
        }
    }
}

impl From<Box<RawValue>> for VariantValue {
    fn from(value: Box<RawValue>) -> VariantValue {
        VariantValue::RawJson(value.get().to_owned())
    }
}

#[cfg(test)]
mod test {
    use serde_json::{json, value::RawValue};

    use crate::types::{VariantError, VariantKind, VariantValue};

    #[test]
    fn test_number_mapping() {
        assert_eq!(VariantValue::from(json!(-3)).kind(), VariantKind::NegativeInteger);
        assert!(matches!(VariantValue::from(json!(3)), VariantValue::Int(3)));
        assert!(matches!(
            VariantValue::from(json!(u64::MAX)),
            VariantValue::UInt(u64::MAX)
        ));
        assert!(matches!(VariantValue::from(json!(1.5)), VariantValue::Float(f) if f == 1.5));
    }

    #[test]
    fn test_nested() {
        let value = VariantValue::from(&json!({"a": [1, "two", null], "b": {"c": false}}));

        let VariantValue::Object(map) = value else {
            panic!("expected object");
        };

        assert_eq!(map["a"].container_len(), Some(3));
        assert_eq!(map["b"].kind(), VariantKind::Object);
    }

    #[test]
    fn test_json_round_text() {
        let value = VariantValue::from_json_str(r#"{"k":[true,-1,2.5,"s"]}"#).unwrap();
        assert_eq!(value.to_json_string().unwrap(), r#"{"k":[true,-1,2.5,"s"]}"#);
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            VariantValue::from_json_str("[1,"),
            Err(VariantError::Json(_))
        ));
    }

    #[test]
    fn test_raw_value() {
        let raw = RawValue::from_string("{\"n\": 1}".to_owned()).unwrap();
        let value = VariantValue::from(raw);

        assert_eq!(value.kind(), VariantKind::RawJson);
        assert_eq!(value.to_string(), "{\"n\": 1}");
    }
}
