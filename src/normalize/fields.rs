// Wed Jan 21 2026 - Alex

use crate::catalog::record::json_type_name;
use crate::normalize::NormalizeError;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub type YearlyCounts = BTreeMap<String, u64>;

fn invalid(field: &str, expected: &str, value: &Value) -> NormalizeError {
    NormalizeError::InvalidField {
        field: field.to_string(),
        reason: format!("expected {}, got {}", expected, json_type_name(value)),
    }
}

pub fn text(field: &str, value: &Value) -> Result<Option<String>, NormalizeError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(invalid(field, "text", other)),
    }
}

pub fn count(field: &str, value: &Value) -> Result<Option<u64>, NormalizeError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                return Ok(Some(v));
            }
            match n.as_f64() {
                Some(f) if f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64 => Ok(Some(f as u64)),
                _ => Err(invalid(field, "non-negative integer", value)),
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| invalid(field, "non-negative integer", value)),
        other => Err(invalid(field, "non-negative integer", other)),
    }
}

pub fn text_list(field: &str, value: &Value) -> Result<Option<Vec<String>>, NormalizeError> {
    match value {
        Value::Null => Ok(None),
        Value::Array(items) => items
            .iter()
            .map(|item| match text(field, item)? {
                Some(s) => Ok(s),
                None => Err(invalid(field, "list of text", item)),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        other => Err(invalid(field, "list of text", other)),
    }
}

pub fn yearly_counts(field: &str, value: &Value) -> Result<Option<YearlyCounts>, NormalizeError> {
    match value {
        Value::Null => Ok(None),
        Value::Object(map) => collect_counts(field, map).map(Some),
        other => Err(invalid(field, "year to count mapping", other)),
    }
}

fn collect_counts(field: &str, map: &Map<String, Value>) -> Result<YearlyCounts, NormalizeError> {
    let mut counts = YearlyCounts::new();
    for (year, value) in map {
        match count(field, value)? {
            Some(n) => {
                counts.insert(year.clone(), n);
            }
            None => return Err(invalid(field, "non-negative integer", value)),
        }
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text() {
        assert_eq!(text("f", &json!("abc")).unwrap(), Some("abc".to_string()));
        assert_eq!(text("f", &json!(2019)).unwrap(), Some("2019".to_string()));
        assert_eq!(text("f", &Value::Null).unwrap(), None);
        assert!(text("f", &json!({"a": 1})).is_err());
    }

    #[test]
    fn test_count() {
        assert_eq!(count("f", &json!(42)).unwrap(), Some(42));
        assert_eq!(count("f", &json!(42.0)).unwrap(), Some(42));
        assert_eq!(count("f", &json!(" 7 ")).unwrap(), Some(7));
        assert!(count("f", &json!(-1)).is_err());
        assert!(count("f", &json!(1.5)).is_err());
        assert!(count("f", &json!("seven")).is_err());
    }

    #[test]
    fn test_count_rejects_out_of_range_float() {
        assert!(count("f", &json!(18446744073709551616.0_f64)).is_err());
        assert!(count("f", &json!(1e20)).is_err());
        assert_eq!(count("f", &json!(9007199254740992.0_f64)).unwrap(), Some(9007199254740992));
    }

    #[test]
    fn test_text_list() {
        assert_eq!(
            text_list("f", &json!(["a", "b"])).unwrap(),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert!(text_list("f", &json!(["a", null])).is_err());
        assert!(text_list("f", &json!("a")).is_err());
    }

    #[test]
    fn test_yearly_counts() {
        let counts = yearly_counts("f", &json!({"2021": 3, "2020": 1})).unwrap().unwrap();
        assert_eq!(counts.get("2020"), Some(&1));
        assert_eq!(counts.keys().collect::<Vec<_>>(), vec!["2020", "2021"]);

        let err = yearly_counts("cites_per_year", &json!({"2020": "x"})).unwrap_err();
        match err {
            NormalizeError::InvalidField { field, .. } => assert_eq!(field, "cites_per_year"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
