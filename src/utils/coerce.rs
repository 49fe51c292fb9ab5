// src/utils/coerce.rs

use serde_json::Value;

use crate::error::AppError;

/// Interprets a loosely-typed JSON value as an integer.
///
/// Accepts integers, floats (truncated toward zero), numeric strings with
/// surrounding whitespace, and booleans (1/0). Everything else is an error.
pub fn coerce_int(value: &Value) -> Result<i64, AppError> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            // u64 values above i64::MAX land here too and fail the range check.
            let truncated = n.as_f64().map(f64::trunc).filter(|f| f.is_finite());
            match truncated {
                Some(f) if f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(f as i64),
                _ => Err(invalid(value)),
            }
        }
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| invalid(value)),
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(invalid(value)),
    }
}

fn invalid(value: &Value) -> AppError {
    AppError::InternalServerError(format!("invalid literal for integer: {}", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_integers_and_numeric_strings() {
        assert_eq!(coerce_int(&json!(7)).unwrap(), 7);
        assert_eq!(coerce_int(&json!(-3)).unwrap(), -3);
        assert_eq!(coerce_int(&json!("2")).unwrap(), 2);
        assert_eq!(coerce_int(&json!(" 4 ")).unwrap(), 4);
        assert_eq!(coerce_int(&json!("+1")).unwrap(), 1);
    }

    #[test]
    fn truncates_floats() {
        assert_eq!(coerce_int(&json!(2.9)).unwrap(), 2);
        assert_eq!(coerce_int(&json!(-1.5)).unwrap(), -1);
    }

    #[test]
    fn booleans_are_zero_or_one() {
        assert_eq!(coerce_int(&json!(true)).unwrap(), 1);
        assert_eq!(coerce_int(&json!(false)).unwrap(), 0);
    }

    #[test]
    fn rejects_non_numeric_values() {
        for value in [json!("abc"), json!("2.0"), json!(""), json!(null), json!([1]), json!({"a": 1})] {
            assert!(coerce_int(&value).is_err(), "{} should not coerce", value);
        }
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        assert!(coerce_int(&json!(u64::MAX)).is_err());
        assert!(coerce_int(&json!(1e300)).is_err());
    }
}
