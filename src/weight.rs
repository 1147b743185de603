//! Weight coercion.
//!
//! A weight may be supplied as any primitive number, as a string holding
//! a number, or as a JSON value. Everything is normalized to a finite,
//! non-negative `f64` before it reaches a die.

use crate::error::DiceError;

/// Trait for values that can be interpreted as a face weight.
///
/// # Examples
///
/// ```rust
/// use montecarlo::WeightValue;
///
/// assert_eq!(3i32.into_weight().unwrap(), 3.0);
/// assert_eq!("2.5".into_weight().unwrap(), 2.5);
/// assert!("heavy".into_weight().is_err());
/// assert!((-1.0f64).into_weight().is_err());
/// ```
pub trait WeightValue {
    /// Convert to a weight, or fail with `DiceError::InvalidArgument`.
    fn into_weight(self) -> Result<f64, DiceError>;
}

/// Reject NaN, infinities and negative numbers.
pub(crate) fn check_weight(w: f64) -> Result<f64, DiceError> {
    if !w.is_finite() {
        return Err(DiceError::invalid_argument(format!(
            "weight must be a finite number, got {}",
            w
        )));
    }
    if w < 0.0 {
        return Err(DiceError::invalid_argument(format!(
            "weight must not be negative, got {}",
            w
        )));
    }
    Ok(w)
}

fn parse_weight(s: &str) -> Result<f64, DiceError> {
    let parsed = s.trim().parse::<f64>().map_err(|_| {
        DiceError::invalid_argument(format!("weight {:?} is not a number", s))
    })?;
    check_weight(parsed)
}

macro_rules! weight_from_number {
    ($($t:ty),*) => {
        $(
            impl WeightValue for $t {
                fn into_weight(self) -> Result<f64, DiceError> {
                    check_weight(self as f64)
                }
            }
        )*
    };
}

weight_from_number!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl WeightValue for &str {
    fn into_weight(self) -> Result<f64, DiceError> {
        parse_weight(self)
    }
}

impl WeightValue for String {
    fn into_weight(self) -> Result<f64, DiceError> {
        parse_weight(&self)
    }
}

impl WeightValue for &String {
    fn into_weight(self) -> Result<f64, DiceError> {
        parse_weight(self)
    }
}

impl WeightValue for &serde_json::Value {
    fn into_weight(self) -> Result<f64, DiceError> {
        match self {
            serde_json::Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| DiceError::invalid_argument(format!("weight {} is out of range", n)))
                .and_then(check_weight),
            serde_json::Value::String(s) => parse_weight(s),
            other => Err(DiceError::invalid_argument(format!(
                "weight must be a number or numeric string, got {}",
                other
            ))),
        }
    }
}

impl WeightValue for serde_json::Value {
    fn into_weight(self) -> Result<f64, DiceError> {
        (&self).into_weight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_weights() {
        assert_eq!(0i32.into_weight().unwrap(), 0.0);
        assert_eq!(7u64.into_weight().unwrap(), 7.0);
        assert_eq!(0.25f32.into_weight().unwrap(), 0.25);
    }

    #[test]
    fn test_string_weights() {
        assert_eq!(" 4 ".into_weight().unwrap(), 4.0);
        assert_eq!(String::from("1e1").into_weight().unwrap(), 10.0);
        assert!("".into_weight().is_err());
        assert!("inf".into_weight().is_err());
        assert!("NaN".into_weight().is_err());
    }

    #[test]
    fn test_rejects_bad_numbers() {
        assert!(f64::NAN.into_weight().is_err());
        assert!(f64::INFINITY.into_weight().is_err());
        assert!((-3i64).into_weight().is_err());
    }

    #[test]
    fn test_json_weights() {
        assert_eq!(json!(2).into_weight().unwrap(), 2.0);
        assert_eq!(json!("0.5").into_weight().unwrap(), 0.5);
        assert!(json!(true).into_weight().is_err());
        assert!(json!(null).into_weight().is_err());
        assert!(json!([1]).into_weight().is_err());
    }
}
