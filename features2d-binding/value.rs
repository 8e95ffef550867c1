//! Conversion between runtime values and typed option fields.
//!
//! Runtime values arrive as `serde_json::Value`. Numbers are accepted as ints
//! when they carry an integral value inside the `i32` range, so `5.0` from a
//! float-only runtime converts the same as `5`.

use std::fmt;

use serde_json::Value;

use crate::error::ConversionProblem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Int,
    Double,
    Bool,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OptionKind::Int => "int",
            OptionKind::Double => "double",
            OptionKind::Bool => "bool",
        })
    }
}

/// A typed option value read back from a detector
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptionValue {
    Int(i32),
    Double(f64),
    Bool(bool),
}

impl OptionValue {
    pub fn kind(&self) -> OptionKind {
        match self {
            OptionValue::Int(_) => OptionKind::Int,
            OptionValue::Double(_) => OptionKind::Double,
            OptionValue::Bool(_) => OptionKind::Bool,
        }
    }
}

impl From<OptionValue> for Value {
    fn from(value: OptionValue) -> Self {
        match value {
            OptionValue::Int(v) => Value::from(v),
            OptionValue::Double(v) => Value::from(v),
            OptionValue::Bool(v) => Value::from(v),
        }
    }
}

/// Mutable view of one field of an options record
#[derive(Debug)]
pub enum Slot<'a> {
    Int(&'a mut i32),
    Double(&'a mut f64),
    Bool(&'a mut bool),
}

impl Slot<'_> {
    pub fn kind(&self) -> OptionKind {
        match self {
            Slot::Int(_) => OptionKind::Int,
            Slot::Double(_) => OptionKind::Double,
            Slot::Bool(_) => OptionKind::Bool,
        }
    }

    /// Convert `value` to the slot's type and store it
    pub fn assign(self, value: &Value) -> Result<(), ConversionProblem> {
        let expected = self.kind();
        let mismatch = || ConversionProblem::WrongType {
            expected,
            found: type_name(value),
        };
        match self {
            Slot::Int(target) => *target = to_int(value).ok_or_else(mismatch)?,
            Slot::Double(target) => *target = to_double(value).ok_or_else(mismatch)?,
            Slot::Bool(target) => *target = value.as_bool().ok_or_else(mismatch)?,
        }
        Ok(())
    }
}

pub fn to_int(value: &Value) -> Option<i32> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(i) = n.as_i64() {
        return i32::try_from(i).ok();
    }
    if n.is_u64() {
        return None;
    }
    let f = n.as_f64()?;
    if f.fract() == 0.0 && f >= i32::MIN as f64 && f <= i32::MAX as f64 {
        Some(f as i32)
    } else {
        None
    }
}

pub fn to_double(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// A host number as a runtime value. `NaN` and the infinities have no
/// `Value` form and are rejected instead of collapsing to `null`.
pub fn finite_number(number: f64) -> Result<Value, ConversionProblem> {
    match serde_json::Number::from_f64(number) {
        Some(n) => Ok(Value::Number(n)),
        None if number.is_nan() => Err(ConversionProblem::NonFinite { found: "NaN" }),
        None if number > 0.0 => Err(ConversionProblem::NonFinite { found: "Infinity" }),
        None => Err(ConversionProblem::NonFinite { found: "-Infinity" }),
    }
}

/// Runtime type name used in conversion errors
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_int_conversion() {
        assert_eq!(to_int(&json!(5)), Some(5));
        assert_eq!(to_int(&json!(-3)), Some(-3));
        assert_eq!(to_int(&json!(5.0)), Some(5));
        assert_eq!(to_int(&json!(5.5)), None);
        assert_eq!(to_int(&json!(4_294_967_296u64)), None);
        assert_eq!(to_int(&json!(u64::MAX)), None);
        assert_eq!(to_int(&json!(1e12)), None);
        assert_eq!(to_int(&json!("5")), None);
        assert_eq!(to_int(&json!(true)), None);
    }

    #[test]
    fn test_double_conversion() {
        assert_eq!(to_double(&json!(0.5)), Some(0.5));
        assert_eq!(to_double(&json!(2)), Some(2.0));
        assert_eq!(to_double(&json!(null)), None);
        assert_eq!(to_double(&json!([1.0])), None);
    }

    #[test]
    fn test_finite_number() {
        assert_eq!(finite_number(0.5), Ok(json!(0.5)));
        assert_eq!(to_int(&finite_number(4.0).unwrap()), Some(4));
        assert_eq!(
            finite_number(f64::NAN),
            Err(ConversionProblem::NonFinite { found: "NaN" })
        );
        assert_eq!(
            finite_number(f64::INFINITY),
            Err(ConversionProblem::NonFinite { found: "Infinity" })
        );
        assert_eq!(
            finite_number(f64::NEG_INFINITY),
            Err(ConversionProblem::NonFinite { found: "-Infinity" })
        );
    }

    #[test]
    fn test_slot_assign() {
        let mut n = 0;
        Slot::Int(&mut n).assign(&json!(8)).unwrap();
        assert_eq!(n, 8);

        let mut flag = false;
        let err = Slot::Bool(&mut flag).assign(&json!(1)).unwrap_err();
        assert_eq!(
            err,
            ConversionProblem::WrongType {
                expected: OptionKind::Bool,
                found: "number"
            }
        );
        assert!(!flag);

        let mut threshold = 0.001;
        let err = Slot::Double(&mut threshold).assign(&json!({"v": 1})).unwrap_err();
        assert!(matches!(err, ConversionProblem::WrongType { found: "object", .. }));
        assert_eq!(threshold, 0.001);
    }

    #[test]
    fn test_option_value_to_json() {
        assert_eq!(Value::from(OptionValue::Int(4)), json!(4));
        assert_eq!(Value::from(OptionValue::Double(0.01)), json!(0.01));
        assert_eq!(Value::from(OptionValue::Bool(true)), json!(true));
        assert_eq!(OptionValue::Double(1.0).kind(), OptionKind::Double);
    }
}
