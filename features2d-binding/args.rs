use serde_json::{Map, Value};

use crate::error::{ArgLocation, BindingError, BindingResult, ConversionProblem};

/// The two shapes a constructor call can take
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArgForm<'a> {
    Positional(&'a [Value]),
    Named(&'a Map<String, Value>),
}

impl<'a> ArgForm<'a> {
    /// Pick the call form from the first argument.
    ///
    /// An object first argument selects the named form; any further non-null
    /// argument is then rejected instead of being silently dropped.
    pub fn resolve(class: &'static str, args: &'a [Value]) -> BindingResult<Self> {
        let Some(Value::Object(map)) = args.first() else {
            return Ok(ArgForm::Positional(args));
        };
        if let Some(extra) = args.iter().skip(1).position(|v| !v.is_null()) {
            return Err(BindingError::TypeConversion {
                class,
                location: ArgLocation::Index(extra + 1),
                problem: ConversionProblem::MixedForms,
            });
        }
        Ok(ArgForm::Named(map))
    }

    pub fn name(&self) -> &'static str {
        match self {
            ArgForm::Positional(_) => "positional",
            ArgForm::Named(_) => "named",
        }
    }
}

/// Arguments from a host that reports absent parameters as `None`: trailing
/// absent values are dropped and inner ones become `null`.
pub fn collect_args<I>(params: I) -> Vec<Value>
where
    I: IntoIterator<Item = Option<Value>>,
{
    let mut args: Vec<Value> = params
        .into_iter()
        .map(|param| param.unwrap_or(Value::Null))
        .collect();
    while args.last().is_some_and(Value::is_null) {
        args.pop();
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_is_positional() {
        assert_eq!(ArgForm::resolve("X", &[]).unwrap(), ArgForm::Positional(&[]));
    }

    #[test]
    fn test_object_is_named() {
        let args = [json!({"nOctaves": 8})];
        let form = ArgForm::resolve("X", &args).unwrap();
        assert!(matches!(form, ArgForm::Named(map) if map.contains_key("nOctaves")));
        assert_eq!(form.name(), "named");
    }

    #[test]
    fn test_object_with_trailing_nulls() {
        let args = [json!({}), Value::Null, Value::Null];
        assert!(matches!(ArgForm::resolve("X", &args), Ok(ArgForm::Named(_))));
    }

    #[test]
    fn test_mixed_forms_rejected() {
        let args = [json!({"threshold": 0.1}), Value::Null, json!(4)];
        for _ in 0..3 {
            let err = ArgForm::resolve("AKAZEDetector", &args).unwrap_err();
            assert_eq!(
                err,
                BindingError::TypeConversion {
                    class: "AKAZEDetector",
                    location: ArgLocation::Index(2),
                    problem: ConversionProblem::MixedForms,
                }
            );
        }
    }

    #[test]
    fn test_object_after_scalar_is_positional() {
        let args = [json!(5), json!({})];
        assert!(matches!(ArgForm::resolve("X", &args), Ok(ArgForm::Positional(a)) if a.len() == 2));
    }

    #[test]
    fn test_collect_args_trims_trailing() {
        assert!(collect_args([None, None, None]).is_empty());
        assert_eq!(
            collect_args([Some(json!(5)), None, Some(json!(0.5)), None]),
            vec![json!(5), Value::Null, json!(0.5)]
        );
        assert_eq!(
            collect_args([Some(json!({})), Some(Value::Null)]),
            vec![json!({})]
        );
    }
}
