//! Rust ↔ JS conversions shared by the detector classes.

use napi::{Env, JsUnknown, Status, ValueType};
use serde_json::{Map, Value};

use features2d_binding::{
    collect_args, finite_number, ArgLocation, BindingError, DetectorBinding, DetectorOptions,
};

/// Thrown JS error for a binding failure.
pub fn to_napi_error(err: BindingError) -> napi::Error {
    let status = match &err {
        BindingError::TypeConversion { .. } | BindingError::InvalidHandle { .. } => {
            Status::InvalidArg
        }
        BindingError::NativeConstruction { .. } => Status::GenericFailure,
    };
    napi::Error::new(status, err.to_string())
}

/// Constructor parameters of class `D` as runtime values.
///
/// Numbers are checked here because `NaN` and the infinities do not survive
/// the trip into `serde_json::Value`; an options object is read field by
/// field for the same reason.
pub fn constructor_args<D: DetectorBinding>(
    env: &Env,
    params: Vec<Option<JsUnknown>>,
) -> napi::Result<Vec<Value>> {
    let values = params
        .into_iter()
        .enumerate()
        .map(|(index, param)| {
            param
                .map(|param| host_value::<D>(env, index, param))
                .transpose()
        })
        .collect::<napi::Result<Vec<_>>>()?;
    Ok(collect_args(values))
}

fn host_value<D: DetectorBinding>(env: &Env, index: usize, param: JsUnknown) -> napi::Result<Value> {
    match param.get_type()? {
        ValueType::Number => number::<D>(ArgLocation::Index(index), param),
        ValueType::Object if !param.is_array()? => {
            let object = param.coerce_to_object()?;
            let mut map = Map::new();
            for name in D::Options::FIELDS {
                if !object.has_named_property(name)? {
                    continue;
                }
                let field: JsUnknown = object.get_named_property(name)?;
                let value = match field.get_type()? {
                    ValueType::Number => number::<D>(ArgLocation::Field(*name), field)?,
                    _ => env.from_js_value(field)?,
                };
                map.insert(name.to_string(), value);
            }
            Ok(Value::Object(map))
        }
        _ => env.from_js_value(param),
    }
}

fn number<D: DetectorBinding>(location: ArgLocation, value: JsUnknown) -> napi::Result<Value> {
    let number = value.coerce_to_number()?.get_double()?;
    finite_number(number).map_err(|problem| {
        to_napi_error(BindingError::TypeConversion {
            class: D::CLASS,
            location,
            problem,
        })
    })
}
