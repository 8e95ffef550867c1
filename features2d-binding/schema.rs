use std::fmt;

use serde_json::{Map, Value};
use tracing::debug;

use crate::args::ArgForm;
use crate::error::{ArgLocation, BindingError, BindingResult, ConversionProblem};
use crate::value::{OptionValue, Slot};

/// Field table of an options record, in positional order
pub trait DetectorOptions: Default + Clone + fmt::Debug + Send + 'static {
    /// Runtime names, indexed by argument position
    const FIELDS: &'static [&'static str];

    /// Mutable access to the field at `index`, `None` past the last field
    fn slot(&mut self, index: usize) -> Option<Slot<'_>>;

    fn value(&self, index: usize) -> Option<OptionValue>;

    /// Look a field up by its runtime name
    fn value_of(&self, name: &str) -> Option<OptionValue> {
        let index = Self::FIELDS.iter().position(|f| *f == name)?;
        self.value(index)
    }
}

/// Parse constructor arguments into an options record, defaults filling gaps.
///
/// `null` means "absent" in both forms.
pub fn unwrap_options<O: DetectorOptions>(class: &'static str, args: &[Value]) -> BindingResult<O> {
    let mut options = O::default();
    let form = ArgForm::resolve(class, args)?;
    debug!(class, form = form.name(), "unwrapping constructor arguments");

    match form {
        ArgForm::Positional(values) => {
            for (index, value) in values.iter().enumerate() {
                if value.is_null() {
                    continue;
                }
                let location = ArgLocation::Index(index);
                let Some(slot) = options.slot(index) else {
                    return Err(BindingError::TypeConversion {
                        class,
                        location,
                        problem: ConversionProblem::Unexpected { max: O::FIELDS.len() },
                    });
                };
                slot.assign(value).map_err(|problem| BindingError::TypeConversion {
                    class,
                    location,
                    problem,
                })?;
            }
        }
        ArgForm::Named(map) => {
            for (index, name) in O::FIELDS.iter().enumerate() {
                let Some(value) = map.get(*name).filter(|v| !v.is_null()) else {
                    continue;
                };
                let Some(slot) = options.slot(index) else {
                    continue;
                };
                slot.assign(value).map_err(|problem| BindingError::TypeConversion {
                    class,
                    location: ArgLocation::Field(*name),
                    problem,
                })?;
            }
            for key in map.keys().filter(|k| !O::FIELDS.contains(&k.as_str())) {
                debug!(class, key = key.as_str(), "ignoring unknown option");
            }
        }
    }

    Ok(options)
}

/// Every field of `options` keyed by runtime name, in positional order
pub fn options_to_map<O: DetectorOptions>(options: &O) -> Map<String, Value> {
    O::FIELDS
        .iter()
        .enumerate()
        .filter_map(|(index, name)| Some((name.to_string(), Value::from(options.value(index)?))))
        .collect()
}
