use std::fmt;

use crate::value::OptionKind;

/// Where in a constructor call a bad value was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgLocation {
    Index(usize),
    Field(&'static str),
}

impl fmt::Display for ArgLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgLocation::Index(i) => write!(f, "argument {}", i),
            ArgLocation::Field(name) => write!(f, "property '{}'", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionProblem {
    #[error("expected {expected}, got {found}")]
    WrongType {
        expected: OptionKind,
        found: &'static str,
    },

    #[error("unexpected argument, at most {max} accepted")]
    Unexpected { max: usize },

    #[error("an options object must be the only argument")]
    MixedForms,

    #[error("expected a finite number, got {found}")]
    NonFinite { found: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    #[error("{class}::New - {location}: {problem}")]
    TypeConversion {
        class: &'static str,
        location: ArgLocation,
        problem: ConversionProblem,
    },

    #[error("{class}::New - {message}")]
    NativeConstruction { class: &'static str, message: String },

    #[error("{class}::{accessor} - detector has been disposed")]
    InvalidHandle {
        class: &'static str,
        accessor: &'static str,
    },
}

pub type BindingResult<T> = Result<T, BindingError>;
