use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use features2d_engine::NativeDetector;
use tracing::{trace, warn};

use crate::error::{BindingError, BindingResult};

/// Exclusive owner of one native detector instance.
///
/// The engine is released when the handle is dropped or disposed; every read
/// after disposal fails with [`BindingError::InvalidHandle`].
#[derive(Debug)]
pub struct DetectorHandle<E> {
    class: &'static str,
    engine: Option<E>,
}

impl<E: NativeDetector> DetectorHandle<E> {
    /// Build the engine behind a fresh handle.
    ///
    /// Engine errors and engine panics both come back as
    /// [`BindingError::NativeConstruction`].
    pub fn create(class: &'static str, options: &E::Options) -> BindingResult<Self> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| E::create(options)));
        let message = match outcome {
            Ok(Ok(engine)) => {
                return Ok(Self {
                    class,
                    engine: Some(engine),
                })
            }
            Ok(Err(err)) => err.to_string(),
            Err(payload) => panic_message(payload.as_ref()),
        };
        warn!(class, %message, "native construction failed");
        Err(BindingError::NativeConstruction { class, message })
    }

    /// Borrow the live engine on behalf of `accessor`
    pub fn get(&self, accessor: &'static str) -> BindingResult<&E> {
        self.engine.as_ref().ok_or(BindingError::InvalidHandle {
            class: self.class,
            accessor,
        })
    }

    /// Release the engine now. Returns `false` if it was already released.
    pub fn dispose(&mut self) -> bool {
        let released = self.engine.take().is_some();
        if released {
            trace!(class = self.class, "released native detector");
        }
        released
    }

    pub fn is_disposed(&self) -> bool {
        self.engine.is_none()
    }

    pub fn class(&self) -> &'static str {
        self.class
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("native engine panicked: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("native engine panicked: {}", s)
    } else {
        "native engine panicked".to_string()
    }
}
