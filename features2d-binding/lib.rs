//! Runtime-facing wrappers for the features2d detector family.
//!
//! Every wrapper follows the same pattern: constructor arguments arrive as
//! runtime values, are unwrapped into the detector's options record (either
//! positionally or from a single options object), handed to the native
//! engine, and the resulting instance is kept behind a [`DetectorHandle`]
//! whose accessors read the live parameters back.

use serde_json::{Map, Value};

use features2d_engine::{Feature2D, NativeDetector};

pub mod args;
pub mod detectors;
pub mod error;
pub mod handle;
pub mod schema;
pub mod value;
pub mod worker;

pub use args::{collect_args, ArgForm};
pub use detectors::{AkazeDetector, BriskDetector, KazeDetector, OrbDetector};
pub use error::{ArgLocation, BindingError, BindingResult, ConversionProblem};
pub use handle::DetectorHandle;
pub use schema::{options_to_map, unwrap_options, DetectorOptions};
pub use value::{finite_number, OptionKind, OptionValue, Slot};
pub use worker::{spawn_construct, PendingDetector};

/// One wrapper class of the family
pub trait DetectorBinding: Sized + Send + 'static {
    /// Class name as the runtime sees it, e.g. `"AKAZEDetector"`
    const CLASS: &'static str;

    type Options: DetectorOptions;
    type Engine: NativeDetector<Options = Self::Options>;

    fn from_handle(handle: DetectorHandle<Self::Engine>) -> Self;

    fn handle(&self) -> &DetectorHandle<Self::Engine>;

    fn handle_mut(&mut self) -> &mut DetectorHandle<Self::Engine>;

    /// Construct from positional arguments or a single options object
    fn construct(args: &[Value]) -> BindingResult<Self> {
        let options = unwrap_options::<Self::Options>(Self::CLASS, args)?;
        Self::from_options(options)
    }

    /// Construct from an already resolved options record
    fn from_options(options: Self::Options) -> BindingResult<Self> {
        DetectorHandle::create(Self::CLASS, &options).map(Self::from_handle)
    }

    /// Release the native instance ahead of drop
    fn dispose(&mut self) -> bool {
        self.handle_mut().dispose()
    }

    fn is_disposed(&self) -> bool {
        self.handle().is_disposed()
    }
}

/// Opaque view handed to downstream consumers such as matchers
pub trait FeatureDetector: Send {
    fn class_name(&self) -> &'static str;

    /// The live native instance
    fn native(&self) -> BindingResult<&dyn Feature2D>;

    /// All options keyed by runtime name, in constructor order
    fn properties(&self) -> BindingResult<Map<String, Value>>;

    fn property(&self, name: &str) -> BindingResult<Option<OptionValue>>;
}

impl<D: DetectorBinding> FeatureDetector for D {
    fn class_name(&self) -> &'static str {
        D::CLASS
    }

    fn native(&self) -> BindingResult<&dyn Feature2D> {
        let engine = self.handle().get("native")?;
        Ok(engine)
    }

    fn properties(&self) -> BindingResult<Map<String, Value>> {
        let engine = self.handle().get("properties")?;
        Ok(options_to_map(&engine.options()))
    }

    fn property(&self, name: &str) -> BindingResult<Option<OptionValue>> {
        let engine = self.handle().get("property")?;
        Ok(engine.options().value_of(name))
    }
}
