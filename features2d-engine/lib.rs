//! Native detector engine for the features2d bindings.
//!
//! Each engine type owns a validated parameter set for one detector family
//! and reports the descriptor layout downstream matchers rely on. Keypoint
//! detection itself is not implemented here.

use std::fmt;

use features2d_core::{DescriptorElement, NormType};

pub mod akaze;
pub mod brisk;
pub mod builder;
#[cfg(feature = "serde")]
pub mod config;
pub mod error;
pub mod kaze;
pub mod orb;

pub use akaze::Akaze;
pub use brisk::Brisk;
pub use builder::AkazeBuilder;
#[cfg(feature = "serde")]
pub use config::{ConfigError, ConfigResult, DetectorConfig};
pub use error::{EngineError, EngineResult};
pub use kaze::Kaze;
pub use orb::Orb;

/// Object-safe view of a constructed detector, shared with downstream consumers
pub trait Feature2D: Send + Sync + fmt::Debug {
    /// Algorithm name, e.g. `"AKAZE"`
    fn name(&self) -> &'static str;

    /// Number of elements in one descriptor row
    fn descriptor_len(&self) -> usize;

    fn descriptor_element(&self) -> DescriptorElement;

    fn default_norm(&self) -> NormType;
}

/// A detector family the binding layer can construct from an options record
pub trait NativeDetector: Feature2D + Sized + 'static {
    type Options: Clone + Default + fmt::Debug + Send + 'static;

    /// Validate `options` and build an engine instance
    fn create(options: &Self::Options) -> EngineResult<Self>;

    /// Read back the live parameters
    fn options(&self) -> Self::Options;
}

pub(crate) fn div_up(value: usize, divisor: usize) -> usize {
    value.div_ceil(divisor)
}
