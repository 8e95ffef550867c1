//! # features2d-napi
//!
//! Node-API classes for the detector family. Each class owns one binding
//! wrapper and forwards construction, accessors and disposal to it.
//!
//! - `detectors` exports `AKAZEDetector`, `KAZEDetector`, `ORBDetector` and `BRISKDetector`
//! - `conversions` maps binding errors onto thrown JS errors
//! - `runtime` holds process-wide setup (logging, worker pool)

pub mod conversions;
pub mod detectors;
pub mod runtime;
