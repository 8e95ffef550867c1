use features2d_core::{DescriptorElement, NormType, OrbOptions, ScoreType};
use tracing::debug;

use crate::error::{at_least, EngineError, EngineResult};
use crate::{Feature2D, NativeDetector};

/// Bytes in an ORB descriptor
pub const ORB_DESCRIPTOR_LEN: usize = 32;

/// Configured ORB detector instance
#[derive(Debug, Clone, PartialEq)]
pub struct Orb {
    n_features: i32,
    scale_factor: f64,
    n_levels: i32,
    edge_threshold: i32,
    first_level: i32,
    wta_k: i32,
    score_type: ScoreType,
    patch_size: i32,
    fast_threshold: i32,
}

impl Orb {
    pub fn new(options: &OrbOptions) -> EngineResult<Self> {
        let n_features = at_least("nFeatures", 1, options.n_features)?;
        if !options.scale_factor.is_finite() || options.scale_factor <= 1.0 {
            return Err(EngineError::InvalidScaleFactor(options.scale_factor));
        }
        let n_levels = at_least("nLevels", 1, options.n_levels)?;
        let edge_threshold = at_least("edgeThreshold", 0, options.edge_threshold)?;
        let first_level = at_least("firstLevel", 0, options.first_level)?;
        if !(2..=4).contains(&options.wta_k) {
            return Err(EngineError::InvalidWtaK(options.wta_k));
        }
        let score_type =
            ScoreType::try_from(options.score_type).map_err(EngineError::InvalidScoreType)?;
        let patch_size = at_least("patchSize", 2, options.patch_size)?;
        let fast_threshold = at_least("fastThreshold", 0, options.fast_threshold)?;

        debug!(n_features, n_levels, ?score_type, "created ORB engine");

        Ok(Self {
            n_features,
            scale_factor: options.scale_factor,
            n_levels,
            edge_threshold,
            first_level,
            wta_k: options.wta_k,
            score_type,
            patch_size,
            fast_threshold,
        })
    }

    pub fn n_features(&self) -> i32 {
        self.n_features
    }

    /// Pyramid decimation ratio
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn n_levels(&self) -> i32 {
        self.n_levels
    }

    pub fn edge_threshold(&self) -> i32 {
        self.edge_threshold
    }

    pub fn first_level(&self) -> i32 {
        self.first_level
    }

    /// Points compared per descriptor element
    pub fn wta_k(&self) -> i32 {
        self.wta_k
    }

    pub fn score_type(&self) -> ScoreType {
        self.score_type
    }

    pub fn patch_size(&self) -> i32 {
        self.patch_size
    }

    pub fn fast_threshold(&self) -> i32 {
        self.fast_threshold
    }
}

impl Feature2D for Orb {
    fn name(&self) -> &'static str {
        "ORB"
    }

    fn descriptor_len(&self) -> usize {
        ORB_DESCRIPTOR_LEN
    }

    fn descriptor_element(&self) -> DescriptorElement {
        DescriptorElement::U8
    }

    fn default_norm(&self) -> NormType {
        // WTA_K 3 and 4 pack two bits per comparison
        if self.wta_k == 2 {
            NormType::Hamming
        } else {
            NormType::Hamming2
        }
    }
}

impl NativeDetector for Orb {
    type Options = OrbOptions;

    fn create(options: &OrbOptions) -> EngineResult<Self> {
        Self::new(options)
    }

    fn options(&self) -> OrbOptions {
        OrbOptions {
            n_features: self.n_features,
            scale_factor: self.scale_factor,
            n_levels: self.n_levels,
            edge_threshold: self.edge_threshold,
            first_level: self.first_level,
            wta_k: self.wta_k,
            score_type: self.score_type as i32,
            patch_size: self.patch_size,
            fast_threshold: self.fast_threshold,
        }
    }
}
