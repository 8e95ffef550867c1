use features2d_core::{BriskOptions, DescriptorElement, NormType};
use tracing::debug;

use crate::error::{at_least, EngineError, EngineResult};
use crate::{Feature2D, NativeDetector};

/// Configured BRISK detector instance
#[derive(Debug, Clone, PartialEq)]
pub struct Brisk {
    thresh: i32,
    octaves: i32,
    pattern_scale: f64,
}

impl Brisk {
    pub fn new(options: &BriskOptions) -> EngineResult<Self> {
        let thresh = at_least("thresh", 0, options.thresh)?;
        // 0 octaves means single-scale detection
        let octaves = at_least("octaves", 0, options.octaves)?;
        if !options.pattern_scale.is_finite() || options.pattern_scale <= 0.0 {
            return Err(EngineError::InvalidPatternScale(options.pattern_scale));
        }

        debug!(thresh, octaves, "created BRISK engine");

        Ok(Self {
            thresh,
            octaves,
            pattern_scale: options.pattern_scale,
        })
    }

    /// AGAST detection threshold
    pub fn thresh(&self) -> i32 {
        self.thresh
    }

    pub fn octaves(&self) -> i32 {
        self.octaves
    }

    pub fn pattern_scale(&self) -> f64 {
        self.pattern_scale
    }
}

impl Feature2D for Brisk {
    fn name(&self) -> &'static str {
        "BRISK"
    }

    fn descriptor_len(&self) -> usize {
        64
    }

    fn descriptor_element(&self) -> DescriptorElement {
        DescriptorElement::U8
    }

    fn default_norm(&self) -> NormType {
        NormType::Hamming
    }
}

impl NativeDetector for Brisk {
    type Options = BriskOptions;

    fn create(options: &BriskOptions) -> EngineResult<Self> {
        Self::new(options)
    }

    fn options(&self) -> BriskOptions {
        BriskOptions {
            thresh: self.thresh,
            octaves: self.octaves,
            pattern_scale: self.pattern_scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_construction() {
        let brisk = Brisk::new(&BriskOptions::default()).unwrap();
        assert_eq!(brisk.thresh(), 30);
        assert_eq!(brisk.octaves(), 3);
        assert_eq!(brisk.pattern_scale(), 1.0);
        assert_eq!(brisk.descriptor_len(), 64);
    }

    #[test]
    fn test_single_scale_allowed() {
        let brisk = Brisk::new(&BriskOptions { octaves: 0, ..Default::default() }).unwrap();
        assert_eq!(brisk.octaves(), 0);
    }

    #[test]
    fn test_rejections() {
        let result = Brisk::new(&BriskOptions { pattern_scale: 0.0, ..Default::default() });
        assert_eq!(result, Err(EngineError::InvalidPatternScale(0.0)));

        let result = Brisk::new(&BriskOptions { thresh: -1, ..Default::default() });
        assert!(matches!(result, Err(EngineError::BelowMinimum { name: "thresh", .. })));
    }
}
