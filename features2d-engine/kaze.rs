use features2d_core::{DescriptorElement, Diffusivity, KazeOptions, NormType};
use tracing::debug;

use crate::error::{at_least, non_negative_threshold, EngineError, EngineResult};
use crate::{Feature2D, NativeDetector};

/// Configured KAZE detector instance
#[derive(Debug, Clone, PartialEq)]
pub struct Kaze {
    extended: bool,
    upright: bool,
    threshold: f64,
    n_octaves: i32,
    n_octave_layers: i32,
    diffusivity: Diffusivity,
}

impl Kaze {
    pub fn new(options: &KazeOptions) -> EngineResult<Self> {
        let threshold = non_negative_threshold("threshold", options.threshold)?;
        let n_octaves = at_least("nOctaves", 1, options.n_octaves)?;
        let n_octave_layers = at_least("nOctaveLayers", 1, options.n_octave_layers)?;
        let diffusivity =
            Diffusivity::try_from(options.diffusivity).map_err(EngineError::InvalidDiffusivity)?;

        debug!(extended = options.extended, upright = options.upright, "created KAZE engine");

        Ok(Self {
            extended: options.extended,
            upright: options.upright,
            threshold,
            n_octaves,
            n_octave_layers,
            diffusivity,
        })
    }

    /// 128-element descriptors instead of 64
    pub fn extended(&self) -> bool {
        self.extended
    }

    /// Skips orientation estimation
    pub fn upright(&self) -> bool {
        self.upright
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn n_octaves(&self) -> i32 {
        self.n_octaves
    }

    pub fn n_octave_layers(&self) -> i32 {
        self.n_octave_layers
    }

    pub fn diffusivity(&self) -> Diffusivity {
        self.diffusivity
    }
}

impl Feature2D for Kaze {
    fn name(&self) -> &'static str {
        "KAZE"
    }

    fn descriptor_len(&self) -> usize {
        if self.extended {
            128
        } else {
            64
        }
    }

    fn descriptor_element(&self) -> DescriptorElement {
        DescriptorElement::F32
    }

    fn default_norm(&self) -> NormType {
        NormType::L2
    }
}

impl NativeDetector for Kaze {
    type Options = KazeOptions;

    fn create(options: &KazeOptions) -> EngineResult<Self> {
        Self::new(options)
    }

    fn options(&self) -> KazeOptions {
        KazeOptions {
            extended: self.extended,
            upright: self.upright,
            threshold: self.threshold,
            n_octaves: self.n_octaves,
            n_octave_layers: self.n_octave_layers,
            diffusivity: self.diffusivity as i32,
        }
    }
}
