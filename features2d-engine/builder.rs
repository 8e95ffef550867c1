use features2d_core::{AkazeOptions, DescriptorType, Diffusivity};

use crate::akaze::Akaze;
use crate::error::EngineResult;

/// Builder for creating an [`Akaze`] engine
#[derive(Debug, Clone, Default)]
pub struct AkazeBuilder {
    options: AkazeOptions,
}

impl AkazeBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from an existing options record
    pub fn from_options(options: AkazeOptions) -> Self {
        Self { options }
    }

    pub fn descriptor_type(mut self, descriptor_type: DescriptorType) -> Self {
        self.options.descriptor_type = descriptor_type as i32;
        self
    }

    /// Set the descriptor length in bits (0 = full length)
    pub fn descriptor_size(mut self, bits: i32) -> Self {
        self.options.descriptor_size = bits;
        self
    }

    pub fn descriptor_channels(mut self, channels: i32) -> Self {
        self.options.descriptor_channels = channels;
        self
    }

    /// Set the detector response threshold
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.options.threshold = threshold;
        self
    }

    pub fn n_octaves(mut self, n_octaves: i32) -> Self {
        self.options.n_octaves = n_octaves;
        self
    }

    pub fn n_octave_layers(mut self, n_octave_layers: i32) -> Self {
        self.options.n_octave_layers = n_octave_layers;
        self
    }

    pub fn diffusivity(mut self, diffusivity: Diffusivity) -> Self {
        self.options.diffusivity = diffusivity as i32;
        self
    }

    /// Switch the current descriptor family to its rotation-variant form
    pub fn upright(mut self) -> Self {
        self.options.descriptor_type = match DescriptorType::try_from(self.options.descriptor_type) {
            Ok(DescriptorType::Kaze) => DescriptorType::KazeUpright as i32,
            Ok(DescriptorType::Mldb) => DescriptorType::MldbUpright as i32,
            _ => self.options.descriptor_type,
        };
        self
    }

    /// Validate and build the engine
    pub fn build(self) -> EngineResult<Akaze> {
        Akaze::new(&self.options)
    }

    /// Options record the builder currently holds
    pub fn options(&self) -> &AkazeOptions {
        &self.options
    }

    pub fn into_options(self) -> AkazeOptions {
        self.options
    }

    /// Generate a summary of the builder's configuration
    pub fn summary(&self) -> String {
        let o = &self.options;
        format!(
            "AkazeBuilder: descriptor_type={}, descriptor_size={}, channels={}, threshold={}, octaves={}x{}, diffusivity={}",
            o.descriptor_type, o.descriptor_size, o.descriptor_channels, o.threshold,
            o.n_octaves, o.n_octave_layers, o.diffusivity
        )
    }
}
