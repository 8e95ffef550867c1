use features2d_core::{AkazeOptions, DescriptorElement, DescriptorType, Diffusivity, NormType};
use tracing::debug;

use crate::builder::AkazeBuilder;
use crate::error::{at_least, non_negative_threshold, EngineError, EngineResult};
use crate::{div_up, Feature2D, NativeDetector};

/// Bits in a full-length MLDB descriptor, per channel
pub const MLDB_BITS_PER_CHANNEL: i32 = 6 + 36 + 120;

/// Floats in a KAZE-style descriptor produced by AKAZE
pub const KAZE_DESCRIPTOR_LEN: usize = 64;

/// Configured AKAZE detector instance
#[derive(Debug, Clone, PartialEq)]
pub struct Akaze {
    descriptor_type: DescriptorType,
    descriptor_size: i32,
    descriptor_channels: i32,
    threshold: f64,
    n_octaves: i32,
    n_octave_layers: i32,
    diffusivity: Diffusivity,
}

impl Akaze {
    /// Creates an AKAZE detector, rejecting parameter sets it cannot serve
    pub fn new(options: &AkazeOptions) -> EngineResult<Self> {
        let descriptor_type = DescriptorType::try_from(options.descriptor_type)
            .map_err(EngineError::InvalidDescriptorType)?;

        let channels = options.descriptor_channels;
        if !(1..=3).contains(&channels) {
            return Err(EngineError::InvalidDescriptorChannels(channels));
        }

        if options.descriptor_size < 0 {
            return Err(EngineError::NegativeDescriptorSize(options.descriptor_size));
        }
        let max_bits = MLDB_BITS_PER_CHANNEL * channels;
        if descriptor_type.is_binary() && options.descriptor_size > max_bits {
            return Err(EngineError::DescriptorSizeTooLarge {
                size: options.descriptor_size,
                max: max_bits,
                channels,
            });
        }

        let threshold = non_negative_threshold("threshold", options.threshold)?;
        let n_octaves = at_least("nOctaves", 1, options.n_octaves)?;
        let n_octave_layers = at_least("nOctaveLayers", 1, options.n_octave_layers)?;
        let diffusivity =
            Diffusivity::try_from(options.diffusivity).map_err(EngineError::InvalidDiffusivity)?;

        debug!(?descriptor_type, ?diffusivity, n_octaves, "created AKAZE engine");

        Ok(Self {
            descriptor_type,
            descriptor_size: options.descriptor_size,
            descriptor_channels: channels,
            threshold,
            n_octaves,
            n_octave_layers,
            diffusivity,
        })
    }

    /// Start a fluent builder from the default options
    pub fn builder() -> AkazeBuilder {
        AkazeBuilder::new()
    }

    pub fn descriptor_type(&self) -> DescriptorType {
        self.descriptor_type
    }

    /// Requested descriptor length in bits (0 = full length)
    pub fn descriptor_size(&self) -> i32 {
        self.descriptor_size
    }

    pub fn descriptor_channels(&self) -> i32 {
        self.descriptor_channels
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

impl Feature2D for Akaze {
    fn name(&self) -> &'static str {
        "AKAZE"
    }

    fn descriptor_len(&self) -> usize {
        if !self.descriptor_type.is_binary() {
            return KAZE_DESCRIPTOR_LEN;
        }
        let bits = if self.descriptor_size == 0 {
            MLDB_BITS_PER_CHANNEL * self.descriptor_channels
        } else {
            self.descriptor_size
        };
        div_up(bits as usize, 8)
    }

    fn descriptor_element(&self) -> DescriptorElement {
        if self.descriptor_type.is_binary() {
            DescriptorElement::U8
        } else {
            DescriptorElement::F32
        }
    }

    fn default_norm(&self) -> NormType {
        if self.descriptor_type.is_binary() {
            NormType::Hamming
        } else {
            NormType::L2
        }
    }
}

impl NativeDetector for Akaze {
    type Options = AkazeOptions;

    fn create(options: &AkazeOptions) -> EngineResult<Self> {
        Self::new(options)
    }

    fn options(&self) -> AkazeOptions {
        AkazeOptions {
            descriptor_type: self.descriptor_type as i32,
            descriptor_size: self.descriptor_size,
            descriptor_channels: self.descriptor_channels,
            threshold: self.threshold,
            n_octaves: self.n_octaves,
            n_octave_layers: self.n_octave_layers,
            diffusivity: self.diffusivity as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_construction() {
        let akaze = Akaze::new(&AkazeOptions::default()).unwrap();
        assert_eq!(akaze.descriptor_type(), DescriptorType::Mldb);
        assert_eq!(akaze.threshold(), 0.001);
        assert_eq!(akaze.diffusivity(), Diffusivity::PeronaMalik2);
        assert_eq!(akaze.options(), AkazeOptions::default());
    }

    #[test]
    fn test_invalid_tags() {
        let opts = AkazeOptions { descriptor_type: 7, ..Default::default() };
        assert_eq!(Akaze::new(&opts), Err(EngineError::InvalidDescriptorType(7)));

        let opts = AkazeOptions { diffusivity: 4, ..Default::default() };
        assert_eq!(Akaze::new(&opts), Err(EngineError::InvalidDiffusivity(4)));
    }

    #[test]
    fn test_invalid_channels() {
        for channels in [0, 4, -1] {
            let opts = AkazeOptions { descriptor_channels: channels, ..Default::default() };
            assert_eq!(
                Akaze::new(&opts),
                Err(EngineError::InvalidDescriptorChannels(channels))
            );
        }
    }

    #[test]
    fn test_descriptor_size_limits() {
        let opts = AkazeOptions { descriptor_size: -8, ..Default::default() };
        assert_eq!(Akaze::new(&opts), Err(EngineError::NegativeDescriptorSize(-8)));

        let opts = AkazeOptions {
            descriptor_size: 200,
            descriptor_channels: 1,
            ..Default::default()
        };
        assert!(matches!(
            Akaze::new(&opts),
            Err(EngineError::DescriptorSizeTooLarge { max: 162, .. })
        ));

        // KAZE-style descriptors ignore the bit length
        let opts = AkazeOptions {
            descriptor_type: DescriptorType::Kaze as i32,
            descriptor_size: 1000,
            ..Default::default()
        };
        assert!(Akaze::new(&opts).is_ok());
    }

    #[test]
    fn test_scale_space_limits() {
        let opts = AkazeOptions { n_octaves: 0, ..Default::default() };
        assert!(matches!(
            Akaze::new(&opts),
            Err(EngineError::BelowMinimum { name: "nOctaves", .. })
        ));

        let opts = AkazeOptions { n_octave_layers: 0, ..Default::default() };
        assert!(matches!(
            Akaze::new(&opts),
            Err(EngineError::BelowMinimum { name: "nOctaveLayers", .. })
        ));

        let opts = AkazeOptions { threshold: f64::NAN, ..Default::default() };
        assert!(matches!(Akaze::new(&opts), Err(EngineError::InvalidThreshold { .. })));
    }

    #[test]
    fn test_descriptor_layout() {
        let full = Akaze::new(&AkazeOptions::default()).unwrap();
        assert_eq!(full.descriptor_len(), 61);
        assert_eq!(full.descriptor_element(), DescriptorElement::U8);
        assert_eq!(full.default_norm(), NormType::Hamming);

        let short = Akaze::new(&AkazeOptions { descriptor_size: 64, ..Default::default() }).unwrap();
        assert_eq!(short.descriptor_len(), 8);

        let one_channel =
            Akaze::new(&AkazeOptions { descriptor_channels: 1, ..Default::default() }).unwrap();
        assert_eq!(one_channel.descriptor_len(), 21);

        let kaze = Akaze::new(&AkazeOptions {
            descriptor_type: DescriptorType::KazeUpright as i32,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(kaze.descriptor_len(), 64);
        assert_eq!(kaze.descriptor_element(), DescriptorElement::F32);
        assert_eq!(kaze.default_norm(), NormType::L2);
    }

    proptest! {
        #[test]
        fn test_valid_options_read_back(
            descriptor_type in 2..=5i32,
            channels in 1..=3i32,
            threshold in 0.0..10.0f64,
            n_octaves in 1..16i32,
            n_octave_layers in 1..16i32,
            diffusivity in 0..=3i32,
        ) {
            let opts = AkazeOptions {
                descriptor_type,
                descriptor_size: 0,
                descriptor_channels: channels,
                threshold,
                n_octaves,
                n_octave_layers,
                diffusivity,
            };
            let akaze = Akaze::new(&opts).unwrap();
            prop_assert_eq!(akaze.options(), opts);
        }
    }
}
