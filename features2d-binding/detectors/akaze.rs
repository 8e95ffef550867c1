use features2d_core::AkazeOptions;
use features2d_engine::Akaze;
use serde_json::Value;

use crate::error::BindingResult;
use crate::handle::DetectorHandle;
use crate::schema::DetectorOptions;
use crate::value::{OptionValue, Slot};
use crate::DetectorBinding;

impl DetectorOptions for AkazeOptions {
    const FIELDS: &'static [&'static str] = &[
        "descriptorType",
        "descriptorSize",
        "descriptorChannels",
        "threshold",
        "nOctaves",
        "nOctaveLayers",
        "diffusivity",
    ];

    fn slot(&mut self, index: usize) -> Option<Slot<'_>> {
        Some(match index {
            0 => Slot::Int(&mut self.descriptor_type),
            1 => Slot::Int(&mut self.descriptor_size),
            2 => Slot::Int(&mut self.descriptor_channels),
            3 => Slot::Double(&mut self.threshold),
            4 => Slot::Int(&mut self.n_octaves),
            5 => Slot::Int(&mut self.n_octave_layers),
            6 => Slot::Int(&mut self.diffusivity),
            _ => return None,
        })
    }

    fn value(&self, index: usize) -> Option<OptionValue> {
        Some(match index {
            0 => OptionValue::Int(self.descriptor_type),
            1 => OptionValue::Int(self.descriptor_size),
            2 => OptionValue::Int(self.descriptor_channels),
            3 => OptionValue::Double(self.threshold),
            4 => OptionValue::Int(self.n_octaves),
            5 => OptionValue::Int(self.n_octave_layers),
            6 => OptionValue::Int(self.diffusivity),
            _ => return None,
        })
    }
}

/// Runtime wrapper around an AKAZE engine
#[derive(Debug)]
pub struct AkazeDetector {
    handle: DetectorHandle<Akaze>,
}

impl DetectorBinding for AkazeDetector {
    const CLASS: &'static str = "AKAZEDetector";

    type Options = AkazeOptions;
    type Engine = Akaze;

    fn from_handle(handle: DetectorHandle<Akaze>) -> Self {
        Self { handle }
    }

    fn handle(&self) -> &DetectorHandle<Akaze> {
        &self.handle
    }

    fn handle_mut(&mut self) -> &mut DetectorHandle<Akaze> {
        &mut self.handle
    }
}

impl AkazeDetector {
    /// `(descriptorType, descriptorSize, descriptorChannels, threshold,
    /// nOctaves, nOctaveLayers, diffusivity)` or `{ ...same names }`
    pub fn new(args: &[Value]) -> BindingResult<Self> {
        Self::construct(args)
    }

    pub fn descriptor_type(&self) -> BindingResult<i32> {
        Ok(self.handle.get("descriptorType")?.descriptor_type() as i32)
    }

    pub fn descriptor_size(&self) -> BindingResult<i32> {
        Ok(self.handle.get("descriptorSize")?.descriptor_size())
    }

    pub fn descriptor_channels(&self) -> BindingResult<i32> {
        Ok(self.handle.get("descriptorChannels")?.descriptor_channels())
    }

    pub fn threshold(&self) -> BindingResult<f64> {
        Ok(self.handle.get("threshold")?.threshold())
    }

    pub fn n_octaves(&self) -> BindingResult<i32> {
        Ok(self.handle.get("nOctaves")?.n_octaves())
    }

    pub fn n_octave_layers(&self) -> BindingResult<i32> {
        Ok(self.handle.get("nOctaveLayers")?.n_octave_layers())
    }

    pub fn diffusivity(&self) -> BindingResult<i32> {
        Ok(self.handle.get("diffusivity")?.diffusivity() as i32)
    }
}
