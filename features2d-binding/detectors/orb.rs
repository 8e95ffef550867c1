use features2d_core::OrbOptions;
use features2d_engine::Orb;
use serde_json::Value;

use crate::error::BindingResult;
use crate::handle::DetectorHandle;
use crate::schema::DetectorOptions;
use crate::value::{OptionValue, Slot};
use crate::DetectorBinding;

impl DetectorOptions for OrbOptions {
    const FIELDS: &'static [&'static str] = &[
        "nFeatures",
        "scaleFactor",
        "nLevels",
        "edgeThreshold",
        "firstLevel",
        "WTA_K",
        "scoreType",
        "patchSize",
        "fastThreshold",
    ];

    fn slot(&mut self, index: usize) -> Option<Slot<'_>> {
        Some(match index {
            0 => Slot::Int(&mut self.n_features),
            1 => Slot::Double(&mut self.scale_factor),
            2 => Slot::Int(&mut self.n_levels),
            3 => Slot::Int(&mut self.edge_threshold),
            4 => Slot::Int(&mut self.first_level),
            5 => Slot::Int(&mut self.wta_k),
            6 => Slot::Int(&mut self.score_type),
            7 => Slot::Int(&mut self.patch_size),
            8 => Slot::Int(&mut self.fast_threshold),
            _ => return None,
        })
    }

    fn value(&self, index: usize) -> Option<OptionValue> {
        Some(match index {
            0 => OptionValue::Int(self.n_features),
            1 => OptionValue::Double(self.scale_factor),
            2 => OptionValue::Int(self.n_levels),
            3 => OptionValue::Int(self.edge_threshold),
            4 => OptionValue::Int(self.first_level),
            5 => OptionValue::Int(self.wta_k),
            6 => OptionValue::Int(self.score_type),
            7 => OptionValue::Int(self.patch_size),
            8 => OptionValue::Int(self.fast_threshold),
            _ => return None,
        })
    }
}

#[derive(Debug)]
pub struct OrbDetector {
    handle: DetectorHandle<Orb>,
}

impl DetectorBinding for OrbDetector {
    const CLASS: &'static str = "ORBDetector";

    type Options = OrbOptions;
    type Engine = Orb;

    fn from_handle(handle: DetectorHandle<Orb>) -> Self {
        Self { handle }
    }

    fn handle(&self) -> &DetectorHandle<Orb> {
        &self.handle
    }

    fn handle_mut(&mut self) -> &mut DetectorHandle<Orb> {
        &mut self.handle
    }
}

impl OrbDetector {
    /// `(nFeatures, scaleFactor, nLevels, edgeThreshold, firstLevel, WTA_K,
    /// scoreType, patchSize, fastThreshold)` or `{ ...same names }`
    pub fn new(args: &[Value]) -> BindingResult<Self> {
        Self::construct(args)
    }

    pub fn n_features(&self) -> BindingResult<i32> {
        Ok(self.handle.get("nFeatures")?.n_features())
    }

    pub fn scale_factor(&self) -> BindingResult<f64> {
        Ok(self.handle.get("scaleFactor")?.scale_factor())
    }

    pub fn n_levels(&self) -> BindingResult<i32> {
        Ok(self.handle.get("nLevels")?.n_levels())
    }

    pub fn edge_threshold(&self) -> BindingResult<i32> {
        Ok(self.handle.get("edgeThreshold")?.edge_threshold())
    }

    pub fn first_level(&self) -> BindingResult<i32> {
        Ok(self.handle.get("firstLevel")?.first_level())
    }

    pub fn wta_k(&self) -> BindingResult<i32> {
        Ok(self.handle.get("WTA_K")?.wta_k())
    }

    pub fn score_type(&self) -> BindingResult<i32> {
        Ok(self.handle.get("scoreType")?.score_type() as i32)
    }

    pub fn patch_size(&self) -> BindingResult<i32> {
        Ok(self.handle.get("patchSize")?.patch_size())
    }

    pub fn fast_threshold(&self) -> BindingResult<i32> {
        Ok(self.handle.get("fastThreshold")?.fast_threshold())
    }
}
