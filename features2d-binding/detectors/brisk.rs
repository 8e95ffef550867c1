use features2d_core::BriskOptions;
use features2d_engine::Brisk;
use serde_json::Value;

use crate::error::BindingResult;
use crate::handle::DetectorHandle;
use crate::schema::DetectorOptions;
use crate::value::{OptionValue, Slot};
use crate::DetectorBinding;

impl DetectorOptions for BriskOptions {
    const FIELDS: &'static [&'static str] = &["thresh", "octaves", "patternScale"];

    fn slot(&mut self, index: usize) -> Option<Slot<'_>> {
        Some(match index {
            0 => Slot::Int(&mut self.thresh),
            1 => Slot::Int(&mut self.octaves),
            2 => Slot::Double(&mut self.pattern_scale),
            _ => return None,
        })
    }

    fn value(&self, index: usize) -> Option<OptionValue> {
        Some(match index {
            0 => OptionValue::Int(self.thresh),
            1 => OptionValue::Int(self.octaves),
            2 => OptionValue::Double(self.pattern_scale),
            _ => return None,
        })
    }
}

#[derive(Debug)]
pub struct BriskDetector {
    handle: DetectorHandle<Brisk>,
}

impl DetectorBinding for BriskDetector {
    const CLASS: &'static str = "BRISKDetector";

    type Options = BriskOptions;
    type Engine = Brisk;

    fn from_handle(handle: DetectorHandle<Brisk>) -> Self {
        Self { handle }
    }

    fn handle(&self) -> &DetectorHandle<Brisk> {
        &self.handle
    }

    fn handle_mut(&mut self) -> &mut DetectorHandle<Brisk> {
        &mut self.handle
    }
}

impl BriskDetector {
    /// `(thresh, octaves, patternScale)` or `{ ...same names }`
    pub fn new(args: &[Value]) -> BindingResult<Self> {
        Self::construct(args)
    }

    pub fn thresh(&self) -> BindingResult<i32> {
        Ok(self.handle.get("thresh")?.thresh())
    }

    pub fn octaves(&self) -> BindingResult<i32> {
        Ok(self.handle.get("octaves")?.octaves())
    }

    pub fn pattern_scale(&self) -> BindingResult<f64> {
        Ok(self.handle.get("patternScale")?.pattern_scale())
    }
}
