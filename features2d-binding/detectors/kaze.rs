use features2d_core::KazeOptions;
use features2d_engine::Kaze;
use serde_json::Value;

use crate::error::BindingResult;
use crate::handle::DetectorHandle;
use crate::schema::DetectorOptions;
use crate::value::{OptionValue, Slot};
use crate::DetectorBinding;

impl DetectorOptions for KazeOptions {
    const FIELDS: &'static [&'static str] = &[
        "extended",
        "upright",
        "threshold",
        "nOctaves",
        "nOctaveLayers",
        "diffusivity",
    ];

    fn slot(&mut self, index: usize) -> Option<Slot<'_>> {
        Some(match index {
            0 => Slot::Bool(&mut self.extended),
            1 => Slot::Bool(&mut self.upright),
            2 => Slot::Double(&mut self.threshold),
            3 => Slot::Int(&mut self.n_octaves),
            4 => Slot::Int(&mut self.n_octave_layers),
            5 => Slot::Int(&mut self.diffusivity),
            _ => return None,
        })
    }

    fn value(&self, index: usize) -> Option<OptionValue> {
        Some(match index {
            0 => OptionValue::Bool(self.extended),
            1 => OptionValue::Bool(self.upright),
            2 => OptionValue::Double(self.threshold),
            3 => OptionValue::Int(self.n_octaves),
            4 => OptionValue::Int(self.n_octave_layers),
            5 => OptionValue::Int(self.diffusivity),
            _ => return None,
        })
    }
}

#[derive(Debug)]
pub struct KazeDetector {
    handle: DetectorHandle<Kaze>,
}

impl DetectorBinding for KazeDetector {
    const CLASS: &'static str = "KAZEDetector";

    type Options = KazeOptions;
    type Engine = Kaze;

    fn from_handle(handle: DetectorHandle<Kaze>) -> Self {
        Self { handle }
    }

    fn handle(&self) -> &DetectorHandle<Kaze> {
        &self.handle
    }

    fn handle_mut(&mut self) -> &mut DetectorHandle<Kaze> {
        &mut self.handle
    }
}

impl KazeDetector {
    /// `(extended, upright, threshold, nOctaves, nOctaveLayers, diffusivity)`
    pub fn new(args: &[Value]) -> BindingResult<Self> {
        Self::construct(args)
    }

    pub fn extended(&self) -> BindingResult<bool> {
        Ok(self.handle.get("extended")?.extended())
    }

    pub fn upright(&self) -> BindingResult<bool> {
        Ok(self.handle.get("upright")?.upright())
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ArgLocation, BindingError, ConversionProblem};
    use crate::value::OptionKind;
    use crate::FeatureDetector;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let detector = KazeDetector::new(&[]).unwrap();
        assert!(!detector.extended().unwrap());
        assert!(!detector.upright().unwrap());
        assert_eq!(detector.threshold().unwrap(), 0.001);
        assert_eq!(detector.n_octaves().unwrap(), 4);
        assert_eq!(detector.n_octave_layers().unwrap(), 4);
        assert_eq!(detector.diffusivity().unwrap(), 1);
    }

    #[test]
    fn test_bool_forms_agree() {
        let positional = KazeDetector::new(&[json!(true), json!(true)]).unwrap();
        let named = KazeDetector::new(&[json!({ "extended": true, "upright": true })]).unwrap();
        assert_eq!(positional.properties().unwrap(), named.properties().unwrap());
        assert!(named.extended().unwrap());
        assert_eq!(named.native().unwrap().descriptor_len(), 128);
    }

    #[test]
    fn test_number_is_not_bool() {
        let err = KazeDetector::new(&[json!(1)]).unwrap_err();
        assert_eq!(
            err,
            BindingError::TypeConversion {
                class: "KAZEDetector",
                location: ArgLocation::Index(0),
                problem: ConversionProblem::WrongType {
                    expected: OptionKind::Bool,
                    found: "number",
                },
            }
        );
    }

    #[test]
    fn test_disposed() {
        let mut detector = KazeDetector::new(&[json!({ "nOctaves": 2 })]).unwrap();
        detector.dispose();
        assert!(matches!(
            detector.upright(),
            Err(BindingError::InvalidHandle { accessor: "upright", .. })
        ));
    }
}
