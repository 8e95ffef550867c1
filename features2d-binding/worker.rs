//! Native construction offloaded to the Rayon pool.
//!
//! Arguments are unwrapped on the calling thread so type errors surface
//! immediately; only the engine construction runs on a worker.

use std::sync::mpsc;

use serde_json::Value;
use tracing::debug;

use crate::error::{BindingError, BindingResult};
use crate::schema::unwrap_options;
use crate::DetectorBinding;

/// A construction running on a worker thread
#[derive(Debug)]
pub struct PendingDetector<D> {
    class: &'static str,
    receiver: mpsc::Receiver<BindingResult<D>>,
}

impl<D> PendingDetector<D> {
    /// Block until the worker finishes
    pub fn wait(self) -> BindingResult<D> {
        self.receiver.recv().unwrap_or_else(|_| {
            Err(BindingError::NativeConstruction {
                class: self.class,
                message: "construction worker exited without a result".to_string(),
            })
        })
    }
}

pub fn spawn_construct<D: DetectorBinding>(args: &[Value]) -> BindingResult<PendingDetector<D>> {
    let options = unwrap_options::<D::Options>(D::CLASS, args)?;
    let (sender, receiver) = mpsc::sync_channel(1);

    debug!(class = D::CLASS, "offloading native construction");
    rayon::spawn(move || {
        // The caller may have dropped the pending value
        let _ = sender.send(D::from_options(options));
    });

    Ok(PendingDetector {
        class: D::CLASS,
        receiver,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AkazeDetector, ConversionProblem, FeatureDetector};
    use serde_json::json;

    #[test]
    fn test_worker_matches_sync() {
        let args = [json!({"nOctaves": 6, "descriptorChannels": 1})];
        let pending = spawn_construct::<AkazeDetector>(&args).unwrap();
        let offloaded = pending.wait().unwrap();
        let direct = AkazeDetector::new(&args).unwrap();
        assert_eq!(offloaded.properties().unwrap(), direct.properties().unwrap());
    }

    #[test]
    fn test_type_errors_are_synchronous() {
        let err = spawn_construct::<AkazeDetector>(&[json!("five")]).unwrap_err();
        assert!(matches!(
            err,
            BindingError::TypeConversion {
                problem: ConversionProblem::WrongType { found: "string", .. },
                ..
            }
        ));
    }

    #[test]
    fn test_native_errors_arrive_on_wait() {
        let pending = spawn_construct::<AkazeDetector>(&[json!({"nOctaves": 0})]).unwrap();
        assert!(matches!(
            pending.wait(),
            Err(BindingError::NativeConstruction { class: "AKAZEDetector", .. })
        ));
    }

    #[test]
    fn test_independent_instances() {
        let pending: Vec<_> = (1..=4)
            .map(|n| spawn_construct::<AkazeDetector>(&[json!({ "nOctaves": n })]).unwrap())
            .collect();
        for (n, p) in (1..=4).zip(pending) {
            assert_eq!(p.wait().unwrap().n_octaves().unwrap(), n);
        }
    }
}
