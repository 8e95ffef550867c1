//! Detector classes: `new AKAZEDetector(5, null, null, 0.5)` or
//! `new AKAZEDetector({ nOctaves: 8 })`, camelCase getters, `dispose()` and
//! `properties()`.
//!
//! Every constructor declares one parameter past the last option so a surplus
//! argument reaches the binding and is reported.

use napi::{Env, JsUnknown};
use napi_derive::napi;
use serde_json::Value;

use features2d_binding::{
    AkazeDetector, BriskDetector, DetectorBinding, FeatureDetector, KazeDetector, OrbDetector,
};

use crate::conversions::{constructor_args, to_napi_error};

fn properties_of(detector: &impl FeatureDetector) -> napi::Result<Value> {
    detector
        .properties()
        .map(Value::Object)
        .map_err(to_napi_error)
}

// ─── AKAZE ───────────────────────────────────────────────────────────────

#[napi(js_name = "AKAZEDetector")]
pub struct JsAkazeDetector {
    inner: AkazeDetector,
}

#[napi]
impl JsAkazeDetector {
    #[napi(constructor)]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        env: Env,
        descriptor_type: Option<JsUnknown>,
        descriptor_size: Option<JsUnknown>,
        descriptor_channels: Option<JsUnknown>,
        threshold: Option<JsUnknown>,
        n_octaves: Option<JsUnknown>,
        n_octave_layers: Option<JsUnknown>,
        diffusivity: Option<JsUnknown>,
        overflow: Option<JsUnknown>,
    ) -> napi::Result<Self> {
        let args = constructor_args::<AkazeDetector>(&env, vec![
            descriptor_type,
            descriptor_size,
            descriptor_channels,
            threshold,
            n_octaves,
            n_octave_layers,
            diffusivity,
            overflow,
        ])?;
        let inner = AkazeDetector::new(&args).map_err(to_napi_error)?;
        Ok(Self { inner })
    }

    #[napi(getter, js_name = "descriptorType")]
    pub fn descriptor_type(&self) -> napi::Result<i32> {
        self.inner.descriptor_type().map_err(to_napi_error)
    }

    #[napi(getter, js_name = "descriptorSize")]
    pub fn descriptor_size(&self) -> napi::Result<i32> {
        self.inner.descriptor_size().map_err(to_napi_error)
    }

    #[napi(getter, js_name = "descriptorChannels")]
    pub fn descriptor_channels(&self) -> napi::Result<i32> {
        self.inner.descriptor_channels().map_err(to_napi_error)
    }

    #[napi(getter)]
    pub fn threshold(&self) -> napi::Result<f64> {
        self.inner.threshold().map_err(to_napi_error)
    }

    #[napi(getter, js_name = "nOctaves")]
    pub fn n_octaves(&self) -> napi::Result<i32> {
        self.inner.n_octaves().map_err(to_napi_error)
    }

    #[napi(getter, js_name = "nOctaveLayers")]
    pub fn n_octave_layers(&self) -> napi::Result<i32> {
        self.inner.n_octave_layers().map_err(to_napi_error)
    }

    #[napi(getter)]
    pub fn diffusivity(&self) -> napi::Result<i32> {
        self.inner.diffusivity().map_err(to_napi_error)
    }

    #[napi(getter, js_name = "isDisposed")]
    pub fn is_disposed(&self) -> bool {
        self.inner.is_disposed()
    }

    #[napi]
    pub fn properties(&self) -> napi::Result<Value> {
        properties_of(&self.inner)
    }

    /// Release the native detector; later getter calls throw.
    #[napi]
    pub fn dispose(&mut self) -> bool {
        self.inner.dispose()
    }
}

// ─── KAZE ────────────────────────────────────────────────────────────────

#[napi(js_name = "KAZEDetector")]
pub struct JsKazeDetector {
    inner: KazeDetector,
}

#[napi]
impl JsKazeDetector {
    #[napi(constructor)]
    pub fn new(
        env: Env,
        extended: Option<JsUnknown>,
        upright: Option<JsUnknown>,
        threshold: Option<JsUnknown>,
        n_octaves: Option<JsUnknown>,
        n_octave_layers: Option<JsUnknown>,
        diffusivity: Option<JsUnknown>,
        overflow: Option<JsUnknown>,
    ) -> napi::Result<Self> {
        let args = constructor_args::<KazeDetector>(&env, vec![
            extended,
            upright,
            threshold,
            n_octaves,
            n_octave_layers,
            diffusivity,
            overflow,
        ])?;
        let inner = KazeDetector::new(&args).map_err(to_napi_error)?;
        Ok(Self { inner })
    }

    #[napi(getter)]
    pub fn extended(&self) -> napi::Result<bool> {
        self.inner.extended().map_err(to_napi_error)
    }

    #[napi(getter)]
    pub fn upright(&self) -> napi::Result<bool> {
        self.inner.upright().map_err(to_napi_error)
    }

    #[napi(getter)]
    pub fn threshold(&self) -> napi::Result<f64> {
        self.inner.threshold().map_err(to_napi_error)
    }

    #[napi(getter, js_name = "nOctaves")]
    pub fn n_octaves(&self) -> napi::Result<i32> {
        self.inner.n_octaves().map_err(to_napi_error)
    }

    #[napi(getter, js_name = "nOctaveLayers")]
    pub fn n_octave_layers(&self) -> napi::Result<i32> {
        self.inner.n_octave_layers().map_err(to_napi_error)
    }

    #[napi(getter)]
    pub fn diffusivity(&self) -> napi::Result<i32> {
        self.inner.diffusivity().map_err(to_napi_error)
    }

    #[napi(getter, js_name = "isDisposed")]
    pub fn is_disposed(&self) -> bool {
        self.inner.is_disposed()
    }

    #[napi]
    pub fn properties(&self) -> napi::Result<Value> {
        properties_of(&self.inner)
    }

    #[napi]
    pub fn dispose(&mut self) -> bool {
        self.inner.dispose()
    }
}

// ─── ORB ─────────────────────────────────────────────────────────────────

#[napi(js_name = "ORBDetector")]
pub struct JsOrbDetector {
    inner: OrbDetector,
}

#[napi]
impl JsOrbDetector {
    #[napi(constructor)]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        env: Env,
        n_features: Option<JsUnknown>,
        scale_factor: Option<JsUnknown>,
        n_levels: Option<JsUnknown>,
        edge_threshold: Option<JsUnknown>,
        first_level: Option<JsUnknown>,
        wta_k: Option<JsUnknown>,
        score_type: Option<JsUnknown>,
        patch_size: Option<JsUnknown>,
        fast_threshold: Option<JsUnknown>,
        overflow: Option<JsUnknown>,
    ) -> napi::Result<Self> {
        let args = constructor_args::<OrbDetector>(&env, vec![
            n_features,
            scale_factor,
            n_levels,
            edge_threshold,
            first_level,
            wta_k,
            score_type,
            patch_size,
            fast_threshold,
            overflow,
        ])?;
        let inner = OrbDetector::new(&args).map_err(to_napi_error)?;
        Ok(Self { inner })
    }

    #[napi(getter, js_name = "nFeatures")]
    pub fn n_features(&self) -> napi::Result<i32> {
        self.inner.n_features().map_err(to_napi_error)
    }

    #[napi(getter, js_name = "scaleFactor")]
    pub fn scale_factor(&self) -> napi::Result<f64> {
        self.inner.scale_factor().map_err(to_napi_error)
    }

    #[napi(getter, js_name = "nLevels")]
    pub fn n_levels(&self) -> napi::Result<i32> {
        self.inner.n_levels().map_err(to_napi_error)
    }

    #[napi(getter, js_name = "edgeThreshold")]
    pub fn edge_threshold(&self) -> napi::Result<i32> {
        self.inner.edge_threshold().map_err(to_napi_error)
    }

    #[napi(getter, js_name = "firstLevel")]
    pub fn first_level(&self) -> napi::Result<i32> {
        self.inner.first_level().map_err(to_napi_error)
    }

    #[napi(getter, js_name = "WTA_K")]
    pub fn wta_k(&self) -> napi::Result<i32> {
        self.inner.wta_k().map_err(to_napi_error)
    }

    #[napi(getter, js_name = "scoreType")]
    pub fn score_type(&self) -> napi::Result<i32> {
        self.inner.score_type().map_err(to_napi_error)
    }

    #[napi(getter, js_name = "patchSize")]
    pub fn patch_size(&self) -> napi::Result<i32> {
        self.inner.patch_size().map_err(to_napi_error)
    }

    #[napi(getter, js_name = "fastThreshold")]
    pub fn fast_threshold(&self) -> napi::Result<i32> {
        self.inner.fast_threshold().map_err(to_napi_error)
    }

    #[napi(getter, js_name = "isDisposed")]
    pub fn is_disposed(&self) -> bool {
        self.inner.is_disposed()
    }

    #[napi]
    pub fn properties(&self) -> napi::Result<Value> {
        properties_of(&self.inner)
    }

    #[napi]
    pub fn dispose(&mut self) -> bool {
        self.inner.dispose()
    }
}

// ─── BRISK ───────────────────────────────────────────────────────────────

#[napi(js_name = "BRISKDetector")]
pub struct JsBriskDetector {
    inner: BriskDetector,
}

#[napi]
impl JsBriskDetector {
    #[napi(constructor)]
    pub fn new(
        env: Env,
        thresh: Option<JsUnknown>,
        octaves: Option<JsUnknown>,
        pattern_scale: Option<JsUnknown>,
        overflow: Option<JsUnknown>,
    ) -> napi::Result<Self> {
        let args =
            constructor_args::<BriskDetector>(&env, vec![thresh, octaves, pattern_scale, overflow])?;
        let inner = BriskDetector::new(&args).map_err(to_napi_error)?;
        Ok(Self { inner })
    }

    #[napi(getter)]
    pub fn thresh(&self) -> napi::Result<i32> {
        self.inner.thresh().map_err(to_napi_error)
    }

    #[napi(getter)]
    pub fn octaves(&self) -> napi::Result<i32> {
        self.inner.octaves().map_err(to_napi_error)
    }

    #[napi(getter, js_name = "patternScale")]
    pub fn pattern_scale(&self) -> napi::Result<f64> {
        self.inner.pattern_scale().map_err(to_napi_error)
    }

    #[napi(getter, js_name = "isDisposed")]
    pub fn is_disposed(&self) -> bool {
        self.inner.is_disposed()
    }

    #[napi]
    pub fn properties(&self) -> napi::Result<Value> {
        properties_of(&self.inner)
    }

    #[napi]
    pub fn dispose(&mut self) -> bool {
        self.inner.dispose()
    }
}
