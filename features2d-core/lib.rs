//! Parameter records and enum tags shared by the features2d engine and bindings.
//!
//! The option records hold raw runtime values (`i32` tags, `f64` thresholds)
//! exactly as a caller supplied them. Range checks happen in the engine.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// AKAZE descriptor flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorType {
    KazeUpright = 2,
    Kaze = 3,
    MldbUpright = 4,
    Mldb = 5,
}

impl DescriptorType {
    /// MLDB descriptors are binary strings, KAZE descriptors are float vectors
    pub fn is_binary(self) -> bool {
        matches!(self, DescriptorType::Mldb | DescriptorType::MldbUpright)
    }
}

impl TryFrom<i32> for DescriptorType {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(DescriptorType::KazeUpright),
            3 => Ok(DescriptorType::Kaze),
            4 => Ok(DescriptorType::MldbUpright),
            5 => Ok(DescriptorType::Mldb),
            other => Err(other),
        }
    }
}

/// Conductance function of the nonlinear diffusion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diffusivity {
    PeronaMalik1 = 0,
    PeronaMalik2 = 1,
    Weickert = 2,
    Charbonnier = 3,
}

impl TryFrom<i32> for Diffusivity {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Diffusivity::PeronaMalik1),
            1 => Ok(Diffusivity::PeronaMalik2),
            2 => Ok(Diffusivity::Weickert),
            3 => Ok(Diffusivity::Charbonnier),
            other => Err(other),
        }
    }
}

/// Corner score used by ORB to rank keypoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreType {
    Harris = 0,
    Fast = 1,
}

impl TryFrom<i32> for ScoreType {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ScoreType::Harris),
            1 => Ok(ScoreType::Fast),
            other => Err(other),
        }
    }
}

/// Element type of a descriptor row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum DescriptorElement {
    U8,
    F32,
}

/// Distance a matcher should use for a descriptor family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum NormType {
    L2,
    Hamming,
    Hamming2,
}

/// AKAZE construction options
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct AkazeOptions {
    pub descriptor_type: i32,
    /// Descriptor length in bits, 0 for the full length
    pub descriptor_size: i32,
    pub descriptor_channels: i32,
    pub threshold: f64,
    pub n_octaves: i32,
    pub n_octave_layers: i32,
    pub diffusivity: i32,
}

impl Default for AkazeOptions {
    fn default() -> Self {
        Self {
            descriptor_type: DescriptorType::Mldb as i32,
            descriptor_size: 0,
            descriptor_channels: 3,
            threshold: 0.001,
            n_octaves: 4,
            n_octave_layers: 4,
            diffusivity: Diffusivity::PeronaMalik2 as i32,
        }
    }
}

/// KAZE construction options
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct KazeOptions {
    pub extended: bool,
    pub upright: bool,
    pub threshold: f64,
    pub n_octaves: i32,
    pub n_octave_layers: i32,
    pub diffusivity: i32,
}

impl Default for KazeOptions {
    fn default() -> Self {
        Self {
            extended: false,
            upright: false,
            threshold: 0.001,
            n_octaves: 4,
            n_octave_layers: 4,
            diffusivity: Diffusivity::PeronaMalik2 as i32,
        }
    }
}

/// ORB construction options
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct OrbOptions {
    pub n_features: i32,
    pub scale_factor: f64,
    pub n_levels: i32,
    pub edge_threshold: i32,
    pub first_level: i32,
    #[cfg_attr(feature = "serde", serde(rename = "WTA_K"))]
    pub wta_k: i32,
    pub score_type: i32,
    pub patch_size: i32,
    pub fast_threshold: i32,
}

impl Default for OrbOptions {
    fn default() -> Self {
        Self {
            n_features: 500,
            scale_factor: 1.2,
            n_levels: 8,
            edge_threshold: 31,
            first_level: 0,
            wta_k: 2,
            score_type: ScoreType::Harris as i32,
            patch_size: 31,
            fast_threshold: 20,
        }
    }
}

/// BRISK construction options
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct BriskOptions {
    pub thresh: i32,
    pub octaves: i32,
    pub pattern_scale: f64,
}

impl Default for BriskOptions {
    fn default() -> Self {
        Self {
            thresh: 30,
            octaves: 3,
            pattern_scale: 1.0,
        }
    }
}

/// Number of worker threads used when none is configured
pub fn default_threads() -> usize {
    num_cpus::get().max(1)
}

/// Initialize the global Rayon pool that runs offloaded constructions
pub fn init_thread_pool(n_threads: usize) -> Result<(), rayon::ThreadPoolBuildError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(n_threads.max(1))
        .thread_name(|i| format!("features2d-worker-{}", i))
        .build_global()
}
