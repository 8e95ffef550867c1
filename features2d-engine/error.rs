/// Reasons the engine refuses to construct a detector
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("unknown descriptor type {0} (expected 2, 3, 4 or 5)")]
    InvalidDescriptorType(i32),

    #[error("descriptor channels must be 1, 2 or 3, got {0}")]
    InvalidDescriptorChannels(i32),

    #[error("descriptor size must be >= 0, got {0}")]
    NegativeDescriptorSize(i32),

    #[error("descriptor size {size} exceeds {max} bits available for {channels} channel(s)")]
    DescriptorSizeTooLarge { size: i32, max: i32, channels: i32 },

    #[error("unknown diffusivity {0} (expected 0..=3)")]
    InvalidDiffusivity(i32),

    #[error("{name} must be finite and >= 0, got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("{name} must be >= {min}, got {value}")]
    BelowMinimum {
        name: &'static str,
        min: i32,
        value: i32,
    },

    #[error("scale factor must be finite and > 1, got {0}")]
    InvalidScaleFactor(f64),

    #[error("WTA_K must be 2, 3 or 4, got {0}")]
    InvalidWtaK(i32),

    #[error("unknown score type {0} (expected 0 or 1)")]
    InvalidScoreType(i32),

    #[error("pattern scale must be finite and > 0, got {0}")]
    InvalidPatternScale(f64),
}

pub type EngineResult<T> = Result<T, EngineError>;

pub(crate) fn at_least(name: &'static str, min: i32, value: i32) -> EngineResult<i32> {
    if value < min {
        return Err(EngineError::BelowMinimum { name, min, value });
    }
    Ok(value)
}

pub(crate) fn non_negative_threshold(name: &'static str, value: f64) -> EngineResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(EngineError::InvalidThreshold { name, value });
    }
    Ok(value)
}
