use std::path::PathBuf;
use thiserror::Error;

/// Rejected invocation parameters. Raised before any file is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("Must specify an input file")]
    MissingInput,

    #[error("Cannot specify output for multiple conversions")]
    OutputForMultiple,

    #[error("Must specify at least one scaling type")]
    NoScalingType,

    #[error("{0}")]
    InvalidArguments(String),
}

impl UsageError {
    /// Whether the usage text should follow the diagnostic.
    pub fn shows_help(&self) -> bool {
        matches!(self, UsageError::MissingInput | UsageError::NoScalingType)
    }
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Cannot load {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("Cannot write image to {}: {reason}", path.display())]
    Encode { path: PathBuf, reason: String },

    #[error("Unsupported scaling factor: {0}")]
    UnsupportedFactor(u32),

    #[error("Output dimensions too large: {width}x{height} scaled by {factor}")]
    DimensionsTooLarge { width: u32, height: u32, factor: u32 },
}

/// Decoded sample data that does not cover its declared dimensions.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{layout} data holds {actual} samples, expected {expected} for {width}x{height}")]
pub struct LayoutMismatch {
    pub layout: &'static str,
    pub width: u32,
    pub height: u32,
    pub expected: usize,
    pub actual: usize,
}

impl From<hqx_scale::UnsupportedFactor> for ConvertError {
    fn from(e: hqx_scale::UnsupportedFactor) -> Self {
        ConvertError::UnsupportedFactor(e.0)
    }
}
