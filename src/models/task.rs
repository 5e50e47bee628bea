use std::path::{Path, PathBuf};

/// Resolved destination of one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSpec {
    pub path: PathBuf,
    /// Whether the path came from `--output` rather than synthesis.
    pub overridden: bool,
}

impl OutputSpec {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// One (source image, factor) pairing awaiting execution.
///
/// The factor is the raw multiplier; it is checked against the supported
/// set again when the task is dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionTask {
    pub factor: u32,
    pub output: OutputSpec,
}
