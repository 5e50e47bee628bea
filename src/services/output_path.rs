//! Output file naming.

use crate::models::OutputSpec;
use std::path::PathBuf;

/// Default output name for `input` magnified by `factor`.
///
/// Always PNG, whatever the input container. Pure: the filesystem is not
/// consulted.
pub fn synthesize(input: &str, factor: u32) -> String {
    format!("{input}_hq{factor}x.png")
}

/// Pick the output for one task.
///
/// The override only applies when it is the sole conversion of the run;
/// otherwise every task gets its synthesized name.
pub fn resolve(
    input: &str,
    output_override: Option<&str>,
    factor: u32,
    task_count: usize,
) -> OutputSpec {
    match output_override {
        Some(path) if task_count == 1 => OutputSpec {
            path: PathBuf::from(path),
            overridden: true,
        },
        _ => OutputSpec {
            path: PathBuf::from(synthesize(input, factor)),
            overridden: false,
        },
    }
}
