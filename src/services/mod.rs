pub mod output_path;
pub mod pipeline;

pub use pipeline::{plan_tasks, ConversionPipeline, Progress, RunReport, TaskOutcome};
