//! Conversion pipeline: one decode, then one task per selected factor.

use crate::error::ConvertError;
use crate::models::{ConversionTask, InvocationRequest, PixelBuffer};
use crate::rendering::ImageCodec;
use crate::services::output_path;
use hqx_scale::{ColorTables, ScaleFactor, Upscaler};
use std::path::{Path, PathBuf};

/// Result of one task.
#[derive(Debug)]
pub struct TaskOutcome {
    pub factor: u32,
    pub output: PathBuf,
    /// Output dimensions on success.
    pub result: Result<(u32, u32), ConvertError>,
}

impl TaskOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of every task of a run, in execution order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<TaskOutcome>,
}

impl RunReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// Operator-facing progress hooks. Both default to doing nothing.
pub trait Progress {
    fn task_started(&mut self, _input: &str, _task: &ConversionTask) {}
    fn task_finished(&mut self, _outcome: &TaskOutcome) {}
}

impl Progress for () {}

/// Expand a request into its tasks, ascending by factor.
pub fn plan_tasks(request: &InvocationRequest) -> Vec<ConversionTask> {
    let count = request.factor_count();
    request
        .factors()
        .map(|factor| {
            let multiplier = factor.multiplier();
            ConversionTask {
                factor: multiplier,
                output: output_path::resolve(
                    request.input_path(),
                    request.output_override(),
                    multiplier,
                    count,
                ),
            }
        })
        .collect()
}

/// Runs conversions against a codec and an upscaler.
pub struct ConversionPipeline<'a, C: ?Sized, U: ?Sized> {
    codec: &'a C,
    upscaler: &'a U,
}

impl<'a, C, U> ConversionPipeline<'a, C, U>
where
    C: ImageCodec + ?Sized,
    U: Upscaler + ?Sized,
{
    pub fn new(codec: &'a C, upscaler: &'a U) -> Self {
        Self { codec, upscaler }
    }

    /// Decode the input once and run every task against it.
    ///
    /// A decode failure here aborts the whole run before any task starts.
    pub fn run(
        &self,
        request: &InvocationRequest,
        progress: &mut impl Progress,
    ) -> Result<RunReport, ConvertError> {
        let source = self.load(Path::new(request.input_path()))?;
        Ok(self.execute(request, Some(&source), progress))
    }

    /// Run every task of `request`, sharing `source` when given.
    ///
    /// Without a source each task decodes the input for itself, and a decode
    /// failure only abandons that task. The colour tables live exactly as
    /// long as this call.
    pub fn execute(
        &self,
        request: &InvocationRequest,
        source: Option<&PixelBuffer>,
        progress: &mut impl Progress,
    ) -> RunReport {
        let tasks = plan_tasks(request);
        let input = request.input_path();

        let tables = ColorTables::init();
        tracing::debug!(tasks = tasks.len(), "Color tables initialized");

        let mut report = RunReport::default();
        for task in &tasks {
            progress.task_started(input, task);
            tracing::info!(
                input,
                factor = task.factor,
                output = %task.output.path.display(),
                overridden = task.output.overridden,
                "Scaling image"
            );

            let result = self.run_task(task, input, source, &tables);
            match &result {
                Ok((width, height)) => tracing::info!(
                    output = %task.output.path.display(),
                    width,
                    height,
                    "Scaled image written"
                ),
                Err(e) => tracing::warn!(factor = task.factor, error = %e, "Conversion failed"),
            }

            let outcome = TaskOutcome {
                factor: task.factor,
                output: task.output.path.clone(),
                result,
            };
            progress.task_finished(&outcome);
            report.outcomes.push(outcome);
        }

        drop(tables);
        tracing::debug!("Color tables released");

        report
    }

    /// Execute a single task. Failures stay confined to this task.
    pub fn run_task(
        &self,
        task: &ConversionTask,
        input: &str,
        source: Option<&PixelBuffer>,
        tables: &ColorTables,
    ) -> Result<(u32, u32), ConvertError> {
        let factor = ScaleFactor::try_from(task.factor)?;

        let decoded;
        let source = match source {
            Some(source) => source,
            None => {
                decoded = self.load(Path::new(input))?;
                &decoded
            }
        };

        let mut dest = destination_for(source, factor)?;
        factor.apply(
            self.upscaler,
            tables,
            source.pixels(),
            dest.pixels_mut(),
            source.width() as usize,
            source.height() as usize,
        );

        self.codec.encode(&dest, task.output.path())?;
        Ok((dest.width(), dest.height()))
    }

    fn load(&self, path: &Path) -> Result<PixelBuffer, ConvertError> {
        let decoded = self.codec.decode(path)?;
        if !decoded.is_canonical() {
            tracing::debug!(layout = decoded.layout.name(), "Normalizing to packed ARGB");
        }
        decoded.normalize().map_err(|e| ConvertError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

/// Allocate the `(w*f) x (h*f)` destination for `source`.
fn destination_for(source: &PixelBuffer, factor: ScaleFactor) -> Result<PixelBuffer, ConvertError> {
    let f = factor.multiplier();
    let too_large = || ConvertError::DimensionsTooLarge {
        width: source.width(),
        height: source.height(),
        factor: f,
    };
    let width = source.width().checked_mul(f).ok_or_else(too_large)?;
    let height = source.height().checked_mul(f).ok_or_else(too_large)?;
    PixelBuffer::blank(width, height).ok_or_else(too_large)
}
