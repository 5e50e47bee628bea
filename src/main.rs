use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hqx::models::{usage_text, ConversionTask, Invocation, InvocationRequest};
use hqx::rendering::PngCodec;
use hqx::services::{ConversionPipeline, Progress, TaskOutcome};
use hqx_scale::HqxScaler;

/// Exit status for rejected invocations.
const USAGE_EXIT: u8 = 2;

/// Prints per-task progress for the operator.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn task_started(&mut self, input: &str, task: &ConversionTask) {
        eprintln!("Scaling {input} with hq{}x", task.factor);
    }

    fn task_finished(&mut self, outcome: &TaskOutcome) {
        match &outcome.result {
            Ok(_) => println!("Scaled image written to {}", outcome.output.display()),
            Err(e) => eprintln!("{e}"),
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hqx=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    println!("hqx image converter");
    println!("Working Directory -> {}", std::env::current_dir()?.display());

    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let request = match InvocationRequest::parse_args(&args) {
        Ok(Invocation::Help(text)) => {
            println!("{text}");
            return Ok(ExitCode::SUCCESS);
        }
        Ok(Invocation::Convert(request)) => request,
        Err(e) => {
            eprintln!("{e}");
            if e.shows_help() {
                println!("{}", usage_text());
            }
            return Ok(ExitCode::from(USAGE_EXIT));
        }
    };

    let codec = PngCodec::new();
    let upscaler = HqxScaler::new();
    let pipeline = ConversionPipeline::new(&codec, &upscaler);

    match pipeline.run(&request, &mut ConsoleProgress) {
        Ok(report) => {
            tracing::debug!(
                succeeded = report.succeeded(),
                failed = report.failed(),
                "All conversions attempted"
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
