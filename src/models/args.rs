use clap::{ArgAction, CommandFactory, Parser};

/// Raw command-line surface, before validation.
#[derive(Debug, Parser)]
#[command(name = "hqx")]
#[command(about = "hqx image converter - magnify pixel art with hq2x, hq3x and hq4x")]
#[command(override_usage = "hqx [OPTIONS] <FILE>")]
#[command(after_help = "\
The input file can also be given with --input.
If --output is not given, the output file is named <FILE>_hq2x.png for hq2x,
<FILE>_hq3x.png for hq3x, and so on.")]
#[command(disable_help_flag = true)]
pub struct CliArgs {
    /// Upscale the input file with hq2x
    #[arg(long)]
    pub hq2x: bool,

    /// Upscale the input file with hq3x
    #[arg(long)]
    pub hq3x: bool,

    /// Upscale the input file with hq4x
    #[arg(long)]
    pub hq4x: bool,

    /// Upscale the input file with hq2x, hq3x and hq4x
    #[arg(long)]
    pub all: bool,

    /// Specify input image file
    #[arg(long, value_name = "PATH")]
    pub input: Option<String>,

    /// Override default name for output image file
    #[arg(long, value_name = "PATH")]
    pub output: Option<String>,

    /// Input image file; without --input it must be the last argument
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// Show help
    #[arg(short = 'h', long = "help", short_alias = '?', action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,
}

/// Full usage text, as printed for `--help` and after usage errors.
pub fn usage_text() -> String {
    CliArgs::command().render_help().to_string()
}
