use crate::error::UsageError;
use crate::models::args::{usage_text, CliArgs};
use clap::error::ErrorKind;
use clap::Parser;
use hqx_scale::ScaleFactor;
use std::collections::BTreeSet;

/// What the operator asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Print the usage text and exit successfully.
    Help(String),
    /// Run the conversions.
    Convert(InvocationRequest),
}

/// Validated conversion parameters for one process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    input_path: String,
    output_override: Option<String>,
    factors: BTreeSet<ScaleFactor>,
}

impl InvocationRequest {
    /// Parse and validate command-line tokens (without the program name).
    ///
    /// Without `--input`, the input is the last token of the line, whatever
    /// it is; a last token starting with `-` means no input was given.
    pub fn parse_args<S: AsRef<str>>(tokens: &[S]) -> Result<Invocation, UsageError> {
        let last_token: Option<&str> = tokens.last().map(|token| token.as_ref());
        let Some(last_token) = last_token else {
            return Err(UsageError::MissingInput);
        };

        let argv = std::iter::once("hqx").chain(tokens.iter().map(AsRef::as_ref));
        let args = match CliArgs::try_parse_from(argv) {
            Ok(args) => args,
            Err(e) if e.kind() == ErrorKind::DisplayHelp => {
                return Ok(Invocation::Help(usage_text()))
            }
            // A trailing `-name` is rejected by clap as an unknown flag
            Err(_) if last_token.starts_with('-') && !names_input(tokens) => {
                return Err(UsageError::MissingInput)
            }
            Err(e) => {
                return Err(UsageError::InvalidArguments(
                    e.to_string().trim_end().to_string(),
                ))
            }
        };

        Self::from_args(args, last_token).map(Invocation::Convert)
    }

    /// Validate parsed arguments. `last_token` is the final raw token of the
    /// command line, used as the input when `--input` is absent.
    pub fn from_args(args: CliArgs, last_token: &str) -> Result<Self, UsageError> {
        let input_path = args.input.unwrap_or_else(|| last_token.to_string());
        if input_path.is_empty() || input_path.starts_with('-') {
            return Err(UsageError::MissingInput);
        }

        // "all" counts as three selections
        let selected = [args.hq2x, args.hq3x, args.hq4x]
            .iter()
            .filter(|&&flag| flag)
            .count()
            + if args.all { 3 } else { 0 };

        if args.output.is_some() && selected > 1 {
            return Err(UsageError::OutputForMultiple);
        }
        if selected == 0 {
            return Err(UsageError::NoScalingType);
        }

        let factors: BTreeSet<ScaleFactor> = if args.all {
            ScaleFactor::ALL.into_iter().collect()
        } else {
            [
                (args.hq2x, ScaleFactor::X2),
                (args.hq3x, ScaleFactor::X3),
                (args.hq4x, ScaleFactor::X4),
            ]
            .into_iter()
            .filter_map(|(flag, factor)| flag.then_some(factor))
            .collect()
        };

        Ok(Self {
            input_path,
            output_override: args.output.filter(|path| !path.is_empty()),
            factors,
        })
    }

    pub fn input_path(&self) -> &str {
        &self.input_path
    }

    pub fn output_override(&self) -> Option<&str> {
        self.output_override.as_deref()
    }

    /// Selected factors, ascending.
    pub fn factors(&self) -> impl Iterator<Item = ScaleFactor> + '_ {
        self.factors.iter().copied()
    }

    pub fn factor_count(&self) -> usize {
        self.factors.len()
    }
}

/// Whether the line carries an explicit `--input` option.
fn names_input<S: AsRef<str>>(tokens: &[S]) -> bool {
    tokens.iter().any(|token| {
        let token: &str = token.as_ref();
        token == "--input" || token.starts_with("--input=")
    })
}
