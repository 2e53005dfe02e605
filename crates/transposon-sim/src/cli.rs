//! Command-line parsing for the `transposon-sim` binary.

use std::str::FromStr;

use thiserror::Error;

use crate::config::SimConfig;

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Usage: transposon-sim [options]

Options:
  -r, --repr <array|linked>   Genome representation (default: array)
  -n, --len <N>               Initial genome length (default: 1000)
  -s, --steps <N>             Number of operations (default: 10000)
      --seed <N>              RNG seed (default: 42)
      --max-te-len <N>        Maximum fresh insertion length (default: 10)
      --max-offset <N>        Copy offset bound (default: 100)
      --weights <I,C,D>       Insert, copy, disable weights (default: 1,2,1)
      --render                Print the final genome
  -h, --help                  Show this help

Set RUST_LOG=debug (or trace) for per-operation logging.";

/// Parsed command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Run parameters.
    pub config: SimConfig,
    /// Print the final genome after the report.
    pub render: bool,
    /// Print usage and exit.
    pub help: bool,
}

/// Command-line parse failures.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CliError {
    /// A flag that is not recognised.
    #[error("unknown option '{0}'")]
    UnknownFlag(String),
    /// A flag that needs a value was last on the line.
    #[error("option '{flag}' needs a value")]
    MissingValue {
        /// The flag.
        flag: String,
    },
    /// A flag value that does not parse.
    #[error("invalid value '{value}' for '{flag}': {reason}")]
    InvalidValue {
        /// The flag.
        flag: String,
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

fn parse_value<T>(flag: &str, value: &str) -> Result<T, CliError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| CliError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_weights(flag: &str, value: &str) -> Result<(u32, u32, u32), CliError> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    let [i, c, d] = parts.as_slice() else {
        return Err(CliError::InvalidValue {
            flag: flag.to_string(),
            value: value.to_string(),
            reason: "expected three comma-separated weights".to_string(),
        });
    };
    Ok((
        parse_value(flag, i)?,
        parse_value(flag, c)?,
        parse_value(flag, d)?,
    ))
}

/// Parse arguments (without the program name).
///
/// Values are checked for syntax only; range checks happen in
/// [`SimConfig::validate`].
pub fn parse_args<I>(args: I) -> Result<CliArgs, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(flag) = args.next() {
        if flag == "--render" {
            parsed.render = true;
            continue;
        }
        if flag == "-h" || flag == "--help" {
            parsed.help = true;
            continue;
        }
        let known = matches!(
            flag.as_str(),
            "-r" | "--repr"
                | "-n"
                | "--len"
                | "-s"
                | "--steps"
                | "--seed"
                | "--max-te-len"
                | "--max-offset"
                | "--weights"
        );
        if !known {
            return Err(CliError::UnknownFlag(flag));
        }
        let Some(value) = args.next() else {
            return Err(CliError::MissingValue { flag });
        };
        let config = &mut parsed.config;
        match flag.as_str() {
            "-r" | "--repr" => config.representation = parse_value(&flag, &value)?,
            "-n" | "--len" => config.initial_len = parse_value(&flag, &value)?,
            "-s" | "--steps" => config.steps = parse_value(&flag, &value)?,
            "--seed" => config.seed = parse_value(&flag, &value)?,
            "--max-te-len" => config.max_te_len = parse_value(&flag, &value)?,
            "--max-offset" => config.max_offset = parse_value(&flag, &value)?,
            _ => {
                let (i, c, d) = parse_weights(&flag, &value)?;
                config.insert_weight = i;
                config.copy_weight = c;
                config.disable_weight = d;
            }
        }
    }
    Ok(parsed)
}
