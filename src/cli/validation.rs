// validation.rs - Turn parsed arguments into checked run settings

use crate::cli::args::{Args, DEFAULT_OUTPUT};
use crate::core::MergeOptions;
use crate::error::{Error, Result};
use std::path::{Component, Path, PathBuf};

/// Settings for one run, after defaults and checks
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    /// Absent only with `--validate-only`
    pub input_directory: Option<PathBuf>,
    pub output: PathBuf,
    pub merge: MergeOptions,
    pub validate_only: bool,
    pub strict: bool,
    pub quiet: bool,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<RunSettings> {
    let defaults = MergeOptions::default();

    let input_delimiter = match &args.input_delimiter {
        Some(value) => parse_delimiter("input-delimiter", value)?,
        None => defaults.input_delimiter,
    };
    let output_delimiter = match &args.output_delimiter {
        Some(value) => parse_delimiter("output-delimiter", value)?,
        None => defaults.output_delimiter,
    };

    let suffix = args.suffix.clone().unwrap_or(defaults.suffix);
    if suffix.is_empty() {
        return Err(Error::InvalidArgument("--suffix must not be empty".to_string()));
    }

    let input_directory = args.input_directory.as_ref().map(PathBuf::from);
    if input_directory.is_none() && !args.validate_only {
        return Err(Error::InvalidArgument(
            "input directory is required (positional argument)".to_string(),
        ));
    }

    Ok(RunSettings {
        input_directory,
        output: PathBuf::from(args.output.as_deref().unwrap_or(DEFAULT_OUTPUT)),
        merge: MergeOptions {
            input_delimiter,
            output_delimiter,
            suffix,
        },
        validate_only: args.validate_only,
        strict: args.strict,
        quiet: args.quiet,
    })
}

/// Absolute form of `path` with `.` and `..` segments folded away lexically.
/// The path does not need to exist.
pub fn resolve_display_path(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut resolved = PathBuf::new();

    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }

    resolved
}

/// A delimiter must be exactly one ASCII character
fn parse_delimiter(flag: &str, value: &str) -> Result<u8> {
    match value.as_bytes() {
        [byte] if byte.is_ascii() && *byte != b'"' && *byte != b'\n' && *byte != b'\r' => Ok(*byte),
        _ => Err(Error::InvalidArgument(format!(
            "--{} must be a single ASCII character other than a quote or newline, got '{}'",
            flag, value
        ))),
    }
}
