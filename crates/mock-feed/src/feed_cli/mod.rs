//! CLI support for generating mock feed datasets.
//!
//! This module provides parsing and rendering helpers for the `mock-feed`
//! binary. The binary delegates to these functions so they can be
//! exercised in tests without spawning a subprocess.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::catalog::FixtureCatalog;
use crate::dataset::Dataset;
use crate::error::{CatalogError, SampleError};

/// Parsed options for the mock feed CLI.
#[derive(Debug, Clone)]
pub struct Options {
    seed: Option<u64>,
    catalog_path: Option<PathBuf>,
    pretty: bool,
}

impl Options {
    /// Returns the RNG seed, if one was supplied.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the custom catalog path, if one was supplied.
    #[must_use]
    pub fn catalog_path(&self) -> Option<&Path> {
        self.catalog_path.as_deref()
    }

    /// Returns true if the JSON output should be pretty-printed.
    #[must_use]
    pub const fn pretty(&self) -> bool {
        self.pretty
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Parses CLI arguments into generation options.
///
/// # Errors
///
/// Returns [`CliError`] when a flag is unknown, a value is missing, or a
/// number cannot be parsed.
///
/// # Example
///
/// ```
/// use mock_feed::feed_cli::{ParseOutcome, parse_args};
///
/// let args = vec!["--seed".to_string(), "42".to_string()];
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
///     panic!("expected options");
/// };
///
/// assert_eq!(options.seed(), Some(42));
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut seed: Option<u64> = None;
    let mut catalog_path: Option<PathBuf> = None;
    let mut pretty = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--seed" => {
                let value = next_value(&mut args, "--seed")?;
                seed = Some(parse_number(&value, "--seed")?);
            }
            "--catalog" => {
                let value = next_value(&mut args, "--catalog")?;
                catalog_path = Some(PathBuf::from(value));
            }
            "--pretty" => pretty = true,
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    Ok(ParseOutcome::Options(Options {
        seed,
        catalog_path,
        pretty,
    }))
}

/// Generates one dataset per the options and renders it as JSON.
///
/// With `--seed` the output is deterministic; otherwise the dataset is
/// drawn from thread-local entropy, matching a fresh widget activation.
///
/// # Errors
///
/// Returns [`CliError`] when the catalog cannot be loaded or the dataset
/// cannot be generated or serialized.
pub fn render_dataset(options: &Options) -> Result<String, CliError> {
    let catalog = match options.catalog_path() {
        Some(path) => FixtureCatalog::from_file(path)?,
        None => FixtureCatalog::builtin(),
    };

    let dataset = match options.seed() {
        Some(seed) => Dataset::from_seed(&catalog, seed)?,
        None => Dataset::generate(&mut rand::rng(), &catalog)?,
    };

    let rendered = if options.pretty() {
        serde_json::to_string_pretty(&dataset)
    } else {
        serde_json::to_string(&dataset)
    };

    rendered.map_err(|err| CliError::Serialize {
        message: err.to_string(),
    })
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

fn parse_number<T>(value: &str, flag: &'static str) -> Result<T, CliError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|err| CliError::InvalidNumber {
        flag,
        value: value.to_owned(),
        message: err.to_string(),
    })
}

/// Errors surfaced by the CLI parsing and rendering flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognised.
        value: String,
    },
    /// A numeric value failed to parse.
    #[error("invalid number for {flag}: '{value}' ({message})")]
    InvalidNumber {
        /// Flag associated with the invalid number.
        flag: &'static str,
        /// Raw value supplied for the flag.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// An error occurred while loading the fixture catalog.
    #[error("catalog error: {source}")]
    Catalog {
        /// Underlying catalog error.
        #[from]
        #[source]
        source: CatalogError,
    },
    /// An error occurred during dataset generation.
    #[error("generation error: {source}")]
    Sample {
        /// Underlying sampling error.
        #[from]
        #[source]
        source: SampleError,
    },
    /// The dataset could not be rendered as JSON.
    #[error("failed to serialize dataset: {message}")]
    Serialize {
        /// Serializer error message.
        message: String,
    },
}
