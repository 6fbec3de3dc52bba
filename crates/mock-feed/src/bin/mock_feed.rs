//! Mock feed CLI for generating demonstration datasets.
//!
//! This binary delegates to `mock_feed::feed_cli` for parsing and
//! rendering logic, keeping the CLI behaviour testable without spawning a
//! process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use mock_feed::feed_cli::{CliError, ParseOutcome, parse_args, render_dataset};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            print_usage(io::stdout().lock());
            Ok(())
        }
        ParseOutcome::Options(options) => {
            let rendered = render_dataset(&options)?;
            write_output(&rendered);
            Ok(())
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

fn print_usage(mut out: impl Write) {
    let usage = concat!(
        "Usage: mock-feed [options]\n",
        "\n",
        "Generates a random mock message/user dataset as JSON on stdout.\n",
        "\n",
        "Options:\n",
        "  --seed <seed>        RNG seed for deterministic output (defaults to random)\n",
        "  --catalog <path>     Path to a custom fixture catalog JSON file\n",
        "  --pretty             Pretty-print the JSON output\n",
        "  -h, --help           Print this help output\n",
    );
    if let Err(err) = out.write_all(usage.as_bytes()) {
        drop(err);
    }
}

fn write_output(rendered: &str) {
    if let Err(err) = writeln!(io::stdout().lock(), "{rendered}") {
        drop(err);
    }
}
