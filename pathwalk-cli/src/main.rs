use std::fs;
use std::io::{self, Read, Write};

use facet::Facet;
use facet_args as args;
use pathwalk::{Trace, WalkOptions};
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Walk an ASCII routing diagram and print the letters and path
#[derive(Facet, Debug)]
struct Args {
    /// Input file (reads from stdin if not provided)
    #[facet(default, args::positional)]
    input: Option<String>,

    /// Maximum number of steps before giving up (default: derived from grid size)
    #[facet(default, args::named)]
    max_steps: Option<usize>,

    /// Reject characters outside the diagram alphabet
    #[facet(args::named)]
    strict: bool,

    /// Print the result as JSON
    #[facet(args::named)]
    json: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),

    #[error("failed to write stdout: {0}")]
    Stdout(io::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Walk(#[from] pathwalk::Error),
}

#[derive(Serialize)]
struct Output<'a> {
    letters: &'a str,
    path: &'a str,
}

fn main() {
    init_logging();

    let args: Args = match args::from_std_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr, filtered by `RUST_LOG`
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), CliError> {
    let input = read_input(args.input.as_deref())?;

    let mut options = WalkOptions::new().with_strict_charset(args.strict);
    if let Some(max_steps) = args.max_steps {
        options = options.with_max_steps(max_steps);
    }

    let trace = pathwalk::walk_with_options(&input, &options)?;
    tracing::debug!(letters = %trace.letters, "walk finished");

    let rendered = render(&trace, args.json)?;
    io::stdout()
        .write_all(rendered.as_bytes())
        .map_err(CliError::Stdout)
}

fn read_input(path: Option<&str>) -> Result<String, CliError> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_string(),
            source,
        }),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(CliError::Stdin)?;
            Ok(buf)
        }
    }
}

fn render(trace: &Trace, json: bool) -> Result<String, CliError> {
    if json {
        let output = Output {
            letters: &trace.letters,
            path: &trace.path,
        };
        let mut text = serde_json::to_string(&output)?;
        text.push('\n');
        Ok(text)
    } else {
        Ok(format!("Letters: {}\nPath: {}\n", trace.letters, trace.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain() {
        let trace = pathwalk::walk("@-A-x").unwrap();
        assert_eq!(render(&trace, false).unwrap(), "Letters: A\nPath: @-A-x\n");
    }

    #[test]
    fn test_render_json() {
        let trace = pathwalk::walk("@-A-x").unwrap();
        assert_eq!(
            render(&trace, true).unwrap(),
            "{\"letters\":\"A\",\"path\":\"@-A-x\"}\n"
        );
    }

    #[test]
    fn test_walk_error_message() {
        let err = CliError::from(pathwalk::walk("@-+-x").unwrap_err());
        assert_eq!(err.to_string(), "fake turn at (2, 0)");
    }
}
