//! trawl - find-style directory walker
//!
//! Entry point for the CLI application.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use trawl::{execute, parse_mode, ShellRunner};

/// Walk a directory tree, match each entry against a single criterion, and
/// print, delete, or exec an external command on every match.
#[derive(Parser)]
#[command(name = "trawl", version, about)]
struct Cli {
    /// Root directory to walk.
    root: PathBuf,

    /// Criterion token and its arguments, e.g. `where-to-look`,
    /// `-name a.txt`, `-mmin -5`, `-inum 42`, `-delete a.txt`,
    /// `-exec a.txt cat`, or `-name a.txt -exec cat`.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

fn main() -> ExitCode {
    // clap's default exit code for bad usage is 2; this tool exits 1 for
    // every failure, so the error is printed and mapped by hand.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mode = parse_mode(&cli.tokens)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&cli.root, &mode, &mut out, ShellRunner)?;

    Ok(())
}
