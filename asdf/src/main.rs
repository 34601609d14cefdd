//! asdf language interpreter.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use asdf_lib::config::Config;
use asdf_lib::{run, Context};
use clap::Parser;

#[derive(Parser)]
#[command(name = "asdf")]
#[command(version = "0.1.0")]
#[command(about = "Interpreter for the asdf language")]
struct Cli {
    /// Source file of the program to run.
    file: PathBuf,

    /// Report the duration of each step on stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Report runtime failures as full diagnostics, with their error code.
    #[arg(long)]
    rich: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let Ok(input) = fs::read_to_string(&cli.file) else {
        eprintln!("File not found: {}", cli.file.display());
        return ExitCode::FAILURE;
    };
    let filename = cli.file.display().to_string();
    let config = Config {
        input: &input,
        filename: Some(&filename),
        verbose: cli.verbose,
        rich_errors: cli.rich,
    };
    let mut ctx = Context::new(config);

    match run(&mut ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{err:?}");
            ExitCode::FAILURE
        }
    }
}
