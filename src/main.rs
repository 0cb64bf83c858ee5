mod cli;
mod error;
mod field;
mod history;
mod output;
mod repl;
mod runner;
mod session;
mod time;

use crate::cli::Cli;
use crate::error::CalcError;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    if let Err(err) = real_main() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), CalcError> {
    let cli = Cli::parse();
    init_tracing();
    runner::run(&cli)
}
