use std::io;

use tracing::debug;

use crate::cli::{Cli, Command};
use crate::error::Result;
use crate::output::{self, Format};
use crate::repl;
use crate::time::{Operation, TimeOfDay};

pub fn run(cli: &Cli) -> Result<()> {
    let format = Format::parse(&cli.output)?;

    match &cli.command {
        Command::Add { time1, time2 } => calculate_once(format, time1, Operation::Add, time2),
        Command::Sub { time1, time2 } => calculate_once(format, time1, Operation::Subtract, time2),
        Command::Session => repl::run_session(format),
    }
}

fn calculate_once(format: Format, time1: &str, op: Operation, time2: &str) -> Result<()> {
    let time1: TimeOfDay = time1.parse()?;
    let time2: TimeOfDay = time2.parse()?;
    let result = time1.apply(op, time2);
    debug!(%time1, %op, %time2, %result, "calculated");
    output::print_calculation(&mut io::stdout(), format, time1, op, time2, result)
}
