use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "clock-calc",
    version,
    about = "Add or subtract clock times on a 24-hour dial"
)]
pub struct Cli {
    #[arg(long, default_value = "text", global = true)]
    pub output: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Add two times, wrapping past midnight
    Add { time1: String, time2: String },
    /// Subtract TIME2 from TIME1; an earlier TIME1 is read as the next day
    Sub { time1: String, time2: String },
    /// Interactive calculator with a rolling history
    Session,
}
