mod check;
mod fetch;
mod poll;
mod station;

use clap::{Parser, Subcommand};

pub use self::{check::CheckArgs, fetch::FetchArgs, poll::PollArgs, station::StationArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Verify that the station is reachable and reports data.
    #[clap(name = "check")]
    Check(Box<CheckArgs>),

    /// Fetch the readings once and print the sensors.
    #[clap(name = "fetch")]
    Fetch(Box<FetchArgs>),

    /// Poll the station and report the sensors after every refresh.
    #[clap(name = "poll")]
    Poll(Box<PollArgs>),
}
