#![doc = include_str!("../README.md")]
#![doc(html_logo_url = "https://avatars.githubusercontent.com/u/79236386")]
#![doc(html_favicon_url = "https://avatars.githubusercontent.com/u/79236386")]

mod cli;
mod config;
mod error;
mod logging;

pub(crate) use cli::*;
pub(crate) use error::*;
pub(crate) use logging::*;

use clap::Parser;

fn main() {
    let args = Cli::parse();
    TraceController::initialize(&args.verbosity);

    match args.partition.partition() {
        Ok(report) => {
            tracing::debug!(bytes = report.len(), "report written");
        }
        Err(err) => {
            tracing::debug!(?err, "partition failed");
            eprintln!("Failed: {err}");
            std::process::exit(1);
        }
    }
}
