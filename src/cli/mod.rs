//! Command-line interface: argument parsing, dispatch and reporting.

use anyhow::Result;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    Ok(report::print(&result, verbose))
}
