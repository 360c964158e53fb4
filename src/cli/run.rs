use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, apply::apply, init::init},
};

/// Dispatch to the command handler for the parsed arguments.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Apply(cmd)) => Ok(CommandResult::Apply(apply(cmd)?)),
        Some(Command::Init) => Ok(CommandResult::Init { created: init()? }),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
