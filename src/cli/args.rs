//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `apply`: Overlay localized comments onto a TypeDoc JSON model
//! - `init`: Initialize docloc configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Apply(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Overrides for values otherwise taken from the config file.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Localization root directory (overrides config file)
    #[arg(long, env = "DOCLOC_LOCALIZE")]
    pub localize: Option<PathBuf>,

    /// Source root mirrored by the localization directories (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Base name of the global functions file (overrides config file)
    #[arg(long)]
    pub global_functions_file: Option<String>,

    /// Load every class, interface and enum file before applying comments
    #[arg(long)]
    pub prepass: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ApplyCommand {
    /// TypeDoc JSON model (output of `typedoc --json`)
    pub model: PathBuf,

    /// Where to write the localized model (default: overwrite MODEL)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replace comments in a TypeDoc JSON model with localized text
    Apply(ApplyCommand),
    /// Initialize a new .doclocrc.json configuration file
    Init,
}
