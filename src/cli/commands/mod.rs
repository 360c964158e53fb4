pub mod apply;
pub mod init;

pub use apply::ApplySummary;

/// Result of running a docloc command.
#[derive(Debug)]
pub enum CommandResult {
    Apply(ApplySummary),
    Init { created: bool },
}
