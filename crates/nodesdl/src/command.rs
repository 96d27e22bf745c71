use crate::Cli;
use crate::CommandResult;

/// A `nodesdl` subcommand.
///
/// Commands never print directly: everything destined for stdout or stderr
/// goes through the returned [`CommandResult`], which `main` renders and
/// turns into the process exit code.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
