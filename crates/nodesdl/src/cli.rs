use clap::CommandFactory;
use crate::commands;

/// Checks, formats and exercises NodeSDL schemas.
#[derive(clap::Parser, Debug)]
#[command(
    name = "nodesdl",
    version,
    about,
    after_help = "Set LOG_LEVEL=trace|debug|info to control log output.",
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Log schema loading and validation at debug level.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// `nodesdl` without a subcommand prints the command overview.
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
