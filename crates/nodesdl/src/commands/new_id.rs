use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils::RED_X;
use nodesdl_core::global_id;

#[derive(Debug, clap::Args)]
pub(crate) struct NewIdCmd {
    #[arg(help="Name of the type the id identifies.", name="TYPE_NAME")]
    type_name: String,
}

#[inherent::inherent]
impl RunnableCommand for NewIdCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match global_id::new_global_id(&self.type_name) {
            Ok(id) => CommandResult::stdout(format_args!("{id}")),
            Err(err) => CommandResult::stderr(format_args!("{RED_X} {err}")),
        }
    }
}
