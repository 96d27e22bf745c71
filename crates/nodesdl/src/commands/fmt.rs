use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils::RED_X;
use nodesdl_parser::printer;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct FmtCmd {
    #[arg(help="The SDL file to format.", name="FILE")]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for FmtCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = match std::fs::read_to_string(&self.file_path) {
            Ok(source) => source,
            Err(err) => return CommandResult::stderr(format_args!(
                "{RED_X} Failed to read {}: {err}",
                self.file_path.display(),
            )),
        };

        match nodesdl_parser::parse_file_contents(&source, &self.file_path) {
            Ok(document) => CommandResult::stdout(format_args!(
                "{}",
                printer::print_document(&document).trim_end(),
            )),
            Err(err) => CommandResult::stderr(format_args!("{}", err.format_detailed(Some(&source)))),
        }
    }
}
