mod check;
mod fmt;
mod new_id;
mod validate;

use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;

#[derive(Debug, clap::Parser)]
pub(crate) enum CommandEnum {
    /// Builds a schema from SDL files and reports what it contains.
    Check(Box<check::CheckCmd>),

    /// Prints an SDL file in canonical form.
    Fmt(fmt::FmtCmd),

    /// Mints a new global id for a type.
    NewId(new_id::NewIdCmd),

    /// Validates JSON payloads against a schema.
    Validate(Box<validate::ValidateCmd>),
}
impl CommandEnum {
    pub async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Fmt(cmd) => cmd.run(cli).await,
            Self::NewId(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}

/// Builds the schema in every SDL file found under `paths`.
pub(crate) fn build_schema(
    paths: &[std::path::PathBuf],
    sdl_file_exts: &[String],
) -> Result<nodesdl_core::Schema, String> {
    use crate::output_utils::RED_X;

    let sdl_files = crate::output_utils::find_sdl_files(paths, sdl_file_exts)
        .map_err(|err| format!("{RED_X} {err:#}"))?;
    if sdl_files.file_paths.is_empty() {
        return Err(format!("{RED_X} No schema files found."));
    }
    log::debug!(
        "Building schema from {} files ({} skipped)...",
        sdl_files.file_paths.len(),
        sdl_files.num_skipped,
    );

    nodesdl_core::SchemaBuilder::new()
        .load_files(sdl_files.file_paths)
        .and_then(nodesdl_core::SchemaBuilder::build)
        .map_err(|err| format!("{}{RED_X} Schema build failed.", err.format_detailed()))
}
