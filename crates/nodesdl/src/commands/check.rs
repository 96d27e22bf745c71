use anyhow::Context;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::build_schema;
use crate::output_utils::GREEN_CHECK;
use crate::output_utils::RED_X;
use nodesdl_core::Schema;
use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum EmitFormat {
    Bincode,
    Json,
}

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        help="Write the analyzed schema to this file.",
        long,
    )]
    emit: Option<PathBuf>,

    #[arg(
        default_value_t=EmitFormat::Json,
        help="Encoding used for --emit.",
        long,
        value_enum,
    )]
    emit_format: EmitFormat,

    #[arg(
        default_values_t=["sdl".to_string(), "graphql".to_string()],
        help="Comma-separated list of file extensions to consider as SDL files.",
        long,
        value_delimiter=',',
    )]
    sdl_file_exts: Vec<String>,

    #[arg(
        help="SDL files or directories containing them.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema = match build_schema(&self.file_or_dir_paths, &self.sdl_file_exts) {
            Ok(schema) => schema,
            Err(message) => return CommandResult::stderr(format_args!("{message}")),
        };

        if let Some(emit_path) = &self.emit {
            if let Err(err) = emit_schema(&schema, emit_path, self.emit_format) {
                return CommandResult::stderr(format_args!("{RED_X} {err:#}"));
            }
            log::info!("Wrote {emit_path:#?}.");
        }

        let mut kind_counts = BTreeMap::<&str, usize>::new();
        for def in schema.definitions().values() {
            *kind_counts.entry(def.kind_name()).or_default() += 1;
        }
        let summary = kind_counts
            .iter()
            .map(|(kind, count)| format!("  {kind}: {count}"))
            .collect::<Vec<_>>()
            .join("\n");

        CommandResult::stdout(format_args!(
            "{GREEN_CHECK} Schema is valid ({} definitions).\n{summary}",
            schema.len(),
        ))
    }
}

fn emit_schema(schema: &Schema, path: &Path, format: EmitFormat) -> anyhow::Result<()> {
    let bytes = match format {
        EmitFormat::Bincode => bincode::serde::encode_to_vec(schema, bincode::config::standard())
            .context("Failed to encode schema")?,
        EmitFormat::Json => serde_json::to_vec_pretty(schema)
            .context("Failed to encode schema")?,
    };
    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to write {}", path.display()))
}
