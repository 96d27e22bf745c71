use anyhow::Context as _;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::build_schema;
use crate::output_utils::GREEN_CHECK;
use crate::output_utils::RED_X;
use nodesdl_core::Schema;
use nodesdl_core::validate;
use nodesdl_core::validate::Context;
use nodesdl_core::validate::ContextError;
use nodesdl_core::validate::ContextKind;
use nodesdl_core::validate::MutationDescriptor;
use nodesdl_core::validate::ValidationResult;
use serde_json::Value as JsonValue;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

type Validator = for<'s> fn(Context<'s>, &JsonValue) -> Result<ValidationResult<'s>, ContextError>;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum ValidationMode {
    /// A new node, or with --edge the properties of a new edge.
    Add,
    Filter,
    Update,
}

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        help="JSON files holding one payload each.",
        long="data",
        num_args=1..,
        required=true,
    )]
    data_paths: Vec<PathBuf>,

    #[arg(
        help="Validate against the edge type of the --field connection.",
        long,
        requires="field_name",
    )]
    edge: bool,

    #[arg(
        help="Target a field of --type instead of the type itself.",
        long="field",
    )]
    field_name: Option<String>,

    #[arg(long, value_enum)]
    mode: ValidationMode,

    #[arg(
        help="Name of the mutation the payloads belong to; used in failure headers.",
        long,
    )]
    mutation: Option<String>,

    #[arg(
        help="SDL files or directories containing them.",
        long="schema",
        num_args=1..,
        required=true,
    )]
    schema_paths: Vec<PathBuf>,

    #[arg(
        default_values_t=["sdl".to_string(), "graphql".to_string()],
        help="Comma-separated list of file extensions to consider as SDL files.",
        long,
        value_delimiter=',',
    )]
    sdl_file_exts: Vec<String>,

    #[arg(long="type")]
    type_name: String,
}

/// Everything a payload task needs besides the schema and the payload.
#[derive(Clone, Debug)]
struct ValidationRequest {
    field_name: Option<String>,
    kind: ContextKind,
    mutation: Option<String>,
    type_name: String,
    validator: Validator,
}
impl ValidationRequest {
    fn context<'s>(&self, schema: &'s Schema) -> Context<'s> {
        let context = match &self.field_name {
            Some(field_name) => Context::for_field(
                self.kind,
                schema,
                self.type_name.as_str(),
                field_name.as_str(),
            ),
            None => Context::for_type(self.kind, schema, self.type_name.as_str()),
        };
        match &self.mutation {
            Some(name) => context.with_mutation(MutationDescriptor::new(name.as_str())),
            None => context,
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema = match build_schema(&self.schema_paths, &self.sdl_file_exts) {
            Ok(schema) => Arc::new(schema),
            Err(message) => return CommandResult::stderr(format_args!("{message}")),
        };

        let validator: Validator = match (self.mode, self.edge) {
            (ValidationMode::Add, false) => validate::validate_node,
            (ValidationMode::Add, true) => validate::validate_edge_props,
            (ValidationMode::Filter, false) => validate::validate_filter,
            (ValidationMode::Filter, true) => validate::validate_edge_filter,
            (ValidationMode::Update, false) => validate::validate_update,
            (ValidationMode::Update, true) => validate::validate_edge_update,
        };
        let kind = match (self.mode, self.edge) {
            (ValidationMode::Add, false) => ContextKind::AddNode,
            (ValidationMode::Add, true) => ContextKind::AddEdge,
            (ValidationMode::Filter, _) => ContextKind::Filter,
            (ValidationMode::Update, _) => ContextKind::Update,
        };
        let request = ValidationRequest {
            field_name: self.field_name,
            kind,
            mutation: self.mutation,
            type_name: self.type_name,
            validator,
        };

        let mut tasks = tokio::task::JoinSet::new();
        for (idx, data_path) in self.data_paths.into_iter().enumerate() {
            let schema = Arc::clone(&schema);
            let request = request.clone();
            tasks.spawn_blocking(move || {
                let outcome = validate_payload(&schema, &request, &data_path);
                (idx, data_path, outcome)
            });
        }

        let mut outcomes = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                Err(err) => return CommandResult::stderr(format_args!("{RED_X} {err}")),
            }
        }
        outcomes.sort_by_key(|(idx, _, _)| *idx);

        let mut num_invalid = 0;
        let mut report = vec![];
        for (_, data_path, outcome) in outcomes {
            match outcome {
                Ok(()) => report.push(format!("{GREEN_CHECK} {}", data_path.display())),
                Err(err) => {
                    num_invalid += 1;
                    report.push(format!("{RED_X} {}\n{err:#}", data_path.display()));
                },
            }
        }

        let result = CommandResult::stdout(format_args!("{}", report.join("\n")));
        if num_invalid > 0 {
            log::debug!("{num_invalid} invalid payload(s).");
            result.failed()
        } else {
            result
        }
    }
}

fn validate_payload(schema: &Schema, request: &ValidationRequest, data_path: &Path) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(data_path)
        .with_context(|| format!("Failed to read {}", data_path.display()))?;
    let payload: JsonValue = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {} as JSON", data_path.display()))?;

    let result = (request.validator)(request.context(schema), &payload)?;
    log::trace!("{}: {} violation(s).", data_path.display(), result.results.len());
    validate::throw_on_errors(result)?;
    Ok(())
}
