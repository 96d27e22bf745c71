use crate::file_reader;
use crate::loc;
use crate::schema::definition_pass::DefinitionPass;
use crate::schema::extension_index::ExtensionIndex;
use crate::schema::node_resolution;
use crate::schema::Schema;
use nodesdl_parser::ast;
use nodesdl_parser::visitor::VisitError;
use nodesdl_parser::SdlParseError;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// A parsed schema file waiting to be analyzed.
#[derive(Debug)]
pub(super) struct LoadedDocument {
    pub document: ast::Document,
    pub file_path: PathBuf,
}

/// Utility for building a [`Schema`].
///
/// Every loaded file contributes its definitions to one logical document;
/// `extend` definitions may target a definition from any loaded file.
///
/// ```
/// use nodesdl_core::SchemaBuilder;
///
/// let schema = SchemaBuilder::new()
///     .load_str(None, "type User implements Node { id: ID! name: String }")
///     .unwrap()
///     .build()
///     .unwrap();
/// assert!(schema.object_type("User").unwrap().implements_node());
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    documents: Vec<LoadedDocument>,
    str_load_counter: u16,
}
impl SchemaBuilder {
    /// Analyzes everything loaded so far.
    ///
    /// Extensions are merged first, then each definition kind is analyzed
    /// in turn (enums and scalars, types, the built-in `Node` interface,
    /// interfaces, unions, inputs, mutations, filters, orders). A final
    /// resolution pass reclassifies references to Node types once every
    /// name is known.
    pub fn build(self) -> Result<Schema> {
        let extensions = ExtensionIndex::collect(&self.documents)?;
        let unresolved = DefinitionPass::run(&self.documents, &extensions)?;
        let schema = node_resolution::resolve(unresolved);
        log::debug!(
            "Built schema with {} definitions from {} document(s)",
            schema.len(),
            self.documents.len(),
        );
        Ok(schema)
    }

    pub fn new() -> Self {
        Self {
            documents: vec![],
            str_load_counter: 0,
        }
    }

    /// Adds an already-parsed document.
    pub fn load_document(mut self, file_path: Option<PathBuf>, document: ast::Document) -> Self {
        let file_path = self.file_path_or_placeholder(file_path);
        self.documents.push(LoadedDocument {
            document,
            file_path,
        });
        self
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(mut self, file_paths: Vec<impl AsRef<Path>>) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::FileRead(Box::new(err)))?;
            self = self.load_str(Some(file_path.to_path_buf()), file_content.as_str())?;
        }
        Ok(self)
    }

    /// Parses `content` and queues its definitions. Content without a path
    /// is attributed to a synthetic `str://N` path.
    pub fn load_str(mut self, file_path: Option<PathBuf>, content: &str) -> Result<Self> {
        let file_path = self.file_path_or_placeholder(file_path);

        let document = nodesdl_parser::parse_file_contents(content, file_path.as_path())
            .map_err(|err| SchemaBuildError::Parse {
                err,
                file: file_path.to_owned(),
                source_text: content.to_string(),
            })?;

        log::debug!(
            "Loaded {} definition(s) from `{}`",
            document.definitions.len(),
            file_path.display(),
        );
        self.documents.push(LoadedDocument {
            document,
            file_path,
        });
        Ok(self)
    }

    fn file_path_or_placeholder(&mut self, file_path: Option<PathBuf>) -> PathBuf {
        if let Some(file_path) = file_path {
            file_path
        } else {
            let ctr = self.str_load_counter;
            self.str_load_counter += 1;
            PathBuf::from(format!("str://{ctr}"))
        }
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Name already defined: `{name}` is defined at {def1} and again at {def2}")]
    DuplicateDefinition {
        name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error(
        "The `{field_name}` field of `{type_name}` is defined more than once \
        (at {def1} and {def2})"
    )]
    DuplicateFieldDefinition {
        type_name: String,
        field_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error(
        "Attempted to extend `{type_name}` (a {base_kind}) with an `extend \
        {extension_kind}` at {extension_loc}"
    )]
    ExtensionKindMismatch {
        type_name: String,
        base_kind: String,
        extension_kind: String,
        extension_loc: loc::FilePosition,
    },

    #[error("Attempted to extend `{type_name}`, which is not defined elsewhere ({extension_loc})")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_loc: loc::FilePosition,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    FileRead(Box<file_reader::ReadContentError>),

    #[error("Input fields cannot have arguments: `{input_name}.{field_name}` at {location}")]
    InputFieldWithArguments {
        input_name: String,
        field_name: String,
        location: loc::FilePosition,
    },

    #[error(
        "Input fields cannot have connection or edge types: \
        `{input_name}.{field_name}` at {location}"
    )]
    InputFieldWithConnection {
        input_name: String,
        field_name: String,
        location: loc::FilePosition,
    },

    #[error("{err}")]
    Parse {
        err: SdlParseError,
        file: PathBuf,
        source_text: String,
    },

    #[error("Internal error while walking a schema document: {0}")]
    Visit(#[from] VisitError),
}
impl SchemaBuildError {
    /// Renders the error for a terminal: parse errors get a caret-style
    /// source frame, everything else its one-line message.
    pub fn format_detailed(&self) -> String {
        match self {
            SchemaBuildError::Parse {
                err, source_text, ..
            } => err.format_detailed(Some(source_text)),
            other => format!("error: {other}\n"),
        }
    }
}
