use nodesdl_parser::ast::AstPos;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;

/// A 1-based line/column position within a loaded schema file.
///
/// Schemas loaded from a string without a path are assigned a synthetic
/// `str://N` path.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct FilePosition {
    pub col: usize,
    pub file: PathBuf,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_ast_pos(file: &Path, pos: Option<AstPos>) -> Self {
        let pos = pos.unwrap_or_default();
        Self {
            col: pos.column,
            file: file.to_path_buf(),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.col)
    }
}

/// Where a schema definition came from.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum SchemaDefLocation {
    /// Injected by the analyzer (the `Node` interface and its `id` field).
    BuiltIn,
    Schema(FilePosition),
}
impl std::fmt::Display for SchemaDefLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaDefLocation::BuiltIn => write!(f, "<built-in>"),
            SchemaDefLocation::Schema(pos) => write!(f, "{pos}"),
        }
    }
}
