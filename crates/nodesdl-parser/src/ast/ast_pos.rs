use serde::Deserialize;
use serde::Serialize;

/// A 1-based line/column position stored on AST nodes.
///
/// The column counts UTF-8 characters, not bytes.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct AstPos {
    pub line: usize,
    pub column: usize,
}

impl std::fmt::Display for AstPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
