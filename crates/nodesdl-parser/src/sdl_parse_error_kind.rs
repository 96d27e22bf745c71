/// Categorizes parse errors for programmatic handling.
///
/// The `#[error(...)]` messages are concise. Full human-readable messages
/// live in `SdlParseError::message()`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SdlParseErrorKind {
    /// Expected specific token(s) but found something else.
    ///
    /// ```text
    /// type User { name String }
    ///                  ^^^^^^ expected `:`, found `String`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        expected: Vec<String>,
        found: String,
    },

    /// The document ended before a complete construct was parsed.
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// The lexer produced an error token. Its message and notes are carried
    /// over into the `SdlParseError`.
    #[error("lexer error")]
    LexerError,

    /// A `{`, `[` or `(` was opened but the input ended first.
    #[error("unclosed delimiter: `{delimiter}`")]
    UnclosedDelimiter {
        delimiter: String,
    },

    /// A literal could not be interpreted (e.g. a bad string escape).
    #[error("invalid value")]
    InvalidValue,

    /// Invalid syntax that doesn't fit other categories, such as a
    /// connection type nested in a list or a variable outside a filter.
    #[error("invalid syntax")]
    InvalidSyntax,
}
