//! Lexer, parser, printer and visitor for the NodeSDL schema language: a
//! GraphQL-like SDL extended with `NodeConnection`, `ScalarConnection`,
//! `ObjectConnection` and `Edge` type forms plus `filter`/`order`
//! definitions.
//!
//! ```
//! let document = nodesdl_parser::parse(
//!     "type User implements Node { id: ID! friends: NodeConnection(User, friends) }",
//! ).unwrap();
//! assert_eq!(document.definitions[0].name(), Some("User"));
//! ```

pub mod ast;
pub mod printer;
mod sdl_error_note;
mod sdl_error_note_kind;
mod sdl_parse_error;
mod sdl_parse_error_kind;
mod sdl_parser;
mod sdl_source_span;
mod sdl_token_stream;
mod source_position;
pub mod token;
pub mod token_source;
pub mod visitor;

pub use sdl_error_note::SdlErrorNote;
pub use sdl_error_note::SdlErrorNotes;
pub use sdl_error_note_kind::SdlErrorNoteKind;
pub use sdl_parse_error::SdlParseError;
pub use sdl_parse_error_kind::SdlParseErrorKind;
pub use sdl_parser::SdlParser;
pub use sdl_source_span::SdlSourceSpan;
pub use sdl_token_stream::SdlTokenStream;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;

/// Parses a complete SDL document.
pub fn parse(source: &str) -> Result<ast::Document, SdlParseError> {
    SdlParser::new(source).parse_document()
}

/// Parses a complete SDL document, attaching `file_path` to error spans.
pub fn parse_file_contents(
    source: &str,
    file_path: &std::path::Path,
) -> Result<ast::Document, SdlParseError> {
    SdlParser::with_file_path(source, file_path).parse_document()
}

#[cfg(test)]
mod tests;
