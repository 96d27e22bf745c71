use crate::token::SdlToken;

/// Marker trait for [`SdlToken`] lexers (iterators that generate
/// [`SdlToken`]s).
///
/// Implementors define an [`Iterator`] that produces tokens one at a time.
/// All lookahead, buffering, and peeking is handled by `SdlTokenStream`.
///
/// Lexers are responsible for:
/// - Skipping whitespace
/// - Accumulating trivia (comments, commas) and attaching it to the next
///   token
/// - Emitting [`SdlTokenKind::Error`](crate::token::SdlTokenKind::Error) for
///   lexer errors
/// - Emitting a final [`SdlTokenKind::Eof`](crate::token::SdlTokenKind::Eof)
///   token carrying any trailing trivia
pub trait SdlTokenSource<'src>: Iterator<Item = SdlToken<'src>> {}

impl<'src, T> SdlTokenSource<'src> for T where T: Iterator<Item = SdlToken<'src>> {}
