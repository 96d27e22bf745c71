use crate::token::SdlTokenKind;
use crate::token::SdlTriviaToken;
use crate::SdlSourceSpan;
use smallvec::SmallVec;

/// Trivia storage. Most tokens carry 0-2 trivia items.
pub type SdlTriviaTokenVec<'src> = SmallVec<[SdlTriviaToken<'src>; 2]>;

/// A token with location (span) information and an ordered list of any
/// preceding trivia (comments, commas).
///
/// Trivia is attached to the *following* token, so the parser can simply
/// call `peek()` and `consume()` without skipping anything.
#[derive(Clone, Debug, PartialEq)]
pub struct SdlToken<'src> {
    /// The kind of token (including `Error` for lexer errors).
    pub kind: SdlTokenKind<'src>,

    /// Trivia (comments, commas) that precede this token.
    pub preceding_trivia: SdlTriviaTokenVec<'src>,

    /// The source location span of this token.
    pub span: SdlSourceSpan,
}

impl<'src> SdlToken<'src> {
    /// Convenience constructor for a token with no preceding trivia.
    pub fn new(kind: SdlTokenKind<'src>, span: SdlSourceSpan) -> Self {
        Self {
            kind,
            preceding_trivia: SmallVec::new(),
            span,
        }
    }
}
