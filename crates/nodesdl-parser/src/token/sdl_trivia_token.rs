use crate::SdlSourceSpan;
use std::borrow::Cow;

/// A "trivia token" is a token that doesn't affect parsing but is still
/// preserved for tooling.
///
/// Trivia is attached to the following token as "preceding trivia".
#[derive(Clone, Debug, PartialEq)]
pub enum SdlTriviaToken<'src> {
    /// A comment, which starts with `#` and extends to the end of the line.
    Comment {
        /// The comment text (excluding the leading `#`).
        value: Cow<'src, str>,
        span: SdlSourceSpan,
    },

    /// A comma separator. Commas are insignificant in the grammar.
    Comma {
        span: SdlSourceSpan,
    },
}
