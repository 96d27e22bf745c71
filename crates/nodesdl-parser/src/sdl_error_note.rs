use crate::SdlErrorNoteKind;
use crate::SdlSourceSpan;
use crate::SmallVec;

/// An error note providing additional context about an error.
///
/// Notes augment the primary error message with explanatory context,
/// actionable suggestions, or related source locations (e.g. where an
/// unterminated string was opened).
#[derive(Debug, Clone, PartialEq)]
pub struct SdlErrorNote {
    /// The kind of note (determines rendering prefix).
    pub kind: SdlErrorNoteKind,

    /// The note message.
    pub message: String,

    /// Optional span pointing to a related location.
    pub span: Option<SdlSourceSpan>,
}

impl SdlErrorNote {
    /// Creates a general note without a span.
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: SdlErrorNoteKind::General,
            message: message.into(),
            span: None,
        }
    }

    /// Creates a general note with a span.
    pub fn general_with_span(message: impl Into<String>, span: SdlSourceSpan) -> Self {
        Self {
            kind: SdlErrorNoteKind::General,
            message: message.into(),
            span: Some(span),
        }
    }

    /// Creates a help note without a span.
    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: SdlErrorNoteKind::Help,
            message: message.into(),
            span: None,
        }
    }
}

/// Most errors have 0-2 notes, so these live inline.
pub type SdlErrorNotes = SmallVec<[SdlErrorNote; 2]>;
