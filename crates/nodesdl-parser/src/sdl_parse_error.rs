use crate::SdlErrorNote;
use crate::SdlErrorNoteKind;
use crate::SdlErrorNotes;
use crate::SdlParseErrorKind;
use crate::SdlSourceSpan;

/// A parse error with location information and contextual notes.
///
/// Parsing is fail-fast: the first error aborts the parse, so a document
/// yields at most one of these.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct SdlParseError {
    /// Human-readable primary error message, e.g.
    /// "expected `:`, found `String`".
    message: String,

    /// Where the error was detected. For "unexpected token" errors this is
    /// the unexpected token; for EOF errors it is the end of the last token.
    span: SdlSourceSpan,

    kind: SdlParseErrorKind,

    /// Additional notes (explanations, suggestions, related locations).
    notes: SdlErrorNotes,
}

impl SdlParseError {
    /// Creates a new parse error with no notes.
    pub fn new(
        message: impl Into<String>,
        span: SdlSourceSpan,
        kind: SdlParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: SdlErrorNotes::new(),
        }
    }

    /// Creates a parse error from a lexer error token, preserving the
    /// lexer's message and notes.
    pub fn from_lexer_error(
        message: impl Into<String>,
        span: SdlSourceSpan,
        lexer_notes: SdlErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind: SdlParseErrorKind::LexerError,
            notes: lexer_notes,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> &SdlSourceSpan {
        &self.span
    }

    pub fn kind(&self) -> &SdlParseErrorKind {
        &self.kind
    }

    pub fn notes(&self) -> &SdlErrorNotes {
        &self.notes
    }

    /// 1-based line of the error.
    pub fn line(&self) -> usize {
        self.span.start_inclusive.line() + 1
    }

    /// 1-based (UTF-8 character) column of the error.
    pub fn column(&self) -> usize {
        self.span.start_inclusive.col_utf8() + 1
    }

    /// Adds a general note without a span.
    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(SdlErrorNote::general(message));
    }

    /// Adds a general note pointing at a related location.
    pub fn add_note_with_span(&mut self, message: impl Into<String>, span: SdlSourceSpan) {
        self.notes.push(SdlErrorNote::general_with_span(message, span));
    }

    /// Adds a help note.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(SdlErrorNote::help(message));
    }

    /// Formats this error as a diagnostic with a source frame:
    ///
    /// ```text
    /// error: expected `:`, found `String`
    ///   --> schema.sdl:5:12
    ///    |
    ///  5 |     userName String
    ///    |              ^^^^^^
    ///    = help: ...
    /// ```
    ///
    /// When `source` is `None` the frame is omitted but the location line is
    /// still shown.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');
        output.push_str(&format!(
            "  --> {}:{}:{}\n",
            self.file_name(),
            self.line(),
            self.column(),
        ));

        if let Some(snippet) = source.and_then(|src| self.format_source_snippet(src)) {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            let prefix = match note.kind {
                SdlErrorNoteKind::General => "note",
                SdlErrorNoteKind::Help => "help",
            };
            output.push_str(&format!("   = {prefix}: {}\n", note.message));

            if let (Some(note_span), Some(src)) = (&note.span, source) {
                if let Some(snippet) = format_note_snippet(src, note_span) {
                    output.push_str(&snippet);
                }
            }
        }

        output
    }

    /// Formats this error as `file:line:col: error: message`.
    pub fn format_oneline(&self) -> String {
        format!(
            "{}:{}:{}: error: {}",
            self.file_name(),
            self.line(),
            self.column(),
            self.message,
        )
    }

    fn file_name(&self) -> String {
        self.span
            .file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string())
    }

    fn format_source_snippet(&self, source: &str) -> Option<String> {
        let line_num = self.span.start_inclusive.line();
        let line_content = source.lines().nth(line_num)?;
        let display_line_num = line_num + 1;
        let width = display_line_num.to_string().len().max(2);

        let col_start = self.span.start_inclusive.col_utf8();
        // Multi-line spans are underlined to the end of their first line.
        let col_end = if self.span.end_exclusive.line() == line_num {
            self.span.end_exclusive.col_utf8()
        } else {
            line_content.chars().count()
        };
        let underline_len = col_end.saturating_sub(col_start).max(1);

        let mut output = String::new();
        output.push_str(&format!("{:>width$} |\n", ""));
        output.push_str(&format!("{display_line_num:>width$} | {line_content}\n"));
        output.push_str(&format!(
            "{:>width$} | {:>padding$}{}\n",
            "",
            "",
            "^".repeat(underline_len),
            padding = col_start,
        ));
        Some(output)
    }
}

fn format_note_snippet(source: &str, span: &SdlSourceSpan) -> Option<String> {
    let line_num = span.start_inclusive.line();
    let line_content = source.lines().nth(line_num)?;
    let display_line_num = line_num + 1;
    let width = display_line_num.to_string().len().max(2);

    let mut output = String::new();
    output.push_str(&format!("     {display_line_num:>width$} | {line_content}\n"));
    output.push_str(&format!(
        "     {:>width$} | {:>padding$}-\n",
        "",
        "",
        padding = span.start_inclusive.col_utf8(),
    ));
    Some(output)
}
