//! A [`SdlTokenSource`](crate::token_source::SdlTokenSource) that lexes from
//! a `&str` input.
//!
//! Token values borrow directly from the source string using
//! `Cow::Borrowed`. Positions are tracked as UTF-8 character columns (for
//! display) and UTF-16 code unit columns (for editor integrations).
//! Comments and commas are captured as trivia. Invalid input produces
//! `Error` tokens rather than panics.
//!
//! ```rust
//! use nodesdl_parser::token_source::StrSdlTokenSource;
//!
//! let kinds: Vec<_> = StrSdlTokenSource::new("type User")
//!     .map(|token| token.kind)
//!     .collect();
//! assert_eq!(kinds.len(), 3); // `type`, `User`, Eof
//! ```

use crate::smallvec;
use crate::token::SdlToken;
use crate::token::SdlTokenKind;
use crate::token::SdlTriviaToken;
use crate::token::SdlTriviaTokenVec;
use crate::SdlErrorNote;
use crate::SdlSourceSpan;
use crate::SourcePosition;
use std::borrow::Cow;
use std::path::Path;

/// A lexer over `&str` input.
///
/// See module documentation for details.
pub struct StrSdlTokenSource<'src> {
    source: &'src str,

    /// The remaining text to lex is `&source[curr_byte_offset..]`.
    curr_byte_offset: usize,

    /// Current 0-based line number.
    curr_line: usize,

    /// Current UTF-8 character column (0-based).
    curr_col_utf8: usize,

    /// Current UTF-16 code unit column (0-based).
    curr_col_utf16: usize,

    /// Whether the previous character was `\r`, so that `\r\n` counts as a
    /// single newline.
    last_char_was_cr: bool,

    /// Trivia (comments, commas) accumulated before the next token.
    pending_trivia: SdlTriviaTokenVec<'src>,

    /// Whether the EOF token has been emitted.
    finished: bool,

    file_path: Option<&'src Path>,
}

impl<'src> StrSdlTokenSource<'src> {
    /// Creates a new token source from a string slice.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            curr_col_utf16: 0,
            last_char_was_cr: false,
            pending_trivia: smallvec![],
            finished: false,
            file_path: None,
        }
    }

    /// Creates a new token source whose spans carry `path`.
    pub fn with_file_path(source: &'src str, path: &'src Path) -> Self {
        Self {
            file_path: Some(path),
            ..Self::new(source)
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_col_utf8,
            Some(self.curr_col_utf16),
            self.curr_byte_offset,
        )
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character and updates position tracking.
    ///
    /// `\n`, `\r` and `\r\n` each count as exactly one newline.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        if ch == '\n' {
            if self.last_char_was_cr {
                self.last_char_was_cr = false;
            } else {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
                self.curr_col_utf16 = 0;
            }
        } else if ch == '\r' {
            self.curr_line += 1;
            self.curr_col_utf8 = 0;
            self.curr_col_utf16 = 0;
            self.last_char_was_cr = true;
        } else {
            self.curr_col_utf8 += 1;
            self.curr_col_utf16 += ch.len_utf16();
            self.last_char_was_cr = false;
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Consumes `n` ASCII characters known not to be line terminators.
    fn consume_ascii(&mut self, n: usize) {
        self.curr_byte_offset += n;
        self.curr_col_utf8 += n;
        self.curr_col_utf16 += n;
        self.last_char_was_cr = false;
    }

    /// Creates a span from `start` to the current position.
    fn make_span(&self, start: SourcePosition) -> SdlSourceSpan {
        let end = self.curr_position();
        match self.file_path {
            Some(path) => SdlSourceSpan::with_file(start, end, path.to_path_buf()),
            None => SdlSourceSpan::new(start, end),
        }
    }

    /// Creates a token carrying the accumulated trivia.
    fn make_token(
        &mut self,
        kind: SdlTokenKind<'src>,
        span: SdlSourceSpan,
    ) -> SdlToken<'src> {
        SdlToken {
            kind,
            preceding_trivia: std::mem::take(&mut self.pending_trivia),
            span,
        }
    }

    /// Consumes a single-character punctuator and emits it.
    fn lex_punctuator(
        &mut self,
        start: SourcePosition,
        kind: SdlTokenKind<'src>,
    ) -> SdlToken<'src> {
        self.consume_ascii(1);
        let span = self.make_span(start);
        self.make_token(kind, span)
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> SdlToken<'src> {
        loop {
            self.skip_whitespace();
            let start = self.curr_position();

            let kind = match self.peek_char() {
                None => {
                    let span = self.make_span(start);
                    return self.make_token(SdlTokenKind::Eof, span);
                },

                Some('#') => {
                    self.lex_comment(start);
                    continue;
                },

                Some(',') => {
                    self.consume_ascii(1);
                    let span = self.make_span(start);
                    self.pending_trivia.push(SdlTriviaToken::Comma { span });
                    continue;
                },

                Some('!') => SdlTokenKind::Bang,
                Some('$') => SdlTokenKind::Dollar,
                Some('&') => SdlTokenKind::Ampersand,
                Some('(') => SdlTokenKind::ParenOpen,
                Some(')') => SdlTokenKind::ParenClose,
                Some(':') => SdlTokenKind::Colon,
                Some('=') => SdlTokenKind::Equals,
                Some('@') => SdlTokenKind::At,
                Some('[') => SdlTokenKind::SquareBracketOpen,
                Some(']') => SdlTokenKind::SquareBracketClose,
                Some('{') => SdlTokenKind::CurlyBraceOpen,
                Some('}') => SdlTokenKind::CurlyBraceClose,
                Some('|') => SdlTokenKind::Pipe,

                Some('"') => return self.lex_string(start),
                Some(c) if is_name_start(c) => return self.lex_name(start),
                Some(c) if c == '-' || c.is_ascii_digit() => {
                    return self.lex_number(start);
                },
                Some(_) => return self.lex_invalid_character(start),
            };

            return self.lex_punctuator(start, kind);
        }
    }

    /// Skips "ignored" whitespace: space, tab, line terminators and the BOM.
    ///
    /// Commas are insignificant too but are kept as trivia.
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | '\u{FEFF}' => {
                    self.consume();
                },
                _ => break,
            }
        }
    }

    // =========================================================================
    // Comments
    // =========================================================================

    /// Lexes a `#` comment up to (not including) the next line terminator
    /// and records it as pending trivia.
    fn lex_comment(&mut self, start: SourcePosition) {
        self.consume_ascii(1);
        let rest = self.remaining();
        let len = memchr::memchr2(b'\n', b'\r', rest.as_bytes()).unwrap_or(rest.len());
        let content = &rest[..len];

        self.curr_byte_offset += len;
        self.curr_col_utf8 += content.chars().count();
        self.curr_col_utf16 += content.encode_utf16().count();
        self.last_char_was_cr = false;

        let span = self.make_span(start);
        self.pending_trivia.push(SdlTriviaToken::Comment {
            value: Cow::Borrowed(content),
            span,
        });
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// Lexes a name matching `/[_A-Za-z][_0-9A-Za-z]*/`.
    ///
    /// `true`, `false` and `null` are emitted as distinct token kinds.
    fn lex_name(&mut self, start: SourcePosition) -> SdlToken<'src> {
        let rest = self.remaining();
        let len = rest
            .bytes()
            .position(|b| !(b == b'_' || b.is_ascii_alphanumeric()))
            .unwrap_or(rest.len());
        let name = &rest[..len];
        self.consume_ascii(len);

        let kind = match name {
            "true" => SdlTokenKind::True,
            "false" => SdlTokenKind::False,
            "null" => SdlTokenKind::Null,
            _ => SdlTokenKind::name_borrowed(name),
        };
        let span = self.make_span(start);
        self.make_token(kind, span)
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// Lexes an integer or float literal:
    /// `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`
    fn lex_number(&mut self, start: SourcePosition) -> SdlToken<'src> {
        let num_start = self.curr_byte_offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume_ascii(1);
        }

        match self.peek_char() {
            Some('0') => {
                self.consume_ascii(1);
                if self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                    return self.lex_number_error(
                        start,
                        num_start,
                        "Invalid number: leading zeros are not allowed",
                    );
                }
            },
            Some(ch) if ch.is_ascii_digit() => self.consume_digits(),
            Some(_) | None => {
                let span = self.make_span(start);
                return self.make_token(
                    SdlTokenKind::error("Unexpected `-`", smallvec![]),
                    span,
                );
            },
        }

        if self.peek_char() == Some('.')
            && self.peek_char_nth(1).is_some_and(|ch| ch.is_ascii_digit())
        {
            is_float = true;
            self.consume_ascii(1);
            self.consume_digits();
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            is_float = true;
            self.consume_ascii(1);
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.consume_ascii(1);
            }
            if !self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number: exponent must have at least one digit",
                );
            }
            self.consume_digits();
        }

        let num_text = &self.source[num_start..self.curr_byte_offset];
        let span = self.make_span(start);
        let kind = if is_float {
            SdlTokenKind::float_value_borrowed(num_text)
        } else {
            SdlTokenKind::int_value_borrowed(num_text)
        };
        self.make_token(kind, span)
    }

    fn consume_digits(&mut self) {
        let len = self
            .remaining()
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(self.remaining().len());
        self.consume_ascii(len);
    }

    /// Creates an error token for an invalid number, swallowing the rest of
    /// the number-like run so lexing resumes after it.
    fn lex_number_error(
        &mut self,
        start: SourcePosition,
        num_start: usize,
        message: &str,
    ) -> SdlToken<'src> {
        let len = self
            .remaining()
            .bytes()
            .position(|b| !(b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-')))
            .unwrap_or(self.remaining().len());
        self.consume_ascii(len);

        let invalid_text = &self.source[num_start..self.curr_byte_offset];
        let span = self.make_span(start);
        self.make_token(
            SdlTokenKind::error(format!("{message}: `{invalid_text}`"), smallvec![]),
            span,
        )
    }

    // =========================================================================
    // Strings
    // =========================================================================

    /// Lexes a string literal (single-line or block string).
    fn lex_string(&mut self, start: SourcePosition) -> SdlToken<'src> {
        let str_start = self.curr_byte_offset;

        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start, str_start);
        }

        self.consume_ascii(1);
        loop {
            match self.peek_char() {
                None => {
                    let span = self.make_span(start.clone());
                    let kind = SdlTokenKind::error(
                        "Unterminated string literal",
                        smallvec![
                            SdlErrorNote::general_with_span(
                                "String started here",
                                self.make_span(start),
                            ),
                            SdlErrorNote::help("Add closing `\"`"),
                        ],
                    );
                    return self.make_token(kind, span);
                },
                Some('\n' | '\r') => {
                    self.consume();
                    if self.last_char_was_cr && self.peek_char() == Some('\n') {
                        self.consume();
                    }
                    let span = self.make_span(start);
                    let kind = SdlTokenKind::error(
                        "Unterminated string literal",
                        smallvec![
                            SdlErrorNote::general(
                                "Single-line strings cannot contain unescaped newlines",
                            ),
                            SdlErrorNote::help(
                                "Use a block string (triple quotes) for multi-line \
                                 strings, or escape the newline with `\\n`",
                            ),
                        ],
                    );
                    return self.make_token(kind, span);
                },
                Some('"') => {
                    self.consume_ascii(1);
                    break;
                },
                Some('\\') => {
                    self.consume_ascii(1);
                    if self.peek_char().is_some() {
                        self.consume();
                    }
                },
                Some(_) => {
                    self.consume();
                },
            }
        }

        let string_text = &self.source[str_start..self.curr_byte_offset];
        let span = self.make_span(start);
        self.make_token(SdlTokenKind::string_value_borrowed(string_text), span)
    }

    fn lex_block_string(&mut self, start: SourcePosition, str_start: usize) -> SdlToken<'src> {
        self.consume_ascii(3);

        loop {
            let rest = self.remaining();
            if rest.is_empty() {
                let span = self.make_span(start.clone());
                let kind = SdlTokenKind::error(
                    "Unterminated block string",
                    smallvec![
                        SdlErrorNote::general_with_span(
                            "Block string started here",
                            self.make_span(start),
                        ),
                        SdlErrorNote::help("Add closing `\"\"\"`"),
                    ],
                );
                return self.make_token(kind, span);
            }
            if rest.starts_with("\\\"\"\"") {
                self.consume_ascii(4);
            } else if rest.starts_with("\"\"\"") {
                self.consume_ascii(3);
                break;
            } else {
                self.consume();
            }
        }

        let string_text = &self.source[str_start..self.curr_byte_offset];
        let span = self.make_span(start);
        self.make_token(SdlTokenKind::string_value_borrowed(string_text), span)
    }

    // =========================================================================
    // Invalid characters
    // =========================================================================

    fn lex_invalid_character(&mut self, start: SourcePosition) -> SdlToken<'src> {
        let ch = self.consume();
        let description = match ch {
            Some(ch) => describe_char(ch),
            None => "end of input".to_string(),
        };
        let span = self.make_span(start);
        let mut notes = smallvec![];
        if ch == Some('.') {
            notes.push(SdlErrorNote::help(
                "Field paths are not part of the schema language; reference \
                 the type by name instead",
            ));
        }
        self.make_token(
            SdlTokenKind::error(format!("Unexpected character {description}"), notes),
            span,
        )
    }
}

// =============================================================================
// Iterator implementation
// =============================================================================

impl<'src> Iterator for StrSdlTokenSource<'src> {
    type Item = SdlToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if matches!(token.kind, SdlTokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}

// =============================================================================
// Helper functions
// =============================================================================

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// Returns a human-readable description of a character for error messages.
///
/// Invisible and control characters include their code point and, where
/// known, their Unicode name.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') {
        match unicode_char_name(ch) {
            Some(name) => format!("`{}` (U+{:04X}: {})", ch, ch as u32, name),
            None => format!("`{}` (U+{:04X})", ch, ch as u32),
        }
    } else {
        format!("`{ch}`")
    }
}

/// Names for the invisible characters that most often sneak into
/// copy-pasted schema files.
fn unicode_char_name(ch: char) -> Option<&'static str> {
    match ch {
        '\u{0000}' => Some("NULL"),
        '\u{0008}' => Some("BACKSPACE"),
        '\u{000B}' => Some("VERTICAL TAB"),
        '\u{000C}' => Some("FORM FEED"),
        '\u{001B}' => Some("ESCAPE"),
        '\u{007F}' => Some("DELETE"),
        '\u{0085}' => Some("NEXT LINE"),
        '\u{00A0}' => Some("NO-BREAK SPACE"),
        '\u{00AD}' => Some("SOFT HYPHEN"),
        '\u{2000}'..='\u{200A}' => Some("TYPOGRAPHIC SPACE"),
        '\u{200B}' => Some("ZERO WIDTH SPACE"),
        '\u{200C}' => Some("ZERO WIDTH NON-JOINER"),
        '\u{200D}' => Some("ZERO WIDTH JOINER"),
        '\u{200E}' => Some("LEFT-TO-RIGHT MARK"),
        '\u{200F}' => Some("RIGHT-TO-LEFT MARK"),
        '\u{2028}' => Some("LINE SEPARATOR"),
        '\u{2029}' => Some("PARAGRAPH SEPARATOR"),
        '\u{202F}' => Some("NARROW NO-BREAK SPACE"),
        '\u{205F}' => Some("MEDIUM MATHEMATICAL SPACE"),
        '\u{2060}' => Some("WORD JOINER"),
        '\u{3000}' => Some("IDEOGRAPHIC SPACE"),
        '\u{FEFF}' => Some("BYTE ORDER MARK"),
        _ => None,
    }
}
