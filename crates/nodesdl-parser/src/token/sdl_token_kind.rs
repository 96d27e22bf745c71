use crate::token::CookSdlStringError;
use crate::SdlErrorNotes;
use std::borrow::Cow;
use std::num::ParseFloatError;
use std::num::ParseIntError;

/// The kind of an SDL token.
///
/// Literal values (`IntValue`, `FloatValue`, `StringValue`) store only the raw
/// source text. `Cow<'src, str>` lets the string lexer borrow directly from
/// the source while tests and tools can build owned tokens.
///
/// Negative numbers like `-123` are lexed as single tokens (e.g.
/// `IntValue("-123")`), not as separate minus and number tokens.
#[derive(Clone, Debug, PartialEq)]
pub enum SdlTokenKind<'src> {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Literals (raw source text only)
    // =========================================================================
    /// A name/identifier. Structural keywords (`type`, `filter`, ...) are
    /// plain names; the parser decides what is a keyword from context.
    Name(Cow<'src, str>),

    /// Raw source text of an integer literal, including optional negative sign
    /// (e.g. `"-123"`, `"0"`).
    IntValue(Cow<'src, str>),

    /// Raw source text of a float literal, including optional negative sign
    /// (e.g. `"-1.23e-4"`, `"0.5"`).
    FloatValue(Cow<'src, str>),

    /// Raw source text of a string literal, including quotes
    /// (e.g. `"\"hello\\nworld\""`, `"\"\"\"block\"\"\""`).
    ///
    /// Use `cook_string_value()` to process escape sequences.
    StringValue(Cow<'src, str>),

    /// The `true` literal.
    True,
    /// The `false` literal.
    False,
    /// The `null` literal.
    Null,

    /// End of input. The associated `SdlToken` may carry trailing trivia.
    Eof,

    /// A lexer error.
    Error {
        /// A human-readable error message.
        message: String,
        /// Optional notes providing additional context or suggestions.
        error_notes: SdlErrorNotes,
    },
}

impl<'src> SdlTokenKind<'src> {
    /// Create a `Name` token from a borrowed string slice.
    #[inline]
    pub fn name_borrowed(s: &'src str) -> Self {
        SdlTokenKind::Name(Cow::Borrowed(s))
    }

    /// Create a `Name` token from an owned `String`.
    #[inline]
    pub fn name_owned(s: String) -> Self {
        SdlTokenKind::Name(Cow::Owned(s))
    }

    #[inline]
    pub fn int_value_borrowed(s: &'src str) -> Self {
        SdlTokenKind::IntValue(Cow::Borrowed(s))
    }

    #[inline]
    pub fn float_value_borrowed(s: &'src str) -> Self {
        SdlTokenKind::FloatValue(Cow::Borrowed(s))
    }

    #[inline]
    pub fn string_value_borrowed(s: &'src str) -> Self {
        SdlTokenKind::StringValue(Cow::Borrowed(s))
    }

    /// Create an `Error` token.
    #[inline]
    pub fn error(message: impl Into<String>, error_notes: SdlErrorNotes) -> Self {
        SdlTokenKind::Error {
            message: message.into(),
            error_notes,
        }
    }

    /// Returns the string representation of this token if it is a punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            SdlTokenKind::Ampersand => Some("&"),
            SdlTokenKind::At => Some("@"),
            SdlTokenKind::Bang => Some("!"),
            SdlTokenKind::Colon => Some(":"),
            SdlTokenKind::CurlyBraceClose => Some("}"),
            SdlTokenKind::CurlyBraceOpen => Some("{"),
            SdlTokenKind::Dollar => Some("$"),
            SdlTokenKind::Equals => Some("="),
            SdlTokenKind::ParenClose => Some(")"),
            SdlTokenKind::ParenOpen => Some("("),
            SdlTokenKind::Pipe => Some("|"),
            SdlTokenKind::SquareBracketClose => Some("]"),
            SdlTokenKind::SquareBracketOpen => Some("["),

            SdlTokenKind::Name(_)
            | SdlTokenKind::IntValue(_)
            | SdlTokenKind::FloatValue(_)
            | SdlTokenKind::StringValue(_)
            | SdlTokenKind::True
            | SdlTokenKind::False
            | SdlTokenKind::Null
            | SdlTokenKind::Eof
            | SdlTokenKind::Error { .. } => None,
        }
    }

    /// Returns `true` if this token is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Returns `true` if this token represents a lexer error.
    pub fn is_error(&self) -> bool {
        matches!(self, SdlTokenKind::Error { .. })
    }

    /// Parse an `IntValue`'s raw text to `i64`.
    ///
    /// Returns `None` if this is not an `IntValue`.
    pub fn parse_int_value(&self) -> Option<Result<i64, ParseIntError>> {
        match self {
            SdlTokenKind::IntValue(raw) => Some(raw.parse()),
            _ => None,
        }
    }

    /// Parse a `FloatValue`'s raw text to `f64`.
    ///
    /// Returns `None` if this is not a `FloatValue`.
    pub fn parse_float_value(&self) -> Option<Result<f64, ParseFloatError>> {
        match self {
            SdlTokenKind::FloatValue(raw) => Some(raw.parse()),
            _ => None,
        }
    }

    /// Cook a `StringValue`'s raw text into its unescaped content.
    ///
    /// Returns `None` if this is not a `StringValue`.
    pub fn cook_string_value(&self) -> Option<Result<String, CookSdlStringError>> {
        match self {
            SdlTokenKind::StringValue(raw) => Some(cook_string_literal(raw)),
            _ => None,
        }
    }
}

/// Cook the raw text of a string literal (quotes included).
///
/// - Single-line strings (`"..."`) process `\n`, `\r`, `\t`, `\\`, `\"`,
///   `\/`, `\b`, `\f`, `\uXXXX` and `\u{X...}`.
/// - Block strings (`"""..."""`) get common indentation stripped along with
///   leading and trailing blank lines; only `\"""` is an escape.
pub fn cook_string_literal(raw: &str) -> Result<String, CookSdlStringError> {
    if raw.starts_with("\"\"\"") {
        cook_block_string(raw)
    } else {
        cook_single_line_string(raw)
    }
}

fn cook_single_line_string(raw: &str) -> Result<String, CookSdlStringError> {
    if !raw.starts_with('"') || !raw.ends_with('"') || raw.len() < 2 {
        return Err(CookSdlStringError::UnterminatedString);
    }
    let content = &raw[1..raw.len() - 1];

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('/') => result.push('/'),
            Some('b') => result.push('\u{0008}'),
            Some('f') => result.push('\u{000C}'),
            Some('u') => result.push(cook_unicode_escape(&mut chars)?),
            Some(other) => {
                return Err(CookSdlStringError::InvalidEscapeSequence(format!(
                    "\\{other}"
                )));
            },
            None => {
                return Err(CookSdlStringError::InvalidEscapeSequence(
                    "\\".to_string(),
                ));
            },
        }
    }

    Ok(result)
}

/// Cook a Unicode escape sequence after seeing `\u`.
fn cook_unicode_escape(
    chars: &mut std::iter::Peekable<std::str::Chars>,
) -> Result<char, CookSdlStringError> {
    let hex = if chars.peek() == Some(&'{') {
        chars.next();
        let mut hex = String::new();
        loop {
            match chars.next() {
                Some('}') => break,
                Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                Some(c) => {
                    return Err(CookSdlStringError::InvalidUnicodeEscape(format!(
                        "\\u{{{hex}{c}"
                    )));
                },
                None => {
                    return Err(CookSdlStringError::InvalidUnicodeEscape(format!(
                        "\\u{{{hex}"
                    )));
                },
            }
        }
        if hex.is_empty() {
            return Err(CookSdlStringError::InvalidUnicodeEscape(
                "\\u{}".to_string(),
            ));
        }
        hex
    } else {
        let mut hex = String::with_capacity(4);
        for _ in 0..4 {
            match chars.next() {
                Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                Some(c) => {
                    return Err(CookSdlStringError::InvalidUnicodeEscape(format!(
                        "\\u{hex}{c}"
                    )));
                },
                None => {
                    return Err(CookSdlStringError::InvalidUnicodeEscape(format!(
                        "\\u{hex}"
                    )));
                },
            }
        }
        hex
    };

    u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| CookSdlStringError::InvalidUnicodeEscape(format!("\\u{hex}")))
}

fn cook_block_string(raw: &str) -> Result<String, CookSdlStringError> {
    if !raw.ends_with("\"\"\"") || raw.len() < 6 {
        return Err(CookSdlStringError::UnterminatedString);
    }
    let content = raw[3..raw.len() - 3].replace("\\\"\"\"", "\"\"\"");
    let lines: Vec<&str> = content.lines().collect();

    // Common indentation ignores the first line and blank lines.
    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    let mut cooked_lines: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i > 0 {
                line.get(common_indent..).unwrap_or(line)
            } else {
                line
            }
        })
        .collect();

    while cooked_lines.first().is_some_and(|l| l.trim().is_empty()) {
        cooked_lines.remove(0);
    }
    while cooked_lines.last().is_some_and(|l| l.trim().is_empty()) {
        cooked_lines.pop();
    }

    Ok(cooked_lines.join("\n"))
}
