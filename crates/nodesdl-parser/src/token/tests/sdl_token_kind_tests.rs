//! Tests for `SdlTokenKind` classification and string cooking.

use crate::token::cook_string_literal;
use crate::token::CookSdlStringError;
use crate::token::SdlTokenKind;

// =============================================================================
// Classification
// =============================================================================

/// Verifies that punctuators report their source text and that literals do
/// not.
#[test]
fn punctuator_strings() {
    assert_eq!(SdlTokenKind::Ampersand.as_punctuator_str(), Some("&"));
    assert_eq!(SdlTokenKind::Pipe.as_punctuator_str(), Some("|"));
    assert_eq!(SdlTokenKind::Dollar.as_punctuator_str(), Some("$"));
    assert!(SdlTokenKind::ParenOpen.is_punctuator());
    assert!(!SdlTokenKind::name_borrowed("type").is_punctuator());
    assert!(!SdlTokenKind::True.is_punctuator());
    assert!(!SdlTokenKind::Eof.is_punctuator());
}

#[test]
fn numeric_values_parse_from_raw_text() {
    let int = SdlTokenKind::int_value_borrowed("-42");
    assert_eq!(int.parse_int_value(), Some(Ok(-42)));
    assert!(int.parse_float_value().is_none());

    let float = SdlTokenKind::float_value_borrowed("1.5e2");
    assert_eq!(float.parse_float_value(), Some(Ok(150.0)));
}

// =============================================================================
// Single-line strings
// =============================================================================

/// Verifies that the standard escapes are cooked.
#[test]
fn single_line_escapes() {
    assert_eq!(
        cook_string_literal(r#""a\nb\t\"c\"\\\/""#),
        Ok("a\nb\t\"c\"\\/".to_string()),
    );
}

#[test]
fn unicode_escapes_fixed_and_braced() {
    assert_eq!(cook_string_literal(r#""\u0041""#), Ok("A".to_string()));
    assert_eq!(cook_string_literal(r#""\u{1F389}""#), Ok("🎉".to_string()));
}

#[test]
fn invalid_escape_is_an_error() {
    assert_eq!(
        cook_string_literal(r#""\q""#),
        Err(CookSdlStringError::InvalidEscapeSequence("\\q".to_string())),
    );
    assert!(matches!(
        cook_string_literal(r#""\u00G1""#),
        Err(CookSdlStringError::InvalidUnicodeEscape(_)),
    ));
    assert!(matches!(
        cook_string_literal(r#""\u{}""#),
        Err(CookSdlStringError::InvalidUnicodeEscape(_)),
    ));
}

/// `cook_string_value()` is only defined for string tokens.
#[test]
fn cook_string_value_only_for_strings() {
    assert!(SdlTokenKind::name_borrowed("x").cook_string_value().is_none());
    let token = SdlTokenKind::string_value_borrowed("\"hi\"");
    assert_eq!(token.cook_string_value(), Some(Ok("hi".to_string())));
}

// =============================================================================
// Block strings
// =============================================================================

/// Verifies that common indentation and surrounding blank lines are removed
/// from block strings.
#[test]
fn block_string_dedent() {
    let raw = "\"\"\"\n    Hello,\n      World!\n\n    Bye\n  \"\"\"";
    assert_eq!(
        cook_string_literal(raw),
        Ok("Hello,\n  World!\n\nBye".to_string()),
    );
}

#[test]
fn block_string_escaped_triple_quote() {
    let raw = "\"\"\"say \\\"\"\" please\"\"\"";
    assert_eq!(cook_string_literal(raw), Ok("say \"\"\" please".to_string()));
}

/// Escapes other than `\"""` are kept verbatim inside block strings.
#[test]
fn block_string_keeps_backslashes() {
    assert_eq!(
        cook_string_literal(r#""""C:\path\n""""#),
        Ok(r"C:\path\n".to_string()),
    );
}
