//! Tests for `SdlTokenStream` lookahead and buffering.

use crate::token::SdlTokenKind;
use crate::token_source::StrSdlTokenSource;
use crate::SdlTokenStream;

fn stream(source: &str) -> SdlTokenStream<'_, StrSdlTokenSource<'_>> {
    SdlTokenStream::new(StrSdlTokenSource::new(source))
}

#[test]
fn peek_does_not_consume() {
    let mut stream = stream("type User");
    assert_eq!(stream.peek().map(|t| t.kind.clone()), Some(SdlTokenKind::name_borrowed("type")));
    assert_eq!(stream.peek().map(|t| t.kind.clone()), Some(SdlTokenKind::name_borrowed("type")));
    assert_eq!(stream.current_buffer_len(), 1);
}

/// Verifies that `peek_nth` fills the buffer only as far as requested.
#[test]
fn peek_nth_buffers_lazily() {
    let mut stream = stream("NodeConnection(User, friends)");
    assert_eq!(stream.current_buffer_len(), 0);
    assert_eq!(stream.peek_nth(1).map(|t| t.kind.clone()), Some(SdlTokenKind::ParenOpen));
    assert_eq!(stream.current_buffer_len(), 2);

    let first = stream.consume().map(|t| t.kind);
    assert_eq!(first, Some(SdlTokenKind::name_borrowed("NodeConnection")));
    assert_eq!(stream.current_buffer_len(), 1);
}

#[test]
fn is_at_end_on_eof_token() {
    let mut stream = stream("  # only a comment\n");
    assert!(stream.is_at_end());
    assert_eq!(stream.consume().map(|t| t.kind), Some(SdlTokenKind::Eof));
    assert!(stream.consume().is_none());
    assert!(stream.is_at_end());
}

#[test]
fn peek_past_end_returns_none() {
    let mut stream = stream("a");
    assert!(stream.peek_nth(1).is_some_and(|t| t.kind == SdlTokenKind::Eof));
    assert!(stream.peek_nth(2).is_none());
}
