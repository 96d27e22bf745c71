//! Buffered lookahead over any [`SdlTokenSource`].

use std::collections::VecDeque;

use crate::token::SdlToken;
use crate::token::SdlTokenKind;
use crate::token_source::SdlTokenSource;

/// Streams [`SdlToken`]s from an [`SdlTokenSource`] with a bounded
/// lookahead buffer.
///
/// Trivia is already attached to tokens by the lexer, so the parser only
/// needs `peek()`, `peek_nth()` and `consume()`.
///
/// Unconsumed tokens are buffered at the back of a [`VecDeque`];
/// `consume()` pops from the front.
pub struct SdlTokenStream<'src, TTokenSource: SdlTokenSource<'src>> {
    token_source: TTokenSource,
    buffer: VecDeque<SdlToken<'src>>,
}

impl<'src, TTokenSource: SdlTokenSource<'src>> SdlTokenStream<'src, TTokenSource> {
    /// Creates a new token stream from a token source.
    pub fn new(token_source: TTokenSource) -> Self {
        Self {
            token_source,
            buffer: VecDeque::new(),
        }
    }

    /// Advance to the next token and return it as an owned value.
    ///
    /// Returns `None` if the stream is exhausted.
    pub fn consume(&mut self) -> Option<SdlToken<'src>> {
        self.ensure_buffer_has(1);
        self.buffer.pop_front()
    }

    /// Returns the number of tokens currently buffered (unconsumed).
    pub fn current_buffer_len(&self) -> usize {
        self.buffer.len()
    }

    fn ensure_buffer_has(&mut self, count: usize) {
        while self.buffer.len() < count {
            match self.token_source.next() {
                Some(token) => self.buffer.push_back(token),
                None => break,
            }
        }
    }

    /// Returns `true` if there are no more tokens to consume, or if the next
    /// token is `Eof`.
    pub fn is_at_end(&mut self) -> bool {
        match self.peek() {
            None => true,
            Some(token) => matches!(token.kind, SdlTokenKind::Eof),
        }
    }

    /// Peek at the next token without consuming it.
    #[inline]
    pub fn peek(&mut self) -> Option<&SdlToken<'src>> {
        self.peek_nth(0)
    }

    /// Peek at the nth token ahead (0-indexed from the next unconsumed
    /// token).
    pub fn peek_nth(&mut self, n: usize) -> Option<&SdlToken<'src>> {
        self.ensure_buffer_has(n + 1);
        self.buffer.get(n)
    }
}
