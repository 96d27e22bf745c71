//! Recursive descent parser for SDL documents.
//!
//! This module provides [`SdlParser`], a generic parser that works with any
//! token source implementing [`SdlTokenSource`].
//!
//! # Architecture
//!
//! Every grammar rule has a corresponding `parse_*` method returning
//! `Result<AstNode, SdlParseError>`. Parsing is fail-fast: the first error
//! (including the first lexer error token) aborts the parse and is returned
//! to the caller as-is.

use crate::ast;
use crate::token::SdlToken;
use crate::token::SdlTokenKind;
use crate::token_source::SdlTokenSource;
use crate::token_source::StrSdlTokenSource;
use crate::SdlParseError;
use crate::SdlParseErrorKind;
use crate::SdlSourceSpan;
use crate::SdlTokenStream;
use crate::SourcePosition;
use std::borrow::Cow;
use std::path::Path;

type ParseResult<T> = Result<T, SdlParseError>;

/// Keywords that may start a top-level definition.
const DEFINITION_KEYWORDS: &[&str] = &[
    "type",
    "interface",
    "union",
    "scalar",
    "enum",
    "input",
    "mutation",
    "filter",
    "order",
    "extend",
];

/// Keywords that may follow `extend`.
const EXTENSION_KEYWORDS: &[&str] = &["type", "interface", "union", "enum", "input"];

/// Names that introduce a call-like type form when followed by `(`.
const CONNECTION_KEYWORDS: &[&str] = &[
    "NodeConnection",
    "ScalarConnection",
    "ObjectConnection",
    "Edge",
];

/// Whether `$variables` may appear in the value being parsed.
#[derive(Clone, Copy, Debug, PartialEq)]
enum ValueContext {
    /// Directive arguments and default values.
    Const,
    /// Filter conditions and order expressions.
    Expression,
}

/// Where a connection annotation appears. Field position requires the
/// `relatedField` of a `NodeConnection`; filter/order targets do not.
#[derive(Clone, Copy, Debug, PartialEq)]
enum ConnectionPosition {
    Field,
    Target,
}

/// A recursive descent parser for SDL documents.
///
/// # Usage
///
/// ```
/// use nodesdl_parser::SdlParser;
///
/// let source = "type User implements Node { id: ID! name: String }";
/// let document = SdlParser::new(source).parse_document().unwrap();
/// assert_eq!(document.definitions.len(), 1);
/// ```
pub struct SdlParser<'src, TTokenSource: SdlTokenSource<'src>> {
    /// The underlying token stream with lookahead support.
    token_stream: SdlTokenStream<'src, TTokenSource>,

    /// Shared nesting depth for type annotations, list values and object
    /// values.
    recursion_depth: usize,

    /// Span of the most recently consumed token. EOF errors are anchored to
    /// its end.
    last_consumed_span: Option<SdlSourceSpan>,
}

impl<'src> SdlParser<'src, StrSdlTokenSource<'src>> {
    /// Creates a new parser over a string.
    pub fn new(source: &'src str) -> Self {
        Self::from_token_source(StrSdlTokenSource::new(source))
    }

    /// Creates a new parser whose spans (and therefore errors) carry
    /// `file_path`.
    pub fn with_file_path(source: &'src str, file_path: &'src Path) -> Self {
        Self::from_token_source(StrSdlTokenSource::with_file_path(source, file_path))
    }
}

impl<'src, TTokenSource: SdlTokenSource<'src>> SdlParser<'src, TTokenSource> {
    /// Maximum nesting depth for type annotations and values.
    ///
    /// Inputs like `[[[[[...` fail with a parse error instead of overflowing
    /// the stack.
    const MAX_RECURSION_DEPTH: usize = 64;

    /// Creates a new parser from a token source.
    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self {
            token_stream: SdlTokenStream::new(token_source),
            recursion_depth: 0,
            last_consumed_span: None,
        }
    }

    /// Parses a complete document.
    pub fn parse_document(mut self) -> ParseResult<ast::Document> {
        let mut definitions = Vec::new();
        while !self.token_stream.is_at_end() {
            definitions.push(self.parse_definition()?);
        }
        Ok(ast::Document { definitions })
    }

    /// Parses a single type annotation in field position followed by the
    /// end of input, e.g. `"[String!]!"` or `"NodeConnection(User, friends)"`.
    pub fn parse_type_annotation(mut self) -> ParseResult<ast::TypeAnnotation> {
        let annotation = self.parse_field_type()?;
        self.expect(&SdlTokenKind::Eof)?;
        Ok(annotation)
    }

    // =========================================================================
    // Token expectation helpers
    // =========================================================================

    /// Peeks at the next token, converting a lexer error token into a parse
    /// error.
    fn peek(&mut self) -> ParseResult<&SdlToken<'src>> {
        if self.token_stream.peek().is_none() {
            return Err(self.unexpected_eof(vec![]));
        }
        match self.token_stream.peek() {
            Some(token) => match &token.kind {
                SdlTokenKind::Error {
                    message,
                    error_notes,
                } => Err(SdlParseError::from_lexer_error(
                    message.clone(),
                    token.span.clone(),
                    error_notes.clone(),
                )),
                _ => Ok(token),
            },
            None => Err(SdlParseError::new(
                "unexpected end of input",
                SdlSourceSpan::zero(),
                SdlParseErrorKind::UnexpectedEof { expected: vec![] },
            )),
        }
    }

    /// Checks if the current token matches the given kind without consuming.
    fn peek_is(&mut self, kind: &SdlTokenKind) -> bool {
        self.token_stream
            .peek()
            .is_some_and(|token| Self::token_kinds_match(&token.kind, kind))
    }

    fn peek_nth_is(&mut self, n: usize, kind: &SdlTokenKind) -> bool {
        self.token_stream
            .peek_nth(n)
            .is_some_and(|token| Self::token_kinds_match(&token.kind, kind))
    }

    /// Checks if the current token is a specific keyword without consuming.
    ///
    /// Returns `false` for `True`, `False` and `Null` tokens; those are
    /// literals, never structural keywords.
    fn peek_is_keyword(&mut self, keyword: &str) -> bool {
        match self.token_stream.peek() {
            Some(SdlToken {
                kind: SdlTokenKind::Name(name),
                ..
            }) => name.as_ref() == keyword,
            _ => false,
        }
    }

    /// Checks if the next token is anything [`Self::expect_name`] accepts.
    fn peek_is_name(&mut self) -> bool {
        self.token_stream.peek().is_some_and(|token| {
            matches!(
                token.kind,
                SdlTokenKind::Name(_) | SdlTokenKind::True | SdlTokenKind::False | SdlTokenKind::Null
            )
        })
    }

    /// Returns `true` if the next two tokens start a connection or edge
    /// annotation (`NodeConnection(`, `Edge(`, ...).
    fn peek_is_connection(&mut self) -> bool {
        let is_keyword = match self.token_stream.peek() {
            Some(SdlToken {
                kind: SdlTokenKind::Name(name),
                ..
            }) => CONNECTION_KEYWORDS.contains(&name.as_ref()),
            _ => false,
        };
        is_keyword && self.peek_nth_is(1, &SdlTokenKind::ParenOpen)
    }

    /// Expects a specific token kind and consumes it.
    fn expect(&mut self, expected_kind: &SdlTokenKind) -> ParseResult<SdlToken<'src>> {
        let token = self.peek()?;
        if Self::token_kinds_match(&token.kind, expected_kind) {
            return self.consume_token();
        }
        let expected = vec![Self::token_kind_display(expected_kind)];
        Err(Self::unexpected_token(token, expected))
    }

    /// Expects a name token and returns its value along with its source span.
    ///
    /// `true`, `false` and `null` are accepted as names here: they match the
    /// name grammar even though the lexer gives them their own token kinds.
    fn expect_name(&mut self) -> ParseResult<(String, SdlSourceSpan)> {
        let token = self.peek()?;
        match &token.kind {
            SdlTokenKind::Name(_)
            | SdlTokenKind::True
            | SdlTokenKind::False
            | SdlTokenKind::Null => (),
            _ => return Err(Self::unexpected_token(token, vec!["name".to_string()])),
        }
        let token = self.consume_token()?;
        let name = match token.kind {
            SdlTokenKind::Name(name) => name.into_owned(),
            SdlTokenKind::True => "true".to_string(),
            SdlTokenKind::False => "false".to_string(),
            _ => "null".to_string(),
        };
        Ok((name, token.span))
    }

    /// Expects a name and wraps it as a positioned [`ast::NamedType`].
    fn expect_named_type(&mut self) -> ParseResult<ast::NamedType> {
        let (name, span) = self.expect_name()?;
        Ok(ast::NamedType {
            position: Some(span.start_inclusive.to_ast_pos()),
            name,
        })
    }

    /// Expects a specific keyword (a Name token with specific text).
    fn expect_keyword(&mut self, keyword: &str) -> ParseResult<SdlSourceSpan> {
        let token = self.peek()?;
        if let SdlTokenKind::Name(name) = &token.kind {
            if name.as_ref() == keyword {
                return Ok(self.consume_token()?.span);
            }
        }
        Err(Self::unexpected_token(token, vec![keyword.to_string()]))
    }

    /// Consumes `close`, or fails with an unclosed-delimiter error pointing
    /// back at `open_span` if the input ended first.
    fn expect_closing(
        &mut self,
        close: &SdlTokenKind,
        open: &str,
        open_span: &SdlSourceSpan,
    ) -> ParseResult<SdlToken<'src>> {
        if self.token_stream.is_at_end() {
            return Err(self.unclosed_delimiter(open, open_span));
        }
        self.expect(close)
    }

    /// Returns `Ok(true)` once `close` is next. Fails if the input ends while
    /// a delimited list is still open.
    fn at_list_end(
        &mut self,
        close: &SdlTokenKind,
        open: &str,
        open_span: &SdlSourceSpan,
    ) -> ParseResult<bool> {
        if self.peek_is(close) {
            return Ok(true);
        }
        if self.token_stream.is_at_end() {
            return Err(self.unclosed_delimiter(open, open_span));
        }
        Ok(false)
    }

    // =========================================================================
    // Helper methods
    // =========================================================================

    /// Consumes the next token and remembers its span for EOF reporting.
    fn consume_token(&mut self) -> ParseResult<SdlToken<'src>> {
        match self.token_stream.consume() {
            Some(token) => {
                self.last_consumed_span = Some(token.span.clone());
                Ok(token)
            },
            None => Err(self.unexpected_eof(vec![])),
        }
    }

    /// Returns a zero-width span at the end of the last consumed token.
    fn eof_span(&self) -> SdlSourceSpan {
        match &self.last_consumed_span {
            Some(span) => SdlSourceSpan {
                start_inclusive: span.end_exclusive.clone(),
                end_exclusive: span.end_exclusive.clone(),
                file_path: span.file_path.clone(),
            },
            None => {
                let zero = SourcePosition::new(0, 0, Some(0), 0);
                SdlSourceSpan::new(zero.clone(), zero)
            },
        }
    }

    fn unexpected_eof(&self, expected: Vec<String>) -> SdlParseError {
        let message = if expected.is_empty() {
            "unexpected end of input".to_string()
        } else {
            format!("expected {}, found end of input", Self::join_expected(&expected))
        };
        SdlParseError::new(
            message,
            self.eof_span(),
            SdlParseErrorKind::UnexpectedEof { expected },
        )
    }

    /// Builds the error for finding `token` where one of `expected` should
    /// be. An `Eof` token yields an `UnexpectedEof` error.
    fn unexpected_token(token: &SdlToken<'src>, expected: Vec<String>) -> SdlParseError {
        if matches!(token.kind, SdlTokenKind::Eof) {
            return SdlParseError::new(
                format!("expected {}, found end of input", Self::join_expected(&expected)),
                token.span.clone(),
                SdlParseErrorKind::UnexpectedEof { expected },
            );
        }
        let found = Self::token_kind_display(&token.kind);
        SdlParseError::new(
            format!(
                "expected {}, found `{found}`",
                Self::join_expected(&expected),
            ),
            token.span.clone(),
            SdlParseErrorKind::UnexpectedToken { expected, found },
        )
    }

    fn unclosed_delimiter(&self, open: &str, open_span: &SdlSourceSpan) -> SdlParseError {
        let mut error = SdlParseError::new(
            format!("unclosed `{open}`"),
            self.eof_span(),
            SdlParseErrorKind::UnclosedDelimiter {
                delimiter: open.to_string(),
            },
        );
        error.add_note_with_span(format!("`{open}` opened here"), open_span.clone());
        error
    }

    /// Builds an `InvalidSyntax` error anchored at `span`.
    fn invalid_syntax(message: impl Into<String>, span: SdlSourceSpan) -> SdlParseError {
        SdlParseError::new(message, span, SdlParseErrorKind::InvalidSyntax)
    }

    fn join_expected(expected: &[String]) -> String {
        match expected {
            [] => "more input".to_string(),
            [only] => format!("`{only}`"),
            many => {
                let quoted: Vec<String> = many.iter().map(|e| format!("`{e}`")).collect();
                format!("one of {}", quoted.join(", "))
            },
        }
    }

    /// Returns a human-readable display string for a token kind.
    fn token_kind_display(kind: &SdlTokenKind) -> String {
        match kind {
            SdlTokenKind::Name(s)
            | SdlTokenKind::IntValue(s)
            | SdlTokenKind::FloatValue(s) => s.to_string(),
            SdlTokenKind::StringValue(_) => "string".to_string(),
            SdlTokenKind::True => "true".to_string(),
            SdlTokenKind::False => "false".to_string(),
            SdlTokenKind::Null => "null".to_string(),
            SdlTokenKind::Eof => "end of input".to_string(),
            SdlTokenKind::Error { message, .. } => format!("tokenization error: {message}"),
            punctuator => punctuator
                .as_punctuator_str()
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// Compares token kinds for equality, ignoring payloads.
    ///
    /// The match on `actual` is exhaustive so that adding a token kind forces
    /// this function to be revisited.
    fn token_kinds_match(actual: &SdlTokenKind, expected: &SdlTokenKind) -> bool {
        match actual {
            SdlTokenKind::Name(_) => matches!(expected, SdlTokenKind::Name(_)),
            SdlTokenKind::IntValue(_) => matches!(expected, SdlTokenKind::IntValue(_)),
            SdlTokenKind::FloatValue(_) => matches!(expected, SdlTokenKind::FloatValue(_)),
            SdlTokenKind::StringValue(_) => matches!(expected, SdlTokenKind::StringValue(_)),
            SdlTokenKind::Error { .. } => matches!(expected, SdlTokenKind::Error { .. }),
            SdlTokenKind::Ampersand
            | SdlTokenKind::At
            | SdlTokenKind::Bang
            | SdlTokenKind::Colon
            | SdlTokenKind::CurlyBraceClose
            | SdlTokenKind::CurlyBraceOpen
            | SdlTokenKind::Dollar
            | SdlTokenKind::Equals
            | SdlTokenKind::ParenClose
            | SdlTokenKind::ParenOpen
            | SdlTokenKind::Pipe
            | SdlTokenKind::SquareBracketClose
            | SdlTokenKind::SquareBracketOpen
            | SdlTokenKind::True
            | SdlTokenKind::False
            | SdlTokenKind::Null
            | SdlTokenKind::Eof => actual == expected,
        }
    }

    /// Checks recursion depth and fails if the limit is exceeded. On success
    /// the caller must call `exit_recursion()` when done.
    fn enter_recursion(&mut self) -> ParseResult<()> {
        if self.recursion_depth >= Self::MAX_RECURSION_DEPTH {
            let span = self
                .token_stream
                .peek()
                .map(|t| t.span.clone())
                .unwrap_or_else(|| self.eof_span());
            return Err(Self::invalid_syntax("maximum nesting depth exceeded", span));
        }
        self.recursion_depth += 1;
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    fn parse_definition(&mut self) -> ParseResult<ast::Definition> {
        let description = self.parse_description()?;

        let token = self.peek()?;
        let keyword = match &token.kind {
            SdlTokenKind::Name(name) if DEFINITION_KEYWORDS.contains(&name.as_ref()) => {
                name.clone()
            },
            _ => {
                let mut error = Self::unexpected_token(
                    token,
                    DEFINITION_KEYWORDS.iter().map(|k| k.to_string()).collect(),
                );
                if let SdlTokenKind::Name(name) = &token.kind {
                    if matches!(name.as_ref(), "schema" | "directive" | "query" | "subscription") {
                        error.add_help(format!("`{name}` definitions are not supported in this language"));
                    }
                }
                return Err(error);
            },
        };

        match keyword.as_ref() {
            "type" => Ok(ast::Definition::ObjectType(
                self.parse_object_type_definition(description)?,
            )),
            "interface" => Ok(ast::Definition::Interface(
                self.parse_interface_type_definition(description)?,
            )),
            "union" => Ok(ast::Definition::Union(
                self.parse_union_type_definition(description)?,
            )),
            "scalar" => Ok(ast::Definition::Scalar(
                self.parse_scalar_type_definition(description)?,
            )),
            "enum" => Ok(ast::Definition::Enum(
                self.parse_enum_type_definition(description)?,
            )),
            "input" => Ok(ast::Definition::InputObject(
                self.parse_input_object_type_definition(description)?,
            )),
            "mutation" => Ok(ast::Definition::Mutation(
                self.parse_mutation_definition(description)?,
            )),
            "filter" => Ok(ast::Definition::Filter(
                self.parse_filter_definition(description)?,
            )),
            "order" => Ok(ast::Definition::Order(
                self.parse_order_definition(description)?,
            )),
            _ => {
                let span = self.expect_keyword("extend")?;
                if description.is_some() {
                    return Err(Self::invalid_syntax(
                        "type extensions cannot have a description",
                        span,
                    ));
                }
                Ok(ast::Definition::Extension(self.parse_type_extension(span)?))
            },
        }
    }

    /// Parses an optional description string preceding a definition, field,
    /// argument or enum value.
    fn parse_description(&mut self) -> ParseResult<Option<String>> {
        if !self.peek_is(&SdlTokenKind::StringValue(Cow::Borrowed(""))) {
            return Ok(None);
        }
        let token = self.consume_token()?;
        Ok(Some(Self::cook_string_token(&token)?))
    }

    fn cook_string_token(token: &SdlToken<'src>) -> ParseResult<String> {
        match token.kind.cook_string_value() {
            Some(Ok(cooked)) => Ok(cooked),
            Some(Err(err)) => Err(SdlParseError::new(
                format!("invalid string literal: {err}"),
                token.span.clone(),
                SdlParseErrorKind::InvalidValue,
            )),
            None => Err(Self::unexpected_token(token, vec!["string".to_string()])),
        }
    }

    fn parse_object_type_definition(
        &mut self,
        description: Option<String>,
    ) -> ParseResult<ast::ObjectTypeDefinition> {
        let keyword_span = self.expect_keyword("type")?;
        let (name, _) = self.expect_name()?;
        let implements_interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives()?;
        let fields = self.parse_fields_block()?;
        Ok(ast::ObjectTypeDefinition {
            position: Some(keyword_span.start_inclusive.to_ast_pos()),
            description,
            name,
            implements_interfaces,
            directives,
            fields,
        })
    }

    /// Parses `implements A & B`, allowing a leading `&`.
    fn parse_implements_interfaces(&mut self) -> ParseResult<Vec<ast::NamedType>> {
        if !self.peek_is_keyword("implements") {
            return Ok(vec![]);
        }
        self.consume_token()?;
        if self.peek_is(&SdlTokenKind::Ampersand) {
            self.consume_token()?;
        }
        let mut interfaces = vec![self.expect_named_type()?];
        while self.peek_is(&SdlTokenKind::Ampersand) {
            self.consume_token()?;
            interfaces.push(self.expect_named_type()?);
        }
        Ok(interfaces)
    }

    fn parse_interface_type_definition(
        &mut self,
        description: Option<String>,
    ) -> ParseResult<ast::InterfaceTypeDefinition> {
        let keyword_span = self.expect_keyword("interface")?;
        let (name, _) = self.expect_name()?;
        let directives = self.parse_directives()?;
        let fields = self.parse_fields_block()?;
        Ok(ast::InterfaceTypeDefinition {
            position: Some(keyword_span.start_inclusive.to_ast_pos()),
            description,
            name,
            directives,
            fields,
        })
    }

    fn parse_union_type_definition(
        &mut self,
        description: Option<String>,
    ) -> ParseResult<ast::UnionTypeDefinition> {
        let keyword_span = self.expect_keyword("union")?;
        let (name, _) = self.expect_name()?;
        let directives = self.parse_directives()?;

        let mut types = vec![];
        if self.peek_is(&SdlTokenKind::Equals) {
            self.consume_token()?;
            if self.peek_is(&SdlTokenKind::Pipe) {
                self.consume_token()?;
            }
            types.push(self.expect_named_type()?);
            while self.peek_is(&SdlTokenKind::Pipe) {
                self.consume_token()?;
                types.push(self.expect_named_type()?);
            }
        }

        Ok(ast::UnionTypeDefinition {
            position: Some(keyword_span.start_inclusive.to_ast_pos()),
            description,
            name,
            directives,
            types,
        })
    }

    fn parse_scalar_type_definition(
        &mut self,
        description: Option<String>,
    ) -> ParseResult<ast::ScalarTypeDefinition> {
        let keyword_span = self.expect_keyword("scalar")?;
        let (name, _) = self.expect_name()?;
        let directives = self.parse_directives()?;
        Ok(ast::ScalarTypeDefinition {
            position: Some(keyword_span.start_inclusive.to_ast_pos()),
            description,
            name,
            directives,
        })
    }

    fn parse_enum_type_definition(
        &mut self,
        description: Option<String>,
    ) -> ParseResult<ast::EnumTypeDefinition> {
        let keyword_span = self.expect_keyword("enum")?;
        let (name, _) = self.expect_name()?;
        let directives = self.parse_directives()?;

        let mut values = vec![];
        if self.peek_is(&SdlTokenKind::CurlyBraceOpen) {
            let open_span = self.consume_token()?.span;
            while !self.at_list_end(&SdlTokenKind::CurlyBraceClose, "{", &open_span)? {
                values.push(self.parse_enum_value_definition()?);
            }
            self.expect(&SdlTokenKind::CurlyBraceClose)?;
        }

        Ok(ast::EnumTypeDefinition {
            position: Some(keyword_span.start_inclusive.to_ast_pos()),
            description,
            name,
            directives,
            values,
        })
    }

    fn parse_enum_value_definition(&mut self) -> ParseResult<ast::EnumValueDefinition> {
        let description = self.parse_description()?;
        let token = self.peek()?;
        if matches!(
            token.kind,
            SdlTokenKind::True | SdlTokenKind::False | SdlTokenKind::Null
        ) {
            return Err(Self::invalid_syntax(
                format!(
                    "enum value cannot be named `{}`",
                    Self::token_kind_display(&token.kind),
                ),
                token.span.clone(),
            ));
        }
        let (name, span) = self.expect_name()?;
        let directives = self.parse_directives()?;
        Ok(ast::EnumValueDefinition {
            position: Some(span.start_inclusive.to_ast_pos()),
            description,
            name,
            directives,
        })
    }

    fn parse_input_object_type_definition(
        &mut self,
        description: Option<String>,
    ) -> ParseResult<ast::InputObjectTypeDefinition> {
        let keyword_span = self.expect_keyword("input")?;
        let (name, _) = self.expect_name()?;
        let directives = self.parse_directives()?;
        let fields = self.parse_fields_block()?;
        Ok(ast::InputObjectTypeDefinition {
            position: Some(keyword_span.start_inclusive.to_ast_pos()),
            description,
            name,
            directives,
            fields,
        })
    }

    fn parse_mutation_definition(
        &mut self,
        description: Option<String>,
    ) -> ParseResult<ast::MutationDefinition> {
        let keyword_span = self.expect_keyword("mutation")?;
        let (name, _) = self.expect_name()?;
        let arguments = self.parse_arguments_definition()?;
        let directives = self.parse_directives()?;
        let fields = self.parse_fields_block()?;
        Ok(ast::MutationDefinition {
            position: Some(keyword_span.start_inclusive.to_ast_pos()),
            description,
            name,
            arguments,
            directives,
            fields,
        })
    }

    fn parse_filter_definition(
        &mut self,
        description: Option<String>,
    ) -> ParseResult<ast::FilterDefinition> {
        let keyword_span = self.expect_keyword("filter")?;
        self.expect_keyword("on")?;
        let target = self.parse_target_type()?;

        let mut conditions = vec![];
        let open_span = self.expect(&SdlTokenKind::CurlyBraceOpen)?.span;
        while !self.at_list_end(&SdlTokenKind::CurlyBraceClose, "{", &open_span)? {
            let (position, description, name, arguments, value) =
                self.parse_named_expression()?;
            conditions.push(ast::FilterCondition {
                position,
                description,
                name,
                arguments,
                value,
            });
        }
        self.expect(&SdlTokenKind::CurlyBraceClose)?;

        Ok(ast::FilterDefinition {
            position: Some(keyword_span.start_inclusive.to_ast_pos()),
            description,
            target,
            conditions,
        })
    }

    fn parse_order_definition(
        &mut self,
        description: Option<String>,
    ) -> ParseResult<ast::OrderDefinition> {
        let keyword_span = self.expect_keyword("order")?;
        self.expect_keyword("on")?;
        let target = self.parse_target_type()?;

        let mut expressions = vec![];
        let open_span = self.expect(&SdlTokenKind::CurlyBraceOpen)?.span;
        while !self.at_list_end(&SdlTokenKind::CurlyBraceClose, "{", &open_span)? {
            let (position, description, name, arguments, value) =
                self.parse_named_expression()?;
            expressions.push(ast::OrderExpression {
                position,
                description,
                name,
                arguments,
                value,
            });
        }
        self.expect(&SdlTokenKind::CurlyBraceClose)?;

        Ok(ast::OrderDefinition {
            position: Some(keyword_span.start_inclusive.to_ast_pos()),
            description,
            target,
            expressions,
        })
    }

    /// Parses the shared shape of filter conditions and order expressions:
    /// `Description? Name ArgumentsDef? ':' Value`.
    #[allow(clippy::type_complexity)]
    fn parse_named_expression(
        &mut self,
    ) -> ParseResult<(
        Option<ast::AstPos>,
        Option<String>,
        String,
        Vec<ast::InputValueDefinition>,
        ast::Value,
    )> {
        let description = self.parse_description()?;
        let (name, span) = self.expect_name()?;
        let arguments = self.parse_arguments_definition()?;
        self.expect(&SdlTokenKind::Colon)?;
        let value = self.parse_value(ValueContext::Expression)?;
        Ok((
            Some(span.start_inclusive.to_ast_pos()),
            description,
            name,
            arguments,
            value,
        ))
    }

    /// Parses `extend <type|interface|union|enum|input> ...`; the `extend`
    /// keyword has already been consumed.
    fn parse_type_extension(&mut self, extend_span: SdlSourceSpan) -> ParseResult<ast::TypeExtension> {
        let token = self.peek()?;
        let keyword = match &token.kind {
            SdlTokenKind::Name(name) if EXTENSION_KEYWORDS.contains(&name.as_ref()) => {
                name.clone()
            },
            _ => {
                return Err(Self::unexpected_token(
                    token,
                    EXTENSION_KEYWORDS.iter().map(|k| k.to_string()).collect(),
                ));
            },
        };
        let definition = match keyword.as_ref() {
            "type" => ast::Definition::ObjectType(self.parse_object_type_definition(None)?),
            "interface" => {
                ast::Definition::Interface(self.parse_interface_type_definition(None)?)
            },
            "union" => ast::Definition::Union(self.parse_union_type_definition(None)?),
            "enum" => ast::Definition::Enum(self.parse_enum_type_definition(None)?),
            _ => ast::Definition::InputObject(self.parse_input_object_type_definition(None)?),
        };
        Ok(ast::TypeExtension {
            position: Some(extend_span.start_inclusive.to_ast_pos()),
            definition: Box::new(definition),
        })
    }

    // =========================================================================
    // Fields and arguments
    // =========================================================================

    /// Parses an optional `{ FieldDef* }` block.
    fn parse_fields_block(&mut self) -> ParseResult<Vec<ast::FieldDefinition>> {
        if !self.peek_is(&SdlTokenKind::CurlyBraceOpen) {
            return Ok(vec![]);
        }
        let open_span = self.consume_token()?.span;
        let mut fields = vec![];
        while !self.at_list_end(&SdlTokenKind::CurlyBraceClose, "{", &open_span)? {
            fields.push(self.parse_field_definition()?);
        }
        self.expect(&SdlTokenKind::CurlyBraceClose)?;
        Ok(fields)
    }

    fn parse_field_definition(&mut self) -> ParseResult<ast::FieldDefinition> {
        let description = self.parse_description()?;
        let (name, span) = self.expect_name()?;
        let arguments = self.parse_arguments_definition()?;
        self.expect(&SdlTokenKind::Colon)?;
        let field_type = self.parse_field_type()?;
        let directives = self.parse_directives()?;
        Ok(ast::FieldDefinition {
            position: Some(span.start_inclusive.to_ast_pos()),
            description,
            name,
            arguments,
            field_type,
            directives,
        })
    }

    /// Parses an optional `( InputValueDef+ )` list.
    fn parse_arguments_definition(&mut self) -> ParseResult<Vec<ast::InputValueDefinition>> {
        if !self.peek_is(&SdlTokenKind::ParenOpen) {
            return Ok(vec![]);
        }
        let open_span = self.consume_token()?.span;
        if self.peek_is(&SdlTokenKind::ParenClose) {
            let span = self.consume_token()?.span;
            return Err(Self::invalid_syntax(
                "argument list must define at least one argument",
                span,
            ));
        }
        let mut arguments = vec![];
        while !self.at_list_end(&SdlTokenKind::ParenClose, "(", &open_span)? {
            arguments.push(self.parse_input_value_definition()?);
        }
        self.expect(&SdlTokenKind::ParenClose)?;
        Ok(arguments)
    }

    fn parse_input_value_definition(&mut self) -> ParseResult<ast::InputValueDefinition> {
        let description = self.parse_description()?;
        let (name, span) = self.expect_name()?;
        self.expect(&SdlTokenKind::Colon)?;
        let value_type = self.parse_field_type()?;
        let default_value = if self.peek_is(&SdlTokenKind::Equals) {
            self.consume_token()?;
            Some(self.parse_value(ValueContext::Const)?)
        } else {
            None
        };
        let directives = self.parse_directives()?;
        Ok(ast::InputValueDefinition {
            position: Some(span.start_inclusive.to_ast_pos()),
            description,
            name,
            value_type,
            default_value,
            directives,
        })
    }

    // =========================================================================
    // Type annotations
    // =========================================================================

    /// Parses a type in field/argument position: either a connection or edge
    /// form (optionally non-null), or a regular type reference.
    fn parse_field_type(&mut self) -> ParseResult<ast::TypeAnnotation> {
        if self.peek_is_connection() {
            let connection = self.parse_connection_type(ConnectionPosition::Field)?;
            return self.parse_optional_non_null(connection);
        }
        self.parse_type_ref()
    }

    /// Parses `Name '!'?` or `'[' TypeRef ']' '!'?`.
    fn parse_type_ref(&mut self) -> ParseResult<ast::TypeAnnotation> {
        self.enter_recursion()?;
        let result = self.parse_type_ref_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_ref_impl(&mut self) -> ParseResult<ast::TypeAnnotation> {
        let annotation = if self.peek_is(&SdlTokenKind::SquareBracketOpen) {
            self.parse_list_type()?
        } else {
            ast::TypeAnnotation::Named(self.expect_named_type()?)
        };
        self.parse_optional_non_null(annotation)
    }

    fn parse_list_type(&mut self) -> ParseResult<ast::TypeAnnotation> {
        let open_span = self.expect(&SdlTokenKind::SquareBracketOpen)?.span;
        if self.peek_is_connection() {
            let span = self.peek()?.span.clone();
            return Err(Self::invalid_syntax(
                "connection and edge types cannot be nested inside a list",
                span,
            ));
        }
        let item_type = self.parse_type_ref()?;
        self.expect_closing(&SdlTokenKind::SquareBracketClose, "[", &open_span)?;
        Ok(ast::TypeAnnotation::List(ast::ListType {
            position: Some(open_span.start_inclusive.to_ast_pos()),
            item_type: Box::new(item_type),
        }))
    }

    fn parse_optional_non_null(
        &mut self,
        annotation: ast::TypeAnnotation,
    ) -> ParseResult<ast::TypeAnnotation> {
        if !self.peek_is(&SdlTokenKind::Bang) {
            return Ok(annotation);
        }
        self.consume_token()?;
        Ok(ast::TypeAnnotation::NonNull(ast::NonNullType {
            position: annotation.position(),
            inner: Box::new(annotation),
        }))
    }

    /// Parses a filter/order target: `[TypeRef]` or a connection form whose
    /// `relatedField` is optional.
    fn parse_target_type(&mut self) -> ParseResult<ast::TypeAnnotation> {
        if self.peek_is(&SdlTokenKind::SquareBracketOpen) {
            return self.parse_list_type();
        }
        if self.peek_is_connection() && !self.peek_is_keyword("Edge") {
            return self.parse_connection_type(ConnectionPosition::Target);
        }
        let token = self.peek()?;
        let mut error = Self::unexpected_token(
            token,
            vec![
                "[".to_string(),
                "NodeConnection".to_string(),
                "ScalarConnection".to_string(),
                "ObjectConnection".to_string(),
            ],
        );
        error.add_help("filters and orders apply to list or connection types, e.g. `[User]`");
        Err(error)
    }

    /// Parses `NodeConnection(...)`, `ScalarConnection(...)`,
    /// `ObjectConnection(...)` or `Edge(...)`.
    fn parse_connection_type(
        &mut self,
        position: ConnectionPosition,
    ) -> ParseResult<ast::TypeAnnotation> {
        let (keyword, keyword_span) = self.expect_name()?;
        let ast_pos = Some(keyword_span.start_inclusive.to_ast_pos());
        let open_span = self.expect(&SdlTokenKind::ParenOpen)?.span;
        let target = self.expect_named_type()?;

        let annotation = if keyword == "NodeConnection" {
            let related_field = match position {
                ConnectionPosition::Field => {
                    if self.peek_is(&SdlTokenKind::ParenClose) {
                        let span = self.peek()?.span.clone();
                        let mut error = Self::invalid_syntax(
                            "`NodeConnection` requires the name of the related field",
                            span,
                        );
                        error.add_help(format!(
                            "name the field of `{}` that points back, e.g. `NodeConnection({}, owner)`",
                            target.name, target.name,
                        ));
                        return Err(error);
                    }
                    Some(self.expect_name()?.0)
                },
                ConnectionPosition::Target => self.parse_optional_name()?,
            };
            let edge_type = self.parse_optional_edge_type()?;
            ast::TypeAnnotation::NodeConnection(ast::NodeConnectionType {
                position: ast_pos,
                target,
                related_field,
                edge_type,
            })
        } else {
            let edge_type = self.parse_optional_edge_type()?;
            match keyword.as_str() {
                "ScalarConnection" => {
                    ast::TypeAnnotation::ScalarConnection(ast::ScalarConnectionType {
                        position: ast_pos,
                        target,
                        edge_type,
                    })
                },
                "ObjectConnection" => {
                    ast::TypeAnnotation::ObjectConnection(ast::ObjectConnectionType {
                        position: ast_pos,
                        target,
                        edge_type,
                    })
                },
                _ => ast::TypeAnnotation::Edge(ast::EdgeType {
                    position: ast_pos,
                    target,
                    edge_type,
                }),
            }
        };

        self.expect_closing(&SdlTokenKind::ParenClose, "(", &open_span)?;
        Ok(annotation)
    }

    fn parse_optional_name(&mut self) -> ParseResult<Option<String>> {
        if self.peek_is_name() {
            return Ok(Some(self.expect_name()?.0));
        }
        Ok(None)
    }

    fn parse_optional_edge_type(&mut self) -> ParseResult<Option<ast::NamedType>> {
        if self.peek_is_name() {
            return Ok(Some(self.expect_named_type()?));
        }
        Ok(None)
    }

    // =========================================================================
    // Directives
    // =========================================================================

    fn parse_directives(&mut self) -> ParseResult<Vec<ast::Directive>> {
        let mut directives = vec![];
        while self.peek_is(&SdlTokenKind::At) {
            directives.push(self.parse_directive()?);
        }
        Ok(directives)
    }

    fn parse_directive(&mut self) -> ParseResult<ast::Directive> {
        let at_span = self.expect(&SdlTokenKind::At)?.span;
        let (name, _) = self.expect_name()?;

        let mut arguments = vec![];
        if self.peek_is(&SdlTokenKind::ParenOpen) {
            let open_span = self.consume_token()?.span;
            if self.peek_is(&SdlTokenKind::ParenClose) {
                let span = self.consume_token()?.span;
                return Err(Self::invalid_syntax(
                    format!("directive `@{name}` has an empty argument list"),
                    span,
                ));
            }
            while !self.at_list_end(&SdlTokenKind::ParenClose, "(", &open_span)? {
                let (arg_name, arg_span) = self.expect_name()?;
                self.expect(&SdlTokenKind::Colon)?;
                let value = self.parse_value(ValueContext::Const)?;
                arguments.push(ast::Argument {
                    position: Some(arg_span.start_inclusive.to_ast_pos()),
                    name: arg_name,
                    value,
                });
            }
            self.expect(&SdlTokenKind::ParenClose)?;
        }

        Ok(ast::Directive {
            position: Some(at_span.start_inclusive.to_ast_pos()),
            name,
            arguments,
        })
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn parse_value(&mut self, context: ValueContext) -> ParseResult<ast::Value> {
        self.enter_recursion()?;
        let result = self.parse_value_impl(context);
        self.exit_recursion();
        result
    }

    fn parse_value_impl(&mut self, context: ValueContext) -> ParseResult<ast::Value> {
        let token = self.peek()?;
        let position = Some(token.span.start_inclusive.to_ast_pos());

        match &token.kind {
            SdlTokenKind::Dollar => {
                if context == ValueContext::Const {
                    let mut error = Self::invalid_syntax(
                        "variables are not allowed here",
                        token.span.clone(),
                    );
                    error.add_help(
                        "`$variables` may only appear in filter conditions and order expressions",
                    );
                    return Err(error);
                }
                self.consume_token()?;
                let (name, _) = self.expect_name()?;
                Ok(ast::Value::Variable(ast::Variable { position, name }))
            },

            SdlTokenKind::IntValue(_) => {
                let token = self.consume_token()?;
                match token.kind.parse_int_value() {
                    Some(Ok(_)) => (),
                    _ => {
                        return Err(SdlParseError::new(
                            format!(
                                "integer `{}` is out of range",
                                Self::token_kind_display(&token.kind),
                            ),
                            token.span,
                            SdlParseErrorKind::InvalidValue,
                        ));
                    },
                }
                let raw = Self::token_kind_display(&token.kind);
                Ok(ast::Value::Int(ast::IntValue { position, raw }))
            },

            SdlTokenKind::FloatValue(_) => {
                let token = self.consume_token()?;
                match token.kind.parse_float_value() {
                    Some(Ok(value)) if value.is_finite() => (),
                    _ => {
                        return Err(SdlParseError::new(
                            format!(
                                "float `{}` is out of range",
                                Self::token_kind_display(&token.kind),
                            ),
                            token.span,
                            SdlParseErrorKind::InvalidValue,
                        ));
                    },
                }
                let raw = Self::token_kind_display(&token.kind);
                Ok(ast::Value::Float(ast::FloatValue { position, raw }))
            },

            SdlTokenKind::StringValue(raw) => {
                let is_block = raw.starts_with("\"\"\"");
                let token = self.consume_token()?;
                let value = Self::cook_string_token(&token)?;
                Ok(ast::Value::String(ast::StringValue {
                    position,
                    value,
                    is_block,
                }))
            },

            SdlTokenKind::True | SdlTokenKind::False => {
                let value = matches!(token.kind, SdlTokenKind::True);
                self.consume_token()?;
                Ok(ast::Value::Boolean(ast::BooleanValue { position, value }))
            },

            SdlTokenKind::Null => {
                self.consume_token()?;
                Ok(ast::Value::Null(ast::NullValue { position }))
            },

            SdlTokenKind::Name(_) => {
                let (value, _) = self.expect_name()?;
                Ok(ast::Value::Enum(ast::EnumValue { position, value }))
            },

            SdlTokenKind::SquareBracketOpen => {
                let open_span = self.consume_token()?.span;
                let mut values = vec![];
                while !self.at_list_end(&SdlTokenKind::SquareBracketClose, "[", &open_span)? {
                    values.push(self.parse_value(context)?);
                }
                self.expect(&SdlTokenKind::SquareBracketClose)?;
                Ok(ast::Value::List(ast::ListValue { position, values }))
            },

            SdlTokenKind::CurlyBraceOpen => {
                let open_span = self.consume_token()?.span;
                let mut fields = vec![];
                while !self.at_list_end(&SdlTokenKind::CurlyBraceClose, "{", &open_span)? {
                    let (name, span) = self.expect_name()?;
                    self.expect(&SdlTokenKind::Colon)?;
                    let value = self.parse_value(context)?;
                    fields.push(ast::ObjectField {
                        position: Some(span.start_inclusive.to_ast_pos()),
                        name,
                        value,
                    });
                }
                self.expect(&SdlTokenKind::CurlyBraceClose)?;
                Ok(ast::Value::Object(ast::ObjectValue { position, fields }))
            },

            _ => Err(Self::unexpected_token(token, vec!["value".to_string()])),
        }
    }
}
