//! Various test utils.

use crate::ast;
use crate::visitor::strip_positions;
use crate::SdlParseError;

/// Parses `source`, panicking with the rendered diagnostic on failure.
pub fn parse_ok(source: &str) -> ast::Document {
    match crate::parse(source) {
        Ok(document) => document,
        Err(error) => panic!("{}", error.format_detailed(Some(source))),
    }
}

/// Parses `source`, panicking if it unexpectedly succeeds.
pub fn parse_err(source: &str) -> SdlParseError {
    match crate::parse(source) {
        Ok(document) => panic!("expected a parse error, got {document:?}"),
        Err(error) => error,
    }
}

/// Parses a document holding exactly one `type` definition.
pub fn parse_object_type(source: &str) -> ast::ObjectTypeDefinition {
    let mut document = parse_ok(source);
    assert_eq!(document.definitions.len(), 1);
    match document.definitions.remove(0) {
        ast::Definition::ObjectType(def) => def,
        other => panic!("expected an object type definition, got {other:?}"),
    }
}

/// Parses `type T { f: <annotation> }` and returns the position-free type
/// of `f`.
pub fn parse_field_type(annotation: &str) -> ast::TypeAnnotation {
    let source = format!("type T {{ f: {annotation} }}");
    let document = strip_positions(&parse_ok(&source));
    match document.definitions.into_iter().next() {
        Some(ast::Definition::ObjectType(mut def)) => def.fields.remove(0).field_type,
        other => panic!("expected an object type definition, got {other:?}"),
    }
}

pub fn named(name: &str) -> ast::TypeAnnotation {
    ast::TypeAnnotation::named(name)
}

pub fn non_null(inner: ast::TypeAnnotation) -> ast::TypeAnnotation {
    ast::TypeAnnotation::NonNull(ast::NonNullType {
        position: None,
        inner: Box::new(inner),
    })
}

pub fn list(item_type: ast::TypeAnnotation) -> ast::TypeAnnotation {
    ast::TypeAnnotation::List(ast::ListType {
        position: None,
        item_type: Box::new(item_type),
    })
}
