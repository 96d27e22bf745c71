use crate::validate::ContextKind;
use thiserror::Error;

/// A validation call was made with a context that cannot be validated
/// against. This is a bug in the caller, never in the validated value.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ContextError {
    #[error("`{operation}` expects a connection field as its target, but was given the `{type_name}` type")]
    ExpectedFieldTarget {
        operation: &'static str,
        type_name: String,
    },

    #[error(
        "`{operation}` expects a type as its target, but was given the \
        `{type_name}.{field_name}` field"
    )]
    ExpectedTypeTarget {
        operation: &'static str,
        type_name: String,
        field_name: String,
    },

    #[error("The `{type_name}.{field_name}` connection has no edge type")]
    MissingEdgeType {
        type_name: String,
        field_name: String,
    },

    #[error("`{type_name}.{field_name}` is a {kind} field, not a connection")]
    NotAConnection {
        type_name: String,
        field_name: String,
        kind: &'static str,
    },

    #[error("`{type_name}.{field_name}` is a {kind} field and cannot be filtered")]
    NotFilterable {
        type_name: String,
        field_name: String,
        kind: &'static str,
    },

    #[error("`{operation}` cannot validate against `{type_name}`, which is a {kind}")]
    UnsupportedTargetType {
        operation: &'static str,
        type_name: String,
        kind: &'static str,
    },

    #[error("`{type_name}` has no field named `{field_name}`")]
    UnknownField {
        type_name: String,
        field_name: String,
    },

    #[error("The schema has no definition named `{0}`")]
    UnknownType(String),

    #[error("`{operation}` expects a `{expected}` context, but was given a `{found}` context")]
    WrongKind {
        operation: &'static str,
        expected: ContextKind,
        found: ContextKind,
    },
}
