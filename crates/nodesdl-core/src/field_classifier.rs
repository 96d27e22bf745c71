//! Pure helpers that categorize a declared type annotation.
//!
//! Classification is total: every annotation maps to exactly one
//! [`FieldKind`]. The precedence is connection forms, then `Edge`, then
//! lists (one level deep), then named scalars/enums, and finally objects as
//! the fallback, which also covers forward references to types that have
//! not been seen yet.

use crate::types::FieldKind;
use nodesdl_parser::ast;

/// `true` for the numeric built-in scalars.
pub fn is_numeric_type_name(type_name: &str) -> bool {
    matches!(type_name, "Int" | "Float")
}

/// `true` when the outermost wrapper is `!`.
pub fn is_required(annotation: &ast::TypeAnnotation) -> bool {
    annotation.is_non_null()
}

/// Classifies `annotation`. `is_scalar_type` decides whether a bare name
/// refers to a scalar or enum (as opposed to an object, interface or
/// union).
pub fn classify(
    annotation: &ast::TypeAnnotation,
    is_scalar_type: &impl Fn(&str) -> bool,
) -> FieldKind {
    use ast::TypeAnnotation;

    match annotation {
        TypeAnnotation::NonNull(non_null) => classify(&non_null.inner, is_scalar_type),

        TypeAnnotation::NodeConnection(conn) => FieldKind::NodeConnection {
            type_name: conn.target.name.to_string(),
            related_field: conn.related_field.clone(),
            edge_type: conn.edge_type.as_ref().map(|edge| edge.name.to_string()),
        },

        TypeAnnotation::ScalarConnection(conn) => FieldKind::ScalarConnection {
            type_name: conn.target.name.to_string(),
            edge_type: conn.edge_type.as_ref().map(|edge| edge.name.to_string()),
        },

        TypeAnnotation::ObjectConnection(conn) => FieldKind::ObjectConnection {
            type_name: conn.target.name.to_string(),
            edge_type: conn.edge_type.as_ref().map(|edge| edge.name.to_string()),
        },

        TypeAnnotation::Edge(edge) => FieldKind::Edge {
            type_name: edge.target.name.to_string(),
            edge_type: edge.edge_type.as_ref().map(|edge| edge.name.to_string()),
        },

        TypeAnnotation::List(list) => {
            if let Some(type_name) = scalar_item_type(list, is_scalar_type) {
                FieldKind::ScalarList {
                    type_name: type_name.to_string(),
                }
            } else {
                FieldKind::ObjectList {
                    type_name: object_item_type(list, is_scalar_type).map(str::to_string),
                }
            }
        },

        TypeAnnotation::Named(named) if is_scalar_type(&named.name) => FieldKind::Scalar {
            type_name: named.name.to_string(),
            numeric: is_numeric_type_name(&named.name),
        },

        TypeAnnotation::Named(named) => FieldKind::Object {
            type_name: named.name.to_string(),
        },
    }
}

/// The item type name of `[T]`/`[T!]` when `T` is a scalar or enum.
fn scalar_item_type<'a>(
    list: &'a ast::ListType,
    is_scalar_type: &impl Fn(&str) -> bool,
) -> Option<&'a str> {
    match list.item_type.nullable() {
        ast::TypeAnnotation::Named(named) if is_scalar_type(&named.name) => Some(&named.name),
        _ => None,
    }
}

/// The item type name of `[T]`/`[T!]` when `T` is not a scalar. `None`
/// when the item is itself a list.
fn object_item_type<'a>(
    list: &'a ast::ListType,
    is_scalar_type: &impl Fn(&str) -> bool,
) -> Option<&'a str> {
    match list.item_type.nullable() {
        ast::TypeAnnotation::Named(named) if !is_scalar_type(&named.name) => Some(&named.name),
        _ => None,
    }
}

/// Re-derives an `Object`/`ObjectList` classification once every type is
/// known: references to Node-implementing types (or to interfaces/unions
/// whose every implementor/member implements `Node`) become `Node`/
/// `NodeList`. Every other kind is returned unchanged.
pub fn resolve_node_reference(
    kind: &FieldKind,
    is_node_type: &impl Fn(&str) -> bool,
) -> FieldKind {
    match kind {
        FieldKind::Object { type_name } if is_node_type(type_name) => FieldKind::Node {
            type_name: type_name.to_string(),
        },
        FieldKind::ObjectList {
            type_name: Some(type_name),
        } if is_node_type(type_name) => FieldKind::NodeList {
            type_name: type_name.to_string(),
        },
        other => other.clone(),
    }
}
