use crate::ast::AstPos;
use serde::Deserialize;
use serde::Serialize;

/// The type of a field, argument or filter/order target.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum TypeAnnotation {
    Named(NamedType),
    List(ListType),
    NonNull(NonNullType),
    NodeConnection(NodeConnectionType),
    ScalarConnection(ScalarConnectionType),
    ObjectConnection(ObjectConnectionType),
    Edge(EdgeType),
}

impl TypeAnnotation {
    pub fn position(&self) -> Option<AstPos> {
        match self {
            TypeAnnotation::Named(t) => t.position,
            TypeAnnotation::List(t) => t.position,
            TypeAnnotation::NonNull(t) => t.position,
            TypeAnnotation::NodeConnection(t) => t.position,
            TypeAnnotation::ScalarConnection(t) => t.position,
            TypeAnnotation::ObjectConnection(t) => t.position,
            TypeAnnotation::Edge(t) => t.position,
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeAnnotation::NonNull(_))
    }

    /// Strips one `NonNull` wrapper, if present.
    pub fn nullable(&self) -> &TypeAnnotation {
        match self {
            TypeAnnotation::NonNull(t) => &t.inner,
            other => other,
        }
    }

    /// Returns `true` for the three connection forms (not `Edge`).
    pub fn is_connection(&self) -> bool {
        matches!(
            self.nullable(),
            TypeAnnotation::NodeConnection(_)
                | TypeAnnotation::ScalarConnection(_)
                | TypeAnnotation::ObjectConnection(_)
        )
    }

    /// A plain named type with no position.
    pub fn named(name: impl Into<String>) -> Self {
        TypeAnnotation::Named(NamedType::new(name))
    }
}

/// A reference to a type by name.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NamedType {
    pub position: Option<AstPos>,
    pub name: String,
}

impl NamedType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            position: None,
            name: name.into(),
        }
    }
}

/// `[T]`
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ListType {
    pub position: Option<AstPos>,
    pub item_type: Box<TypeAnnotation>,
}

/// `T!`
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NonNullType {
    pub position: Option<AstPos>,
    pub inner: Box<TypeAnnotation>,
}

/// `NodeConnection(Target, relatedField[, EdgeType])`
///
/// `related_field` is required in field position and optional as a
/// filter/order target.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NodeConnectionType {
    pub position: Option<AstPos>,
    pub target: NamedType,
    pub related_field: Option<String>,
    pub edge_type: Option<NamedType>,
}

/// `ScalarConnection(Target[, EdgeType])`
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ScalarConnectionType {
    pub position: Option<AstPos>,
    pub target: NamedType,
    pub edge_type: Option<NamedType>,
}

/// `ObjectConnection(Target[, EdgeType])`
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ObjectConnectionType {
    pub position: Option<AstPos>,
    pub target: NamedType,
    pub edge_type: Option<NamedType>,
}

/// `Edge(Target[, EdgeType])`
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct EdgeType {
    pub position: Option<AstPos>,
    pub target: NamedType,
    pub edge_type: Option<NamedType>,
}
