use serde::Deserialize;
use serde::Serialize;

/// The classification of a field's (or argument's) declared type.
///
/// Exactly one variant applies to every field. `Object`/`ObjectList` are
/// what a reference to a non-scalar type starts out as; schema resolution
/// turns them into `Node`/`NodeList` when the referenced type (or every
/// implementor/member of the referenced interface/union) implements `Node`.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum FieldKind {
    /// A built-in scalar, a custom `scalar` or an enum. `numeric` is set for
    /// `Int` and `Float`.
    Scalar { type_name: String, numeric: bool },
    Object { type_name: String },
    Node { type_name: String },
    ScalarList { type_name: String },
    /// `type_name` is `None` for nested lists such as `[[T]]`, which are not
    /// supported as field types.
    ObjectList { type_name: Option<String> },
    NodeList { type_name: String },
    ScalarConnection {
        type_name: String,
        edge_type: Option<String>,
    },
    ObjectConnection {
        type_name: String,
        edge_type: Option<String>,
    },
    NodeConnection {
        type_name: String,
        related_field: Option<String>,
        edge_type: Option<String>,
    },
    Edge {
        type_name: String,
        edge_type: Option<String>,
    },
}

impl FieldKind {
    /// The referenced scalar/enum/object type name, or `None` for the
    /// unsupported nested-list shape.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            FieldKind::Scalar { type_name, .. }
            | FieldKind::Object { type_name }
            | FieldKind::Node { type_name }
            | FieldKind::ScalarList { type_name }
            | FieldKind::NodeList { type_name }
            | FieldKind::ScalarConnection { type_name, .. }
            | FieldKind::ObjectConnection { type_name, .. }
            | FieldKind::NodeConnection { type_name, .. }
            | FieldKind::Edge { type_name, .. } => Some(type_name),
            FieldKind::ObjectList { type_name } => type_name.as_deref(),
        }
    }

    pub fn edge_type(&self) -> Option<&str> {
        match self {
            FieldKind::ScalarConnection { edge_type, .. }
            | FieldKind::ObjectConnection { edge_type, .. }
            | FieldKind::NodeConnection { edge_type, .. }
            | FieldKind::Edge { edge_type, .. } => edge_type.as_deref(),
            _ => None,
        }
    }

    /// The inverse field on the target type of a `NodeConnection`.
    pub fn related_field(&self) -> Option<&str> {
        match self {
            FieldKind::NodeConnection { related_field, .. } => related_field.as_deref(),
            _ => None,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, FieldKind::Scalar { .. })
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldKind::Scalar { numeric: true, .. })
    }

    pub fn is_object(&self) -> bool {
        matches!(self, FieldKind::Object { .. })
    }

    pub fn is_node(&self) -> bool {
        matches!(self, FieldKind::Node { .. })
    }

    pub fn is_list(&self) -> bool {
        matches!(
            self,
            FieldKind::ScalarList { .. } | FieldKind::ObjectList { .. } | FieldKind::NodeList { .. }
        )
    }

    pub fn is_connection(&self) -> bool {
        matches!(
            self,
            FieldKind::ScalarConnection { .. }
                | FieldKind::ObjectConnection { .. }
                | FieldKind::NodeConnection { .. }
        )
    }

    pub fn is_edge(&self) -> bool {
        matches!(self, FieldKind::Edge { .. })
    }

    /// A short human-readable name for the classification, used in log and
    /// CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Scalar { numeric: true, .. } => "numeric scalar",
            FieldKind::Scalar { .. } => "scalar",
            FieldKind::Object { .. } => "object",
            FieldKind::Node { .. } => "node",
            FieldKind::ScalarList { .. } => "scalar list",
            FieldKind::ObjectList { .. } => "object list",
            FieldKind::NodeList { .. } => "node list",
            FieldKind::ScalarConnection { .. } => "scalar connection",
            FieldKind::ObjectConnection { .. } => "object connection",
            FieldKind::NodeConnection { .. } => "node connection",
            FieldKind::Edge { .. } => "edge",
        }
    }
}
