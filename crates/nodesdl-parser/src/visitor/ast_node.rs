use crate::ast;
use crate::ast::AstPos;

/// Generates [`NodeKind`], [`AstNode`] and [`AstNodeRef`] from the closed
/// list of visitable node types.
///
/// `Document` is listed separately because it is the only node without a
/// position.
macro_rules! define_ast_nodes {
    (
        root: $root_kind:ident => $root_ty:ty;
        positioned: { $($kind:ident => $ty:ty),* $(,)? }
    ) => {
        /// The kind of a visitable AST node.
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub enum NodeKind {
            $root_kind,
            $($kind),*
        }

        impl NodeKind {
            pub fn as_str(&self) -> &'static str {
                match self {
                    NodeKind::$root_kind => stringify!($root_kind),
                    $(NodeKind::$kind => stringify!($kind)),*
                }
            }
        }

        /// An owned AST node of any visitable kind.
        #[derive(Clone, Debug, PartialEq)]
        pub enum AstNode {
            $root_kind($root_ty),
            $($kind($ty)),*
        }

        /// A borrowed AST node of any visitable kind, as passed to visitor
        /// callbacks.
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub enum AstNodeRef<'a> {
            $root_kind(&'a $root_ty),
            $($kind(&'a $ty)),*
        }

        impl AstNode {
            pub fn kind(&self) -> NodeKind {
                match self {
                    AstNode::$root_kind(_) => NodeKind::$root_kind,
                    $(AstNode::$kind(_) => NodeKind::$kind),*
                }
            }

            pub fn as_node_ref(&self) -> AstNodeRef<'_> {
                match self {
                    AstNode::$root_kind(node) => AstNodeRef::$root_kind(node),
                    $(AstNode::$kind(node) => AstNodeRef::$kind(node)),*
                }
            }

            pub fn position(&self) -> Option<AstPos> {
                self.as_node_ref().position()
            }

            /// Sets the node's own position. Children are untouched; the
            /// root `Document` has no position and is left as-is.
            pub fn set_position(&mut self, position: Option<AstPos>) {
                match self {
                    AstNode::$root_kind(_) => (),
                    $(AstNode::$kind(node) => node.position = position),*
                }
            }
        }

        impl<'a> AstNodeRef<'a> {
            pub fn kind(&self) -> NodeKind {
                match self {
                    AstNodeRef::$root_kind(_) => NodeKind::$root_kind,
                    $(AstNodeRef::$kind(_) => NodeKind::$kind),*
                }
            }

            pub fn position(&self) -> Option<AstPos> {
                match self {
                    AstNodeRef::$root_kind(_) => None,
                    $(AstNodeRef::$kind(node) => node.position),*
                }
            }

            /// Clones the referenced node into an owned [`AstNode`], e.g. to
            /// build a `VisitAction::Replace`.
            pub fn to_owned_node(&self) -> AstNode {
                match self {
                    AstNodeRef::$root_kind(node) => AstNode::$root_kind((*node).clone()),
                    $(AstNodeRef::$kind(node) => AstNode::$kind((*node).clone())),*
                }
            }
        }

        impl From<$root_ty> for AstNode {
            fn from(node: $root_ty) -> Self {
                AstNode::$root_kind(node)
            }
        }

        $(
            impl From<$ty> for AstNode {
                fn from(node: $ty) -> Self {
                    AstNode::$kind(node)
                }
            }
        )*
    };
}

define_ast_nodes! {
    root: Document => ast::Document;
    positioned: {
        ObjectTypeDefinition => ast::ObjectTypeDefinition,
        InterfaceTypeDefinition => ast::InterfaceTypeDefinition,
        UnionTypeDefinition => ast::UnionTypeDefinition,
        ScalarTypeDefinition => ast::ScalarTypeDefinition,
        EnumTypeDefinition => ast::EnumTypeDefinition,
        EnumValueDefinition => ast::EnumValueDefinition,
        InputObjectTypeDefinition => ast::InputObjectTypeDefinition,
        MutationDefinition => ast::MutationDefinition,
        FilterDefinition => ast::FilterDefinition,
        OrderDefinition => ast::OrderDefinition,
        TypeExtension => ast::TypeExtension,
        FilterCondition => ast::FilterCondition,
        OrderExpression => ast::OrderExpression,
        FieldDefinition => ast::FieldDefinition,
        InputValueDefinition => ast::InputValueDefinition,
        Directive => ast::Directive,
        Argument => ast::Argument,
        NamedType => ast::NamedType,
        ListType => ast::ListType,
        NonNullType => ast::NonNullType,
        NodeConnectionType => ast::NodeConnectionType,
        ScalarConnectionType => ast::ScalarConnectionType,
        ObjectConnectionType => ast::ObjectConnectionType,
        EdgeType => ast::EdgeType,
        Variable => ast::Variable,
        IntValue => ast::IntValue,
        FloatValue => ast::FloatValue,
        StringValue => ast::StringValue,
        BooleanValue => ast::BooleanValue,
        NullValue => ast::NullValue,
        EnumValue => ast::EnumValue,
        ListValue => ast::ListValue,
        ObjectValue => ast::ObjectValue,
        ObjectField => ast::ObjectField,
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ast::Definition> for AstNode {
    fn from(definition: ast::Definition) -> Self {
        match definition {
            ast::Definition::ObjectType(def) => AstNode::ObjectTypeDefinition(def),
            ast::Definition::Interface(def) => AstNode::InterfaceTypeDefinition(def),
            ast::Definition::Union(def) => AstNode::UnionTypeDefinition(def),
            ast::Definition::Scalar(def) => AstNode::ScalarTypeDefinition(def),
            ast::Definition::Enum(def) => AstNode::EnumTypeDefinition(def),
            ast::Definition::InputObject(def) => AstNode::InputObjectTypeDefinition(def),
            ast::Definition::Mutation(def) => AstNode::MutationDefinition(def),
            ast::Definition::Filter(def) => AstNode::FilterDefinition(def),
            ast::Definition::Order(def) => AstNode::OrderDefinition(def),
            ast::Definition::Extension(ext) => AstNode::TypeExtension(ext),
        }
    }
}

impl From<ast::TypeAnnotation> for AstNode {
    fn from(annotation: ast::TypeAnnotation) -> Self {
        match annotation {
            ast::TypeAnnotation::Named(t) => AstNode::NamedType(t),
            ast::TypeAnnotation::List(t) => AstNode::ListType(t),
            ast::TypeAnnotation::NonNull(t) => AstNode::NonNullType(t),
            ast::TypeAnnotation::NodeConnection(t) => AstNode::NodeConnectionType(t),
            ast::TypeAnnotation::ScalarConnection(t) => AstNode::ScalarConnectionType(t),
            ast::TypeAnnotation::ObjectConnection(t) => AstNode::ObjectConnectionType(t),
            ast::TypeAnnotation::Edge(t) => AstNode::EdgeType(t),
        }
    }
}

impl From<ast::Value> for AstNode {
    fn from(value: ast::Value) -> Self {
        match value {
            ast::Value::Variable(v) => AstNode::Variable(v),
            ast::Value::Int(v) => AstNode::IntValue(v),
            ast::Value::Float(v) => AstNode::FloatValue(v),
            ast::Value::String(v) => AstNode::StringValue(v),
            ast::Value::Boolean(v) => AstNode::BooleanValue(v),
            ast::Value::Null(v) => AstNode::NullValue(v),
            ast::Value::Enum(v) => AstNode::EnumValue(v),
            ast::Value::List(v) => AstNode::ListValue(v),
            ast::Value::Object(v) => AstNode::ObjectValue(v),
        }
    }
}

/// Conversion from an [`AstNode`] back into the typed value a parent slot
/// holds. Fails (returning the node) when the node's kind cannot occupy the
/// slot.
pub(crate) trait NodeSlot: Sized + Into<AstNode> {
    /// Name of the slot's type, used in [`VisitError`](crate::visitor::VisitError)s.
    const SLOT: &'static str;

    fn from_ast_node(node: AstNode) -> Result<Self, AstNode>;
}

macro_rules! impl_struct_slot {
    ($($kind:ident => $ty:ty),* $(,)?) => {
        $(
            impl NodeSlot for $ty {
                const SLOT: &'static str = stringify!($kind);

                fn from_ast_node(node: AstNode) -> Result<Self, AstNode> {
                    match node {
                        AstNode::$kind(node) => Ok(node),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

impl_struct_slot! {
    Document => ast::Document,
    EnumValueDefinition => ast::EnumValueDefinition,
    FilterCondition => ast::FilterCondition,
    OrderExpression => ast::OrderExpression,
    FieldDefinition => ast::FieldDefinition,
    InputValueDefinition => ast::InputValueDefinition,
    Directive => ast::Directive,
    Argument => ast::Argument,
    NamedType => ast::NamedType,
    ObjectField => ast::ObjectField,
}

impl NodeSlot for ast::Definition {
    const SLOT: &'static str = "Definition";

    fn from_ast_node(node: AstNode) -> Result<Self, AstNode> {
        match node {
            AstNode::ObjectTypeDefinition(def) => Ok(ast::Definition::ObjectType(def)),
            AstNode::InterfaceTypeDefinition(def) => Ok(ast::Definition::Interface(def)),
            AstNode::UnionTypeDefinition(def) => Ok(ast::Definition::Union(def)),
            AstNode::ScalarTypeDefinition(def) => Ok(ast::Definition::Scalar(def)),
            AstNode::EnumTypeDefinition(def) => Ok(ast::Definition::Enum(def)),
            AstNode::InputObjectTypeDefinition(def) => Ok(ast::Definition::InputObject(def)),
            AstNode::MutationDefinition(def) => Ok(ast::Definition::Mutation(def)),
            AstNode::FilterDefinition(def) => Ok(ast::Definition::Filter(def)),
            AstNode::OrderDefinition(def) => Ok(ast::Definition::Order(def)),
            AstNode::TypeExtension(ext) => Ok(ast::Definition::Extension(ext)),
            other => Err(other),
        }
    }
}

impl NodeSlot for ast::TypeAnnotation {
    const SLOT: &'static str = "TypeAnnotation";

    fn from_ast_node(node: AstNode) -> Result<Self, AstNode> {
        match node {
            AstNode::NamedType(t) => Ok(ast::TypeAnnotation::Named(t)),
            AstNode::ListType(t) => Ok(ast::TypeAnnotation::List(t)),
            AstNode::NonNullType(t) => Ok(ast::TypeAnnotation::NonNull(t)),
            AstNode::NodeConnectionType(t) => Ok(ast::TypeAnnotation::NodeConnection(t)),
            AstNode::ScalarConnectionType(t) => Ok(ast::TypeAnnotation::ScalarConnection(t)),
            AstNode::ObjectConnectionType(t) => Ok(ast::TypeAnnotation::ObjectConnection(t)),
            AstNode::EdgeType(t) => Ok(ast::TypeAnnotation::Edge(t)),
            other => Err(other),
        }
    }
}

impl NodeSlot for ast::Value {
    const SLOT: &'static str = "Value";

    fn from_ast_node(node: AstNode) -> Result<Self, AstNode> {
        match node {
            AstNode::Variable(v) => Ok(ast::Value::Variable(v)),
            AstNode::IntValue(v) => Ok(ast::Value::Int(v)),
            AstNode::FloatValue(v) => Ok(ast::Value::Float(v)),
            AstNode::StringValue(v) => Ok(ast::Value::String(v)),
            AstNode::BooleanValue(v) => Ok(ast::Value::Boolean(v)),
            AstNode::NullValue(v) => Ok(ast::Value::Null(v)),
            AstNode::EnumValue(v) => Ok(ast::Value::Enum(v)),
            AstNode::ListValue(v) => Ok(ast::Value::List(v)),
            AstNode::ObjectValue(v) => Ok(ast::Value::Object(v)),
            other => Err(other),
        }
    }
}
