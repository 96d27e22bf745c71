use crate::Schema;

/// The operation a validation call is made for.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ContextKind {
    AddEdge,
    AddNode,
    Filter,
    Update,
}
impl std::fmt::Display for ContextKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ContextKind::AddEdge => "addEdge",
            ContextKind::AddNode => "addNode",
            ContextKind::Filter => "filter",
            ContextKind::Update => "update",
        })
    }
}

/// What a validation call validates against: a whole type, or a single
/// field (a connection for the edge validators, or a list/connection/node
/// field whose element type a filter applies to).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Target {
    Field {
        type_name: String,
        field_name: String,
    },
    Type(String),
}

/// Identifies the user mutation, hook or permission function a validation
/// call is made on behalf of. Only used to phrase
/// [`throw_on_errors`](crate::validate::throw_on_errors) failures.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MutationDescriptor {
    pub is_hook: bool,
    pub is_permission: bool,
    pub name: String,
}
impl MutationDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn hook(name: impl Into<String>) -> Self {
        Self {
            is_hook: true,
            ..Self::new(name)
        }
    }

    pub fn permission(name: impl Into<String>) -> Self {
        Self {
            is_permission: true,
            ..Self::new(name)
        }
    }
}

/// Everything a validator needs besides the value itself.
#[derive(Clone, Debug)]
pub struct Context<'s> {
    pub kind: ContextKind,
    pub mutation: Option<MutationDescriptor>,
    pub schema: &'s Schema,
    pub target: Target,
}
impl<'s> Context<'s> {
    pub fn new(kind: ContextKind, schema: &'s Schema, target: Target) -> Self {
        Self {
            kind,
            mutation: None,
            schema,
            target,
        }
    }

    /// A context targeting the type called `type_name`.
    pub fn for_type(kind: ContextKind, schema: &'s Schema, type_name: impl Into<String>) -> Self {
        Self::new(kind, schema, Target::Type(type_name.into()))
    }

    /// A context targeting `type_name.field_name`.
    pub fn for_field(
        kind: ContextKind,
        schema: &'s Schema,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
    ) -> Self {
        Self::new(
            kind,
            schema,
            Target::Field {
                type_name: type_name.into(),
                field_name: field_name.into(),
            },
        )
    }

    pub fn with_mutation(self, mutation: MutationDescriptor) -> Self {
        Self {
            mutation: Some(mutation),
            ..self
        }
    }
}
