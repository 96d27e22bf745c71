use crate::ast::AstPos;
use crate::ast::EnumTypeDefinition;
use crate::ast::FilterDefinition;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::MutationDefinition;
use crate::ast::ObjectTypeDefinition;
use crate::ast::OrderDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::UnionTypeDefinition;
use serde::Deserialize;
use serde::Serialize;

/// A parsed SDL document: an ordered list of top-level definitions.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

/// A top-level definition.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Definition {
    ObjectType(ObjectTypeDefinition),
    Interface(InterfaceTypeDefinition),
    Union(UnionTypeDefinition),
    Scalar(ScalarTypeDefinition),
    Enum(EnumTypeDefinition),
    InputObject(InputObjectTypeDefinition),
    Mutation(MutationDefinition),
    Filter(FilterDefinition),
    Order(OrderDefinition),
    Extension(TypeExtension),
}

impl Definition {
    /// The declared name, or `None` for `filter`/`order` definitions (which
    /// are keyed by their target type instead).
    pub fn name(&self) -> Option<&str> {
        match self {
            Definition::ObjectType(def) => Some(&def.name),
            Definition::Interface(def) => Some(&def.name),
            Definition::Union(def) => Some(&def.name),
            Definition::Scalar(def) => Some(&def.name),
            Definition::Enum(def) => Some(&def.name),
            Definition::InputObject(def) => Some(&def.name),
            Definition::Mutation(def) => Some(&def.name),
            Definition::Filter(_) | Definition::Order(_) => None,
            Definition::Extension(ext) => ext.definition.name(),
        }
    }

    pub fn position(&self) -> Option<AstPos> {
        match self {
            Definition::ObjectType(def) => def.position,
            Definition::Interface(def) => def.position,
            Definition::Union(def) => def.position,
            Definition::Scalar(def) => def.position,
            Definition::Enum(def) => def.position,
            Definition::InputObject(def) => def.position,
            Definition::Mutation(def) => def.position,
            Definition::Filter(def) => def.position,
            Definition::Order(def) => def.position,
            Definition::Extension(ext) => ext.position,
        }
    }

    /// The SDL keyword that introduces this kind of definition.
    pub fn keyword(&self) -> &'static str {
        match self {
            Definition::ObjectType(_) => "type",
            Definition::Interface(_) => "interface",
            Definition::Union(_) => "union",
            Definition::Scalar(_) => "scalar",
            Definition::Enum(_) => "enum",
            Definition::InputObject(_) => "input",
            Definition::Mutation(_) => "mutation",
            Definition::Filter(_) => "filter",
            Definition::Order(_) => "order",
            Definition::Extension(_) => "extend",
        }
    }
}

/// `extend <definition>`.
///
/// The wrapped definition is one of `ObjectType`, `Interface`, `Union`,
/// `Enum` or `InputObject` and never carries a description.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TypeExtension {
    pub position: Option<AstPos>,
    pub definition: Box<Definition>,
}
