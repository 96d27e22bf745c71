use crate::ast::AstPos;
use crate::ast::Directive;
use crate::ast::FieldDefinition;
use crate::ast::NamedType;
use serde::Deserialize;
use serde::Serialize;

/// `type User implements Node & Named @dir { ... }`
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ObjectTypeDefinition {
    pub position: Option<AstPos>,
    pub description: Option<String>,
    pub name: String,
    pub implements_interfaces: Vec<NamedType>,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
}

/// `interface Named @dir { ... }`
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InterfaceTypeDefinition {
    pub position: Option<AstPos>,
    pub description: Option<String>,
    pub name: String,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
}

/// `union SearchResult @dir = User | Post`
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UnionTypeDefinition {
    pub position: Option<AstPos>,
    pub description: Option<String>,
    pub name: String,
    pub directives: Vec<Directive>,
    pub types: Vec<NamedType>,
}

/// `scalar DateTime @dir`
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ScalarTypeDefinition {
    pub position: Option<AstPos>,
    pub description: Option<String>,
    pub name: String,
    pub directives: Vec<Directive>,
}

/// `enum Color @dir { RED GREEN }`
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct EnumTypeDefinition {
    pub position: Option<AstPos>,
    pub description: Option<String>,
    pub name: String,
    pub directives: Vec<Directive>,
    pub values: Vec<EnumValueDefinition>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct EnumValueDefinition {
    pub position: Option<AstPos>,
    pub description: Option<String>,
    pub name: String,
    pub directives: Vec<Directive>,
}

/// `input Address @dir { ... }`
///
/// Input fields share [`FieldDefinition`] with object fields. Arguments and
/// connection types on input fields are grammatical but rejected by schema
/// analysis.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InputObjectTypeDefinition {
    pub position: Option<AstPos>,
    pub description: Option<String>,
    pub name: String,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
}
