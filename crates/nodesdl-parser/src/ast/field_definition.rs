use crate::ast::AstPos;
use crate::ast::Directive;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use serde::Deserialize;
use serde::Serialize;

/// `name(arg: Int): Type @dir`
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FieldDefinition {
    pub position: Option<AstPos>,
    pub description: Option<String>,
    pub name: String,
    pub arguments: Vec<InputValueDefinition>,
    pub field_type: TypeAnnotation,
    pub directives: Vec<Directive>,
}

/// An argument definition: `name: Type = default @dir`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InputValueDefinition {
    pub position: Option<AstPos>,
    pub description: Option<String>,
    pub name: String,
    pub value_type: TypeAnnotation,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
}
