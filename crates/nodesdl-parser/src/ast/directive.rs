use crate::ast::AstPos;
use crate::ast::Value;
use serde::Deserialize;
use serde::Serialize;

/// A directive annotation: `@name(arg: value)`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Directive {
    pub position: Option<AstPos>,
    pub name: String,
    pub arguments: Vec<Argument>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Argument {
    pub position: Option<AstPos>,
    pub name: String,
    pub value: Value,
}
