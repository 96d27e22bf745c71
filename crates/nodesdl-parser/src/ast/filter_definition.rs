use crate::ast::AstPos;
use crate::ast::InputValueDefinition;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use serde::Deserialize;
use serde::Serialize;

/// `filter on [User] { active: { isActive: true } }`
///
/// `target` is always a `List` or one of the connection annotations.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FilterDefinition {
    pub position: Option<AstPos>,
    pub description: Option<String>,
    pub target: TypeAnnotation,
    pub conditions: Vec<FilterCondition>,
}

/// A named, optionally parameterized filter expression. The value is kept
/// unevaluated and may reference its arguments as `$variables`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FilterCondition {
    pub position: Option<AstPos>,
    pub description: Option<String>,
    pub name: String,
    pub arguments: Vec<InputValueDefinition>,
    pub value: Value,
}

/// `order on NodeConnection(User) { byName: [{ name: ASC }] }`
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct OrderDefinition {
    pub position: Option<AstPos>,
    pub description: Option<String>,
    pub target: TypeAnnotation,
    pub expressions: Vec<OrderExpression>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct OrderExpression {
    pub position: Option<AstPos>,
    pub description: Option<String>,
    pub name: String,
    pub arguments: Vec<InputValueDefinition>,
    pub value: Value,
}
