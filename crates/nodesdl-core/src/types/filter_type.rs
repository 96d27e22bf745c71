use crate::loc;
use crate::types::FieldKind;
use nodesdl_parser::ast;
use serde::Deserialize;
use serde::Serialize;

/// A `filter on <target> { ... }` definition, keyed as `Filter#<target>`.
///
/// Conditions are kept as unevaluated AST; they may reference their
/// arguments as `$variables`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FilterType {
    pub(crate) conditions: Vec<ast::FilterCondition>,
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) name: String,
    pub(crate) target: FieldKind,
}
impl FilterType {
    pub fn condition(&self, name: &str) -> Option<&ast::FilterCondition> {
        self.conditions.iter().find(|cond| cond.name == name)
    }

    pub fn conditions(&self) -> &[ast::FilterCondition] {
        &self.conditions
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    /// The schema key, e.g. `Filter#[User]`.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Classification of the filtered list or connection.
    pub fn target(&self) -> &FieldKind {
        &self.target
    }
}

/// An `order on <target> { ... }` definition, keyed as `Order#<target>`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct OrderType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) expressions: Vec<ast::OrderExpression>,
    pub(crate) name: String,
    pub(crate) target: FieldKind,
}
impl OrderType {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn expression(&self, name: &str) -> Option<&ast::OrderExpression> {
        self.expressions.iter().find(|expr| expr.name == name)
    }

    pub fn expressions(&self) -> &[ast::OrderExpression] {
        &self.expressions
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn target(&self) -> &FieldKind {
        &self.target
    }
}
