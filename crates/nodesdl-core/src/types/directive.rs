use crate::loc;
use nodesdl_parser::ast;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

/// A directive annotation (`@name(arg: value)`) attached to a definition,
/// field or argument.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Directive {
    pub(crate) arguments: Vec<DirectiveArgument>,
    pub(crate) def_location: loc::FilePosition,
    pub(crate) name: String,
}
impl Directive {
    pub(crate) fn from_ast(file_path: &Path, directives: &[ast::Directive]) -> Vec<Self> {
        directives
            .iter()
            .map(|directive| Directive {
                arguments: directive
                    .arguments
                    .iter()
                    .map(|arg| DirectiveArgument {
                        name: arg.name.to_string(),
                        value: DirectiveValue::from_ast(&arg.value),
                    })
                    .collect(),
                def_location: loc::FilePosition::from_ast_pos(file_path, directive.position),
                name: directive.name.to_string(),
            })
            .collect()
    }

    pub fn arguments(&self) -> &[DirectiveArgument] {
        &self.arguments
    }

    /// Looks up an argument by name.
    pub fn argument(&self, name: &str) -> Option<&DirectiveArgument> {
        self.arguments.iter().find(|arg| arg.name == name)
    }

    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DirectiveArgument {
    pub(crate) name: String,
    pub(crate) value: Option<DirectiveValue>,
}
impl DirectiveArgument {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// `None` when the literal is a list or object, which directive
    /// arguments do not support.
    pub fn value(&self) -> Option<&DirectiveValue> {
        self.value.as_ref()
    }
}

/// A scalar literal passed to a directive.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum DirectiveValue {
    Boolean(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    Null,
    String(String),
}
impl DirectiveValue {
    fn from_ast(value: &ast::Value) -> Option<Self> {
        match value {
            ast::Value::Boolean(val) => Some(DirectiveValue::Boolean(val.value)),
            ast::Value::Enum(val) => Some(DirectiveValue::Enum(val.value.to_string())),
            ast::Value::Float(val) => val.as_f64().map(DirectiveValue::Float),
            ast::Value::Int(val) => val.as_i64().map(DirectiveValue::Int),
            ast::Value::Null(_) => Some(DirectiveValue::Null),
            ast::Value::String(val) => Some(DirectiveValue::String(val.value.to_string())),
            ast::Value::List(_) | ast::Value::Object(_) | ast::Value::Variable(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DirectiveValue::Enum(val) | DirectiveValue::String(val) => Some(val.as_str()),
            _ => None,
        }
    }
}

/// A directive found by [`Schema::directives_named()`], together with the
/// type (and, for field-level directives, the field) that carries it.
///
/// [`Schema::directives_named()`]: crate::Schema::directives_named
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectiveRef<'a> {
    pub directive: &'a Directive,
    pub field_name: Option<&'a str>,
    pub type_name: &'a str,
}
