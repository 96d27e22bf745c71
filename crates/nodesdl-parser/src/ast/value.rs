use crate::ast::AstPos;
use serde::Deserialize;
use serde::Serialize;

/// A literal value, or a `$variable` inside a filter/order expression.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Value {
    Variable(Variable),
    Int(IntValue),
    Float(FloatValue),
    String(StringValue),
    Boolean(BooleanValue),
    Null(NullValue),
    Enum(EnumValue),
    List(ListValue),
    Object(ObjectValue),
}

impl Value {
    pub fn position(&self) -> Option<AstPos> {
        match self {
            Value::Variable(v) => v.position,
            Value::Int(v) => v.position,
            Value::Float(v) => v.position,
            Value::String(v) => v.position,
            Value::Boolean(v) => v.position,
            Value::Null(v) => v.position,
            Value::Enum(v) => v.position,
            Value::List(v) => v.position,
            Value::Object(v) => v.position,
        }
    }
}

/// `$name`
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Variable {
    pub position: Option<AstPos>,
    pub name: String,
}

/// An integer literal, kept as its raw source text (e.g. `"-12"`).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct IntValue {
    pub position: Option<AstPos>,
    pub raw: String,
}

impl IntValue {
    pub fn as_i64(&self) -> Option<i64> {
        self.raw.parse().ok()
    }
}

/// A float literal, kept as its raw source text (e.g. `"1.5e3"`).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FloatValue {
    pub position: Option<AstPos>,
    pub raw: String,
}

impl FloatValue {
    pub fn as_f64(&self) -> Option<f64> {
        self.raw.parse().ok()
    }
}

/// A string literal. `value` holds the cooked (unescaped) content.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct StringValue {
    pub position: Option<AstPos>,
    pub value: String,
    pub is_block: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BooleanValue {
    pub position: Option<AstPos>,
    pub value: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NullValue {
    pub position: Option<AstPos>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct EnumValue {
    pub position: Option<AstPos>,
    pub value: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ListValue {
    pub position: Option<AstPos>,
    pub values: Vec<Value>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ObjectValue {
    pub position: Option<AstPos>,
    pub fields: Vec<ObjectField>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ObjectField {
    pub position: Option<AstPos>,
    pub name: String,
    pub value: Value,
}
