//! Owned AST for parsed SDL documents.
//!
//! Every node owns its strings so that a [`Document`] can outlive the source
//! text it was parsed from and so that filter/order condition ASTs can be
//! stored inside a compiled schema. Each node carries an optional 1-based
//! [`AstPos`]; nodes synthesised by tools (or passed through
//! [`strip_positions`](crate::visitor::strip_positions)) have `None`.
//!
//! All node types derive `serde::Serialize` and `serde::Deserialize`.

mod ast_pos;
mod directive;
mod document;
mod field_definition;
mod filter_definition;
mod mutation_definition;
mod type_annotation;
mod type_definitions;
mod value;

pub use ast_pos::AstPos;
pub use directive::Argument;
pub use directive::Directive;
pub use document::Definition;
pub use document::Document;
pub use document::TypeExtension;
pub use field_definition::FieldDefinition;
pub use field_definition::InputValueDefinition;
pub use filter_definition::FilterCondition;
pub use filter_definition::FilterDefinition;
pub use filter_definition::OrderDefinition;
pub use filter_definition::OrderExpression;
pub use mutation_definition::MutationDefinition;
pub use type_annotation::EdgeType;
pub use type_annotation::ListType;
pub use type_annotation::NamedType;
pub use type_annotation::NodeConnectionType;
pub use type_annotation::NonNullType;
pub use type_annotation::ObjectConnectionType;
pub use type_annotation::ScalarConnectionType;
pub use type_annotation::TypeAnnotation;
pub use type_definitions::EnumTypeDefinition;
pub use type_definitions::EnumValueDefinition;
pub use type_definitions::InputObjectTypeDefinition;
pub use type_definitions::InterfaceTypeDefinition;
pub use type_definitions::ObjectTypeDefinition;
pub use type_definitions::ScalarTypeDefinition;
pub use type_definitions::UnionTypeDefinition;
pub use value::BooleanValue;
pub use value::EnumValue;
pub use value::FloatValue;
pub use value::IntValue;
pub use value::ListValue;
pub use value::NullValue;
pub use value::ObjectField;
pub use value::ObjectValue;
pub use value::StringValue;
pub use value::Value;
pub use value::Variable;
