//! The compiled schema model produced by
//! [`SchemaBuilder`](crate::SchemaBuilder).

mod definition;
mod directive;
mod enum_type;
mod field;
mod field_kind;
mod filter_type;
mod input_type;
mod interface_type;
mod mutation_type;
mod object_type;
mod scalar_type;
mod union_type;

pub use definition::Definition;
pub use directive::Directive;
pub use directive::DirectiveArgument;
pub use directive::DirectiveRef;
pub use directive::DirectiveValue;
pub use enum_type::EnumType;
pub use field::Argument;
pub use field::Field;
pub use field_kind::FieldKind;
pub use filter_type::FilterType;
pub use filter_type::OrderType;
pub use input_type::InputType;
pub use interface_type::InterfaceType;
pub use mutation_type::MutationType;
pub use object_type::ObjectType;
pub use scalar_type::ScalarType;
pub use union_type::UnionType;
