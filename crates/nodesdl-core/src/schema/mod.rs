mod definition_pass;
mod definition_walk;
mod extension_index;
mod node_resolution;
#[allow(clippy::module_inception)]
mod schema;
mod schema_builder;

pub use schema::Schema;
pub use schema::BUILTIN_SCALAR_NAMES;
pub use schema::NODE_INTERFACE_NAME;
pub use schema_builder::SchemaBuildError;
pub use schema_builder::SchemaBuilder;

#[cfg(test)]
mod tests;
