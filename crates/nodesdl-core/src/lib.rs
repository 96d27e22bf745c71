//! Analysis of NodeSDL schemas and validation of the JSON payloads that
//! operate on the data they describe.
//!
//! Schemas are parsed by `nodesdl-parser` and analyzed by a
//! [`SchemaBuilder`] into an immutable [`Schema`]. The [`validate`]
//! module checks new nodes, updates, filters and edge properties against
//! it.

mod file_reader;
pub mod field_classifier;
pub mod global_id;
pub mod loc;
mod schema;
pub mod types;
pub mod validate;

pub use file_reader::ReadContentError;
pub use schema::BUILTIN_SCALAR_NAMES;
pub use schema::NODE_INTERFACE_NAME;
pub use schema::Schema;
pub use schema::SchemaBuildError;
pub use schema::SchemaBuilder;
