//! Validation of dynamic JSON payloads (new nodes, update expressions,
//! filter expressions and edge properties) against a [`Schema`](crate::Schema).
//!
//! Every validator collects all violations instead of stopping at the
//! first one, and never mutates its input. A malformed [`Context`] is
//! reported as a [`ContextError`], separately from payload violations.

mod context;
mod context_error;
mod operators;
mod scalar_values;
mod validation_context;
mod validation_result;
mod validators;
mod value_validator;

pub use context::Context;
pub use context::ContextKind;
pub use context::MutationDescriptor;
pub use context::Target;
pub use context_error::ContextError;
pub use validation_context::ValidationContext;
pub use validation_result::ValidationFailed;
pub use validation_result::ValidationResult;
pub use validation_result::throw_on_errors;
pub use validators::validate_edge_filter;
pub use validators::validate_edge_props;
pub use validators::validate_edge_update;
pub use validators::validate_filter;
pub use validators::validate_node;
pub use validators::validate_update;

#[cfg(test)]
mod tests;
