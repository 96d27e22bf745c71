use crate::visitor::NodeKind;

/// Errors produced by edits a visitor is not allowed to make.
///
/// These indicate a bug in the visitor, not in the document.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum VisitError {
    /// A `Replace` put a node where its kind cannot go, e.g. a `Directive`
    /// in a list of `FieldDefinition`s.
    #[error("cannot place a `{found}` node where a `{expected}` is expected")]
    ReplacementKindMismatch {
        expected: &'static str,
        found: NodeKind,
    },

    /// A `Remove` targeted a child that its parent cannot do without, such as
    /// the type of a field.
    #[error("cannot remove the `{slot}` of a `{parent}` node")]
    RequiredNodeRemoved {
        parent: NodeKind,
        slot: &'static str,
    },

    #[error("cannot remove the root node")]
    RootRemoved,
}
