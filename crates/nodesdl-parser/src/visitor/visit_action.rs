use crate::visitor::AstNode;

/// What a visitor callback asks the walker to do with the current node.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum VisitAction {
    #[default]
    Continue,
    /// Skip the current node's subtree. Only meaningful from `enter`.
    Skip,
    /// Abort the traversal.
    Break,
    Replace(AstNode),
    Remove,
}
