//! A generic, kind-dispatched AST visitor.
//!
//! [`visit()`] walks a [`Document`](crate::ast::Document) depth-first and
//! returns an edited copy; the input is never mutated. At every node the
//! visitor's `enter` callback decides what happens next via a
//! [`VisitAction`]:
//!
//! - `Continue`: descend into the node's children.
//! - `Skip`: do not descend and do not call `leave` for this node.
//! - `Break`: stop visiting. The rest of the tree is copied unvisited.
//! - `Replace(node)`: put `node` in this node's place and descend into it.
//! - `Remove`: drop the node from its parent.
//!
//! `leave` sees the rebuilt node (children already edited) and accepts the
//! same actions, except that `Skip` behaves like `Continue`.
//!
//! Callbacks are usually registered per [`NodeKind`] on a [`VisitorMap`];
//! custom visitors implement [`Visitor`] directly.

mod ast_node;
mod strip_positions;
mod visit_action;
mod visit_error;
mod visitor_map;
mod walker;

pub use ast_node::AstNode;
pub use ast_node::AstNodeRef;
pub use ast_node::NodeKind;
pub use strip_positions::strip_positions;
pub use visit_action::VisitAction;
pub use visit_error::VisitError;
pub use visitor_map::VisitorMap;
pub use walker::visit;
pub use walker::visit_node;

/// Receives `enter`/`leave` calls during [`visit()`].
pub trait Visitor {
    fn enter(&mut self, node: AstNodeRef<'_>) -> VisitAction {
        let _ = node;
        VisitAction::Continue
    }

    fn leave(&mut self, node: AstNodeRef<'_>) -> VisitAction {
        let _ = node;
        VisitAction::Continue
    }
}
