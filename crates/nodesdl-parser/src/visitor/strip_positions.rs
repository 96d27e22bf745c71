use crate::ast;
use crate::visitor::visit;
use crate::visitor::AstNodeRef;
use crate::visitor::VisitAction;
use crate::visitor::Visitor;

struct PositionStripper;

impl Visitor for PositionStripper {
    fn leave(&mut self, node: AstNodeRef<'_>) -> VisitAction {
        if node.position().is_none() {
            return VisitAction::Continue;
        }
        let mut stripped = node.to_owned_node();
        stripped.set_position(None);
        VisitAction::Replace(stripped)
    }
}

/// Returns a copy of `document` with every node's position cleared.
///
/// Two documents that differ only in layout compare equal after stripping.
pub fn strip_positions(document: &ast::Document) -> ast::Document {
    // Replacements here never change a node's kind, so `visit` cannot fail.
    visit(document, &mut PositionStripper).unwrap_or_else(|_| document.clone())
}
