use crate::visitor::AstNodeRef;
use crate::visitor::NodeKind;
use crate::visitor::VisitAction;
use crate::visitor::Visitor;
use std::collections::HashMap;

type Callback<'f> = Box<dyn FnMut(AstNodeRef<'_>) -> VisitAction + 'f>;

/// A [`Visitor`] assembled from closures registered per [`NodeKind`].
///
/// A kind-specific callback takes precedence over the generic `enter_any` /
/// `leave_any` fallbacks; kinds with neither just continue.
///
/// ```
/// use nodesdl_parser::visitor::{visit, NodeKind, VisitAction, VisitorMap};
///
/// let document = nodesdl_parser::parse("type A { b: Int } type C { d: Int }").unwrap();
/// let mut type_count = 0;
/// let mut visitor = VisitorMap::new().on(NodeKind::ObjectTypeDefinition, |_| {
///     type_count += 1;
///     VisitAction::Skip
/// });
/// visit(&document, &mut visitor).unwrap();
/// drop(visitor);
/// assert_eq!(type_count, 2);
/// ```
#[derive(Default)]
pub struct VisitorMap<'f> {
    enter: HashMap<NodeKind, Callback<'f>>,
    leave: HashMap<NodeKind, Callback<'f>>,
    enter_any: Option<Callback<'f>>,
    leave_any: Option<Callback<'f>>,
}

impl<'f> VisitorMap<'f> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an enter-only callback for `kind`.
    pub fn on(self, kind: NodeKind, callback: impl FnMut(AstNodeRef<'_>) -> VisitAction + 'f) -> Self {
        self.on_enter(kind, callback)
    }

    pub fn on_enter(
        mut self,
        kind: NodeKind,
        callback: impl FnMut(AstNodeRef<'_>) -> VisitAction + 'f,
    ) -> Self {
        self.enter.insert(kind, Box::new(callback));
        self
    }

    pub fn on_leave(
        mut self,
        kind: NodeKind,
        callback: impl FnMut(AstNodeRef<'_>) -> VisitAction + 'f,
    ) -> Self {
        self.leave.insert(kind, Box::new(callback));
        self
    }

    /// Fallback `enter` for kinds without their own callback.
    pub fn enter_any(mut self, callback: impl FnMut(AstNodeRef<'_>) -> VisitAction + 'f) -> Self {
        self.enter_any = Some(Box::new(callback));
        self
    }

    /// Fallback `leave` for kinds without their own callback.
    pub fn leave_any(mut self, callback: impl FnMut(AstNodeRef<'_>) -> VisitAction + 'f) -> Self {
        self.leave_any = Some(Box::new(callback));
        self
    }
}

impl Visitor for VisitorMap<'_> {
    fn enter(&mut self, node: AstNodeRef<'_>) -> VisitAction {
        if let Some(callback) = self.enter.get_mut(&node.kind()) {
            return callback(node);
        }
        match &mut self.enter_any {
            Some(callback) => callback(node),
            None => VisitAction::Continue,
        }
    }

    fn leave(&mut self, node: AstNodeRef<'_>) -> VisitAction {
        if let Some(callback) = self.leave.get_mut(&node.kind()) {
            return callback(node);
        }
        match &mut self.leave_any {
            Some(callback) => callback(node),
            None => VisitAction::Continue,
        }
    }
}
