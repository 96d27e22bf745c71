use crate::ast;
use crate::visitor::ast_node::NodeSlot;
use crate::visitor::AstNode;
use crate::visitor::NodeKind;
use crate::visitor::VisitAction;
use crate::visitor::VisitError;
use crate::visitor::Visitor;

/// Visits `document` depth-first and returns the edited copy.
///
/// The input is cloned once up front and never mutated.
pub fn visit<V: Visitor + ?Sized>(
    document: &ast::Document,
    visitor: &mut V,
) -> Result<ast::Document, VisitError> {
    match visit_node(AstNode::Document(document.clone()), visitor)? {
        Some(node) => ast::Document::from_ast_node(node).map_err(|node| {
            VisitError::ReplacementKindMismatch {
                expected: ast::Document::SLOT,
                found: node.kind(),
            }
        }),
        None => Err(VisitError::RootRemoved),
    }
}

/// Visits an arbitrary owned subtree. Returns `None` if the visitor removed
/// the subtree's root.
pub fn visit_node<V: Visitor + ?Sized>(
    node: AstNode,
    visitor: &mut V,
) -> Result<Option<AstNode>, VisitError> {
    let mut walker = Walker {
        visitor,
        stopped: false,
    };
    walker.walk(node)
}

struct Walker<'v, V: Visitor + ?Sized> {
    visitor: &'v mut V,
    /// Set once a callback returns `Break`; everything after that is passed
    /// through untouched.
    stopped: bool,
}

impl<V: Visitor + ?Sized> Walker<'_, V> {
    fn walk(&mut self, node: AstNode) -> Result<Option<AstNode>, VisitError> {
        if self.stopped {
            return Ok(Some(node));
        }

        let node = match self.visitor.enter(node.as_node_ref()) {
            VisitAction::Continue => node,
            VisitAction::Skip => return Ok(Some(node)),
            VisitAction::Break => {
                self.stopped = true;
                return Ok(Some(node));
            },
            VisitAction::Replace(replacement) => replacement,
            VisitAction::Remove => return Ok(None),
        };

        let node = self.walk_children(node)?;
        if self.stopped {
            return Ok(Some(node));
        }

        match self.visitor.leave(node.as_node_ref()) {
            VisitAction::Continue | VisitAction::Skip => Ok(Some(node)),
            VisitAction::Break => {
                self.stopped = true;
                Ok(Some(node))
            },
            VisitAction::Replace(replacement) => Ok(Some(replacement)),
            VisitAction::Remove => Ok(None),
        }
    }

    fn walk_required<T: NodeSlot>(&mut self, child: T, parent: NodeKind) -> Result<T, VisitError> {
        match self.walk(child.into())? {
            Some(node) => Self::into_slot(node),
            None => Err(VisitError::RequiredNodeRemoved {
                parent,
                slot: T::SLOT,
            }),
        }
    }

    fn walk_boxed<T: NodeSlot>(
        &mut self,
        child: Box<T>,
        parent: NodeKind,
    ) -> Result<Box<T>, VisitError> {
        Ok(Box::new(self.walk_required(*child, parent)?))
    }

    fn walk_optional<T: NodeSlot>(&mut self, child: Option<T>) -> Result<Option<T>, VisitError> {
        match child {
            Some(child) => match self.walk(child.into())? {
                Some(node) => Ok(Some(Self::into_slot(node)?)),
                None => Ok(None),
            },
            None => Ok(None),
        }
    }

    fn walk_list<T: NodeSlot>(&mut self, children: Vec<T>) -> Result<Vec<T>, VisitError> {
        let mut kept = Vec::with_capacity(children.len());
        for child in children {
            if let Some(node) = self.walk(child.into())? {
                kept.push(Self::into_slot(node)?);
            }
        }
        Ok(kept)
    }

    fn into_slot<T: NodeSlot>(node: AstNode) -> Result<T, VisitError> {
        T::from_ast_node(node).map_err(|node| VisitError::ReplacementKindMismatch {
            expected: T::SLOT,
            found: node.kind(),
        })
    }

    /// Rebuilds `node` with each child visited, in source order.
    fn walk_children(&mut self, node: AstNode) -> Result<AstNode, VisitError> {
        if self.stopped {
            return Ok(node);
        }
        Ok(match node {
            AstNode::Document(mut doc) => {
                doc.definitions = self.walk_list(doc.definitions)?;
                AstNode::Document(doc)
            },
            AstNode::ObjectTypeDefinition(mut def) => {
                def.implements_interfaces = self.walk_list(def.implements_interfaces)?;
                def.directives = self.walk_list(def.directives)?;
                def.fields = self.walk_list(def.fields)?;
                AstNode::ObjectTypeDefinition(def)
            },
            AstNode::InterfaceTypeDefinition(mut def) => {
                def.directives = self.walk_list(def.directives)?;
                def.fields = self.walk_list(def.fields)?;
                AstNode::InterfaceTypeDefinition(def)
            },
            AstNode::UnionTypeDefinition(mut def) => {
                def.directives = self.walk_list(def.directives)?;
                def.types = self.walk_list(def.types)?;
                AstNode::UnionTypeDefinition(def)
            },
            AstNode::ScalarTypeDefinition(mut def) => {
                def.directives = self.walk_list(def.directives)?;
                AstNode::ScalarTypeDefinition(def)
            },
            AstNode::EnumTypeDefinition(mut def) => {
                def.directives = self.walk_list(def.directives)?;
                def.values = self.walk_list(def.values)?;
                AstNode::EnumTypeDefinition(def)
            },
            AstNode::EnumValueDefinition(mut def) => {
                def.directives = self.walk_list(def.directives)?;
                AstNode::EnumValueDefinition(def)
            },
            AstNode::InputObjectTypeDefinition(mut def) => {
                def.directives = self.walk_list(def.directives)?;
                def.fields = self.walk_list(def.fields)?;
                AstNode::InputObjectTypeDefinition(def)
            },
            AstNode::MutationDefinition(mut def) => {
                def.arguments = self.walk_list(def.arguments)?;
                def.directives = self.walk_list(def.directives)?;
                def.fields = self.walk_list(def.fields)?;
                AstNode::MutationDefinition(def)
            },
            AstNode::FilterDefinition(mut def) => {
                def.target = self.walk_required(def.target, NodeKind::FilterDefinition)?;
                def.conditions = self.walk_list(def.conditions)?;
                AstNode::FilterDefinition(def)
            },
            AstNode::OrderDefinition(mut def) => {
                def.target = self.walk_required(def.target, NodeKind::OrderDefinition)?;
                def.expressions = self.walk_list(def.expressions)?;
                AstNode::OrderDefinition(def)
            },
            AstNode::TypeExtension(mut ext) => {
                ext.definition = self.walk_boxed(ext.definition, NodeKind::TypeExtension)?;
                AstNode::TypeExtension(ext)
            },
            AstNode::FilterCondition(mut condition) => {
                condition.arguments = self.walk_list(condition.arguments)?;
                condition.value = self.walk_required(condition.value, NodeKind::FilterCondition)?;
                AstNode::FilterCondition(condition)
            },
            AstNode::OrderExpression(mut expression) => {
                expression.arguments = self.walk_list(expression.arguments)?;
                expression.value =
                    self.walk_required(expression.value, NodeKind::OrderExpression)?;
                AstNode::OrderExpression(expression)
            },
            AstNode::FieldDefinition(mut field) => {
                field.arguments = self.walk_list(field.arguments)?;
                field.field_type = self.walk_required(field.field_type, NodeKind::FieldDefinition)?;
                field.directives = self.walk_list(field.directives)?;
                AstNode::FieldDefinition(field)
            },
            AstNode::InputValueDefinition(mut arg) => {
                arg.value_type = self.walk_required(arg.value_type, NodeKind::InputValueDefinition)?;
                arg.default_value = self.walk_optional(arg.default_value)?;
                arg.directives = self.walk_list(arg.directives)?;
                AstNode::InputValueDefinition(arg)
            },
            AstNode::Directive(mut directive) => {
                directive.arguments = self.walk_list(directive.arguments)?;
                AstNode::Directive(directive)
            },
            AstNode::Argument(mut arg) => {
                arg.value = self.walk_required(arg.value, NodeKind::Argument)?;
                AstNode::Argument(arg)
            },
            AstNode::ListType(mut t) => {
                t.item_type = self.walk_boxed(t.item_type, NodeKind::ListType)?;
                AstNode::ListType(t)
            },
            AstNode::NonNullType(mut t) => {
                t.inner = self.walk_boxed(t.inner, NodeKind::NonNullType)?;
                AstNode::NonNullType(t)
            },
            AstNode::NodeConnectionType(mut t) => {
                t.target = self.walk_required(t.target, NodeKind::NodeConnectionType)?;
                t.edge_type = self.walk_optional(t.edge_type)?;
                AstNode::NodeConnectionType(t)
            },
            AstNode::ScalarConnectionType(mut t) => {
                t.target = self.walk_required(t.target, NodeKind::ScalarConnectionType)?;
                t.edge_type = self.walk_optional(t.edge_type)?;
                AstNode::ScalarConnectionType(t)
            },
            AstNode::ObjectConnectionType(mut t) => {
                t.target = self.walk_required(t.target, NodeKind::ObjectConnectionType)?;
                t.edge_type = self.walk_optional(t.edge_type)?;
                AstNode::ObjectConnectionType(t)
            },
            AstNode::EdgeType(mut t) => {
                t.target = self.walk_required(t.target, NodeKind::EdgeType)?;
                t.edge_type = self.walk_optional(t.edge_type)?;
                AstNode::EdgeType(t)
            },
            AstNode::ListValue(mut list) => {
                list.values = self.walk_list(list.values)?;
                AstNode::ListValue(list)
            },
            AstNode::ObjectValue(mut object) => {
                object.fields = self.walk_list(object.fields)?;
                AstNode::ObjectValue(object)
            },
            AstNode::ObjectField(mut field) => {
                field.value = self.walk_required(field.value, NodeKind::ObjectField)?;
                AstNode::ObjectField(field)
            },
            leaf @ (AstNode::NamedType(_)
            | AstNode::Variable(_)
            | AstNode::IntValue(_)
            | AstNode::FloatValue(_)
            | AstNode::StringValue(_)
            | AstNode::BooleanValue(_)
            | AstNode::NullValue(_)
            | AstNode::EnumValue(_)) => leaf,
        })
    }
}
