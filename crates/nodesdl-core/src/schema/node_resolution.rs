use crate::field_classifier::resolve_node_reference;
use crate::schema::definition_pass::UnresolvedSchema;
use crate::schema::Schema;
use crate::types::Definition;
use crate::types::Field;
use crate::types::FieldKind;
use crate::types::FilterType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::OrderType;
use indexmap::IndexMap;

/// The second analysis pass.
///
/// Builds the final schema from the unresolved one without touching it:
/// every `type`/`interface` field and every filter/order target is
/// re-derived against the complete symbol table, and each type receives its
/// union memberships.
pub(super) fn resolve(unresolved: UnresolvedSchema) -> Schema {
    let UnresolvedSchema {
        definitions,
        union_memberships,
    } = unresolved;

    let is_node_type = |name: &str| match definitions.get(name) {
        Some(Definition::Type(def)) => def.implements_node,
        Some(Definition::Interface(def)) => def.every_type_implements_node,
        Some(Definition::Union(def)) => def.every_type_implements_node,
        _ => false,
    };
    let resolve_fields = |fields: &[Field]| -> Vec<Field> {
        fields
            .iter()
            .map(|field| field.with_kind(resolve_node_reference(&field.kind, &is_node_type)))
            .collect()
    };

    let mut resolved: IndexMap<String, Definition> = IndexMap::with_capacity(definitions.len());
    for (name, def) in &definitions {
        let resolved_def = match def {
            Definition::Type(def) => Definition::Type(ObjectType {
                fields: resolve_fields(&def.fields),
                member_of_unions: union_memberships.get(name).cloned().unwrap_or_default(),
                ..def.clone()
            }),
            Definition::Interface(def) => Definition::Interface(InterfaceType {
                fields: resolve_fields(&def.fields),
                ..def.clone()
            }),
            Definition::Filter(def) => Definition::Filter(FilterType {
                target: resolve_node_reference(&def.target, &is_node_type),
                ..def.clone()
            }),
            Definition::Order(def) => Definition::Order(OrderType {
                target: resolve_node_reference(&def.target, &is_node_type),
                ..def.clone()
            }),
            other => other.clone(),
        };
        resolved.insert(name.to_string(), resolved_def);
    }

    let node_field_count = resolved
        .values()
        .filter_map(Definition::fields)
        .flatten()
        .filter(|field| matches!(field.kind(), FieldKind::Node { .. } | FieldKind::NodeList { .. }))
        .count();
    log::debug!("Pass 2: {node_field_count} field(s) reference Node types");

    Schema {
        definitions: resolved,
    }
}
