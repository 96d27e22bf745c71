use crate::global_id;
use crate::types::Definition;
use crate::types::Field;
use crate::types::FieldKind;
use crate::types::ObjectType;
use crate::validate::Context;
use crate::validate::ContextError;
use crate::validate::ContextKind;
use crate::validate::Target;
use crate::validate::ValidationContext;
use crate::validate::ValidationResult;
use crate::validate::value_validator::Mode;
use crate::validate::value_validator::ValueValidator;
use serde_json::Value as JsonValue;

type Result<T> = std::result::Result<T, ContextError>;

/// Validates the payload of a new node of the target type.
///
/// Every non-connection field is checked against its declared type and
/// every required one must be present. An `id` property must be a global
/// id for the target type; when it is not, that is the only violation
/// reported.
pub fn validate_node<'s>(context: Context<'s>, object: &JsonValue) -> Result<ValidationResult<'s>> {
    const OPERATION: &str = "validate_node";
    expect_kind(&context, OPERATION, ContextKind::AddNode)?;
    let object_type = target_object_type(&context, OPERATION)?;
    let vctx = ValidationContext::new(format!("New \"{}\" node ", object_type.name()), "");

    let mut validator = ValueValidator::new(context.schema, Mode::Create);
    match object {
        JsonValue::Object(map) => {
            let id_type = match map.get("id") {
                None | Some(JsonValue::Null) => Ok(()),
                Some(id) => match id.as_str().and_then(global_id::type_from_global_id) {
                    Some(id_type) if id_type == object_type.name() => Ok(()),
                    other => Err(other),
                },
            };
            match id_type {
                Ok(()) => validator.validate_fields(object_type.fields(), map, &vctx, &["id"]),
                Err(Some(id_type)) => validator.report(
                    &vctx,
                    format_args!(
                        "has an id field for \"{id_type}\" type where an id for \"{}\" type is expected",
                        object_type.name(),
                    ),
                ),
                Err(None) => validator.report(&vctx, "has an invalid id field"),
            }
        },
        _ => validator.report(&vctx, "must be an object"),
    }
    finish(OPERATION, context, validator)
}

/// Validates an update expression for nodes of the target type.
///
/// Each property either replaces the field's value or applies exactly one
/// update operator to it. `id` cannot be updated.
pub fn validate_update<'s>(context: Context<'s>, update: &JsonValue) -> Result<ValidationResult<'s>> {
    const OPERATION: &str = "validate_update";
    expect_kind(&context, OPERATION, ContextKind::Update)?;
    let object_type = target_object_type(&context, OPERATION)?;
    let vctx = ValidationContext::new(format!("Update expression for \"{}\" type ", object_type.name()), "");

    let mut validator = ValueValidator::new(context.schema, Mode::Update);
    match update {
        JsonValue::Object(map) => {
            if map.contains_key("id") {
                validator.report(&vctx, "cannot update \"id\" field");
            }
            validator.validate_fields(object_type.fields(), map, &vctx, &["id"]);
        },
        _ => validator.report(&vctx, "must be an object"),
    }
    finish(OPERATION, context, validator)
}

/// Validates a filter expression.
///
/// The target is a type, interface or union, or a field whose element type
/// (the referenced object, list element or connection target) is filtered.
pub fn validate_filter<'s>(context: Context<'s>, filter: &JsonValue) -> Result<ValidationResult<'s>> {
    const OPERATION: &str = "validate_filter";
    expect_kind(&context, OPERATION, ContextKind::Filter)?;
    let type_name = filter_target(&context, OPERATION)?;
    let vctx = ValidationContext::new(format!("Filter expression for \"{type_name}\" type "), "");

    let mut validator = ValueValidator::new(context.schema, Mode::Filter);
    match filter {
        JsonValue::Object(_) => validator.validate_object_filter(type_name, filter, &vctx),
        _ => validator.report(&vctx, "must be an object"),
    }
    finish(OPERATION, context, validator)
}

/// Validates the properties of a new edge of the target connection field
/// against the connection's edge type.
pub fn validate_edge_props<'s>(context: Context<'s>, props: &JsonValue) -> Result<ValidationResult<'s>> {
    const OPERATION: &str = "validate_edge_props";
    expect_kind(&context, OPERATION, ContextKind::AddEdge)?;
    let (fields, suffix) = edge_fields(&context, OPERATION)?;
    let vctx = ValidationContext::new("Edge properties object ", suffix);

    let mut validator = ValueValidator::new(context.schema, Mode::Create);
    match props {
        JsonValue::Object(map) => validator.validate_fields(fields, map, &vctx, &[]),
        _ => validator.report(&vctx, "must be an object"),
    }
    finish(OPERATION, context, validator)
}

pub fn validate_edge_update<'s>(context: Context<'s>, update: &JsonValue) -> Result<ValidationResult<'s>> {
    const OPERATION: &str = "validate_edge_update";
    expect_kind(&context, OPERATION, ContextKind::Update)?;
    let (fields, suffix) = edge_fields(&context, OPERATION)?;
    let vctx = ValidationContext::new("Edge update expression ", suffix);

    let mut validator = ValueValidator::new(context.schema, Mode::Update);
    match update {
        JsonValue::Object(map) => validator.validate_fields(fields, map, &vctx, &[]),
        _ => validator.report(&vctx, "must be an object"),
    }
    finish(OPERATION, context, validator)
}

pub fn validate_edge_filter<'s>(context: Context<'s>, filter: &JsonValue) -> Result<ValidationResult<'s>> {
    const OPERATION: &str = "validate_edge_filter";
    expect_kind(&context, OPERATION, ContextKind::Filter)?;
    let (fields, suffix) = edge_fields(&context, OPERATION)?;
    let vctx = ValidationContext::new("Edge filter expression ", suffix);

    let mut validator = ValueValidator::new(context.schema, Mode::Filter);
    match filter {
        JsonValue::Object(map) => validator.validate_fields(fields, map, &vctx, &[]),
        _ => validator.report(&vctx, "must be an object"),
    }
    finish(OPERATION, context, validator)
}

// =============================================================================
// Target resolution
// =============================================================================

fn expect_kind(context: &Context<'_>, operation: &'static str, expected: ContextKind) -> Result<()> {
    if context.kind != expected {
        return Err(ContextError::WrongKind {
            operation,
            expected,
            found: context.kind,
        });
    }
    Ok(())
}

fn lookup<'s>(context: &Context<'s>, type_name: &str) -> Result<&'s Definition> {
    context
        .schema
        .get(type_name)
        .ok_or_else(|| ContextError::UnknownType(type_name.to_string()))
}

fn target_object_type<'s>(context: &Context<'s>, operation: &'static str) -> Result<&'s ObjectType> {
    match &context.target {
        Target::Type(type_name) => match lookup(context, type_name)? {
            Definition::Type(def) => Ok(def),
            other => Err(ContextError::UnsupportedTargetType {
                operation,
                type_name: type_name.to_string(),
                kind: other.kind_name(),
            }),
        },
        Target::Field {
            type_name,
            field_name,
        } => Err(ContextError::ExpectedTypeTarget {
            operation,
            type_name: type_name.to_string(),
            field_name: field_name.to_string(),
        }),
    }
}

/// The `type`/`interface` field named by a field target, along with the
/// name of its owner.
fn target_field<'s>(context: &Context<'s>, operation: &'static str) -> Result<(&'s str, &'s Field)> {
    let (type_name, field_name) = match &context.target {
        Target::Field {
            type_name,
            field_name,
        } => (type_name, field_name),
        Target::Type(type_name) => {
            return Err(ContextError::ExpectedFieldTarget {
                operation,
                type_name: type_name.to_string(),
            });
        },
    };

    let owner = lookup(context, type_name)?;
    let Some(fields) = owner.fields() else {
        return Err(ContextError::UnsupportedTargetType {
            operation,
            type_name: type_name.to_string(),
            kind: owner.kind_name(),
        });
    };
    let field = fields
        .iter()
        .find(|field| field.name() == field_name)
        .ok_or_else(|| ContextError::UnknownField {
            type_name: type_name.to_string(),
            field_name: field_name.to_string(),
        })?;
    Ok((owner.name(), field))
}

fn filter_target<'s>(context: &Context<'s>, operation: &'static str) -> Result<&'s str> {
    let type_name = match &context.target {
        Target::Type(type_name) => lookup(context, type_name)?.name(),
        Target::Field { .. } => {
            let (owner, field) = target_field(context, operation)?;
            match field.kind() {
                FieldKind::Object { type_name }
                | FieldKind::Node { type_name }
                | FieldKind::NodeList { type_name }
                | FieldKind::ObjectList {
                    type_name: Some(type_name),
                }
                | FieldKind::ObjectConnection { type_name, .. }
                | FieldKind::NodeConnection { type_name, .. } => type_name.as_str(),
                kind => {
                    return Err(ContextError::NotFilterable {
                        type_name: owner.to_string(),
                        field_name: field.name().to_string(),
                        kind: kind.label(),
                    });
                },
            }
        },
    };

    match lookup(context, type_name)? {
        Definition::Type(def) => Ok(def.name()),
        Definition::Interface(def) => Ok(def.name()),
        Definition::Union(def) => Ok(def.name()),
        other => Err(ContextError::UnsupportedTargetType {
            operation,
            type_name: type_name.to_string(),
            kind: other.kind_name(),
        }),
    }
}

/// The fields of the edge type of the targeted connection, and the message
/// suffix naming that connection.
fn edge_fields<'s>(context: &Context<'s>, operation: &'static str) -> Result<(&'s [Field], String)> {
    let (owner, field) = target_field(context, operation)?;
    if !field.is_connection() {
        return Err(ContextError::NotAConnection {
            type_name: owner.to_string(),
            field_name: field.name().to_string(),
            kind: field.kind().label(),
        });
    }
    let edge_type = field.edge_type().ok_or_else(|| ContextError::MissingEdgeType {
        type_name: owner.to_string(),
        field_name: field.name().to_string(),
    })?;

    let fields = match lookup(context, edge_type)? {
        Definition::Type(def) => def.fields(),
        Definition::Input(def) => def.arguments(),
        other => {
            return Err(ContextError::UnsupportedTargetType {
                operation,
                type_name: edge_type.to_string(),
                kind: other.kind_name(),
            });
        },
    };
    Ok((fields, format!(" (for \"{owner}.{}\" connection)", field.name())))
}

fn finish<'s>(
    operation: &'static str,
    context: Context<'s>,
    validator: ValueValidator<'s>,
) -> Result<ValidationResult<'s>> {
    let results = validator.into_results();
    log::trace!("{operation}: {} violation(s)", results.len());
    Ok(ValidationResult { context, results })
}
