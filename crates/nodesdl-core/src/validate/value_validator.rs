use crate::Schema;
use crate::field_classifier::is_numeric_type_name;
use crate::global_id;
use crate::types::Definition;
use crate::types::Field;
use crate::types::FieldKind;
use crate::validate::ValidationContext;
use crate::validate::operators::ABSTRACT_FILTER_OPS;
use crate::validate::operators::ABSTRACT_NODE_FILTER_OPS;
use crate::validate::operators::NODE_FILTER_OPS;
use crate::validate::operators::NODE_UPDATE_OPS;
use crate::validate::operators::NUMERIC_UPDATE_OPS;
use crate::validate::operators::SCALAR_FILTER_OPS;
use crate::validate::operators::SCALAR_UPDATE_OPS;
use crate::validate::operators::STRING_FILTER_OPS;
use crate::validate::scalar_values::is_valid_scalar;
use crate::validate::scalar_values::quoted_list;
use crate::validate::scalar_values::scalar_expectation;
use serde_json::Map;
use serde_json::Value as JsonValue;
use std::fmt::Display;

pub(super) type JsonObject = Map<String, JsonValue>;

/// The grammar a value is checked against.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Mode {
    /// Plain values only; required fields must be present.
    Create,
    /// Plain values are equality tests; operators filter.
    Filter,
    /// Plain values replace; operators modify.
    Update,
}

/// What the elements of a list are.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum ListItems<'a> {
    NodeId(&'a str),
    Object(&'a str),
    Scalar(&'a str),
}

/// Walks a JSON value alongside the schema, collecting one message per
/// violation. Never stops at the first problem.
pub(super) struct ValueValidator<'s> {
    pub(super) mode: Mode,
    pub(super) results: Vec<String>,
    pub(super) schema: &'s Schema,
}
impl<'s> ValueValidator<'s> {
    pub fn new(schema: &'s Schema, mode: Mode) -> Self {
        Self {
            mode,
            results: vec![],
            schema,
        }
    }

    pub fn into_results(self) -> Vec<String> {
        self.results
    }

    // =========================================================================
    // Reporting
    // =========================================================================

    pub(super) fn report(&mut self, vctx: &ValidationContext, body: impl Display) {
        self.results.push(vctx.message(body));
    }

    pub(super) fn report_invalid_value(&mut self, vctx: &ValidationContext, detail: impl Display) {
        if vctx.is_root() {
            self.report(vctx, format_args!("has invalid value. {detail}"));
        } else {
            self.report(
                vctx,
                format_args!("has invalid \"{}\" field value. {detail}", vctx.path()),
            );
        }
    }

    pub(super) fn report_operand(&mut self, vctx: &ValidationContext, op: &str, expectation: impl Display) {
        self.report_invalid_value(vctx, format_args!("Operator \"{op}\" expects {expectation}"));
    }

    /// Runs `validate` with the grammar switched to `mode`.
    pub(super) fn with_mode(&mut self, mode: Mode, validate: impl FnOnce(&mut Self)) {
        let saved = std::mem::replace(&mut self.mode, mode);
        validate(self);
        self.mode = saved;
    }

    // =========================================================================
    // Objects
    // =========================================================================

    /// Validates the properties of `object` against `fields`. Keys listed
    /// in `ignored` are neither validated nor required.
    pub(super) fn validate_fields(
        &mut self,
        fields: &'s [Field],
        object: &JsonObject,
        vctx: &ValidationContext,
        ignored: &[&str],
    ) {
        for (key, value) in object {
            if ignored.contains(&key.as_str()) {
                continue;
            }
            let field_vctx = vctx.field(key);
            match fields.iter().find(|field| field.name() == key) {
                None => self.report(
                    &field_vctx,
                    format_args!("has unknown \"{}\" field", field_vctx.path()),
                ),
                Some(field) if field.is_connection() || field.is_edge() => self.report(
                    &field_vctx,
                    format_args!("cannot have a connection field \"{}\"", field_vctx.path()),
                ),
                Some(field) => self.validate_field_value(field, value, &field_vctx),
            }
        }

        if self.mode != Mode::Create {
            return;
        }
        for field in fields {
            if !field.is_required()
                || field.is_connection()
                || field.is_edge()
                || ignored.contains(&field.name())
            {
                continue;
            }
            if object.get(field.name()).is_none_or(JsonValue::is_null) {
                let field_vctx = vctx.field(field.name());
                self.report(
                    &field_vctx,
                    format_args!("is missing required \"{}\" field", field_vctx.path()),
                );
            }
        }
    }

    pub(super) fn validate_field_value(&mut self, field: &'s Field, value: &JsonValue, vctx: &ValidationContext) {
        if value.is_null() {
            if self.mode == Mode::Update && field.is_required() {
                self.report_invalid_value(vctx, "Required field can not be set to null");
            }
            return;
        }

        let is_required = field.is_required();
        match field.kind() {
            FieldKind::Scalar { type_name, .. } => {
                self.validate_scalar(type_name, is_required, value, vctx)
            },
            FieldKind::Node { type_name } => {
                self.validate_node_ref(type_name, is_required, value, vctx)
            },
            FieldKind::Object { type_name } => {
                self.validate_object_field(type_name, is_required, value, vctx)
            },
            FieldKind::ScalarList { type_name } => {
                self.validate_list(ListItems::Scalar(type_name), is_required, value, vctx)
            },
            FieldKind::NodeList { type_name } => {
                self.validate_list(ListItems::NodeId(type_name), is_required, value, vctx)
            },
            FieldKind::ObjectList {
                type_name: Some(type_name),
            } => self.validate_list(ListItems::Object(type_name), is_required, value, vctx),
            FieldKind::ObjectList { type_name: None } => self.report(
                vctx,
                format_args!("has \"{}\" field of unsupported type", vctx.path()),
            ),
            FieldKind::ScalarConnection { .. }
            | FieldKind::ObjectConnection { .. }
            | FieldKind::NodeConnection { .. }
            | FieldKind::Edge { .. } => self.report(
                vctx,
                format_args!("cannot have a connection field \"{}\"", vctx.path()),
            ),
        }
    }

    fn validate_object_field(
        &mut self,
        type_name: &'s str,
        is_required: bool,
        value: &JsonValue,
        vctx: &ValidationContext,
    ) {
        match self.mode {
            Mode::Create => self.validate_object_value(type_name, value, vctx),
            Mode::Filter => self.validate_object_filter(type_name, value, vctx),
            // A nested object is replaced as a whole, so it is checked like a
            // new value; `{clear: bool}` is the only operator.
            Mode::Update => match value.as_object().and_then(|map| self.clear_operand(type_name, map)) {
                Some(operand) => self.clear_op(is_required, operand, vctx),
                None => self.with_mode(Mode::Create, |validator| {
                    validator.validate_object_value(type_name, value, vctx)
                }),
            },
        }
    }

    /// The operand of `{clear: ...}`, unless the object type has a field
    /// called `clear` that the key could refer to instead.
    fn clear_operand<'v>(&self, type_name: &str, map: &'v JsonObject) -> Option<&'v JsonValue> {
        if map.len() != 1 {
            return None;
        }
        let has_clear_field = match self.schema.get(type_name) {
            Some(Definition::Type(def)) => def.field("clear").is_some(),
            Some(Definition::Interface(def)) => def.field("clear").is_some(),
            Some(Definition::Input(def)) => def.argument("clear").is_some(),
            _ => false,
        };
        if has_clear_field {
            return None;
        }
        map.get("clear")
    }

    /// Validates a complete object value of type `type_name`, resolving
    /// interfaces and unions through the `_type` discriminator.
    pub(super) fn validate_object_value(&mut self, type_name: &str, value: &JsonValue, vctx: &ValidationContext) {
        let JsonValue::Object(map) = value else {
            self.report_invalid_value(vctx, "Expected an object");
            return;
        };
        let Some(concrete_name) = self.resolve_concrete_type(type_name, map, vctx) else {
            return;
        };

        let schema = self.schema;
        match schema.get(concrete_name) {
            Some(Definition::Type(def)) => self.validate_fields(def.fields(), map, vctx, &["_type"]),
            Some(Definition::Input(def)) => {
                self.validate_fields(def.arguments(), map, vctx, &["_type"])
            },
            _ => self.report_unknown_type(concrete_name, vctx),
        }
    }

    fn resolve_concrete_type(
        &mut self,
        type_name: &str,
        map: &JsonObject,
        vctx: &ValidationContext,
    ) -> Option<&'s str> {
        let schema = self.schema;
        let declared = match schema.get(type_name) {
            Some(Definition::Type(def)) => Some(def.name()),
            Some(Definition::Input(def)) => Some(def.name()),
            Some(Definition::Interface(_)) | Some(Definition::Union(_)) => None,
            _ => {
                self.report_unknown_type(type_name, vctx);
                return None;
            },
        };

        if let Some(declared) = declared {
            return match map.get("_type") {
                None => Some(declared),
                Some(JsonValue::String(given)) if given == declared => Some(declared),
                Some(_) => {
                    self.report_invalid_discriminator(&[declared], vctx);
                    None
                },
            };
        }

        let possible = schema.possible_types(type_name).unwrap_or_default();
        match map.get("_type") {
            Some(JsonValue::String(given)) => {
                match possible.iter().find(|name| name.as_str() == given.as_str()) {
                    Some(name) => Some(name.as_str()),
                    None => {
                        self.report_invalid_discriminator(possible, vctx);
                        None
                    },
                }
            },
            Some(_) => {
                self.report_invalid_discriminator(possible, vctx);
                None
            },
            None if possible.len() == 1 => Some(possible[0].as_str()),
            None => {
                self.report(
                    vctx,
                    format_args!(
                        "requires \"_type\" property{}. Expected one of: {}",
                        for_field(vctx),
                        quoted_list(possible),
                    ),
                );
                None
            },
        }
    }

    fn report_invalid_discriminator(&mut self, possible: &[impl AsRef<str>], vctx: &ValidationContext) {
        self.report(
            vctx,
            format_args!(
                "has invalid \"_type\" value{}. Expected one of: {}",
                for_field(vctx),
                quoted_list(possible),
            ),
        );
    }

    fn report_unknown_type(&mut self, type_name: &str, vctx: &ValidationContext) {
        self.report(
            vctx,
            format_args!("has \"{}\" field of unknown type \"{type_name}\"", vctx.path()),
        );
    }

    /// Validates a filter sub-expression over values of type `type_name`.
    ///
    /// Interfaces accept the `type` and `exists` pseudo-operators next to
    /// their fields, unless a field of the same name shadows them. Unions
    /// accept only the pseudo-operators.
    pub(super) fn validate_object_filter(&mut self, type_name: &str, value: &JsonValue, vctx: &ValidationContext) {
        let JsonValue::Object(map) = value else {
            self.report_invalid_value(vctx, "Expected a filter object");
            return;
        };

        let schema = self.schema;
        match schema.get(type_name) {
            Some(Definition::Type(def)) => self.validate_fields(def.fields(), map, vctx, &[]),
            Some(Definition::Input(def)) => self.validate_fields(def.arguments(), map, vctx, &[]),
            Some(Definition::Interface(def)) => {
                let pseudo_ops: Vec<&str> = ABSTRACT_FILTER_OPS
                    .iter()
                    .copied()
                    .filter(|op| !def.fields().iter().any(|field| field.name() == *op))
                    .collect();
                self.abstract_type_ops(type_name, map, &pseudo_ops, vctx);
                self.validate_fields(def.fields(), map, vctx, &pseudo_ops);
            },
            Some(Definition::Union(_)) => {
                self.allowed_ops(map, ABSTRACT_FILTER_OPS, vctx);
                self.abstract_type_ops(type_name, map, ABSTRACT_FILTER_OPS, vctx);
            },
            _ => self.report_unknown_type(type_name, vctx),
        }
    }

    fn abstract_type_ops(
        &mut self,
        type_name: &str,
        map: &JsonObject,
        pseudo_ops: &[&str],
        vctx: &ValidationContext,
    ) {
        for (op, operand) in map {
            match op.as_str() {
                "type" if pseudo_ops.contains(&"type") => self.type_op(type_name, operand, vctx),
                "exists" if pseudo_ops.contains(&"exists") => self.bool_operand("exists", operand, vctx),
                _ => (),
            }
        }
    }

    // =========================================================================
    // Scalars and node references
    // =========================================================================

    pub(super) fn validate_scalar(
        &mut self,
        type_name: &str,
        is_required: bool,
        value: &JsonValue,
        vctx: &ValidationContext,
    ) {
        match (self.mode, value) {
            (Mode::Update, JsonValue::Object(ops)) => {
                let allowed = if is_numeric_type_name(type_name) {
                    NUMERIC_UPDATE_OPS
                } else {
                    SCALAR_UPDATE_OPS
                };
                if let Some((op, operand)) = self.single_op(ops, allowed, vctx) {
                    self.scalar_op(type_name, is_required, op, operand, vctx);
                }
            },
            (Mode::Filter, JsonValue::Object(ops)) => {
                let allowed = if type_name == "String" {
                    STRING_FILTER_OPS
                } else {
                    SCALAR_FILTER_OPS
                };
                for (op, operand) in self.filter_ops(ops, allowed, vctx) {
                    self.scalar_op(type_name, is_required, op, operand, vctx);
                }
            },
            _ => self.check_scalar(type_name, value, vctx),
        }
    }

    pub(super) fn check_scalar(&mut self, type_name: &str, value: &JsonValue, vctx: &ValidationContext) {
        if !is_valid_scalar(self.schema, type_name, value) {
            let expectation = scalar_expectation(self.schema, type_name);
            self.report_invalid_value(vctx, format_args!("Expected {expectation}"));
        }
    }

    pub(super) fn validate_node_ref(
        &mut self,
        type_name: &str,
        is_required: bool,
        value: &JsonValue,
        vctx: &ValidationContext,
    ) {
        match (self.mode, value) {
            (Mode::Update, JsonValue::Object(ops)) => {
                if let Some((_, operand)) = self.single_op(ops, NODE_UPDATE_OPS, vctx) {
                    self.clear_op(is_required, operand, vctx);
                }
            },
            (Mode::Filter, JsonValue::Object(ops)) => {
                let allowed = if self.is_abstract_type(type_name) {
                    ABSTRACT_NODE_FILTER_OPS
                } else {
                    NODE_FILTER_OPS
                };
                for (op, operand) in self.filter_ops(ops, allowed, vctx) {
                    match op {
                        "exists" => self.bool_operand(op, operand, vctx),
                        "type" => self.type_op(type_name, operand, vctx),
                        _ if operand.is_null() => (),
                        _ if !global_id::is_valid_node_id(self.schema, type_name, Some(operand)) => {
                            self.report_operand(vctx, op, format_args!("an id for \"{type_name}\""))
                        },
                        _ => (),
                    }
                }
            },
            _ => self.check_node_id(type_name, value, vctx),
        }
    }

    fn is_abstract_type(&self, type_name: &str) -> bool {
        matches!(
            self.schema.get(type_name),
            Some(Definition::Interface(_) | Definition::Union(_)),
        )
    }

    pub(super) fn check_node_id(&mut self, type_name: &str, value: &JsonValue, vctx: &ValidationContext) {
        if global_id::is_valid_node_id(self.schema, type_name, Some(value)) {
            return;
        }
        match value.as_str().and_then(global_id::type_from_global_id) {
            Some(id_type) => self.report_invalid_value(
                vctx,
                format_args!("Expected an id for \"{type_name}\", found an id for \"{id_type}\""),
            ),
            None => self.report_invalid_value(vctx, format_args!("Expected an id for \"{type_name}\"")),
        }
    }

    // =========================================================================
    // Lists
    // =========================================================================

    fn validate_list(
        &mut self,
        items: ListItems<'s>,
        is_required: bool,
        value: &JsonValue,
        vctx: &ValidationContext,
    ) {
        match (self.mode, value) {
            (Mode::Filter, JsonValue::Array(_)) if matches!(items, ListItems::Object(_)) => {
                self.report_invalid_value(vctx, "Expected a filter object")
            },
            (_, JsonValue::Array(elements)) => self.validate_list_elements(items, elements, vctx),
            (Mode::Update, JsonValue::Object(ops)) => self.list_update_op(items, is_required, ops, vctx),
            (Mode::Filter, JsonValue::Object(ops)) => self.list_filter_op(items, ops, vctx),
            _ => self.report_invalid_value(vctx, "Expected an array"),
        }
    }

    pub(super) fn validate_list_elements(
        &mut self,
        items: ListItems<'_>,
        elements: &[JsonValue],
        vctx: &ValidationContext,
    ) {
        for (idx, element) in elements.iter().enumerate() {
            self.validate_list_element(items, element, &vctx.index(idx));
        }
    }

    /// Validates a single complete list element. Objects are checked as
    /// new values whatever the current grammar.
    pub(super) fn validate_list_element(
        &mut self,
        items: ListItems<'_>,
        element: &JsonValue,
        vctx: &ValidationContext,
    ) {
        if element.is_null() {
            self.report_invalid_value(vctx, "List elements can not be null");
            return;
        }
        match items {
            ListItems::NodeId(type_name) => self.check_node_id(type_name, element, vctx),
            ListItems::Scalar(type_name) => self.check_scalar(type_name, element, vctx),
            ListItems::Object(type_name) => self.with_mode(Mode::Create, |validator| {
                validator.validate_object_value(type_name, element, vctx)
            }),
        }
    }

    /// Validates a filter over single list elements (the operand of
    /// `some`/`every`/`none`, or of `delete` in an update).
    pub(super) fn validate_element_filter(
        &mut self,
        items: ListItems<'_>,
        value: &JsonValue,
        vctx: &ValidationContext,
    ) {
        self.with_mode(Mode::Filter, |validator| match items {
            ListItems::NodeId(type_name) => validator.validate_node_ref(type_name, false, value, vctx),
            ListItems::Scalar(type_name) => validator.validate_scalar(type_name, false, value, vctx),
            ListItems::Object(type_name) => validator.validate_object_filter(type_name, value, vctx),
        });
    }
}

/// ` for "path" field`, or nothing at the root.
pub(super) fn for_field(vctx: &ValidationContext) -> String {
    if vctx.is_root() {
        String::new()
    } else {
        format!(" for \"{}\" field", vctx.path())
    }
}
