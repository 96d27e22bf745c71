use crate::types::Definition;
use crate::validate::ValidationContext;
use crate::validate::scalar_values::is_integral;
use crate::validate::scalar_values::is_non_negative_integer;
use crate::validate::scalar_values::is_valid_scalar;
use crate::validate::scalar_values::quoted_list;
use crate::validate::scalar_values::scalar_expectation;
use crate::validate::value_validator::JsonObject;
use crate::validate::value_validator::ListItems;
use crate::validate::value_validator::ValueValidator;
use crate::validate::value_validator::for_field;
use regex::Regex;
use serde_json::Value as JsonValue;

pub(super) const NUMERIC_UPDATE_OPS: &[&str] = &["clear", "add", "sub", "mul", "div", "min", "max"];
pub(super) const SCALAR_UPDATE_OPS: &[&str] = &["clear"];
pub(super) const NODE_UPDATE_OPS: &[&str] = &["clear"];

pub(super) const SCALAR_FILTER_OPS: &[&str] = &["eq", "ne", "lt", "gt", "lte", "gte", "exists"];
pub(super) const STRING_FILTER_OPS: &[&str] =
    &["eq", "ne", "lt", "gt", "lte", "gte", "exists", "matches"];
pub(super) const NODE_FILTER_OPS: &[&str] = &["eq", "ne", "exists"];
pub(super) const ABSTRACT_FILTER_OPS: &[&str] = &["type", "exists"];
pub(super) const ABSTRACT_NODE_FILTER_OPS: &[&str] = &["eq", "ne", "exists", "type"];

const LIST_UPDATE_OPS: &[&str] = &["insert", "delete", "pop", "clear"];
const LIST_INSERT_MODIFIERS: &[&str] = &["at", "ascending", "descending", "keepFirst", "keepLast"];
const LIST_POSITION_MODIFIERS: &[&str] = &["at", "ascending", "descending"];
const LIST_TRIM_MODIFIERS: &[&str] = &["keepFirst", "keepLast"];

const LIST_FILTER_OPS: &[&str] = &["eq", "ne", "exists", "length", "empty", "some", "every", "none"];
const OBJECT_LIST_FILTER_OPS: &[&str] = &["exists", "length", "empty", "some", "every", "none"];

// Operator primitives shared by the scalar, node and list handlers.
impl ValueValidator<'_> {
    /// Reports every key of `ops` that is not in `allowed`. Returns whether
    /// all keys were allowed.
    pub(super) fn allowed_ops(&mut self, ops: &JsonObject, allowed: &[&str], vctx: &ValidationContext) -> bool {
        let mut all_allowed = true;
        for op in ops.keys() {
            if !allowed.contains(&op.as_str()) {
                self.report(
                    vctx,
                    format_args!(
                        "has invalid \"{op}\" operator{}. Allowed operators: {}",
                        for_field(vctx),
                        allowed.join(", "),
                    ),
                );
                all_allowed = false;
            }
        }
        all_allowed
    }

    /// Reports when more than one of the operators in `group` is used.
    /// Returns whether at most one was.
    pub(super) fn at_most_one_op(&mut self, ops: &JsonObject, group: &[&str], vctx: &ValidationContext) -> bool {
        let used: Vec<&str> = group.iter().copied().filter(|op| ops.contains_key(*op)).collect();
        if used.len() <= 1 {
            return true;
        }
        self.report(
            vctx,
            format_args!(
                "has conflicting operators{}: only one of {} can be used",
                for_field(vctx),
                quoted_list(&used),
            ),
        );
        false
    }

    fn report_no_operator(&mut self, vctx: &ValidationContext) {
        self.report(vctx, format_args!("has no operator{}", for_field(vctx)));
    }

    /// The one operator an update expression must consist of.
    pub(super) fn single_op<'v>(
        &mut self,
        ops: &'v JsonObject,
        allowed: &[&str],
        vctx: &ValidationContext,
    ) -> Option<(&'v str, &'v JsonValue)> {
        let all_allowed = self.allowed_ops(ops, allowed, vctx);
        if ops.is_empty() {
            self.report_no_operator(vctx);
            return None;
        }
        if !all_allowed || !self.at_most_one_op(ops, allowed, vctx) {
            return None;
        }
        ops.iter().next().map(|(op, operand)| (op.as_str(), operand))
    }

    /// The allowed operators of a filter expression; several may be
    /// combined.
    pub(super) fn filter_ops<'v>(
        &mut self,
        ops: &'v JsonObject,
        allowed: &[&str],
        vctx: &ValidationContext,
    ) -> Vec<(&'v str, &'v JsonValue)> {
        self.allowed_ops(ops, allowed, vctx);
        if ops.is_empty() {
            self.report_no_operator(vctx);
        }
        ops.iter()
            .filter(|(op, _)| allowed.contains(&op.as_str()))
            .map(|(op, operand)| (op.as_str(), operand))
            .collect()
    }

    pub(super) fn bool_operand(&mut self, op: &str, operand: &JsonValue, vctx: &ValidationContext) {
        if !operand.is_boolean() {
            self.report_operand(vctx, op, "a boolean");
        }
    }

    pub(super) fn clear_op(&mut self, is_required: bool, operand: &JsonValue, vctx: &ValidationContext) {
        match operand {
            JsonValue::Bool(true) if is_required => {
                self.report_invalid_value(vctx, "Clear operator can not be applied to a required field")
            },
            JsonValue::Bool(_) => (),
            _ => self.report_operand(vctx, "clear", "a boolean"),
        }
    }

    /// A single scalar update or filter operator.
    pub(super) fn scalar_op(
        &mut self,
        type_name: &str,
        is_required: bool,
        op: &str,
        operand: &JsonValue,
        vctx: &ValidationContext,
    ) {
        match op {
            "clear" => self.clear_op(is_required, operand, vctx),
            "exists" => self.bool_operand(op, operand, vctx),
            "matches" => {
                if !operand.as_str().is_some_and(|pattern| Regex::new(pattern).is_ok()) {
                    self.report_operand(vctx, op, "a valid regular expression");
                }
            },
            "eq" | "ne" if operand.is_null() => (),
            _ if !is_valid_scalar(self.schema, type_name, operand) => {
                let expectation = scalar_expectation(self.schema, type_name);
                self.report_operand(vctx, op, expectation);
            },
            "div" if operand.as_f64() == Some(0.0) => {
                self.report_invalid_value(vctx, "Division by zero is not allowed")
            },
            _ => (),
        }
    }

    /// `type` filters an interface or union value by its concrete type: one
    /// possible type name or a non-empty list of them.
    pub(super) fn type_op(&mut self, type_name: &str, operand: &JsonValue, vctx: &ValidationContext) {
        let possible = self.schema.possible_types(type_name).unwrap_or_default();
        let is_possible = |name: &JsonValue| {
            name.as_str()
                .is_some_and(|name| possible.iter().any(|candidate| candidate == name))
        };
        let is_valid = match operand {
            JsonValue::String(_) => is_possible(operand),
            JsonValue::Array(names) => !names.is_empty() && names.iter().all(is_possible),
            _ => false,
        };
        if !is_valid {
            self.report_operand(
                vctx,
                "type",
                format_args!("one of {} or a list of them", quoted_list(possible)),
            );
        }
    }

    // =========================================================================
    // Lists
    // =========================================================================

    /// An update expression on a list field: exactly one of `insert`,
    /// `delete`, `pop` and `clear`, where `insert` may be combined with one
    /// positioning modifier and one trimming modifier.
    pub(super) fn list_update_op(
        &mut self,
        items: ListItems<'_>,
        is_required: bool,
        ops: &JsonObject,
        vctx: &ValidationContext,
    ) {
        let allowed: Vec<&str> = LIST_UPDATE_OPS.iter().chain(LIST_INSERT_MODIFIERS).copied().collect();
        self.allowed_ops(ops, &allowed, vctx);
        if !LIST_UPDATE_OPS.iter().any(|op| ops.contains_key(*op)) {
            self.report_no_operator(vctx);
        }
        self.at_most_one_op(ops, LIST_UPDATE_OPS, vctx);
        self.at_most_one_op(ops, LIST_POSITION_MODIFIERS, vctx);
        self.at_most_one_op(ops, LIST_TRIM_MODIFIERS, vctx);

        let is_insert = ops.contains_key("insert");
        for (op, operand) in ops {
            let op = op.as_str();
            if LIST_INSERT_MODIFIERS.contains(&op) && !is_insert {
                self.report(
                    vctx,
                    format_args!("has \"{op}\" operator without \"insert\"{}", for_field(vctx)),
                );
                continue;
            }
            match op {
                "clear" => self.clear_op(is_required, operand, vctx),
                "pop" => {
                    if !matches!(operand.as_str(), Some("first" | "last")) {
                        self.report_operand(vctx, op, "\"first\" or \"last\"");
                    }
                },
                "insert" | "delete" => self.list_elements_op(items, op, operand, vctx),
                "at" => {
                    let is_index = match operand {
                        JsonValue::Number(number) => is_integral(number),
                        _ => false,
                    };
                    if !is_index {
                        self.report_operand(vctx, op, "an integer");
                    }
                },
                "keepFirst" | "keepLast" => {
                    if !is_non_negative_integer(operand) {
                        self.report_operand(vctx, op, "a non-negative integer");
                    }
                },
                "ascending" | "descending" => self.sort_operand(items, op, operand, vctx),
                _ => (),
            }
        }
    }

    /// The operand of `insert`/`delete`: a list of elements, a single
    /// element, or (for `delete`) a filter over elements.
    fn list_elements_op(&mut self, items: ListItems<'_>, op: &str, operand: &JsonValue, vctx: &ValidationContext) {
        match (op, operand) {
            (_, JsonValue::Array(elements)) => self.validate_list_elements(items, elements, vctx),
            ("delete", JsonValue::Object(_)) => self.validate_element_filter(items, operand, vctx),
            _ => self.validate_list_element(items, operand, vctx),
        }
    }

    /// Scalar and id elements sort by value (`true` or `false`); object
    /// elements sort by one of their scalar fields.
    fn sort_operand(&mut self, items: ListItems<'_>, op: &str, operand: &JsonValue, vctx: &ValidationContext) {
        let type_name = match items {
            ListItems::NodeId(_) | ListItems::Scalar(_) => {
                self.bool_operand(op, operand, vctx);
                return;
            },
            ListItems::Object(type_name) => type_name,
        };

        let schema = self.schema;
        let fields = match schema.get(type_name) {
            Some(Definition::Type(def)) => def.fields(),
            Some(Definition::Input(def)) => def.arguments(),
            _ => {
                self.report_invalid_value(
                    vctx,
                    format_args!("Operator \"{op}\" can not be used with \"{type_name}\" elements"),
                );
                return;
            },
        };
        let is_scalar_field = operand.as_str().is_some_and(|name| {
            fields.iter().any(|field| field.name() == name && field.is_scalar())
        });
        if !is_scalar_field {
            self.report_operand(
                vctx,
                op,
                format_args!("the name of a scalar field of \"{type_name}\""),
            );
        }
    }

    /// A filter expression on a list field.
    pub(super) fn list_filter_op(&mut self, items: ListItems<'_>, ops: &JsonObject, vctx: &ValidationContext) {
        let allowed = match items {
            ListItems::Object(_) => OBJECT_LIST_FILTER_OPS,
            ListItems::NodeId(_) | ListItems::Scalar(_) => LIST_FILTER_OPS,
        };
        for (op, operand) in self.filter_ops(ops, allowed, vctx) {
            match (op, operand) {
                ("eq" | "ne", JsonValue::Null) => (),
                ("eq" | "ne", JsonValue::Array(elements)) => {
                    self.validate_list_elements(items, elements, vctx)
                },
                ("eq" | "ne", _) => self.report_operand(vctx, op, "an array"),
                ("exists" | "empty", _) => self.bool_operand(op, operand, vctx),
                ("length", _) => {
                    if !is_non_negative_integer(operand) {
                        self.report_operand(vctx, op, "a non-negative integer");
                    }
                },
                (_, JsonValue::Null) => self.report_operand(vctx, op, "an element filter"),
                _ => self.validate_element_filter(items, operand, vctx),
            }
        }
    }
}
