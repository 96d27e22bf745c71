use crate::Schema;
use crate::types::Definition;
use serde_json::Number;
use serde_json::Value as JsonValue;

/// `true` for numbers without a fractional part.
pub(super) fn is_integral(number: &Number) -> bool {
    number.is_i64()
        || number.is_u64()
        || number.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
}

pub(super) fn is_non_negative_integer(value: &JsonValue) -> bool {
    match value {
        JsonValue::Number(number) => {
            is_integral(number) && number.as_f64().is_some_and(|f| f >= 0.0)
        },
        _ => false,
    }
}

/// Checks a plain (non-null) value against a scalar or enum type.
///
/// Built-in scalars check the JSON type (`Int` additionally requires an
/// integral number), enums require one of their values as a string and
/// custom scalars accept any string, number or boolean.
pub(super) fn is_valid_scalar(schema: &Schema, type_name: &str, value: &JsonValue) -> bool {
    match (type_name, value) {
        ("Int", JsonValue::Number(number)) => is_integral(number),
        ("Float", JsonValue::Number(_)) => true,
        ("ID" | "String", JsonValue::String(_)) => true,
        ("Boolean", JsonValue::Bool(_)) => true,
        ("Int" | "Float" | "ID" | "String" | "Boolean", _) => false,
        (_, value) => match schema.get(type_name) {
            Some(Definition::Enum(def)) => value.as_str().is_some_and(|val| def.has_value(val)),
            Some(Definition::Scalar(_)) => matches!(
                value,
                JsonValue::String(_) | JsonValue::Number(_) | JsonValue::Bool(_),
            ),
            _ => false,
        },
    }
}

/// Describes what [`is_valid_scalar()`] accepts for `type_name`, e.g.
/// "an integer", for use after "Expected" or "expects".
pub(super) fn scalar_expectation(schema: &Schema, type_name: &str) -> String {
    match type_name {
        "Int" => "an integer".to_string(),
        "Float" => "a number".to_string(),
        "ID" | "String" => "a string".to_string(),
        "Boolean" => "a boolean".to_string(),
        _ => match schema.get(type_name) {
            Some(Definition::Enum(def)) => format!("one of {}", quoted_list(def.values())),
            _ => "a string, number or boolean".to_string(),
        },
    }
}

/// `"A", "B", "C"`
pub(super) fn quoted_list(names: &[impl AsRef<str>]) -> String {
    names
        .iter()
        .map(|name| format!("\"{}\"", name.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}
