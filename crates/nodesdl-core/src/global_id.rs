//! Global ids: opaque strings that identify a `Node` instance and encode
//! the name of its type.
//!
//! A global id is 24 lowercase hex characters (a random 12-byte instance
//! id) followed by the type name, e.g. `5f1c0a3e9b7d4e2a1c3b5d7fUser`.

use crate::types::Definition;
use crate::Schema;
use rand::RngCore;
use regex::Regex;
use serde_json::Value as JsonValue;
use std::sync::OnceLock;
use thiserror::Error;

const INSTANCE_ID_HEX_LEN: usize = 24;

fn global_id_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new("^[0-9a-f]{24}[_A-Za-z][_0-9A-Za-z]*$").expect("global id pattern is valid")
    })
}

fn type_name_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new("^[_A-Za-z][_0-9A-Za-z]*$").expect("type name pattern is valid"))
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error("`{0}` is not a valid type name")]
pub struct InvalidTypeNameError(pub String);

pub fn is_global_id(value: &str) -> bool {
    global_id_regex().is_match(value)
}

/// Mints a fresh global id for an instance of `type_name`.
pub fn new_global_id(type_name: &str) -> Result<String, InvalidTypeNameError> {
    if !type_name_regex().is_match(type_name) {
        return Err(InvalidTypeNameError(type_name.to_string()));
    }
    let mut instance_id = [0u8; INSTANCE_ID_HEX_LEN / 2];
    rand::thread_rng().fill_bytes(&mut instance_id);
    Ok(format!("{}{type_name}", hex::encode(instance_id)))
}

/// The type name encoded in `id`, or `None` if `id` is not a global id.
pub fn type_from_global_id(id: &str) -> Option<&str> {
    if !is_global_id(id) {
        return None;
    }
    Some(&id[INSTANCE_ID_HEX_LEN..])
}

/// Checks that `id` may refer to a value of type `type_name`:
///
/// - for a `type`, the id's encoded type must be exactly `type_name`;
/// - for an `interface`, it must be one of its implementations;
/// - for a `union`, it must be one of its members.
///
/// An absent or `null` id is always valid. Anything other than a global-id
/// string is not.
pub fn is_valid_node_id(schema: &Schema, type_name: &str, id: Option<&JsonValue>) -> bool {
    let id = match id {
        None | Some(JsonValue::Null) => return true,
        Some(JsonValue::String(id)) => id,
        Some(_) => return false,
    };
    let Some(id_type) = type_from_global_id(id) else {
        return false;
    };

    match schema.get(type_name) {
        Some(Definition::Type(_)) => id_type == type_name,
        Some(Definition::Interface(def)) => def.implementations().iter().any(|name| name == id_type),
        Some(Definition::Union(def)) => def.type_names().iter().any(|name| name == id_type),
        _ => false,
    }
}
