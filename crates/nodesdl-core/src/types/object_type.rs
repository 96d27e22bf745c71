use crate::loc;
use crate::types::Directive;
use crate::types::Field;
use serde::Deserialize;
use serde::Serialize;

/// A `type` definition.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ObjectType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<Directive>,
    pub(crate) fields: Vec<Field>,
    pub(crate) implements_interfaces: Vec<String>,
    pub(crate) implements_node: bool,
    pub(crate) member_of_unions: Vec<String>,
    pub(crate) name: String,
}
impl ObjectType {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Interface names from the `implements` clause, in declaration order
    /// (extensions appended). Includes `Node` when declared.
    pub fn implements_interfaces(&self) -> &[String] {
        &self.implements_interfaces
    }

    pub fn implements_node(&self) -> bool {
        self.implements_node
    }

    /// Unions that list this type as a member.
    pub fn member_of_unions(&self) -> &[String] {
        &self.member_of_unions
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
