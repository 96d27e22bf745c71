use crate::loc;
use crate::types::Directive;
use crate::types::Field;
use serde::Deserialize;
use serde::Serialize;

/// An `interface` definition, or the built-in `Node` interface.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InterfaceType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<Directive>,
    pub(crate) every_type_implements_node: bool,
    pub(crate) fields: Vec<Field>,
    pub(crate) implementations: Vec<String>,
    pub(crate) name: String,
    pub(crate) no_type_implements_node: bool,
}
impl InterfaceType {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// `true` when there is at least one implementation and all of them
    /// implement `Node`.
    pub fn every_type_implements_node(&self) -> bool {
        self.every_type_implements_node
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Names of the types that declare `implements <this interface>`.
    pub fn implementations(&self) -> &[String] {
        &self.implementations
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// `true` when no implementation implements `Node` (including when
    /// there are no implementations at all).
    pub fn no_type_implements_node(&self) -> bool {
        self.no_type_implements_node
    }
}
