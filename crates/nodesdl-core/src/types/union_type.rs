use crate::loc;
use crate::types::Directive;
use serde::Deserialize;
use serde::Serialize;

/// A `union` definition.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UnionType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<Directive>,
    pub(crate) every_type_implements_node: bool,
    pub(crate) name: String,
    pub(crate) no_type_implements_node: bool,
    pub(crate) type_names: Vec<String>,
}
impl UnionType {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn every_type_implements_node(&self) -> bool {
        self.every_type_implements_node
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn no_type_implements_node(&self) -> bool {
        self.no_type_implements_node
    }

    /// Member type names in declaration order.
    pub fn type_names(&self) -> &[String] {
        &self.type_names
    }
}
