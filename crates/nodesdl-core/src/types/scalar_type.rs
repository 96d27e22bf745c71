use crate::loc;
use crate::types::Directive;
use serde::Deserialize;
use serde::Serialize;

/// A custom `scalar` declaration. Built-in scalars (`ID`, `String`, `Int`,
/// `Float`, `Boolean`) have no definition in the schema.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ScalarType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<Directive>,
    pub(crate) name: String,
}
impl ScalarType {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
