use crate::loc;
use crate::types::Argument;
use crate::types::Directive;
use crate::types::Field;
use serde::Deserialize;
use serde::Serialize;

/// A `mutation` definition: its input arguments and the shape it returns.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MutationType {
    pub(crate) arguments: Vec<Argument>,
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<Directive>,
    pub(crate) fields: Vec<Field>,
    pub(crate) name: String,
}
impl MutationType {
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
