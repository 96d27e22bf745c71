use crate::loc;
use crate::types::Argument;
use crate::types::Directive;
use serde::Deserialize;
use serde::Serialize;

/// An `input` definition. Its fields are recorded as arguments and never
/// carry connections or arguments of their own.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InputType {
    pub(crate) arguments: Vec<Argument>,
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<Directive>,
    pub(crate) name: String,
}
impl InputType {
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name == name)
    }

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

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
