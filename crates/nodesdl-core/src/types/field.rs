use crate::loc;
use crate::types::Directive;
use crate::types::FieldKind;
use nodesdl_parser::ast;
use serde::Deserialize;
use serde::Serialize;

/// Arguments (of fields, mutations and `input` definitions) share the
/// shape of fields.
pub type Argument = Field;

/// A field of a `type`, `interface` or `mutation`, or an argument.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Field {
    pub(crate) arguments: Vec<Argument>,
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) default_value: Option<ast::Value>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<Directive>,
    pub(crate) is_required: bool,
    pub(crate) kind: FieldKind,
    pub(crate) name: String,
}
impl Field {
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    /// The declared default value. Only arguments carry one.
    pub fn default_value(&self) -> Option<&ast::Value> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn edge_type(&self) -> Option<&str> {
        self.kind.edge_type()
    }

    pub fn has_arguments(&self) -> bool {
        !self.arguments.is_empty()
    }

    /// `true` when the declared type is wrapped in `!`.
    pub fn is_required(&self) -> bool {
        self.is_required
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn related_field(&self) -> Option<&str> {
        self.kind.related_field()
    }

    /// The referenced type name; `None` only for unsupported nested lists.
    pub fn type_name(&self) -> Option<&str> {
        self.kind.type_name()
    }

    pub fn is_scalar(&self) -> bool {
        self.kind.is_scalar()
    }

    pub fn is_numeric(&self) -> bool {
        self.kind.is_numeric()
    }

    pub fn is_object(&self) -> bool {
        self.kind.is_object()
    }

    pub fn is_node(&self) -> bool {
        self.kind.is_node()
    }

    pub fn is_list(&self) -> bool {
        self.kind.is_list()
    }

    pub fn is_connection(&self) -> bool {
        self.kind.is_connection()
    }

    pub fn is_edge(&self) -> bool {
        self.kind.is_edge()
    }

    pub(crate) fn with_kind(&self, kind: FieldKind) -> Self {
        Self {
            kind,
            ..self.clone()
        }
    }
}
