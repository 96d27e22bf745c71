use crate::loc;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::FilterType;
use crate::types::InputType;
use crate::types::InterfaceType;
use crate::types::MutationType;
use crate::types::ObjectType;
use crate::types::OrderType;
use crate::types::ScalarType;
use crate::types::UnionType;
use serde::Deserialize;
use serde::Serialize;

/// A named entry in a [`Schema`](crate::Schema).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Definition {
    Enum(EnumType),
    Filter(FilterType),
    Input(InputType),
    Interface(InterfaceType),
    Mutation(MutationType),
    Order(OrderType),
    Scalar(ScalarType),
    Type(ObjectType),
    Union(UnionType),
}
impl Definition {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        match self {
            Definition::Enum(def) => &def.def_location,
            Definition::Filter(def) => &def.def_location,
            Definition::Input(def) => &def.def_location,
            Definition::Interface(def) => &def.def_location,
            Definition::Mutation(def) => &def.def_location,
            Definition::Order(def) => &def.def_location,
            Definition::Scalar(def) => &def.def_location,
            Definition::Type(def) => &def.def_location,
            Definition::Union(def) => &def.def_location,
        }
    }

    /// Definition-level directives. Filters and orders have none.
    pub fn directives(&self) -> &[Directive] {
        match self {
            Definition::Enum(def) => &def.directives,
            Definition::Input(def) => &def.directives,
            Definition::Interface(def) => &def.directives,
            Definition::Mutation(def) => &def.directives,
            Definition::Scalar(def) => &def.directives,
            Definition::Type(def) => &def.directives,
            Definition::Union(def) => &def.directives,
            Definition::Filter(_) | Definition::Order(_) => &[],
        }
    }

    /// Fields of a `type` or `interface`.
    pub fn fields(&self) -> Option<&[Field]> {
        match self {
            Definition::Interface(def) => Some(&def.fields),
            Definition::Type(def) => Some(&def.fields),
            _ => None,
        }
    }

    /// A lowercase name for the kind of definition, matching its SDL
    /// keyword.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Definition::Enum(_) => "enum",
            Definition::Filter(_) => "filter",
            Definition::Input(_) => "input",
            Definition::Interface(_) => "interface",
            Definition::Mutation(_) => "mutation",
            Definition::Order(_) => "order",
            Definition::Scalar(_) => "scalar",
            Definition::Type(_) => "type",
            Definition::Union(_) => "union",
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Definition::Enum(def) => &def.name,
            Definition::Filter(def) => &def.name,
            Definition::Input(def) => &def.name,
            Definition::Interface(def) => &def.name,
            Definition::Mutation(def) => &def.name,
            Definition::Order(def) => &def.name,
            Definition::Scalar(def) => &def.name,
            Definition::Type(def) => &def.name,
            Definition::Union(def) => &def.name,
        }
    }
}
