use crate::schema::SchemaBuilder;
use crate::types::Definition;
use crate::types::DirectiveRef;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::FilterType;
use crate::types::InputType;
use crate::types::InterfaceType;
use crate::types::MutationType;
use crate::types::ObjectType;
use crate::types::OrderType;
use crate::types::UnionType;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

/// The name of the built-in interface that marks globally identifiable
/// types.
pub const NODE_INTERFACE_NAME: &str = "Node";

/// Scalars every schema understands without a `scalar` declaration.
pub const BUILTIN_SCALAR_NAMES: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];

/// A fully analyzed, immutable schema: a map from unique name to
/// [`Definition`].
///
/// Filters and orders are keyed by their synthesized names
/// (`Filter#[User]`, `Order#NodeConnection(User)`). Iteration follows
/// analysis order.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Schema {
    pub(crate) definitions: IndexMap<String, Definition>,
}
impl Schema {
    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Returns every definition, keyed by name.
    pub fn definitions(&self) -> &IndexMap<String, Definition> {
        &self.definitions
    }

    /// Finds every use of the directive called `name` (without the `@`),
    /// on definitions, on fields and on arguments.
    ///
    /// Definition-level uses come before the uses on that definition's
    /// fields and arguments. Argument-level uses are reported with the name
    /// of the argument as `field_name`.
    pub fn directives_named(&self, name: &str) -> Vec<DirectiveRef<'_>> {
        let mut found = vec![];
        for def in self.definitions.values() {
            let type_name = def.name();
            for directive in def.directives().iter().filter(|d| d.name() == name) {
                found.push(DirectiveRef {
                    directive,
                    field_name: None,
                    type_name,
                });
            }

            let fields: &[Field] = match def {
                Definition::Type(def) => &def.fields,
                Definition::Interface(def) => &def.fields,
                Definition::Input(def) => &def.arguments,
                Definition::Mutation(def) => &def.arguments,
                _ => &[],
            };
            for field in fields {
                for directive in field.directives().iter().filter(|d| d.name() == name) {
                    found.push(DirectiveRef {
                        directive,
                        field_name: Some(field.name()),
                        type_name,
                    });
                }
            }
        }
        found
    }

    pub fn enum_type(&self, name: &str) -> Option<&EnumType> {
        match self.definitions.get(name) {
            Some(Definition::Enum(def)) => Some(def),
            _ => None,
        }
    }

    /// Looks up the `filter on <target>` definition, where `target` is the
    /// printed target type such as `[User]`.
    pub fn filter_for(&self, target: &str) -> Option<&FilterType> {
        match self.definitions.get(&format!("Filter#{target}")) {
            Some(Definition::Filter(def)) => Some(def),
            _ => None,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Definition> {
        self.definitions.get(name)
    }

    pub fn input(&self, name: &str) -> Option<&InputType> {
        match self.definitions.get(name) {
            Some(Definition::Input(def)) => Some(def),
            _ => None,
        }
    }

    pub fn interface(&self, name: &str) -> Option<&InterfaceType> {
        match self.definitions.get(name) {
            Some(Definition::Interface(def)) => Some(def),
            _ => None,
        }
    }

    /// `true` for built-in scalars, custom scalars and enums.
    pub fn is_scalar_type(&self, name: &str) -> bool {
        BUILTIN_SCALAR_NAMES.contains(&name)
            || matches!(
                self.definitions.get(name),
                Some(Definition::Scalar(_)) | Some(Definition::Enum(_)),
            )
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// The number of definitions, including the built-in `Node` interface.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn mutation(&self, name: &str) -> Option<&MutationType> {
        match self.definitions.get(name) {
            Some(Definition::Mutation(def)) => Some(def),
            _ => None,
        }
    }

    /// The built-in `Node` interface. Always present in a built schema.
    pub fn node_interface(&self) -> Option<&InterfaceType> {
        self.interface(NODE_INTERFACE_NAME)
    }

    pub fn object_type(&self, name: &str) -> Option<&ObjectType> {
        match self.definitions.get(name) {
            Some(Definition::Type(def)) => Some(def),
            _ => None,
        }
    }

    pub fn order_for(&self, target: &str) -> Option<&OrderType> {
        match self.definitions.get(&format!("Order#{target}")) {
            Some(Definition::Order(def)) => Some(def),
            _ => None,
        }
    }

    /// The concrete `type` names a value of type `name` may have: the type
    /// itself, an interface's implementations or a union's members.
    pub fn possible_types(&self, name: &str) -> Option<&[String]> {
        match self.definitions.get(name)? {
            Definition::Type(def) => Some(std::slice::from_ref(&def.name)),
            Definition::Interface(def) => Some(&def.implementations),
            Definition::Union(def) => Some(&def.type_names),
            _ => None,
        }
    }

    pub fn union(&self, name: &str) -> Option<&UnionType> {
        match self.definitions.get(name) {
            Some(Definition::Union(def)) => Some(def),
            _ => None,
        }
    }
}
