//! Property tests: printing a document and parsing it again yields the same
//! document once positions are stripped.

use crate::ast;
use crate::printer::print_document;
use crate::tests::utils::list;
use crate::tests::utils::non_null;
use crate::visitor::strip_positions;
use proptest::prelude::*;

fn field_name() -> impl Strategy<Value = String> + Clone {
    "[a-z][a-zA-Z0-9]{0,6}"
}

fn type_name() -> impl Strategy<Value = String> + Clone {
    "[A-Z][a-zA-Z0-9]{0,6}"
}

fn enum_value_name() -> impl Strategy<Value = String> + Clone {
    "[A-Z][A-Z_]{0,5}"
}

fn description() -> impl Strategy<Value = Option<String>> + Clone {
    proptest::option::of("[ -~]{0,12}")
}

fn named_type() -> impl Strategy<Value = ast::NamedType> + Clone {
    type_name().prop_map(ast::NamedType::new)
}

// =============================================================================
// Type annotations
// =============================================================================

/// Named and list types with at most one `!` per level.
fn type_ref() -> impl Strategy<Value = ast::TypeAnnotation> {
    type_name()
        .prop_map(ast::TypeAnnotation::named)
        .prop_recursive(3, 8, 1, |inner| {
            prop_oneof![
                inner.clone().prop_map(list),
                inner.prop_map(|t| if t.is_non_null() { t } else { non_null(t) }),
            ]
        })
}

fn connection_type() -> impl Strategy<Value = ast::TypeAnnotation> {
    let edge = proptest::option::of(named_type());
    prop_oneof![
        (named_type(), field_name(), edge.clone()).prop_map(|(target, related, edge_type)| {
            ast::TypeAnnotation::NodeConnection(ast::NodeConnectionType {
                position: None,
                target,
                related_field: Some(related),
                edge_type,
            })
        }),
        (named_type(), edge.clone()).prop_map(|(target, edge_type)| {
            ast::TypeAnnotation::ScalarConnection(ast::ScalarConnectionType {
                position: None,
                target,
                edge_type,
            })
        }),
        (named_type(), edge.clone()).prop_map(|(target, edge_type)| {
            ast::TypeAnnotation::ObjectConnection(ast::ObjectConnectionType {
                position: None,
                target,
                edge_type,
            })
        }),
        (named_type(), edge).prop_map(|(target, edge_type)| {
            ast::TypeAnnotation::Edge(ast::EdgeType {
                position: None,
                target,
                edge_type,
            })
        }),
    ]
}

fn field_type() -> impl Strategy<Value = ast::TypeAnnotation> {
    prop_oneof![
        3 => type_ref(),
        1 => (connection_type(), any::<bool>())
            .prop_map(|(t, bang)| if bang { non_null(t) } else { t }),
    ]
}

/// Filter and order targets: a list, or a connection whose related field
/// may be omitted.
fn target_type() -> impl Strategy<Value = ast::TypeAnnotation> {
    prop_oneof![
        type_ref().prop_map(list),
        (
            named_type(),
            proptest::option::of((field_name(), proptest::option::of(named_type()))),
        )
            .prop_map(|(target, related)| {
                let (related_field, edge_type) = match related {
                    Some((field, edge)) => (Some(field), edge),
                    None => (None, None),
                };
                ast::TypeAnnotation::NodeConnection(ast::NodeConnectionType {
                    position: None,
                    target,
                    related_field,
                    edge_type,
                })
            }),
    ]
}

// =============================================================================
// Values
// =============================================================================

fn block_string() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-z]{1,5}( [a-z]{1,5})?", 1..=3).prop_map(|lines| lines.join("\n"))
}

fn value(allow_variables: bool) -> BoxedStrategy<ast::Value> {
    let scalar = prop_oneof![
        any::<i32>().prop_map(|i| ast::Value::Int(ast::IntValue {
            position: None,
            raw: i.to_string(),
        })),
        (any::<i32>(), any::<u8>()).prop_map(|(whole, frac)| ast::Value::Float(ast::FloatValue {
            position: None,
            raw: format!("{whole}.{frac}"),
        })),
        "[ -~]{0,8}".prop_map(|value| ast::Value::String(ast::StringValue {
            position: None,
            value,
            is_block: false,
        })),
        block_string().prop_map(|value| ast::Value::String(ast::StringValue {
            position: None,
            value,
            is_block: true,
        })),
        any::<bool>().prop_map(|value| ast::Value::Boolean(ast::BooleanValue {
            position: None,
            value,
        })),
        Just(ast::Value::Null(ast::NullValue { position: None })),
        enum_value_name().prop_map(|value| ast::Value::Enum(ast::EnumValue {
            position: None,
            value,
        })),
    ];
    let leaf = if allow_variables {
        prop_oneof![
            4 => scalar,
            1 => field_name().prop_map(|name| ast::Value::Variable(ast::Variable {
                position: None,
                name,
            })),
        ]
        .boxed()
    } else {
        scalar.boxed()
    };
    leaf.prop_recursive(3, 12, 3, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..3).prop_map(|values| {
                ast::Value::List(ast::ListValue {
                    position: None,
                    values,
                })
            }),
            proptest::collection::vec((field_name(), inner), 0..3).prop_map(|fields| {
                ast::Value::Object(ast::ObjectValue {
                    position: None,
                    fields: fields
                        .into_iter()
                        .map(|(name, value)| ast::ObjectField {
                            position: None,
                            name,
                            value,
                        })
                        .collect(),
                })
            }),
        ]
    })
    .boxed()
}

// =============================================================================
// Definitions
// =============================================================================

fn directives() -> impl Strategy<Value = Vec<ast::Directive>> {
    let argument = (field_name(), value(false)).prop_map(|(name, value)| ast::Argument {
        position: None,
        name,
        value,
    });
    let directive = (field_name(), proptest::collection::vec(argument, 0..2)).prop_map(
        |(name, arguments)| ast::Directive {
            position: None,
            name,
            arguments,
        },
    );
    proptest::collection::vec(directive, 0..2)
}

fn input_values() -> impl Strategy<Value = Vec<ast::InputValueDefinition>> {
    let input_value = (
        description(),
        field_name(),
        type_ref(),
        proptest::option::of(value(false)),
        directives(),
    )
        .prop_map(|(description, name, value_type, default_value, directives)| {
            ast::InputValueDefinition {
                position: None,
                description,
                name,
                value_type,
                default_value,
                directives,
            }
        });
    proptest::collection::vec(input_value, 0..3)
}

fn fields() -> impl Strategy<Value = Vec<ast::FieldDefinition>> {
    let field = (description(), field_name(), input_values(), field_type(), directives())
        .prop_map(|(description, name, arguments, field_type, directives)| {
            ast::FieldDefinition {
                position: None,
                description,
                name,
                arguments,
                field_type,
                directives,
            }
        });
    proptest::collection::vec(field, 0..4)
}

/// `(description, name, arguments, value)` of a filter condition or order
/// expression.
type NamedExpression = (Option<String>, String, Vec<ast::InputValueDefinition>, ast::Value);

fn named_expressions() -> impl Strategy<Value = Vec<NamedExpression>> {
    proptest::collection::vec((description(), field_name(), input_values(), value(true)), 0..3)
}

/// Definitions that may also appear after `extend`.
fn extensible_definition(
    description: impl Strategy<Value = Option<String>> + Clone,
) -> impl Strategy<Value = ast::Definition> {
    let enum_value = (description.clone(), enum_value_name(), directives()).prop_map(
        |(description, name, directives)| ast::EnumValueDefinition {
            position: None,
            description,
            name,
            directives,
        },
    );
    prop_oneof![
        (
            description.clone(),
            type_name(),
            proptest::collection::vec(named_type(), 0..3),
            directives(),
            fields(),
        )
            .prop_map(|(description, name, implements_interfaces, directives, fields)| {
                ast::Definition::ObjectType(ast::ObjectTypeDefinition {
                    position: None,
                    description,
                    name,
                    implements_interfaces,
                    directives,
                    fields,
                })
            }),
        (description.clone(), type_name(), directives(), fields()).prop_map(
            |(description, name, directives, fields)| {
                ast::Definition::Interface(ast::InterfaceTypeDefinition {
                    position: None,
                    description,
                    name,
                    directives,
                    fields,
                })
            }
        ),
        (
            description.clone(),
            type_name(),
            directives(),
            proptest::collection::vec(named_type(), 0..3),
        )
            .prop_map(|(description, name, directives, types)| {
                ast::Definition::Union(ast::UnionTypeDefinition {
                    position: None,
                    description,
                    name,
                    directives,
                    types,
                })
            }),
        (
            description.clone(),
            type_name(),
            directives(),
            proptest::collection::vec(enum_value, 0..3),
        )
            .prop_map(|(description, name, directives, values)| {
                ast::Definition::Enum(ast::EnumTypeDefinition {
                    position: None,
                    description,
                    name,
                    directives,
                    values,
                })
            }),
        (description, type_name(), directives(), fields()).prop_map(
            |(description, name, directives, fields)| {
                ast::Definition::InputObject(ast::InputObjectTypeDefinition {
                    position: None,
                    description,
                    name,
                    directives,
                    fields,
                })
            }
        ),
    ]
}

fn definition() -> impl Strategy<Value = ast::Definition> {
    prop_oneof![
        4 => extensible_definition(description()),
        1 => (description(), type_name(), directives()).prop_map(|(description, name, directives)| {
            ast::Definition::Scalar(ast::ScalarTypeDefinition {
                position: None,
                description,
                name,
                directives,
            })
        }),
        1 => (description(), type_name(), input_values(), directives(), fields()).prop_map(
            |(description, name, arguments, directives, fields)| {
                ast::Definition::Mutation(ast::MutationDefinition {
                    position: None,
                    description,
                    name,
                    arguments,
                    directives,
                    fields,
                })
            }
        ),
        1 => (description(), target_type(), named_expressions()).prop_map(
            |(description, target, conditions)| {
                ast::Definition::Filter(ast::FilterDefinition {
                    position: None,
                    description,
                    target,
                    conditions: conditions
                        .into_iter()
                        .map(|(description, name, arguments, value)| ast::FilterCondition {
                            position: None,
                            description,
                            name,
                            arguments,
                            value,
                        })
                        .collect(),
                })
            }
        ),
        1 => (description(), target_type(), named_expressions()).prop_map(
            |(description, target, expressions)| {
                ast::Definition::Order(ast::OrderDefinition {
                    position: None,
                    description,
                    target,
                    expressions: expressions
                        .into_iter()
                        .map(|(description, name, arguments, value)| ast::OrderExpression {
                            position: None,
                            description,
                            name,
                            arguments,
                            value,
                        })
                        .collect(),
                })
            }
        ),
        1 => extensible_definition(Just(None)).prop_map(|definition| {
            ast::Definition::Extension(ast::TypeExtension {
                position: None,
                definition: Box::new(definition),
            })
        }),
    ]
}

fn document() -> impl Strategy<Value = ast::Document> {
    proptest::collection::vec(definition(), 0..4)
        .prop_map(|definitions| ast::Document { definitions })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn print_then_parse_is_identity(document in document()) {
        let printed = print_document(&document);
        let reparsed = match crate::parse(&printed) {
            Ok(reparsed) => reparsed,
            Err(error) => panic!("{}\n{printed}", error.format_detailed(Some(&printed))),
        };
        prop_assert_eq!(strip_positions(&reparsed), document, "printed:\n{}", printed);
    }
}

/// A hand-written document exercising every definition kind survives a
/// print/parse cycle.
#[test]
fn full_schema_round_trip() {
    let source = r#"
        "A person"
        type User implements Node @model(table: "users") {
          id: ID!
          friends(first: Int = 10): NodeConnection(User, friends, FriendEdge)!
          tags: ScalarConnection(String)
        }
        interface Node { id: ID! }
        union Actor = User | Bot
        scalar DateTime
        enum Role { ADMIN MEMBER @deprecated }
        input Address { street: String }
        mutation Rename(id: ID!, name: String!) { user: User }
        filter on [User] { named(name: String): {name: {eq: $name}} }
        order on NodeConnection(User) { newest: [{createdAt: DESC}] }
        extend type User { age: Int }
    "#;
    let document = strip_positions(&crate::parse(source).unwrap());
    let printed = print_document(&document);
    assert_eq!(strip_positions(&crate::parse(&printed).unwrap()), document);
}
