use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::types::DirectiveValue;
use crate::types::FieldKind;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const SCHEMA: &str = r#"
scalar Email @format(pattern: "email")

type User implements Node @model(table: "users", shards: 4) {
  id: ID!
  email: Email @unique
  friends(first: Int = 10): NodeConnection(User, friends) @hidden(reason: "private")
}

input Credentials {
  email: Email! @unique
  password: String!
}

mutation createUser(credentials: Credentials! @unique) {
  user: User
}
"#;

fn schema() -> Result<Schema> {
    SchemaBuilder::new().load_str(None, SCHEMA)?.build()
}

#[test]
fn directives_named_finds_every_use() -> Result<()> {
    let schema = schema()?;

    let unique: Vec<(&str, Option<&str>)> = schema
        .directives_named("unique")
        .iter()
        .map(|found| (found.type_name, found.field_name))
        .collect();
    assert_eq!(unique, vec![
        ("User", Some("email")),
        ("Credentials", Some("email")),
        ("createUser", Some("credentials")),
    ]);

    let model = schema.directives_named("model");
    assert_eq!(model.len(), 1);
    assert_eq!(model[0].field_name, None);
    let directive = model[0].directive;
    assert_eq!(
        directive.argument("table").and_then(|arg| arg.value()),
        Some(&DirectiveValue::String("users".to_string())),
    );
    assert_eq!(
        directive.argument("shards").and_then(|arg| arg.value()),
        Some(&DirectiveValue::Int(4)),
    );

    assert_eq!(schema.directives_named("format")[0].type_name, "Email");
    assert!(schema.directives_named("missing").is_empty());

    Ok(())
}

#[test]
fn lookups_by_kind() -> Result<()> {
    let schema = schema()?;

    assert!(schema.object_type("User").is_some());
    assert!(schema.object_type("Credentials").is_none());
    assert!(schema.input("Credentials").is_some());
    assert!(schema.is_scalar_type("Email"));
    assert!(schema.is_scalar_type("Int"));
    assert!(!schema.is_scalar_type("User"));
    assert_eq!(schema.possible_types("Email"), None);

    let mutation = schema.mutation("createUser").expect("mutation is defined");
    assert_eq!(mutation.arguments().len(), 1);
    assert_eq!(mutation.arguments()[0].kind(), &FieldKind::Object {
        type_name: "Credentials".to_string(),
    });
    assert_eq!(mutation.fields()[0].name(), "user");

    let friends = schema
        .object_type("User")
        .and_then(|user| user.field("friends"))
        .expect("friends is defined");
    assert!(friends.has_arguments());
    assert!(friends.arguments()[0].default_value().is_some());
    assert_eq!(friends.related_field(), Some("friends"));
    assert_eq!(friends.edge_type(), None);

    Ok(())
}

#[test]
fn definitions_keep_analysis_order() -> Result<()> {
    let schema = schema()?;

    let names: Vec<&str> = schema.definitions().keys().map(String::as_str).collect();
    assert_eq!(names, vec!["Email", "User", "Node", "Credentials", "createUser"]);

    Ok(())
}

#[test]
fn schemas_serialize() -> Result<()> {
    let schema = schema()?;

    let json = serde_json::to_string(&schema).expect("schema serializes");
    let restored: Schema = serde_json::from_str(&json).expect("schema deserializes");

    assert_eq!(restored, schema);
    Ok(())
}
