use crate::loc;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::types::Definition;
use crate::types::FieldKind;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn str_pos(n: u16, line: usize, col: usize) -> loc::FilePosition {
    loc::FilePosition {
        col,
        file: PathBuf::from(format!("str://{n}")),
        line,
    }
}

mod basics {
    use super::*;

    #[test]
    fn empty_schema_has_only_node() -> Result<()> {
        let schema = SchemaBuilder::new().build()?;

        assert_eq!(schema.len(), 1);
        let node = schema.node_interface().expect("Node is always defined");
        assert_eq!(node.def_location(), &loc::SchemaDefLocation::BuiltIn);
        assert!(node.no_type_implements_node());
        assert!(!node.every_type_implements_node());
        assert_eq!(node.fields().len(), 1);
        assert_eq!(node.fields()[0].name(), "id");
        assert!(node.fields()[0].is_required());

        Ok(())
    }

    #[test]
    fn fields_are_classified() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "enum Mood { HAPPY SAD }\n",
                "scalar Json\n",
                "type Post implements Node {\n",
                "  id: ID!\n",
                "  views: Int!\n",
                "  mood: Mood\n",
                "  meta: Json\n",
                "  tags: [String]\n",
                "  matrix: [[Int]]\n",
                "  author: Author\n",
                "  reviewers: [Author]\n",
                "  likes: NodeConnection(Author, likedPosts, Like)\n",
                "}\n",
                "type Author implements Node { id: ID! bio: Bio }\n",
                "type Bio { text: String }\n",
                "type Like { at: Float }\n",
            ))?
            .build()?;

        let post = schema.object_type("Post").expect("Post is defined");
        let kind_of = |name: &str| post.field(name).expect("field exists").kind().clone();

        assert_eq!(kind_of("views"), FieldKind::Scalar {
            type_name: "Int".to_string(),
            numeric: true,
        });
        assert_eq!(kind_of("mood"), FieldKind::Scalar {
            type_name: "Mood".to_string(),
            numeric: false,
        });
        assert_eq!(kind_of("meta"), FieldKind::Scalar {
            type_name: "Json".to_string(),
            numeric: false,
        });
        assert_eq!(kind_of("tags"), FieldKind::ScalarList {
            type_name: "String".to_string(),
        });
        assert_eq!(kind_of("matrix"), FieldKind::ObjectList { type_name: None });
        assert_eq!(kind_of("author"), FieldKind::Node {
            type_name: "Author".to_string(),
        });
        assert_eq!(kind_of("reviewers"), FieldKind::NodeList {
            type_name: "Author".to_string(),
        });
        assert_eq!(kind_of("likes"), FieldKind::NodeConnection {
            type_name: "Author".to_string(),
            related_field: Some("likedPosts".to_string()),
            edge_type: Some("Like".to_string()),
        });

        let author = schema.object_type("Author").expect("Author is defined");
        assert_eq!(author.field("bio").map(|f| f.kind().clone()), Some(FieldKind::Object {
            type_name: "Bio".to_string(),
        }));
        assert!(post.field("views").is_some_and(|f| f.is_required() && f.is_numeric()));
        assert_eq!(post.field("matrix").and_then(|f| f.type_name()), None);

        Ok(())
    }

    #[test]
    fn str_loads_get_numbered_paths() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type A { a: Int }")?
            .load_str(None, "\n  type B { b: Int }")?
            .build()?;

        assert_eq!(
            schema.get("A").map(Definition::def_location),
            Some(&loc::SchemaDefLocation::Schema(str_pos(0, 1, 1))),
        );
        assert_eq!(
            schema.get("B").map(Definition::def_location),
            Some(&loc::SchemaDefLocation::Schema(str_pos(1, 2, 3))),
        );

        Ok(())
    }

    #[test]
    fn parse_errors_keep_their_source() {
        let err = SchemaBuilder::new()
            .load_str(None, "type User {\n  name String\n}")
            .unwrap_err();

        let SchemaBuildError::Parse { file, source_text, .. } = &err else {
            panic!("expected a parse error, got {err:?}");
        };
        assert_eq!(file, &PathBuf::from("str://0"));
        assert_eq!(source_text, "type User {\n  name String\n}");
        assert!(err.format_detailed().contains("name String"));
    }

    #[test]
    fn missing_file() {
        let err = SchemaBuilder::new()
            .load_file("/definitely/not/here.sdl")
            .unwrap_err();

        assert!(matches!(err, SchemaBuildError::FileRead(_)));
        assert!(err.format_detailed().starts_with("error: "));
    }
}

mod node_resolution {
    use super::*;

    #[test]
    fn interface_and_union_node_coverage() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type User implements Node & Named { id: ID! name: String }\n",
                "type Team implements Node & Named { id: ID! name: String }\n",
                "type Tag implements Labeled { label: String }\n",
                "type Owner { pet: Named, tagged: Labeled, things: [Thing], mixed: Mixed }\n",
                "interface Named { name: String }\n",
                "interface Labeled { label: String }\n",
                "interface Lonely { x: Int }\n",
                "union Thing = User | Team\n",
                "union Mixed = User | Tag\n",
            ))?
            .build()?;

        let named = schema.interface("Named").expect("Named is defined");
        assert_eq!(named.implementations(), &["User".to_string(), "Team".to_string()]);
        assert!(named.every_type_implements_node());
        assert!(!named.no_type_implements_node());

        let labeled = schema.interface("Labeled").expect("Labeled is defined");
        assert!(!labeled.every_type_implements_node());
        assert!(labeled.no_type_implements_node());

        let lonely = schema.interface("Lonely").expect("Lonely is defined");
        assert!(!lonely.every_type_implements_node());
        assert!(lonely.no_type_implements_node());

        let mixed = schema.union("Mixed").expect("Mixed is defined");
        assert!(!mixed.every_type_implements_node());
        assert!(!mixed.no_type_implements_node());

        let owner = schema.object_type("Owner").expect("Owner is defined");
        let kind_of = |name: &str| owner.field(name).expect("field exists").kind().clone();
        assert_eq!(kind_of("pet"), FieldKind::Node {
            type_name: "Named".to_string(),
        });
        assert_eq!(kind_of("tagged"), FieldKind::Object {
            type_name: "Labeled".to_string(),
        });
        assert_eq!(kind_of("things"), FieldKind::NodeList {
            type_name: "Thing".to_string(),
        });
        assert_eq!(kind_of("mixed"), FieldKind::Object {
            type_name: "Mixed".to_string(),
        });

        let node = schema.node_interface().expect("Node is always defined");
        assert_eq!(node.implementations(), &["User".to_string(), "Team".to_string()]);
        assert!(node.every_type_implements_node());

        Ok(())
    }

    #[test]
    fn union_memberships() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type User implements Node { id: ID! }\n",
                "type Bot { serial: Int }\n",
                "union Actor = User | Bot\n",
                "union Account = User\n",
            ))?
            .build()?;

        let user = schema.object_type("User").expect("User is defined");
        assert_eq!(user.member_of_unions(), &["Actor".to_string(), "Account".to_string()]);
        let bot = schema.object_type("Bot").expect("Bot is defined");
        assert_eq!(bot.member_of_unions(), &["Actor".to_string()]);
        assert_eq!(
            schema.possible_types("Actor"),
            Some(&["User".to_string(), "Bot".to_string()][..]),
        );

        Ok(())
    }

    #[test]
    fn filter_and_order_targets() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type User implements Node { id: ID! age: Int }\n",
                "filter on [User] {\n",
                "  adults: {age: {gte: 18}}\n",
                "  olderThan(age: Int!): {age: {gt: $age}}\n",
                "}\n",
                "order on NodeConnection(User) {\n",
                "  byAge: [{age: ASC}]\n",
                "}\n",
            ))?
            .build()?;

        let filter = schema.filter_for("[User]").expect("filter is keyed by its target");
        assert_eq!(filter.name(), "Filter#[User]");
        assert_eq!(filter.target(), &FieldKind::NodeList {
            type_name: "User".to_string(),
        });
        assert_eq!(filter.conditions().len(), 2);
        assert!(filter.condition("olderThan").is_some());

        let order = schema.order_for("NodeConnection(User)").expect("order is keyed by its target");
        assert!(order.target().is_connection());
        assert!(order.expression("byAge").is_some());

        Ok(())
    }
}

mod extensions {
    use super::*;

    #[test]
    fn extensions_merge_across_files() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "extend type User implements Node @audited { id: ID! }\n",
                "extend enum Role { ADMIN }\n",
                "extend union Actor = Bot\n",
            ))?
            .load_str(None, concat!(
                "type User { name: String }\n",
                "type Bot { serial: Int }\n",
                "enum Role { GUEST }\n",
                "union Actor = User\n",
            ))?
            .build()?;

        let user = schema.object_type("User").expect("User is defined");
        let field_names: Vec<&str> = user.fields().iter().map(|f| f.name()).collect();
        assert_eq!(field_names, vec!["name", "id"]);
        assert!(user.implements_node());
        assert_eq!(user.directives().len(), 1);
        assert_eq!(user.directives()[0].name(), "audited");
        assert_eq!(user.directives()[0].def_location(), &str_pos(0, 1, 34));

        let role = schema.enum_type("Role").expect("Role is defined");
        assert_eq!(role.values(), &["GUEST".to_string(), "ADMIN".to_string()]);

        let actor = schema.union("Actor").expect("Actor is defined");
        assert_eq!(actor.type_names(), &["User".to_string(), "Bot".to_string()]);

        Ok(())
    }

    #[test]
    fn extension_of_undefined_type() {
        let err = SchemaBuilder::new()
            .load_str(None, "extend type Ghost { boo: String }")
            .and_then(SchemaBuilder::build)
            .unwrap_err();

        assert_eq!(err, SchemaBuildError::ExtensionOfUndefinedType {
            type_name: "Ghost".to_string(),
            extension_loc: str_pos(0, 1, 1),
        });
    }

    #[test]
    fn extension_kind_mismatch() {
        let err = SchemaBuilder::new()
            .load_str(None, "enum Color { RED }\nextend input Color { x: Int }")
            .and_then(SchemaBuilder::build)
            .unwrap_err();

        assert_eq!(err, SchemaBuildError::ExtensionKindMismatch {
            type_name: "Color".to_string(),
            base_kind: "enum".to_string(),
            extension_kind: "input".to_string(),
            extension_loc: str_pos(0, 2, 1),
        });
    }

    #[test]
    fn duplicate_field_from_extension() {
        let err = SchemaBuilder::new()
            .load_str(None, "type User { name: String }\nextend type User { name: String }")
            .and_then(SchemaBuilder::build)
            .unwrap_err();

        assert_eq!(err, SchemaBuildError::DuplicateFieldDefinition {
            type_name: "User".to_string(),
            field_name: "name".to_string(),
            def1: loc::SchemaDefLocation::Schema(str_pos(0, 1, 13)),
            def2: loc::SchemaDefLocation::Schema(str_pos(0, 2, 20)),
        });
    }
}

mod errors {
    use super::*;

    #[test]
    fn duplicate_definition_across_files() {
        let err = SchemaBuilder::new()
            .load_str(None, "type User { a: Int }")
            .and_then(|builder| builder.load_str(None, "\nenum User { A }"))
            .and_then(SchemaBuilder::build)
            .unwrap_err();

        // Enums are analyzed before types.
        assert_eq!(err, SchemaBuildError::DuplicateDefinition {
            name: "User".to_string(),
            def1: loc::SchemaDefLocation::Schema(str_pos(1, 2, 1)),
            def2: loc::SchemaDefLocation::Schema(str_pos(0, 1, 1)),
        });
        assert!(err.to_string().starts_with("Name already defined"));
    }

    #[test]
    fn node_is_reserved() {
        let err = SchemaBuilder::new()
            .load_str(None, "type Node { id: ID! }")
            .and_then(SchemaBuilder::build)
            .unwrap_err();

        assert_eq!(err, SchemaBuildError::DuplicateDefinition {
            name: "Node".to_string(),
            def1: loc::SchemaDefLocation::Schema(str_pos(0, 1, 1)),
            def2: loc::SchemaDefLocation::BuiltIn,
        });
    }

    #[test]
    fn duplicate_filter_target() {
        let err = SchemaBuilder::new()
            .load_str(None, concat!(
                "type User { age: Int }\n",
                "filter on [User] { a: {age: 1} }\n",
                "filter on [User] { b: {age: 2} }\n",
            ))
            .and_then(SchemaBuilder::build)
            .unwrap_err();

        assert!(matches!(
            err,
            SchemaBuildError::DuplicateDefinition { ref name, .. } if name == "Filter#[User]",
        ));
    }

    #[test]
    fn input_field_with_arguments() {
        let err = SchemaBuilder::new()
            .load_str(None, "input Search {\n  term(lang: String): String\n}")
            .and_then(SchemaBuilder::build)
            .unwrap_err();

        assert_eq!(err, SchemaBuildError::InputFieldWithArguments {
            input_name: "Search".to_string(),
            field_name: "term".to_string(),
            location: str_pos(0, 2, 3),
        });
    }

    #[test]
    fn input_field_with_connection() {
        let err = SchemaBuilder::new()
            .load_str(None, concat!(
                "type User implements Node { id: ID! }\n",
                "input Search { users: NodeConnection(User, x) }\n",
            ))
            .and_then(SchemaBuilder::build)
            .unwrap_err();

        assert_eq!(err, SchemaBuildError::InputFieldWithConnection {
            input_name: "Search".to_string(),
            field_name: "users".to_string(),
            location: str_pos(0, 2, 16),
        });
    }
}
