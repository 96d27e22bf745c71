use crate::validate::Context;
use crate::validate::ContextError;
use crate::validate::ContextKind;
use crate::validate::tests::id_for;
use crate::validate::tests::test_schema;
use crate::validate::validate_node;
use serde_json::json;

type Result<T> = std::result::Result<T, ContextError>;

mod payloads {
    use super::*;

    #[test]
    fn complete_payload_is_valid() -> Result<()> {
        let schema = test_schema();
        let context = Context::for_type(ContextKind::AddNode, &schema, "NodeWithScalars");

        let result = validate_node(
            context,
            &json!({
                "id": id_for("NodeWithScalars"),
                "reqInt": 1,
                "reqFloat": 1.5,
                "optColor": "GREEN",
                "optJson": true,
                "scores": [1, 2, 3],
                "tags": ["a"],
            }),
        )?;

        assert!(result.is_valid(), "{:?}", result.results);
        Ok(())
    }

    #[test]
    fn unknown_and_missing_fields() -> Result<()> {
        let schema = test_schema();
        let context = Context::for_type(ContextKind::AddNode, &schema, "NodeWithScalars");

        let result = validate_node(context, &json!({"reqInt": 1, "bogus": true, "reqFloat": null}))?;

        assert_eq!(result.results, vec![
            "New \"NodeWithScalars\" node has unknown \"bogus\" field.",
            "New \"NodeWithScalars\" node is missing required \"reqFloat\" field.",
            "New \"NodeWithScalars\" node is missing required \"scores\" field.",
        ]);
        Ok(())
    }

    #[test]
    fn every_violation_is_reported() -> Result<()> {
        let schema = test_schema();
        let context = Context::for_type(ContextKind::AddNode, &schema, "NodeWithScalars");

        let result = validate_node(
            context,
            &json!({
                "reqInt": 1.5,
                "reqFloat": "1.5",
                "scores": [1, null],
                "optColor": "BLUE",
            }),
        )?;

        assert_eq!(result.results, vec![
            "New \"NodeWithScalars\" node has invalid \"reqInt\" field value. Expected an integer.",
            "New \"NodeWithScalars\" node has invalid \"reqFloat\" field value. Expected a number.",
            "New \"NodeWithScalars\" node has invalid \"scores[1]\" field value. List elements can not be null.",
            "New \"NodeWithScalars\" node has invalid \"optColor\" field value. Expected one of \"RED\", \"GREEN\".",
        ]);
        Ok(())
    }

    #[test]
    fn non_object_payload() -> Result<()> {
        let schema = test_schema();
        let context = Context::for_type(ContextKind::AddNode, &schema, "Foo");

        let result = validate_node(context, &json!([1, 2]))?;

        assert_eq!(result.results, vec!["New \"Foo\" node must be an object."]);
        Ok(())
    }

    #[test]
    fn connection_fields_are_rejected() -> Result<()> {
        let schema = test_schema();
        let context = Context::for_type(ContextKind::AddNode, &schema, "Person");

        let result = validate_node(context, &json!({"name": "Ada", "friends": []}))?;

        assert_eq!(result.results, vec![
            "New \"Person\" node cannot have a connection field \"friends\".",
        ]);
        Ok(())
    }
}

mod ids {
    use super::*;

    #[test]
    fn id_for_another_type_is_reported_alone() -> Result<()> {
        let schema = test_schema();
        let context = Context::for_type(ContextKind::AddNode, &schema, "NodeWithScalars");

        let result = validate_node(context, &json!({"id": id_for("Foo"), "bogus": 1}))?;

        assert_eq!(result.results, vec![
            "New \"NodeWithScalars\" node has an id field for \"Foo\" type where an id for \
            \"NodeWithScalars\" type is expected.",
        ]);
        Ok(())
    }

    #[test]
    fn malformed_id() -> Result<()> {
        let schema = test_schema();
        let context = Context::for_type(ContextKind::AddNode, &schema, "Foo");

        let result = validate_node(context, &json!({"id": "not-a-global-id"}))?;

        assert_eq!(result.results, vec!["New \"Foo\" node has an invalid id field."]);
        Ok(())
    }

    #[test]
    fn null_id_is_ignored() -> Result<()> {
        let schema = test_schema();
        let context = Context::for_type(ContextKind::AddNode, &schema, "Foo");

        let result = validate_node(context, &json!({"id": null}))?;

        assert!(result.is_valid());
        Ok(())
    }

    #[test]
    fn node_reference_to_wrong_type() -> Result<()> {
        let schema = test_schema();
        let context = Context::for_type(ContextKind::AddNode, &schema, "Person");

        let result = validate_node(
            context,
            &json!({
                "name": "Ada",
                "bestFriend": id_for("Pet"),
                "companion": id_for("Robot"),
                "named": id_for("Foo"),
                "pets": [id_for("Pet"), "oops"],
            }),
        )?;

        assert_eq!(result.results, vec![
            "New \"Person\" node has invalid \"bestFriend\" field value. Expected an id for \
            \"Person\", found an id for \"Pet\".",
            "New \"Person\" node has invalid \"named\" field value. Expected an id for \
            \"Named\", found an id for \"Foo\".",
            "New \"Person\" node has invalid \"pets[1]\" field value. Expected an id for \"Pet\".",
        ]);
        Ok(())
    }
}

mod nested_objects {
    use super::*;

    #[test]
    fn nested_object_paths() -> Result<()> {
        let schema = test_schema();
        let context = Context::for_type(ContextKind::AddNode, &schema, "Person");

        let result = validate_node(
            context,
            &json!({
                "name": "Ada",
                "address": {"zip": 12345},
                "addresses": [{"street": "Main"}, {"street": 1}],
            }),
        )?;

        assert_eq!(result.results, vec![
            "New \"Person\" node has invalid \"address.zip\" field value. Expected a string.",
            "New \"Person\" node is missing required \"address.street\" field.",
            "New \"Person\" node has invalid \"addresses[1].street\" field value. Expected a string.",
        ]);
        Ok(())
    }

    #[test]
    fn interface_values_need_a_discriminator() -> Result<()> {
        let schema = test_schema();
        let context = Context::for_type(ContextKind::AddNode, &schema, "Drawing");

        let result = validate_node(
            context,
            &json!({
                "shape": {"area": 1.0},
                "shapes": [{"_type": "Circle", "area": 2.0}, {"_type": "Triangle"}],
            }),
        )?;

        assert_eq!(result.results, vec![
            "New \"Drawing\" node requires \"_type\" property for \"shape\" field. Expected one \
            of: \"Circle\", \"Square\".",
            "New \"Drawing\" node is missing required \"shapes[0].radius\" field.",
            "New \"Drawing\" node has invalid \"_type\" value for \"shapes[1]\" field. Expected \
            one of: \"Circle\", \"Square\".",
        ]);
        Ok(())
    }

    #[test]
    fn union_values_validate_the_chosen_member() -> Result<()> {
        let schema = test_schema();
        let context = Context::for_type(ContextKind::AddNode, &schema, "Drawing");

        let result = validate_node(
            context,
            &json!({"media": {"_type": "Clip", "url": "u", "seconds": 1.5}}),
        )?;

        assert_eq!(result.results, vec![
            "New \"Drawing\" node has invalid \"media.seconds\" field value. Expected an integer.",
        ]);
        Ok(())
    }
}

mod contexts {
    use super::*;

    #[test]
    fn wrong_context_kind() {
        let schema = test_schema();
        let context = Context::for_type(ContextKind::Update, &schema, "Foo");

        assert_eq!(
            validate_node(context, &json!({})).unwrap_err(),
            ContextError::WrongKind {
                operation: "validate_node",
                expected: ContextKind::AddNode,
                found: ContextKind::Update,
            },
        );
    }

    #[test]
    fn unknown_type() {
        let schema = test_schema();
        let context = Context::for_type(ContextKind::AddNode, &schema, "Nope");

        assert_eq!(
            validate_node(context, &json!({})).unwrap_err(),
            ContextError::UnknownType("Nope".to_string()),
        );
    }

    #[test]
    fn interface_target() {
        let schema = test_schema();
        let context = Context::for_type(ContextKind::AddNode, &schema, "Named");

        assert_eq!(
            validate_node(context, &json!({})).unwrap_err(),
            ContextError::UnsupportedTargetType {
                operation: "validate_node",
                type_name: "Named".to_string(),
                kind: "interface",
            },
        );
    }

    #[test]
    fn field_target() {
        let schema = test_schema();
        let context = Context::for_field(ContextKind::AddNode, &schema, "Person", "name");

        assert_eq!(
            validate_node(context, &json!({})).unwrap_err(),
            ContextError::ExpectedTypeTarget {
                operation: "validate_node",
                type_name: "Person".to_string(),
                field_name: "name".to_string(),
            },
        );
    }
}
