use crate::validate::Context;
use crate::validate::ContextError;
use crate::validate::ContextKind;
use crate::validate::ValidationResult;
use crate::validate::tests::id_for;
use crate::validate::tests::test_schema;
use crate::validate::validate_update;
use crate::Schema;
use serde_json::Value as JsonValue;
use serde_json::json;

type Result<T> = std::result::Result<T, ContextError>;

fn update<'s>(schema: &'s Schema, type_name: &str, value: JsonValue) -> Result<ValidationResult<'s>> {
    validate_update(Context::for_type(ContextKind::Update, schema, type_name), &value)
}

mod scalars {
    use super::*;

    #[test]
    fn division_by_zero() -> Result<()> {
        let schema = test_schema();

        let result = update(&schema, "NodeWithScalars", json!({"reqFloat": {"div": 0}}))?;

        assert_eq!(result.results, vec![
            "Update expression for \"NodeWithScalars\" type has invalid \"reqFloat\" field \
            value. Division by zero is not allowed.",
        ]);
        Ok(())
    }

    #[test]
    fn clearing_a_required_field() -> Result<()> {
        let schema = test_schema();

        let result = update(&schema, "NodeWithScalars", json!({"reqInt": {"clear": true}}))?;

        assert_eq!(result.results, vec![
            "Update expression for \"NodeWithScalars\" type has invalid \"reqInt\" field \
            value. Clear operator can not be applied to a required field.",
        ]);
        Ok(())
    }

    #[test]
    fn valid_updates() -> Result<()> {
        let schema = test_schema();

        let result = update(
            &schema,
            "NodeWithScalars",
            json!({
                "optInt": {"clear": true},
                "reqInt": {"max": 10},
                "reqFloat": 2.5,
                "optString": "text",
                "optBool": {"clear": false},
                "optColor": null,
            }),
        )?;

        assert!(result.is_valid(), "{:?}", result.results);
        Ok(())
    }

    #[test]
    fn required_fields_are_not_required_in_updates() -> Result<()> {
        let schema = test_schema();

        let result = update(&schema, "NodeWithScalars", json!({}))?;

        assert!(result.is_valid());
        Ok(())
    }

    #[test]
    fn setting_a_required_field_to_null() -> Result<()> {
        let schema = test_schema();

        let result = update(&schema, "NodeWithScalars", json!({"reqInt": null}))?;

        assert_eq!(result.results, vec![
            "Update expression for \"NodeWithScalars\" type has invalid \"reqInt\" field \
            value. Required field can not be set to null.",
        ]);
        Ok(())
    }

    #[test]
    fn operator_misuse() -> Result<()> {
        let schema = test_schema();

        let result = update(
            &schema,
            "NodeWithScalars",
            json!({
                "id": id_for("NodeWithScalars"),
                "optInt": {"add": 1, "sub": 2},
                "optString": {"add": 1},
                "optFloat": {},
                "reqInt": {"mul": 1.5},
            }),
        )?;

        assert_eq!(result.results, vec![
            "Update expression for \"NodeWithScalars\" type cannot update \"id\" field.",
            "Update expression for \"NodeWithScalars\" type has conflicting operators for \
            \"optInt\" field: only one of \"add\", \"sub\" can be used.",
            "Update expression for \"NodeWithScalars\" type has invalid \"add\" operator for \
            \"optString\" field. Allowed operators: clear.",
            "Update expression for \"NodeWithScalars\" type has no operator for \"optFloat\" field.",
            "Update expression for \"NodeWithScalars\" type has invalid \"reqInt\" field value. \
            Operator \"mul\" expects an integer.",
        ]);
        Ok(())
    }
}

mod lists {
    use super::*;

    #[test]
    fn insert_with_modifiers() -> Result<()> {
        let schema = test_schema();

        let result = update(
            &schema,
            "NodeWithScalars",
            json!({
                "tags": {"insert": "a", "ascending": true, "keepLast": 10},
                "scores": {"delete": {"gt": 3}},
            }),
        )?;

        assert!(result.is_valid(), "{:?}", result.results);
        Ok(())
    }

    #[test]
    fn null_elements_and_bad_operands() -> Result<()> {
        let schema = test_schema();

        let result = update(
            &schema,
            "NodeWithScalars",
            json!({
                "tags": {"insert": ["a", null], "at": 0},
                "scores": {"pop": "middle"},
            }),
        )?;

        assert_eq!(result.results, vec![
            "Update expression for \"NodeWithScalars\" type has invalid \"tags[1]\" field \
            value. List elements can not be null.",
            "Update expression for \"NodeWithScalars\" type has invalid \"scores\" field value. \
            Operator \"pop\" expects \"first\" or \"last\".",
        ]);
        Ok(())
    }

    #[test]
    fn modifiers_need_insert() -> Result<()> {
        let schema = test_schema();

        let result = update(&schema, "NodeWithScalars", json!({"tags": {"at": 0}}))?;

        assert_eq!(result.results, vec![
            "Update expression for \"NodeWithScalars\" type has no operator for \"tags\" field.",
            "Update expression for \"NodeWithScalars\" type has \"at\" operator without \
            \"insert\" for \"tags\" field.",
        ]);
        Ok(())
    }

    #[test]
    fn conflicting_positions() -> Result<()> {
        let schema = test_schema();

        let result = update(
            &schema,
            "NodeWithScalars",
            json!({"tags": {"insert": "a", "at": 1, "descending": true}}),
        )?;

        assert_eq!(result.results, vec![
            "Update expression for \"NodeWithScalars\" type has conflicting operators for \
            \"tags\" field: only one of \"at\", \"descending\" can be used.",
        ]);
        Ok(())
    }

    #[test]
    fn delete_filter_regex() -> Result<()> {
        let schema = test_schema();

        let result = update(&schema, "NodeWithScalars", json!({"tags": {"delete": {"matches": "("}}}))?;

        assert_eq!(result.results, vec![
            "Update expression for \"NodeWithScalars\" type has invalid \"tags\" field value. \
            Operator \"matches\" expects a valid regular expression.",
        ]);
        Ok(())
    }

    #[test]
    fn object_list_sorting() -> Result<()> {
        let schema = test_schema();

        let valid = update(
            &schema,
            "Person",
            json!({"addresses": {"insert": {"street": "Main"}, "ascending": "zip"}}),
        )?;
        assert!(valid.is_valid(), "{:?}", valid.results);

        let invalid = update(
            &schema,
            "Person",
            json!({"addresses": {"insert": [{"zip": "1"}], "ascending": "nope"}}),
        )?;
        assert_eq!(invalid.results, vec![
            "Update expression for \"Person\" type is missing required \"addresses[0].street\" field.",
            "Update expression for \"Person\" type has invalid \"addresses\" field value. \
            Operator \"ascending\" expects the name of a scalar field of \"Address\".",
        ]);
        Ok(())
    }
}

mod objects_and_nodes {
    use super::*;

    #[test]
    fn nested_objects_are_replaced_whole() -> Result<()> {
        let schema = test_schema();

        let result = update(
            &schema,
            "Person",
            json!({"address": {"zip": "1"}, "name": {"clear": true}}),
        )?;

        assert_eq!(result.results, vec![
            "Update expression for \"Person\" type is missing required \"address.street\" field.",
            "Update expression for \"Person\" type has invalid \"name\" field value. Clear \
            operator can not be applied to a required field.",
        ]);
        Ok(())
    }

    #[test]
    fn clearing_optional_references() -> Result<()> {
        let schema = test_schema();

        let result = update(
            &schema,
            "Person",
            json!({
                "address": {"clear": true},
                "bestFriend": {"clear": true},
                "pets": {"insert": id_for("Pet")},
            }),
        )?;

        assert!(result.is_valid(), "{:?}", result.results);
        Ok(())
    }

    #[test]
    fn node_references_only_support_clear() -> Result<()> {
        let schema = test_schema();

        let result = update(&schema, "Person", json!({"bestFriend": {"eq": id_for("Person")}}))?;

        assert_eq!(result.results, vec![
            "Update expression for \"Person\" type has invalid \"eq\" operator for \
            \"bestFriend\" field. Allowed operators: clear.",
        ]);
        Ok(())
    }
}
