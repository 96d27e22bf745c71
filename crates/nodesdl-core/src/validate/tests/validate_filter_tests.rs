use crate::validate::Context;
use crate::validate::ContextError;
use crate::validate::ContextKind;
use crate::validate::ValidationResult;
use crate::validate::tests::id_for;
use crate::validate::tests::test_schema;
use crate::validate::validate_filter;
use crate::Schema;
use serde_json::Value as JsonValue;
use serde_json::json;

type Result<T> = std::result::Result<T, ContextError>;

fn filter<'s>(schema: &'s Schema, type_name: &str, value: JsonValue) -> Result<ValidationResult<'s>> {
    validate_filter(Context::for_type(ContextKind::Filter, schema, type_name), &value)
}

mod scalars {
    use super::*;

    #[test]
    fn unknown_operator_lists_the_allowed_ones() -> Result<()> {
        let schema = test_schema();

        let result = filter(&schema, "NodeWithScalars", json!({"optInt": {"xp": 123}}))?;

        assert_eq!(result.results, vec![
            "Filter expression for \"NodeWithScalars\" type has invalid \"xp\" operator for \
            \"optInt\" field. Allowed operators: eq, ne, lt, gt, lte, gte, exists.",
        ]);
        Ok(())
    }

    #[test]
    fn combined_operators() -> Result<()> {
        let schema = test_schema();

        let result = filter(
            &schema,
            "NodeWithScalars",
            json!({
                "optInt": {"gt": 1, "lt": 10},
                "optString": {"matches": "^a", "exists": true},
                "optColor": {"ne": "RED"},
                "reqInt": 5,
                "optFloat": {"eq": null},
                "tags": {"some": {"eq": "x"}, "length": 2},
                "scores": [1, 2],
            }),
        )?;

        assert!(result.is_valid(), "{:?}", result.results);
        Ok(())
    }

    #[test]
    fn operand_types() -> Result<()> {
        let schema = test_schema();

        let result = filter(
            &schema,
            "NodeWithScalars",
            json!({
                "optFloat": {"eq": "x"},
                "optBool": {"exists": "yes"},
                "optInt": {"matches": "1"},
                "tags": {"length": -1, "empty": 1},
            }),
        )?;

        assert_eq!(result.results, vec![
            "Filter expression for \"NodeWithScalars\" type has invalid \"optFloat\" field \
            value. Operator \"eq\" expects a number.",
            "Filter expression for \"NodeWithScalars\" type has invalid \"optBool\" field \
            value. Operator \"exists\" expects a boolean.",
            "Filter expression for \"NodeWithScalars\" type has invalid \"matches\" operator \
            for \"optInt\" field. Allowed operators: eq, ne, lt, gt, lte, gte, exists.",
            "Filter expression for \"NodeWithScalars\" type has invalid \"tags\" field value. \
            Operator \"length\" expects a non-negative integer.",
            "Filter expression for \"NodeWithScalars\" type has invalid \"tags\" field value. \
            Operator \"empty\" expects a boolean.",
        ]);
        Ok(())
    }

    #[test]
    fn non_object_filter() -> Result<()> {
        let schema = test_schema();

        let result = filter(&schema, "Person", json!("name"))?;

        assert_eq!(result.results, vec!["Filter expression for \"Person\" type must be an object."]);
        Ok(())
    }
}

mod objects_and_nodes {
    use super::*;

    #[test]
    fn object_lists_need_filter_objects() -> Result<()> {
        let schema = test_schema();

        let result = filter(
            &schema,
            "Person",
            json!({
                "addresses": [{"street": "Main"}],
                "address": {"zip": {"eq": 1}},
            }),
        )?;

        assert_eq!(result.results, vec![
            "Filter expression for \"Person\" type has invalid \"addresses\" field value. \
            Expected a filter object.",
            "Filter expression for \"Person\" type has invalid \"address.zip\" field value. \
            Operator \"eq\" expects a string.",
        ]);
        Ok(())
    }

    #[test]
    fn object_list_operators() -> Result<()> {
        let schema = test_schema();

        let valid = filter(
            &schema,
            "Person",
            json!({"addresses": {"some": {"zip": {"eq": "1"}}, "empty": false}}),
        )?;
        assert!(valid.is_valid(), "{:?}", valid.results);

        let invalid = filter(&schema, "Person", json!({"addresses": {"eq": []}}))?;
        assert_eq!(invalid.results, vec![
            "Filter expression for \"Person\" type has invalid \"eq\" operator for \
            \"addresses\" field. Allowed operators: exists, length, empty, some, every, none.",
        ]);
        Ok(())
    }

    #[test]
    fn node_references() -> Result<()> {
        let schema = test_schema();

        let result = filter(
            &schema,
            "Person",
            json!({
                "bestFriend": {"eq": id_for("Pet"), "exists": true},
                "companion": id_for("Pet"),
                "pets": {"every": {"ne": id_for("Pet")}},
            }),
        )?;

        assert_eq!(result.results, vec![
            "Filter expression for \"Person\" type has invalid \"bestFriend\" field value. \
            Operator \"eq\" expects an id for \"Person\".",
        ]);
        Ok(())
    }

    #[test]
    fn interface_and_union_fields() -> Result<()> {
        let schema = test_schema();

        let result = filter(
            &schema,
            "Drawing",
            json!({
                "shape": {"type": "Circle", "area": {"gt": 1}},
                "shapes": {"some": {"type": ["Circle", "Triangle"]}},
                "media": {"url": {"eq": "x"}, "type": "Clip"},
            }),
        )?;

        assert_eq!(result.results, vec![
            "Filter expression for \"Drawing\" type has invalid \"shapes\" field value. \
            Operator \"type\" expects one of \"Circle\", \"Square\" or a list of them.",
            "Filter expression for \"Drawing\" type has invalid \"url\" operator for \
            \"media\" field. Allowed operators: type, exists.",
        ]);
        Ok(())
    }
}

mod abstract_node_references {
    use super::*;

    #[test]
    fn interface_and_union_references_filter_by_type() -> Result<()> {
        let schema = test_schema();

        let result = filter(
            &schema,
            "Person",
            json!({
                "named": {"type": "Pet", "exists": true},
                "companion": {"type": ["Pet", "Robot"], "ne": id_for("Robot")},
                "acquaintances": {"some": {"type": "Robot"}, "none": {"eq": id_for("Pet")}},
            }),
        )?;

        assert!(result.is_valid(), "{:?}", result.results);
        Ok(())
    }

    #[test]
    fn type_operand_must_name_a_possible_type() -> Result<()> {
        let schema = test_schema();

        let result = filter(
            &schema,
            "Person",
            json!({
                "named": {"type": "Person"},
                "acquaintances": {"every": {"type": []}},
            }),
        )?;

        assert_eq!(result.results, vec![
            "Filter expression for \"Person\" type has invalid \"named\" field value. \
            Operator \"type\" expects one of \"Pet\", \"Robot\" or a list of them.",
            "Filter expression for \"Person\" type has invalid \"acquaintances\" field value. \
            Operator \"type\" expects one of \"Pet\", \"Robot\" or a list of them.",
        ]);
        Ok(())
    }

    #[test]
    fn concrete_references_have_no_type_operator() -> Result<()> {
        let schema = test_schema();

        let result = filter(&schema, "Person", json!({"bestFriend": {"type": "Person"}}))?;

        assert_eq!(result.results, vec![
            "Filter expression for \"Person\" type has invalid \"type\" operator for \
            \"bestFriend\" field. Allowed operators: eq, ne, exists.",
        ]);
        Ok(())
    }
}

mod shadowed_pseudo_operators {
    use super::*;

    #[test]
    fn interface_field_named_type_is_filtered_as_a_field() -> Result<()> {
        let schema = test_schema();

        let valid = filter(
            &schema,
            "Drawing",
            json!({"label": {"type": {"eq": "hello"}, "exists": true}}),
        )?;
        assert!(valid.is_valid(), "{:?}", valid.results);

        let plain = filter(&schema, "Drawing", json!({"label": {"type": "hello"}}))?;
        assert!(plain.is_valid(), "{:?}", plain.results);

        let invalid = filter(&schema, "Drawing", json!({"label": {"type": 5}}))?;
        assert_eq!(invalid.results, vec![
            "Filter expression for \"Drawing\" type has invalid \"label.type\" field value. \
            Expected a string.",
        ]);
        Ok(())
    }
}

mod targets {
    use super::*;

    #[test]
    fn interface_target() -> Result<()> {
        let schema = test_schema();

        let valid = filter(&schema, "Named", json!({"type": "Pet", "name": {"eq": "Rex"}}))?;
        assert!(valid.is_valid(), "{:?}", valid.results);

        let invalid = filter(&schema, "Named", json!({"type": 5}))?;
        assert_eq!(invalid.results, vec![
            "Filter expression for \"Named\" type has invalid value. Operator \"type\" expects \
            one of \"Pet\", \"Robot\" or a list of them.",
        ]);
        Ok(())
    }

    #[test]
    fn connection_field_target_filters_its_nodes() -> Result<()> {
        let schema = test_schema();
        let context = Context::for_field(ContextKind::Filter, &schema, "Person", "friends");

        let result = validate_filter(context, &json!({"name": {"eq": 1}}))?;

        assert_eq!(result.results, vec![
            "Filter expression for \"Person\" type has invalid \"name\" field value. Operator \
            \"eq\" expects a string.",
        ]);
        Ok(())
    }

    #[test]
    fn scalar_field_target() {
        let schema = test_schema();
        let context = Context::for_field(ContextKind::Filter, &schema, "NodeWithScalars", "tags");

        assert_eq!(
            validate_filter(context, &json!({})).unwrap_err(),
            ContextError::NotFilterable {
                type_name: "NodeWithScalars".to_string(),
                field_name: "tags".to_string(),
                kind: "scalar list",
            },
        );
    }

    #[test]
    fn unknown_field_target() {
        let schema = test_schema();
        let context = Context::for_field(ContextKind::Filter, &schema, "Person", "enemies");

        assert_eq!(
            validate_filter(context, &json!({})).unwrap_err(),
            ContextError::UnknownField {
                type_name: "Person".to_string(),
                field_name: "enemies".to_string(),
            },
        );
    }

    #[test]
    fn enum_target() {
        let schema = test_schema();

        assert_eq!(
            filter(&schema, "Color", json!({})).unwrap_err(),
            ContextError::UnsupportedTargetType {
                operation: "validate_filter",
                type_name: "Color".to_string(),
                kind: "enum",
            },
        );
    }
}
