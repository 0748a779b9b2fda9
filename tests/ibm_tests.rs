use json_conditional::{ConditionalError, ConditionalParser, IbmCondition, TranslatorOptions};

fn translate(input: &str) -> Result<String, String> {
    IbmCondition::new().parse(input).map_err(|e| e.to_string())
}

// ============================================================================
// Field paths
// ============================================================================

#[test]
fn test_field_equality_string() {
    assert_eq!(translate(r#"{"name": "Ann"}"#).unwrap(), " name  = 'Ann' ");
}

#[test]
fn test_field_equality_number() {
    assert_eq!(translate(r#"{"t.borrado": 0}"#).unwrap(), " t.borrado  = 0 ");
}

#[test]
fn test_field_with_operator_map() {
    assert_eq!(translate(r#"{"age": {"$gte": 18}}"#).unwrap(), " age  >= 18 ");
}

#[test]
fn test_field_with_several_operators_concatenates_in_order() {
    assert_eq!(
        translate(r#"{"age": {"$gte": 18, "$lt": 65}}"#).unwrap(),
        " age  >= 18  < 65 "
    );
}

// ============================================================================
// Relational operators
// ============================================================================

#[test]
fn test_relational_operators() {
    assert_eq!(translate(r#"{"a": {"$lte": 300}}"#).unwrap(), " a  <= 300 ");
    assert_eq!(translate(r#"{"a": {"$gt": 1.5}}"#).unwrap(), " a  > 1.5 ");
    assert_eq!(translate(r#"{"a": {"$lt": "m"}}"#).unwrap(), " a  < 'm' ");
}

#[test]
fn test_integral_float_renders_without_decimal() {
    assert_eq!(translate(r#"{"a": {"$lte": 300.0}}"#).unwrap(), " a  <= 300 ");
}

#[test]
fn test_integer_above_i64_range_is_exact() {
    assert_eq!(
        translate(r#"{"a": {"$lte": 18446744073709551615}}"#).unwrap(),
        " a  <= 18446744073709551615 "
    );
    assert_eq!(
        translate(r#"{"id": {"$in": [9223372036854775808, 1]}}"#).unwrap(),
        " id  IN (9223372036854775808,1)"
    );
}

#[test]
fn test_ne_never_quotes_strings() {
    // Known asymmetry: $ne emits strings bare while every other comparison
    // quotes them. Kept as-is because existing callers depend on the output.
    assert_eq!(translate(r#"{"name": {"$ne": "Ann"}}"#).unwrap(), " name  != Ann");
    assert_eq!(translate(r#"{"n": {"$ne": 3}}"#).unwrap(), " n  != 3");
}

// ============================================================================
// Lists
// ============================================================================

#[test]
fn test_in_numbers() {
    assert_eq!(translate(r#"{"id": {"$in": [1, 2]}}"#).unwrap(), " id  IN (1,2)");
}

#[test]
fn test_in_strings() {
    assert_eq!(translate(r#"{"c": {"$in": ["a", "b"]}}"#).unwrap(), " c  IN ('a','b')");
}

#[test]
fn test_nin() {
    assert_eq!(translate(r#"{"id": {"$nin": [4, 5]}}"#).unwrap(), " id  NOT IN (4,5)");
    assert_eq!(translate(r#"{"c": {"$nin": ["x"]}}"#).unwrap(), " c  NOT IN ('x')");
}

#[test]
fn test_in_empty_is_bad_formatted() {
    assert_eq!(translate(r#"{"$in": []}"#).unwrap_err(), "IN condition bad formatted");
    assert_eq!(translate(r#"{"id": {"$in": 3}}"#).unwrap_err(), "IN condition bad formatted");
}

#[test]
fn test_nin_bad_formatted() {
    assert_eq!(translate(r#"{"id": {"$nin": []}}"#).unwrap_err(), "NOT IN condition bad formatted");
}

#[test]
fn test_in_with_unsupported_first_element() {
    assert_eq!(translate(r#"{"id": {"$in": [true]}}"#).unwrap_err(), "IN condition bad formatted");
}

// ============================================================================
// Combinators
// ============================================================================

#[test]
fn test_and_group() {
    assert_eq!(
        translate(r#"{"$and": [{"a": 1}, {"b": "x"}]}"#).unwrap(),
        " ( a  = 1  AND  b  = 'x'  ) "
    );
}

#[test]
fn test_or_single_operand() {
    assert_eq!(translate(r#"{"$or": [{"a": 1}]}"#).unwrap(), " ( a  = 1  ) ");
}

#[test]
fn test_group_object_with_several_keys_yields_several_operands() {
    assert_eq!(
        translate(r#"{"$and": [{"a": 1, "b": 2}]}"#).unwrap(),
        " ( a  = 1  AND  b  = 2  ) "
    );
}

#[test]
fn test_and_or_bad_formatted() {
    assert_eq!(translate(r#"{"$and": []}"#).unwrap_err(), "AND condition bad formatted");
    assert_eq!(translate(r#"{"$and": {"a": 1}}"#).unwrap_err(), "AND condition bad formatted");
    assert_eq!(translate(r#"{"$or": [1, 2]}"#).unwrap_err(), "OR condition bad formatted");
    assert_eq!(translate(r#"{"$or": [{}]}"#).unwrap_err(), "OR condition bad formatted");
}

#[test]
fn test_not() {
    assert_eq!(translate(r#"{"$not": {"a": {"$gt": 5}}}"#).unwrap(), " NOT ( a  > 5 )");
}

#[test]
fn test_not_bad_formatted() {
    assert_eq!(translate(r#"{"$not": [1]}"#).unwrap_err(), "NOT condition bad formatted");
}

#[test]
fn test_nor_always_fails() {
    for input in [
        r#"{"$nor": [{"a": 1}]}"#,
        r#"{"$nor": 5}"#,
        r#"{"$and": [{"$nor": {}}]}"#,
        r#"{"a": {"$nor": null}}"#,
    ] {
        assert_eq!(translate(input).unwrap_err(), "NOR condition not implemented");
    }
}

#[test]
fn test_operators_are_case_insensitive() {
    assert_eq!(
        translate(r#"{"$AND": [{"a": {"$LTE": 3}}]}"#).unwrap(),
        " ( a  <= 3  ) "
    );
}

#[test]
fn test_unknown_dollar_operator() {
    assert_eq!(translate(r#"{"a": {"$regex": "x"}}"#).unwrap_err(), "$regex operator not supported");
}

// ============================================================================
// Documents and errors
// ============================================================================

#[test]
fn test_empty_document() {
    assert_eq!(translate("{}").unwrap(), "");
}

#[test]
fn test_top_level_keys_concatenate_without_separator() {
    assert_eq!(translate(r#"{"a": 1, "b": 2}"#).unwrap(), " a  = 1  b  = 2 ");
}

#[test]
fn test_error_deep_inside_discards_fragment() {
    let err = IbmCondition::new()
        .parse(r#"{"$or": [{"a": 1}, {"$and": [{"b": 2}, {"c": {"$in": []}}]}]}"#)
        .unwrap_err();
    assert!(matches!(err, ConditionalError::BadFormatted("IN")));
}

#[test]
fn test_invalid_json_is_decode_error() {
    let err = IbmCondition::new().parse(r#"{"a": "#).unwrap_err();
    assert!(matches!(err, ConditionalError::Decode(_)));
    assert!(err.is_decode());
}

#[test]
fn test_non_object_document() {
    let err = IbmCondition::new().parse("[1, 2]").unwrap_err();
    assert!(matches!(err, ConditionalError::NotAnObject("array")));
    assert!(err.is_decode());
}

#[test]
fn test_depth_limit() {
    let parser = IbmCondition::with_options(TranslatorOptions::default().with_max_depth(2));
    assert_eq!(parser.parse(r#"{"a": {"$gt": 1}}"#).unwrap(), " a  > 1 ");

    let err = parser.parse(r#"{"$not": {"a": {"$gt": 1}}}"#).unwrap_err();
    assert!(matches!(err, ConditionalError::TooDeep(2)));
    assert_eq!(err.to_string(), "condition nested deeper than 2 levels");
}

#[test]
fn test_default_depth_rejects_runaway_nesting() {
    let mut input = String::new();
    for _ in 0..70 {
        input.push_str(r#"{"$not": "#);
    }
    input.push_str(r#"{"a": 1}"#);
    for _ in 0..70 {
        input.push('}');
    }
    let err = IbmCondition::new().parse(&input).unwrap_err();
    assert!(matches!(err, ConditionalError::TooDeep(64)));
}
