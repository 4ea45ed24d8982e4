use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_flat_list() {
    assert_eq!(
        parse_list("[1, 2.5, 'three', \"four\", true, None]"),
        Ok(vec![
            Value::Int(1),
            Value::Float(2.5),
            Value::string("three"),
            Value::string("four"),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn test_empty_and_trailing_comma() {
    assert_eq!(parse_list("[]"), Ok(vec![]));
    assert_eq!(parse_list("[1, 2,]"), Ok(vec![Value::Int(1), Value::Int(2)]));
    assert_eq!(parse_map("{}"), Ok(BTreeMap::new()));
}

#[test]
fn test_nested_structures() {
    let value = parse_literal("{'name': 'Merlin', level: 7, spells: ['fire', [1, 2]]}");
    let expected = Value::map([
        ("name", Value::string("Merlin")),
        ("level", Value::Int(7)),
        (
            "spells",
            Value::list(vec![
                Value::string("fire"),
                Value::list(vec![Value::Int(1), Value::Int(2)]),
            ]),
        ),
    ]);
    assert_eq!(value, Ok(expected));
}

#[test]
fn test_integer_keys_become_text() {
    let entries = parse_map("{1: 'one'}");
    assert_eq!(
        entries.map(|m| m.get("1").cloned()),
        Ok(Some(Value::string("one")))
    );
}

#[test]
fn test_escapes() {
    assert_eq!(
        parse_literal(r#""line\nbreak \"quoted\"""#),
        Ok(Value::string("line\nbreak \"quoted\""))
    );
}

#[test]
fn test_negative_and_exponent_numbers() {
    assert_eq!(
        parse_list("[-3, +4, 1e3, -0.5]"),
        Ok(vec![
            Value::Int(-3),
            Value::Int(4),
            Value::Float(1000.0),
            Value::Float(-0.5),
        ])
    );
}

#[test]
fn test_rejects_expressions() {
    assert!(parse_literal("[1 + 2]").is_err());
    assert!(parse_literal("[__import__('os')]").is_err());
    assert!(parse_literal("[x]").is_err());
    assert!(parse_literal("[1] [2]").is_err());
}

#[test]
fn test_rejects_unterminated() {
    assert_eq!(parse_literal("[1, 2"), Err(LiteralError::UnexpectedEnd));
    assert_eq!(parse_literal("{'a': 1"), Err(LiteralError::UnexpectedEnd));
}

#[test]
fn test_trailing_input() {
    assert_eq!(parse_literal("[1] ]"), Err(LiteralError::Trailing(4)));
}

#[test]
fn test_wrong_shape() {
    assert_eq!(parse_list("{}"), Err(LiteralError::WrongShape("list")));
    assert_eq!(parse_map("[]"), Err(LiteralError::WrongShape("map")));
}

#[test]
fn test_depth_limit() {
    let deep = format!("{}{}", "[".repeat(MAX_DEPTH + 1), "]".repeat(MAX_DEPTH + 1));
    assert_eq!(parse_literal(&deep), Err(LiteralError::TooDeep));

    let ok = format!("{}{}", "[".repeat(MAX_DEPTH), "]".repeat(MAX_DEPTH));
    assert!(parse_literal(&ok).is_ok());
}

#[test]
fn test_integer_overflow_is_invalid_token() {
    assert_eq!(
        parse_literal("[99999999999999999999]"),
        Err(LiteralError::InvalidToken(1))
    );
}
