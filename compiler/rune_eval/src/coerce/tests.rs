#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn big(digits: &str) -> Value {
    Value::from_bigint(digits.parse::<BigInt>().unwrap())
}

#[test]
fn test_mortal() {
    assert_eq!(coerce("123", Realm::Mortal), Value::Int(123));
    assert_eq!(coerce(" -7 ", Realm::Mortal), Value::Int(-7));
    assert_eq!(coerce("x", Realm::Mortal), Value::string("x"));
    assert_eq!(coerce("hello", Realm::Mortal), Value::string("hello"));
    assert_eq!(coerce("1.5", Realm::Mortal), Value::string("1.5"));
}

#[test]
fn test_mortal_wide_integers_keep_every_digit() {
    let value = coerce("123456789012345678901234567890", Realm::Mortal);
    assert_eq!(value, big("123456789012345678901234567890"));
    assert_eq!(value.to_string(), "123456789012345678901234567890");
    assert_eq!(value.type_name(), "int");
    assert_eq!(
        coerce("-9223372036854775809", Realm::Mortal),
        big("-9223372036854775809")
    );
}

#[test]
fn test_spirit() {
    assert_eq!(coerce("12.5", Realm::Spirit), Value::Float(12.5));
    assert_eq!(coerce("42", Realm::Spirit), Value::Int(42));
    assert_eq!(
        coerce("99999999999999999999", Realm::Spirit),
        big("99999999999999999999")
    );
    assert_eq!(
        coerce("123456789012345678901", Realm::Spirit).to_string(),
        "123456789012345678901"
    );
    assert_eq!(coerce("1.2.3", Realm::Spirit), Value::string("1.2.3"));
    assert_eq!(coerce("ether", Realm::Spirit), Value::string("ether"));
}

#[test]
fn test_shadow_words() {
    for word in ["true", "YES", "Light", "on", "1"] {
        assert_eq!(coerce(word, Realm::Shadow), Value::Bool(true), "{word}");
    }
    for word in ["false", "No", "DARK", "off", "0"] {
        assert_eq!(coerce(word, Realm::Shadow), Value::Bool(false), "{word}");
    }
}

#[test]
fn test_shadow_binary_and_truthiness() {
    assert_eq!(coerce("101", Realm::Shadow), Value::Int(5));
    assert_eq!(coerce("0010", Realm::Shadow), Value::Int(2));
    assert_eq!(coerce("maybe", Realm::Shadow), Value::Bool(true));
}

#[test]
fn test_shadow_empty_is_text() {
    assert_eq!(coerce("", Realm::Shadow), Value::string(""));
    assert_eq!(type_label("", Realm::Shadow), "binary");
}

#[test]
fn test_shadow_wide_binary_keeps_every_bit() {
    let wide = "1".repeat(80);
    let value = coerce(&wide, Realm::Shadow);
    assert_eq!(value, Value::from_bigint((BigInt::from(1) << 80u32) - 1));
    assert_eq!(value.to_string(), "1208925819614629174706175");
}

#[test]
fn test_void() {
    assert_eq!(coerce("null", Realm::Void), Value::Null);
    assert_eq!(coerce("None", Realm::Void), Value::Null);
    assert_eq!(coerce("VOID", Realm::Void), Value::Null);
    assert_eq!(coerce("", Realm::Void), Value::Null);
    assert_eq!(coerce("something", Realm::Void), Value::string("something"));
}

#[test]
fn test_astral() {
    assert_eq!(
        coerce("[1, 'two']", Realm::Astral),
        Value::list(vec![Value::Int(1), Value::string("two")])
    );
    assert_eq!(
        coerce("a,b, c", Realm::Astral),
        Value::list(vec![
            Value::string("a"),
            Value::string("b"),
            Value::string(" c"),
        ])
    );
    assert_eq!(
        coerce("lonely", Realm::Astral),
        Value::list(vec![Value::string("lonely")])
    );
}

#[test]
fn test_literals_keep_wide_integers() {
    assert_eq!(
        coerce("[99999999999999999999, 1]", Realm::Astral),
        Value::list(vec![big("99999999999999999999"), Value::Int(1)])
    );
    assert_eq!(
        coerce("{'hoard': -123456789012345678901}", Realm::Divine),
        Value::map([("hoard", big("-123456789012345678901"))])
    );
}

#[test]
fn test_astral_malformed_literal_keeps_text() {
    assert_eq!(coerce("[1,]]", Realm::Astral), Value::string("[1,]]"));
    assert_eq!(coerce("[os]", Realm::Astral), Value::string("[os]"));
}

#[test]
fn test_divine() {
    assert_eq!(
        coerce("{'power': 9000}", Realm::Divine),
        Value::map([("power", Value::Int(9000))])
    );
    assert_eq!(
        coerce("plain", Realm::Divine),
        Value::map([("value", Value::string("plain"))])
    );
    assert_eq!(coerce("{broken", Realm::Divine), Value::map([("value", Value::string("{broken"))]));
    assert_eq!(coerce("{1 2}", Realm::Divine), Value::string("{1 2}"));
}

#[test]
fn test_temporal() {
    let naive = chrono::NaiveDate::from_ymd_opt(2024, 1, 15)
        .and_then(|d| d.and_hms_opt(10, 30, 0));
    assert_eq!(
        coerce("2024-01-15T10:30:00", Realm::Temporal),
        Value::Timestamp(Timestamp::Naive(naive.unwrap()))
    );
    assert_eq!(
        coerce("2024-01-15 10:30", Realm::Temporal),
        Value::Timestamp(Timestamp::Naive(naive.unwrap()))
    );

    let midnight = chrono::NaiveDate::from_ymd_opt(2024, 1, 15).and_then(|d| d.and_hms_opt(0, 0, 0));
    assert_eq!(
        coerce("2024-01-15", Realm::Temporal),
        Value::Timestamp(Timestamp::Naive(midnight.unwrap()))
    );
}

#[test]
fn test_temporal_with_offset() {
    let value = coerce("2024-01-15T10:30:00+05:00", Realm::Temporal);
    assert!(matches!(value, Value::Timestamp(Timestamp::Zoned(_))));
    assert_eq!(value.to_string(), "2024-01-15T10:30:00+05:00");
}

#[test]
fn test_temporal_fallback() {
    assert_eq!(coerce("tomorrow", Realm::Temporal), Value::string("tomorrow"));
    assert_eq!(
        coerce("2024-13-40", Realm::Temporal),
        Value::string("2024-13-40")
    );
}

#[test]
fn test_type_labels() {
    assert_eq!(type_label("5", Realm::Mortal), "int");
    assert_eq!(type_label("x", Realm::Mortal), "char");
    assert_eq!(type_label("word", Realm::Mortal), "string");
    assert_eq!(type_label("123456789012345678901", Realm::Mortal), "int");
    assert_eq!(type_label("1.5", Realm::Spirit), "double");
    assert_eq!(type_label("12", Realm::Spirit), "int");
    assert_eq!(type_label("3000000000", Realm::Spirit), "long");
    assert_eq!(type_label("99999999999999999999", Realm::Spirit), "long");
    assert_eq!(type_label("mist", Realm::Spirit), "string");
    assert_eq!(type_label("dark", Realm::Shadow), "bool");
    assert_eq!(type_label("1011", Realm::Shadow), "binary");
    assert_eq!(type_label("[1]", Realm::Astral), "astral");
    assert_eq!(type_label("now", Realm::Temporal), "temporal");
}

proptest! {
    #[test]
    fn coerce_is_total(raw in ".{0,40}") {
        for realm in Realm::ALL {
            let _ = coerce(&raw, realm);
            let _ = type_label(&raw, realm);
        }
    }

    #[test]
    fn mortal_integers_round_trip(n in any::<i64>()) {
        prop_assert_eq!(coerce(&n.to_string(), Realm::Mortal), Value::Int(n));
    }
}
