//! Realm-driven text-to-value coercion.
//!
//! Each realm has a pure `(text) -> Value` rule. Rules are total: whatever
//! the input, they produce a value. When a rule finds no valid interpretation
//! it records a [`ConversionFailure`] and falls back to the unmodified text.

use std::num::IntErrorKind;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use num_bigint::BigInt;
use rune_ir::Realm;

use crate::errors::ConversionFailure;
use crate::literal;
use crate::value::{Timestamp, Value};

const TRUTHY_WORDS: [&str; 5] = ["true", "yes", "light", "1", "on"];
const FALSY_WORDS: [&str; 5] = ["false", "no", "dark", "0", "off"];
const NULL_WORDS: [&str; 4] = ["null", "none", "void", ""];
/// Words the SHADOW type label reports as `bool` (the digits are `binary`).
const BOOL_LABEL_WORDS: [&str; 6] = ["true", "false", "yes", "no", "light", "dark"];

/// Signed magnitude above which SPIRIT integers are labelled `long`.
const LONG_THRESHOLD: i64 = 1 << 31;

/// Coerce raw input text according to `realm`.
pub fn coerce(raw: &str, realm: Realm) -> Value {
    match realm {
        Realm::Mortal => mortal(raw),
        Realm::Spirit => spirit(raw),
        Realm::Shadow => shadow(raw),
        Realm::Void => void(raw),
        Realm::Astral => astral(raw),
        Realm::Divine => divine(raw),
        Realm::Temporal => temporal(raw),
    }
}

/// Total fallback: keep the unmodified text.
fn fall_back(raw: &str, failure: &ConversionFailure) -> Value {
    tracing::trace!(%failure, raw, "coercion fell back to raw text");
    Value::string(raw)
}

/// Integer of any magnitude. Only digits (with an optional sign) qualify;
/// text that overflows `i64` is reparsed as a `BigInt`.
fn parse_int(raw: &str) -> Option<Value> {
    let text = raw.trim();
    match text.parse::<i64>() {
        Ok(n) => Some(Value::Int(n)),
        Err(e) if is_overflow(e.kind()) => text.parse::<BigInt>().ok().map(Value::from_bigint),
        Err(_) => None,
    }
}

fn is_overflow(kind: &IntErrorKind) -> bool {
    matches!(kind, IntErrorKind::PosOverflow | IntErrorKind::NegOverflow)
}

fn parse_float(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

/// Vacuously true for empty text; the base-2 parse then rejects it.
fn is_binary_digits(raw: &str) -> bool {
    raw.chars().all(|c| c == '0' || c == '1')
}

/// MORTAL: integer, else single character, else text.
///
/// A single character and free text are both stored as text; they differ
/// only in the type label.
pub fn mortal(raw: &str) -> Value {
    parse_int(raw).unwrap_or_else(|| Value::string(raw))
}

/// SPIRIT: float when the text has a `.`, else integer of any magnitude,
/// else text.
pub fn spirit(raw: &str) -> Value {
    if raw.contains('.') {
        if let Some(x) = parse_float(raw) {
            return Value::Float(x);
        }
    }
    parse_int(raw).unwrap_or_else(|| Value::string(raw))
}

/// SHADOW: boolean words, else binary digits, else truthiness of the text.
///
/// Binary digits of any length are accepted. Empty input counts as binary
/// digits, fails the base-2 parse and is kept as text.
pub fn shadow(raw: &str) -> Value {
    let lower = raw.to_lowercase();
    if TRUTHY_WORDS.contains(&lower.as_str()) {
        return Value::Bool(true);
    }
    if FALSY_WORDS.contains(&lower.as_str()) {
        return Value::Bool(false);
    }
    if is_binary_digits(raw) {
        return match i64::from_str_radix(raw, 2) {
            Ok(n) => Value::Int(n),
            Err(e) if is_overflow(e.kind()) => BigInt::parse_bytes(raw.as_bytes(), 2)
                .map_or_else(
                    || fall_back(raw, &ConversionFailure::new(Realm::Shadow, e.to_string())),
                    Value::from_bigint,
                ),
            Err(e) => fall_back(raw, &ConversionFailure::new(Realm::Shadow, e.to_string())),
        };
    }
    Value::Bool(true)
}

/// VOID: null words (or empty input) become null, anything else stays text.
pub fn void(raw: &str) -> Value {
    if NULL_WORDS.contains(&raw.to_lowercase().as_str()) {
        Value::Null
    } else {
        Value::string(raw)
    }
}

/// ASTRAL: `[...]` list literal, else comma-separated fragments, else a
/// singleton list.
pub fn astral(raw: &str) -> Value {
    if raw.starts_with('[') && raw.ends_with(']') {
        return match literal::parse_list(raw) {
            Ok(items) => Value::List(items),
            Err(e) => fall_back(raw, &ConversionFailure::new(Realm::Astral, e.to_string())),
        };
    }
    if raw.contains(',') {
        return Value::List(raw.split(',').map(Value::string).collect());
    }
    Value::list(vec![Value::string(raw)])
}

/// DIVINE: `{...}` key/value literal, else `{"value": text}`.
pub fn divine(raw: &str) -> Value {
    if raw.starts_with('{') && raw.ends_with('}') {
        return match literal::parse_map(raw) {
            Ok(entries) => Value::Map(entries),
            Err(e) => fall_back(raw, &ConversionFailure::new(Realm::Divine, e.to_string())),
        };
    }
    Value::map([("value", Value::string(raw))])
}

/// TEMPORAL: ISO-8601 timestamp, else text.
pub fn temporal(raw: &str) -> Value {
    match parse_timestamp(raw) {
        Some(ts) => Value::Timestamp(ts),
        None => fall_back(
            raw,
            &ConversionFailure::new(Realm::Temporal, "not an ISO-8601 timestamp"),
        ),
    }
}

const NAIVE_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const ZONED_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
];

/// Parse the ISO-8601 shapes people actually type: a date, a date and time
/// (with `T` or a space), optionally with seconds, fractions and an offset.
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let text = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(Timestamp::Zoned(dt));
    }
    for format in ZONED_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, format) {
            return Some(Timestamp::Zoned(dt));
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(Timestamp::Naive(dt));
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(Timestamp::Naive)
}

/// Type label recorded for a summoned binding.
///
/// Computed from the raw text, so it names the specific type family within
/// the realm (`int` vs `char`, `double` vs `long`, `bool` vs `binary`).
pub fn type_label(raw: &str, realm: Realm) -> &'static str {
    match realm {
        Realm::Mortal => {
            if parse_int(raw).is_some() {
                "int"
            } else if raw.chars().count() == 1 {
                "char"
            } else {
                "string"
            }
        }
        Realm::Spirit => {
            if raw.contains('.') {
                return if parse_float(raw).is_some() {
                    "double"
                } else {
                    "string"
                };
            }
            match parse_int(raw) {
                Some(Value::Int(n)) if n.unsigned_abs() <= LONG_THRESHOLD.unsigned_abs() => "int",
                Some(_) => "long",
                None => "string",
            }
        }
        Realm::Shadow => {
            if BOOL_LABEL_WORDS.contains(&raw.to_lowercase().as_str()) {
                "bool"
            } else if is_binary_digits(raw) {
                "binary"
            } else {
                "bool"
            }
        }
        Realm::Void | Realm::Astral | Realm::Divine | Realm::Temporal => realm.as_str(),
    }
}

#[cfg(test)]
mod tests;
