//! Realms: the coarse category attached to a variable when it is summoned.
//!
//! A realm selects the text-to-value coercion rule used by `INVOKE`. It is
//! not part of the value itself.

use std::fmt;
use std::str::FromStr;

/// The closed set of realms.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Realm {
    /// Integers and single characters.
    Mortal,
    /// Floating-point values, large integers, free text.
    Spirit,
    /// Booleans and binary digits.
    Shadow,
    /// Null.
    Void,
    /// Lists.
    Astral,
    /// Key/value objects.
    Divine,
    /// Timestamps.
    Temporal,
}

impl Realm {
    /// Every realm, in declaration order.
    pub const ALL: [Realm; 7] = [
        Realm::Mortal,
        Realm::Spirit,
        Realm::Shadow,
        Realm::Void,
        Realm::Astral,
        Realm::Divine,
        Realm::Temporal,
    ];

    /// Lowercase source-level name (`mortal`, `spirit`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            Realm::Mortal => "mortal",
            Realm::Spirit => "spirit",
            Realm::Shadow => "shadow",
            Realm::Void => "void",
            Realm::Astral => "astral",
            Realm::Divine => "divine",
            Realm::Temporal => "temporal",
        }
    }

    /// Type families a value summoned from this realm may take.
    ///
    /// Used by the front end to report per-variable type information before
    /// any value exists.
    pub const fn possible_types(self) -> &'static [&'static str] {
        match self {
            Realm::Mortal => &["int", "char"],
            Realm::Spirit => &["double", "long", "string"],
            Realm::Shadow => &["bool", "binary"],
            Realm::Void => &["null", "undefined"],
            Realm::Astral => &["array", "list"],
            Realm::Divine => &["object", "struct"],
            Realm::Temporal => &["date", "time", "datetime"],
        }
    }
}

impl fmt::Display for Realm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a word does not name a realm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseRealmError(pub String);

impl fmt::Display for ParseRealmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown realm: {}", self.0)
    }
}

impl std::error::Error for ParseRealmError {}

impl FromStr for Realm {
    type Err = ParseRealmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Realm::ALL
            .into_iter()
            .find(|realm| realm.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseRealmError(s.to_string()))
    }
}
