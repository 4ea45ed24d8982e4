#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::errors::EvalErrorKind;
use pretty_assertions::assert_eq;

#[test]
fn test_summon_coerces_by_realm() {
    let mut env = Environment::new();
    assert_eq!(env.summon("x", "123", Realm::Mortal), Value::Int(123));
    assert_eq!(env.summon("y", "12.5", Realm::Spirit), Value::Float(12.5));

    assert_eq!(env.get("x"), Ok(Value::Int(123)));
    assert_eq!(env.get_realm("y"), Ok(Realm::Spirit));
    assert_eq!(
        env.binding("y").map(|b| b.type_label.as_str()),
        Some("double")
    );
}

#[test]
fn test_get_unbound() {
    let env = Environment::new();
    let err = env.get("ghost").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UnboundVariable {
            name: "ghost".into()
        }
    );
    assert!(env.get_realm("ghost").is_err());
}

#[test]
fn test_bind_uses_runtime_type_name() {
    let mut env = Environment::new();
    env.bind("z", Value::Float(7.5), Realm::Spirit);
    let binding = env.binding("z");
    assert_eq!(binding.map(|b| b.type_label.as_str()), Some("float"));
    assert_eq!(binding.map(|b| b.realm), Some(Realm::Spirit));
}

#[test]
fn test_rebinding_overwrites_in_place() {
    let mut env = Environment::new();
    env.summon("a", "1", Realm::Mortal);
    env.summon("b", "2", Realm::Mortal);
    env.bind("a", Value::string("changed"), Realm::Spirit);

    assert_eq!(env.len(), 2);
    let names: Vec<_> = env.status().into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(env.get("a"), Ok(Value::string("changed")));
    assert_eq!(env.get_realm("a"), Ok(Realm::Spirit));
}

#[test]
fn test_status_order_follows_creation() {
    let mut env = Environment::new();
    for (i, name) in ["zeta", "alpha", "mid", "beta"].into_iter().enumerate() {
        env.summon(name, &i.to_string(), Realm::Mortal);
    }
    let names: Vec<_> = env.status().into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid", "beta"]);
}

#[test]
fn test_empty() {
    let env = Environment::new();
    assert!(env.is_empty());
    assert!(env.status().is_empty());
    assert!(!env.contains("x"));
}

proptest::proptest! {
    #[test]
    fn summon_always_binds(raw in ".{0,40}") {
        let mut env = Environment::new();
        for realm in Realm::ALL {
            let name = realm.as_str();
            env.summon(name, &raw, realm);
            let binding = env.binding(name).unwrap();
            proptest::prop_assert_eq!(binding.realm, realm);
            proptest::prop_assert!(!binding.type_label.is_empty());
        }
        proptest::prop_assert_eq!(env.len(), Realm::ALL.len());
    }
}
