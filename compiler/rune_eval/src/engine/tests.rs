#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::errors::EvalErrorKind;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_union_of_staged_operands() {
    let mut engine = Engine::new();
    engine.channel(Value::Int(3));
    engine.weave(Value::Int(4));
    assert_eq!(engine.evaluate(Operation::Combine), Ok(Value::Int(7)));
    assert!(engine.is_idle());
}

#[test]
fn test_essence_needs_only_left() {
    let mut engine = Engine::new();
    engine.channel(Value::string("echo"));
    assert_eq!(
        engine.evaluate(Operation::Identity),
        Ok(Value::string("echo"))
    );
}

#[test]
fn test_essence_discards_stray_right() {
    let mut engine = Engine::new();
    engine.channel(Value::Int(1));
    engine.weave(Value::Int(2));
    assert_eq!(engine.evaluate(Operation::Identity), Ok(Value::Int(1)));
    assert!(engine.is_idle());
}

#[test]
fn test_missing_right_operand() {
    let mut engine = Engine::new();
    engine.channel(Value::Int(3));
    let err = engine.evaluate(Operation::Combine).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::MissingOperand {
            operation: Operation::Combine,
            slot: Slot::Right,
        }
    );
    assert!(engine.is_idle());
}

#[test]
fn test_missing_left_operand() {
    let mut engine = Engine::new();
    engine.weave(Value::Int(3));
    let err = engine.evaluate(Operation::Identity).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::MissingOperand {
            operation: Operation::Identity,
            slot: Slot::Left,
        }
    );
    assert!(engine.is_idle());
}

#[test]
fn test_slots_cleared_after_failure() {
    let mut engine = Engine::new();
    engine.channel(Value::Int(10));
    engine.weave(Value::Int(0));
    let err = engine.evaluate(Operation::Split).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    assert_eq!(engine.staged(), &Accumulator::default());
}

#[test]
fn test_restaging_replaces() {
    let mut engine = Engine::new();
    engine.channel(Value::Int(1));
    engine.channel(Value::Int(5));
    engine.weave(Value::Int(2));
    assert_eq!(engine.evaluate(Operation::Raise), Ok(Value::Int(25)));
}

#[test]
fn test_independent_engines() {
    let mut a = Engine::new();
    let b = Engine::new();
    a.channel(Value::Int(1));
    assert!(!a.is_idle());
    assert!(b.is_idle());
}

fn operation() -> impl Strategy<Value = Operation> {
    prop::sample::select(Operation::ALL.to_vec())
}

fn staged_value() -> impl Strategy<Value = Option<Value>> {
    prop::option::of(prop_oneof![
        any::<i64>().prop_map(Value::Int),
        any::<bool>().prop_map(Value::Bool),
        ".{0,6}".prop_map(Value::Str),
        Just(Value::Null),
    ])
}

proptest! {
    #[test]
    fn slots_always_empty_after_evaluate(
        op in operation(),
        left in staged_value(),
        right in staged_value(),
    ) {
        let mut engine = Engine::new();
        if let Some(v) = left.clone() {
            engine.channel(v);
        }
        if let Some(v) = right.clone() {
            engine.weave(v);
        }
        let result = engine.evaluate(op);
        prop_assert!(engine.is_idle());

        let needs_right = !op.is_unary();
        if left.is_none() || (needs_right && right.is_none()) {
            let is_missing = matches!(
                result.map_err(|e| e.kind),
                Err(EvalErrorKind::MissingOperand { .. })
            );
            prop_assert!(is_missing);
        }
    }
}
