#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::errors::EvalErrorKind;
use num_bigint::BigInt;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn s(text: &str) -> Value {
    Value::string(text)
}

fn big(digits: &str) -> Value {
    Value::from_bigint(digits.parse::<BigInt>().unwrap())
}

mod combine_rules {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbers() {
        assert_eq!(combine(Value::Int(3), Value::Int(4)), Value::Int(7));
        assert_eq!(combine(Value::Int(1), Value::Float(0.5)), Value::Float(1.5));
    }

    #[test]
    fn overflow_keeps_every_digit() {
        assert_eq!(
            combine(Value::Int(i64::MAX), Value::Int(1)),
            big("9223372036854775808")
        );
        assert_eq!(
            combine(Value::Int(i64::MIN), Value::Int(-1)),
            big("-9223372036854775809")
        );
    }

    #[test]
    fn wide_integers_narrow_back() {
        let wide = big("9223372036854775808");
        assert_eq!(combine(wide.clone(), Value::Int(-1)), Value::Int(i64::MAX));
        assert_eq!(
            combine(wide.clone(), wide),
            big("18446744073709551616")
        );
        assert_eq!(
            combine(big("100000000000000000000"), Value::Float(0.5)),
            Value::Float(1e20 + 0.5)
        );
    }

    #[test]
    fn booleans_are_logical_or() {
        assert_eq!(combine(Value::Bool(false), Value::Bool(true)), Value::Bool(true));
        assert_eq!(combine(Value::Bool(false), Value::Int(0)), Value::Bool(false));
    }

    #[test]
    fn text_wins_over_booleans() {
        assert_eq!(combine(s("abc"), Value::Bool(true)), s("abctrue"));
        assert_eq!(combine(Value::Bool(false), s("x")), s("falsex"));
        assert_eq!(combine(s(""), Value::Bool(false)), s("false"));
    }

    #[test]
    fn lists_concatenate() {
        assert_eq!(
            combine(
                Value::list(vec![Value::Int(1)]),
                Value::list(vec![s("a")])
            ),
            Value::list(vec![Value::Int(1), s("a")])
        );
    }

    #[test]
    fn text_concatenates() {
        assert_eq!(combine(s("fire"), s("ball")), s("fireball"));
        assert_eq!(combine(s("level "), Value::Int(3)), s("level 3"));
        assert_eq!(combine(Value::Float(2.0), s("x")), s("2.0x"));
    }

    #[test]
    fn fallback_concatenates_unnumbered_pairs() {
        assert_eq!(combine(Value::Null, Value::Int(1)), s("null1"));
        assert_eq!(
            combine(Value::list(vec![Value::Int(1)]), Value::Null),
            s("[1]null")
        );
    }
}

mod separate_rules {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbers() {
        assert_eq!(separate(&Value::Int(10), &Value::Int(4)), Ok(Value::Int(6)));
        assert_eq!(
            separate(&Value::Float(1.5), &Value::Int(1)),
            Ok(Value::Float(0.5))
        );
    }

    #[test]
    fn booleans() {
        assert_eq!(
            separate(&Value::Bool(true), &Value::Bool(false)),
            Ok(Value::Bool(true))
        );
        assert_eq!(
            separate(&Value::Bool(true), &Value::Bool(true)),
            Ok(Value::Bool(false))
        );
    }

    #[test]
    fn text_removes_occurrences() {
        assert_eq!(separate(&s("abracadabra"), &s("a")), Ok(s("brcdbr")));
        assert_eq!(separate(&s("abc"), &s("")), Ok(s("abc")));
    }

    #[test]
    fn fallback_subtracts_as_float() {
        assert_eq!(separate(&s("10"), &Value::Int(3)), Ok(Value::Float(7.0)));
        assert_eq!(
            separate(&Value::Bool(true), &Value::Int(3)),
            Ok(Value::Float(-2.0))
        );
    }

    #[test]
    fn no_numeric_interpretation() {
        let err = separate(&Value::Null, &Value::list(vec![])).unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::CoercionError { .. }));
    }
}

mod merge_rules {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbers() {
        assert_eq!(merge(&Value::Int(6), &Value::Int(7)), Ok(Value::Int(42)));
        assert_eq!(
            merge(&Value::Int(i64::MAX), &Value::Int(2)),
            Ok(big("18446744073709551614"))
        );
        assert_eq!(
            merge(&big("-9223372036854775809"), &Value::Int(0)),
            Ok(Value::Int(0))
        );
    }

    #[test]
    fn repetition() {
        assert_eq!(merge(&s("ab"), &Value::Int(3)), Ok(s("ababab")));
        assert_eq!(merge(&s("ab"), &Value::Int(-1)), Ok(s("")));
        assert_eq!(
            merge(&Value::list(vec![Value::Int(1)]), &Value::Int(2)),
            Ok(Value::list(vec![Value::Int(1), Value::Int(1)]))
        );
    }

    #[test]
    fn oversized_repetition_is_rejected() {
        let err = merge(&s("ab"), &Value::Int(i64::MAX)).unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::CoercionError { .. }));
        let err = merge(&s("ab"), &big("100000000000000000000")).unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::CoercionError { .. }));
        assert_eq!(merge(&s("ab"), &big("-100000000000000000000")), Ok(s("")));
    }

    #[test]
    fn booleans_are_logical_and() {
        assert_eq!(
            merge(&Value::Bool(true), &Value::Bool(false)),
            Ok(Value::Bool(false))
        );
    }

    #[test]
    fn fallback() {
        assert_eq!(merge(&s("2.5"), &s("2")), Ok(Value::Float(5.0)));
        assert!(merge(&Value::Null, &Value::Int(2)).is_err());
    }
}

mod split_rules {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn quotient_is_always_float() {
        assert_eq!(split(&Value::Int(7), &Value::Int(2)), Ok(Value::Float(3.5)));
        assert_eq!(split(&Value::Int(8), &Value::Int(2)), Ok(Value::Float(4.0)));
        assert_eq!(split(&s("9"), &Value::Int(3)), Ok(Value::Float(3.0)));
    }

    #[test]
    fn zero_divisor() {
        for divisor in [Value::Int(0), Value::Float(0.0), s("0"), Value::Bool(false)] {
            let err = split(&Value::Int(1), &divisor).unwrap_err();
            assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
        }
    }

    #[test]
    fn zero_divisor_wins_over_bad_dividend() {
        let err = split(&Value::Null, &Value::Int(0)).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    }
}

mod raise_rules {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn integers() {
        assert_eq!(raise(&Value::Int(2), &Value::Int(10)), Ok(Value::Int(1024)));
        assert_eq!(raise(&Value::Int(2), &Value::Int(-1)), Ok(Value::Float(0.5)));
    }

    #[test]
    fn overflow_stays_exact() {
        assert_eq!(
            raise(&Value::Int(10), &Value::Int(20)),
            Ok(big("100000000000000000000"))
        );
        assert_eq!(
            raise(&Value::Int(-2), &Value::Int(63)),
            Ok(Value::Int(i64::MIN))
        );
        assert_eq!(
            raise(&big("100000000000000000000"), &Value::Int(2)),
            Ok(big("10000000000000000000000000000000000000000"))
        );
    }

    #[test]
    fn huge_powers_fall_back_to_float() {
        assert_eq!(
            raise(&Value::Int(10), &Value::Int(100_000)),
            Ok(Value::Float(f64::INFINITY))
        );
    }

    #[test]
    fn fallback() {
        assert_eq!(raise(&s("9"), &Value::Float(0.5)), Ok(Value::Float(3.0)));
        assert!(raise(&Value::list(vec![]), &Value::Int(2)).is_err());
    }
}

#[test]
fn identity_returns_left() {
    assert_eq!(
        evaluate_operation(Operation::Identity, s("kept"), Value::Null),
        Ok(s("kept"))
    );
}

proptest! {
    #[test]
    fn split_by_zero_fails_for_any_dividend(n in any::<i64>(), text in ".{0,12}") {
        for dividend in [Value::Int(n), Value::string(text.as_str()), Value::Null] {
            let err = split(&dividend, &Value::Int(0)).unwrap_err();
            prop_assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
        }
    }

    #[test]
    fn combine_ints_matches_wide_sum(a in any::<i32>(), b in any::<i32>()) {
        let sum = i64::from(a) + i64::from(b);
        prop_assert_eq!(combine(Value::Int(a.into()), Value::Int(b.into())), Value::Int(sum));
    }
}
