//! Binary operation implementations for the engine.
//!
//! Direct enum-based dispatch: each operation matches on the operand pair,
//! tries its type-specific rules in order, then falls back to a numeric
//! interpretation of both sides.
//!
//! Integer arithmetic is checked. A result that does not fit in 64 bits is
//! recomputed as a `BigInt` rather than wrapping, and narrowed back to `Int`
//! whenever it fits again.

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};
use rune_ir::Operation;

use crate::errors::{coercion_error, division_by_zero, EvalResult};
use crate::value::Value;

/// Evaluate a binary operation.
///
/// `Identity` returns `left` unchanged; the engine handles it before both
/// slots are required, so it only reaches here from direct callers.
pub fn evaluate_operation(op: Operation, left: Value, right: Value) -> EvalResult {
    match op {
        Operation::Combine => Ok(combine(left, right)),
        Operation::Separate => separate(&left, &right),
        Operation::Merge => merge(&left, &right),
        Operation::Split => split(&left, &right),
        Operation::Raise => raise(&left, &right),
        Operation::Identity => Ok(left),
    }
}

// Helpers

#[inline]
fn int_or_promote(
    checked: Option<i64>,
    a: i64,
    b: i64,
    big_op: fn(BigInt, BigInt) -> BigInt,
) -> Value {
    match checked {
        Some(n) => Value::Int(n),
        None => Value::from_bigint(big_op(BigInt::from(a), BigInt::from(b))),
    }
}

/// Both operands as floats, when both have a numeric interpretation.
#[inline]
fn both_f64(left: &Value, right: &Value) -> Option<(f64, f64)> {
    Some((left.to_f64()?, right.to_f64()?))
}

/// Numeric pair with integer preservation.
enum Numeric {
    Ints(i64, i64),
    /// At least one side is a `BigInt`, the other an integer.
    Bigs(BigInt, BigInt),
    Floats(f64, f64),
}

fn numeric_pair(left: &Value, right: &Value) -> Option<Numeric> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(Numeric::Ints(*a, *b)),
        _ if left.is_numeric() && right.is_numeric() => {
            match (left.to_bigint(), right.to_bigint()) {
                (Some(a), Some(b)) => Some(Numeric::Bigs(a, b)),
                _ => both_f64(left, right).map(|(a, b)| Numeric::Floats(a, b)),
            }
        }
        _ => None,
    }
}

/// Longest string or list `fusion` will build by repetition.
pub const MAX_REPEAT_LEN: usize = 1 << 24;

/// Widest integer, in bits, `power` computes exactly. Larger results are
/// computed in floating point.
pub const MAX_POWER_BITS: u64 = 1 << 16;

/// Repetition count for `fusion`, or `None` when the result would exceed
/// [`MAX_REPEAT_LEN`]. Negative counts repeat zero times.
fn repeat_count(len: usize, times: &BigInt) -> Option<usize> {
    let times = if times.is_negative() {
        0
    } else {
        times.to_usize()?
    };
    len.checked_mul(times)
        .filter(|&total| total <= MAX_REPEAT_LEN)
        .map(|_| times)
}

// Operations

/// `union` (+). Never fails: the last resort concatenates as text.
///
/// Text wins over booleans: `"abc" + true` is `"abctrue"`.
pub fn combine(left: Value, right: Value) -> Value {
    if let Some(pair) = numeric_pair(&left, &right) {
        return match pair {
            Numeric::Ints(a, b) => int_or_promote(a.checked_add(b), a, b, |x, y| x + y),
            Numeric::Bigs(a, b) => Value::from_bigint(a + b),
            Numeric::Floats(a, b) => Value::Float(a + b),
        };
    }
    match (left, right) {
        (left @ Value::Str(_), right) | (left, right @ Value::Str(_)) => {
            Value::Str(format!("{left}{right}"))
        }
        (left @ Value::Bool(_), right) | (left, right @ Value::Bool(_)) => {
            Value::Bool(left.is_truthy() || right.is_truthy())
        }
        (Value::List(mut a), Value::List(b)) => {
            a.extend(b);
            Value::List(a)
        }
        (left, right) => match both_f64(&left, &right) {
            Some((a, b)) => Value::Float(a + b),
            None => Value::Str(format!("{left}{right}")),
        },
    }
}

/// `difference` (-).
pub fn separate(left: &Value, right: &Value) -> EvalResult {
    if let Some(pair) = numeric_pair(left, right) {
        return Ok(match pair {
            Numeric::Ints(a, b) => int_or_promote(a.checked_sub(b), a, b, |x, y| x - y),
            Numeric::Bigs(a, b) => Value::from_bigint(a - b),
            Numeric::Floats(a, b) => Value::Float(a - b),
        });
    }
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(*a && !*b)),
        (Value::Str(a), Value::Str(b)) => Ok(Value::Str(a.replace(b.as_str(), ""))),
        _ => both_f64(left, right)
            .map(|(a, b)| Value::Float(a - b))
            .ok_or_else(|| coercion_error(Operation::Separate, left, right)),
    }
}

/// `fusion` (*).
pub fn merge(left: &Value, right: &Value) -> EvalResult {
    if let Some(pair) = numeric_pair(left, right) {
        return Ok(match pair {
            Numeric::Ints(a, b) => int_or_promote(a.checked_mul(b), a, b, |x, y| x * y),
            Numeric::Bigs(a, b) => Value::from_bigint(a * b),
            Numeric::Floats(a, b) => Value::Float(a * b),
        });
    }
    if let (Value::Bool(a), Value::Bool(b)) = (left, right) {
        return Ok(Value::Bool(*a && *b));
    }
    match (left, &right.to_bigint()) {
        (Value::Str(s), Some(n)) => repeat_count(s.len(), n)
            .map(|times| Value::Str(s.repeat(times)))
            .ok_or_else(|| coercion_error(Operation::Merge, left, right)),
        (Value::List(items), Some(n)) => repeat_count(items.len(), n)
            .map(|times| Value::List((0..times).flat_map(|_| items.iter().cloned()).collect()))
            .ok_or_else(|| coercion_error(Operation::Merge, left, right)),
        _ => both_f64(left, right)
            .map(|(a, b)| Value::Float(a * b))
            .ok_or_else(|| coercion_error(Operation::Merge, left, right)),
    }
}

/// `division` (/). Always produces a float.
///
/// The right operand is checked for zero before the left is interpreted, so
/// a zero divisor fails the same way whatever the dividend is.
pub fn split(left: &Value, right: &Value) -> EvalResult {
    let divisor = right
        .to_f64()
        .ok_or_else(|| coercion_error(Operation::Split, left, right))?;
    if divisor == 0.0 {
        return Err(division_by_zero());
    }
    let dividend = left
        .to_f64()
        .ok_or_else(|| coercion_error(Operation::Split, left, right))?;
    Ok(Value::Float(dividend / divisor))
}

/// `power` (^).
///
/// An integer raised to a non-negative integer stays exact up to
/// [`MAX_POWER_BITS`]; everything else is computed in floating point.
pub fn raise(left: &Value, right: &Value) -> EvalResult {
    if let (Value::Int(base), Value::Int(exp)) = (left, right) {
        if let Ok(exp) = u32::try_from(*exp) {
            if let Some(n) = base.checked_pow(exp) {
                return Ok(Value::Int(n));
            }
        }
    }
    if let (Some(base), Some(exp)) = (left.to_bigint(), right.to_bigint()) {
        if let Some(exp) = exp.to_u32() {
            if base.bits().saturating_mul(u64::from(exp)) <= MAX_POWER_BITS {
                return Ok(Value::from_bigint(base.pow(exp)));
            }
        }
    }
    both_f64(left, right)
        .map(|(a, b)| Value::Float(a.powf(b)))
        .ok_or_else(|| coercion_error(Operation::Raise, left, right))
}

#[cfg(test)]
mod tests;
