//! Forgiving reads of loosely typed option members.
//!
//! Page scripts and `data-options` attributes hand over whatever JSON they
//! have: fractional numbers, `null`, numeric strings, the odd wrong type.
//! These helpers read one member each and fall back to the caller's default
//! instead of rejecting the whole options object.

#[cfg(test)]
#[path = "lenient_test.rs"]
mod lenient_test;

use serde_json::Value;

/// How a fractional number becomes a count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
    Down,
    Up,
    Nearest,
}

/// Read a finite number from a JSON number or a numeric string.
#[must_use]
pub fn number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Read a positive count, rounding fractions per `rounding`.
///
/// Missing, non-numeric, zero and negative values yield `default`, the way a
/// script's `value || default` would treat them.
#[must_use]
pub fn count_or(value: &Value, default: u32, rounding: Rounding) -> u32 {
    let Some(n) = number(value) else {
        return default;
    };
    let rounded = match rounding {
        Rounding::Down => n.floor(),
        Rounding::Up => n.ceil(),
        Rounding::Nearest => n.round(),
    };
    if rounded < 1.0 {
        return default;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = rounded.min(f64::from(u32::MAX)) as u32;
    count
}

/// Script truthiness: `null`, `false`, `0` and `""` are false.
#[must_use]
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A non-empty string member.
#[must_use]
pub fn string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// The string entries of an array member. Other entries are skipped; a
/// member that is not an array yields `None`.
#[must_use]
pub fn strings(value: &Value) -> Option<Vec<String>> {
    let Value::Array(items) = value else {
        return None;
    };
    Some(items.iter().filter_map(|item| item.as_str().map(str::to_owned)).collect())
}
