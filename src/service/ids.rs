//! Id matching rules for the document backends.
//!
//! Update and delete deliberately compare ids differently. Update matches the
//! body's `id` by strict equality (a string `"1"` never matches a number `1`).
//! Delete coerces the query value to an integer first and only matches numeric
//! ids. Items with string ids can therefore be updated but never deleted. This
//! is existing client-visible behavior and is kept as is.

use serde_json::Value;

/// Strict equality between two optional JSON values: same type and value for
/// scalars, both absent, or both null. Arrays and objects never compare equal.
pub fn strictly_equal(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(Value::Null), Some(Value::Null)) => true,
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x == y,
        (Some(Value::Number(x)), Some(Value::Number(y))) => x.as_f64() == y.as_f64(),
        (Some(Value::String(x)), Some(Value::String(y))) => x == y,
        _ => false,
    }
}

/// Leading-integer coercion of a query value: optional leading whitespace, an
/// optional sign, then the longest run of ASCII digits. Anything after the
/// digits is ignored (`"2abc"` and `"2.9"` give 2). `None` when there are no digits.
pub fn coerce_query_id(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let (sign, rest) = match s.as_bytes().first().copied() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    rest[..digits_len].parse::<f64>().ok().map(|n| sign * n)
}
