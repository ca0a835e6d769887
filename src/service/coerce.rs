//! Raw query-string value -> typed value, per declared parameter type.

use crate::config::ParamType;
use crate::error::BindError;
use crate::sql::TypedValue;
use rust_decimal::Decimal;

/// Plain decimal literal: optional sign, digits, at most one `.`. No grouping, no exponent.
fn is_plain_decimal(s: &str) -> bool {
    let digits = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    let mut seen_digit = false;
    let mut seen_point = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    seen_digit
}

/// Coerce `raw` for parameter `name` declared as `declared_type`.
pub fn coerce(name: &str, raw: &str, declared_type: &str) -> Result<TypedValue, BindError> {
    let invalid = || BindError::InvalidParameterFormat {
        name: name.to_string(),
        declared_type: declared_type.to_string(),
    };
    // Numbers tolerate surrounding whitespace; strings are passed through untouched.
    let number = raw.trim_matches(|c: char| c.is_ascii_whitespace());
    match declared_type.parse::<ParamType>()? {
        ParamType::Int => number.parse::<i64>().map(TypedValue::Int).map_err(|_| invalid()),
        ParamType::Decimal => {
            if !is_plain_decimal(number) {
                return Err(invalid());
            }
            Decimal::from_str_exact(number).map(TypedValue::Decimal).map_err(|_| invalid())
        }
        ParamType::String => Ok(TypedValue::Text(raw.to_string())),
    }
}
