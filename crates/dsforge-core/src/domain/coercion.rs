//! Setting coercion.
//!
//! Raw input arrives as text from flags and prompts, or as typed JSON from an
//! answers file. Either way the value is checked against the setting's
//! declared [`SettingKind`] before it reaches the configuration record.
//!
//! Empty input never produces a value: the setting is simply left out.

use serde_json::{Number, Value};

use crate::domain::{error::DomainError, value_objects::SettingKind};

/// Coerce raw text for `field` according to `kind`.
///
/// Returns `Ok(None)` when the input is blank.
pub fn coerce_raw(field: &str, kind: SettingKind, raw: &str) -> Result<Option<Value>, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value = match kind {
        SettingKind::String => Value::String(raw.to_string()),
        SettingKind::Number => Value::Number(parse_number(field, trimmed)?),
        SettingKind::Boolean => Value::Bool(parse_bool(field, trimmed)?),
        SettingKind::Object | SettingKind::Array | SettingKind::Json => {
            let parsed: Value = serde_json::from_str(trimmed)
                .map_err(|e| invalid(field, kind, raw, &format!("malformed JSON: {e}")))?;
            check_shape(field, kind, parsed)?
        }
    };

    Ok(Some(value))
}

/// Coerce an already-parsed JSON value for `field`.
///
/// Strings go through [`coerce_raw`]; any other value must already have
/// the declared shape. `null` is treated like empty input.
pub fn coerce_value(
    field: &str,
    kind: SettingKind,
    value: Value,
) -> Result<Option<Value>, DomainError> {
    match value {
        Value::Null => Ok(None),
        Value::String(raw) => coerce_raw(field, kind, &raw),
        other => match kind {
            SettingKind::String => Ok(Some(Value::String(scalar_text(&other)))),
            SettingKind::Number if other.is_f64() => {
                parse_number(field, &other.to_string()).map(|n| Some(Value::Number(n)))
            }
            SettingKind::Number if other.is_number() => Ok(Some(other)),
            SettingKind::Boolean if other.is_boolean() => Ok(Some(other)),
            SettingKind::Object | SettingKind::Array | SettingKind::Json => {
                check_shape(field, kind, other).map(Some)
            }
            _ => Err(invalid(
                field,
                kind,
                &other.to_string(),
                &format!("got {}", json_type(&other)),
            )),
        },
    }
}

/// Undeclared settings pass through: text stays text, typed JSON is kept.
pub fn passthrough(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        other => Some(other),
    }
}

fn parse_number(field: &str, raw: &str) -> Result<Number, DomainError> {
    if let Ok(i) = raw.parse::<i64>() {
        return Ok(Number::from(i));
    }
    if let Ok(u) = raw.parse::<u64>() {
        return Ok(Number::from(u));
    }
    let float = raw
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .ok_or_else(|| invalid(field, SettingKind::Number, raw, "not a number"))?;

    // Integral values are written as integers: "100.0" and "1e2" become 100.
    if float.fract() == 0.0 && float >= i64::MIN as f64 && float < i64::MAX as f64 {
        return Ok(Number::from(float as i64));
    }
    Number::from_f64(float).ok_or_else(|| invalid(field, SettingKind::Number, raw, "not a number"))
}

fn parse_bool(field: &str, raw: &str) -> Result<bool, DomainError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        _ => Err(invalid(field, SettingKind::Boolean, raw, "not a boolean")),
    }
}

fn check_shape(field: &str, kind: SettingKind, value: Value) -> Result<Value, DomainError> {
    let ok = match kind {
        SettingKind::Object => value.is_object(),
        SettingKind::Array => value.is_array(),
        _ => true,
    };
    if ok {
        Ok(value)
    } else {
        Err(invalid(
            field,
            kind,
            &value.to_string(),
            &format!("got {}", json_type(&value)),
        ))
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn invalid(field: &str, kind: SettingKind, value: &str, reason: &str) -> DomainError {
    DomainError::InvalidFieldType {
        field: field.into(),
        expected: kind.as_str().into(),
        value: value.into(),
        reason: reason.into(),
    }
}
