//! Float and boolean cells.

use crate::config::dataset::{FALSE_LITERAL, NAN_LITERAL, TRUE_LITERAL};
use crate::error::DecodeErrorKind;

/// Decode a nullable float. Empty and `nan` are absent, never `0.0`.
pub fn decode_float(cell: &str) -> Result<Option<f64>, DecodeErrorKind> {
    let text = cell.trim();
    if text.is_empty() || text.eq_ignore_ascii_case(NAN_LITERAL) {
        return Ok(None);
    }

    let value: f64 = text.parse().map_err(|_| DecodeErrorKind::InvalidFloat(cell.to_string()))?;

    if value.is_nan() {
        Ok(None)
    } else if value.is_infinite() {
        Err(DecodeErrorKind::NonFiniteFloat(cell.to_string()))
    } else {
        Ok(Some(value))
    }
}

/// Decode the case-sensitive `True`/`False` literals.
pub fn decode_bool(cell: &str) -> Result<bool, DecodeErrorKind> {
    match cell {
        TRUE_LITERAL => Ok(true),
        FALSE_LITERAL => Ok(false),
        other => Err(DecodeErrorKind::InvalidBool(other.to_string())),
    }
}

/// Encode a nullable float with Python formatting (`2021.0`, `3.5`, `1e+16`,
/// empty for absent).
#[must_use]
pub fn encode_float(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format_float(v),
        _ => String::new(),
    }
}

/// Shortest round-trip digits; positional for decimal exponents in `-4..16`,
/// otherwise `<mantissa>e<sign><two or more digits>`.
fn format_float(v: f64) -> String {
    let sci = format!("{v:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };

    if (-4..16).contains(&exp) {
        let text = v.to_string();
        if text.contains('.') { text } else { format!("{text}.0") }
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
    }
}

/// Encode a boolean as `True`/`False`.
#[must_use]
pub const fn encode_bool(value: bool) -> &'static str {
    if value { TRUE_LITERAL } else { FALSE_LITERAL }
}
