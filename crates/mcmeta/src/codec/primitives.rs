//! Minimal JSON reader helpers shared by the metadata codecs.
//!
//! The codecs only need type discrimination, integer coercion, and field
//! lookup over a [`serde_json::Value`] tree; everything else about the
//! JSON layer stays outside this crate.

use serde_json::Value as Json;

use crate::error::DecodeError;

/// The JSON type name of a value, for error reporting.
pub fn json_type_name(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

/// Reads an integer from a JSON number, or from a numeric JSON string.
///
/// Historical packs occasionally quote numeric fields and readers have
/// always coerced them. Non-integral numbers are rejected.
pub fn as_int(value: &Json) -> Option<i64> {
    match value {
        Json::Number(number) => number.as_i64(),
        Json::String(text) => text.parse().ok(),
        _ => None,
    }
}

/// Reads a non-negative 32-bit format number.
///
/// Fails with the offending JSON type for non-integer shapes, and with the
/// offending value when the number is negative or too large.
pub fn as_version_number(value: &Json, what: &'static str) -> Result<u32, DecodeError> {
    let number = as_int(value).ok_or_else(|| DecodeError::UnsupportedShape {
        what,
        found: json_type_name(value),
    })?;
    u32::try_from(number).map_err(|_| DecodeError::VersionOutOfRange { value: number })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(true)), "boolean");
        assert_eq!(json_type_name(&json!(7)), "number");
        assert_eq!(json_type_name(&json!("7")), "string");
        assert_eq!(json_type_name(&json!([])), "array");
        assert_eq!(json_type_name(&json!({})), "object");
    }

    #[test]
    fn test_as_int_coerces_numeric_strings() {
        assert_eq!(as_int(&json!(16)), Some(16));
        assert_eq!(as_int(&json!(-3)), Some(-3));
        assert_eq!(as_int(&json!("16")), Some(16));
        assert_eq!(as_int(&json!("sixteen")), None);
        assert_eq!(as_int(&json!(16.5)), None);
        assert_eq!(as_int(&json!(true)), None);
    }

    #[test]
    fn test_version_number_bounds() {
        assert_eq!(as_version_number(&json!(16), "pack_format").unwrap(), 16);
        assert!(matches!(
            as_version_number(&json!(-1), "pack_format"),
            Err(DecodeError::VersionOutOfRange { value: -1 })
        ));
        assert!(matches!(
            as_version_number(&json!([16]), "pack_format"),
            Err(DecodeError::UnsupportedShape { found: "array", .. })
        ));
    }
}
