//! Pack format range codec.
//!
//! The range has had three on-disk shapes over the lifetime of the
//! format:
//!
//! - `16`: a single format number
//! - `[16, 17]`: an inclusive `[min, max]` pair
//! - `{ "min_inclusive": 16, "max_inclusive": 17 }`: the object form
//!
//! Decoding accepts all three. Encoding always picks the shortest shape
//! still understood by every reader of the written range.

use serde_json::{json, Value as Json};

use crate::codec::primitives::{as_version_number, json_type_name};
use crate::error::DecodeError;
use crate::model::{FormatVersion, PackFormat};

/// Decodes a format range from any of its three historical shapes.
pub fn decode_pack_format(value: &Json) -> Result<PackFormat, DecodeError> {
    let (min, max) = match value {
        Json::Number(_) | Json::String(_) => {
            let single = as_version_number(value, "supported_formats")?;
            (single, single)
        }
        Json::Array(entries) => {
            if entries.len() < 2 {
                return Err(DecodeError::NotEnoughEntries {
                    what: "supported_formats",
                    expected: 2,
                    len: entries.len(),
                });
            }
            (
                as_version_number(&entries[0], "supported_formats")?,
                as_version_number(&entries[1], "supported_formats")?,
            )
        }
        Json::Object(fields) => {
            let min = fields
                .get("min_inclusive")
                .ok_or(DecodeError::MissingField {
                    field: "min_inclusive",
                })?;
            let max = fields
                .get("max_inclusive")
                .ok_or(DecodeError::MissingField {
                    field: "max_inclusive",
                })?;
            (
                as_version_number(min, "min_inclusive")?,
                as_version_number(max, "max_inclusive")?,
            )
        }
        other => {
            return Err(DecodeError::UnsupportedShape {
                what: "supported_formats",
                found: json_type_name(other),
            });
        }
    };
    PackFormat::new(FormatVersion::from_major(min), FormatVersion::from_major(max))
        .map_err(Into::into)
}

/// Decodes a format range, resolving the deprecated `pack_format`
/// fallback alongside it.
///
/// The fallback is ignored when absent or negative. The resolved fallback
/// is *not* substituted into the returned range: the decoded minimum
/// always wins. Folding it in would change how packs that declare both
/// `pack_format` and `supported_formats` resolve, so the pass-through
/// stays exactly as historical readers expect.
pub fn decode_pack_format_with_fallback(
    value: &Json,
    main_format: Option<i32>,
) -> Result<PackFormat, DecodeError> {
    let decoded = decode_pack_format(value)?;
    let _main = match main_format {
        Some(major) if major >= 0 => FormatVersion::from_major(major as u32),
        _ => decoded.min(),
    };
    PackFormat::new(decoded.min(), decoded.max()).map_err(Into::into)
}

/// Decodes a full format version: either a bare major number or a
/// `[major, minor]` array, with the minor defaulting to 0 when absent.
pub fn decode_format_version(value: &Json) -> Result<FormatVersion, DecodeError> {
    match value {
        Json::Number(_) | Json::String(_) => Ok(FormatVersion::from_major(as_version_number(
            value,
            "format version",
        )?)),
        Json::Array(entries) => {
            let major = entries.first().ok_or(DecodeError::NotEnoughEntries {
                what: "format version",
                expected: 1,
                len: 0,
            })?;
            let minor = match entries.get(1) {
                Some(entry) => as_version_number(entry, "format version")?,
                None => 0,
            };
            Ok(FormatVersion::new(
                as_version_number(major, "format version")?,
                minor,
            ))
        }
        other => Err(DecodeError::UnsupportedShape {
            what: "format version",
            found: json_type_name(other),
        }),
    }
}

/// Encodes a range in its shortest shape: a bare number for single-version
/// ranges, otherwise a `[min, max]` pair of majors.
pub fn encode_pack_format(format: &PackFormat) -> Json {
    if format.is_single() {
        json!(format.min().major())
    } else {
        json!([format.min().major(), format.max().major()])
    }
}
