//! Top-level codec for the `pack` metadata section.
//!
//! Readers across format generations expect different fields, so encoding
//! is additive: the same range may be written as `pack_format`,
//! `supported_formats`, and `min_format`/`max_format` side by side, each
//! gated on its own version threshold.

use serde_json::{Map, Value as Json};

use crate::codec::pack_format::{
    decode_format_version, decode_pack_format_with_fallback, encode_pack_format,
};
use crate::codec::primitives::{as_int, as_version_number, json_type_name};
use crate::codec::text::{
    can_use_legacy_text, decode_text_tree, encode_text_tree, parse_legacy_text,
    serialize_legacy_text,
};
use crate::error::DecodeError;
use crate::model::{FormatVersion, PackFormat, PackMeta};

/// First pack format whose readers require the `min_format` and
/// `max_format` fields; also the first that no longer reads
/// `supported_formats`.
const RANGE_FIELDS_SINCE: u32 = 65;

/// Pack formats below this still write `pack_format` for readers that
/// require it, even when richer fields are present.
const PACK_FORMAT_FIELD_UNTIL: u32 = 69;

/// Decodes a `pack` metadata object.
///
/// Field precedence mirrors what game clients do: a `min_format` and
/// `max_format` pair wins outright; otherwise `supported_formats` is
/// consulted with `pack_format` as the deprecated fallback; otherwise
/// `pack_format` alone names a single version and must be present.
pub fn read_pack_meta(value: &Json) -> Result<PackMeta, DecodeError> {
    let fields = match value {
        Json::Object(fields) => fields,
        other => {
            return Err(DecodeError::UnsupportedShape {
                what: "pack metadata",
                found: json_type_name(other),
            });
        }
    };

    let formats = match (fields.get("min_format"), fields.get("max_format")) {
        (Some(min), Some(max)) => {
            PackFormat::new(decode_format_version(min)?, decode_format_version(max)?)?
        }
        _ => {
            let main_format = match fields.get("pack_format") {
                Some(main) => {
                    let number = as_int(main).ok_or_else(|| DecodeError::UnsupportedShape {
                        what: "pack_format",
                        found: json_type_name(main),
                    })?;
                    Some(
                        i32::try_from(number)
                            .map_err(|_| DecodeError::VersionOutOfRange { value: number })?,
                    )
                }
                None => None,
            };
            match fields.get("supported_formats") {
                Some(supported) => decode_pack_format_with_fallback(supported, main_format)?,
                None => {
                    let main = fields.get("pack_format").ok_or(DecodeError::MissingField {
                        field: "pack_format",
                    })?;
                    PackFormat::single(FormatVersion::from_major(as_version_number(
                        main,
                        "pack_format",
                    )?))
                }
            }
        }
    };

    let description = fields
        .get("description")
        .ok_or(DecodeError::MissingField {
            field: "description",
        })?;
    let description = match description {
        Json::String(text) => parse_legacy_text(text),
        tree => decode_text_tree(tree)?,
    };

    Ok(PackMeta::new(formats, description))
}

/// Encodes a `pack` metadata object.
///
/// The description is written in the most backward-compatible encoding
/// its content allows. Range fields are emitted additively: each of the
/// three threshold checks below is independent, so a range may be
/// described up to three times for the benefit of readers from different
/// format generations.
pub fn write_pack_meta(meta: &PackMeta) -> Json {
    let mut fields = Map::new();

    let description = &meta.description;
    fields.insert(
        "description".to_string(),
        if can_use_legacy_text(description) {
            Json::String(serialize_legacy_text(description))
        } else {
            encode_text_tree(description)
        },
    );

    let formats = meta.formats;
    let min_major = formats.min().major();
    let max_major = formats.max().major();

    if min_major < PACK_FORMAT_FIELD_UNTIL {
        fields.insert("pack_format".to_string(), Json::from(min_major));
    }

    if !formats.is_single() && min_major < RANGE_FIELDS_SINCE {
        fields.insert(
            "supported_formats".to_string(),
            encode_pack_format(&formats),
        );
    }

    if min_major >= RANGE_FIELDS_SINCE || max_major >= RANGE_FIELDS_SINCE {
        fields.insert("min_format".to_string(), Json::from(min_major));
        fields.insert("max_format".to_string(), Json::from(max_major));
    }

    Json::Object(fields)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::{NamedColor, TextColor, TextComponent};

    fn meta(min: u32, max: u32, description: TextComponent) -> PackMeta {
        PackMeta::new(
            PackFormat::new(FormatVersion::from_major(min), FormatVersion::from_major(max))
                .unwrap(),
            description,
        )
    }

    fn complex_description() -> TextComponent {
        TextComponent::text("")
            .append(TextComponent::text("Unnamed Team").color(TextColor::Rgb(0xFF8DF8)))
            .append(TextComponent::text(" ftw ").named_color(NamedColor::Gray))
            .append(TextComponent::keybind("i.dont.know"))
    }

    fn written(meta: &PackMeta) -> String {
        serde_json::to_string(&write_pack_meta(meta)).unwrap()
    }

    #[test]
    fn test_simple_serialization() {
        assert_eq!(
            written(&meta(7, 7, TextComponent::text("Description!"))),
            "{\"description\":\"Description!\",\"pack_format\":7}"
        );
    }

    #[test]
    fn test_version_range_serialization() {
        assert_eq!(
            written(&meta(18, 20, TextComponent::text("Description!"))),
            "{\"description\":\"Description!\",\"pack_format\":18,\"supported_formats\":[18,20]}"
        );
    }

    #[test]
    fn test_complex_description_serialization() {
        assert_eq!(
            written(&meta(12, 12, complex_description())),
            "{\"description\":{\"extra\":[{\"color\":\"#FF8DF8\",\"text\":\"Unnamed Team\"},{\"color\":\"gray\",\"text\":\" ftw \"},{\"keybind\":\"i.dont.know\"}],\"text\":\"\"},\"pack_format\":12}"
        );
    }

    #[test]
    fn test_combined_serialization() {
        assert_eq!(
            written(&meta(18, 20, complex_description())),
            "{\"description\":{\"extra\":[{\"color\":\"#FF8DF8\",\"text\":\"Unnamed Team\"},{\"color\":\"gray\",\"text\":\" ftw \"},{\"keybind\":\"i.dont.know\"}],\"text\":\"\"},\"pack_format\":18,\"supported_formats\":[18,20]}"
        );
    }

    #[test]
    fn test_simple_deserialization() {
        let parsed =
            read_pack_meta(&json!({"description": "Description!", "pack_format": 7})).unwrap();
        assert_eq!(parsed, meta(7, 7, TextComponent::text("Description!")));
    }

    #[test]
    fn test_version_range_deserialization() {
        let parsed = read_pack_meta(&json!({
            "description": "Description!",
            "pack_format": 18,
            "supported_formats": [18, 20],
        }))
        .unwrap();
        assert_eq!(parsed, meta(18, 20, TextComponent::text("Description!")));
    }

    #[test]
    fn test_complex_description_deserialization() {
        let parsed = read_pack_meta(&json!({
            "description": {
                "extra": [
                    {"color": "#FF8DF8", "text": "Unnamed Team"},
                    {"color": "gray", "text": " ftw "},
                    {"keybind": "i.dont.know"},
                ],
                "text": "",
            },
            "pack_format": 12,
        }))
        .unwrap();
        assert_eq!(parsed, meta(12, 12, complex_description()));
    }

    #[test]
    fn test_combined_deserialization() {
        let parsed = read_pack_meta(&json!({
            "description": {
                "extra": [
                    {"color": "#FF8DF8", "text": "Unnamed Team"},
                    {"color": "gray", "text": " ftw "},
                    {"keybind": "i.dont.know"},
                ],
                "text": "",
            },
            "pack_format": 18,
            "supported_formats": [18, 20],
        }))
        .unwrap();
        assert_eq!(parsed, meta(18, 20, complex_description()));
    }

    #[test]
    fn test_range_fields_win_over_everything_else() {
        let parsed = read_pack_meta(&json!({
            "description": "d",
            "pack_format": 15,
            "min_format": [65, 1],
            "max_format": 66,
        }))
        .unwrap();
        assert_eq!(parsed.formats.min(), FormatVersion::new(65, 1));
        assert_eq!(parsed.formats.max(), FormatVersion::from_major(66));
    }

    #[test]
    fn test_lone_min_format_falls_back_to_pack_format() {
        // Only one of the pair present: the modern branch is skipped.
        let parsed = read_pack_meta(&json!({
            "description": "d",
            "pack_format": 15,
            "min_format": 65,
        }))
        .unwrap();
        assert_eq!(parsed.formats, PackFormat::single(FormatVersion::from_major(15)));
    }

    #[test]
    fn test_supported_formats_ignores_fallback_value() {
        // The decoded minimum wins even when pack_format disagrees.
        let parsed = read_pack_meta(&json!({
            "description": "d",
            "pack_format": 15,
            "supported_formats": [16, 17],
        }))
        .unwrap();
        assert_eq!(parsed.formats, PackFormat::new(
            FormatVersion::from_major(16),
            FormatVersion::from_major(17),
        ).unwrap());
    }

    #[test]
    fn test_missing_pack_format_is_fatal_without_richer_fields() {
        assert!(matches!(
            read_pack_meta(&json!({"description": "d"})),
            Err(DecodeError::MissingField {
                field: "pack_format",
            })
        ));
    }

    #[test]
    fn test_missing_description_is_fatal() {
        assert!(matches!(
            read_pack_meta(&json!({"pack_format": 7})),
            Err(DecodeError::MissingField {
                field: "description",
            })
        ));
    }

    #[test]
    fn test_non_object_metadata_is_rejected() {
        assert!(matches!(
            read_pack_meta(&json!([1, 2])),
            Err(DecodeError::UnsupportedShape {
                what: "pack metadata",
                found: "array",
            })
        ));
    }

    #[test]
    fn test_additive_emission_around_the_thresholds() {
        // Straddling the boundary writes all three field groups.
        assert_eq!(
            written(&meta(64, 65, TextComponent::text("d"))),
            "{\"description\":\"d\",\"pack_format\":64,\"supported_formats\":[64,65],\"min_format\":64,\"max_format\":65}"
        );
        // Above the supported_formats cutoff but below the pack_format one.
        assert_eq!(
            written(&meta(65, 66, TextComponent::text("d"))),
            "{\"description\":\"d\",\"pack_format\":65,\"min_format\":65,\"max_format\":66}"
        );
        // Beyond pack_format entirely.
        assert_eq!(
            written(&meta(69, 69, TextComponent::text("d"))),
            "{\"description\":\"d\",\"min_format\":69,\"max_format\":69}"
        );
    }

    #[test]
    fn test_legacy_styled_description_round_trip() {
        let source = meta(
            16,
            17,
            TextComponent::text("")
                .append(TextComponent::text("My Pack ").named_color(NamedColor::Gold))
                .append(TextComponent::text("v2").named_color(NamedColor::Gray)),
        );
        let first = write_pack_meta(&source);
        // The styled-but-legacy description is written as a flat string.
        assert_eq!(
            first.get("description"),
            Some(&json!("§6My Pack §7v2"))
        );
        let second = write_pack_meta(&read_pack_meta(&first).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn test_write_read_write_is_stable_for_complex_descriptions() {
        let source = meta(18, 20, complex_description());
        let first = write_pack_meta(&source);
        let second = write_pack_meta(&read_pack_meta(&first).unwrap());
        assert_eq!(first, second);
    }
}
