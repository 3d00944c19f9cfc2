//! Description text codecs: the legacy flat-string encoding, the JSON
//! component tree, and the gate deciding which one a component can use.

use serde_json::{Map, Value as Json};

use crate::codec::primitives::json_type_name;
use crate::error::DecodeError;
use crate::model::{NamedColor, TextColor, TextComponent, TextContent};

/// The section sign prefixing legacy style codes.
const SECTION: char = '§';

/// Keys of a component object that carry style or children rather than
/// content.
const STYLE_KEYS: [&str; 11] = [
    "color",
    "font",
    "bold",
    "italic",
    "underlined",
    "strikethrough",
    "obfuscated",
    "insertion",
    "hoverEvent",
    "clickEvent",
    "extra",
];

// =============================================================================
// LEGACY ELIGIBILITY
// =============================================================================

/// Reports whether a component tree can be written in the legacy
/// flat-string encoding without losing meaning.
///
/// Anything the flat encoding cannot express disqualifies the whole tree:
/// a color outside the sixteen named values, a custom font, translatable
/// or keybind content, insertions, and hover or click events. Each node is
/// checked before its children.
pub fn can_use_legacy_text(component: &TextComponent) -> bool {
    if let Some(color) = component.color {
        if color.as_named().is_none() {
            return false;
        }
    }
    if component.font.is_some() {
        return false;
    }
    if matches!(
        component.content,
        TextContent::Translatable { .. } | TextContent::Keybind(_)
    ) {
        return false;
    }
    if component.insertion.is_some()
        || component.hover_event.is_some()
        || component.click_event.is_some()
    {
        return false;
    }
    component.extra.iter().all(can_use_legacy_text)
}

// =============================================================================
// LEGACY FLAT STRINGS
// =============================================================================

/// The style state a legacy string can carry at any point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct LegacyStyle {
    color: Option<NamedColor>,
    obfuscated: bool,
    bold: bool,
    strikethrough: bool,
    underlined: bool,
    italic: bool,
}

impl LegacyStyle {
    /// Applies one style code, returning false for unknown codes.
    fn apply_code(&mut self, code: char) -> bool {
        if let Some(color) = NamedColor::from_legacy_code(code) {
            // A color code also resets every decoration.
            *self = LegacyStyle {
                color: Some(color),
                ..LegacyStyle::default()
            };
            return true;
        }
        match code {
            'k' => self.obfuscated = true,
            'l' => self.bold = true,
            'm' => self.strikethrough = true,
            'n' => self.underlined = true,
            'o' => self.italic = true,
            'r' => *self = LegacyStyle::default(),
            _ => return false,
        }
        true
    }

    /// True when `self` can be reached from `from` by only adding
    /// decoration codes.
    fn extends(&self, from: &LegacyStyle) -> bool {
        self.color == from.color
            && (self.obfuscated || !from.obfuscated)
            && (self.bold || !from.bold)
            && (self.strikethrough || !from.strikethrough)
            && (self.underlined || !from.underlined)
            && (self.italic || !from.italic)
    }

    fn push_decoration_codes(&self, skip: &LegacyStyle, out: &mut String) {
        for (set, already, code) in [
            (self.obfuscated, skip.obfuscated, 'k'),
            (self.bold, skip.bold, 'l'),
            (self.strikethrough, skip.strikethrough, 'm'),
            (self.underlined, skip.underlined, 'n'),
            (self.italic, skip.italic, 'o'),
        ] {
            if set && !already {
                out.push(SECTION);
                out.push(code);
            }
        }
    }
}

/// Parses a legacy flat string into a component tree.
///
/// Color codes reset decorations, `§r` resets everything, and a `§`
/// followed by an unknown code is kept as literal text. A string with no
/// styling stays a single literal node; otherwise the runs become children
/// of an empty root.
pub fn parse_legacy_text(input: &str) -> TextComponent {
    let mut segments: Vec<TextComponent> = Vec::new();
    let mut current = String::new();
    let mut style = LegacyStyle::default();
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == SECTION {
            let mut next_style = style;
            match chars.peek().copied() {
                Some(code) if next_style.apply_code(code.to_ascii_lowercase()) => {
                    chars.next();
                    flush_segment(&mut segments, &mut current, style);
                    style = next_style;
                }
                _ => current.push(ch),
            }
        } else {
            current.push(ch);
        }
    }
    flush_segment(&mut segments, &mut current, style);

    if segments.len() == 1 {
        return segments.swap_remove(0);
    }
    let mut root = TextComponent::text("");
    root.extra = segments;
    root
}

fn flush_segment(segments: &mut Vec<TextComponent>, current: &mut String, style: LegacyStyle) {
    if current.is_empty() {
        return;
    }
    let mut segment = TextComponent::text(std::mem::take(current));
    if let Some(color) = style.color {
        segment.color = Some(TextColor::Named(color));
    }
    if style.obfuscated {
        segment.obfuscated = Some(true);
    }
    if style.bold {
        segment.bold = Some(true);
    }
    if style.strikethrough {
        segment.strikethrough = Some(true);
    }
    if style.underlined {
        segment.underlined = Some(true);
    }
    if style.italic {
        segment.italic = Some(true);
    }
    segments.push(segment);
}

/// Serializes a component tree into the legacy flat-string encoding.
///
/// Callers are expected to check [`can_use_legacy_text`] first; content
/// the flat encoding cannot express is skipped. Style codes are emitted
/// lazily: a run that only adds decorations extends the previous codes,
/// anything else re-establishes the style from a color code or `§r`.
pub fn serialize_legacy_text(component: &TextComponent) -> String {
    let mut out = String::new();
    let mut emitted = LegacyStyle::default();
    write_legacy(component, LegacyStyle::default(), &mut out, &mut emitted);
    out
}

fn write_legacy(
    component: &TextComponent,
    inherited: LegacyStyle,
    out: &mut String,
    emitted: &mut LegacyStyle,
) {
    let style = merge_style(component, inherited);
    if let TextContent::Literal(text) = &component.content {
        if !text.is_empty() {
            if *emitted != style {
                push_style_codes(out, *emitted, style);
                *emitted = style;
            }
            out.push_str(text);
        }
    }
    for child in &component.extra {
        write_legacy(child, style, out, emitted);
    }
}

fn merge_style(component: &TextComponent, inherited: LegacyStyle) -> LegacyStyle {
    LegacyStyle {
        color: component
            .color
            .and_then(TextColor::as_named)
            .or(inherited.color),
        obfuscated: component.obfuscated.unwrap_or(inherited.obfuscated),
        bold: component.bold.unwrap_or(inherited.bold),
        strikethrough: component.strikethrough.unwrap_or(inherited.strikethrough),
        underlined: component.underlined.unwrap_or(inherited.underlined),
        italic: component.italic.unwrap_or(inherited.italic),
    }
}

fn push_style_codes(out: &mut String, from: LegacyStyle, to: LegacyStyle) {
    if to.extends(&from) {
        to.push_decoration_codes(&from, out);
        return;
    }
    match to.color {
        Some(color) => {
            out.push(SECTION);
            out.push(color.legacy_code());
        }
        None => {
            out.push(SECTION);
            out.push('r');
        }
    }
    to.push_decoration_codes(&LegacyStyle::default(), out);
}

// =============================================================================
// COMPONENT TREE DECODING
// =============================================================================

/// Decodes a JSON text tree into a component.
///
/// Scalars become literals, an array folds into its first element with the
/// rest appended as children, and objects carry style, children, and
/// content.
pub fn decode_text_tree(value: &Json) -> Result<TextComponent, DecodeError> {
    match value {
        Json::String(text) => Ok(TextComponent::text(text.clone())),
        Json::Bool(flag) => Ok(TextComponent::text(flag.to_string())),
        Json::Number(number) => Ok(TextComponent::text(number.to_string())),
        Json::Array(entries) => {
            let mut iter = entries.iter();
            let first = iter.next().ok_or(DecodeError::NotEnoughEntries {
                what: "text tree array",
                expected: 1,
                len: 0,
            })?;
            let mut root = decode_text_tree(first)?;
            for entry in iter {
                root.extra.push(decode_text_tree(entry)?);
            }
            Ok(root)
        }
        Json::Object(fields) => decode_component_object(fields),
        other => Err(DecodeError::UnsupportedShape {
            what: "description",
            found: json_type_name(other),
        }),
    }
}

fn decode_component_object(fields: &Map<String, Json>) -> Result<TextComponent, DecodeError> {
    let content = if let Some(text) = fields.get("text") {
        TextContent::Literal(scalar_text(text, "text")?)
    } else if let Some(key) = fields.get("translate") {
        let args = match fields.get("with") {
            Some(Json::Array(entries)) => entries
                .iter()
                .map(decode_text_tree)
                .collect::<Result<_, _>>()?,
            Some(other) => {
                return Err(DecodeError::UnsupportedShape {
                    what: "with",
                    found: json_type_name(other),
                });
            }
            None => Vec::new(),
        };
        TextContent::Translatable {
            key: scalar_text(key, "translate")?,
            args,
        }
    } else if let Some(key) = fields.get("keybind") {
        TextContent::Keybind(scalar_text(key, "keybind")?)
    } else {
        // Unrecognized content (selectors, scores, ...) is preserved
        // verbatim so re-encoding does not lose it.
        let leftover: Map<String, Json> = fields
            .iter()
            .filter(|(key, _)| !STYLE_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        TextContent::Other(leftover)
    };

    let mut component = TextComponent::new(content);
    if let Some(value) = fields.get("color") {
        component.color = Some(decode_color(value)?);
    }
    component.font = string_field(fields, "font")?;
    component.bold = bool_field(fields, "bold")?;
    component.italic = bool_field(fields, "italic")?;
    component.underlined = bool_field(fields, "underlined")?;
    component.strikethrough = bool_field(fields, "strikethrough")?;
    component.obfuscated = bool_field(fields, "obfuscated")?;
    component.insertion = string_field(fields, "insertion")?;
    component.hover_event = fields.get("hoverEvent").cloned();
    component.click_event = fields.get("clickEvent").cloned();
    match fields.get("extra") {
        None => {}
        Some(Json::Array(entries)) => {
            for entry in entries {
                component.extra.push(decode_text_tree(entry)?);
            }
        }
        Some(other) => {
            return Err(DecodeError::UnsupportedShape {
                what: "extra",
                found: json_type_name(other),
            });
        }
    }
    Ok(component)
}

fn scalar_text(value: &Json, what: &'static str) -> Result<String, DecodeError> {
    match value {
        Json::String(text) => Ok(text.clone()),
        Json::Bool(flag) => Ok(flag.to_string()),
        Json::Number(number) => Ok(number.to_string()),
        other => Err(DecodeError::UnsupportedShape {
            what,
            found: json_type_name(other),
        }),
    }
}

fn string_field(
    fields: &Map<String, Json>,
    name: &'static str,
) -> Result<Option<String>, DecodeError> {
    match fields.get(name) {
        None => Ok(None),
        Some(Json::String(text)) => Ok(Some(text.clone())),
        Some(other) => Err(DecodeError::UnsupportedShape {
            what: name,
            found: json_type_name(other),
        }),
    }
}

fn bool_field(
    fields: &Map<String, Json>,
    name: &'static str,
) -> Result<Option<bool>, DecodeError> {
    match fields.get(name) {
        None => Ok(None),
        Some(Json::Bool(flag)) => Ok(Some(*flag)),
        Some(other) => Err(DecodeError::UnsupportedShape {
            what: name,
            found: json_type_name(other),
        }),
    }
}

fn decode_color(value: &Json) -> Result<TextColor, DecodeError> {
    let name = match value {
        Json::String(name) => name,
        other => {
            return Err(DecodeError::UnsupportedShape {
                what: "color",
                found: json_type_name(other),
            });
        }
    };
    if let Some(hex) = name.strip_prefix('#') {
        if hex.len() == 6 {
            if let Ok(rgb) = u32::from_str_radix(hex, 16) {
                return Ok(TextColor::Rgb(rgb));
            }
        }
        return Err(DecodeError::UnknownColor { name: name.clone() });
    }
    NamedColor::from_name(name)
        .map(TextColor::Named)
        .ok_or_else(|| DecodeError::UnknownColor { name: name.clone() })
}

// =============================================================================
// COMPONENT TREE ENCODING
// =============================================================================

/// Encodes a component into a JSON text tree, style fields first and the
/// content keys last.
pub fn encode_text_tree(component: &TextComponent) -> Json {
    let mut fields = Map::new();
    if let Some(color) = component.color {
        fields.insert("color".to_string(), Json::String(encode_color(color)));
    }
    for (name, flag) in [
        ("bold", component.bold),
        ("italic", component.italic),
        ("underlined", component.underlined),
        ("strikethrough", component.strikethrough),
        ("obfuscated", component.obfuscated),
    ] {
        if let Some(flag) = flag {
            fields.insert(name.to_string(), Json::Bool(flag));
        }
    }
    if let Some(font) = &component.font {
        fields.insert("font".to_string(), Json::String(font.clone()));
    }
    if let Some(insertion) = &component.insertion {
        fields.insert("insertion".to_string(), Json::String(insertion.clone()));
    }
    if let Some(hover) = &component.hover_event {
        fields.insert("hoverEvent".to_string(), hover.clone());
    }
    if let Some(click) = &component.click_event {
        fields.insert("clickEvent".to_string(), click.clone());
    }
    if !component.extra.is_empty() {
        fields.insert(
            "extra".to_string(),
            Json::Array(component.extra.iter().map(encode_text_tree).collect()),
        );
    }
    match &component.content {
        TextContent::Literal(text) => {
            fields.insert("text".to_string(), Json::String(text.clone()));
        }
        TextContent::Translatable { key, args } => {
            fields.insert("translate".to_string(), Json::String(key.clone()));
            if !args.is_empty() {
                fields.insert(
                    "with".to_string(),
                    Json::Array(args.iter().map(encode_text_tree).collect()),
                );
            }
        }
        TextContent::Keybind(key) => {
            fields.insert("keybind".to_string(), Json::String(key.clone()));
        }
        TextContent::Other(content) => {
            for (key, value) in content {
                fields.insert(key.clone(), value.clone());
            }
        }
    }
    Json::Object(fields)
}

fn encode_color(color: TextColor) -> String {
    match color {
        TextColor::Named(named) => named.name().to_string(),
        TextColor::Rgb(rgb) => format!("#{rgb:06X}"),
    }
}
