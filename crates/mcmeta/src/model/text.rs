//! Minimal rich-text component model for pack descriptions.
//!
//! Only the surface the metadata codec needs: content, color, a handful of
//! style fields, and children. Hover and click event payloads are carried
//! as opaque JSON and re-emitted untouched.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;
use serde_json::Value as Json;

/// The sixteen colors expressible in the legacy flat-string encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl NamedColor {
    /// All named colors, in legacy code order (`0` through `f`).
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::DarkBlue,
        NamedColor::DarkGreen,
        NamedColor::DarkAqua,
        NamedColor::DarkRed,
        NamedColor::DarkPurple,
        NamedColor::Gold,
        NamedColor::Gray,
        NamedColor::DarkGray,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Aqua,
        NamedColor::Red,
        NamedColor::LightPurple,
        NamedColor::Yellow,
        NamedColor::White,
    ];

    /// The exact packed `0xRRGGBB` value of this color.
    pub const fn rgb(self) -> u32 {
        match self {
            NamedColor::Black => 0x000000,
            NamedColor::DarkBlue => 0x0000AA,
            NamedColor::DarkGreen => 0x00AA00,
            NamedColor::DarkAqua => 0x00AAAA,
            NamedColor::DarkRed => 0xAA0000,
            NamedColor::DarkPurple => 0xAA00AA,
            NamedColor::Gold => 0xFFAA00,
            NamedColor::Gray => 0xAAAAAA,
            NamedColor::DarkGray => 0x555555,
            NamedColor::Blue => 0x5555FF,
            NamedColor::Green => 0x55FF55,
            NamedColor::Aqua => 0x55FFFF,
            NamedColor::Red => 0xFF5555,
            NamedColor::LightPurple => 0xFF55FF,
            NamedColor::Yellow => 0xFFFF55,
            NamedColor::White => 0xFFFFFF,
        }
    }

    /// The lowercase identifier used in JSON text trees.
    pub const fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::DarkBlue => "dark_blue",
            NamedColor::DarkGreen => "dark_green",
            NamedColor::DarkAqua => "dark_aqua",
            NamedColor::DarkRed => "dark_red",
            NamedColor::DarkPurple => "dark_purple",
            NamedColor::Gold => "gold",
            NamedColor::Gray => "gray",
            NamedColor::DarkGray => "dark_gray",
            NamedColor::Blue => "blue",
            NamedColor::Green => "green",
            NamedColor::Aqua => "aqua",
            NamedColor::Red => "red",
            NamedColor::LightPurple => "light_purple",
            NamedColor::Yellow => "yellow",
            NamedColor::White => "white",
        }
    }

    /// The section-code character used in the legacy flat-string encoding.
    pub const fn legacy_code(self) -> char {
        match self {
            NamedColor::Black => '0',
            NamedColor::DarkBlue => '1',
            NamedColor::DarkGreen => '2',
            NamedColor::DarkAqua => '3',
            NamedColor::DarkRed => '4',
            NamedColor::DarkPurple => '5',
            NamedColor::Gold => '6',
            NamedColor::Gray => '7',
            NamedColor::DarkGray => '8',
            NamedColor::Blue => '9',
            NamedColor::Green => 'a',
            NamedColor::Aqua => 'b',
            NamedColor::Red => 'c',
            NamedColor::LightPurple => 'd',
            NamedColor::Yellow => 'e',
            NamedColor::White => 'f',
        }
    }

    /// Looks up a named color by exact RGB match.
    pub fn from_rgb(rgb: u32) -> Option<NamedColor> {
        NAMED_BY_RGB.get(&rgb).copied()
    }

    /// Looks up a named color by its JSON identifier.
    pub fn from_name(name: &str) -> Option<NamedColor> {
        NAMED_BY_NAME.get(name).copied()
    }

    /// Looks up a named color by its legacy section code.
    pub fn from_legacy_code(code: char) -> Option<NamedColor> {
        match code {
            '0'..='9' => Some(Self::ALL[code as usize - '0' as usize]),
            'a'..='f' => Some(Self::ALL[code as usize - 'a' as usize + 10]),
            _ => None,
        }
    }
}

lazy_static! {
    static ref NAMED_BY_RGB: FxHashMap<u32, NamedColor> =
        NamedColor::ALL.iter().map(|c| (c.rgb(), *c)).collect();
    static ref NAMED_BY_NAME: FxHashMap<&'static str, NamedColor> =
        NamedColor::ALL.iter().map(|c| (c.name(), *c)).collect();
}

/// A text color: one of the sixteen legacy names, or an arbitrary RGB
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    Named(NamedColor),
    /// Packed `0xRRGGBB`.
    Rgb(u32),
}

impl TextColor {
    /// The packed RGB value, regardless of representation.
    pub fn rgb(self) -> u32 {
        match self {
            TextColor::Named(named) => named.rgb(),
            TextColor::Rgb(value) => value,
        }
    }

    /// The named color this value resolves to, if its RGB matches one of
    /// the sixteen legacy colors exactly.
    pub fn as_named(self) -> Option<NamedColor> {
        match self {
            TextColor::Named(named) => Some(named),
            TextColor::Rgb(value) => NamedColor::from_rgb(value),
        }
    }
}

/// Component content, discriminated the way JSON text trees are.
#[derive(Debug, Clone, PartialEq)]
pub enum TextContent {
    /// Plain text (the `text` key).
    Literal(String),
    /// A translation key (`translate`) with optional substitution
    /// arguments (`with`).
    Translatable {
        key: String,
        args: Vec<TextComponent>,
    },
    /// A client keybind reference (the `keybind` key).
    Keybind(String),
    /// Any other content, preserved verbatim for re-encoding.
    Other(serde_json::Map<String, Json>),
}

/// A node in a rich-text tree.
///
/// Decoration flags are tri-state: `None` inherits from the enclosing
/// component.
#[derive(Debug, Clone, PartialEq)]
pub struct TextComponent {
    pub content: TextContent,
    pub color: Option<TextColor>,
    pub font: Option<String>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underlined: Option<bool>,
    pub strikethrough: Option<bool>,
    pub obfuscated: Option<bool>,
    pub insertion: Option<String>,
    /// Opaque hover event payload, carried through untouched.
    pub hover_event: Option<Json>,
    /// Opaque click event payload, carried through untouched.
    pub click_event: Option<Json>,
    /// Child components, appended after this node's own content.
    pub extra: Vec<TextComponent>,
}

impl TextComponent {
    /// Creates an unstyled component with the given content.
    pub fn new(content: TextContent) -> Self {
        Self {
            content,
            color: None,
            font: None,
            bold: None,
            italic: None,
            underlined: None,
            strikethrough: None,
            obfuscated: None,
            insertion: None,
            hover_event: None,
            click_event: None,
            extra: Vec::new(),
        }
    }

    /// Creates a plain literal component.
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(TextContent::Literal(content.into()))
    }

    /// Creates a translatable component with no arguments.
    pub fn translatable(key: impl Into<String>) -> Self {
        Self::new(TextContent::Translatable {
            key: key.into(),
            args: Vec::new(),
        })
    }

    /// Creates a keybind component.
    pub fn keybind(key: impl Into<String>) -> Self {
        Self::new(TextContent::Keybind(key.into()))
    }

    /// Sets the color.
    pub fn color(mut self, color: TextColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the color to one of the sixteen named colors.
    pub fn named_color(self, color: NamedColor) -> Self {
        self.color(TextColor::Named(color))
    }

    /// Sets a custom font.
    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Sets the bold flag.
    pub fn bold(mut self, flag: bool) -> Self {
        self.bold = Some(flag);
        self
    }

    /// Sets the italic flag.
    pub fn italic(mut self, flag: bool) -> Self {
        self.italic = Some(flag);
        self
    }

    /// Sets the underlined flag.
    pub fn underlined(mut self, flag: bool) -> Self {
        self.underlined = Some(flag);
        self
    }

    /// Sets the strikethrough flag.
    pub fn strikethrough(mut self, flag: bool) -> Self {
        self.strikethrough = Some(flag);
        self
    }

    /// Sets the obfuscated flag.
    pub fn obfuscated(mut self, flag: bool) -> Self {
        self.obfuscated = Some(flag);
        self
    }

    /// Sets the shift-click insertion text.
    pub fn insertion(mut self, insertion: impl Into<String>) -> Self {
        self.insertion = Some(insertion.into());
        self
    }

    /// Appends a child component.
    pub fn append(mut self, child: TextComponent) -> Self {
        self.extra.push(child);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_lookups_agree() {
        for color in NamedColor::ALL {
            assert_eq!(NamedColor::from_rgb(color.rgb()), Some(color));
            assert_eq!(NamedColor::from_name(color.name()), Some(color));
            assert_eq!(NamedColor::from_legacy_code(color.legacy_code()), Some(color));
        }
    }

    #[test]
    fn test_unknown_lookups() {
        assert_eq!(NamedColor::from_rgb(0xFF8DF8), None);
        assert_eq!(NamedColor::from_name("grey"), None);
        assert_eq!(NamedColor::from_legacy_code('r'), None);
        assert_eq!(NamedColor::from_legacy_code('z'), None);
    }

    #[test]
    fn test_color_resolves_to_named_by_exact_rgb() {
        assert_eq!(
            TextColor::Rgb(0xAAAAAA).as_named(),
            Some(NamedColor::Gray)
        );
        assert_eq!(TextColor::Rgb(0xAAAAAB).as_named(), None);
        assert_eq!(
            TextColor::Named(NamedColor::Gold).as_named(),
            Some(NamedColor::Gold)
        );
    }

    #[test]
    fn test_builder_chain() {
        let component = TextComponent::text("hi")
            .named_color(NamedColor::Red)
            .bold(true)
            .append(TextComponent::keybind("key.jump"));
        assert_eq!(component.color, Some(TextColor::Named(NamedColor::Red)));
        assert_eq!(component.bold, Some(true));
        assert_eq!(component.extra.len(), 1);
    }
}
