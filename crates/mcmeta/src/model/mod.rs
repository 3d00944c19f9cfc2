//! Core value types: versions, format ranges, metadata, text, rotation.

pub mod format;
pub mod meta;
pub mod rotation;
pub mod text;
pub mod version;

pub use format::PackFormat;
pub use meta::PackMeta;
pub use rotation::{Axis3, ElementRotation, Vector3};
pub use text::{NamedColor, TextColor, TextComponent, TextContent};
pub use version::FormatVersion;
