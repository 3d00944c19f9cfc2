//! Version-aware codec for resource pack metadata (`pack.mcmeta`).
//!
//! The on-disk schema of the `pack` section changed several times over the
//! lifetime of the game while old and new clients still have to read each
//! other's packs. This crate models the declared compatibility range and
//! converts it across every historical JSON shape.
//!
//! # Overview
//!
//! - **Version ranges**: [`FormatVersion`] is an ordered `(major, minor)`
//!   identifier; [`PackFormat`] is a validated inclusive range of them.
//! - **Shape dispatch**: the range decoder accepts a bare number, a
//!   `[min, max]` pair, and the `min_inclusive`/`max_inclusive` object
//!   form; the encoder always emits the shortest shape that still reads.
//! - **Legacy gates**: pure predicates decide whether a description tree
//!   or an element rotation can still be expressed in its legacy encoding,
//!   so the most backward-compatible representation is written without
//!   silently changing meaning.
//!
//! # Quick start
//!
//! ```rust
//! use mcmeta::{FormatVersion, PackFormat, PackMeta, TextComponent};
//! use mcmeta::codec::{read_pack_meta, write_pack_meta};
//!
//! let meta = PackMeta::new(
//!     PackFormat::new(FormatVersion::from_major(18), FormatVersion::from_major(20))?,
//!     TextComponent::text("My pack"),
//! );
//!
//! let written = write_pack_meta(&meta);
//! assert_eq!(
//!     written.to_string(),
//!     r#"{"description":"My pack","pack_format":18,"supported_formats":[18,20]}"#,
//! );
//!
//! let read_back = read_pack_meta(&written)?;
//! assert_eq!(read_back, meta);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core value types (FormatVersion, PackFormat, PackMeta,
//!   TextComponent, ElementRotation)
//! - [`codec`]: JSON decoding/encoding across the historical shapes
//! - [`error`]: Error types
//!
//! All operations are pure, synchronous value transformations over an
//! in-memory JSON tree; every value type is immutable after construction
//! and freely shareable across threads.

pub mod codec;
pub mod error;
pub mod model;

// Re-export commonly used types at crate root
pub use codec::{
    can_use_legacy_text, decode_format_version, decode_pack_format,
    decode_pack_format_with_fallback, decode_text_tree, encode_pack_format, encode_text_tree,
    parse_legacy_text, read_pack_meta, serialize_legacy_text, write_pack_meta,
};
pub use error::{DecodeError, ParseVersionError, RangeError};
pub use model::{
    Axis3, ElementRotation, FormatVersion, NamedColor, PackFormat, PackMeta, TextColor,
    TextComponent, TextContent, Vector3,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
