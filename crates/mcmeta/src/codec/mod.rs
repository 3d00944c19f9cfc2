//! JSON decoding/encoding for pack metadata.
//!
//! Decoding dispatches on the runtime shape of the JSON value rather than
//! a fixed field layout, so every historical writer stays readable;
//! encoding picks the most backward-compatible representation the value
//! still fits in.

pub mod pack_format;
pub mod pack_meta;
pub mod primitives;
pub mod text;

pub use pack_format::{
    decode_format_version, decode_pack_format, decode_pack_format_with_fallback,
    encode_pack_format,
};
pub use pack_meta::{read_pack_meta, write_pack_meta};
pub use text::{
    can_use_legacy_text, decode_text_tree, encode_text_tree, parse_legacy_text,
    serialize_legacy_text,
};
