//! Error types for pack metadata decoding and validation.

use thiserror::Error;

use crate::model::FormatVersion;

/// Error parsing a [`FormatVersion`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid format version {text:?}: expected \"N\" or \"N.M\" with non-negative integers")]
pub struct ParseVersionError {
    /// The rejected input text.
    pub text: String,
}

/// Error constructing a pack format range.
///
/// An inverted range is rejected at construction, never reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("minimum format {min} is greater than maximum {max}")]
pub struct RangeError {
    /// The offending lower bound.
    pub min: FormatVersion,
    /// The offending upper bound.
    pub max: FormatVersion,
}

/// Error decoding pack metadata from a JSON tree.
///
/// Every error is raised eagerly at decode time and propagated to the
/// immediate caller; there is no partial recovery.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// A required field is absent.
    #[error("missing required field {field:?}")]
    MissingField { field: &'static str },

    /// A JSON value is not one of the recognized shapes for its slot.
    #[error("unsupported {what} shape: {found}")]
    UnsupportedShape {
        what: &'static str,
        found: &'static str,
    },

    /// A format number is negative or does not fit in 32 bits.
    #[error("format version out of range: {value}")]
    VersionOutOfRange { value: i64 },

    /// An array form is shorter than its shape requires.
    #[error("expected at least {expected} entries in {what}, found {len}")]
    NotEnoughEntries {
        what: &'static str,
        expected: usize,
        len: usize,
    },

    /// A text color is neither a named color nor `#RRGGBB` hex.
    #[error("unknown text color {name:?}")]
    UnknownColor { name: String },

    /// The decoded range has a minimum above its maximum.
    #[error(transparent)]
    InvalidRange(#[from] RangeError),
}
