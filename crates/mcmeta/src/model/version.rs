//! Pack format version identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseVersionError;

/// An ordered `(major, minor)` identifier for a pack schema revision.
///
/// Versions compare by major first, then minor. The minor component is 0
/// wherever the on-disk form omits it, so plain integer formats and
/// `[major, minor]` pairs order consistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FormatVersion {
    major: u32,
    minor: u32,
}

impl FormatVersion {
    /// Creates a version from major and minor components.
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Creates a major-only version (minor = 0).
    pub const fn from_major(major: u32) -> Self {
        Self { major, minor: 0 }
    }

    /// Parses a version from `"N"` or `"N.M"` text.
    pub fn parse(text: &str) -> Result<Self, ParseVersionError> {
        let invalid = || ParseVersionError {
            text: text.to_string(),
        };
        match text.split_once('.') {
            Some((major, minor)) => Ok(Self::new(
                major.parse().map_err(|_| invalid())?,
                minor.parse().map_err(|_| invalid())?,
            )),
            None => Ok(Self::from_major(text.parse().map_err(|_| invalid())?)),
        }
    }

    /// The major component.
    pub const fn major(&self) -> u32 {
        self.major
    }

    /// The minor component.
    pub const fn minor(&self) -> u32 {
        self.minor
    }
}

impl FromStr for FormatVersion {
    type Err = ParseVersionError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minor == 0 {
            write!(f, "{}", self.major)
        } else {
            write!(f, "{}.{}", self.major, self.minor)
        }
    }
}
