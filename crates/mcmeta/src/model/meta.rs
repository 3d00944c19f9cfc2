//! The top-level pack metadata record.

use crate::model::{PackFormat, TextComponent};

/// Pack metadata: the declared format range plus the description shown in
/// the pack selection screen.
#[derive(Debug, Clone, PartialEq)]
pub struct PackMeta {
    /// The format range the pack declares compatibility with.
    pub formats: PackFormat,
    /// The pack description.
    pub description: TextComponent,
}

impl PackMeta {
    /// Creates a metadata record.
    pub fn new(formats: PackFormat, description: TextComponent) -> Self {
        Self {
            formats,
            description,
        }
    }
}
