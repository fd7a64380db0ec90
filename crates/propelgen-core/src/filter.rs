//! Separates schema objects from metadata entries.
//!
//! There is no separate metadata schema: any entity or property whose name
//! starts with [`ESCAPE_MARKER`] is metadata and never becomes generated code.

/// Leading character that marks a key as metadata
pub const ESCAPE_MARKER: char = '_';

/// Returns `false` iff `name` is a metadata entry.
///
/// ```
/// use propelgen_core::filter::is_generatable;
///
/// assert!(is_generatable("user"));
/// assert!(!is_generatable("_attributes"));
/// ```
pub fn is_generatable(name: &str) -> bool {
    !name.starts_with(ESCAPE_MARKER)
}
