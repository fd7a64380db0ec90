//! Logical column type mapping.
//!
//! | Logical type | Target category |
//! |--------------|-----------------|
//! | `TIMESTAMP`, `TIME` | [`TargetCategory::DateTime`] |
//! | `INTEGER`, `SMALLINT`, `TINYINT` | [`TargetCategory::Integer`] |
//! | `BIGINT` | [`TargetCategory::BigInteger`] |
//! | `DECIMAL`, `DOUBLE`, `FLOAT` | [`TargetCategory::Decimal`] |
//! | `VARCHAR`, `LONGVARCHAR` | [`TargetCategory::Text`] |
//!
//! Floating point columns map to an arbitrary-precision decimal so generated
//! code never rounds. Matching is exact and case-sensitive.

use crate::error::UnknownType;

/// Field representation chosen for a logical type, independent of the
/// target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetCategory {
    /// Date-time value
    DateTime,
    /// 32-bit signed integer
    Integer,
    /// Arbitrary-precision integer
    BigInteger,
    /// Arbitrary-precision decimal
    Decimal,
    /// Text string
    Text,
}

/// Every supported logical type and its category.
pub const TYPE_TABLE: &[(&str, TargetCategory)] = &[
    ("TIMESTAMP", TargetCategory::DateTime),
    ("TIME", TargetCategory::DateTime),
    ("INTEGER", TargetCategory::Integer),
    ("SMALLINT", TargetCategory::Integer),
    ("TINYINT", TargetCategory::Integer),
    ("BIGINT", TargetCategory::BigInteger),
    ("DECIMAL", TargetCategory::Decimal),
    ("DOUBLE", TargetCategory::Decimal),
    ("FLOAT", TargetCategory::Decimal),
    ("VARCHAR", TargetCategory::Text),
    ("LONGVARCHAR", TargetCategory::Text),
];

/// Map a logical column type to its target category.
///
/// ```
/// use propelgen_core::types::{TargetCategory, map_type};
///
/// assert_eq!(map_type("BIGINT"), Ok(TargetCategory::BigInteger));
/// assert!(map_type("ENUM").is_err());
/// ```
pub fn map_type(logical_type: &str) -> Result<TargetCategory, UnknownType> {
    TYPE_TABLE
        .iter()
        .find(|(name, _)| *name == logical_type)
        .map(|(_, category)| *category)
        .ok_or_else(|| UnknownType(logical_type.to_string()))
}

/// Names of all supported logical types, in table order.
pub fn supported_types() -> impl Iterator<Item = &'static str> {
    TYPE_TABLE.iter().map(|(name, _)| *name)
}
