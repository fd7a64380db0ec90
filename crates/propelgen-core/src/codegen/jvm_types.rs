//! JVM type mappings for Java code generation.
//!
//! # Type Mappings
//!
//! | Category | Java | Import |
//! |----------|------|--------|
//! | `DateTime` | `DateTime` | `org.joda.time.DateTime` |
//! | `Integer` | `Integer` | |
//! | `BigInteger` | `BigInteger` | `java.math.BigInteger` |
//! | `Decimal` | `BigDecimal` | `java.math.BigDecimal` |
//! | `Text` | `String` | |
//!
//! Fields are always boxed so a missing column value stays representable as `null`.

use crate::types::TargetCategory;

/// A JVM reference type used for a generated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JvmType {
    /// Simple type name as written in the field declaration.
    pub name: &'static str,
    /// Fully qualified name to import, if the type is not in `java.lang`.
    pub import: Option<&'static str>,
}

impl JvmType {
    /// A type from `java.lang`, which needs no import.
    pub const fn lang(name: &'static str) -> Self {
        Self { name, import: None }
    }

    /// A type that must be imported.
    pub const fn imported(name: &'static str, import: &'static str) -> Self {
        Self {
            name,
            import: Some(import),
        }
    }
}

/// Map a target category to the Java type used for the field.
pub fn map_category(category: TargetCategory) -> JvmType {
    match category {
        TargetCategory::DateTime => JvmType::imported("DateTime", "org.joda.time.DateTime"),
        TargetCategory::Integer => JvmType::lang("Integer"),
        TargetCategory::BigInteger => JvmType::imported("BigInteger", "java.math.BigInteger"),
        TargetCategory::Decimal => JvmType::imported("BigDecimal", "java.math.BigDecimal"),
        TargetCategory::Text => JvmType::lang("String"),
    }
}
