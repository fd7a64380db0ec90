//! Naming convention utilities for Java code generation.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `snake_case` | [`to_camel_case`] | `camelCase` |
//! | `User` | [`is_java_identifier`] | `true` |
//! | `co.nstant.in` | [`is_java_package`] | `true` |

/// Java reserved words and literals, which cannot name a type or package segment.
const JAVA_RESERVED: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "transient", "true", "try", "void", "volatile", "while", "_",
];

/// Convert snake_case to camelCase.
///
/// Each underscore is dropped and the character after it upper-cased. All
/// other characters are kept as they are, so names without underscores come
/// back unchanged.
///
/// # Examples
///
/// ```
/// use propelgen_core::codegen::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("first_name"), "firstName");
/// assert_eq!(to_camel_case("user_id"), "userId");
/// assert_eq!(to_camel_case("color"), "color");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = false;

    for c in s.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Check that `s` can be used as a Java type name.
///
/// # Examples
///
/// ```
/// use propelgen_core::codegen::naming::is_java_identifier;
///
/// assert!(is_java_identifier("User"));
/// assert!(!is_java_identifier("../User"));
/// assert!(!is_java_identifier("class"));
/// ```
pub fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        && !JAVA_RESERVED.contains(&s)
}

/// Check that `s` is a dot-separated list of Java identifiers.
pub fn is_java_package(s: &str) -> bool {
    invalid_package_segment(s).is_none()
}

/// First segment of a package name that is not a Java identifier.
pub(crate) fn invalid_package_segment(s: &str) -> Option<&str> {
    s.split('.').find(|segment| !is_java_identifier(segment))
}

#[cfg(test)]
#[path = "naming/naming_tests.rs"]
mod naming_tests;
