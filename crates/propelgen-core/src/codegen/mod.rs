//! Java source generation from schema entities.
//!
//! # Pipeline
//!
//! ```text
//! Entity
//!   ├─ _attributes.phpName ──────────────→ class name / file name
//!   └─ property
//!        ├─ type ─→ [types::map_type] ─→ [jvm_types::map_category] ─→ field type
//!        └─ name ─→ [naming::to_camel_case] ─→ field name (+ @SerializedName)
//! ```
//!
//! # Output
//!
//! ```java
//! package co.nstant.in;
//!
//! import com.google.gson.annotations.SerializedName;
//! import java.math.BigInteger;
//! import lombok.Data;
//!
//! @Data
//! public class User {
//!
//!     // {type=BIGINT}
//!     @SerializedName("user_id")
//!     private BigInteger userId;
//!
//! }
//! ```
//!
//! # See Also
//!
//! - [`naming`] for identifier conversion
//! - [`jvm_types`] for the category to Java type table
//! - [`java`] for class rendering and writing

pub mod java;
pub mod jvm_types;
pub mod naming;

pub use java::{EmittedClass, JavaClass, SOURCE_EXTENSION, emit, render_class};
