//! propelgen-core - Propel schema to Java source generation
//!
//! This crate provides:
//! - [`Schema`] reader for Propel-style YAML, JSON and TOML schema documents
//! - [`filter`] separating real entities and properties from metadata entries
//! - [`types`] mapping logical column types to target categories
//! - [`codegen`] rendering Lombok/Gson Java classes
//! - [`Generator`] running the whole pipeline and collecting a [`GenerationReport`]
//!
//! # Example
//!
//! ```no_run
//! use propelgen_core::{Generator, GeneratorConfig, Schema};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GeneratorConfig::new("schema.yml", "co.nstant.in", "src/main/java/co/nstant/in");
//! let schema = Schema::load(config.schema_path())?;
//! let report = Generator::new(&config)?.run(&schema)?;
//!
//! println!("{} files written", report.written.len());
//! # Ok(())
//! # }
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod filter;
pub mod generate;
pub mod schema;
pub mod types;

pub use config::GeneratorConfig;
pub use error::{ConfigError, EmitError, FieldError, OutputDirError, SchemaReadError, UnknownType};
pub use generate::{GenerationReport, Generator};
pub use schema::{Entity, Property, Schema, SchemaFormat};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Entity, GenerationReport, Generator, GeneratorConfig, Property, Schema, SchemaFormat,
    };
}
