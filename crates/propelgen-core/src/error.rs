//! Error types for schema loading and source generation

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for schema loading
pub type SchemaResult<T> = Result<T, SchemaReadError>;

/// Failure to turn a schema document into a [`Schema`](crate::Schema).
///
/// Always fatal: without a model there is nothing to generate.
#[derive(Error, Debug)]
pub enum SchemaReadError {
    /// The schema file could not be read
    #[error("failed to read schema {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document is not valid YAML or does not have the nested-mapping shape
    #[error("invalid YAML schema: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document is not valid JSON or does not have the nested-mapping shape
    #[error("invalid JSON schema: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is not valid TOML or does not have the nested-mapping shape
    #[error("invalid TOML schema: {0}")]
    Toml(#[from] toml::de::Error),

    /// The root mapping has no entity container
    #[error("schema has no `{key}` entity container")]
    MissingContainer { key: &'static str },
}

/// A logical column type outside the supported set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown type: {0}")]
pub struct UnknownType(pub String);

/// A property that cannot become a field. The property is dropped and
/// generation carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("unknown type `{logical_type}` for property `{entity}.{property}`")]
    UnknownType {
        entity: String,
        property: String,
        logical_type: String,
    },

    #[error("property `{entity}.{property}` has no `type`")]
    MissingType { entity: String, property: String },

    #[error("property `{entity}.{property}` has a non-string `type`: {found}")]
    NonStringType {
        entity: String,
        property: String,
        found: String,
    },

    #[error("property `{entity}.{property}` must be a mapping, found {found}")]
    NotAMapping {
        entity: String,
        property: String,
        found: &'static str,
    },

    #[error("property `{entity}.{property}` becomes `{identifier}`, which is not a valid Java field name")]
    InvalidIdentifier {
        entity: String,
        property: String,
        identifier: String,
    },

    #[error("property `{entity}.{property}` becomes `{identifier}`, which an earlier property already uses")]
    DuplicateIdentifier {
        entity: String,
        property: String,
        identifier: String,
    },
}

impl FieldError {
    /// Name of the entity owning the dropped property
    pub fn entity(&self) -> &str {
        match self {
            FieldError::UnknownType { entity, .. }
            | FieldError::MissingType { entity, .. }
            | FieldError::NonStringType { entity, .. }
            | FieldError::NotAMapping { entity, .. }
            | FieldError::InvalidIdentifier { entity, .. }
            | FieldError::DuplicateIdentifier { entity, .. } => entity,
        }
    }

    /// Name of the dropped property
    pub fn property(&self) -> &str {
        match self {
            FieldError::UnknownType { property, .. }
            | FieldError::MissingType { property, .. }
            | FieldError::NonStringType { property, .. }
            | FieldError::NotAMapping { property, .. }
            | FieldError::InvalidIdentifier { property, .. }
            | FieldError::DuplicateIdentifier { property, .. } => property,
        }
    }
}

/// A per-entity failure. The entity produces no (or a partial) file and
/// generation continues with the next one.
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("entity `{entity}` must be a mapping, found {found}")]
    NotAMapping { entity: String, found: &'static str },

    #[error("entity `{entity}` has no `_attributes` mapping")]
    MissingAttributes { entity: String },

    #[error("entity `{entity}` has no string `_attributes.phpName`")]
    MissingOutputTypeName { entity: String },

    #[error("entity `{entity}` output type name `{name}` is not a valid Java identifier")]
    InvalidOutputTypeName { entity: String, name: String },

    #[error("failed to write {path:?} for entity `{entity}`: {source}")]
    Write {
        entity: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl EmitError {
    /// Name of the entity that failed
    pub fn entity(&self) -> &str {
        match self {
            EmitError::NotAMapping { entity, .. }
            | EmitError::MissingAttributes { entity }
            | EmitError::MissingOutputTypeName { entity }
            | EmitError::InvalidOutputTypeName { entity, .. }
            | EmitError::Write { entity, .. } => entity,
        }
    }
}

/// The output directory could not be created.
#[derive(Error, Debug)]
#[error("failed to create output directory {path:?}: {source}")]
pub struct OutputDirError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Invalid generator settings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("package name cannot be empty")]
    EmptyPackageName,

    #[error("invalid package name `{package}`: `{segment}` is not a Java identifier")]
    InvalidPackageName { package: String, segment: String },

    #[error("output directory cannot be empty")]
    EmptyOutputDir,
}
