//! Generator configuration

use crate::codegen::naming::invalid_package_segment;
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Settings for one generation run.
///
/// Built once at startup and passed by reference to the reader and the
/// generator; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    schema_path: PathBuf,
    package_name: String,
    output_dir: PathBuf,
}

impl GeneratorConfig {
    pub fn new(
        schema_path: impl Into<PathBuf>,
        package_name: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            schema_path: schema_path.into(),
            package_name: package_name.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Schema document to read
    pub fn schema_path(&self) -> &Path {
        &self.schema_path
    }

    /// Java package of the generated classes
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Directory receiving one file per entity
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.package_name.is_empty() {
            return Err(ConfigError::EmptyPackageName);
        }

        if let Some(segment) = invalid_package_segment(&self.package_name) {
            return Err(ConfigError::InvalidPackageName {
                package: self.package_name.clone(),
                segment: segment.to_string(),
            });
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOutputDir);
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
