//! Generation pipeline: one Java file per generatable entity.
//!
//! Per-property and per-entity problems are logged, collected in the
//! [`GenerationReport`] and never stop the run. Only a missing output
//! directory that cannot be created aborts it. Property problems are only
//! reported for classes that were actually written.

use crate::codegen::java::{EmittedClass, emit};
use crate::config::GeneratorConfig;
use crate::error::{ConfigError, EmitError, FieldError, OutputDirError};
use crate::schema::Schema;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

/// Outcome of one run over a schema.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Files written, in entity order.
    pub written: Vec<PathBuf>,
    /// Metadata entities that were skipped.
    pub skipped_entities: Vec<String>,
    /// Properties dropped from their class.
    pub field_errors: Vec<FieldError>,
    /// Entities that produced no file.
    pub entity_errors: Vec<EmitError>,
}

impl GenerationReport {
    /// Number of dropped properties plus failed entities
    pub fn error_count(&self) -> usize {
        self.field_errors.len() + self.entity_errors.len()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}

/// Runs the schema-to-Java pipeline for one configuration.
#[derive(Debug)]
pub struct Generator<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Create a generator, validating the configuration first.
    pub fn new(config: &'a GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        self.config
    }

    /// Generate one file per generatable entity, in schema order.
    ///
    /// The output directory is created if needed.
    pub fn run(&self, schema: &Schema) -> Result<GenerationReport, OutputDirError> {
        let output_dir = self.config.output_dir();
        fs::create_dir_all(output_dir).map_err(|source| OutputDirError {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let mut report = GenerationReport::default();
        let mut owners: HashMap<String, String> = HashMap::new();

        for entity in schema.entities() {
            if !entity.is_generatable() {
                debug!(entity = entity.name(), "Skipping metadata entry");
                report.skipped_entities.push(entity.name().to_string());
                continue;
            }

            match emit(entity, self.config.package_name(), output_dir) {
                Ok(EmittedClass { path, class }) => {
                    for err in &class.skipped {
                        warn!(
                            entity = err.entity(),
                            property = err.property(),
                            error = %err,
                            "Property skipped"
                        );
                    }

                    if let Some(previous) = owners.insert(class.name.clone(), entity.name().to_string())
                    {
                        warn!(
                            entity = entity.name(),
                            previous = %previous,
                            class = %class.name,
                            "Output type name generated twice, earlier file overwritten"
                        );
                    }

                    info!(entity = entity.name(), path = %path.display(), "Generated");
                    report.written.push(path);
                    report.field_errors.extend(class.skipped);
                }
                Err(err) => {
                    error!(entity = entity.name(), error = %err, "Entity not generated");
                    report.entity_errors.push(err);
                }
            }
        }

        info!(
            written = report.written.len(),
            skipped_properties = report.field_errors.len(),
            failed_entities = report.entity_errors.len(),
            "Generation finished"
        );

        Ok(report)
    }
}

#[cfg(test)]
#[path = "generate/generate_tests.rs"]
mod generate_tests;
