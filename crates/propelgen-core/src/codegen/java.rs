//! Java class generation from schema entities.
//!
//! Each generatable entity becomes one Lombok `@Data` class named after its
//! `_attributes.phpName`. Every property with a supported type becomes a
//! private field with a camelCase name and, when that name differs from the
//! schema name, a Gson `@SerializedName` binding it back.

use super::jvm_types::{JvmType, map_category};
use super::naming::{is_java_identifier, to_camel_case};
use crate::error::{EmitError, FieldError, UnknownType};
use crate::schema::{Entity, Property, value_kind};
use crate::types::map_type;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of generated source files
pub const SOURCE_EXTENSION: &str = "java";

const DATA_IMPORT: &str = "lombok.Data";
const SERIALIZED_NAME_IMPORT: &str = "com.google.gson.annotations.SerializedName";

/// A rendered class that has not been written yet.
#[derive(Debug, Clone)]
pub struct JavaClass {
    /// Output type name, also the file stem.
    pub name: String,
    /// Schema name of the entity the class came from.
    pub entity: String,
    /// Complete source text.
    pub source: String,
    /// Properties that produced no field.
    pub skipped: Vec<FieldError>,
}

impl JavaClass {
    /// `<name>.java`
    pub fn file_name(&self) -> String {
        format!("{}.{SOURCE_EXTENSION}", self.name)
    }

    /// Write the class into `output_dir`, replacing any existing file.
    pub fn write_to(&self, output_dir: &Path) -> Result<PathBuf, EmitError> {
        let path = output_dir.join(self.file_name());

        fs::write(&path, &self.source).map_err(|source| EmitError::Write {
            entity: self.entity.clone(),
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}

/// A class that has been written to disk.
#[derive(Debug, Clone)]
pub struct EmittedClass {
    pub path: PathBuf,
    pub class: JavaClass,
}

/// Render one entity and write it to `output_dir/<name>.java`.
pub fn emit(
    entity: &Entity,
    package: &str,
    output_dir: &Path,
) -> Result<EmittedClass, EmitError> {
    let class = render_class(entity, package)?;
    let path = class.write_to(output_dir)?;

    Ok(EmittedClass { path, class })
}

/// Render the Java source for one entity.
///
/// Fails only when the entity is not a mapping or has no usable output type
/// name. Properties that cannot become fields are collected in
/// [`JavaClass::skipped`]; when two properties map to the same field name the
/// first one wins.
pub fn render_class(entity: &Entity, package: &str) -> Result<JavaClass, EmitError> {
    if let Some(body) = entity.non_mapping() {
        return Err(EmitError::NotAMapping {
            entity: entity.name().to_string(),
            found: value_kind(body),
        });
    }

    let name = output_type_name(entity)?;

    let mut fields: Vec<JavaField<'_>> = Vec::new();
    let mut skipped = Vec::new();
    for property in entity.properties() {
        match java_field(entity, property) {
            Ok(field) if fields.iter().any(|f| f.name == field.name) => {
                skipped.push(FieldError::DuplicateIdentifier {
                    entity: entity.name().to_string(),
                    property: property.name().to_string(),
                    identifier: field.name,
                });
            }
            Ok(field) => fields.push(field),
            Err(err) => skipped.push(err),
        }
    }

    let source = render_source(name, package, &fields);

    Ok(JavaClass {
        name: name.to_string(),
        entity: entity.name().to_string(),
        source,
        skipped,
    })
}

fn output_type_name(entity: &Entity) -> Result<&str, EmitError> {
    if entity.attributes().is_none() {
        return Err(EmitError::MissingAttributes {
            entity: entity.name().to_string(),
        });
    }

    let name = entity
        .output_type_name()
        .ok_or_else(|| EmitError::MissingOutputTypeName {
            entity: entity.name().to_string(),
        })?;

    // The name becomes a file name, so it must not be able to leave the output directory
    if !is_java_identifier(name) {
        return Err(EmitError::InvalidOutputTypeName {
            entity: entity.name().to_string(),
            name: name.to_string(),
        });
    }

    Ok(name)
}

/// A property that maps to a Java field.
#[derive(Debug)]
struct JavaField<'a> {
    property: &'a Property,
    name: String,
    ty: JvmType,
}

impl JavaField<'_> {
    /// The schema name, when the Java name differs from it.
    fn serialized_name(&self) -> Option<&str> {
        (self.name != self.property.name()).then(|| self.property.name())
    }
}

fn java_field<'a>(entity: &Entity, property: &'a Property) -> Result<JavaField<'a>, FieldError> {
    if let Some(value) = property.non_mapping() {
        return Err(FieldError::NotAMapping {
            entity: entity.name().to_string(),
            property: property.name().to_string(),
            found: value_kind(value),
        });
    }

    let logical_type = match property.raw_type() {
        None | Some(Value::Null) => {
            return Err(FieldError::MissingType {
                entity: entity.name().to_string(),
                property: property.name().to_string(),
            });
        }
        Some(Value::String(logical_type)) => logical_type,
        Some(other) => {
            return Err(FieldError::NonStringType {
                entity: entity.name().to_string(),
                property: property.name().to_string(),
                found: other.to_string(),
            });
        }
    };

    let category = map_type(logical_type).map_err(|UnknownType(logical_type)| {
        FieldError::UnknownType {
            entity: entity.name().to_string(),
            property: property.name().to_string(),
            logical_type,
        }
    })?;

    let name = to_camel_case(property.name());
    if !is_java_identifier(&name) {
        return Err(FieldError::InvalidIdentifier {
            entity: entity.name().to_string(),
            property: property.name().to_string(),
            identifier: name,
        });
    }

    Ok(JavaField {
        property,
        name,
        ty: map_category(category),
    })
}

fn render_source(name: &str, package: &str, fields: &[JavaField<'_>]) -> String {
    let mut imports = BTreeSet::from([DATA_IMPORT]);
    if fields.iter().any(|f| f.serialized_name().is_some()) {
        imports.insert(SERIALIZED_NAME_IMPORT);
    }
    imports.extend(fields.iter().filter_map(|f| f.ty.import));

    let mut code = String::new();

    // Package declaration
    code.push_str(&format!("package {package};\n\n"));

    // Imports
    for import in &imports {
        code.push_str(&format!("import {import};\n"));
    }
    code.push('\n');

    // Class declaration
    code.push_str("@Data\n");
    code.push_str(&format!("public class {name} {{\n\n"));

    // Fields
    for field in fields {
        code.push_str(&format!(
            "    // {}\n",
            describe_metadata(field.property.metadata()).replace(['\r', '\n'], " ")
        ));

        if let Some(serialized_name) = field.serialized_name() {
            code.push_str(&format!(
                "    @SerializedName(\"{}\")\n",
                escape_java_string(serialized_name)
            ));
        }

        code.push_str(&format!("    private {} {};\n\n", field.ty.name, field.name));
    }

    code.push_str("}\n");

    code
}

/// Render metadata as `{key=value, ...}` in stored order.
fn describe_metadata(metadata: &Map<String, Value>) -> String {
    let entries: Vec<String> = metadata
        .iter()
        .map(|(key, value)| format!("{key}={}", describe_value(value)))
        .collect();

    format!("{{{}}}", entries.join(", "))
}

fn describe_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(describe_value).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) => describe_metadata(map),
        other => other.to_string(),
    }
}

fn escape_java_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
