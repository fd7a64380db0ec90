//! Schema model reader.
//!
//! Turns a Propel-style schema document into an immutable, ordered model:
//!
//! ```text
//! propel:                        <- entity container
//!   _attributes: { ... }         <- schema metadata (skipped)
//!   user:                        <- entity
//!     _attributes: { phpName: User }
//!     first_name: { type: VARCHAR, size: 255 }
//!     user_id: { type: BIGINT }
//! ```
//!
//! The raw nested mappings only exist while parsing. Everything past
//! [`Schema::parse`] works with [`Schema`], [`Entity`] and [`Property`].
//! Unknown keys at any level are kept, never rejected. Definitions that are
//! not mappings are kept too and reported when the entity is generated.

use crate::error::{SchemaReadError, SchemaResult};
use crate::filter::is_generatable;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Root key holding the entity definitions
pub const ENTITY_CONTAINER: &str = "propel";

/// Entity-level metadata entry carrying the output type name
pub const ATTRIBUTES_KEY: &str = "_attributes";

/// Key inside `_attributes` naming the generated type
pub const OUTPUT_TYPE_NAME_KEY: &str = "phpName";

/// Property metadata key holding the logical column type
pub const TYPE_KEY: &str = "type";

/// Document syntax of a schema file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaFormat {
    #[default]
    Yaml,
    Json,
    Toml,
}

impl SchemaFormat {
    /// Pick a format from the file extension. Anything unrecognised is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => SchemaFormat::Json,
            Some("toml") => SchemaFormat::Toml,
            _ => SchemaFormat::Yaml,
        }
    }
}

#[derive(Deserialize)]
struct RawSchema {
    propel: Option<IndexMap<String, Value>>,
}

/// The whole schema: entities in document order.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    entities: IndexMap<String, Entity>,
}

impl Schema {
    /// Read and parse a schema file. The format follows the file extension.
    pub fn load(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SchemaReadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, SchemaFormat::from_path(path))
    }

    /// Parse schema text in the given format.
    pub fn parse(content: &str, format: SchemaFormat) -> SchemaResult<Self> {
        let raw: RawSchema = match format {
            SchemaFormat::Yaml => serde_yaml::from_str(content)?,
            SchemaFormat::Json => serde_json::from_str(content)?,
            SchemaFormat::Toml => toml::from_str(content)?,
        };

        let container = raw.propel.ok_or(SchemaReadError::MissingContainer {
            key: ENTITY_CONTAINER,
        })?;

        let mut entities = IndexMap::with_capacity(container.len());
        for (name, body) in container {
            let entity = Entity::from_raw(name.clone(), body);
            entities.insert(name, entity);
        }

        Ok(Schema { entities })
    }

    /// All entity names, metadata entries included, in document order.
    pub fn entity_names(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }

    /// All entities, metadata entries included, in document order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Entities that produce a source file.
    pub fn generatable_entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities().filter(|entity| entity.is_generatable())
    }

    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// One entity definition.
#[derive(Debug, Clone)]
pub struct Entity {
    name: String,
    metadata: IndexMap<String, Value>,
    properties: Vec<Property>,
    non_mapping: Option<Value>,
}

impl Entity {
    fn from_raw(name: String, body: Value) -> Self {
        let generatable = is_generatable(&name);
        let mut entity = Entity {
            name,
            metadata: IndexMap::new(),
            properties: Vec::new(),
            non_mapping: None,
        };

        let entries = match body {
            Value::Object(entries) => entries,
            Value::Null => return entity,
            other => {
                entity.non_mapping = Some(other);
                return entity;
            }
        };

        for (key, value) in entries {
            // Metadata entities are opaque, so their sub-keys are never structured
            if !generatable || !is_generatable(&key) {
                entity.metadata.insert(key, value);
                continue;
            }

            entity.properties.push(Property::from_raw(key, value));
        }

        entity
    }

    /// The entity's key in the schema
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_generatable(&self) -> bool {
        is_generatable(&self.name)
    }

    /// Metadata entries (leading underscore), `_attributes` included
    pub fn metadata(&self) -> &IndexMap<String, Value> {
        &self.metadata
    }

    /// The `_attributes` mapping, if present and a mapping
    pub fn attributes(&self) -> Option<&Map<String, Value>> {
        self.metadata.get(ATTRIBUTES_KEY).and_then(Value::as_object)
    }

    /// The raw `_attributes.phpName` value when it is a string.
    ///
    /// `None` covers both a missing key and a non-string value; callers that
    /// need to tell the two apart look at [`Entity::attributes`].
    pub fn output_type_name(&self) -> Option<&str> {
        self.attributes()?
            .get(OUTPUT_TYPE_NAME_KEY)
            .and_then(Value::as_str)
    }

    /// Real properties in document order
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.name == name)
    }

    /// The entity body when it is a scalar or sequence instead of a mapping
    pub fn non_mapping(&self) -> Option<&Value> {
        self.non_mapping.as_ref()
    }
}

/// One column definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    name: String,
    metadata: Map<String, Value>,
    non_mapping: Option<Value>,
}

impl Property {
    fn from_raw(name: String, value: Value) -> Self {
        let (metadata, non_mapping) = match value {
            Value::Object(map) => (map, None),
            Value::Null => (Map::new(), None),
            other => (Map::new(), Some(other)),
        };

        Property {
            name,
            metadata,
            non_mapping,
        }
    }

    /// The property's key in the schema (lower snake case)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All metadata in document order
    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    /// The declared `type` value, whatever its shape
    pub fn raw_type(&self) -> Option<&Value> {
        self.metadata.get(TYPE_KEY)
    }

    /// The definition when it is a scalar or sequence instead of a mapping
    pub fn non_mapping(&self) -> Option<&Value> {
        self.non_mapping.as_ref()
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
