#![allow(non_snake_case)]

use super::*;
use crate::schema::SchemaFormat;
use tempfile::TempDir;

const SCHEMA: &str = r#"
propel:
  _attributes: { package: lib.model }
  user:
    _attributes: { phpName: User }
    first_name: { type: VARCHAR }
    user_id: { type: BIGINT }
  _schema_info:
    _attributes: { phpName: SchemaInfo }
    version: { type: INTEGER }
  widget:
    _attributes: { phpName: Widget }
    color: { type: ENUM }
  orphan:
    label: { type: VARCHAR }
  order:
    _attributes: { phpName: Order }
    total: { type: DECIMAL }
"#;

fn schema() -> Schema {
    Schema::parse(SCHEMA, SchemaFormat::Yaml).unwrap()
}

fn run_in(dir: &TempDir) -> GenerationReport {
    let config = GeneratorConfig::new("schema.yml", "co.nstant.in", dir.path());
    Generator::new(&config).unwrap().run(&schema()).unwrap()
}

#[test]
fn Generator___new___rejects_invalid_config() {
    let config = GeneratorConfig::new("schema.yml", "not a package", "/tmp/out");

    assert!(Generator::new(&config).is_err());
}

#[test]
fn Generator___run___writes_one_file_per_valid_entity() {
    let dir = tempfile::tempdir().unwrap();

    let report = run_in(&dir);

    assert_eq!(
        report.written,
        vec![
            dir.path().join("User.java"),
            dir.path().join("Widget.java"),
            dir.path().join("Order.java"),
        ]
    );
}

#[test]
fn Generator___run___skips_metadata_entities() {
    let dir = tempfile::tempdir().unwrap();

    let report = run_in(&dir);

    assert_eq!(report.skipped_entities, ["_attributes", "_schema_info"]);
    assert!(!dir.path().join("SchemaInfo.java").exists());
}

#[test]
fn Generator___run___reports_unknown_type_and_continues() {
    let dir = tempfile::tempdir().unwrap();

    let report = run_in(&dir);

    assert_eq!(
        report.field_errors,
        vec![FieldError::UnknownType {
            entity: "widget".into(),
            property: "color".into(),
            logical_type: "ENUM".into(),
        }]
    );
    let widget = fs::read_to_string(dir.path().join("Widget.java")).unwrap();
    assert!(!widget.contains("color"));
    assert!(dir.path().join("Order.java").exists());
}

#[test]
fn Generator___run___entity_without_attributes___is_reported() {
    let dir = tempfile::tempdir().unwrap();

    let report = run_in(&dir);

    assert_eq!(report.entity_errors.len(), 1);
    assert_eq!(report.entity_errors[0].entity(), "orphan");
    assert_eq!(report.error_count(), 2);
    assert!(report.has_errors());
}

#[test]
fn Generator___run___write_failure___continues_with_next_entity() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the file should go makes the write fail
    fs::create_dir(dir.path().join("User.java")).unwrap();

    let report = run_in(&dir);

    assert!(
        report
            .entity_errors
            .iter()
            .any(|err| matches!(err, EmitError::Write { entity, .. } if entity == "user"))
    );
    assert!(dir.path().join("Widget.java").is_file());
    assert!(dir.path().join("Order.java").is_file());
}

#[test]
fn Generator___run___write_failure___reports_no_field_errors_for_that_entity() {
    let yaml = r#"
propel:
  user:
    _attributes: { phpName: User }
    nickname: { type: NOPE }
  widget:
    _attributes: { phpName: Widget }
    label: { type: NOPE }
"#;
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("User.java")).unwrap();
    let config = GeneratorConfig::new("schema.yml", "co.nstant.in", dir.path());
    let schema = Schema::parse(yaml, SchemaFormat::Yaml).unwrap();

    let report = Generator::new(&config).unwrap().run(&schema).unwrap();

    assert_eq!(report.written, vec![dir.path().join("Widget.java")]);
    let entities: Vec<_> = report.field_errors.iter().map(FieldError::entity).collect();
    assert_eq!(entities, ["widget"]);
    assert_eq!(report.entity_errors.len(), 1);
}

#[test]
fn Generator___run___scalar_property___other_entities_still_generated() {
    let yaml = r#"
propel:
  user:
    _attributes: { phpName: User }
    name: VARCHAR
    id: { type: INTEGER }
  widget:
    _attributes: { phpName: Widget }
    color: { type: VARCHAR }
"#;
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::new("schema.yml", "co.nstant.in", dir.path());
    let schema = Schema::parse(yaml, SchemaFormat::Yaml).unwrap();

    let report = Generator::new(&config).unwrap().run(&schema).unwrap();

    assert!(dir.path().join("Widget.java").is_file());
    let user = fs::read_to_string(dir.path().join("User.java")).unwrap();
    assert!(user.contains("private Integer id;"));
    assert!(!user.contains(" name;"));
    assert_eq!(
        report.field_errors,
        vec![FieldError::NotAMapping {
            entity: "user".into(),
            property: "name".into(),
            found: "a string",
        }]
    );
    assert!(report.entity_errors.is_empty());
}

#[test]
fn Generator___run___scalar_entity___is_reported_and_others_generated() {
    let yaml = r#"
propel:
  _version: 2
  user: 5
  widget:
    _attributes: { phpName: Widget }
    color: { type: VARCHAR }
"#;
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::new("schema.yml", "co.nstant.in", dir.path());
    let schema = Schema::parse(yaml, SchemaFormat::Yaml).unwrap();

    let report = Generator::new(&config).unwrap().run(&schema).unwrap();

    assert_eq!(report.written, vec![dir.path().join("Widget.java")]);
    assert_eq!(report.skipped_entities, ["_version"]);
    assert!(matches!(
        report.entity_errors.as_slice(),
        [EmitError::NotAMapping { entity, .. }] if entity == "user"
    ));
}

#[test]
fn Generator___run___creates_missing_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("src/main/java");
    let config = GeneratorConfig::new("schema.yml", "co.nstant.in", &nested);

    let report = Generator::new(&config).unwrap().run(&schema()).unwrap();

    assert_eq!(report.written.len(), 3);
    assert!(nested.join("User.java").is_file());
}

#[test]
fn Generator___run___output_path_is_a_file___returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("taken");
    fs::write(&file, "").unwrap();
    let config = GeneratorConfig::new("schema.yml", "co.nstant.in", &file);

    let err = Generator::new(&config).unwrap().run(&schema()).unwrap_err();

    assert_eq!(err.path, file);
}

#[test]
fn Generator___run___twice___produces_identical_files() {
    let dir = tempfile::tempdir().unwrap();

    let first = run_in(&dir);
    let before: Vec<_> = first
        .written
        .iter()
        .map(|path| fs::read(path).unwrap())
        .collect();
    let second = run_in(&dir);
    let after: Vec<_> = second
        .written
        .iter()
        .map(|path| fs::read(path).unwrap())
        .collect();

    assert_eq!(first.written, second.written);
    assert_eq!(before, after);
}

#[test]
fn Generator___run___duplicate_output_type___last_entity_wins() {
    let yaml = r#"
propel:
  account:
    _attributes: { phpName: Account }
    old_name: { type: VARCHAR }
  account_v2:
    _attributes: { phpName: Account }
    new_name: { type: VARCHAR }
"#;
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::new("schema.yml", "co.nstant.in", dir.path());
    let schema = Schema::parse(yaml, SchemaFormat::Yaml).unwrap();

    let report = Generator::new(&config).unwrap().run(&schema).unwrap();

    assert_eq!(report.written.len(), 2);
    let account = fs::read_to_string(dir.path().join("Account.java")).unwrap();
    assert!(account.contains("newName"));
    assert!(!account.contains("oldName"));
}

#[test]
fn GenerationReport___default___has_no_errors() {
    let report = GenerationReport::default();

    assert_eq!(report.error_count(), 0);
    assert!(!report.has_errors());
}
