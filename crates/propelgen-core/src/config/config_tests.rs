#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

fn config(package: &str, output: &str) -> GeneratorConfig {
    GeneratorConfig::new("schema.yml", package, output)
}

#[test]
fn GeneratorConfig___new___exposes_settings() {
    let config = GeneratorConfig::new("schema.yml", "co.nstant.in", "/tmp/out");

    assert_eq!(config.schema_path(), Path::new("schema.yml"));
    assert_eq!(config.package_name(), "co.nstant.in");
    assert_eq!(config.output_dir(), Path::new("/tmp/out"));
}

#[test]
fn GeneratorConfig___validate___accepts_valid_config() {
    assert_eq!(config("co.nstant.in", "/tmp/out").validate(), Ok(()));
}

#[test]
fn GeneratorConfig___validate___rejects_empty_package() {
    assert_eq!(
        config("", "/tmp/out").validate(),
        Err(ConfigError::EmptyPackageName)
    );
}

#[test_case("co..in", "" ; "empty segment")]
#[test_case("com.my-app", "my-app" ; "dash")]
#[test_case("com.example.class", "class" ; "reserved word")]
#[test_case("1com.example", "1com" ; "leading digit")]
fn GeneratorConfig___validate___rejects_invalid_package(package: &str, segment: &str) {
    assert_eq!(
        config(package, "/tmp/out").validate(),
        Err(ConfigError::InvalidPackageName {
            package: package.to_string(),
            segment: segment.to_string(),
        })
    );
}

#[test]
fn GeneratorConfig___validate___rejects_empty_output_dir() {
    assert_eq!(
        config("com.example", "").validate(),
        Err(ConfigError::EmptyOutputDir)
    );
}
