#![allow(non_snake_case)]

use super::*;
use proptest::prelude::*;
use test_case::test_case;

// to_camel_case tests

#[test]
fn to_camel_case___converts_snake_case() {
    assert_eq!(to_camel_case("first_name"), "firstName");
    assert_eq!(to_camel_case("user_id"), "userId");
    assert_eq!(to_camel_case("created_at_utc"), "createdAtUtc");
}

#[test]
fn to_camel_case___handles_simple_words() {
    assert_eq!(to_camel_case("color"), "color");
    assert_eq!(to_camel_case(""), "");
}

#[test]
fn to_camel_case___handles_consecutive_underscores() {
    assert_eq!(to_camel_case("foo__bar"), "fooBar");
    assert_eq!(to_camel_case("trailing_"), "trailing");
}

#[test]
fn to_camel_case___keeps_digits() {
    assert_eq!(to_camel_case("address_1"), "address1");
    assert_eq!(to_camel_case("line2_text"), "line2Text");
}

#[test]
fn to_camel_case___keeps_existing_capitals() {
    assert_eq!(to_camel_case("firstName"), "firstName");
}

// is_java_identifier tests

#[test_case("User", true ; "pascal case")]
#[test_case("user_account", true ; "underscore")]
#[test_case("$Proxy", true ; "dollar")]
#[test_case("Order2", true ; "trailing digit")]
#[test_case("", false ; "empty")]
#[test_case("2Fast", false ; "leading digit")]
#[test_case("../User", false ; "path traversal")]
#[test_case("User Account", false ; "space")]
#[test_case("class", false ; "reserved word")]
#[test_case("null", false ; "literal")]
fn is_java_identifier___name___validates(name: &str, expected: bool) {
    assert_eq!(is_java_identifier(name), expected);
}

// is_java_package tests

#[test_case("co.nstant.in", true ; "dotted")]
#[test_case("model", true ; "single segment")]
#[test_case("", false ; "empty")]
#[test_case("co..in", false ; "empty segment")]
#[test_case("co.nstant.", false ; "trailing dot")]
#[test_case("com.example.class", false ; "reserved segment")]
#[test_case("com.my-app", false ; "dash")]
fn is_java_package___name___validates(name: &str, expected: bool) {
    assert_eq!(is_java_package(name), expected);
}

#[test]
fn invalid_package_segment___returns_first_offender() {
    assert_eq!(invalid_package_segment("com.my-app.2x"), Some("my-app"));
    assert_eq!(invalid_package_segment("com.example"), None);
}

proptest! {
    /// Property: every underscore is removed and the next letter upper-cased
    #[test]
    fn proptest_to_camel_case_capitalizes_after_underscores(
        head in "[a-z][a-z0-9]{0,8}",
        tail in prop::collection::vec("[a-z][a-z0-9]{0,8}", 1..5)
    ) {
        let name = std::iter::once(head.clone())
            .chain(tail.iter().cloned())
            .collect::<Vec<_>>()
            .join("_");

        let camel = to_camel_case(&name);

        let expected: String = std::iter::once(head)
            .chain(tail.iter().map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }))
            .collect();
        prop_assert_eq!(&camel, &expected);
        prop_assert!(!camel.contains('_'));
        prop_assert!(camel.starts_with(|c: char| c.is_ascii_lowercase()));
        prop_assert_ne!(camel, name);
    }

    /// Property: names without underscores are left alone
    #[test]
    fn proptest_to_camel_case_is_identity_without_underscores(name in "[a-zA-Z0-9]{0,24}") {
        prop_assert_eq!(to_camel_case(&name), name);
    }

    /// Property: conversion is deterministic
    #[test]
    fn proptest_to_camel_case_is_deterministic(name in "[a-z0-9_]{0,24}") {
        prop_assert_eq!(to_camel_case(&name), to_camel_case(&name));
    }
}
