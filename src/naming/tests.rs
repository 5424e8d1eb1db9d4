//! Identifier normalization tests

use super::*;
use pretty_assertions::assert_eq;

fn format(raw: &str) -> String {
    NameTable::new().format(raw)
}

#[test]
fn test_snake_case_key() {
    assert_eq!(format("user_name"), "UserName");
    assert_eq!(format("created_at"), "CreatedAt");
}

#[test]
fn test_camel_case_key() {
    assert_eq!(format("userName"), "UserName");
    assert_eq!(format("parentAccountOwner"), "ParentAccountOwner");
}

#[test]
fn test_delimiters_segment() {
    assert_eq!(format("first-name"), "FirstName");
    assert_eq!(format("display name"), "DisplayName");
    assert_eq!(format("a.b.c"), "ABC");
}

#[test]
fn test_initialisms() {
    assert_eq!(format("id"), "ID");
    assert_eq!(format("user_id"), "UserID");
    assert_eq!(format("url"), "URL");
    assert_eq!(format("http_status"), "HTTPStatus");
    assert_eq!(format("json"), "JSON");
    // Only whole chunks are canonicalized
    assert_eq!(format("identity"), "Identity");
}

#[test]
fn test_leading_digit_is_spelled() {
    assert_eq!(format("0"), "Zero");
    assert_eq!(format("2fa"), "Twofa");
    assert_eq!(format("9_lives"), "NineLives");
    // Digits that do not lead a chunk stay digits
    assert_eq!(format("utf8"), "UTF8");
    assert_eq!(format("top10"), "Top10");
}

#[test]
fn test_transliteration() {
    assert_eq!(format("café"), "Cafe");
    assert_eq!(format("über_limit"), "UberLimit");

    // CJK keys become a Latin approximation; the exact romanization is the
    // transliteration table's business, the identifier just has to be valid.
    let ident = format("名前");
    assert!(!ident.is_empty());
    assert!(ident.chars().all(|c| c.is_ascii_alphanumeric()));
    assert!(ident.chars().next().unwrap().is_ascii_uppercase());
}

#[test]
fn test_untransliterable_key_falls_back() {
    let mut table = NameTable::new();
    assert_eq!(table.format("***"), "Field");
    assert_eq!(table.format("!!!"), "Field1");
}

#[test]
fn test_idempotence_within_run() {
    let mut table = NameTable::new();
    let first = table.format("user_id");
    let second = table.format("user_id");
    assert_eq!(first, second);
}

#[test]
fn test_memoized_key_keeps_its_spelling_after_collisions() {
    let mut table = NameTable::new();
    assert_eq!(table.format("name"), "Name");
    assert_eq!(table.format("Name"), "Name1");
    // The earlier raw key is not affected
    assert_eq!(table.format("name"), "Name");
    assert_eq!(table.format("Name"), "Name1");
}

#[test]
fn test_collisions_are_pairwise_distinct() {
    let mut table = NameTable::new();
    let a = table.format("name");
    let b = table.format("Name");
    let c = table.format("_name");
    assert_eq!(a, "Name");
    assert_eq!(b, "Name1");
    assert_eq!(c, "Name2");
}

#[test]
fn test_collision_with_existing_suffixed_name() {
    let mut table = NameTable::new();
    // "Name1" is claimed directly first, then by collision
    assert_eq!(table.format("name1"), "Name1");
    assert_eq!(table.format("name"), "Name");
    let third = table.format("Name");
    assert_ne!(third, "Name");
    assert_ne!(third, "Name1");
}

#[test]
fn test_tables_are_isolated_per_run() {
    let mut first = NameTable::new();
    let mut second = NameTable::new();
    assert_eq!(first.format("name"), "Name");
    assert_eq!(first.format("Name"), "Name1");
    // A fresh run starts from a clean slate
    assert_eq!(second.format("Name"), "Name");
}

#[test]
fn test_mixed_case_with_trailing_upper() {
    // No boundary before a trailing upper-case run
    assert_eq!(format("UserID"), "UserID");
    assert_eq!(format("HTTPServer"), "HTTPServer");
}
