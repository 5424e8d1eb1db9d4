//! Emission tests

use crate::config::Config;
use crate::schema::build;
use crate::source::parse_str;
use crate::types::CommentMode;
use pretty_assertions::assert_eq;

fn generate_with(input: &str, config: &Config) -> String {
    let doc = parse_str(input).unwrap();
    let mut tree = build(&doc, &config.root_name).unwrap();
    super::render(&mut tree, config)
}

fn generate(input: &str) -> String {
    generate_with(input, &Config::default())
}

#[test]
fn test_flat_simple_struct() {
    let out = generate(r#"{"id": 1, "name": "x"}"#);
    assert_eq!(
        out,
        "type AutoGenerated struct {\n\
         \tID int `json:\"id\"`\n\
         \tName string `json:\"name\"`\n\
         }\n"
    );
}

#[test]
fn test_flat_one_declaration_per_record() {
    let out = generate(r#"{"items": [{"id": 1}, {"id": 2, "name": "x"}]}"#);
    assert_eq!(
        out,
        "type AutoGenerated struct {\n\
         \tItems []Items `json:\"items\"`\n\
         }\n\
         \n\
         type Items struct {\n\
         \tID int `json:\"id\"`\n\
         \tName string `json:\"name\"`\n\
         }\n"
    );
}

#[test]
fn test_nested_mode_inlines_structs() {
    let config = Config {
        nested: true,
        ..Config::default()
    };
    let out = generate_with(r#"{"items": [{"id": 1}]}"#, &config);
    assert_eq!(
        out,
        "type AutoGenerated struct {\n\
         \tItems []struct {\n\
         \t\tID int `json:\"id\"`\n\
         \t} `json:\"items\"`\n\
         }\n"
    );
}

#[test]
fn test_nested_empty_object_renders_empty_struct() {
    let config = Config {
        nested: true,
        ..Config::default()
    };
    let out = generate_with(r#"{"meta": {}}"#, &config);
    assert_eq!(
        out,
        "type AutoGenerated struct {\n\
         \tMeta struct{} `json:\"meta\"`\n\
         }\n"
    );
}

#[test]
fn test_pointer_flag_applies_to_object_types_only() {
    let config = Config {
        pointers: true,
        ..Config::default()
    };
    let out = generate_with(r#"{"user": {"id": 1}, "tags": ["x"], "n": 1}"#, &config);
    assert_eq!(
        out,
        "type AutoGenerated struct {\n\
         \tUser *User `json:\"user\"`\n\
         \tTags []string `json:\"tags\"`\n\
         \tN int `json:\"n\"`\n\
         }\n\
         \n\
         type User struct {\n\
         \tID int `json:\"id\"`\n\
         }\n"
    );
}

#[test]
fn test_array_of_object_pointer_type() {
    let config = Config {
        pointers: true,
        ..Config::default()
    };
    let out = generate_with(r#"{"items": [{"id": 1}]}"#, &config);
    assert!(out.contains("Items []*Items `json:\"items\"`"));
}

#[test]
fn test_matrix_types() {
    let out = generate(r#"{"grid": [[1, 2]], "cells": [[{"x": 1}]]}"#);
    assert!(out.contains("Grid [][]int `json:\"grid\"`"));
    assert!(out.contains("Cells [][]Cells `json:\"cells\"`"));
    assert!(out.contains("type Cells struct {"));
}

#[test]
fn test_multiple_tags() {
    let config = Config {
        tags: vec!["json".to_string(), "yaml".to_string()],
        ..Config::default()
    };
    let out = generate_with(r#"{"user_name": "x"}"#, &config);
    assert!(out.contains("UserName string `json:\"user_name\" yaml:\"user_name\"`"));
}

#[test]
fn test_line_comments() {
    let config = Config {
        comments: CommentMode::Line,
        ..Config::default()
    };
    let out = generate_with("{\n  // the user id\n  \"id\": 1\n}", &config);
    assert_eq!(
        out,
        "type AutoGenerated struct {\n\
         \t// the user id\n\
         \tID int `json:\"id\"`\n\
         }\n"
    );
}

#[test]
fn test_trailing_comments() {
    let config = Config {
        comments: CommentMode::Trailing,
        ..Config::default()
    };
    let out = generate_with("{\n  \"id\": 1 // the user id\n}", &config);
    assert_eq!(
        out,
        "type AutoGenerated struct {\n\
         \tID int `json:\"id\"` // the user id\n\
         }\n"
    );
}

#[test]
fn test_comments_off_by_default() {
    let out = generate("{\n  \"id\": 1 // the user id\n}");
    assert!(!out.contains("user id"));
}

#[test]
fn test_accessors_flat() {
    let config = Config {
        accessors: true,
        ..Config::default()
    };
    let out = generate_with(r#"{"id": 1, "items": [{"name": "x"}]}"#, &config);
    assert!(out.contains(
        "\nfunc (n *AutoGenerated) GetField(fieldName string) interface{} {\n\
         \tswitch fieldName {\n\
         \tcase \"ID\":\n\
         \t\treturn n.ID\n\
         \tcase \"Items\":\n\
         \t\treturn n.Items\n\
         \tdefault:\n\
         \t\treturn nil\n\
         \t}\n\
         }\n"
    ));
    // Every flat record gets an accessor
    assert!(out.contains("func (n *Items) GetField"));
}

#[test]
fn test_accessors_nested_root_only() {
    let config = Config {
        accessors: true,
        nested: true,
        ..Config::default()
    };
    let out = generate_with(r#"{"items": [{"name": "x"}]}"#, &config);
    assert!(out.contains("func (n *AutoGenerated) GetField"));
    assert!(!out.contains("func (n *Items) GetField"));
}

#[test]
fn test_custom_root_name() {
    let config = Config {
        root_name: "APIResponse".to_string(),
        ..Config::default()
    };
    let out = generate_with(r#"{"id": 1}"#, &config);
    assert!(out.starts_with("type APIResponse struct {"));
}

#[test]
fn test_sibling_identifier_collision_gets_suffix() {
    let out = generate(r#"{"Name": 1, "name": "x"}"#);
    assert_eq!(
        out,
        "type AutoGenerated struct {\n\
         \tName int `json:\"Name\"`\n\
         \tName1 string `json:\"name\"`\n\
         }\n"
    );
}

#[test]
fn test_recurring_raw_key_formats_identically() {
    let out = generate(r#"{"user": {"id": 1}, "owner": {"id": 2}}"#);
    // Both nested records spell the shared raw key the same way
    let count = out.matches("ID int `json:\"id\"`").count();
    assert_eq!(count, 2);
}
