//! End-to-end generation tests

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_scalar_and_mixed_array() {
    let out = generate(r#"{"a": 1, "b": [1, "x"]}"#).unwrap();
    assert_eq!(
        out,
        "type AutoGenerated struct {\n\
         \tA int `json:\"a\"`\n\
         \tB []interface{} `json:\"b\"`\n\
         }\n"
    );
}

#[test]
fn test_key_union_across_array_occurrences() {
    let out = generate(r#"{"items": [{"id": 1}, {"id": 2, "name": "x"}]}"#).unwrap();
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
fn test_colliding_sibling_keys() {
    let out = generate(r#"{"Name": 1, "name": "x"}"#).unwrap();
    assert!(out.contains("Name int `json:\"Name\"`"));
    assert!(out.contains("Name1 string `json:\"name\"`"));
}

#[test]
fn test_top_level_array() {
    let out = generate(r#"[{"id": 1}, {"id": 2147483648, "tags": ["a"]}]"#).unwrap();
    assert_eq!(
        out,
        "type AutoGenerated struct {\n\
         \tID int64 `json:\"id\"`\n\
         \tTags []string `json:\"tags\"`\n\
         }\n"
    );
}

#[test]
fn test_malformed_document_is_fatal() {
    let err = generate(r#"{"a": "#).unwrap_err();
    assert!(err.is_parse());

    let err = generate("true").unwrap_err();
    assert!(err.is_parse());
}

#[test]
fn test_generator_enforces_json_tag() {
    let generator = Generator::new(Config {
        tags: vec!["yaml".to_string()],
        ..Config::default()
    });
    assert_eq!(
        generator.config().tags,
        vec!["json".to_string(), "yaml".to_string()]
    );
    let out = generator.generate(r#"{"id": 1}"#).unwrap();
    assert!(out.contains("`json:\"id\" yaml:\"id\"`"));
}

#[test]
fn test_schema_dump_has_identifiers() {
    let generator = Generator::default();
    let tree = generator.schema(r#"{"user_id": 1}"#).unwrap();
    let json = tree.to_json();
    assert_eq!(json["ident"], "AutoGenerated");
    assert_eq!(json["children"][0]["ident"], "UserID");
    assert_eq!(json["children"][0]["type"], "int");
}

#[test]
fn test_runs_are_isolated() {
    let generator = Generator::default();
    // Same input twice: the collision table must not leak across runs
    let first = generator.generate(r#"{"Name": 1, "name": 2}"#).unwrap();
    let second = generator.generate(r#"{"Name": 1, "name": 2}"#).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_deeply_mixed_document() {
    let input = r#"
    {
        "id": 1,
        "profile": {"url": "https://example.com", "中文": "x"},
        "history": [
            {"at": 1.5, "ok": true},
            {"at": 2, "note": null}
        ],
        "matrix": [[1, 2], [3]],
        "empty": []
    }
    "#;
    let out = generate(input).unwrap();
    assert!(out.contains("ID int `json:\"id\"`"));
    assert!(out.contains("Profile Profile `json:\"profile\"`"));
    assert!(out.contains("URL string `json:\"url\"`"));
    assert!(out.contains("History []History `json:\"history\"`"));
    assert!(out.contains("At float64 `json:\"at\"`"));
    assert!(out.contains("Ok bool `json:\"ok\"`"));
    assert!(out.contains("Note interface{} `json:\"note\"`"));
    assert!(out.contains("Matrix [][]int `json:\"matrix\"`"));
    assert!(out.contains("Empty []interface{} `json:\"empty\"`"));
}
