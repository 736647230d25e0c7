use super::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

const INSERT_QUERY: &str = r#"{
    "name": "insertBooks",
    "text": "insert into books (title, year) values :books returning id in :ids",
    "params": [
        {
            "name": "books",
            "required": true,
            "selection": {
                "type": "object_array",
                "keys": [
                    { "name": "title", "required": true },
                    { "name": "year", "required": false }
                ]
            },
            "location": { "a": 39, "b": 44 }
        },
        {
            "name": "ids",
            "selection": { "type": "scalar_array" },
            "location": { "a": 62, "b": 65 }
        }
    ]
}"#;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

fn parse(json_text: &str) -> Value {
    match serde_json::from_str(json_text) {
        Ok(v) => v,
        Err(e) => panic!("command output should be JSON: {e}"),
    }
}

#[test]
fn test_parse_options_defaults() {
    let Ok(opts) = parse_options(&args(&["query.json"])) else {
        panic!("plain positional args should parse");
    };
    assert_eq!(opts.dialect, Dialect::default());
    assert_eq!(opts.positional, vec!["query.json"]);
}

#[test]
fn test_parse_options_dialect_and_prefix() {
    let Ok(opts) = parse_options(&args(&["--dialect=at", "--prefix=p", "q.json", "v.json"])) else {
        panic!("dialect options should parse");
    };
    assert_eq!(
        opts.dialect,
        Dialect::At {
            prefix: "p".to_owned()
        }
    );
    assert_eq!(opts.positional.len(), 2);
}

#[test]
fn test_parse_options_errors() {
    assert!(matches!(
        parse_options(&args(&["--dialect=backtick"])),
        Err(CommandError::UnknownDialect(name)) if name == "backtick"
    ));
    assert!(matches!(
        parse_options(&args(&["-v"])),
        Err(CommandError::UnknownOption(_))
    ));
}

#[test]
fn test_shape_json() {
    let out = match shape_json(INSERT_QUERY, Dialect::default()) {
        Ok(out) => out,
        Err(e) => panic!("shape command failed: {e}"),
    };
    let out = parse(&out);
    assert_eq!(
        out["query"],
        json!("insert into books (title, year) values (:param1, :param2) returning id in (:param3)")
    );
    assert_eq!(out["mapping"][0]["type"], json!("pick_spread"));
    assert_eq!(out["mapping"][1]["type"], json!("spread"));
    assert_eq!(out["bindings"], json!([]));
}

#[test]
fn test_bind_json() {
    let values = r#"{ "books": [{ "title": "Dune", "year": 1965 }], "ids": [7] }"#;
    let out = match bind_json(INSERT_QUERY, values, Dialect::Dollar) {
        Ok(out) => out,
        Err(e) => panic!("bind command failed: {e}"),
    };
    let out = parse(&out);
    assert_eq!(
        out["query"],
        json!("insert into books (title, year) values ($1, $2) returning id in ($3)")
    );
    assert_eq!(
        out["bindings"],
        json!([
            { "name": "1", "value": { "stringValue": "Dune" } },
            { "name": "2", "value": { "longValue": 1965 } },
            { "name": "3", "value": { "longValue": 7 } }
        ])
    );
    assert_eq!(out["mapping"], json!([]));
}

#[test]
fn test_bind_json_missing_required() {
    let err = bind_json(INSERT_QUERY, r#"{ "ids": [] }"#, Dialect::default());
    assert!(matches!(
        err,
        Err(CommandError::Interp(InterpError::MissingRequiredParameter { .. }))
    ));
}

#[test]
fn test_invalid_json_inputs() {
    assert!(matches!(
        shape_json("{", Dialect::default()),
        Err(CommandError::Query(_))
    ));
    assert!(matches!(
        bind_json(INSERT_QUERY, "[", Dialect::default()),
        Err(CommandError::Values(_))
    ));
    assert!(matches!(
        bind_json(INSERT_QUERY, "[1]", Dialect::default()),
        Err(CommandError::Interp(InterpError::ValuesNotObject))
    ));
}

#[test]
fn test_unknown_selection_is_query_error() {
    let query = r#"{
        "text": "select :x",
        "params": [
            { "name": "x", "selection": { "type": "tuple" }, "location": { "a": 7, "b": 8 } }
        ]
    }"#;
    assert!(matches!(
        shape_json(query, Dialect::default()),
        Err(CommandError::Query(_))
    ));
}
