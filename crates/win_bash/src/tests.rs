use super::*;
use std::path::Path;

const SCHEMA_TOML: &str = r#"
[[flags]]
title = "verbose"
short = "v"

[[kwargs]]
title = "output"
short = "o"
"#;

const SCHEMA_JSON: &str = r#"{
    "flags": [{ "title": "verbose", "short": "v" }],
    "kwargs": [{ "title": "output", "short": "o" }]
}"#;

fn config_for(schema: &Path, strict: bool) -> Config {
    let mut config = Config::default();
    config.parser.schema = schema.to_path_buf();
    config.parser.strict = strict;
    config
}

#[test]
fn load_toml_and_json_schemas() {
    let dir = tempfile::tempdir().unwrap();

    let toml = dir.path().join("schema.toml");
    std::fs::write(&toml, SCHEMA_TOML).unwrap();

    let json = dir.path().join("schema.JSON");
    std::fs::write(&json, SCHEMA_JSON).unwrap();

    let expected = Schema::new().flag("verbose", "v").kwarg("output", "o");
    assert_eq!(load_schema(&toml).unwrap(), expected);
    assert_eq!(load_schema(&json).unwrap(), expected);
}

#[test]
fn load_missing_schema() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_schema(dir.path().join("nope.toml")).unwrap_err();
    assert!(err.to_string().starts_with("cannot read"));
}

#[test]
fn run_permissive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schema.toml");
    std::fs::write(&path, SCHEMA_TOML).unwrap();

    let config = config_for(&path, false);
    let result = run(&config, &["pos1", "--verbose", "-q", "-o", "out.txt", "pos2"]).unwrap();
    assert_eq!(result.args, vec!["pos1", "pos2"]);
    assert_eq!(result.flags, vec!["verbose"]);
    assert_eq!(result.kwarg("output"), Some("out.txt"));
}

#[test]
fn run_strict() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schema.json");
    std::fs::write(&path, SCHEMA_JSON).unwrap();

    let config = config_for(&path, true);
    let err = run(&config, &["pos1", "-q"]).unwrap_err();
    assert_eq!(err.to_string(), "unknown option: -q");

    let err = run(&config, &["--output"]).unwrap_err();
    assert_eq!(err.to_string(), "a value must follow: output");

    let result = run(&config, &["-v", "-o", "x"]).unwrap();
    assert!(result.has_flag("verbose"));
    assert_eq!(result.kwarg("output"), Some("x"));
}

#[test]
fn config_round_trips_through_example() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("win_bash.toml");

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().starts_with("cannot load config"));

    let example = dir.path().join("win_bash.toml.example");
    assert!(example.is_file());

    std::fs::copy(&example, &path).unwrap();
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.parser.schema, Path::new("schema.toml"));
    assert!(!config.parser.strict);
}

#[test]
fn config_strict_defaults_to_false() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("win_bash.toml");
    std::fs::write(&path, "[parser]\nschema = \"commands.json\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.parser.schema, Path::new("commands.json"));
    assert!(!config.parser.strict);

    std::fs::write(&path, "[parser]\nstrict = true\n").unwrap();
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn tokens_from_utf8() {
    let tokens = tokens_from(vec![OsString::from("-v"), OsString::from("file.txt")]);
    assert_eq!(tokens, vec!["-v", "file.txt"]);
}

#[cfg(unix)]
#[test]
fn tokens_from_invalid_utf8_is_lossy() {
    use std::os::unix::ffi::OsStringExt as _;

    let bad = OsString::from_vec(b"caf\xe9.txt".to_vec());
    let tokens = tokens_from(vec![OsString::from("-o"), bad]);
    assert_eq!(tokens, vec!["-o", "caf\u{FFFD}.txt"]);

    let schema = Schema::new().kwarg("output", "o");
    let result = classify(&schema, true, &tokens).unwrap();
    assert_eq!(result.kwarg("output"), Some("caf\u{FFFD}.txt"));
}
