use serde::Deserialize;
use serial_test::serial;

use super::parse;

// These tests mutate process-wide environment variables, so they must not
// run concurrently with each other.
fn clear_env() {
    for (key, _) in std::env::vars() {
        if key.starts_with("POLLS_") {
            std::env::remove_var(key);
        }
    }
}

#[derive(Deserialize, Debug, Default)]
struct Config {
    foo: String,
    bar: String,
}

#[test]
#[serial]
fn test_parse() {
    clear_env();

    let tmp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let config_file = tmp_dir.path().join("config.toml");

    std::fs::write(
        &config_file,
        r#"
foo = "foo"
bar = "bar"
"#,
    )
    .expect("failed to write config file");

    let config: Config = parse(config_file.to_str().expect("failed to get config path"))
        .expect("failed to parse config");
    assert_eq!(config.foo, "foo");
    assert_eq!(config.bar, "bar");
}

#[test]
#[serial]
fn test_parse_env() {
    clear_env();

    std::env::set_var("POLLS_FOO", "foo");
    std::env::set_var("POLLS_BAR", "bar");

    let config: Config = parse("").expect("failed to parse config");
    assert_eq!(config.foo, "foo");
    assert_eq!(config.bar, "bar");
}

#[test]
#[serial]
fn test_parse_missing_file() {
    clear_env();

    std::env::set_var("POLLS_FOO", "foo");
    std::env::set_var("POLLS_BAR", "bar");

    let config: Config = parse("does-not-exist").expect("failed to parse config");
    assert_eq!(config.foo, "foo");
    assert_eq!(config.bar, "bar");
}
