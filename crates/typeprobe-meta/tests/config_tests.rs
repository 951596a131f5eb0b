use expect_test::expect;
use typeprobe_meta::{ConfigError, ProbeConfig};

#[test]
fn test_defaults() {
    let config = ProbeConfig::default();
    assert_eq!(config.doc_tag, "@var");
    assert_eq!(config.getter_marker, "get");
    assert_eq!(ProbeConfig::from_toml_str("").unwrap(), config);
}

#[test]
fn test_partial_override() {
    let config = ProbeConfig::from_toml_str("doc_tag = \"@type\"").unwrap();
    assert_eq!(config.doc_tag, "@type");
    assert_eq!(config.getter_marker, "get");
}

#[test]
fn test_invalid_tag_rejected() {
    let err = ProbeConfig::from_toml_str("doc_tag = \"@var x\"").unwrap_err();
    expect![[r#"Invalid configuration value for `doc_tag`: must be a single non-empty word"#]]
        .assert_eq(&err.to_string());
}

#[test]
fn test_empty_marker_rejected() {
    let err = ProbeConfig::from_toml_str("getter_marker = \"\"").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { key: "getter_marker", .. }));
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("typeprobe.toml");
    std::fs::write(&path, "getter_marker = \"fetch\"\n").unwrap();
    let config = ProbeConfig::load(&path).unwrap();
    assert_eq!(config.getter_marker, "fetch");
}
