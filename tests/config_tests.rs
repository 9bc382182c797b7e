use winavg::config::{generate::generate_starter_config, load_config, Config};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_generated_config_is_valid() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yml");

    let config_content = generate_starter_config();
    fs::write(&config_path, config_content).unwrap();

    let config = load_config(&config_path).expect("Generated config should be valid");

    // The starter file spells out the built-in defaults.
    let defaults = Config::default();
    assert_eq!(config.web.listen, defaults.web.listen);
    assert_eq!(config.window.capacity, defaults.window.capacity);
    assert_eq!(config.sources.fibonacci_count, defaults.sources.fibonacci_count);
    assert_eq!(config.sources.even_limit, defaults.sources.even_limit);
    assert_eq!(config.sources.random_min, defaults.sources.random_min);
    assert_eq!(config.sources.random_max, defaults.sources.random_max);
}

#[test]
fn test_overrides_are_applied() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yml");

    let config_yaml = r#"
web:
  listen: 127.0.0.1:8080
window:
  capacity: 3
sources:
  even_limit: 6
"#;
    fs::write(&config_path, config_yaml).unwrap();

    let config = load_config(&config_path).unwrap();
    assert_eq!(config.web.listen, "127.0.0.1:8080");
    assert_eq!(config.window.capacity, 3);
    assert_eq!(config.sources.even_limit, 6);
    // Untouched sections keep their defaults
    assert_eq!(config.sources.random_count, 10);
}

#[test]
fn test_invalid_random_range_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yml");

    let config_yaml = r#"
sources:
  random_min: 90
  random_max: 10
"#;
    fs::write(&config_path, config_yaml).unwrap();

    let err = load_config(&config_path).unwrap_err();
    assert!(err.to_string().contains("random_min"));
}

#[test]
fn test_malformed_yaml_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yml");

    fs::write(&config_path, "window: [not, a, mapping").unwrap();

    assert!(load_config(&config_path).is_err());
}

#[test]
fn test_missing_file_is_an_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("does-not-exist.yml");

    let err = load_config(&config_path).unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}
