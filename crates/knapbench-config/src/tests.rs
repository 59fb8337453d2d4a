//! Tests for harness configuration.

use super::*;

#[test]
fn test_defaults() {
    let config = HarnessConfig::default();
    assert_eq!(config.random_seed, None);
    assert_eq!(config.output_dir, PathBuf::from("."));
    assert_eq!(config.items_file, "items.csv");
    assert_eq!(config.small_sweep_file, "result_compare.csv");
    assert_eq!(config.large_sweep_file, "result_compare2.csv");
    assert_eq!(config.item_csv_limit, 1000);
    assert_eq!(config.preview_limit, 20);
    assert_eq!(config.exhaustive_item_cap, 20);
    assert_eq!(config.small_sweep.sizes.first(), Some(&5));
    assert_eq!(config.small_sweep.sizes.last(), Some(&24));
    assert_eq!(config.large_sweep.max_size(), 32000);
    assert_eq!(config.large_sweep.capacity, 1000.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        random_seed = 42
        output_dir = "results"
        preview_limit = 5

        [small_sweep]
        sizes = [4, 8, 12]
        capacity = 250.5
    "#;

    let config = HarnessConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.output_dir, PathBuf::from("results"));
    assert_eq!(config.preview_limit, 5);
    assert_eq!(config.small_sweep, SweepConfig::new(vec![4, 8, 12], 250.5));
    assert_eq!(config.large_sweep, SweepConfig::large());
    assert_eq!(config.items_file, "items.csv");
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        random_seed: 42
        exhaustive_item_cap: 16
        large_sweep:
          sizes: [10, 20]
    "#;

    let config = HarnessConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.exhaustive_item_cap, 16);
    assert_eq!(config.large_sweep.sizes, vec![10, 20]);
    assert_eq!(config.large_sweep.capacity, DEFAULT_SWEEP_CAPACITY);
}

#[test]
fn test_builder() {
    let config = HarnessConfig::new()
        .with_random_seed(123)
        .with_output_dir("/tmp/knapbench")
        .with_exhaustive_item_cap(12)
        .with_preview_limit(3)
        .with_large_sweep(SweepConfig::new(vec![100], 50.0));

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.output_path("items.csv"), PathBuf::from("/tmp/knapbench/items.csv"));
    assert_eq!(config.exhaustive_item_cap, 12);
    assert_eq!(config.preview_limit, 3);
    assert_eq!(config.large_sweep.max_size(), 100);
}

#[test]
fn test_validate_rejects_empty_sweep() {
    let config = HarnessConfig::new().with_small_sweep(SweepConfig::new(Vec::new(), 10.0));
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("small_sweep")));
}

#[test]
fn test_validate_rejects_negative_capacity() {
    let config = HarnessConfig::new().with_large_sweep(SweepConfig::new(vec![10], -1.0));
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_rejects_zero_cap() {
    let config = HarnessConfig::new().with_exhaustive_item_cap(0);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_rejects_blank_file_name() {
    let mut config = HarnessConfig::new();
    config.items_file = "  ".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_load_missing_file() {
    let err = HarnessConfig::load("does/not/exist.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
    assert_eq!(
        HarnessConfig::load("does/not/exist.toml").unwrap_or_default(),
        HarnessConfig::default()
    );
}

#[test]
fn test_load_picks_format_from_extension() {
    let dir = tempfile::tempdir().unwrap();

    let toml_path = dir.path().join("harness.toml");
    std::fs::write(&toml_path, "random_seed = 9\n").unwrap();
    assert_eq!(HarnessConfig::load(&toml_path).unwrap().random_seed, Some(9));

    let yaml_path = dir.path().join("harness.yml");
    std::fs::write(&yaml_path, "random_seed: 10\n").unwrap();
    assert_eq!(HarnessConfig::load(&yaml_path).unwrap().random_seed, Some(10));
}

#[test]
fn test_load_validates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("harness.toml");
    std::fs::write(&path, "exhaustive_item_cap = 0\n").unwrap();
    assert!(matches!(HarnessConfig::load(&path), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_parse_error() {
    assert!(matches!(
        HarnessConfig::from_toml_str("random_seed = \"x\""),
        Err(ConfigError::Toml(_))
    ));
}
