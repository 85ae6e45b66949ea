use anyhow::Result;
use std::fs;
use tempfile::TempDir;

use storyscope::config::{Config, PointBand};
use storyscope::estimation::{Estimator, Story};
use storyscope::EstimateError;

#[test]
fn test_config_default() {
    let config = Config::default();

    // Server defaults
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8001);
    assert!(!config.server.cors_enabled);

    // Analyzer defaults
    assert_eq!(config.analyzer.model, "rule-based-en");
    assert_eq!(config.analyzer.max_text_chars, 1_000_000);
    assert!(config.analyzer.gazetteer_path.is_none());
    assert!(!config.analyzer.entity_terms.is_empty());

    // Keyword tables
    assert!(config.keywords.uncertainty.contains(&"tbd".to_string()));
    assert!(config.keywords.uncertainty.contains(&"to be determined".to_string()));
    assert!(config.keywords.technical.contains(&"kubernetes".to_string()));

    // Threshold table
    let thresholds: Vec<f64> = config.points.bands.iter().map(|b| b.max_complexity).collect();
    let points: Vec<u32> = config.points.bands.iter().map(|b| b.points).collect();
    assert_eq!(thresholds, vec![10.0, 20.0, 35.0, 50.0, 65.0, 80.0, 100.0]);
    assert_eq!(points, vec![1, 2, 3, 5, 8, 13, 21]);
}

#[test]
fn test_config_serialization() -> Result<()> {
    let config = Config::default();

    let toml_str = toml::to_string_pretty(&config)?;
    assert!(toml_str.contains("[server]"));
    assert!(toml_str.contains("[analyzer]"));
    assert!(toml_str.contains("[keywords]"));
    assert!(toml_str.contains("[[points.bands]]"));

    let deserialized: Config = toml::from_str(&toml_str)?;
    assert_eq!(config.server.port, deserialized.server.port);
    assert_eq!(config.keywords.technical, deserialized.keywords.technical);
    assert_eq!(config.points.bands, deserialized.points.bands);

    Ok(())
}

#[test]
fn test_config_save_load_roundtrip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.server.port = 9100;
    config.analyzer.model = "custom-en".to_string();
    config.keywords.technical.push("graphql".to_string());

    config.save_to(&config_path)?;
    assert!(config_path.exists());

    let loaded = Config::load_from(&config_path)?;
    assert_eq!(loaded.server.port, 9100);
    assert_eq!(loaded.analyzer.model, "custom-en");
    assert!(loaded.keywords.technical.contains(&"graphql".to_string()));

    Ok(())
}

#[test]
fn test_config_load_rejects_bad_bands() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
[[points.bands]]
max_complexity = 50.0
points = 5

[[points.bands]]
max_complexity = 20.0
points = 2
"#,
    )?;

    let err = Config::load_from(&config_path).unwrap_err();
    assert!(format!("{:#}", err).contains("strictly ascending"));

    Ok(())
}

#[test]
fn test_config_load_invalid_toml() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[server\nport = ")?;

    let err = Config::load_from(&config_path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));

    Ok(())
}

#[test]
fn test_custom_tables_change_scoring() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
[keywords]
uncertainty = ["hmm"]
technical = ["graphql"]

[[points.bands]]
max_complexity = 30.0
points = 1

[[points.bands]]
max_complexity = 100.0
points = 8
"#,
    )?;

    let config = Config::load_from(&config_path)?;
    let estimator = Estimator::from_config(&config)?;

    let result = estimator.estimate(&Story::new("hmm graphql", "", Vec::new()))?;
    assert_eq!(result.analysis.uncertainty_factor, 1);
    assert_eq!(result.analysis.technical_factor, 1);
    // 20 * log2(3) + 6 + 4 + 1
    assert_eq!(result.story_points, 8);

    let result = estimator.estimate(&Story::new("maybe", "", Vec::new()))?;
    assert_eq!(result.analysis.uncertainty_factor, 0);
    assert_eq!(result.story_points, 1);

    Ok(())
}

#[test]
fn test_unreadable_gazetteer_fails_initialization() {
    let mut config = Config::default();
    config.analyzer.gazetteer_path = Some("/nonexistent/storyscope/entities.txt".into());

    let err = Estimator::from_config(&config).unwrap_err();
    assert!(matches!(err, EstimateError::ModelInitialization(_)));
    assert!(err.to_string().starts_with("failed to initialize text analyzer"));
}
