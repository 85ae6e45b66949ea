use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::server::ServerConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    #[serde(default)]
    pub keywords: KeywordConfig,
    #[serde(default)]
    pub points: PointsConfig,
}

/// Configuration for the bundled rule-based text analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Name reported by the readiness check
    #[serde(default = "default_model_name")]
    pub model: String,

    /// Texts longer than this many characters are rejected (default: 1,000,000)
    #[serde(default = "default_max_text_chars")]
    pub max_text_chars: usize,

    /// Optional file of extra entity terms, one per line, `#` for comments
    #[serde(default)]
    pub gazetteer_path: Option<PathBuf>,

    /// Entity terms matched case-insensitively
    #[serde(default = "default_entity_terms")]
    pub entity_terms: Vec<String>,
}

fn default_model_name() -> String {
    "rule-based-en".to_string()
}

fn default_max_text_chars() -> usize {
    1_000_000
}

fn default_entity_terms() -> Vec<String> {
    [
        "aws",
        "amazon web services",
        "azure",
        "google cloud",
        "gcp",
        "stripe",
        "paypal",
        "salesforce",
        "github",
        "gitlab",
        "jira",
        "twilio",
        "sendgrid",
        "okta",
        "auth0",
        "firebase",
        "shopify",
        "postgresql",
        "mysql",
        "mongodb",
        "elasticsearch",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            model: default_model_name(),
            max_text_chars: default_max_text_chars(),
            gazetteer_path: None,
            entity_terms: default_entity_terms(),
        }
    }
}

/// Keyword tables matched against lowercased tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordConfig {
    #[serde(default = "default_uncertainty_keywords")]
    pub uncertainty: Vec<String>,
    #[serde(default = "default_technical_keywords")]
    pub technical: Vec<String>,
}

fn default_uncertainty_keywords() -> Vec<String> {
    [
        "maybe",
        "probably",
        "might",
        "unclear",
        "tbd",
        "unknown",
        "possibly",
        "perhaps",
        "not",
        "unsure",
        "investigate",
        // Multi-word entries only match if the analyzer emits them as one token
        "to be decided",
        "to be determined",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_technical_keywords() -> Vec<String> {
    [
        "api",
        "apis",
        "endpoint",
        "database",
        "db",
        "integration",
        "auth",
        "authentication",
        "oauth",
        "jwt",
        "security",
        "encryption",
        "performance",
        "scalability",
        "cache",
        "redis",
        "kafka",
        "queue",
        "infrastructure",
        "deployment",
        "docker",
        "kubernetes",
        "cloud",
        "s3",
        "cdn",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            uncertainty: default_uncertainty_keywords(),
            technical: default_technical_keywords(),
        }
    }
}

/// Complexity-to-points threshold table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsConfig {
    #[serde(default = "default_bands")]
    pub bands: Vec<PointBand>,
}

/// Scores up to and including `max_complexity` map to `points`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointBand {
    pub max_complexity: f64,
    pub points: u32,
}

fn default_bands() -> Vec<PointBand> {
    [
        (10.0, 1),
        (20.0, 2),
        (35.0, 3),
        (50.0, 5),
        (65.0, 8),
        (80.0, 13),
        (100.0, 21),
    ]
    .iter()
    .map(|&(max_complexity, points)| PointBand {
        max_complexity,
        points,
    })
    .collect()
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            bands: default_bands(),
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults if absent
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("storyscope").join("config.toml"))
    }

    /// Reject threshold tables the point mapper cannot use
    pub fn validate(&self) -> Result<()> {
        let bands = &self.points.bands;
        if bands.is_empty() {
            bail!("points.bands must contain at least one band");
        }

        for band in bands {
            if !band.max_complexity.is_finite() {
                bail!("points.bands thresholds must be finite numbers");
            }
            if band.points == 0 {
                bail!("points.bands point values must be positive");
            }
        }

        if bands
            .windows(2)
            .any(|pair| pair[0].max_complexity >= pair[1].max_complexity)
        {
            bail!("points.bands thresholds must be strictly ascending");
        }

        if self.analyzer.max_text_chars == 0 {
            bail!("analyzer.max_text_chars must be greater than zero");
        }

        Ok(())
    }
}
