use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::analysis::Lexicon;
use crate::analysis::SentimentClassifier;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub backtrace: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub enable_cors: bool,
}

pub(crate) fn default_host() -> String {
    "127.0.0.1".to_string()
}

pub(crate) const fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Upper bound on replies considered per request, matching the fetch page size
    #[serde(default = "default_max_replies")]
    pub max_replies: usize,
    /// Replaces the stock positive lexicon when set
    #[serde(default)]
    pub positive_keywords: Option<Vec<String>>,
    /// Replaces the stock negative lexicon when set
    #[serde(default)]
    pub negative_keywords: Option<Vec<String>>,
}

pub(crate) const fn default_max_replies() -> usize {
    100
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_replies: default_max_replies(),
            positive_keywords: None,
            negative_keywords: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default config file path
    pub fn load() -> crate::Result<Self> {
        // Try to load from config.toml first, then fall back to config.example.toml
        if Path::new("config.toml").exists() {
            Self::from_file("config.toml")
        } else if Path::new("config.example.toml").exists() {
            tracing::warn!(
                "Using config.example.toml. Please create config.toml for production use."
            );
            Self::from_file("config.example.toml")
        } else {
            tracing::warn!("No config file found, using built-in defaults");
            Ok(Self::default())
        }
    }

    /// Reject settings that would make every request meaningless
    pub fn validate(&self) -> crate::Result<()> {
        if self.analysis.max_replies == 0 {
            return Err(crate::EchoPulseError::Config(
                "analysis.max_replies must be greater than zero".to_string(),
            ));
        }
        for (name, keywords) in [
            ("positive_keywords", &self.analysis.positive_keywords),
            ("negative_keywords", &self.analysis.negative_keywords),
        ] {
            if let Some(keywords) = keywords {
                if keywords.iter().any(|k| k.trim().is_empty()) {
                    return Err(crate::EchoPulseError::Config(format!(
                        "analysis.{name} must not contain empty keywords"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Build the classifier with the configured lexicons, or the stock ones
    pub fn build_classifier(&self) -> SentimentClassifier {
        let positive = self
            .analysis
            .positive_keywords
            .as_ref()
            .map_or_else(Lexicon::default_positive, |k| Lexicon::new(k.iter()));
        let negative = self
            .analysis
            .negative_keywords
            .as_ref()
            .map_or_else(Lexicon::default_negative, |k| Lexicon::new(k.iter()));
        SentimentClassifier::new(positive, negative)
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Get the per-request reply cap
    pub fn max_replies(&self) -> usize {
        self.analysis.max_replies
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "info".to_string(),
                backtrace: true,
            },
            server: ServerConfig::default(),
            analysis: AnalysisConfig::default(),
        }
    }
}
