use thiserror::Error;

#[derive(Error, Debug)]
pub enum EchoPulseError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("No replies found")]
    EmptyReplies,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Custom(String),
}

pub type Result<T> = std::result::Result<T, EchoPulseError>;
