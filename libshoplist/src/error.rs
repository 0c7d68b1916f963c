//! Error types for the shopping list core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShopListError>;

#[derive(Error, Debug)]
pub enum ShopListError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ShopListError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ShopListError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}
