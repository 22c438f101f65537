//! Error types for rieki-checker

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// 為替レート未取得。レートなしでは利益計算は一切行わない。
    #[error("USD→JPY exchange rate is missing or zero")]
    MissingRate,

    /// 全配送方法が対象外または料金表が空
    #[error("No shipping method available for this package")]
    NoShippingRoute,

    #[error("Data file error: {0}")]
    DataFile(String),

    #[error("CSV loader error: {0}")]
    CsvLoader(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

pub type Result<T> = std::result::Result<T, Error>;
