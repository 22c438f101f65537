//! Configuration management for rieki-checker
//!
//! Config stored at: ~/.config/rieki-checker/config.json

use rieki_domain::constants::{DEFAULT_PAYMENT_FEE_PERCENT, DEFAULT_VOLUMETRIC_DIVISOR};
use rieki_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 決済手数料のデフォルト (%)
    #[serde(default = "default_payment_fee_percent")]
    pub payment_fee_percent: f64,

    /// 容積重量の係数のデフォルト
    #[serde(default = "default_volumetric_divisor")]
    pub volumetric_divisor: f64,

    /// shipping.json / categoryFees.json / exchangeRate.json の置き場所
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// 目標利益率 (0.0-1.0, 現状は参考値)
    #[serde(default)]
    pub target_margin: Option<f64>,
}

fn default_payment_fee_percent() -> f64 {
    DEFAULT_PAYMENT_FEE_PERCENT
}

fn default_volumetric_divisor() -> f64 {
    DEFAULT_VOLUMETRIC_DIVISOR
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            payment_fee_percent: default_payment_fee_percent(),
            volumetric_divisor: default_volumetric_divisor(),
            data_dir: None,
            output_format: default_output_format(),
            target_margin: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("rieki-checker");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or defaults when no file exists
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Rieki Checker Configuration")?;
        writeln!(f, "===========================")?;
        writeln!(f)?;
        writeln!(f, "Payment fee:        {:.2}%", self.payment_fee_percent)?;
        writeln!(f, "Volumetric divisor: {}", self.volumetric_divisor)?;
        writeln!(
            f,
            "Data dir:           {}",
            self.data_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in tables)".to_string())
        )?;
        writeln!(f, "Output format:      {}", self.output_format)?;
        writeln!(
            f,
            "Target margin:      {}",
            self.target_margin
                .map(|m| format!("{:.0}%", m * 100.0))
                .unwrap_or_else(|| "(not set)".to_string())
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:        {}", path.display())?;
        }

        Ok(())
    }
}
