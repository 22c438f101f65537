//! CLI definition using clap

use clap::{Parser, Subcommand};
use rieki_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rieki-checker")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Profit and shipping estimation for cross-border resale (JPY cost, USD sale)")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// USD→JPY rate. Overrides the exchangeRate.json lookup.
    #[arg(long, short = 'r', global = true)]
    pub rate: Option<f64>,

    /// Directory with shipping.json / categoryFees.json / exchangeRate.json
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Full profit estimate for a single item
    Estimate {
        /// 売値 (USD, 州税抜き)
        #[arg(long, short = 's')]
        selling_price: f64,

        /// 仕入れ値 (円)
        #[arg(long, short = 'c')]
        cost_price: f64,

        /// 実重量 (g)
        #[arg(long, short = 'w')]
        weight: f64,

        /// 寸法 長さ,幅,高さ (cm)
        #[arg(long, short = 'd', value_delimiter = ',', num_args = 3, value_names = ["L", "W", "H"])]
        dimensions: Vec<f64>,

        /// カテゴリ手数料 (%)
        #[arg(long, required_unless_present = "category")]
        category_fee: Option<f64>,

        /// categoryFees.json のラベル/カテゴリ名で手数料を引く
        #[arg(long, conflicts_with = "category_fee")]
        category: Option<String>,

        /// 決済手数料 (%)。省略時はconfig値
        #[arg(long)]
        payment_fee: Option<f64>,

        /// 容積重量の係数。省略時はconfig値
        #[arg(long)]
        divisor: Option<f64>,
    },

    /// Cheapest shipping method only
    Shipping {
        /// 実重量 (g)
        #[arg(long, short = 'w')]
        weight: f64,

        /// 寸法 長さ,幅,高さ (cm)
        #[arg(long, short = 'd', value_delimiter = ',', num_args = 3, value_names = ["L", "W", "H"])]
        dimensions: Vec<f64>,

        /// 容積重量の係数。省略時はconfig値
        #[arg(long)]
        divisor: Option<f64>,
    },

    /// Quick partial estimate (live helpers, no full fee pipeline)
    Quick {
        /// 売値 (USD, 州税抜き)
        #[arg(long, short = 's')]
        selling_price: f64,

        /// 仕入れ値 (円)
        #[arg(long, short = 'c')]
        cost_price: f64,

        /// 配送料 (円)
        #[arg(long, default_value_t = 0.0)]
        shipping_jpy: f64,

        /// カテゴリ手数料 (%)
        #[arg(long)]
        category_fee: f64,
    },

    /// Batch estimate from a CSV file
    Batch {
        /// Path to CSV input (name, selling_price_usd, cost_price_jpy, ...)
        input: PathBuf,
    },

    /// Scripted FAQ (簡単チャットボット)
    Faq,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default payment fee (%)
        #[arg(long)]
        set_payment_fee: Option<f64>,

        /// Set default volumetric divisor
        #[arg(long)]
        set_divisor: Option<f64>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set data directory for rate tables
        #[arg(long)]
        set_data_dir: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_args_parse() {
        let cli = Cli::try_parse_from([
            "rieki-checker",
            "--rate",
            "150",
            "estimate",
            "-s",
            "100",
            "-c",
            "8000",
            "-w",
            "450",
            "-d",
            "20,15,10",
            "--category-fee",
            "10",
        ])
        .unwrap();
        assert_eq!(cli.rate, Some(150.0));
        match cli.command {
            Commands::Estimate {
                selling_price,
                dimensions,
                category_fee,
                ..
            } => {
                assert_eq!(selling_price, 100.0);
                assert_eq!(dimensions, vec![20.0, 15.0, 10.0]);
                assert_eq!(category_fee, Some(10.0));
            }
            _ => panic!("expected estimate subcommand"),
        }
    }

    #[test]
    fn test_estimate_requires_fee_or_category() {
        let result = Cli::try_parse_from([
            "rieki-checker",
            "estimate",
            "-s",
            "100",
            "-c",
            "8000",
            "-w",
            "450",
            "-d",
            "20,15,10",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_category_conflicts_with_explicit_fee() {
        let result = Cli::try_parse_from([
            "rieki-checker",
            "estimate",
            "-s",
            "100",
            "-c",
            "8000",
            "-w",
            "450",
            "-d",
            "20,15,10",
            "--category-fee",
            "10",
            "--category",
            "カメラ",
        ]);
        assert!(result.is_err());
    }
}
