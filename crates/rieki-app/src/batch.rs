//! CSV batch input for bulk estimates
//!
//! 一括見積り用の入力だけを読む。結果の保存はしない。
//!
//! Expected columns (header required):
//! name, selling_price_usd, cost_price_jpy, weight_g, length_cm, width_cm,
//! height_cm, category_fee_percent

use rieki_types::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// 一括見積りの1行
#[derive(Debug, Clone, Deserialize)]
pub struct BatchItem {
    /// 商品名 (表示用)
    #[serde(default)]
    pub name: Option<String>,
    pub selling_price_usd: f64,
    pub cost_price_jpy: f64,
    pub weight_g: f64,
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
    pub category_fee_percent: f64,
}

/// Load batch items from a CSV file
pub fn load_items_from_csv(path: &Path) -> Result<Vec<BatchItem>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| Error::CsvLoader(format!("{}: {}", path.display(), e)))?;

    let mut items = Vec::new();
    for (index, record) in reader.deserialize().enumerate() {
        // 行番号はヘッダ分を足して1始まりで報告する
        let item: BatchItem =
            record.map_err(|e| Error::CsvLoader(format!("row {}: {}", index + 2, e)))?;
        items.push(item);
    }
    Ok(items)
}
