//! Resolved rate/category data tables
//!
//! 料金表・カテゴリ手数料・為替レートの取得は本体の外の仕事。
//! ここでは取得済みのJSONファイルを読むだけで、通信は一切しない。
//! ファイル指定が無いときは組み込みのデフォルト料金表を使う。

use chrono::NaiveDate;
use rieki_domain::model::{ShippingCatalog, ShippingTier};
use rieki_types::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

/// 組み込みのデフォルト料金表 (2024年秋時点の対米レートを元にした概算)
pub static DEFAULT_SHIPPING_CATALOG: LazyLock<ShippingCatalog> = LazyLock::new(|| {
    fn tiers(pairs: &[(f64, f64)]) -> Vec<ShippingTier> {
        pairs
            .iter()
            .map(|&(weight, price)| ShippingTier { weight, price })
            .collect()
    }

    ShippingCatalog {
        // 小型包装物 (航空便)
        small_packet_air: tiers(&[
            (100.0, 660.0),
            (200.0, 840.0),
            (300.0, 1020.0),
            (400.0, 1200.0),
            (500.0, 1380.0),
            (600.0, 1560.0),
            (700.0, 1740.0),
            (800.0, 1920.0),
            (900.0, 2100.0),
            (1000.0, 2280.0),
            (1250.0, 2730.0),
            (1500.0, 3180.0),
            (1750.0, 3630.0),
            (2000.0, 4080.0),
        ]),
        // FedEx (請求重量 = max(実重量, 容積重量))
        fedex: tiers(&[
            (500.0, 8000.0),
            (1000.0, 9500.0),
            (1500.0, 11000.0),
            (2000.0, 12500.0),
            (2500.0, 14000.0),
            (3000.0, 15500.0),
            (4000.0, 18000.0),
            (5000.0, 20500.0),
            (7500.0, 26000.0),
            (10000.0, 31000.0),
        ]),
        // EMS (実重量)
        ems: tiers(&[
            (500.0, 3900.0),
            (600.0, 4180.0),
            (700.0, 4460.0),
            (800.0, 4740.0),
            (900.0, 5020.0),
            (1000.0, 5300.0),
            (1250.0, 6000.0),
            (1500.0, 6700.0),
            (1750.0, 7400.0),
            (2000.0, 8100.0),
            (2500.0, 9100.0),
            (3000.0, 10100.0),
            (4000.0, 12100.0),
            (5000.0, 14100.0),
            (6000.0, 16100.0),
        ]),
    }
});

/// 取得済み為替レートのスナップショット (exchangeRate.json)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSnapshot {
    pub rates: HashMap<String, f64>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl RateSnapshot {
    /// USD→JPYレート。未収載なら None (呼び出し側で MissingRate 扱い)。
    pub fn usd_rate(&self) -> Option<f64> {
        self.rates.get("USD").copied()
    }
}

/// カテゴリ手数料の選択肢 (categoryFees.json)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryFeeOption {
    pub label: String,
    /// 手数料率 (%)
    pub value: f64,
    pub categories: Vec<String>,
}

fn read_data_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| Error::DataFile(format!("{}: {}", path.display(), e)))
}

/// Load shipping rate tables from a shipping.json file
pub fn load_shipping_catalog(path: &Path) -> Result<ShippingCatalog> {
    let content = read_data_file(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load category fee options from a categoryFees.json file
pub fn load_category_fees(path: &Path) -> Result<Vec<CategoryFeeOption>> {
    let content = read_data_file(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a resolved exchange-rate snapshot from an exchangeRate.json file
pub fn load_rate_snapshot(path: &Path) -> Result<RateSnapshot> {
    let content = read_data_file(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// ラベル一致またはカテゴリ名の部分一致で手数料オプションを探す
pub fn find_category_fee<'a>(
    options: &'a [CategoryFeeOption],
    query: &str,
) -> Option<&'a CategoryFeeOption> {
    if let Some(found) = options.iter().find(|o| o.label == query) {
        return Some(found);
    }
    options
        .iter()
        .find(|o| o.categories.iter().any(|c| c.contains(query)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_tiers_sorted_ascending() {
        let catalog = &*DEFAULT_SHIPPING_CATALOG;
        for table in [&catalog.small_packet_air, &catalog.fedex, &catalog.ems] {
            for pair in table.windows(2) {
                assert!(pair[0].weight < pair[1].weight);
                assert!(pair[0].price <= pair[1].price);
            }
        }
    }

    #[test]
    fn test_usd_rate_lookup() {
        let mut rates = HashMap::new();
        rates.insert("USD".to_string(), 150.25);
        let snapshot = RateSnapshot { rates, date: None };
        assert_eq!(snapshot.usd_rate(), Some(150.25));

        let empty = RateSnapshot {
            rates: HashMap::new(),
            date: None,
        };
        assert_eq!(empty.usd_rate(), None);
    }

    #[test]
    fn test_find_category_fee_by_label_then_category() {
        let options = vec![
            CategoryFeeOption {
                label: "標準".to_string(),
                value: 13.25,
                categories: vec!["ホーム&ガーデン".to_string()],
            },
            CategoryFeeOption {
                label: "トレカ".to_string(),
                value: 13.25,
                categories: vec!["トレーディングカード".to_string()],
            },
        ];
        assert_eq!(find_category_fee(&options, "標準").unwrap().label, "標準");
        assert_eq!(
            find_category_fee(&options, "トレーディング").unwrap().label,
            "トレカ"
        );
        assert!(find_category_fee(&options, "楽器").is_none());
    }
}
