//! Profit calculation input/output type definitions

use serde::{Deserialize, Serialize};

/// 利益計算の入力 (US販路)
///
/// 売値はUSD・州税抜き、仕入れ値と配送料は円。為替レートが未取得
/// (None または 0 以下) の場合、計算は `Error::MissingRate` で失敗する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitCalcInput {
    /// 売値 (USD, 州税抜き)
    pub selling_price_usd: f64,
    /// 仕入れ値 (円)
    pub cost_price_jpy: f64,
    /// 配送料 (円)
    pub shipping_jpy: f64,
    /// カテゴリ手数料 (%)
    pub category_fee_percent: f64,
    /// 決済手数料 (%)
    pub payment_fee_percent: f64,
    /// USD→JPY 為替レート
    pub exchange_rate_usd_to_jpy: Option<f64>,
    /// 目標利益率 (現状は出力に使用しない)
    #[serde(default)]
    pub target_margin: Option<f64>,
}

/// 最終利益の詳細
///
/// 全ての中間値を両通貨で持つ監査用レコード。入力が変わるたびに
/// 作り直す純粋な計算結果で、生成後に書き換えない。
/// `total_cost_jpy` のみ円単位に四捨五入済み。他の円フィールドの
/// 丸めは表示側の責務。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitDetail {
    /// 売値 (USD, 州税抜き)
    pub selling_price_usd: f64,
    /// 州税込売値 (USD)
    pub selling_price_incl_tax_usd: f64,
    /// 仕入れ値 (円)
    pub cost_price_jpy: f64,
    /// カテゴリ手数料 (USD)
    pub category_fee_usd: f64,
    /// カテゴリ手数料 (円)
    pub category_fee_jpy: f64,
    /// 決済手数料 (USD)
    pub payment_fee_usd: f64,
    /// 決済手数料 (円)
    pub payment_fee_jpy: f64,
    /// 手数料税 (USD)
    pub fee_tax_usd: f64,
    /// 手数料税 (円)
    pub fee_tax_jpy: f64,
    /// Payoneer手数料 (USD, 粗利ベース)
    pub payout_fee_usd: f64,
    /// Payoneer手数料 (円)
    pub payout_fee_jpy: f64,
    /// 両替手数料 (円)
    pub exchange_fee_jpy: f64,
    /// 粗利 (USD) = 税抜売値 - (カテゴリ + 決済 + 手数料税)
    pub gross_margin_usd: f64,
    /// 全手数料合計 (USD)
    pub total_fees_usd: f64,
    /// 全手数料合計 (円)
    pub total_fees_jpy: f64,
    /// 全手数料引き後の売上 (USD)
    pub net_selling_usd: f64,
    /// 正味売上 (円, 両替手数料引き後)
    pub net_selling_jpy: f64,
    /// 総コスト (円, 四捨五入済み)
    pub total_cost_jpy: f64,
    /// 利益 (円, 還付金を含まない)
    pub net_profit_jpy: f64,
    /// 最終損益 (円, 還付金付与後)
    pub final_profit_jpy: f64,
    /// 利益率 (%, 税抜売上の円換算ベース)
    pub profit_margin_percent: f64,
    /// 税還付金 (円, 参考値)
    pub tax_refund_jpy: f64,
    /// 手数料還付金 (円, 参考値)
    pub fee_rebate_jpy: f64,
}
