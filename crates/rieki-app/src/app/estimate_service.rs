//! Estimate Service - Core Use Case for profit estimation
//!
//! This service orchestrates the complete estimation workflow:
//! 1. Select the cheapest eligible shipping method
//! 2. Build the quick (partial) estimate used for live display
//! 3. Run the full fee/profit breakdown with the shipping cost fed in
//!
//! The shipping selector and the profit calculator never call each other;
//! this layer wires the selector's price into the calculator's input.

use rieki_domain::model::{
    PackageDimensions, ProfitCalcInput, ProfitDetail, ShippingCatalog, ShippingQuote,
};
use rieki_domain::service::{
    actual_cost, category_fee_amount, compute_profit_detail, gross_profit, profit_margin,
    select_cheapest_shipping,
};
use rieki_types::{Error, Result};
use serde::{Deserialize, Serialize};

/// 見積り依頼 (1商品分の生入力)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// 売値 (USD, 州税抜き)
    pub selling_price_usd: f64,
    /// 仕入れ値 (円)
    pub cost_price_jpy: f64,
    /// 実重量 (g)
    pub actual_weight_g: f64,
    /// 寸法 (cm)
    pub dimensions: PackageDimensions,
    /// カテゴリ手数料 (%)
    pub category_fee_percent: f64,
    /// 決済手数料 (%)
    pub payment_fee_percent: f64,
    /// USD→JPY 為替レート
    pub exchange_rate_usd_to_jpy: Option<f64>,
    /// 容積重量の係数
    pub volumetric_divisor: f64,
    /// 目標利益率 (参考値)
    #[serde(default)]
    pub target_margin: Option<f64>,
}

/// 簡易見積り (入力途中のライブ表示用の部分計算)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickEstimate {
    /// 配送料 (円)
    pub shipping_jpy: f64,
    /// カテゴリ手数料 (円)
    pub category_fee_jpy: f64,
    /// 実費合計 (円)
    pub actual_cost_jpy: f64,
    /// 粗利 (円)
    pub gross_profit_jpy: f64,
    /// 利益率 (%)
    pub profit_margin_percent: f64,
    /// 売値の円換算 (税抜)
    pub selling_price_jpy: f64,
    /// 使用した為替レート
    pub rate: f64,
}

/// 見積り結果一式
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateReport {
    pub shipping: ShippingQuote,
    pub quick: QuickEstimate,
    pub detail: ProfitDetail,
}

/// 見積りを実行する
///
/// 配送方法が一つも成立しない場合は `Error::NoShippingRoute`。
/// 為替レート未取得は `Error::MissingRate` (何も計算しない)。
pub fn run_estimate(catalog: &ShippingCatalog, request: &EstimateRequest) -> Result<EstimateReport> {
    let rate = match request.exchange_rate_usd_to_jpy {
        Some(rate) if rate > 0.0 => rate,
        _ => return Err(Error::MissingRate),
    };

    let shipping = select_cheapest_shipping(
        catalog,
        request.actual_weight_g,
        &request.dimensions,
        request.volumetric_divisor,
    )
    .ok_or(Error::NoShippingRoute)?;

    let selling_price_jpy = request.selling_price_usd * rate;
    let category_fee_jpy = category_fee_amount(selling_price_jpy, request.category_fee_percent);
    let actual_cost_jpy = actual_cost(request.cost_price_jpy, shipping.price, category_fee_jpy);
    let gross_profit_jpy = gross_profit(selling_price_jpy, actual_cost_jpy);
    let quick = QuickEstimate {
        shipping_jpy: shipping.price,
        category_fee_jpy,
        actual_cost_jpy,
        gross_profit_jpy,
        profit_margin_percent: profit_margin(gross_profit_jpy, selling_price_jpy),
        selling_price_jpy,
        rate,
    };

    let detail = compute_profit_detail(&ProfitCalcInput {
        selling_price_usd: request.selling_price_usd,
        cost_price_jpy: request.cost_price_jpy,
        shipping_jpy: shipping.price,
        category_fee_percent: request.category_fee_percent,
        payment_fee_percent: request.payment_fee_percent,
        exchange_rate_usd_to_jpy: Some(rate),
        target_margin: request.target_margin,
    })?;

    Ok(EstimateReport {
        shipping,
        quick,
        detail,
    })
}
