//! Final-profit breakdown pipeline (US販路)
//!
//! 決まった順序の段階計算で、各段は前段の結果のみを使う。
//! 為替レートが無ければ何も計算せずにエラーを返す。

use rieki_types::{Error, Result};

use crate::constants::{
    CONSUMPTION_TAX_RATE, EXCHANGE_FEE_JPY_PER_USD, FEE_TAX_RATE, PAYOUT_FEE_RATE, STATE_TAX_RATE,
};
use crate::model::{ProfitCalcInput, ProfitDetail};

/// 最終利益の詳細を計算する
///
/// 手数料は州税込み売上に掛かり、Payoneer手数料だけは粗利に掛かる。
/// 還付金 (税還付金・手数料還付金) は `net_profit_jpy` には含めず、
/// `final_profit_jpy` にのみ加算する。両方の数字を別々に返す。
pub fn compute_profit_detail(input: &ProfitCalcInput) -> Result<ProfitDetail> {
    let rate = match input.exchange_rate_usd_to_jpy {
        Some(rate) if rate > 0.0 => rate,
        _ => return Err(Error::MissingRate),
    };

    let selling_price_usd = input.selling_price_usd;

    // 州税抜き売上の円換算 (利益率の分母)
    let revenue_jpy_excl_tax = selling_price_usd * rate;

    // 州税込みの売上 (USD)。percent手数料はこちらに掛かる。
    let selling_price_incl_tax_usd = selling_price_usd * (1.0 + STATE_TAX_RATE);

    // カテゴリ手数料 & 決済手数料
    let category_fee_usd = selling_price_incl_tax_usd * (input.category_fee_percent / 100.0);
    let payment_fee_usd = selling_price_incl_tax_usd * (input.payment_fee_percent / 100.0);

    // 手数料にかかるTAX
    let fee_tax_usd = (category_fee_usd + payment_fee_usd) * FEE_TAX_RATE;

    // Payoneer手数料は粗利ベース (税抜売値 - 基本手数料で粗利を出してから)
    let gross_margin_usd = selling_price_usd - (category_fee_usd + payment_fee_usd + fee_tax_usd);
    let payout_fee_usd = gross_margin_usd * PAYOUT_FEE_RATE;

    // 全手数料と手取り売上
    let total_fees_usd = category_fee_usd + payment_fee_usd + fee_tax_usd + payout_fee_usd;
    let net_selling_usd = selling_price_usd - total_fees_usd;

    // 両替手数料は正味売上のドル数に対して掛かる (総売上ではない)
    let exchange_fee_jpy = net_selling_usd * EXCHANGE_FEE_JPY_PER_USD;
    let net_selling_jpy = net_selling_usd * rate - exchange_fee_jpy;

    // 仕入れ値と配送料を差し引く
    let net_profit_jpy = net_selling_jpy - input.cost_price_jpy - input.shipping_jpy;

    // 還付金 (参考値)
    let tax_refund_jpy =
        input.cost_price_jpy * CONSUMPTION_TAX_RATE / (1.0 + CONSUMPTION_TAX_RATE);
    let fee_rebate_jpy = fee_tax_usd * rate;

    // 最終損益 (還付金付与後)
    let final_profit_jpy = net_profit_jpy + tax_refund_jpy + fee_rebate_jpy;

    // 売値ベース利益率。売上0は利益率0 (ゼロ除算ガード)。
    let profit_margin_percent = if revenue_jpy_excl_tax == 0.0 {
        0.0
    } else {
        (final_profit_jpy / revenue_jpy_excl_tax) * 100.0
    };

    let category_fee_jpy = category_fee_usd * rate;
    let payment_fee_jpy = payment_fee_usd * rate;
    let fee_tax_jpy = fee_tax_usd * rate;
    let payout_fee_jpy = payout_fee_usd * rate;
    let total_fees_jpy = total_fees_usd * rate;

    // 総コストのみ円単位に丸めて保持する
    let total_cost_jpy = (input.cost_price_jpy
        + input.shipping_jpy
        + category_fee_jpy
        + payment_fee_jpy
        + fee_tax_jpy
        + payout_fee_jpy)
        .round();

    Ok(ProfitDetail {
        selling_price_usd,
        selling_price_incl_tax_usd,
        cost_price_jpy: input.cost_price_jpy,
        category_fee_usd,
        category_fee_jpy,
        payment_fee_usd,
        payment_fee_jpy,
        fee_tax_usd,
        fee_tax_jpy,
        payout_fee_usd,
        payout_fee_jpy,
        exchange_fee_jpy,
        gross_margin_usd,
        total_fees_usd,
        total_fees_jpy,
        net_selling_usd,
        net_selling_jpy,
        total_cost_jpy,
        net_profit_jpy,
        final_profit_jpy,
        profit_margin_percent,
        tax_refund_jpy,
        fee_rebate_jpy,
    })
}

/// カテゴリ手数料額を計算する
pub fn category_fee_amount(selling_price: f64, category_fee_percent: f64) -> f64 {
    selling_price * (category_fee_percent / 100.0)
}

/// 配送料 (USD) を円換算する
pub fn convert_shipping_to_jpy(shipping_usd: f64, exchange_rate_usd_to_jpy: f64) -> f64 {
    shipping_usd * exchange_rate_usd_to_jpy
}

/// 実費合計 (仕入れ + 配送料 + カテゴリ手数料)
pub fn actual_cost(cost_price_jpy: f64, shipping_jpy: f64, category_fee_jpy: f64) -> f64 {
    cost_price_jpy + shipping_jpy + category_fee_jpy
}

/// 粗利 (売上 - 実費合計)
pub fn gross_profit(selling_price_jpy: f64, actual_cost_jpy: f64) -> f64 {
    selling_price_jpy - actual_cost_jpy
}

/// 利益率 (%)。売値0のときは0を返す。
pub fn profit_margin(gross_profit: f64, selling_price: f64) -> f64 {
    if selling_price == 0.0 {
        return 0.0;
    }
    (gross_profit / selling_price) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> ProfitCalcInput {
        ProfitCalcInput {
            selling_price_usd: 100.0,
            cost_price_jpy: 8000.0,
            shipping_jpy: 1000.0,
            category_fee_percent: 10.0,
            payment_fee_percent: 1.35,
            exchange_rate_usd_to_jpy: Some(150.0),
            target_margin: None,
        }
    }

    #[test]
    fn test_fee_chain_reference_values() {
        // 売値100USD, 仕入8000円, 送料1000円, カテゴリ10%, 決済1.35%, レート150
        let detail = compute_profit_detail(&sample_input()).unwrap();
        assert!((detail.selling_price_incl_tax_usd - 106.71).abs() < 0.01);
        assert!((detail.category_fee_usd - 10.671).abs() < 0.01);
        assert!((detail.payment_fee_usd - 1.4406).abs() < 0.01);
        assert!((detail.fee_tax_usd - 1.2112).abs() < 0.01);
        assert!((detail.gross_margin_usd - 86.68).abs() < 0.01);
        assert!((detail.payout_fee_usd - 1.7336).abs() < 0.01);
        assert!((detail.net_selling_usd - 84.94).abs() < 0.01);
    }

    #[test]
    fn test_jpy_side_of_reference_scenario() {
        let detail = compute_profit_detail(&sample_input()).unwrap();
        // 両替手数料 = 84.9437... x 3.3
        assert!((detail.exchange_fee_jpy - 280.31).abs() < 0.01);
        assert!((detail.net_selling_jpy - 12461.24).abs() < 0.01);
        assert!((detail.net_profit_jpy - 3461.24).abs() < 0.01);
        assert!((detail.tax_refund_jpy - 727.27).abs() < 0.01);
        assert!((detail.fee_rebate_jpy - 181.67).abs() < 0.01);
        assert!((detail.final_profit_jpy - 4370.19).abs() < 0.01);
        // 総コストは丸め済み
        assert!((detail.total_cost_jpy - 11258.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_final_profit_is_net_plus_rebates() {
        let detail = compute_profit_detail(&sample_input()).unwrap();
        let expected = detail.net_profit_jpy + detail.tax_refund_jpy + detail.fee_rebate_jpy;
        assert!((detail.final_profit_jpy - expected).abs() < 1e-9);
    }

    #[test]
    fn test_missing_rate_is_fatal() {
        let mut input = sample_input();
        input.exchange_rate_usd_to_jpy = None;
        assert!(matches!(
            compute_profit_detail(&input),
            Err(Error::MissingRate)
        ));
    }

    #[test]
    fn test_zero_rate_is_fatal() {
        let mut input = sample_input();
        input.exchange_rate_usd_to_jpy = Some(0.0);
        assert!(matches!(
            compute_profit_detail(&input),
            Err(Error::MissingRate)
        ));
    }

    #[test]
    fn test_negative_rate_is_fatal() {
        let mut input = sample_input();
        input.exchange_rate_usd_to_jpy = Some(-150.0);
        assert!(matches!(
            compute_profit_detail(&input),
            Err(Error::MissingRate)
        ));
    }

    #[test]
    fn test_zero_selling_price_gives_zero_margin() {
        let mut input = sample_input();
        input.selling_price_usd = 0.0;
        let detail = compute_profit_detail(&input).unwrap();
        assert_eq!(detail.profit_margin_percent, 0.0);
    }

    #[test]
    fn test_recompute_is_bit_identical() {
        let first = compute_profit_detail(&sample_input()).unwrap();
        let second = compute_profit_detail(&sample_input()).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_category_fee_amount() {
        let fee = category_fee_amount(15000.0, 10.0);
        assert!((fee - 1500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_convert_shipping_to_jpy() {
        let jpy = convert_shipping_to_jpy(20.0, 150.0);
        assert!((jpy - 3000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_actual_cost_and_gross_profit() {
        let cost = actual_cost(8000.0, 1000.0, 1500.0);
        assert!((cost - 10500.0).abs() < f64::EPSILON);
        let profit = gross_profit(15000.0, cost);
        assert!((profit - 4500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_profit_margin_guards_zero_selling_price() {
        assert_eq!(profit_margin(4500.0, 0.0), 0.0);
        let margin = profit_margin(4500.0, 15000.0);
        assert!((margin - 30.0).abs() < 0.01);
    }
}
