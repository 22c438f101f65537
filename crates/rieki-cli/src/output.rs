//! Output formatting module
//!
//! 円は表示時に1円単位へ丸め、USDは2桁表示。内部値は丸めない。

use rieki_app::app::{EstimateReport, QuickEstimate};
use rieki_domain::model::ShippingQuote;
use rieki_types::{OutputFormat, Result};

fn yen(value: f64) -> String {
    format!("￥{:.0}", value.round())
}

fn usd(value: f64) -> String {
    format!("${:.2}", value)
}

pub fn output_report(output_format: OutputFormat, report: &EstimateReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(report)?;
        println!("{}", content);
    } else {
        print!("{}", render_report(report));
    }
    Ok(())
}

/// 最終利益の詳細レポート (両通貨併記)
pub fn render_report(report: &EstimateReport) -> String {
    let detail = &report.detail;
    let rate = report.quick.rate;

    let mut out = String::new();
    out.push_str("==================================================\n");
    out.push_str("              最終利益の詳細                       \n");
    out.push_str("              Final Profit Detail                 \n");
    out.push_str("==================================================\n\n");

    out.push_str(&format!(
        "■ 売上 (税抜)     : {} / {}\n",
        usd(detail.selling_price_usd),
        yen(detail.selling_price_usd * rate)
    ));
    out.push_str(&format!(
        "■ 州税込売上      : {} / {}\n",
        usd(detail.selling_price_incl_tax_usd),
        yen(detail.selling_price_incl_tax_usd * rate)
    ));
    out.push('\n');

    out.push_str(&format!("■ 配送方法        : {}\n", report.shipping.method));
    out.push_str(&format!(
        "■ 配送料          : {} / {}\n",
        usd(report.shipping.price / rate),
        yen(report.shipping.price)
    ));
    out.push_str(&format!(
        "■ 仕入れ          : {} / {}\n",
        usd(detail.cost_price_jpy / rate),
        yen(detail.cost_price_jpy)
    ));
    out.push('\n');

    out.push_str("【州税込売上から計算 / Fees on tax-inclusive sale】\n");
    out.push_str(&format!(
        "■ カテゴリ手数料  : {} / {}\n",
        usd(detail.category_fee_usd),
        yen(detail.category_fee_jpy)
    ));
    out.push_str(&format!(
        "■ 決済手数料      : {} / {}\n",
        usd(detail.payment_fee_usd),
        yen(detail.payment_fee_jpy)
    ));
    out.push_str(&format!(
        "■ 手数料税        : {} / {}\n",
        usd(detail.fee_tax_usd),
        yen(detail.fee_tax_jpy)
    ));
    out.push_str(&format!(
        "■ Payoneer手数料  : {} / {}\n",
        usd(detail.payout_fee_usd),
        yen(detail.payout_fee_jpy)
    ));
    out.push_str(&format!(
        "■ 両替手数料      : {} / {}\n",
        usd(detail.exchange_fee_jpy / rate),
        yen(detail.exchange_fee_jpy)
    ));
    out.push_str(&format!(
        "■ 総コスト        : {}\n",
        yen(detail.total_cost_jpy)
    ));
    out.push('\n');

    out.push_str("【利益サマリー / Profit Summary】\n");
    out.push_str(&format!(
        "■ 粗利 (還付金なし)       : {} / {}\n",
        usd(detail.net_profit_jpy / rate),
        yen(detail.net_profit_jpy)
    ));
    out.push_str(&format!(
        "■ 最終損益 (還付金付与後) : {} / {}\n",
        usd(detail.final_profit_jpy / rate),
        yen(detail.final_profit_jpy)
    ));
    out.push_str(&format!(
        "■ 利益率                  : {:.2}%\n",
        detail.profit_margin_percent
    ));
    out.push('\n');

    out.push_str(&format!(
        "※ 税還付金（参考）    : {} / {}（計算には含めていません）\n",
        usd(detail.tax_refund_jpy / rate),
        yen(detail.tax_refund_jpy)
    ));
    out.push_str(&format!(
        "※ 手数料還付金（参考）: {} / {}（計算には含めていません）\n",
        usd(detail.fee_rebate_jpy / rate),
        yen(detail.fee_rebate_jpy)
    ));
    out.push_str("==================================================\n");
    out
}

pub fn output_shipping(output_format: OutputFormat, quote: Option<&ShippingQuote>) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&quote)?;
        println!("{}", content);
        return Ok(());
    }
    match quote {
        Some(quote) => {
            println!("\n配送料見積り / Shipping Quote");
            println!("=============================");
            println!("Method: {}", quote.method);
            println!("Price:  {}", yen(quote.price));
        }
        None => {
            println!("\n配送不可 / No shipping method available");
        }
    }
    Ok(())
}

pub fn output_quick(output_format: OutputFormat, quick: &QuickEstimate) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(quick)?;
        println!("{}", content);
        return Ok(());
    }
    println!("\n簡易見積り / Quick Estimate");
    println!("===========================");
    println!("円換算売上 (税抜): {}", yen(quick.selling_price_jpy));
    println!("カテゴリ手数料:    {}", yen(quick.category_fee_jpy));
    println!("配送料:            {}", yen(quick.shipping_jpy));
    println!("実費合計:          {}", yen(quick.actual_cost_jpy));
    println!("粗利:              {}", yen(quick.gross_profit_jpy));
    println!("利益率:            {:.2}%", quick.profit_margin_percent);
    Ok(())
}

pub fn output_batch(
    output_format: OutputFormat,
    rows: &[(String, Result<EstimateReport>)],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let values: Vec<serde_json::Value> = rows
            .iter()
            .map(|(name, result)| match result {
                Ok(report) => serde_json::json!({ "name": name, "report": report }),
                Err(e) => serde_json::json!({ "name": name, "error": e.to_string() }),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&values)?);
        return Ok(());
    }

    println!("\n一括見積り / Batch Estimate");
    println!("{}", "-".repeat(72));
    println!(
        "{:<20} {:<18} {:>10} {:>12} {:>8}",
        "商品", "配送方法", "配送料", "最終損益", "利益率"
    );
    println!("{}", "-".repeat(72));
    for (name, result) in rows {
        match result {
            Ok(report) => {
                println!(
                    "{:<20} {:<18} {:>10} {:>12} {:>7.1}%",
                    truncate_str(name, 19),
                    report.shipping.method,
                    yen(report.shipping.price),
                    yen(report.detail.final_profit_jpy),
                    report.detail.profit_margin_percent
                );
            }
            Err(e) => {
                println!("{:<20} {}", truncate_str(name, 19), e);
            }
        }
    }
    println!("{}", "-".repeat(72));

    let total: f64 = rows
        .iter()
        .filter_map(|(_, r)| r.as_ref().ok())
        .map(|report| report.detail.final_profit_jpy)
        .sum();
    println!("合計最終損益: {}", yen(total));
    Ok(())
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rieki_app::app::{run_estimate, EstimateRequest};
    use rieki_domain::model::{PackageDimensions, ShippingCatalog, ShippingTier};

    fn sample_report() -> EstimateReport {
        let catalog = ShippingCatalog {
            small_packet_air: vec![
                ShippingTier {
                    weight: 500.0,
                    price: 1000.0,
                },
                ShippingTier {
                    weight: 2000.0,
                    price: 2500.0,
                },
            ],
            fedex: vec![],
            ems: vec![],
        };
        let request = EstimateRequest {
            selling_price_usd: 100.0,
            cost_price_jpy: 8000.0,
            actual_weight_g: 450.0,
            dimensions: PackageDimensions::new(20.0, 15.0, 10.0),
            category_fee_percent: 10.0,
            payment_fee_percent: 1.35,
            exchange_rate_usd_to_jpy: Some(150.0),
            volumetric_divisor: 5.0,
            target_margin: None,
        };
        run_estimate(&catalog, &request).unwrap()
    }

    #[test]
    fn test_render_report_sections() {
        let rendered = render_report(&sample_report());
        assert!(rendered.contains("最終利益の詳細"));
        assert!(rendered.contains("Final Profit Detail"));
        assert!(rendered.contains("■ 配送方法        : small_packet_air"));
        assert!(rendered.contains("計算には含めていません"));
    }

    #[test]
    fn test_render_report_rounds_yen_and_keeps_usd_cents() {
        let rendered = render_report(&sample_report());
        // 売上: $100.00 / 15000円
        assert!(rendered.contains("$100.00"));
        assert!(rendered.contains("￥15000"));
        // 州税込売上: $106.71 / 16007円 (切り上げでなく四捨五入)
        assert!(rendered.contains("$106.71"));
        assert!(rendered.contains("￥16007"));
    }

    #[test]
    fn test_yen_rounding_is_nearest() {
        assert_eq!(yen(1234.4), "￥1234");
        assert_eq!(yen(1234.5), "￥1235");
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("カメラ", 10), "カメラ");
        assert_eq!(truncate_str("とても長い商品名ですよ", 8), "とても長い商..");
    }
}
