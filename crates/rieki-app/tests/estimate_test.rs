//! Integration tests for the estimate workflow

use rieki_app::app::{run_estimate, EstimateRequest};
use rieki_app::tables::DEFAULT_SHIPPING_CATALOG;
use rieki_domain::model::{PackageDimensions, ShippingCatalog, ShippingMethod, ShippingTier};
use rieki_types::Error;

fn tiers(pairs: &[(f64, f64)]) -> Vec<ShippingTier> {
    pairs
        .iter()
        .map(|&(weight, price)| ShippingTier { weight, price })
        .collect()
}

fn fixed_catalog() -> ShippingCatalog {
    ShippingCatalog {
        small_packet_air: tiers(&[(500.0, 1000.0), (2000.0, 2500.0)]),
        fedex: tiers(&[(2000.0, 9000.0)]),
        ems: tiers(&[(2000.0, 4000.0)]),
    }
}

fn camera_request() -> EstimateRequest {
    EstimateRequest {
        selling_price_usd: 100.0,
        cost_price_jpy: 8000.0,
        actual_weight_g: 450.0,
        dimensions: PackageDimensions::new(20.0, 15.0, 10.0),
        category_fee_percent: 10.0,
        payment_fee_percent: 1.35,
        exchange_rate_usd_to_jpy: Some(150.0),
        volumetric_divisor: 5.0,
        target_margin: None,
    }
}

#[test]
fn test_full_estimate_feeds_shipping_into_detail() {
    // 450g・小型サイズ → 小型包装物 1000円 が配送料として detail に流れる
    let report = run_estimate(&fixed_catalog(), &camera_request()).unwrap();

    assert_eq!(report.shipping.method, ShippingMethod::SmallPacketAir);
    assert!((report.shipping.price - 1000.0).abs() < f64::EPSILON);
    assert!((report.quick.shipping_jpy - 1000.0).abs() < f64::EPSILON);

    // 手数料連鎖の基準値 (±0.01)
    let detail = &report.detail;
    assert!((detail.selling_price_incl_tax_usd - 106.71).abs() < 0.01);
    assert!((detail.category_fee_usd - 10.671).abs() < 0.01);
    assert!((detail.payment_fee_usd - 1.4406).abs() < 0.01);
    assert!((detail.fee_tax_usd - 1.2112).abs() < 0.01);
    assert!((detail.gross_margin_usd - 86.68).abs() < 0.01);
    assert!((detail.payout_fee_usd - 1.7336).abs() < 0.01);
    assert!((detail.net_selling_usd - 84.94).abs() < 0.01);
}

#[test]
fn test_quick_estimate_matches_helpers() {
    let report = run_estimate(&fixed_catalog(), &camera_request()).unwrap();
    let quick = &report.quick;

    assert!((quick.selling_price_jpy - 15000.0).abs() < f64::EPSILON);
    assert!((quick.category_fee_jpy - 1500.0).abs() < f64::EPSILON);
    assert!((quick.actual_cost_jpy - 10500.0).abs() < f64::EPSILON);
    assert!((quick.gross_profit_jpy - 4500.0).abs() < f64::EPSILON);
    assert!((quick.profit_margin_percent - 30.0).abs() < 0.01);
}

#[test]
fn test_missing_rate_aborts_before_shipping_selection() {
    let mut request = camera_request();
    request.exchange_rate_usd_to_jpy = None;
    let err = run_estimate(&fixed_catalog(), &request).unwrap_err();
    assert!(matches!(err, Error::MissingRate));
}

#[test]
fn test_no_route_is_distinct_from_rate_error() {
    let mut request = camera_request();
    request.actual_weight_g = 2001.0;
    let catalog = ShippingCatalog {
        small_packet_air: tiers(&[(2000.0, 2500.0)]),
        fedex: vec![],
        ems: vec![],
    };
    // 小型包装物は重量超過で対象外、他は料金表が空 → 配送不可
    let err = run_estimate(&catalog, &request).unwrap_err();
    assert!(matches!(err, Error::NoShippingRoute));
}

#[test]
fn test_default_catalog_covers_typical_parcel() {
    let report = run_estimate(&DEFAULT_SHIPPING_CATALOG, &camera_request()).unwrap();
    assert_eq!(report.shipping.method, ShippingMethod::SmallPacketAir);
    // 450g → 500g段
    assert!((report.shipping.price - 1380.0).abs() < f64::EPSILON);
}

#[test]
fn test_report_is_deterministic() {
    let first = run_estimate(&fixed_catalog(), &camera_request()).unwrap();
    let second = run_estimate(&fixed_catalog(), &camera_request()).unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
