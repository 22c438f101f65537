//! Cheapest-shipping selection service

use crate::constants::{
    SMALL_PACKET_MAX_DIMENSION_SUM_CM, SMALL_PACKET_MAX_LENGTH_CM, SMALL_PACKET_MAX_WEIGHT_G,
};
use crate::model::{
    PackageDimensions, ShippingCatalog, ShippingMethod, ShippingQuote, ShippingTier,
};

/// 容積重量の計算
///
/// `divisor` は配送方法ごとのキャリア係数 (グラム料金表なら 5、kg料金表
/// なら 5000 が通例)。
pub fn calculate_dimensional_weight(length: f64, width: f64, height: f64, divisor: f64) -> f64 {
    (length * width * height) / divisor
}

/// 料金表から重量に応じた送料を引く
///
/// 料金表は重量上限の昇順で並んでいること。昇順に走査して最初に
/// 上限 ≥ 重量となる段の価格を返す。
/// 重量が最大を超えたら最後の（最大の）価格を返す。これは仕様であり
/// エラーではない。空の料金表のみ None。
pub fn find_price_by_weight(tiers: &[ShippingTier], weight: f64) -> Option<f64> {
    for tier in tiers {
        if weight <= tier.weight {
            return Some(tier.price);
        }
    }
    tiers.last().map(|tier| tier.price)
}

/// 小型包装物の制限チェック
///
/// 実重量・最長辺・三辺合計のどれか一つでも超えたら対象外。
/// 超過時は候補から完全に除外する（高い料金で残すのではない）。
fn is_valid_for_small_packet(actual_weight: f64, dimensions: &PackageDimensions) -> bool {
    actual_weight <= SMALL_PACKET_MAX_WEIGHT_G
        && dimensions.longest() <= SMALL_PACKET_MAX_LENGTH_CM
        && dimensions.sum() <= SMALL_PACKET_MAX_DIMENSION_SUM_CM
}

/// 最も安い配送方法を取得
///
/// FedExのみ容積重量と実重量の大きい方（請求重量）で課金され、
/// 小型包装物とEMSは実重量で課金される。候補が無ければ None
/// （配送不可）を返し、panicはしない。
pub fn select_cheapest_shipping(
    catalog: &ShippingCatalog,
    actual_weight: f64,
    dimensions: &PackageDimensions,
    divisor: f64,
) -> Option<ShippingQuote> {
    let dimensional_weight = calculate_dimensional_weight(
        dimensions.length,
        dimensions.width,
        dimensions.height,
        divisor,
    );
    let chargeable_weight = actual_weight.max(dimensional_weight);

    let small_packet_price = if is_valid_for_small_packet(actual_weight, dimensions) {
        find_price_by_weight(&catalog.small_packet_air, actual_weight)
    } else {
        None
    };
    let fedex_price = find_price_by_weight(&catalog.fedex, chargeable_weight);
    let ems_price = find_price_by_weight(&catalog.ems, actual_weight);

    // 宣言順で比較し、同額なら先勝ち
    let candidates = [
        (ShippingMethod::SmallPacketAir, small_packet_price),
        (ShippingMethod::Fedex, fedex_price),
        (ShippingMethod::Ems, ems_price),
    ];

    let mut cheapest: Option<ShippingQuote> = None;
    for (method, price) in candidates {
        let Some(price) = price else {
            continue;
        };
        match cheapest {
            Some(best) if best.price <= price => {}
            _ => cheapest = Some(ShippingQuote { method, price }),
        }
    }
    cheapest
}
