//! Policy constants for the US sales channel
//!
//! Jurisdiction- and carrier-specific assumptions are collected here so
//! they can be audited and swapped in one place.

/// 州税率 (6.71%)。手数料は州税込み売上に掛かる。
pub const STATE_TAX_RATE: f64 = 0.0671;

/// 手数料にかかるTAX率 (10%)
pub const FEE_TAX_RATE: f64 = 0.10;

/// Payoneer手数料率 (粗利の2%)
pub const PAYOUT_FEE_RATE: f64 = 0.02;

/// 両替手数料 (1USDあたり3.3円、正味売上のドル数に掛かる)
pub const EXCHANGE_FEE_JPY_PER_USD: f64 = 3.3;

/// 消費税率 (10%)。税還付金 = 仕入れ値 × 税率 / (1 + 税率)
pub const CONSUMPTION_TAX_RATE: f64 = 0.10;

/// 小型包装物: 実重量上限 (g)
pub const SMALL_PACKET_MAX_WEIGHT_G: f64 = 2000.0;

/// 小型包装物: 最長辺上限 (cm)
pub const SMALL_PACKET_MAX_LENGTH_CM: f64 = 60.0;

/// 小型包装物: 三辺合計上限 (cm)
pub const SMALL_PACKET_MAX_DIMENSION_SUM_CM: f64 = 90.0;

/// 容積重量の係数 (グラム単位の料金表向け)
pub const DEFAULT_VOLUMETRIC_DIVISOR: f64 = 5.0;

/// 容積重量の係数 (kg単位の料金表向け)
pub const VOLUMETRIC_DIVISOR_KG: f64 = 5000.0;

/// 決済手数料のデフォルト値 (%)
pub const DEFAULT_PAYMENT_FEE_PERCENT: f64 = 1.35;
