//! Shipping rate table and package type definitions

use serde::{Deserialize, Serialize};

/// One weight tier of a method's rate table
///
/// `weight` is the upper bound of the tier, in the same unit as the query
/// weight (grams for the bundled tables). Tables must be sorted ascending
/// by `weight` for lookups to be correct.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShippingTier {
    /// 重量上限 (g)
    pub weight: f64,
    /// 送料 (円)
    pub price: f64,
}

/// 配送方法別の料金表 (shipping.json と同じキー)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShippingCatalog {
    pub small_packet_air: Vec<ShippingTier>,
    pub fedex: Vec<ShippingTier>,
    pub ems: Vec<ShippingTier>,
}

/// 荷物の寸法 (cm)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageDimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl PackageDimensions {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// 最長辺 (cm)
    pub fn longest(&self) -> f64 {
        self.length.max(self.width).max(self.height)
    }

    /// 三辺合計 (cm)
    pub fn sum(&self) -> f64 {
        self.length + self.width + self.height
    }

    /// 体積 (cm³)
    pub fn volume_cm3(&self) -> f64 {
        self.length * self.width * self.height
    }
}

/// 配送方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingMethod {
    SmallPacketAir,
    Fedex,
    Ems,
}

impl ShippingMethod {
    /// Stable label matching the shipping.json keys
    pub fn label(&self) -> &'static str {
        match self {
            ShippingMethod::SmallPacketAir => "small_packet_air",
            ShippingMethod::Fedex => "fedex",
            ShippingMethod::Ems => "ems",
        }
    }
}

impl std::fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 選択結果: 最安の配送方法と送料
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShippingQuote {
    pub method: ShippingMethod,
    /// 送料 (円)
    pub price: f64,
}
