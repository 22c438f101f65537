//! Domain model types

pub mod profit;
pub mod shipping;

pub use profit::{ProfitCalcInput, ProfitDetail};
pub use shipping::{
    PackageDimensions, ShippingCatalog, ShippingMethod, ShippingQuote, ShippingTier,
};
