//! Domain services

pub mod profit_calculator;
pub mod shipping_selector;

pub use profit_calculator::{
    actual_cost, category_fee_amount, compute_profit_detail, convert_shipping_to_jpy,
    gross_profit, profit_margin,
};
pub use shipping_selector::{
    calculate_dimensional_weight, find_price_by_weight, select_cheapest_shipping,
};
