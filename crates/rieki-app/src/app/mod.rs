//! Application use cases

pub mod estimate_service;

pub use estimate_service::{run_estimate, EstimateReport, EstimateRequest, QuickEstimate};
