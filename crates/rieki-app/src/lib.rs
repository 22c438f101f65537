//! Application service layer - config, data tables, batch input, estimation

pub mod app;
pub mod batch;
pub mod config;
pub mod faq;
pub mod tables;
