//! CLI library components for Olist exploratory analysis.

pub mod logging;
pub mod pipeline;
