//! Polling CSV parsing and summary statistics.

pub mod model;
pub mod poll;
pub mod render;
pub mod stats;

pub type Result<T> = anyhow::Result<T>;
