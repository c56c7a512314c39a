//! Core module - traffic types and date aggregation shared by every renderer

mod aggregator;
mod types;

pub(crate) use aggregator::{aggregate_daily, truncate_to_date};
pub(crate) use types::{TrafficRecord, TrafficResponse};
