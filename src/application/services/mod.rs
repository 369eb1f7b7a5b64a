//! Application services orchestrating domain operations.

pub mod counter_service;
pub mod stats_service;

pub use counter_service::CounterService;
pub use stats_service::{PageStats, StatsService};
