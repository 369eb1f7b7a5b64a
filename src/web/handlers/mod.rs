//! HTML page handlers.

pub mod insights;

pub use insights::insights_handler;
