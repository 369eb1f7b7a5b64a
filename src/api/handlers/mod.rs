//! HTTP request handlers for API endpoints.

pub mod health;
pub mod increment;
pub mod record_view;
pub mod stats;

pub use health::health_handler;
pub use increment::increment_view_handler;
pub use record_view::record_view_handler;
pub use stats::stats_handler;
