//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; request
//! bodies are checked with `validator` derives before reaching services.

pub mod count;
pub mod health;
pub mod record_view;
pub mod stats;
