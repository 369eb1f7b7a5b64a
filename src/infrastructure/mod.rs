//! Infrastructure layer: database access.

pub mod persistence;
