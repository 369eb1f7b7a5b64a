//! Web layer: server-rendered HTML dashboard.

pub mod handlers;
pub mod routes;
