//! Shared application state injected into all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{CounterService, StatsService};
use crate::infrastructure::persistence::{PgPageViewRepository, PgViewCounterRepository};

/// Shared state available to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Raw pool kept for health checks.
    pub db: PgPool,
    pub stats_service: Arc<StatsService>,
    pub counter_service: Arc<CounterService>,
}

impl AppState {
    /// Builds the state with PostgreSQL-backed repositories.
    pub fn new(pool: PgPool) -> Self {
        let shared = Arc::new(pool.clone());

        let page_views = Arc::new(PgPageViewRepository::new(shared.clone()));
        let counters = Arc::new(PgViewCounterRepository::new(shared));

        Self {
            db: pool,
            stats_service: Arc::new(StatsService::new(page_views)),
            counter_service: Arc::new(CounterService::new(counters)),
        }
    }
}
