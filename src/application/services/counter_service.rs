//! Singleton view counter service.

use std::sync::Arc;

use crate::domain::repositories::ViewCounterRepository;
use crate::error::AppError;

/// Service for the cumulative view counter.
///
/// One durable mutation per increment; calls are not idempotent and views
/// are not deduplicated, so a page refresh counts as a new view.
pub struct CounterService {
    repository: Arc<dyn ViewCounterRepository>,
}

impl CounterService {
    /// Creates a new counter service.
    pub fn new(repository: Arc<dyn ViewCounterRepository>) -> Self {
        Self { repository }
    }

    /// Increments the view counter and returns the new total.
    ///
    /// Creates the counter at 1 when no counter row exists yet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn increment(&self) -> Result<i64, AppError> {
        self.repository.increment().await
    }

    /// Returns the current counter value, 0 if never incremented.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn current(&self) -> Result<i64, AppError> {
        self.repository.current().await
    }
}
