//! Repository trait for the singleton view counter.

use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the singleton view counter.
///
/// The counter row is created lazily on first increment. The increment is a
/// single atomic statement, so concurrent requests never lose updates and
/// never produce duplicate counter rows.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgViewCounterRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ViewCounterRepository: Send + Sync {
    /// Atomically increments the counter by 1 and returns the new total.
    ///
    /// Creates the counter row with value 1 if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment(&self) -> Result<i64, AppError>;

    /// Returns the current counter value without mutating it.
    ///
    /// Returns 0 if the counter row has not been created yet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn current(&self) -> Result<i64, AppError>;
}
