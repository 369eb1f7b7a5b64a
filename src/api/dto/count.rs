//! DTO for the view counter response.

use serde::Serialize;

/// Response of the increment endpoint: the new cumulative total.
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: i64,
}
