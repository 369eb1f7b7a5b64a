//! Singleton counter entity tracking cumulative view count.

/// Well-known identifier of the singleton counter row.
///
/// All increments target this single row; the invariant that at most one
/// counter exists is enforced by the primary key together with the atomic
/// upsert in the repository.
pub const VIEW_COUNTER_ID: i64 = 1;

/// The persistent counter of total recorded views.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ViewCounter {
    pub id: i64,
    pub number_of_views: i64,
}

impl ViewCounter {
    /// Creates a new ViewCounter instance.
    pub fn new(id: i64, number_of_views: i64) -> Self {
        Self {
            id,
            number_of_views,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_counter_creation() {
        let counter = ViewCounter::new(VIEW_COUNTER_ID, 42);

        assert_eq!(counter.id, 1);
        assert_eq!(counter.number_of_views, 42);
    }
}
