//! PostgreSQL implementations of the domain repository traits.

pub mod pg_page_view_repository;
pub mod pg_view_counter_repository;

pub use pg_page_view_repository::PgPageViewRepository;
pub use pg_view_counter_repository::PgViewCounterRepository;
