//! Repository traits abstracting persistent storage.

pub mod page_view_repository;
pub mod view_counter_repository;

pub use page_view_repository::{PageViewCount, PageViewRepository, UserViewCount};
pub use view_counter_repository::ViewCounterRepository;

#[cfg(test)]
pub use page_view_repository::MockPageViewRepository;
#[cfg(test)]
pub use view_counter_repository::MockViewCounterRepository;
