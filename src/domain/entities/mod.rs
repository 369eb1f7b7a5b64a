//! Core business entities.

pub mod page_view;
pub mod view_counter;

pub use page_view::{NewPageView, PageView};
pub use view_counter::{VIEW_COUNTER_ID, ViewCounter};
