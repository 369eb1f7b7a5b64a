//! Domain layer: business entities and repository traits.
//!
//! Contains no I/O. Storage access is expressed as traits implemented by
//! the infrastructure layer.

pub mod entities;
pub mod repositories;
