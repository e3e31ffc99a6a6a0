//! Shared types used across services and pages.

pub mod pagination;

pub use pagination::{PageControl, Paginated, PaginationMeta, PaginationParams};
