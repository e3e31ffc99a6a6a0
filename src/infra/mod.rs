//! Infrastructure concerns: the repository abstraction and the shared
//! in-memory platform state backing the service facades.

pub mod platform;
pub mod repositories;

pub use platform::{Platform, UserAccount};
pub use repositories::{InMemoryRepository, Repository};
