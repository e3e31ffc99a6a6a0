//! Client core for a multi-role e-learning platform.
//!
//! This crate implements everything on the client side of the platform that
//! carries decision logic: the persisted session, role-based route guarding,
//! typed service facades over the backend contract, and the local state
//! machines driving the study flows.
//!
//! # Architecture Layers
//!
//! - **config**: Application configuration and constants
//! - **domain**: Core entities (users, courses, decks, transactions)
//! - **session**: Persisted session store, expiry events, session manager
//! - **guard**: Role-based route guarding for the student/instructor/admin areas
//! - **services**: Service facade traits and the in-memory backend implementations
//! - **infra**: Repository abstraction and shared in-memory platform state
//! - **study**: Flashcard and quiz local state machines
//! - **types**: Shared types (pagination, page controls)
//! - **forms**: Client-side form validation
//! - **errors**: Centralized error handling

pub mod assets;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod errors;
pub mod forms;
pub mod guard;
pub mod infra;
pub mod routes;
pub mod search;
pub mod services;
pub mod session;
pub mod study;
pub mod types;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{AuthenticatedUser, Role, Session};
pub use errors::{AppError, AppResult};
pub use guard::{GuardArea, GuardOutcome, RouteGuard};
pub use services::ServiceContainer;
pub use session::{SessionManager, SessionState, SessionStore};
