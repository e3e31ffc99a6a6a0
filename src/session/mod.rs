//! Session persistence, expiry events, and the session manager.

pub mod events;
pub mod manager;
pub mod store;

pub use events::{SessionEvent, SessionEvents};
pub use manager::{ResolvedSession, SessionManager, SessionState};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};
