//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Pagination
// =============================================================================

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Maximum allowed items per page to prevent excessive queries
pub const MAX_PAGE_SIZE: u64 = 100;

/// Default starting page number (1-indexed)
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

// =============================================================================
// Backend & Transport
// =============================================================================

/// Default backend API base URL (for development)
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Fixed request timeout applied by the transport layer, in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Simulated latency of the in-memory backend, in milliseconds
pub const DEFAULT_MOCK_LATENCY_MS: u64 = 150;

// =============================================================================
// Session persistence
// =============================================================================

/// Default file name for the persisted session (local-storage analog)
pub const DEFAULT_SESSION_FILE: &str = ".elearn-session.json";

// =============================================================================
// Search
// =============================================================================

/// Default debounce window for search inputs, in milliseconds
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

// =============================================================================
// Learning
// =============================================================================

/// Minimum quiz score (percent) required to pass
pub const QUIZ_PASS_THRESHOLD_PERCENT: u32 = 70;

// =============================================================================
// Payments
// =============================================================================

/// Base URL of the payment processor's hosted checkout page
pub const HOSTED_CHECKOUT_BASE_URL: &str = "https://pay.example.com/checkout";

/// Query parameter carrying the checkout session id on return trips
pub const CHECKOUT_SESSION_PARAM: &str = "session_id";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Minimum name length requirement
pub const MIN_NAME_LENGTH: u64 = 1;

/// Minimum motivation length for instructor applications
pub const MIN_MOTIVATION_LENGTH: u64 = 30;
