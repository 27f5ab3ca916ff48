// =============================================================================
// DURABLE STORE KEYS
// =============================================================================

/// Key holding the bearer token; written on login, removed on logout.
pub const SESSION_TOKEN_KEY: &str = "token";

/// Key holding the JSON-serialized user; always written/removed together with
/// the token key.
pub const SESSION_USER_KEY: &str = "user";

// =============================================================================
// REPORT FORM DEFAULTS
// =============================================================================

/// Faculty the report form starts out with.
pub const DEFAULT_FACULTY: &str = "Faculty of ICT";

/// Registered-student count the report form starts out with (read-only in the
/// original form).
pub const DEFAULT_REGISTERED_COUNT: &str = "30";

// =============================================================================
// TIMING
// =============================================================================

/// Idle time after the last search keystroke before the reports refetch fires.
pub const SEARCH_DEBOUNCE_MS: u64 = 500;
