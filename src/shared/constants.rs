use std::time::Duration;

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for keyset-paginated list endpoints
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Minimum page size a client may request
pub const MIN_PAGE_SIZE: i64 = 20;

/// Maximum page size a client may request
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// STATUS VALUES
// =============================================================================

pub const STATUS_ACTIVE: &str = "active";

// =============================================================================
// REQUEST DEADLINES
// =============================================================================

// An elapsed deadline aborts the in-flight query and surfaces a 408.
pub const TIMEOUT_CREATE_USER: Duration = Duration::from_millis(100);
pub const TIMEOUT_UPDATE_USER: Duration = Duration::from_millis(100);
pub const TIMEOUT_GET_USERS: Duration = Duration::from_millis(200);

pub const TIMEOUT_CREATE_CATEGORY: Duration = Duration::from_millis(200);
pub const TIMEOUT_GET_HIERARCHY: Duration = Duration::from_millis(500);

pub const TIMEOUT_CREATE_PRODUCT: Duration = Duration::from_millis(200);
pub const TIMEOUT_GET_BRANDS: Duration = Duration::from_millis(100);
