//! Test configuration constants for the catalog HTTP client.

/// User agent sent by the test HTTP client.
pub static TEST_USER_AGENT: &str =
    "Folio/test (contact@example.com; +https://github.com/autumn-order/folio)";

/// Request timeout of the test HTTP client, in seconds.
///
/// Short enough that a hung mock fails the test instead of stalling the suite.
pub const TEST_REQUEST_TIMEOUT_SECS: u64 = 5;
