//! Shared HTTP client utilities
//!
//! This module provides a shared, lazily-initialized HTTP client for all API
//! calls. Using a single client allows connection pooling and avoids resource
//! duplication.

use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;

/// Request timeout for completion calls in seconds. This is also the only
/// cancellation mechanism: a call that has not finished by then fails.
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Global HTTP client for chat completion calls
static HTTP_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get or create the shared HTTP client
///
/// The client carries the fixed 15-second timeout, which bounds every
/// completion call end to end.
pub fn get_client() -> &'static Client {
    HTTP_CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent("oscesim/0.1")
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client - this should never fail")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_client_returns_same_instance() {
        let client1 = get_client();
        let client2 = get_client();
        assert!(std::ptr::eq(client1, client2));
    }
}
