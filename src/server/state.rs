use std::sync::Arc;

use crate::rates::RateClient;

/// shared state for the web service, built once at startup
///
/// the service itself is stateless; the only shared piece is the
/// rate-lookup client with its connection pool
#[derive(Clone)]
pub struct AppState {
    pub rates: Arc<RateClient>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            rates: Arc::new(RateClient::new()),
        }
    }

    pub fn with_rate_client(client: RateClient) -> Self {
        Self {
            rates: Arc::new(client),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
