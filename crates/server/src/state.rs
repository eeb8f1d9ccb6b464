//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::db::InMemoryCustomerStore;
use crate::services::CustomerService;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; provides access to the customer service and
/// configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    customers: CustomerService<InMemoryCustomerStore>,
}

impl AppState {
    /// Create a new application state with an empty in-memory store.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                customers: CustomerService::new(InMemoryCustomerStore::new()),
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the customer service.
    #[must_use]
    pub fn customers(&self) -> &CustomerService<InMemoryCustomerStore> {
        &self.inner.customers
    }
}
