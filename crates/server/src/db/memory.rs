//! In-memory customer store.

use std::collections::HashMap;

use tokio::sync::RwLock;

use clientele_core::CustomerId;

use super::{CustomerStore, RepositoryError};
use crate::models::{Customer, NewCustomer};

/// Customer store backed by a process-local map.
///
/// The lock serializes writers, so per-key upsert and delete are atomic;
/// concurrent updates to the same id resolve last-write-wins. Iteration
/// order of `find_all` is the map's, i.e. unspecified.
#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    records: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryCustomerStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CustomerStore for InMemoryCustomerStore {
    async fn insert(&self, new: NewCustomer) -> Result<Customer, RepositoryError> {
        let customer = Customer {
            id: CustomerId::generate(),
            name: new.name,
            email: new.email,
            annual_spend: new.annual_spend,
            last_purchase_date: new.last_purchase_date,
        };
        self.records
            .write()
            .await
            .insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn update(&self, customer: Customer) -> Result<Customer, RepositoryError> {
        self.records
            .write()
            .await
            .insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn find_all_by_name(&self, name: &str) -> Result<Vec<Customer>, RepositoryError> {
        Ok(self
            .records
            .read()
            .await
            .values()
            .filter(|customer| customer.name.as_str() == name)
            .cloned()
            .collect())
    }

    async fn find_all_by_email(&self, email: &str) -> Result<Vec<Customer>, RepositoryError> {
        Ok(self
            .records
            .read()
            .await
            .values()
            .filter(|customer| customer.email.as_str() == email)
            .cloned()
            .collect())
    }

    async fn exists(&self, id: CustomerId) -> Result<bool, RepositoryError> {
        Ok(self.records.read().await.contains_key(&id))
    }

    async fn delete(&self, id: CustomerId) -> Result<bool, RepositoryError> {
        Ok(self.records.write().await.remove(&id).is_some())
    }
}
