//! Customer service: CRUD operations and tier derivation.
//!
//! The service is stateless and request-scoped. It enforces the domain
//! contracts (existence checks, field-by-field merge, id immutability) and
//! shapes every outgoing record into a [`TieredCustomer`] with the loyalty
//! tier computed against today's date. Input validity is the boundary
//! layer's job; by the time a [`NewCustomer`] or [`CustomerUpdate`] reaches
//! this type it is already well-formed.

use chrono::Utc;

use clientele_core::{CustomerId, Email, Tier};

use crate::db::{CustomerStore, RepositoryError};
use crate::models::{Customer, CustomerUpdate, NewCustomer};

/// Errors raised by customer operations.
#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    /// The operation targeted an id with no stored record.
    #[error("customer not found")]
    NotFound,

    /// The storage backend failed; passed through untranslated.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// A customer record together with its tier, derived at read time.
///
/// The tier never touches storage; pairing it with the record here is the
/// only place it exists.
#[derive(Debug, Clone)]
pub struct TieredCustomer {
    pub customer: Customer,
    pub tier: Tier,
}

/// The customer management service over an injected store.
#[derive(Debug)]
pub struct CustomerService<S> {
    store: S,
}

impl<S: CustomerStore> CustomerService<S> {
    /// Create a service over the given store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist a new customer. The store assigns the id.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerError::Repository`] if the store fails.
    pub async fn create(&self, new: NewCustomer) -> Result<TieredCustomer, CustomerError> {
        let customer = self.store.insert(new).await?;
        Ok(Self::with_tier(customer))
    }

    /// Fetch a customer by id.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerError::NotFound`] if no record has this id.
    pub async fn get(&self, id: CustomerId) -> Result<TieredCustomer, CustomerError> {
        let customer = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(CustomerError::NotFound)?;
        Ok(Self::with_tier(customer))
    }

    /// Every stored customer, in store-defined order.
    ///
    /// An empty store yields an empty vec, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerError::Repository`] if the store fails.
    pub async fn list(&self) -> Result<Vec<TieredCustomer>, CustomerError> {
        Ok(Self::all_with_tier(self.store.find_all().await?))
    }

    /// Every customer whose name matches `name` exactly. Zero matches is an
    /// empty vec, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerError::Repository`] if the store fails.
    pub async fn list_by_name(&self, name: &str) -> Result<Vec<TieredCustomer>, CustomerError> {
        Ok(Self::all_with_tier(
            self.store.find_all_by_name(name).await?,
        ))
    }

    /// Every customer whose email matches `email` exactly. Zero matches is
    /// an empty vec, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerError::Repository`] if the store fails.
    pub async fn list_by_email(&self, email: &Email) -> Result<Vec<TieredCustomer>, CustomerError> {
        Ok(Self::all_with_tier(
            self.store.find_all_by_email(email.as_str()).await?,
        ))
    }

    /// Merge a partial update into the stored record and persist it.
    ///
    /// Fields the update leaves `None` keep their stored values; the id
    /// never changes. The returned tier is recomputed from the merged
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerError::NotFound`] if no record has this id.
    pub async fn update(
        &self,
        id: CustomerId,
        changes: CustomerUpdate,
    ) -> Result<TieredCustomer, CustomerError> {
        let mut customer = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(CustomerError::NotFound)?;

        customer.apply(changes);
        let saved = self.store.update(customer).await?;
        Ok(Self::with_tier(saved))
    }

    /// Remove a customer permanently.
    ///
    /// The existence check comes first: deleting an id that is already
    /// absent is an error, not a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerError::NotFound`] if no record has this id.
    pub async fn delete(&self, id: CustomerId) -> Result<(), CustomerError> {
        if !self.store.exists(id).await? {
            return Err(CustomerError::NotFound);
        }
        self.store.delete(id).await?;
        Ok(())
    }

    fn with_tier(customer: Customer) -> TieredCustomer {
        let today = Utc::now().date_naive();
        let tier = Tier::classify(customer.annual_spend, customer.last_purchase_date, today);
        TieredCustomer { customer, tier }
    }

    fn all_with_tier(customers: Vec<Customer>) -> Vec<TieredCustomer> {
        customers.into_iter().map(Self::with_tier).collect()
    }
}
