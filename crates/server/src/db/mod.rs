//! Storage abstraction for customer records.
//!
//! The service talks to storage only through [`CustomerStore`], so backends
//! can be swapped without touching the core operations. The shipped backend
//! is the in-memory [`memory::InMemoryCustomerStore`]; a persistent backend
//! slots in behind the same trait.

pub mod memory;

pub use memory::InMemoryCustomerStore;

use clientele_core::CustomerId;

use crate::models::{Customer, NewCustomer};

/// Errors surfaced by a storage backend.
///
/// The service does not translate these; they propagate up and are reported
/// as internal errors at the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The backend failed to execute the operation.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Persistent store of customer records keyed by [`CustomerId`].
///
/// Insertion is the only path that assigns an id; every other operation is
/// keyed by an id that already exists. Lookups match on exact string
/// equality with no case-folding. Per-key writes are atomic; cross-request
/// ordering is otherwise store-defined.
#[allow(async_fn_in_trait)]
pub trait CustomerStore: Send + Sync + 'static {
    /// Persist a new record, assigning it a fresh id.
    async fn insert(&self, new: NewCustomer) -> Result<Customer, RepositoryError>;

    /// Upsert a full record under its existing id.
    async fn update(&self, customer: Customer) -> Result<Customer, RepositoryError>;

    /// Look up a record by id.
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError>;

    /// Every stored record, in store-defined order.
    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError>;

    /// Every record whose name equals `name` exactly.
    async fn find_all_by_name(&self, name: &str) -> Result<Vec<Customer>, RepositoryError>;

    /// Every record whose email equals `email` exactly.
    async fn find_all_by_email(&self, email: &str) -> Result<Vec<Customer>, RepositoryError>;

    /// Whether a record with this id exists.
    async fn exists(&self, id: CustomerId) -> Result<bool, RepositoryError>;

    /// Remove a record by id.
    ///
    /// Returns `true` if a record was removed, `false` if none existed.
    async fn delete(&self, id: CustomerId) -> Result<bool, RepositoryError>;
}
