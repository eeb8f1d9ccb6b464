//! Customer domain types.
//!
//! These types represent validated domain objects separate from the wire
//! DTOs in the routes layer.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use clientele_core::{CustomerId, CustomerName, Email};

/// A customer record (domain type).
///
/// The flat, relationship-free shape the store persists. `id` is assigned by
/// the store at creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// Store-assigned unique id.
    pub id: CustomerId,
    /// Customer's display name.
    pub name: CustomerName,
    /// Customer's email address.
    pub email: Email,
    /// Total spend over the last year, if known. Absent is distinct from
    /// zero: a customer with no recorded spend never leaves Silver.
    pub annual_spend: Option<Decimal>,
    /// Date of the most recent purchase, if any.
    pub last_purchase_date: Option<NaiveDate>,
}

/// A validated candidate record for creation.
///
/// Deliberately has no id field: ids are minted by the store, so a caller
/// cannot supply one here even by mistake.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: CustomerName,
    pub email: Email,
    pub annual_spend: Option<Decimal>,
    pub last_purchase_date: Option<NaiveDate>,
}

/// Field-by-field changes for a partial update.
///
/// `None` means "leave the stored value unchanged". There is no way to clear
/// an already-set optional field; that matches the service's wire contract,
/// where an absent JSON field and a cleared field are indistinguishable.
#[derive(Debug, Clone, Default)]
pub struct CustomerUpdate {
    pub name: Option<CustomerName>,
    pub email: Option<Email>,
    pub annual_spend: Option<Decimal>,
    pub last_purchase_date: Option<NaiveDate>,
}

impl CustomerUpdate {
    /// Whether the update carries no changes at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.annual_spend.is_none()
            && self.last_purchase_date.is_none()
    }
}

impl Customer {
    /// Merge a partial update into this record, field by field.
    ///
    /// The id is untouchable; every other field is replaced only where the
    /// update carries a value.
    pub fn apply(&mut self, changes: CustomerUpdate) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(annual_spend) = changes.annual_spend {
            self.annual_spend = Some(annual_spend);
        }
        if let Some(last_purchase_date) = changes.last_purchase_date {
            self.last_purchase_date = Some(last_purchase_date);
        }
    }
}
