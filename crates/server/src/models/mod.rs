//! Domain types for the customer service.

pub mod customer;

pub use customer::{Customer, CustomerUpdate, NewCustomer};
