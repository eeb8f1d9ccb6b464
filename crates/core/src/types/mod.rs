//! Core types for Clientele.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod name;
pub mod tier;

pub use email::{Email, EmailError};
pub use id::CustomerId;
pub use name::{CustomerName, CustomerNameError};
pub use tier::{Tier, whole_months_between};
