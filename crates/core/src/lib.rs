//! Clientele Core - Shared types library.
//!
//! This crate provides the domain vocabulary used across all Clientele
//! components:
//! - `server` - Customer management HTTP service
//! - `integration-tests` - Live-server test suite
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! storage access, no HTTP clients. This keeps it lightweight and allows it
//! to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, emails, and names, plus the
//!   loyalty tier classification rule

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
