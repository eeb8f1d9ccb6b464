//! Integration tests for Clientele.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the server
//! cargo run -p clientele-server
//!
//! # Run the live suite (ignored by default)
//! cargo test -p clientele-integration-tests -- --ignored
//! ```
//!
//! The suite targets `http://localhost:3000` unless `CLIENTELE_BASE_URL`
//! is set.

#![cfg_attr(not(test), forbid(unsafe_code))]
