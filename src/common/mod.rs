//! Common utilities and shared functionality.
//!
//! - Query string parsing for the HTTP layer
//! - Logging setup
//! - `CustomError`, the error returned from start-up helpers
//!
//! # Example
//!
//! ```rust
//! use simple_tracker::common::common::parse_query;
//!
//! let query = parse_query(Some("info_hash=%AB%CD&port=6881&no_peer_id"));
//! assert_eq!(query["info_hash"], vec![vec![0xAB, 0xCD]]);
//! assert_eq!(query["port"], vec![b"6881".to_vec()]);
//! assert!(query["no_peer_id"].is_empty());
//! ```

/// Utility functions shared across modules.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common structs.
pub mod impls;

/// Common data structures.
pub mod structs;

/// Unit tests for common utilities.
pub mod tests;
