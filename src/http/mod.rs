//! HTTP tracker front end.
//!
//! # Endpoints
//!
//! - `/announce` - peer announces, answered with a bencoded dictionary
//! - `/status` - JSON view of the counters and every stored peer
//!
//! Any other path gets a bencoded `failure reason` with status 404.
//!
//! The client address is taken from the header named by `real_ip` when the
//! request carries it, otherwise from the socket. A header that does not
//! hold an address makes the announce fail rather than falling back.

/// Data structures shared with the request handlers.
pub mod structs;

/// Server setup and request handlers.
#[allow(clippy::module_inception)]
pub mod http;
