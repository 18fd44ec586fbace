//! # Simple Tracker
//!
//! A small in-memory BitTorrent tracker over HTTP, together with the bencode
//! codec it speaks.
//!
//! ## Overview
//!
//! Clients announce themselves for a torrent on `/announce`; the tracker
//! stores their address and answers with the other peers of that torrent.
//! Nothing is persisted: peers that stop announcing are dropped by a
//! periodic cleanup task, and a restart starts from an empty registry.
//!
//! ## BEP Compliance
//!
//! - BEP 3: The BitTorrent Protocol Specification (announce, bencoding)
//! - BEP 7: IPv6 Tracker Extension (`peers6`)
//! - BEP 23: Tracker Returns Compact Peer Lists
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use simple_tracker::config::structs::configuration::Configuration;
//! use simple_tracker::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let config = Arc::new(Configuration::init());
//! let tracker = Arc::new(TorrentTracker::new(config));
//! assert_eq!(tracker.get_torrents_amount(), 0);
//! ```
//!
//! ## Modules
//!
//! - [`bencode`] - Bencode values, encoder and decoder
//! - [`common`] - Query parsing, logging setup and error helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`http`] - HTTP tracker front end
//! - [`stats`] - Atomic counters
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - Peer registry, cleanup and announce handling

/// Bencode codec.
///
/// Encodes any value tree and decodes untrusted input without recursion,
/// so deeply nested data cannot exhaust the stack.
pub mod bencode;

/// Common utilities and shared functionality.
pub mod common;

/// Configuration management module.
pub mod config;

/// HTTP tracker protocol implementation.
pub mod http;

/// Statistics tracking module.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// Core tracker logic module.
///
/// Contains the sharded peer registry, the stale peer cleanup and the
/// announce request handling.
pub mod tracker;
