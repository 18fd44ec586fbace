//! In-memory peer registry and announce handling.
//!
//! Torrents live in a [`TorrentSharding`](structs::torrent_sharding::TorrentSharding)
//! of 256 buckets, each guarded by its own `RwLock` and selected by the first
//! byte of the info hash. Writers only lock the bucket they touch, so announces
//! for unrelated torrents never wait on each other.
//!
//! # Main Components
//!
//! - `TorrentTracker` - shared tracker state handed to every server task
//! - `TorrentSharding` - the bucket array
//! - `TorrentEntry` - peers of one torrent, ordered by peer id
//! - `TorrentPeer` - last announce seen from a peer
//! - `AnnounceQueryRequest` - a validated announce
//!
//! Peers that stop announcing are removed by the cleanup task, see
//! `TorrentTracker::cleanup_task`.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use std::net::{IpAddr, Ipv4Addr};
//! use std::sync::Arc;
//! use simple_tracker::config::structs::configuration::Configuration;
//! use simple_tracker::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let tracker = TorrentTracker::new(Arc::new(Configuration::init()));
//! let mut query: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
//! query.insert("info_hash".to_string(), vec![b"aaaaaaaaaaaaaaaaaaaa".to_vec()]);
//! query.insert("peer_id".to_string(), vec![b"-XX0001-000000000001".to_vec()]);
//! query.insert("port".to_string(), vec![b"6881".to_vec()]);
//!
//! let body = tracker.announce_response(Some(IpAddr::V4(Ipv4Addr::LOCALHOST)), &query);
//! assert!(body.starts_with(b"d8:intervali120e5:peers6:"));
//! assert_eq!(tracker.get_peers_amount(), 1);
//! ```

/// Enumerations for announce events and announce failures.
pub mod enums;

/// Implementation blocks for tracker structs.
pub mod impls;

/// Data structures for torrents, peers and announce requests.
pub mod structs;

/// Type aliases shared with the HTTP layer.
pub mod types;
