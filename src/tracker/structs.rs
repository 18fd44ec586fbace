//! Data structures for tracker operations.

/// Validated announce request.
pub mod announce_query_request;

/// Counters produced by one cleanup pass.
pub mod cleanup_stats;

/// Torrent identifier, an opaque byte string.
pub mod info_hash;

/// One peer as returned in an announce response.
pub mod peer_entry;

/// Peer identifier, an opaque byte string.
pub mod peer_id;

/// Peers of a single torrent.
pub mod torrent_entry;

/// Last announce seen from a peer.
pub mod torrent_peer;

/// 256-way sharded torrent storage.
pub mod torrent_sharding;

/// Shared tracker state.
pub mod torrent_tracker;
