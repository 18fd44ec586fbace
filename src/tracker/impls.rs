//! Implementation blocks for tracker structs.

/// Parsing of the `event` query value.
pub mod announce_event;

/// Accumulation helpers for cleanup counters.
pub mod cleanup_stats;

/// Display, conversions and shard selection for `InfoHash`.
pub mod info_hash;

/// Compact and dictionary encodings of a returned peer.
pub mod peer_entry;

/// Display and conversions for `PeerId`.
pub mod peer_id;

/// Constructors for `TorrentEntry`.
pub mod torrent_entry;

/// Staleness checks for `TorrentPeer`.
pub mod torrent_peer;

/// Shard lookup and counting.
pub mod torrent_sharding;

/// Tracker construction.
pub mod torrent_tracker;

/// Periodic removal of stale peers.
pub mod torrent_tracker_cleanup;

/// Announce validation and response building.
pub mod torrent_tracker_handlers;

/// Peer insertion, removal and listing.
pub mod torrent_tracker_peers;
