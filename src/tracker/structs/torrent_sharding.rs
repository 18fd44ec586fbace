//! Sharded torrent storage for concurrent access.

use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent_entry::TorrentEntry;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Torrent storage split over 256 independently locked shards.
///
/// A torrent lives in `shards[info_hash[0]]`; an empty info hash goes to
/// shard 0. Readers of one shard proceed concurrently and a writer only
/// blocks its own shard, so the other 255 stay available.
///
/// # Example
///
/// ```rust
/// use simple_tracker::tracker::structs::info_hash::InfoHash;
/// use simple_tracker::tracker::structs::torrent_sharding::TorrentSharding;
///
/// let sharding = TorrentSharding::new();
/// assert!(!sharding.contains_torrent(&InfoHash(b"unknown".to_vec())));
/// assert_eq!(sharding.get_torrents_amount(), 0);
/// ```
#[derive(Debug)]
pub struct TorrentSharding {
    /// Shard assignment: `shards[info_hash.shard_index()]`
    pub shards: [Arc<RwLock<BTreeMap<InfoHash, TorrentEntry>>>; 256],
}
