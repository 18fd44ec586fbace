use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::torrent_sharding::TorrentSharding;

/// Tracker state shared between the HTTP workers and background tasks.
///
/// Cheap to share behind an `Arc`; all interior state is either sharded
/// behind locks or atomic.
#[derive(Debug)]
pub struct TorrentTracker {
    pub config: Arc<Configuration>,
    pub torrents_sharding: Arc<TorrentSharding>,
    pub stats: Arc<StatsAtomics>,
}
