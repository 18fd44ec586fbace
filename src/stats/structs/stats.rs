use serde::{Deserialize, Serialize};

/// Point-in-time copy of [`StatsAtomics`](crate::stats::structs::stats_atomics::StatsAtomics).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub started: i64,
    pub torrents: i64,
    pub peers: i64,
    pub announces_handled: i64,
    pub announces_failed: i64,
    pub status_handled: i64,
    pub not_found: i64,
    pub torrents_evicted: i64,
    pub peers_evicted: i64,
}
