use std::sync::atomic::AtomicI64;
use chrono::Utc;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        StatsAtomics {
            started: AtomicI64::new(Utc::now().timestamp()),
            torrents: AtomicI64::new(0),
            peers: AtomicI64::new(0),
            announces_handled: AtomicI64::new(0),
            announces_failed: AtomicI64::new(0),
            status_handled: AtomicI64::new(0),
            not_found: AtomicI64::new(0),
            torrents_evicted: AtomicI64::new(0),
            peers_evicted: AtomicI64::new(0),
        }
    }
}

impl Default for StatsAtomics {
    fn default() -> Self {
        Self::new()
    }
}
