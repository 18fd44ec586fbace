use std::sync::atomic::AtomicI64;

/// Live counters shared by all workers.
///
/// `torrents` and `peers` follow the registry contents; the remaining
/// counters only ever grow.
#[derive(Debug)]
pub struct StatsAtomics {
    /// Unix timestamp of tracker start.
    pub started: AtomicI64,
    pub torrents: AtomicI64,
    pub peers: AtomicI64,
    pub announces_handled: AtomicI64,
    pub announces_failed: AtomicI64,
    pub status_handled: AtomicI64,
    pub not_found: AtomicI64,
    pub torrents_evicted: AtomicI64,
    pub peers_evicted: AtomicI64,
}
