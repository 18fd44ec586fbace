//! Tracker counters.
//!
//! Every counter is an `AtomicI64` inside [`StatsAtomics`](structs::stats_atomics::StatsAtomics),
//! updated through `TorrentTracker::update_stats` from whichever worker
//! observed the event. [`Stats`](structs::stats::Stats) is a plain snapshot
//! of those counters for logging and the status page.

/// Statistics event types.
pub mod enums;

/// Counter updates and snapshots on `TorrentTracker`.
pub mod impls;

/// Atomic counters and their snapshot.
pub mod structs;
