//! Statistics implementations.

/// Counter access on `TorrentTracker`.
pub mod torrent_tracker;

/// Construction of the counter set.
pub mod stats_atomics;
