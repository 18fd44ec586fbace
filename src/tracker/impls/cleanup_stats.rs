use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::cleanup_stats::CleanupStats;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl CleanupStats {
    pub fn merge(&mut self, other: CleanupStats) {
        self.torrents += other.torrents;
        self.peers += other.peers;
    }

    pub fn is_empty(&self) -> bool {
        self.torrents == 0 && self.peers == 0
    }

    /// Moves the removed amounts from the live counters into the eviction counters.
    pub(crate) fn apply_to_tracker(&self, tracker: &TorrentTracker) {
        if self.torrents > 0 {
            let torrents = i64::try_from(self.torrents).unwrap_or(i64::MAX);
            tracker.update_stats(StatsEvent::Torrents, -torrents);
            tracker.update_stats(StatsEvent::TorrentsEvicted, torrents);
        }
        if self.peers > 0 {
            let peers = i64::try_from(self.peers).unwrap_or(i64::MAX);
            tracker.update_stats(StatsEvent::Peers, -peers);
            tracker.update_stats(StatsEvent::PeersEvicted, peers);
        }
    }
}
