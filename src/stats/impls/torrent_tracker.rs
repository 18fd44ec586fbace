use std::sync::atomic::{AtomicI64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            torrents: self.stats.torrents.load(Ordering::SeqCst),
            peers: self.stats.peers.load(Ordering::SeqCst),
            announces_handled: self.stats.announces_handled.load(Ordering::SeqCst),
            announces_failed: self.stats.announces_failed.load(Ordering::SeqCst),
            status_handled: self.stats.status_handled.load(Ordering::SeqCst),
            not_found: self.stats.not_found.load(Ordering::SeqCst),
            torrents_evicted: self.stats.torrents_evicted.load(Ordering::SeqCst),
            peers_evicted: self.stats.peers_evicted.load(Ordering::SeqCst),
        }
    }

    /// Adds `value` (which may be negative) to the selected counter.
    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        self.stats_counter(event).fetch_add(value, Ordering::SeqCst);
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64)
    {
        self.stats_counter(event).store(value, Ordering::SeqCst);
    }

    fn stats_counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::Torrents => &self.stats.torrents,
            StatsEvent::Peers => &self.stats.peers,
            StatsEvent::AnnouncesHandled => &self.stats.announces_handled,
            StatsEvent::AnnouncesFailed => &self.stats.announces_failed,
            StatsEvent::StatusHandled => &self.stats.status_handled,
            StatsEvent::NotFound => &self.stats.not_found,
            StatsEvent::TorrentsEvicted => &self.stats.torrents_evicted,
            StatsEvent::PeersEvicted => &self.stats.peers_evicted,
        }
    }
}
