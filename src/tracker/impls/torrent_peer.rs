use std::time::{Duration, Instant};
use crate::tracker::structs::peer_entry::PeerEntry;
use crate::tracker::structs::torrent_peer::TorrentPeer;

impl TorrentPeer {
    /// A peer is stale once more than two of its announce intervals have
    /// passed since it was last seen. Exactly two intervals is still alive.
    #[inline]
    pub fn is_stale(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.updated) > Duration::from_secs(self.interval.saturating_mul(2))
    }

    pub fn peer_entry(&self, include_peer_id: bool) -> PeerEntry {
        PeerEntry {
            peer_id: include_peer_id.then(|| self.peer_id.clone()),
            ip: self.ip,
            port: self.port,
        }
    }
}
