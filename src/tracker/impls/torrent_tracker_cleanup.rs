use std::sync::Arc;
use std::time::{Duration, Instant};
use log::{debug, info};
use tokio::sync::watch;
use crate::tracker::structs::cleanup_stats::CleanupStats;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    /// Runs a cleanup pass every `peers_cleanup_interval` seconds until the
    /// shutdown flag turns `true` or its sender is dropped.
    ///
    /// The flag is also checked between shards, so a pass in progress stops
    /// at the next shard boundary.
    pub async fn cleanup_task(self: Arc<Self>, mut shutdown: watch::Receiver<bool>)
    {
        let period = Duration::from_secs(self.config.tracker_config.peers_cleanup_interval.max(1));
        let stop = shutdown.clone();
        let mut interval = tokio::time::interval(period);
        interval.tick().await;

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let now = Instant::now();
                    let mut stats = CleanupStats::default();
                    for shard in 0..=u8::MAX {
                        if *stop.borrow() {
                            info!("[PEERS] Cleanup interrupted by shutdown");
                            stats.apply_to_tracker(&self);
                            return;
                        }
                        stats.merge(self.cleanup_shard(shard, now));
                    }
                    stats.apply_to_tracker(&self);
                    if !stats.is_empty() {
                        info!("[PEERS] Removed {} stale peers and {} empty torrents", stats.peers, stats.torrents);
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *stop.borrow() {
                        info!("[BOOT] Shutting down thread for peers cleanup...");
                        return;
                    }
                }
            }
        }
    }

    /// One full pass over all shards, treating `now` as the current time.
    ///
    /// Updates the tracker counters and returns what was removed.
    #[tracing::instrument(level = "debug")]
    pub fn remove_stale_peers(&self, now: Instant) -> CleanupStats
    {
        let mut stats = CleanupStats::default();
        for shard in 0..=u8::MAX {
            stats.merge(self.cleanup_shard(shard, now));
        }
        stats.apply_to_tracker(self);
        stats
    }

    /// Removes stale peers from a single shard without touching the counters.
    ///
    /// Candidates are collected under the read lock; each one is checked again
    /// under the write lock, since an announce may have refreshed it or a
    /// removal may have dropped it in between.
    pub(crate) fn cleanup_shard(&self, shard: u8, now: Instant) -> CleanupStats
    {
        let mut stats = CleanupStats::default();
        let shard_lock = self.torrents_sharding.get_shard(shard);

        let expired: Vec<(InfoHash, Vec<PeerId>)> = {
            let shard_read = shard_lock.read();
            shard_read.iter()
                .filter_map(|(info_hash, entry)| {
                    let stale: Vec<PeerId> = entry.peers.iter()
                        .filter(|(_, peer)| peer.is_stale(now))
                        .map(|(peer_id, _)| peer_id.clone())
                        .collect();
                    if stale.is_empty() && !entry.peers.is_empty() {
                        None
                    } else {
                        Some((info_hash.clone(), stale))
                    }
                })
                .collect()
        };

        if expired.is_empty() {
            return stats;
        }

        let mut shard_write = shard_lock.write();
        for (info_hash, peer_ids) in expired {
            let Some(torrent_entry) = shard_write.get_mut(&info_hash) else {
                debug!("[PEERS] Torrent {info_hash} disappeared before cleanup, skipping");
                continue;
            };
            for peer_id in peer_ids {
                if torrent_entry.peers.get(&peer_id).is_some_and(|peer| peer.is_stale(now)) {
                    torrent_entry.peers.remove(&peer_id);
                    stats.peers += 1;
                }
            }
            if torrent_entry.peers.is_empty() {
                shard_write.remove(&info_hash);
                stats.torrents += 1;
            }
        }

        if !stats.is_empty() {
            debug!("[PEERS] Shard: {shard} - Torrents: {} - Peers: {}", stats.torrents, stats.peers);
        }
        stats
    }
}
