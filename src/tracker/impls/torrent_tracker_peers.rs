use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::time::Instant;
use log::debug;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_entry::PeerEntry;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_entry::TorrentEntry;
use crate::tracker::structs::torrent_peer::TorrentPeer;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    /// Stores the announcing peer, creating the torrent when it is new.
    ///
    /// An existing record for the same peer id is replaced. When the request
    /// carries no event, the event of the replaced record is kept; a peer seen
    /// for the first time without an event gets `AnnounceEvent::None`.
    #[tracing::instrument(level = "debug")]
    pub fn upsert_torrent_peer(&self, request: &AnnounceQueryRequest) -> TorrentPeer
    {
        let interval = self.config.tracker_config.request_interval;
        let (torrent_peer, torrent_created, peer_created) = {
            let mut shard = self.torrents_sharding.get_torrent_shard(&request.info_hash).write();
            let now = Instant::now();
            let (torrent_entry, torrent_created) = match shard.entry(request.info_hash.clone()) {
                Entry::Vacant(vacant) => (vacant.insert(TorrentEntry::new()), true),
                Entry::Occupied(occupied) => (occupied.into_mut(), false),
            };
            let previous_event = torrent_entry.peers.get(&request.peer_id).map(|peer| peer.event);
            let torrent_peer = TorrentPeer {
                peer_id: request.peer_id.clone(),
                ip: request.remote_addr,
                port: request.port,
                updated: now,
                event: request.event.or(previous_event).unwrap_or(AnnounceEvent::None),
                uploaded: request.uploaded.clone(),
                downloaded: request.downloaded.clone(),
                left: request.left.clone(),
                corrupt: request.corrupt.clone(),
                interval,
            };
            let peer_created = torrent_entry.peers.insert(request.peer_id.clone(), torrent_peer.clone()).is_none();
            torrent_entry.updated = now;
            (torrent_peer, torrent_created, peer_created)
        };

        if torrent_created {
            self.update_stats(StatsEvent::Torrents, 1);
        }
        if peer_created {
            self.update_stats(StatsEvent::Peers, 1);
        }
        torrent_peer
    }

    /// Removes a peer; drops the torrent when it was the last one.
    #[tracing::instrument(level = "debug")]
    pub fn remove_torrent_peer(&self, info_hash: &InfoHash, peer_id: &PeerId) -> Option<TorrentPeer>
    {
        let (removed, torrent_removed) = {
            let mut shard = self.torrents_sharding.get_torrent_shard(info_hash).write();
            let Entry::Occupied(mut entry) = shard.entry(info_hash.clone()) else {
                return None;
            };
            let removed = entry.get_mut().peers.remove(peer_id);
            let torrent_removed = entry.get().peers.is_empty();
            if torrent_removed {
                entry.remove();
            }
            (removed, torrent_removed)
        };

        if removed.is_some() {
            debug!("[PEERS] Removed peer {peer_id} from torrent {info_hash}");
            self.update_stats(StatsEvent::Peers, -1);
        }
        if torrent_removed {
            self.update_stats(StatsEvent::Torrents, -1);
        }
        removed
    }

    /// Peers of a torrent in ascending peer id order.
    ///
    /// Peer ids are only included for non-compact listings. An unknown
    /// torrent yields an empty list.
    #[tracing::instrument(level = "debug")]
    pub fn list_torrent_peers(&self, info_hash: &InfoHash, compact: bool, include_peer_id: bool) -> Vec<PeerEntry>
    {
        let include_peer_id = include_peer_id && !compact;
        self.torrents_sharding.get_torrent_shard(info_hash)
            .read()
            .get(info_hash)
            .map(|entry| {
                entry.peers.values()
                    .map(|peer| peer.peer_entry(include_peer_id))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[tracing::instrument(level = "debug")]
    pub fn get_torrent(&self, info_hash: &InfoHash) -> Option<TorrentEntry>
    {
        self.torrents_sharding.get_torrent_shard(info_hash).read().get(info_hash).cloned()
    }

    pub fn get_torrents_amount(&self) -> u64
    {
        self.torrents_sharding.get_torrents_amount()
    }

    pub fn get_peers_amount(&self) -> u64
    {
        self.torrents_sharding.get_peers_amount()
    }

    /// Read-only copy of the registry for status reporting.
    pub fn get_torrents_snapshot(&self) -> BTreeMap<InfoHash, BTreeMap<PeerId, TorrentPeer>>
    {
        self.torrents_sharding.get_all_peers()
    }
}
