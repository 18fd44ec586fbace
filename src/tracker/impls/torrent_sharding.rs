use std::collections::BTreeMap;
use std::sync::Arc;
use parking_lot::RwLock;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_entry::TorrentEntry;
use crate::tracker::structs::torrent_peer::TorrentPeer;
use crate::tracker::structs::torrent_sharding::TorrentSharding;

impl Default for TorrentSharding {
    fn default() -> Self {
        Self::new()
    }
}

impl TorrentSharding {
    #[tracing::instrument(level = "debug")]
    pub fn new() -> TorrentSharding {
        TorrentSharding {
            shards: std::array::from_fn(|_| Arc::new(RwLock::new(BTreeMap::new()))),
        }
    }

    #[inline(always)]
    pub fn get_shard(&self, shard: u8) -> &Arc<RwLock<BTreeMap<InfoHash, TorrentEntry>>> {
        &self.shards[shard as usize]
    }

    #[inline(always)]
    pub fn get_torrent_shard(&self, info_hash: &InfoHash) -> &Arc<RwLock<BTreeMap<InfoHash, TorrentEntry>>> {
        self.get_shard(info_hash.shard_index())
    }

    pub fn contains_torrent(&self, info_hash: &InfoHash) -> bool {
        self.get_torrent_shard(info_hash).read().contains_key(info_hash)
    }

    pub fn contains_peer(&self, info_hash: &InfoHash, peer_id: &PeerId) -> bool {
        self.get_torrent_shard(info_hash)
            .read()
            .get(info_hash)
            .is_some_and(|entry| entry.peers.contains_key(peer_id))
    }

    pub fn get_torrents_amount(&self) -> u64 {
        self.shards.iter()
            .map(|shard| shard.read().len() as u64)
            .sum()
    }

    pub fn get_peers_amount(&self) -> u64 {
        self.shards.iter()
            .map(|shard| {
                shard.read().values().map(|entry| entry.peers.len() as u64).sum::<u64>()
            })
            .sum()
    }

    /// Copies out every torrent with its peers.
    ///
    /// Shards are read one after another, so each shard is internally
    /// consistent but the snapshot as a whole is not a single point in time.
    pub fn get_all_peers(&self) -> BTreeMap<InfoHash, BTreeMap<PeerId, TorrentPeer>> {
        let mut torrents = BTreeMap::new();
        for shard in &self.shards {
            let shard_data = shard.read();
            torrents.extend(shard_data.iter().map(|(info_hash, entry)| (info_hash.clone(), entry.peers.clone())));
        }
        torrents
    }
}
