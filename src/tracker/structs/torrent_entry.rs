use std::collections::BTreeMap;
use std::time::Instant;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_peer::TorrentPeer;

/// All peers currently known for one torrent.
///
/// A `BTreeMap` keeps iteration in ascending peer id order, which is the
/// order peers are returned in announce responses.
#[derive(Clone, Debug)]
pub struct TorrentEntry {
    pub peers: BTreeMap<PeerId, TorrentPeer>,
    pub updated: Instant,
}
