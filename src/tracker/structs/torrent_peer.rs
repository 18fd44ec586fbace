use std::net::IpAddr;
use std::time::Instant;
use serde::Serialize;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::peer_id::PeerId;

/// The most recent announce received from one peer of a torrent.
///
/// The transfer counters are kept exactly as the client sent them and are
/// never interpreted.
#[derive(Serialize, PartialEq, Eq, Debug, Clone)]
pub struct TorrentPeer {
    pub peer_id: PeerId,
    pub ip: IpAddr,
    pub port: u16,
    #[serde(skip)]
    pub updated: Instant,
    pub event: AnnounceEvent,
    pub uploaded: Option<String>,
    pub downloaded: Option<String>,
    pub left: Option<String>,
    pub corrupt: Option<String>,
    /// Announce interval (seconds) that was in force when this peer was stored.
    pub interval: u64,
}
