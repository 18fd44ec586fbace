use std::net::IpAddr;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

/// An announce that passed validation.
///
/// `event` is `None` when the query carried no recognised event, in which
/// case an existing peer keeps the event it had.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnounceQueryRequest {
    pub info_hash: InfoHash,
    pub peer_id: PeerId,
    pub remote_addr: IpAddr,
    pub port: u16,
    pub event: Option<AnnounceEvent>,
    pub uploaded: Option<String>,
    pub downloaded: Option<String>,
    pub left: Option<String>,
    pub corrupt: Option<String>,
    pub compact: bool,
    pub no_peer_id: bool,
}
