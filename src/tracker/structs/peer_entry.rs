use std::net::IpAddr;
use crate::tracker::structs::peer_id::PeerId;

/// A peer as listed back to an announcing client.
///
/// `peer_id` is only filled in for non-compact responses that did not ask
/// for `no_peer_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerEntry {
    pub peer_id: Option<PeerId>,
    pub ip: IpAddr,
    pub port: u16,
}
