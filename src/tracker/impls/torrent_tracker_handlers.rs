use std::net::IpAddr;
use log::debug;
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::announce_error::AnnounceError;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_entry::PeerEntry;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::types::announce_query::AnnounceQuery;

/// Failure reason sent for every rejected announce.
pub const ANNOUNCE_FAILURE_REASON: &str = "Unwanted internal error or bad request";

impl TorrentTracker {
    #[tracing::instrument(level = "debug")]
    pub fn validate_announce(&self, remote_addr: Option<IpAddr>, query: &AnnounceQuery) -> Result<AnnounceQueryRequest, AnnounceError>
    {
        fn get_first<'a>(query: &'a AnnounceQuery, field: &str) -> Option<&'a [u8]> {
            query.get(field)
                .and_then(|values| values.first())
                .map(|value| value.as_slice())
        }

        fn get_required_bytes<'a>(query: &'a AnnounceQuery, field: &'static str) -> Result<&'a [u8], AnnounceError> {
            get_first(query, field)
                .filter(|value| !value.is_empty())
                .ok_or(AnnounceError::MissingField(field))
        }

        fn get_optional_string(query: &AnnounceQuery, field: &str) -> Option<String> {
            get_first(query, field).map(|value| String::from_utf8_lossy(value).into_owned())
        }

        let info_hash = get_required_bytes(query, "info_hash")?;
        let peer_id = get_required_bytes(query, "peer_id")?;
        let remote_addr = remote_addr.ok_or(AnnounceError::MissingField("ip"))?;
        let port_raw = get_required_bytes(query, "port")?;
        let port = std::str::from_utf8(port_raw)
            .ok()
            .and_then(|port| port.parse::<u16>().ok())
            .ok_or_else(|| AnnounceError::InvalidPort(String::from_utf8_lossy(port_raw).into_owned()))?;

        let event = get_first(query, "event").and_then(AnnounceEvent::from_query_value);
        let compact = get_first(query, "compact") != Some(b"0".as_slice());
        let no_peer_id = match query.get("no_peer_id") {
            None => false,
            Some(values) => values.first().is_none_or(|value| value.as_slice() == b"1"),
        };

        Ok(AnnounceQueryRequest {
            info_hash: InfoHash::from(info_hash),
            peer_id: PeerId::from(peer_id),
            remote_addr,
            port,
            event,
            uploaded: get_optional_string(query, "uploaded"),
            downloaded: get_optional_string(query, "downloaded"),
            left: get_optional_string(query, "left"),
            corrupt: get_optional_string(query, "corrupt"),
            compact,
            no_peer_id,
        })
    }

    /// Validates the announce and applies it to the registry.
    ///
    /// A `stopped` announce removes the peer instead of storing it when
    /// `remove_stopped_peers` is enabled.
    #[tracing::instrument(level = "debug")]
    pub fn handle_announce(&self, remote_addr: Option<IpAddr>, query: &AnnounceQuery) -> Result<AnnounceQueryRequest, AnnounceError>
    {
        let request = self.validate_announce(remote_addr, query)?;
        if request.event == Some(AnnounceEvent::Stopped) && self.config.tracker_config.remove_stopped_peers {
            debug!("[HANDLE ANNOUNCE] Removing stopped peer {} from infohash {}", request.peer_id, request.info_hash);
            self.remove_torrent_peer(&request.info_hash, &request.peer_id);
        } else {
            debug!("[HANDLE ANNOUNCE] Adding to infohash {} peerid {}", request.info_hash, request.peer_id);
            self.upsert_torrent_peer(&request);
        }
        Ok(request)
    }

    /// Handles an announce end to end and returns the bencoded response body.
    ///
    /// Never fails: a rejected announce produces a `failure reason` body.
    #[tracing::instrument(level = "debug")]
    pub fn announce_response(&self, remote_addr: Option<IpAddr>, query: &AnnounceQuery) -> Vec<u8>
    {
        let response = self.handle_announce(remote_addr, query)
            .map_err(|error| error.to_string())
            .and_then(|request| self.announce_success(&request));

        match response {
            Ok(body) => {
                self.update_stats(StatsEvent::AnnouncesHandled, 1);
                body.encode()
            }
            Err(reason) => {
                debug!("[HANDLE ANNOUNCE] Rejected announce from {remote_addr:?}: {reason}");
                self.update_stats(StatsEvent::AnnouncesFailed, 1);
                announce_failure().encode()
            }
        }
    }

    fn announce_success(&self, request: &AnnounceQueryRequest) -> Result<BencodeValue, String>
    {
        let interval = BencodeValue::from(self.config.tracker_config.request_interval);
        let peers = self.list_torrent_peers(&request.info_hash, request.compact, !request.no_peer_id);

        if !request.compact {
            return Ok(BencodeValue::dictionary([
                ("interval", interval),
                ("peers", BencodeValue::list(peers.iter().map(PeerEntry::to_bencode))),
            ]));
        }

        let (peers_ipv4, peers_ipv6) = PeerEntry::compact(&peers).map_err(|error| error.to_string())?;
        let mut response = vec![
            ("interval", interval),
            ("peers", BencodeValue::bytes(peers_ipv4)),
        ];
        if !peers_ipv6.is_empty() {
            response.push(("peers6", BencodeValue::bytes(peers_ipv6)));
        }
        Ok(BencodeValue::dictionary(response))
    }
}

/// The body sent for a rejected announce.
pub fn announce_failure() -> BencodeValue
{
    BencodeValue::dictionary([("failure reason", BencodeValue::string(ANNOUNCE_FAILURE_REASON))])
}
