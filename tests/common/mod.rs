#![allow(dead_code)]
use rand::RngExt;
use std::net::IpAddr;
use std::sync::Arc;
use tempfile::TempDir;
use simple_tracker::config::structs::configuration::Configuration;
use simple_tracker::config::structs::http_trackers_config::HttpTrackersConfig;
use simple_tracker::tracker::structs::info_hash::InfoHash;
use simple_tracker::tracker::structs::peer_id::PeerId;
use simple_tracker::tracker::structs::torrent_tracker::TorrentTracker;
use simple_tracker::tracker::types::announce_query::AnnounceQuery;

pub type TestTracker = Arc<TorrentTracker>;
pub type TestConfig = Arc<Configuration>;

pub fn create_test_config() -> TestConfig {
    Arc::new(Configuration::init())
}

pub fn create_test_http_config() -> Arc<HttpTrackersConfig> {
    Arc::new(HttpTrackersConfig {
        enabled: true,
        bind_address: "127.0.0.1:8080".to_string(),
        real_ip: "X-Real-IP".to_string(),
        keep_alive: 5,
        request_timeout: 10,
        disconnect_timeout: 5,
        threads: 1,
    })
}

pub fn create_test_tracker() -> TestTracker {
    Arc::new(TorrentTracker::new(create_test_config()))
}

pub fn create_test_tracker_with(modify: impl FnOnce(&mut Configuration)) -> TestTracker {
    let mut config = Configuration::init();
    modify(&mut config);
    Arc::new(TorrentTracker::new(Arc::new(config)))
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn random_info_hash() -> InfoHash {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    InfoHash(bytes.to_vec())
}

pub fn random_peer_id() -> PeerId {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    PeerId(bytes.to_vec())
}

/// Builds the query map the HTTP layer would hand over for an announce.
pub fn announce_query(info_hash: &InfoHash, peer_id: &PeerId, port: u16) -> AnnounceQuery {
    let mut query = AnnounceQuery::new();
    query.insert("info_hash".to_string(), vec![info_hash.0.clone()]);
    query.insert("peer_id".to_string(), vec![peer_id.0.clone()]);
    query.insert("port".to_string(), vec![port.to_string().into_bytes()]);
    query
}

pub fn with_field(mut query: AnnounceQuery, key: &str, value: &str) -> AnnounceQuery {
    query.insert(key.to_string(), vec![value.as_bytes().to_vec()]);
    query
}

/// Percent-encodes every byte, the way clients send binary hashes.
pub fn percent_encode_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("%{byte:02X}")).collect()
}

pub fn announce_uri(info_hash: &InfoHash, peer_id: &PeerId, port: u16, extra: &str) -> String {
    format!(
        "/announce?info_hash={}&peer_id={}&port={port}{extra}",
        percent_encode_bytes(&info_hash.0),
        percent_encode_bytes(&peer_id.0)
    )
}

pub fn ip(address: &str) -> IpAddr {
    address.parse().expect("valid test address")
}
