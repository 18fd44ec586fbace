use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TrackerConfig {
    /// Announce interval handed to clients, in seconds.
    pub request_interval: u64,
    /// Seconds between two stale peer sweeps.
    pub peers_cleanup_interval: u64,
    /// Drop a peer as soon as it announces `stopped`.
    pub remove_stopped_peers: bool,
}
