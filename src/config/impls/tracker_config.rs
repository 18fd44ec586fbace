use crate::config::structs::tracker_config::TrackerConfig;

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            request_interval: 120,
            peers_cleanup_interval: 60,
            remove_stopped_peers: false,
        }
    }
}
