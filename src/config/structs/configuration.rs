use serde::{Deserialize, Serialize};
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::tracker_config::TrackerConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Configuration {
    /// One of `off`, `trace`, `debug`, `info`, `warn`, `error`.
    pub log_level: String,
    /// Seconds between statistics lines on the console.
    pub log_console_interval: u64,
    pub tracker_config: TrackerConfig,
    pub http_server: Vec<HttpTrackersConfig>,
}
