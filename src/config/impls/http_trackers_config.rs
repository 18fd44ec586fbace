use crate::config::structs::http_trackers_config::HttpTrackersConfig;

impl Default for HttpTrackersConfig {
    fn default() -> Self {
        HttpTrackersConfig {
            enabled: true,
            bind_address: String::from("127.0.0.1:8080"),
            real_ip: String::from("X-Real-IP"),
            keep_alive: 60,
            request_timeout: 15,
            disconnect_timeout: 15,
            threads: 4,
        }
    }
}
