#[cfg(test)]
mod config_tests {
    mod configuration_tests {
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_defaults() {
            let config = Configuration::init();
            assert_eq!(config.log_level, "info");
            assert_eq!(config.log_console_interval, 60);
            assert_eq!(config.tracker_config.request_interval, 120);
            assert_eq!(config.tracker_config.peers_cleanup_interval, 60);
            assert!(!config.tracker_config.remove_stopped_peers);
            assert_eq!(config.http_server.len(), 1);
            assert_eq!(config.http_server[0].bind_address, "127.0.0.1:8080");
            assert_eq!(config.http_server[0].real_ip, "X-Real-IP");
        }

        #[test]
        fn test_defaults_validate() {
            assert!(Configuration::init().validate().is_ok());
        }

        #[test]
        fn test_load_partial_file_uses_defaults() {
            let config = Configuration::load(b"log_level = \"debug\"\n[tracker_config]\nrequest_interval = 30\n").unwrap();
            assert_eq!(config.log_level, "debug");
            assert_eq!(config.tracker_config.request_interval, 30);
            assert_eq!(config.tracker_config.peers_cleanup_interval, 60);
            assert_eq!(config.http_server.len(), 1);
        }

        #[test]
        fn test_load_http_servers() {
            let data = b"[[http_server]]\nbind_address = \"0.0.0.0:6969\"\n\n[[http_server]]\nenabled = false\nbind_address = \"[::]:6969\"\n";
            let config = Configuration::load(data).unwrap();
            assert_eq!(config.http_server.len(), 2);
            assert!(config.http_server[0].enabled);
            assert_eq!(config.http_server[0].threads, 4);
            assert!(!config.http_server[1].enabled);
        }

        #[test]
        fn test_load_rejects_broken_toml() {
            assert!(Configuration::load(b"log_level = ").is_err());
        }

        #[test]
        fn test_toml_round_trip() {
            let config = Configuration::init();
            let encoded = toml::to_string(&config).unwrap();
            assert_eq!(Configuration::load(encoded.as_bytes()).unwrap(), config);
        }
    }

    mod validation_tests {
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_unknown_log_level() {
            let mut config = Configuration::init();
            config.log_level = String::from("loud");
            assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
        }

        #[test]
        fn test_zero_intervals() {
            let mut config = Configuration::init();
            config.tracker_config.request_interval = 0;
            assert!(config.validate().is_err());

            let mut config = Configuration::init();
            config.tracker_config.peers_cleanup_interval = 0;
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_bad_bind_address_only_checked_when_enabled() {
            let mut config = Configuration::init();
            config.http_server[0].bind_address = String::from("not an address");
            assert!(config.validate().is_err());

            config.http_server[0].enabled = false;
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_validation_error_display() {
            let error = ConfigurationError::ValidationError(String::from("bad"));
            assert_eq!(error.to_string(), "invalid configuration: bad");
        }
    }
}
