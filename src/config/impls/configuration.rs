use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::tracker_config::TrackerConfig;

const LOG_LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            tracker_config: TrackerConfig::default(),
            http_server: vec![HttpTrackersConfig::default()],
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError),
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::EncodeError)?;
        Self::save_file(path, config_toml)
    }

    /// Loads and validates the configuration at `path`.
    ///
    /// When the file is missing or unreadable and `create` is set, the
    /// defaults are written to `path` and an error is still returned so the
    /// operator can review the file before the first start.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and start the tracker again, exiting now...");
                        Err(CustomError::new(&format!("created {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("[VALIDATE] {error}");
            return Err(CustomError::new(&error.to_string()));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigurationError::ValidationError(format!("unknown log_level '{}'", self.log_level)));
        }
        if self.log_console_interval == 0 {
            return Err(ConfigurationError::ValidationError(String::from("log_console_interval must be greater than 0")));
        }
        if self.tracker_config.request_interval == 0 {
            return Err(ConfigurationError::ValidationError(String::from("[tracker_config] request_interval must be greater than 0")));
        }
        if self.tracker_config.peers_cleanup_interval == 0 {
            return Err(ConfigurationError::ValidationError(String::from("[tracker_config] peers_cleanup_interval must be greater than 0")));
        }
        for http_server in self.http_server.iter().filter(|http_server| http_server.enabled) {
            if http_server.bind_address.parse::<SocketAddr>().is_err() {
                return Err(ConfigurationError::ValidationError(format!("[http_server] invalid bind_address '{}'", http_server.bind_address)));
            }
            if http_server.threads == 0 {
                return Err(ConfigurationError::ValidationError(format!("[http_server] {} threads must be greater than 0", http_server.bind_address)));
            }
        }
        Ok(())
    }
}
