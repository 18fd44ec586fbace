//! Configuration management module.
//!
//! The tracker reads a single TOML file (`config.toml` unless `--config`
//! points elsewhere):
//!
//! ```toml
//! log_level = "info"
//! log_console_interval = 60
//!
//! [tracker_config]
//! request_interval = 120
//! peers_cleanup_interval = 60
//! remove_stopped_peers = false
//!
//! [[http_server]]
//! enabled = true
//! bind_address = "127.0.0.1:8080"
//! real_ip = "X-Real-IP"
//! keep_alive = 60
//! request_timeout = 15
//! disconnect_timeout = 15
//! threads = 4
//! ```
//!
//! Missing keys fall back to the values shown above. With `--create-config`
//! a missing or broken file is replaced by these defaults.

/// Configuration enumerations.
pub mod enums;

/// Configuration loading, saving and validation.
pub mod impls;

/// Configuration data structures.
pub mod structs;

/// Unit tests for configuration.
pub mod tests;
