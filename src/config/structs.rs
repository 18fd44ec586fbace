//! Configuration data structures.

/// Root configuration.
pub mod configuration;

/// One `[[http_server]]` block.
pub mod http_trackers_config;

/// The `[tracker_config]` block.
pub mod tracker_config;
