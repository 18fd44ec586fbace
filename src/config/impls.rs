//! Configuration implementations.

/// Loading, saving and validating `Configuration`.
pub mod configuration;

/// Display for `ConfigurationError`.
pub mod configuration_error;

/// Defaults for the HTTP server block.
pub mod http_trackers_config;

/// Defaults for the tracker block.
pub mod tracker_config;
