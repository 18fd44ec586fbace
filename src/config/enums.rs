//! Configuration enumerations.

/// Errors raised while reading, writing or checking a configuration.
pub mod configuration_error;
