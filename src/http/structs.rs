//! HTTP data structures.

/// State attached to every HTTP worker.
pub mod http_service_data;
