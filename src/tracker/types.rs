//! Type aliases for tracker input.

/// Decoded query string as handed over by the HTTP layer.
pub mod announce_query;
