//! Statistics enumerations.

/// Counter selector for `update_stats` and `set_stats`.
pub mod stats_event;
