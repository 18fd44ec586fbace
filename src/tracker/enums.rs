//! Enumerations for tracker operations.

/// Announce event types from the BitTorrent protocol.
///
/// - `None` - regular update, or the literal `empty`
/// - `Started` - download started
/// - `Stopped` - peer is leaving the swarm
/// - `Completed` - download finished
pub mod announce_event;

/// Reasons an announce can be rejected.
pub mod announce_error;
