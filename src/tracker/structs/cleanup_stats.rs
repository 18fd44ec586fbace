use serde::Serialize;

/// What a cleanup pass removed.
#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanupStats {
    /// Torrents dropped because their last peer was removed.
    pub torrents: u64,
    /// Peers dropped for missing their announce deadline.
    pub peers: u64,
}
