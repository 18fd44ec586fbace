use serde::{Deserialize, Serialize};

/// Selects the counter an update applies to.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum StatsEvent {
    Torrents,
    Peers,
    AnnouncesHandled,
    AnnouncesFailed,
    StatusHandled,
    NotFound,
    TorrentsEvicted,
    PeersEvicted,
}
