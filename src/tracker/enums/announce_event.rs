use serde::{Deserialize, Serialize};

/// The `event` an announcing peer reported.
///
/// Serialized in lowercase, matching the query string spelling except for
/// `None`, which a client sends as `empty`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AnnounceEvent {
    #[default]
    None,
    Started,
    Stopped,
    Completed,
}
