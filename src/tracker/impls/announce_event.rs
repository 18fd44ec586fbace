use std::fmt;
use std::fmt::Formatter;
use crate::tracker::enums::announce_event::AnnounceEvent;

impl AnnounceEvent {
    /// Maps an `event` query value onto an event.
    ///
    /// `empty` is the protocol spelling of "no event" and yields
    /// `Some(AnnounceEvent::None)`; anything unrecognised yields `None` so
    /// the previous event of the peer is kept.
    pub fn from_query_value(value: &[u8]) -> Option<AnnounceEvent> {
        match value {
            b"started" => Some(AnnounceEvent::Started),
            b"stopped" => Some(AnnounceEvent::Stopped),
            b"completed" => Some(AnnounceEvent::Completed),
            b"empty" => Some(AnnounceEvent::None),
            _ => None,
        }
    }
}

impl fmt::Display for AnnounceEvent {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            AnnounceEvent::None => write!(f, "none"),
            AnnounceEvent::Started => write!(f, "started"),
            AnnounceEvent::Stopped => write!(f, "stopped"),
            AnnounceEvent::Completed => write!(f, "completed"),
        }
    }
}
