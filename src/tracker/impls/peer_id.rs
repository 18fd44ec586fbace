use std::fmt;
use std::fmt::Formatter;
use crate::tracker::structs::peer_id::PeerId;

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

impl From<&[u8]> for PeerId {
    fn from(data: &[u8]) -> PeerId {
        PeerId(data.to_vec())
    }
}

impl From<Vec<u8>> for PeerId {
    fn from(data: Vec<u8>) -> PeerId {
        PeerId(data)
    }
}

impl serde::ser::Serialize for PeerId {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(&self.0))
    }
}
