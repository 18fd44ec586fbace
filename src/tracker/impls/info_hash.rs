use std::fmt;
use std::fmt::Formatter;
use crate::tracker::structs::info_hash::InfoHash;

impl fmt::Display for InfoHash {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

impl From<&[u8]> for InfoHash {
    fn from(data: &[u8]) -> InfoHash {
        InfoHash(data.to_vec())
    }
}

impl From<Vec<u8>> for InfoHash {
    fn from(data: Vec<u8>) -> InfoHash {
        InfoHash(data)
    }
}

impl serde::ser::Serialize for InfoHash {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(&self.0))
    }
}

impl InfoHash {
    /// Index of the shard holding this torrent.
    #[inline]
    pub fn shard_index(&self) -> u8 {
        self.0.first().copied().unwrap_or(0)
    }
}
