/// Torrent identifier as sent in the `info_hash` query parameter.
///
/// Treated as an opaque byte string of any length; the usual 20-byte SHA-1
/// digest is not enforced. Displays and serializes as lowercase hex.
#[derive(PartialEq, Eq, Hash, Clone, Debug, PartialOrd, Ord)]
pub struct InfoHash(pub Vec<u8>);
