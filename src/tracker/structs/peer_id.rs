/// Peer identifier as sent in the `peer_id` query parameter.
///
/// Opaque bytes, ordered bytewise. Displays and serializes as lowercase hex.
#[derive(PartialEq, Eq, Hash, Clone, Debug, PartialOrd, Ord)]
pub struct PeerId(pub Vec<u8>);
