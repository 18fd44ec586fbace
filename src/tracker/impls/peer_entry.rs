use std::io;
use std::io::Write;
use std::net::IpAddr;
use byteorder::{NetworkEndian, WriteBytesExt};
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::tracker::structs::peer_entry::PeerEntry;

impl PeerEntry {
    /// Writes the compact form: address octets followed by the port, big-endian.
    ///
    /// IPv4 peers take 6 bytes, IPv6 peers 18.
    pub fn write_compact(&self, bytes: &mut impl Write) -> Result<(), io::Error> {
        match self.ip {
            IpAddr::V4(ip) => bytes.write_all(&ip.octets())?,
            IpAddr::V6(ip) => bytes.write_all(&ip.octets())?,
        }
        bytes.write_u16::<NetworkEndian>(self.port)?;
        Ok(())
    }

    /// Splits peers into the compact `peers` (IPv4) and `peers6` (IPv6) strings.
    pub fn compact(peers: &[PeerEntry]) -> Result<(Vec<u8>, Vec<u8>), io::Error> {
        let mut peers_ipv4 = Vec::with_capacity(peers.len() * 6);
        let mut peers_ipv6 = Vec::new();
        for peer in peers {
            match peer.ip {
                IpAddr::V4(_) => peer.write_compact(&mut peers_ipv4)?,
                IpAddr::V6(_) => peer.write_compact(&mut peers_ipv6)?,
            }
        }
        Ok((peers_ipv4, peers_ipv6))
    }

    /// Dictionary form used by non-compact responses.
    pub fn to_bencode(&self) -> BencodeValue {
        let mut entries = vec![
            ("ip", BencodeValue::string(&self.ip.to_string())),
            ("port", BencodeValue::from(self.port)),
        ];
        if let Some(peer_id) = &self.peer_id {
            entries.push(("peer id", BencodeValue::bytes(peer_id.0.clone())));
        }
        BencodeValue::dictionary(entries)
    }
}
