use crate::bencode::enums::bencode_value::BencodeValue;

/// A container that has been opened but not yet closed while decoding.
#[derive(Debug)]
pub(crate) enum DecodeFrame {
    List {
        position: usize,
        items: Vec<BencodeValue>,
    },
    Dictionary {
        position: usize,
        entries: Vec<(Vec<u8>, BencodeValue)>,
        pending_key: Option<Vec<u8>>,
    },
}
