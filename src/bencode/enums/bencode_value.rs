use std::collections::BTreeMap;
use num_bigint::BigInt;

/// A single bencode value.
///
/// Two dictionary variants exist. [`Dictionary`](BencodeValue::Dictionary)
/// has no meaningful order of its own, so it is emitted with keys in
/// ascending byte order as the format requires.
/// [`OrderedDictionary`](BencodeValue::OrderedDictionary) is emitted exactly
/// in the order given; the decoder produces it so that re-encoding a decoded
/// value gives back the original bytes.
///
/// Equality compares what would be emitted: a `Dictionary` and an
/// `OrderedDictionary` holding the same entries in the same emitted order
/// are equal.
///
/// `Clone`, `Debug`, `PartialEq`, `Drop` and encoding all walk the value
/// with a heap-allocated stack, so arbitrarily deep values decoded from the
/// wire are safe to copy, print, compare and drop.
pub enum BencodeValue {
    Integer(BigInt),
    ByteString(Vec<u8>),
    List(Vec<BencodeValue>),
    Dictionary(BTreeMap<Vec<u8>, BencodeValue>),
    OrderedDictionary(Vec<(Vec<u8>, BencodeValue)>),
}
