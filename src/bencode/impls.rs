//! Implementation blocks for the bencode codec types.

/// BencodeValue: constructors, accessors, conversions, equality, encoding.
pub mod bencode_value;

/// CloneFrame: rebuilding containers child by child.
pub mod clone_frame;

/// DecodeFrame: accumulating children and closing containers.
pub mod decode_frame;
