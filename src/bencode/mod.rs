//! Bencode codec.
//!
//! Bencoding is the serialization format spoken on the tracker wire
//! (BEP 3). It has four value kinds:
//!
//! - integers: `i<digits>e`, e.g. `i42e`, `i-7e`
//! - byte strings: `<length>:<bytes>`, e.g. `4:spam`
//! - lists: `l<values>e`
//! - dictionaries: `d<key><value>...e`, keys are byte strings
//!
//! Decoding runs over untrusted input, so the parser works on an explicit
//! stack of open containers instead of recursing once per nesting level,
//! and every malformed input is reported as a [`DecodeError`] rather than a
//! panic.
//!
//! # Example
//!
//! ```rust
//! use simple_tracker::bencode::bencode::{decode, encode};
//! use simple_tracker::bencode::enums::bencode_value::BencodeValue;
//!
//! let value = BencodeValue::dictionary([
//!     ("interval", BencodeValue::integer(120)),
//!     ("peers", BencodeValue::bytes(vec![127, 0, 0, 1, 0x1a, 0xe1])),
//! ]);
//! let bytes = encode(&value);
//! assert_eq!(decode(&bytes).unwrap(), value);
//! ```
//!
//! [`DecodeError`]: enums::decode_error::DecodeError

/// Value and error enumerations.
pub mod enums;

/// Implementation blocks for the codec types.
pub mod impls;

/// `encode` and `decode` entry points.
#[allow(clippy::module_inception)]
pub mod bencode;
