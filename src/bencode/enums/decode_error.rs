use thiserror::Error;

/// Reasons a byte buffer is not a single well-formed bencode value.
///
/// `position` is the byte offset at which the problem was detected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid type tag {byte:#04x} at byte {position}")]
    InvalidTypeTag { position: usize, byte: u8 },

    #[error("invalid integer at byte {position}")]
    InvalidInteger { position: usize },

    #[error("truncated or malformed string at byte {position}")]
    TruncatedString { position: usize },

    #[error("unbalanced container at byte {position}")]
    UnbalancedContainer { position: usize },

    #[error("unterminated value at byte {position}")]
    UnterminatedValue { position: usize },

    #[error("trailing data at byte {position}")]
    TrailingData { position: usize },

    #[error("dictionary key is not a byte string at byte {position}")]
    InvalidDictionaryKey { position: usize },
}
