use crate::bencode::enums::bencode_value::BencodeValue;
use crate::bencode::enums::decode_error::DecodeError;
use crate::bencode::enums::decode_frame::DecodeFrame;

impl DecodeFrame {
    pub(crate) fn list(position: usize) -> DecodeFrame {
        DecodeFrame::List { position, items: Vec::new() }
    }

    pub(crate) fn dictionary(position: usize) -> DecodeFrame {
        DecodeFrame::Dictionary { position, entries: Vec::new(), pending_key: None }
    }

    /// Offset of the byte that opened this container.
    pub(crate) fn position(&self) -> usize {
        match self {
            DecodeFrame::List { position, .. } | DecodeFrame::Dictionary { position, .. } => *position,
        }
    }

    /// Adds a finished child. Inside a dictionary children alternate between
    /// key and value, and keys must be byte strings.
    pub(crate) fn push(&mut self, mut value: BencodeValue, value_position: usize) -> Result<(), DecodeError> {
        match self {
            DecodeFrame::List { items, .. } => items.push(value),
            DecodeFrame::Dictionary { entries, pending_key, .. } => match pending_key.take() {
                Some(key) => entries.push((key, value)),
                None => match &mut value {
                    BencodeValue::ByteString(key) => *pending_key = Some(std::mem::take(key)),
                    _ => return Err(DecodeError::InvalidDictionaryKey { position: value_position }),
                },
            },
        }
        Ok(())
    }

    /// Closes the container at the `e` found at `end_position`.
    pub(crate) fn close(self, end_position: usize) -> Result<BencodeValue, DecodeError> {
        match self {
            DecodeFrame::List { items, .. } => Ok(BencodeValue::List(items)),
            DecodeFrame::Dictionary { entries, pending_key: None, .. } => Ok(BencodeValue::OrderedDictionary(entries)),
            DecodeFrame::Dictionary { pending_key: Some(_), .. } => Err(DecodeError::UnbalancedContainer { position: end_position }),
        }
    }
}
