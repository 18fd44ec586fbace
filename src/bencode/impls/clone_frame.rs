use std::collections::BTreeMap;
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::bencode::enums::clone_frame::CloneFrame;

impl<'a> CloneFrame<'a> {
    /// Clones a scalar straight away, or opens a frame for a container.
    pub(crate) fn open(value: &'a BencodeValue) -> Result<BencodeValue, CloneFrame<'a>> {
        match value {
            BencodeValue::Integer(value) => Ok(BencodeValue::Integer(value.clone())),
            BencodeValue::ByteString(bytes) => Ok(BencodeValue::ByteString(bytes.clone())),
            BencodeValue::List(items) => Err(CloneFrame::List {
                items: items.iter(),
                built: Vec::with_capacity(items.len()),
            }),
            BencodeValue::Dictionary(entries) => Err(CloneFrame::Dictionary {
                entries: entries.iter(),
                pending_key: None,
                built: BTreeMap::new(),
            }),
            BencodeValue::OrderedDictionary(entries) => Err(CloneFrame::OrderedDictionary {
                entries: entries.iter(),
                pending_key: None,
                built: Vec::with_capacity(entries.len()),
            }),
        }
    }

    /// Next child still to be cloned. For dictionaries the key is copied
    /// here and paired with the child in [`accept`](CloneFrame::accept).
    pub(crate) fn next_child(&mut self) -> Option<&'a BencodeValue> {
        match self {
            CloneFrame::List { items, .. } => items.next(),
            CloneFrame::Dictionary { entries, pending_key, .. } => entries.next().map(|(key, value)| {
                *pending_key = Some(key.clone());
                value
            }),
            CloneFrame::OrderedDictionary { entries, pending_key, .. } => entries.next().map(|(key, value)| {
                *pending_key = Some(key.clone());
                value
            }),
        }
    }

    pub(crate) fn accept(&mut self, value: BencodeValue) {
        match self {
            CloneFrame::List { built, .. } => built.push(value),
            CloneFrame::Dictionary { pending_key, built, .. } => {
                if let Some(key) = pending_key.take() {
                    built.insert(key, value);
                }
            }
            CloneFrame::OrderedDictionary { pending_key, built, .. } => {
                if let Some(key) = pending_key.take() {
                    built.push((key, value));
                }
            }
        }
    }

    pub(crate) fn finish(self) -> BencodeValue {
        match self {
            CloneFrame::List { built, .. } => BencodeValue::List(built),
            CloneFrame::Dictionary { built, .. } => BencodeValue::Dictionary(built),
            CloneFrame::OrderedDictionary { built, .. } => BencodeValue::OrderedDictionary(built),
        }
    }
}
