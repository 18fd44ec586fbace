use std::collections::BTreeMap;
use std::fmt;
use num_bigint::BigInt;
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::bencode::enums::clone_frame::CloneFrame;
use crate::bencode::enums::debug_step::DebugStep;
use crate::bencode::enums::encode_step::EncodeStep;

impl BencodeValue {
    pub fn integer(value: impl Into<BigInt>) -> BencodeValue {
        BencodeValue::Integer(value.into())
    }

    pub fn bytes(value: impl Into<Vec<u8>>) -> BencodeValue {
        BencodeValue::ByteString(value.into())
    }

    pub fn string(value: &str) -> BencodeValue {
        BencodeValue::ByteString(value.as_bytes().to_vec())
    }

    pub fn list(items: impl IntoIterator<Item = BencodeValue>) -> BencodeValue {
        BencodeValue::List(items.into_iter().collect())
    }

    /// Builds an unordered dictionary; a repeated key keeps the last value.
    pub fn dictionary<K: Into<Vec<u8>>>(entries: impl IntoIterator<Item = (K, BencodeValue)>) -> BencodeValue {
        BencodeValue::Dictionary(entries.into_iter().map(|(key, value)| (key.into(), value)).collect::<BTreeMap<_, _>>())
    }

    /// Builds a dictionary that is emitted in exactly the given order.
    pub fn ordered_dictionary<K: Into<Vec<u8>>>(entries: impl IntoIterator<Item = (K, BencodeValue)>) -> BencodeValue {
        BencodeValue::OrderedDictionary(entries.into_iter().map(|(key, value)| (key.into(), value)).collect())
    }

    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            BencodeValue::Integer(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_integer().and_then(|value| i64::try_from(value).ok())
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            BencodeValue::ByteString(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    pub fn as_list(&self) -> Option<&[BencodeValue]> {
        match self {
            BencodeValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_dictionary(&self) -> bool {
        matches!(self, BencodeValue::Dictionary(_) | BencodeValue::OrderedDictionary(_))
    }

    /// Looks a key up in either dictionary variant. With duplicate keys in an
    /// ordered dictionary the first occurrence wins.
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&BencodeValue> {
        let key = key.as_ref();
        match self {
            BencodeValue::Dictionary(entries) => entries.get(key),
            BencodeValue::OrderedDictionary(entries) => entries.iter()
                .find(|(entry_key, _)| entry_key.as_slice() == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    /// Dictionary entries in the order they are emitted, `None` for
    /// non-dictionaries.
    pub fn dictionary_entries(&self) -> Option<Vec<(&[u8], &BencodeValue)>> {
        match self {
            BencodeValue::Dictionary(entries) => Some(entries.iter().map(|(key, value)| (key.as_slice(), value)).collect()),
            BencodeValue::OrderedDictionary(entries) => Some(entries.iter().map(|(key, value)| (key.as_slice(), value)).collect()),
            _ => None,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut buffer = Vec::new();
        self.encode_into(&mut buffer);
        buffer
    }

    pub fn encode_into(&self, buffer: &mut Vec<u8>) {
        let mut steps = vec![EncodeStep::Value(self)];
        while let Some(step) = steps.pop() {
            match step {
                EncodeStep::End => buffer.push(b'e'),
                EncodeStep::Key(key) => write_byte_string(buffer, key),
                EncodeStep::Value(BencodeValue::Integer(value)) => {
                    buffer.push(b'i');
                    buffer.extend_from_slice(value.to_string().as_bytes());
                    buffer.push(b'e');
                }
                EncodeStep::Value(BencodeValue::ByteString(bytes)) => write_byte_string(buffer, bytes),
                EncodeStep::Value(BencodeValue::List(items)) => {
                    buffer.push(b'l');
                    steps.push(EncodeStep::End);
                    steps.extend(items.iter().rev().map(EncodeStep::Value));
                }
                EncodeStep::Value(BencodeValue::Dictionary(entries)) => {
                    buffer.push(b'd');
                    steps.push(EncodeStep::End);
                    for (key, item) in entries.iter().rev() {
                        steps.push(EncodeStep::Value(item));
                        steps.push(EncodeStep::Key(key));
                    }
                }
                EncodeStep::Value(BencodeValue::OrderedDictionary(entries)) => {
                    buffer.push(b'd');
                    steps.push(EncodeStep::End);
                    for (key, item) in entries.iter().rev() {
                        steps.push(EncodeStep::Value(item));
                        steps.push(EncodeStep::Key(key));
                    }
                }
            }
        }
    }

    fn drain_children(&mut self, into: &mut Vec<BencodeValue>) {
        match self {
            BencodeValue::List(items) => into.append(items),
            BencodeValue::Dictionary(entries) => into.extend(std::mem::take(entries).into_values()),
            BencodeValue::OrderedDictionary(entries) => into.extend(entries.drain(..).map(|(_, value)| value)),
            BencodeValue::Integer(_) | BencodeValue::ByteString(_) => {}
        }
    }
}

fn write_byte_string(buffer: &mut Vec<u8>, bytes: &[u8]) {
    buffer.extend_from_slice(bytes.len().to_string().as_bytes());
    buffer.push(b':');
    buffer.extend_from_slice(bytes);
}

impl PartialEq for BencodeValue {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            let equal = match left {
                BencodeValue::Integer(a) => matches!(right, BencodeValue::Integer(b) if a == b),
                BencodeValue::ByteString(a) => matches!(right, BencodeValue::ByteString(b) if a == b),
                BencodeValue::List(a) => match right {
                    BencodeValue::List(b) if a.len() == b.len() => {
                        pending.extend(a.iter().zip(b.iter()));
                        true
                    }
                    _ => false,
                },
                BencodeValue::Dictionary(a) => {
                    push_dictionary_pairs(a.iter().map(|(key, value)| (key.as_slice(), value)), right, &mut pending)
                }
                BencodeValue::OrderedDictionary(a) => {
                    push_dictionary_pairs(a.iter().map(|(key, value)| (key.as_slice(), value)), right, &mut pending)
                }
            };
            if !equal {
                return false;
            }
        }
        true
    }
}

/// Pairs up `left` with the entries of `right` in emitted order. Returns
/// `false` when `right` is not a dictionary or the keys differ.
fn push_dictionary_pairs<'a>(
    left: impl ExactSizeIterator<Item = (&'a [u8], &'a BencodeValue)>,
    right: &'a BencodeValue,
    pending: &mut Vec<(&'a BencodeValue, &'a BencodeValue)>,
) -> bool {
    match right {
        BencodeValue::Dictionary(b) => {
            zip_dictionary_pairs(left, b.iter().map(|(key, value)| (key.as_slice(), value)), pending)
        }
        BencodeValue::OrderedDictionary(b) => {
            zip_dictionary_pairs(left, b.iter().map(|(key, value)| (key.as_slice(), value)), pending)
        }
        _ => false,
    }
}

fn zip_dictionary_pairs<'a>(
    left: impl ExactSizeIterator<Item = (&'a [u8], &'a BencodeValue)>,
    right: impl ExactSizeIterator<Item = (&'a [u8], &'a BencodeValue)>,
    pending: &mut Vec<(&'a BencodeValue, &'a BencodeValue)>,
) -> bool {
    if left.len() != right.len() {
        return false;
    }
    for ((key_a, value_a), (key_b, value_b)) in left.zip(right) {
        if key_a != key_b {
            return false;
        }
        pending.push((value_a, value_b));
    }
    true
}

impl Eq for BencodeValue {}

// Children are moved onto a heap stack first so that dropping a deeply
// nested value does not recurse once per level.
impl Drop for BencodeValue {
    fn drop(&mut self) {
        if matches!(self, BencodeValue::Integer(_) | BencodeValue::ByteString(_)) {
            return;
        }
        let mut stack = Vec::new();
        self.drain_children(&mut stack);
        while let Some(mut value) = stack.pop() {
            value.drain_children(&mut stack);
        }
    }
}

// Containers are rebuilt bottom-up; open containers wait on a heap stack
// instead of the call stack.
impl Clone for BencodeValue {
    fn clone(&self) -> Self {
        let mut current = match CloneFrame::open(self) {
            Ok(leaf) => return leaf,
            Err(frame) => frame,
        };
        let mut parents = Vec::new();
        loop {
            match current.next_child() {
                Some(child) => match CloneFrame::open(child) {
                    Ok(leaf) => current.accept(leaf),
                    Err(frame) => parents.push(std::mem::replace(&mut current, frame)),
                },
                None => {
                    let finished = current.finish();
                    match parents.pop() {
                        Some(parent) => {
                            current = parent;
                            current.accept(finished);
                        }
                        None => return finished,
                    }
                }
            }
        }
    }
}

impl fmt::Debug for BencodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut steps = vec![DebugStep::Value(self)];
        while let Some(step) = steps.pop() {
            match step {
                DebugStep::Text(text) => f.write_str(text)?,
                DebugStep::Key(key) => write!(f, "b\"{}\": ", key.escape_ascii())?,
                DebugStep::Value(BencodeValue::Integer(value)) => write!(f, "Integer({value})")?,
                DebugStep::Value(BencodeValue::ByteString(bytes)) => write!(f, "ByteString(b\"{}\")", bytes.escape_ascii())?,
                DebugStep::Value(BencodeValue::List(items)) => {
                    f.write_str("List([")?;
                    steps.push(DebugStep::Text("])"));
                    for (index, item) in items.iter().enumerate().rev() {
                        steps.push(DebugStep::Value(item));
                        if index > 0 {
                            steps.push(DebugStep::Text(", "));
                        }
                    }
                }
                DebugStep::Value(BencodeValue::Dictionary(entries)) => {
                    f.write_str("Dictionary({")?;
                    steps.push(DebugStep::Text("})"));
                    for (index, (key, item)) in entries.iter().enumerate().rev() {
                        steps.push(DebugStep::Value(item));
                        steps.push(DebugStep::Key(key));
                        if index > 0 {
                            steps.push(DebugStep::Text(", "));
                        }
                    }
                }
                DebugStep::Value(BencodeValue::OrderedDictionary(entries)) => {
                    f.write_str("OrderedDictionary({")?;
                    steps.push(DebugStep::Text("})"));
                    for (index, (key, item)) in entries.iter().enumerate().rev() {
                        steps.push(DebugStep::Value(item));
                        steps.push(DebugStep::Key(key));
                        if index > 0 {
                            steps.push(DebugStep::Text(", "));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

impl From<i64> for BencodeValue {
    fn from(value: i64) -> Self {
        BencodeValue::Integer(BigInt::from(value))
    }
}

impl From<u64> for BencodeValue {
    fn from(value: u64) -> Self {
        BencodeValue::Integer(BigInt::from(value))
    }
}

impl From<u16> for BencodeValue {
    fn from(value: u16) -> Self {
        BencodeValue::Integer(BigInt::from(value))
    }
}

impl From<BigInt> for BencodeValue {
    fn from(value: BigInt) -> Self {
        BencodeValue::Integer(value)
    }
}

impl From<&str> for BencodeValue {
    fn from(value: &str) -> Self {
        BencodeValue::string(value)
    }
}

impl From<String> for BencodeValue {
    fn from(value: String) -> Self {
        BencodeValue::ByteString(value.into_bytes())
    }
}

impl From<Vec<u8>> for BencodeValue {
    fn from(value: Vec<u8>) -> Self {
        BencodeValue::ByteString(value)
    }
}

impl From<&[u8]> for BencodeValue {
    fn from(value: &[u8]) -> Self {
        BencodeValue::ByteString(value.to_vec())
    }
}
