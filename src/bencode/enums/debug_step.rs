use crate::bencode::enums::bencode_value::BencodeValue;

#[derive(Debug, Clone, Copy)]
pub(crate) enum DebugStep<'a> {
    Value(&'a BencodeValue),
    Key(&'a [u8]),
    Text(&'static str),
}
