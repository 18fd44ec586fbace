use crate::bencode::enums::bencode_value::BencodeValue;

#[derive(Debug, Clone, Copy)]
pub(crate) enum EncodeStep<'a> {
    Value(&'a BencodeValue),
    Key(&'a [u8]),
    End,
}
