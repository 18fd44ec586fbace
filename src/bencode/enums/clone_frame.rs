use std::collections::btree_map;
use std::collections::BTreeMap;
use std::slice;
use crate::bencode::enums::bencode_value::BencodeValue;

pub(crate) enum CloneFrame<'a> {
    List {
        items: slice::Iter<'a, BencodeValue>,
        built: Vec<BencodeValue>,
    },
    Dictionary {
        entries: btree_map::Iter<'a, Vec<u8>, BencodeValue>,
        pending_key: Option<Vec<u8>>,
        built: BTreeMap<Vec<u8>, BencodeValue>,
    },
    OrderedDictionary {
        entries: slice::Iter<'a, (Vec<u8>, BencodeValue)>,
        pending_key: Option<Vec<u8>>,
        built: Vec<(Vec<u8>, BencodeValue)>,
    },
}
