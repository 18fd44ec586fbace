use std::collections::HashMap;

/// Query parameters keyed by lowercased name.
///
/// Values are raw percent-decoded bytes; a key repeated in the query string
/// keeps every value in order of appearance.
pub type AnnounceQuery = HashMap<String, Vec<Vec<u8>>>;
