#[cfg(test)]
mod common_tests {
    mod parse_query_tests {
        use crate::common::common::parse_query;

        #[test]
        fn test_parse_query_none() {
            assert!(parse_query(None).is_empty());
        }

        #[test]
        fn test_parse_query_binary_values() {
            let query = parse_query(Some("info_hash=%00%FF%20abc&peer_id=-XX0001-"));
            assert_eq!(query["info_hash"], vec![vec![0x00, 0xFF, 0x20, b'a', b'b', b'c']]);
            assert_eq!(query["peer_id"], vec![b"-XX0001-".to_vec()]);
        }

        #[test]
        fn test_parse_query_lowercases_keys() {
            let query = parse_query(Some("PORT=6881"));
            assert_eq!(query["port"], vec![b"6881".to_vec()]);
        }

        #[test]
        fn test_parse_query_repeated_keys_keep_order() {
            let query = parse_query(Some("event=started&event=stopped"));
            assert_eq!(query["event"], vec![b"started".to_vec(), b"stopped".to_vec()]);
        }

        #[test]
        fn test_parse_query_value_with_equals_sign() {
            let query = parse_query(Some("key=a=b"));
            assert_eq!(query["key"], vec![b"a=b".to_vec()]);
        }

        #[test]
        fn test_parse_query_skips_empty_items_and_keys() {
            let query = parse_query(Some("&&=value&compact=0&"));
            assert_eq!(query.len(), 1);
            assert_eq!(query["compact"], vec![b"0".to_vec()]);
        }

        #[test]
        fn test_parse_query_key_without_value() {
            let query = parse_query(Some("no_peer_id&compact="));
            assert!(query["no_peer_id"].is_empty());
            assert_eq!(query["compact"], vec![Vec::<u8>::new()]);
        }
    }

    mod custom_error_tests {
        use crate::common::structs::custom_error::CustomError;

        #[test]
        fn test_custom_error_display() {
            let error = CustomError::new("something failed");
            assert_eq!(error.to_string(), "something failed");
            assert_eq!(error.message(), "something failed");
        }
    }
}
