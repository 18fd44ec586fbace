use thiserror::Error;

/// Why an announce was rejected before touching the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnnounceError {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("invalid port '{0}'")]
    InvalidPort(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let error = AnnounceError::MissingField("peer_id");
        assert_eq!(error.to_string(), "missing required field 'peer_id'");
    }

    #[test]
    fn test_invalid_port_display() {
        let error = AnnounceError::InvalidPort("70000".to_string());
        assert_eq!(error.to_string(), "invalid port '70000'");
    }
}
