//! Implementations for common structs.

/// Constructor and `Error` impl for `CustomError`.
pub mod custom_error;
