//! Enumerations for the bencode codec.

/// The closed set of bencode values.
pub mod bencode_value;

/// Open-container frames of the iterative `Clone`.
pub mod clone_frame;

/// Pending work items of the iterative `Debug` formatter.
pub mod debug_step;

/// Errors reported while decoding.
pub mod decode_error;

/// Open-container frames on the decode stack.
pub mod decode_frame;

/// Pending work items of the iterative encoder.
pub mod encode_step;
