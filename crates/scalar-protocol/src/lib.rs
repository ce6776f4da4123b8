//! scalar-protocol
//!
//! Wire-level encoding/decoding for the scalar market HTTP API.
//!
//! This crate turns JSON bodies into `scalar_core` types and back, and
//! classifies `(status code, body)` pairs into the outcomes the order
//! forms consume. It does no I/O.
//!
//! - [`wire_types`] : serde mirrors of the JSON payloads + endpoint paths
//! - [`json_codec`] : decode / encode / classify

pub mod wire_types;
pub mod json_codec;

pub use json_codec::{
    ProtocolError,
    cancel_outcome,
    decode_cancel_reply,
    decode_market,
    decode_place_reply,
    place_outcome,
};
