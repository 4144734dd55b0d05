//! Deterministic JSON serialization for files the host keeps under version
//! control or diffs by hand.

mod json;

pub use json::{SerializationError, from_json_bytes, to_json_stable};
