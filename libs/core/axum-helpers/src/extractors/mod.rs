//! Extractors whose rejections render as failure envelopes.

pub mod id_path;
pub mod json_body;
pub mod validated_json;

pub use id_path::IdPath;
pub use json_body::JsonBody;
pub use validated_json::ValidatedJson;
