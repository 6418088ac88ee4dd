mod decoder;
mod json;

pub use decoder::{DecodeResult, Decoder};
pub use json::JsonDecoder;
