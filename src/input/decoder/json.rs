use serde_json::{self, Map, Value};

use super::decoder::{DecodeResult, Decoder};
use crate::error::DecodeError;
use crate::model::Metric;

#[derive(Debug, Default)]
pub struct JsonDecoder {}

impl JsonDecoder {
    pub fn new() -> Self {
        Self {}
    }
}

const FIELDS: [&str; 4] = ["name", "timestamp", "value", "tags"];

// Keys are matched case-insensitively; an exact match wins over a folded one.
fn fold_keys(obj: Map<String, Value>) -> Map<String, Value> {
    let mut folded = Map::new();
    for (key, value) in obj {
        match FIELDS.iter().find(|f| f.eq_ignore_ascii_case(&key)) {
            Some(field) if *field != key => {
                folded.entry(field.to_string()).or_insert(value);
            }
            _ => {
                folded.insert(key, value);
            }
        }
    }
    folded
}

impl Decoder for JsonDecoder {
    fn decode(&self, line: &[u8]) -> DecodeResult {
        // Invalid UTF-8 is replaced with U+FFFD instead of failing the line.
        let line = String::from_utf8_lossy(line);

        match serde_json::from_str(&line)? {
            Value::Object(o) => Ok(serde_json::from_value::<Metric>(Value::Object(
                fold_keys(o),
            ))?),
            _ => Err(DecodeError::new("JSON decoder supports only objects")),
        }
    }
}
