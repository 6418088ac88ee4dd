use crate::error::DecodeError;
use crate::model::Metric;

pub type DecodeResult = std::result::Result<Metric, DecodeError>;

pub trait Decoder {
    fn decode(&self, line: &[u8]) -> DecodeResult;
}
