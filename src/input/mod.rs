mod decoder;
mod entry;
mod line;
mod source;

pub use decoder::{DecodeResult, Decoder, JsonDecoder};
pub use entry::{Entry, Malformed, MetricReader};
pub use line::{trim_line, DelimReader, LineReader};
pub use source::open;
