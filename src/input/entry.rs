use super::decoder::Decoder;
use super::line::{trim_line, LineReader};
use crate::error::{DecodeError, Result};
use crate::model::Metric;

/// Outcome of decoding one input line.
#[derive(Debug)]
pub enum Entry {
    Metric(usize, Metric),
    Malformed(Malformed),
}

#[derive(Debug)]
pub struct Malformed {
    pub line_no: usize,
    pub line: String,
    pub reason: DecodeError,
}

/// Lazily turns input lines into decode attempts, one per line.
///
/// Malformed lines are yielded as `Ok(Entry::Malformed(..))`, read failures as
/// `Err(..)`. After EOF or a read failure the reader stays exhausted.
pub struct MetricReader {
    inner: Box<dyn LineReader>,
    decoder: Box<dyn Decoder>,
    line_no: usize,
    done: bool,
}

impl MetricReader {
    pub fn new(inner: Box<dyn LineReader>, decoder: Box<dyn Decoder>) -> Self {
        Self {
            inner,
            decoder,
            line_no: 0,
            done: false,
        }
    }
}

impl std::iter::Iterator for MetricReader {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut buf = Vec::new();
        match self.inner.read(&mut buf) {
            Ok(0) => {
                self.done = true;
                return None; // EOF
            }
            Ok(_) => (),
            Err(e) => {
                self.done = true;
                return Some(Err(("input reader failed", e).into()));
            }
        };

        self.line_no += 1;

        let line = trim_line(&buf, self.inner.delimiter());
        match self.decoder.decode(line) {
            Ok(metric) => Some(Ok(Entry::Metric(self.line_no, metric))),
            Err(reason) => Some(Ok(Entry::Malformed(Malformed {
                line_no: self.line_no,
                line: String::from_utf8_lossy(line).into_owned(),
                reason,
            }))),
        }
    }
}
