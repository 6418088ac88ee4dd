use crate::error::Result;
use crate::model::Metric;

pub trait Encoder {
    /// Renders a metric as a single line, without the line delimiter.
    fn encode(&self, metric: &Metric) -> Result<Vec<u8>>;
}
