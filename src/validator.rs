use crate::model::Metric;

/// A metric can be sent iff it has a name and a non-zero timestamp. Tags are
/// not inspected here, empty tag pairs are dropped by the encoder.
pub fn valid(metric: &Metric) -> bool {
    !metric.name.is_empty() && metric.timestamp != 0
}
