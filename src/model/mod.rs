mod metric;
mod types;

pub use metric::Metric;
pub use types::*;
