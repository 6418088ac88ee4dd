use std::collections::BTreeMap;
use std::fmt::Write;

use super::encoder::Encoder;
use crate::error::Result;
use crate::model::Metric;

// put <name> <timestamp> <value> [<tagk>=<tagv> ...]
//
// e.g. put test1 1429001359824 1.000000 host=web01 dc=eu
//
// Tags with an empty key or value are rejected by the server, so they are
// dropped here. The remaining tags are written in key order.
pub struct PutEncoder {}

impl PutEncoder {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for PutEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for PutEncoder {
    fn encode(&self, metric: &Metric) -> Result<Vec<u8>> {
        let mut line = String::with_capacity(64);

        write!(
            line,
            "put {} {} {:.6}",
            metric.name, metric.timestamp, metric.value
        )
        .map_err(|e| ("put line formatting failed", e))?;

        let tags = metric
            .tags
            .iter()
            .filter(|(k, v)| !k.is_empty() && !v.is_empty())
            .collect::<BTreeMap<_, _>>();

        for (key, value) in tags {
            write!(line, " {}={}", key, value).map_err(|e| ("put line formatting failed", e))?;
        }

        Ok(line.into_bytes())
    }
}
