use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

use super::types::{MetricName, SampleValue, TagName, TagValue, Tags, Timestamp};

/// A single measurement as it arrives on the input stream.
///
/// Field names are matched exactly here; `JsonDecoder` folds other casings
/// (`Name`, `TIMESTAMP`, ...) onto them before deserializing.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Metric {
    #[serde(deserialize_with = "null_as_default")]
    pub name: MetricName,

    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: Timestamp,

    #[serde(deserialize_with = "null_as_default")]
    pub value: SampleValue,

    #[serde(deserialize_with = "nullable_tags")]
    pub tags: Tags,
}

impl Metric {
    pub fn new<N>(name: N, timestamp: Timestamp, value: SampleValue) -> Self
    where
        N: Into<MetricName>,
    {
        Self {
            name: name.into(),
            timestamp,
            value,
            tags: Tags::new(),
        }
    }

    pub fn with_tag<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.tags.insert(key.into(), value.into());
        self
    }
}

// An explicit `null` reads the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// A `null` tag value becomes an empty string. The encoder drops it later,
// the metric itself is still sent.
fn nullable_tags<'de, D>(deserializer: D) -> std::result::Result<Tags, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = Option::<HashMap<TagName, Option<TagValue>>>::deserialize(deserializer)?;
    Ok(tags
        .unwrap_or_default()
        .into_iter()
        .map(|(k, v)| (k, v.unwrap_or_default()))
        .collect())
}
