use std::collections::HashMap;

pub type MetricName = String;

pub type SampleValue = f64;

// Epoch-based, milliseconds in practice. Zero means "not set".
pub type Timestamp = i64;

pub type TagName = String;

pub type TagValue = String;

pub type Tags = HashMap<TagName, TagValue>;
