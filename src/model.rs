use serde::{Serialize, Serializer};

/// A `DP[..]:` tag embedded in raw experiment output.
///
/// The instrumentation prints at most one tag per line; the tag decides both
/// how a line is matched and how the text after it is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `DP[Time]:` - one ping round-trip time
    Time,
    /// `DP[Int]:` - messages completed in one reporting interval
    Interval,
    /// `DP[Message]:` - declares the group that scopes the samples after it
    Message,
    /// `DP[Delay]:` - configured delay window of one throughput record
    Delay,
    /// `DP[Throughput]:` - measured throughput of one record
    Throughput,
    /// `DP[Latency]:` - measured latency of one record
    Latency,
}

/// Numeric type of the field behind a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Integer,
    Float,
}

impl Marker {
    pub fn tag(self) -> &'static str {
        match self {
            Marker::Time => "DP[Time]:",
            Marker::Interval => "DP[Int]:",
            Marker::Message => "DP[Message]:",
            Marker::Delay => "DP[Delay]:",
            Marker::Throughput => "DP[Throughput]:",
            Marker::Latency => "DP[Latency]:",
        }
    }

    /// How the field behind this tag is parsed. Counts, times and group keys
    /// are integers; throughput and latency carry fractional values.
    pub fn kind(self) -> NumberKind {
        match self {
            Marker::Time | Marker::Interval | Marker::Message | Marker::Delay => {
                NumberKind::Integer
            }
            Marker::Throughput | Marker::Latency => NumberKind::Float,
        }
    }
}

/// A parsed data-point field, typed per the marker table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
}

impl FieldValue {
    pub fn as_f64(self) -> f64 {
        match self {
            FieldValue::Int(v) => v as f64,
            FieldValue::Float(v) => v,
        }
    }
}

// Integers must keep their integer text form in the output rows, so the
// serialization dispatches on the variant instead of widening to f64.
impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            FieldValue::Int(v) => serializer.serialize_i64(v),
            FieldValue::Float(v) => serializer.serialize_f64(v),
        }
    }
}

/// One `(percentile, value)` row of an ungrouped summary table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentileRow {
    pub point: f64,
    pub value: f64,
}

/// One `(group, percentile, value)` row of a grouped summary table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupedRow {
    pub group: i64,
    pub point: f64,
    pub value: f64,
}

/// One `(window, throughput, latency)` record of a throughput-vs-latency run.
///
/// A field that missed its marker stays `None` and is emitted as an empty
/// column rather than failing the record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThroughputRecord {
    pub window: Option<FieldValue>,
    pub throughput: Option<FieldValue>,
    pub latency: Option<FieldValue>,
}
