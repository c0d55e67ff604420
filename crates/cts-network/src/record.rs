//! Raw topology input rows.
//!
//! One record per infrastructure node, in corridor order.  The `condition`
//! column is only meaningful for bridges and may be empty elsewhere.

use serde::Deserialize;

/// The five node flavours accepted in topology input.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    Source,
    Sink,
    SourceSink,
    Link,
    Bridge,
}

/// One row of the topology input.
///
/// `id` must equal the row's position in the sequence — corridor node ids
/// are contiguous `0..n`, and a mismatch is a fatal configuration error.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct TopologyRecord {
    pub id: u32,
    pub road: String,
    pub model_type: ModelType,
    pub name: String,
    pub lat: f32,
    pub lon: f32,
    /// Physical length in metres.  Zero is legitimate (sources and sinks).
    pub length: f64,
    /// Bridge condition grade (`A`–`D`).  Required for bridges, ignored for
    /// every other model type.
    #[serde(default)]
    pub condition: Option<String>,
}
