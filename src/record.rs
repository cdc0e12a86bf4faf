//! Outbound record shaping.
//!
//! A stream record is a JSON document (the payload plus the `event` /
//! `user` pair) keyed by the event type for partitioning. [`build_payload`]
//! is pure; the publisher calls it after resolving the effective user.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Wire shapes
// ---------------------------------------------------------------------------

/// A record ready to be put on a stream.
///
/// Field names serialize in the stream API's parameter casing, so the struct
/// doubles as the request body and as the log representation of an outgoing
/// record.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundRecord {
    /// Serialized JSON document carried by the record.
    #[serde(rename = "Data")]
    pub data: String,

    /// Partition key; always the event type.
    #[serde(rename = "PartitionKey")]
    pub partition_key: String,

    /// Target stream name.
    #[serde(rename = "StreamName")]
    pub stream_name: String,
}

/// Acknowledgement metadata returned by the stream for a stored record.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordAck {
    /// Shard the record was written to.
    #[serde(rename = "ShardId")]
    pub shard_id: String,

    /// Sequence number assigned to the record within its shard.
    #[serde(rename = "SequenceNumber")]
    pub sequence_number: String,
}

impl RecordAck {
    /// Create an acknowledgement value.
    pub fn new(shard_id: impl Into<String>, sequence_number: impl Into<String>) -> Self {
        Self {
            shard_id: shard_id.into(),
            sequence_number: sequence_number.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Payload builder
// ---------------------------------------------------------------------------

/// Build the outbound record for an event.
///
/// The record data starts from the default pair `{"event": event_type,
/// "user": user}`; every key of a JSON-object `payload` is then overlaid on
/// top, so caller fields win on collision (including `event` and `user`).
/// A non-object payload contributes no fields. The partition key is always
/// the event type, regardless of what the payload carries.
///
/// # Example
///
/// ```rust
/// use kinevent::build_payload;
/// use serde_json::json;
///
/// let record = build_payload(
///     "order.created",
///     &json!({"orderId": 7}),
///     "orders-stream",
///     "orders-service",
/// );
/// assert_eq!(record.partition_key, "order.created");
/// assert_eq!(record.stream_name, "orders-stream");
///
/// let data: serde_json::Value = serde_json::from_str(&record.data).unwrap();
/// assert_eq!(data["event"], "order.created");
/// assert_eq!(data["user"], "orders-service");
/// assert_eq!(data["orderId"], 7);
/// ```
pub fn build_payload(
    event_type: &str,
    payload: &serde_json::Value,
    stream_name: &str,
    user: &str,
) -> OutboundRecord {
    let mut merged = serde_json::Map::new();
    merged.insert("event".to_owned(), event_type.into());
    merged.insert("user".to_owned(), user.into());
    if let Some(fields) = payload.as_object() {
        for (key, value) in fields {
            merged.insert(key.clone(), value.clone());
        }
    }

    OutboundRecord {
        data: serde_json::Value::Object(merged).to_string(),
        partition_key: event_type.to_owned(),
        stream_name: stream_name.to_owned(),
    }
}
