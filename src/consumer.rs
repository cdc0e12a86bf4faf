//! Inbound stream batch decoding.
//!
//! A serverless function subscribed to a stream receives batches of
//! base64-encoded records. [`extract_event_payloads`] decodes each record,
//! skips the unreadable ones, and keeps only the payloads matching the
//! requested event type and (when configured) the owning service user.
//!
//! # Example
//!
//! ```rust,ignore
//! use kinevent::{extract_event_payloads, EventConfig, KinesisEvent};
//! use lambda_runtime::{service_fn, LambdaEvent};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lambda_runtime::Error> {
//!     let config = EventConfig::from_env();
//!
//!     lambda_runtime::run(service_fn(move |event: LambdaEvent<KinesisEvent>| {
//!         let config = config.clone();
//!         async move {
//!             for payload in extract_event_payloads(&config, &event.payload, "order.created") {
//!                 println!("order created: {payload}");
//!             }
//!             Ok::<(), lambda_runtime::Error>(())
//!         }
//!     }))
//!     .await
//! }
//! ```

use crate::config::EventConfig;
use crate::errors::EventError;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Event envelope types
// ---------------------------------------------------------------------------

/// A stream notification containing one or more records.
///
/// This mirrors the AWS Lambda Kinesis event structure. When using the
/// `aws_lambda_events` crate, its `KinesisEvent` type deserializes the same
/// JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KinesisEvent {
    /// The stream records, in delivery order.
    #[serde(rename = "Records", default)]
    pub records: Vec<KinesisEventRecord>,
}

/// A single record entry of a stream notification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KinesisEventRecord {
    /// Unique record event identifier.
    #[serde(rename = "eventID", default)]
    pub event_id: String,

    /// Event source, `aws:kinesis` for stream notifications.
    #[serde(rename = "eventSource", default)]
    pub event_source: String,

    /// The stream-level record data.
    #[serde(default)]
    pub kinesis: KinesisRecord,
}

/// The stream-level portion of a record: partition key plus encoded data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KinesisRecord {
    /// Partition key the record was put with; the event type for records
    /// written by [`build_payload`](crate::build_payload).
    #[serde(rename = "partitionKey", default)]
    pub partition_key: String,

    /// Sequence number assigned by the stream.
    #[serde(rename = "sequenceNumber", default)]
    pub sequence_number: String,

    /// Base64-encoded record payload.
    #[serde(default)]
    pub data: String,
}

// ---------------------------------------------------------------------------
// Batch decoding
// ---------------------------------------------------------------------------

/// Decode a stream batch and collect the payloads for one event type.
///
/// Each record is handled independently: its data is base64-decoded and
/// parsed as JSON, and a record that cannot be decoded is logged at error
/// level and skipped without affecting the rest of the batch. A decoded
/// payload is kept iff the record's partition key equals `event_type` and
/// either `config.service_user` is empty (no user filtering) or it equals
/// the payload's `user` field. Non-matching records are dropped silently.
///
/// The returned payloads preserve batch order. An event with no records
/// yields an empty vec.
pub fn extract_event_payloads(
    config: &EventConfig,
    event: &KinesisEvent,
    event_type: &str,
) -> Vec<serde_json::Value> {
    let mut payloads = Vec::new();

    for record in &event.records {
        let payload = match decode_record_data(&record.kinesis.data) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::error!(
                    record = ?record,
                    error = %err,
                    "failed to read stream record, record ignored"
                );
                continue;
            }
        };

        tracing::debug!(
            partition_key = %record.kinesis.partition_key,
            payload = %payload,
            "decoded stream record"
        );

        if record.kinesis.partition_key != event_type {
            continue;
        }

        let user_matches = config.service_user.is_empty()
            || payload.get("user").and_then(serde_json::Value::as_str)
                == Some(config.service_user.as_str());
        if !user_matches {
            continue;
        }

        payloads.push(payload);
    }

    payloads
}

fn decode_record_data(data: &str) -> crate::Result<serde_json::Value> {
    let bytes = BASE64
        .decode(data)
        .map_err(|err| EventError::Serialization(err.to_string()))?;
    Ok(serde_json::from_slice(&bytes)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
