//! Test utilities: an in-memory stream client with capture and assertions.
//!
//! # Usage
//!
//! ```rust,ignore
//! use kinevent::testing::RecordingStreamClient;
//! use kinevent::{EventConfig, Publisher};
//! use std::sync::Arc;
//!
//! #[tokio::test]
//! async fn test_publishes_order_event() {
//!     let stream = RecordingStreamClient::new();
//!     let publisher = Publisher::new(
//!         EventConfig::new("eu-west-1"),
//!         Arc::new(stream.clone()),
//!     );
//!     // ... code that publishes via the publisher
//!     stream.assert_published("orders-stream", "order.created");
//! }
//! ```

use crate::errors::EventError;
use crate::record::{OutboundRecord, RecordAck};
use crate::stream::StreamClient;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

/// A record captured by the recording client.
#[derive(Debug, Clone)]
pub struct PublishedRecord {
    /// Region the put was made against.
    pub region: String,
    /// The outbound record as the publisher built it.
    pub record: OutboundRecord,
}

/// In-memory [`StreamClient`] that records every put.
///
/// Clones share the same capture buffer, so a test can keep one handle for
/// assertions while the publisher owns another.
#[derive(Clone, Debug)]
pub struct RecordingStreamClient {
    inner: Arc<Mutex<RecordingInner>>,
}

#[derive(Debug)]
struct RecordingInner {
    published: Vec<PublishedRecord>,
    fail_next: Option<String>,
    fail_always: Option<String>,
    next_sequence: u64,
}

impl Default for RecordingStreamClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingStreamClient {
    /// Create a new recording client.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(RecordingInner {
                published: Vec::new(),
                fail_next: None,
                fail_always: None,
                next_sequence: 0,
            })),
        }
    }

    /// Make the next put fail with the given message, then recover.
    pub fn fail_next(&self, message: impl Into<String>) {
        self.inner.lock().unwrap().fail_next = Some(message.into());
    }

    /// Make every put fail with the given message until [`Self::clear`].
    pub fn fail_always(&self, message: impl Into<String>) {
        self.inner.lock().unwrap().fail_always = Some(message.into());
    }

    /// Return all captured records, in put order.
    pub fn published(&self) -> Vec<PublishedRecord> {
        self.inner.lock().unwrap().published.clone()
    }

    /// Clear captured records and failure injection.
    pub fn clear(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.published.clear();
        inner.fail_next = None;
        inner.fail_always = None;
    }

    /// Assert that at least one record was put on `stream_name` with the
    /// given partition key.
    pub fn assert_published(&self, stream_name: &str, partition_key: &str) {
        let inner = self.inner.lock().unwrap();
        let found = inner.published.iter().any(|p| {
            p.record.stream_name == stream_name && p.record.partition_key == partition_key
        });
        assert!(
            found,
            "Expected a record on stream '{}' with partition key '{}', found none. Published: {:?}",
            stream_name,
            partition_key,
            inner
                .published
                .iter()
                .map(|p| (&p.record.stream_name, &p.record.partition_key))
                .collect::<Vec<_>>()
        );
    }

    /// Assert that NO record was put with the given partition key.
    pub fn refute_published(&self, partition_key: &str) {
        let inner = self.inner.lock().unwrap();
        let count = inner
            .published
            .iter()
            .filter(|p| p.record.partition_key == partition_key)
            .count();
        assert!(
            count == 0,
            "Expected no records with partition key '{}', but found {}",
            partition_key,
            count
        );
    }

    fn record_put(&self, region: &str, record: &OutboundRecord) -> crate::Result<RecordAck> {
        let mut inner = self.inner.lock().unwrap();

        if let Some(message) = inner.fail_always.clone() {
            return Err(EventError::Stream(message));
        }
        if let Some(message) = inner.fail_next.take() {
            return Err(EventError::Stream(message));
        }

        inner.next_sequence += 1;
        let ack = RecordAck::new("shardId-000000000000", format!("{:021}", inner.next_sequence));
        inner.published.push(PublishedRecord {
            region: region.to_string(),
            record: record.clone(),
        });
        Ok(ack)
    }
}

impl StreamClient for RecordingStreamClient {
    fn put_record(
        &self,
        region: &str,
        record: &OutboundRecord,
    ) -> Pin<Box<dyn Future<Output = crate::Result<RecordAck>> + Send + '_>> {
        let result = self.record_put(region, record);
        Box::pin(async move { result })
    }
}
