#[cfg(feature = "kinesis-client")]
pub(crate) mod kinesis;

#[cfg(feature = "kinesis-client")]
pub use self::kinesis::KinesisStreamClient;

use crate::record::{OutboundRecord, RecordAck};
use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// An abstract client for putting records on an event stream.
///
/// This trait is object-safe and uses `Pin<Box<dyn Future>>` for async
/// support. The default implementation talks to AWS Kinesis (enabled via the
/// `kinesis-client` feature).
///
/// Implement this trait to provide custom stream backends (e.g., in-memory
/// for testing, or a local stream emulator).
///
/// # Example
///
/// ```rust,no_run
/// use kinevent::stream::StreamClient;
/// use kinevent::{OutboundRecord, RecordAck};
/// use std::pin::Pin;
///
/// #[derive(Debug)]
/// struct NullStream;
///
/// impl StreamClient for NullStream {
///     fn put_record(
///         &self,
///         _region: &str,
///         _record: &OutboundRecord,
///     ) -> Pin<Box<dyn std::future::Future<Output = kinevent::Result<RecordAck>> + Send + '_>> {
///         Box::pin(async move { Ok(RecordAck::new("shardId-000000000000", "0")) })
///     }
/// }
/// ```
pub trait StreamClient: Send + Sync + Debug {
    /// Put a single record on the stream named inside it, in the given
    /// region. An empty region means the client's own default.
    fn put_record(
        &self,
        region: &str,
        record: &OutboundRecord,
    ) -> Pin<Box<dyn Future<Output = crate::Result<RecordAck>> + Send + '_>>;
}

/// A cloneable, type-erased stream client handle.
pub type DynStreamClient = Arc<dyn StreamClient>;
