#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(warnings)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
// Allowed pedantic lints for existing codebase compatibility
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::single_match_else)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::map_unwrap_or)]
//! # kinevent - Kinesis event helpers for serverless functions
//!
//! Small building blocks for functions that publish to and consume from an
//! AWS Kinesis stream: an outbound payload builder and publisher, an inbound
//! batch decoder with event-type and service-user filtering, a request-body
//! validator, and the typed application errors shared by all of them.
//!
//! ## Quick Start
//!
//! ### Publishing events
//!
//! ```rust,no_run
//! use kinevent::{EventConfig, Publisher};
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() -> kinevent::Result<()> {
//! let publisher = Publisher::with_defaults(EventConfig::from_env()).await;
//!
//! // Simple publish (config defaults)
//! publisher
//!     .publish("order.created", json!({"orderId": 7}), "orders-stream")
//!     .await?;
//!
//! // Publish with per-call overrides
//! let ack = publisher
//!     .publish("order.created", json!({"orderId": 7}), "orders-stream")
//!     .user("backfill-job")
//!     .region("us-east-1")
//!     .send()
//!     .await?;
//! println!("stored as {}", ack.sequence_number);
//! # Ok(())
//! # }
//! ```
//!
//! ### Consuming stream batches
//!
//! ```rust,no_run
//! use kinevent::{extract_event_payloads, EventConfig, KinesisEvent};
//!
//! # fn handle(event: &KinesisEvent) {
//! let config = EventConfig::from_env();
//! for payload in extract_event_payloads(&config, event, "order.created") {
//!     println!("order created: {payload}");
//! }
//! # }
//! ```
//!
//! ## Features
//!
//! - **Async-first**: publisher calls suspend only for the stream put
//! - **Type-safe**: strong typing with serde serialization
//! - **Pluggable stream backend**: the [`StreamClient`] trait seam, with an
//!   AWS Kinesis implementation behind the `kinesis-client` feature
//! - **Test support**: an in-memory recording client behind the `testing`
//!   feature

pub mod config;
pub mod consumer;
pub mod errors;
pub mod publisher;
pub mod record;
pub mod request;
pub mod stream;

/// In-memory stream client and assertion helpers for tests.
#[cfg(feature = "testing")]
#[cfg_attr(docsrs, doc(cfg(feature = "testing")))]
pub mod testing;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use config::{EventConfig, REGION_ENV, SERVICE_USER_ENV};
pub use consumer::{extract_event_payloads, KinesisEvent, KinesisEventRecord, KinesisRecord};
pub use errors::{AppError, ErrorKind, EventError, Result};
pub use publisher::{PublishBuilder, Publisher};
pub use record::{build_payload, OutboundRecord, RecordAck};
pub use request::{require_body_params, RequestEvent};
#[cfg(feature = "kinesis-client")]
pub use stream::KinesisStreamClient;
pub use stream::{DynStreamClient, StreamClient};
