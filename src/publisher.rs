use crate::config::EventConfig;
use crate::errors::AppError;
use crate::record::{build_payload, RecordAck};
use crate::stream::DynStreamClient;

// ---------------------------------------------------------------------------
// Publisher
// ---------------------------------------------------------------------------

/// Publishes event records to a stream.
///
/// A publisher pairs an [`EventConfig`] with a stream client. The config
/// supplies the default region and user identity; both can be overridden per
/// call through the [`PublishBuilder`].
///
/// # Example
///
/// ```rust,ignore
/// use kinevent::{EventConfig, Publisher};
/// use serde_json::json;
///
/// let publisher = Publisher::with_defaults(EventConfig::from_env()).await;
///
/// // Simple publish (config defaults)
/// let ack = publisher
///     .publish("order.created", json!({"orderId": 7}), "orders-stream")
///     .await?;
///
/// // Publish with overrides
/// let ack = publisher
///     .publish("order.created", json!({"orderId": 7}), "orders-stream")
///     .user("backfill-job")
///     .region("us-east-1")
///     .send()
///     .await?;
/// ```
#[derive(Clone, Debug)]
pub struct Publisher {
    config: EventConfig,
    client: DynStreamClient,
}

impl Publisher {
    /// Create a publisher with the given config and stream client.
    pub fn new(config: EventConfig, client: DynStreamClient) -> Self {
        Self { config, client }
    }

    /// Create a publisher backed by the AWS Kinesis client with default AWS
    /// configuration.
    #[cfg(feature = "kinesis-client")]
    pub async fn with_defaults(config: EventConfig) -> Self {
        let client = crate::stream::KinesisStreamClient::new().await;
        Self::new(config, std::sync::Arc::new(client))
    }

    /// Returns the config this publisher was built with.
    pub fn config(&self) -> &EventConfig {
        &self.config
    }

    /// Publish one event record to `stream_name`.
    ///
    /// Returns a [`PublishBuilder`] for setting per-call overrides before
    /// sending. If no overrides are needed, the builder can be `.await`ed
    /// directly since it implements `IntoFuture`.
    pub fn publish(
        &self,
        event_type: impl Into<String>,
        payload: serde_json::Value,
        stream_name: impl Into<String>,
    ) -> PublishBuilder {
        PublishBuilder {
            publisher: self.clone(),
            event_type: event_type.into(),
            payload,
            stream_name: stream_name.into(),
            user: None,
            region: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Publish builder
// ---------------------------------------------------------------------------

/// A builder for configuring and sending a single publish call.
///
/// Created via [`Publisher::publish`]. Can be `.await`ed directly, or
/// configured with chained methods and finished with `.send()`.
pub struct PublishBuilder {
    publisher: Publisher,
    event_type: String,
    payload: serde_json::Value,
    stream_name: String,
    user: Option<String>,
    region: Option<String>,
}

impl PublishBuilder {
    /// Override the user identity stamped on the payload for this call.
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Override the stream region for this call.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Build the record and put it on the stream.
    ///
    /// Fails with a `KINESIS_PUT_RECORD_ERROR` application error when the
    /// stream client reports a failure; the underlying cause is logged, not
    /// attached.
    pub async fn send(self) -> crate::Result<RecordAck> {
        let region = self
            .region
            .unwrap_or_else(|| self.publisher.config.region.clone());
        let user = self
            .user
            .unwrap_or_else(|| self.publisher.config.service_user.clone());

        let record = build_payload(&self.event_type, &self.payload, &self.stream_name, &user);

        tracing::info!(
            stream = %record.stream_name,
            partition_key = %record.partition_key,
            region = %region,
            data = %record.data,
            "adding record to kinesis stream"
        );

        match self.publisher.client.put_record(&region, &record).await {
            Ok(ack) => Ok(ack),
            Err(err) => {
                tracing::error!(
                    stream = %record.stream_name,
                    partition_key = %record.partition_key,
                    error = %err,
                    "failed to put record on stream"
                );
                Err(AppError::kinesis_put_record().into())
            }
        }
    }
}

/// `IntoFuture` implementation allows `publisher.publish(..).await?` without
/// explicitly calling `.send()`.
impl std::future::IntoFuture for PublishBuilder {
    type Output = crate::Result<RecordAck>;
    type IntoFuture = std::pin::Pin<Box<dyn std::future::Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.send())
    }
}
