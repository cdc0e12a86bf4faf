use crate::record::{OutboundRecord, RecordAck};
use crate::stream::StreamClient;
use aws_sdk_kinesis::config::Region;
use aws_sdk_kinesis::primitives::Blob;
use std::future::Future;
use std::pin::Pin;

/// AWS Kinesis implementation of [`StreamClient`].
///
/// Holds the shared AWS configuration loaded once at construction; each
/// `put_record` call binds a service client to the requested region before
/// issuing the request, so one value serves publishers targeting different
/// regions.
#[derive(Clone, Debug)]
pub struct KinesisStreamClient {
    config: aws_config::SdkConfig,
}

impl KinesisStreamClient {
    /// Load the default AWS configuration (environment, profile, instance
    /// metadata) and wrap it.
    pub async fn new() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self { config }
    }

    /// Wrap an already-loaded AWS configuration. Useful for custom
    /// credentials or endpoint overrides.
    pub fn from_conf(config: aws_config::SdkConfig) -> Self {
        Self { config }
    }

    /// Build a service client bound to `region`, or to the shared
    /// configuration's own region when `region` is empty.
    fn client_for(&self, region: &str) -> aws_sdk_kinesis::Client {
        if region.is_empty() {
            return aws_sdk_kinesis::Client::new(&self.config);
        }
        let conf = aws_sdk_kinesis::config::Builder::from(&self.config)
            .region(Region::new(region.to_owned()))
            .build();
        aws_sdk_kinesis::Client::from_conf(conf)
    }
}

impl StreamClient for KinesisStreamClient {
    fn put_record(
        &self,
        region: &str,
        record: &OutboundRecord,
    ) -> Pin<Box<dyn Future<Output = crate::Result<RecordAck>> + Send + '_>> {
        let client = self.client_for(region);
        let data = record.data.clone();
        let partition_key = record.partition_key.clone();
        let stream_name = record.stream_name.clone();

        Box::pin(async move {
            let output = client
                .put_record()
                .stream_name(stream_name)
                .partition_key(partition_key)
                .data(Blob::new(data.into_bytes()))
                .send()
                .await?;

            Ok(RecordAck::new(output.shard_id(), output.sequence_number()))
        })
    }
}
