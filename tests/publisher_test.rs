use kinevent::testing::RecordingStreamClient;
use kinevent::{ErrorKind, EventConfig, Publisher};
use serde_json::json;
use std::sync::Arc;

fn publisher_with(config: EventConfig) -> (RecordingStreamClient, Publisher) {
    let stream = RecordingStreamClient::new();
    let publisher = Publisher::new(config, Arc::new(stream.clone()));
    (stream, publisher)
}

// ---------------------------------------------------------------------------
// Region and user resolution
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_publish_uses_config_defaults() {
    let config = EventConfig::new("eu-west-1").service_user("orders-service");
    let (stream, publisher) = publisher_with(config);

    publisher
        .publish("order.created", json!({"orderId": 7}), "orders-stream")
        .await
        .unwrap();

    let published = stream.published();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].region, "eu-west-1");

    let data: serde_json::Value = serde_json::from_str(&published[0].record.data).unwrap();
    assert_eq!(data["user"], "orders-service");
}

#[tokio::test]
async fn test_publish_overrides_win() {
    let config = EventConfig::new("eu-west-1").service_user("orders-service");
    let (stream, publisher) = publisher_with(config);

    publisher
        .publish("order.created", json!({"orderId": 7}), "orders-stream")
        .user("backfill-job")
        .region("us-east-1")
        .send()
        .await
        .unwrap();

    let published = stream.published();
    assert_eq!(published[0].region, "us-east-1");

    let data: serde_json::Value = serde_json::from_str(&published[0].record.data).unwrap();
    assert_eq!(data["user"], "backfill-job");
}

#[tokio::test]
async fn test_publish_with_empty_config() {
    let (stream, publisher) = publisher_with(EventConfig::new(""));

    publisher.publish("ping", json!({}), "s").await.unwrap();

    let published = stream.published();
    assert_eq!(published[0].region, "");

    let data: serde_json::Value = serde_json::from_str(&published[0].record.data).unwrap();
    assert_eq!(data["user"], "");
}

// ---------------------------------------------------------------------------
// Record shape
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_published_record_shape() {
    let config = EventConfig::new("eu-west-1").service_user("orders-service");
    let (stream, publisher) = publisher_with(config);

    publisher
        .publish(
            "order.created",
            json!({"orderId": 7, "amount": 100}),
            "orders-stream",
        )
        .await
        .unwrap();

    stream.assert_published("orders-stream", "order.created");

    let record = &stream.published()[0].record;
    assert_eq!(record.partition_key, "order.created");
    assert_eq!(record.stream_name, "orders-stream");

    let data: serde_json::Value = serde_json::from_str(&record.data).unwrap();
    assert_eq!(data["event"], "order.created");
    assert_eq!(data["user"], "orders-service");
    assert_eq!(data["orderId"], 7);
    assert_eq!(data["amount"], 100);
}

#[tokio::test]
async fn test_publish_returns_client_ack() {
    let (_stream, publisher) = publisher_with(EventConfig::new("eu-west-1"));

    let ack = publisher.publish("ping", json!({}), "s").await.unwrap();

    assert_eq!(ack.shard_id, "shardId-000000000000");
    assert!(!ack.sequence_number.is_empty());
}

#[tokio::test]
async fn test_publish_puts_exactly_one_record() {
    let (stream, publisher) = publisher_with(EventConfig::new("eu-west-1"));

    publisher.publish("ping", json!({}), "s").await.unwrap();
    assert_eq!(stream.published().len(), 1);
}

// ---------------------------------------------------------------------------
// Failure mapping
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_publish_failure_maps_to_put_record_error() {
    let (stream, publisher) = publisher_with(EventConfig::new("eu-west-1"));
    stream.fail_next("ProvisionedThroughputExceededException: slow down");

    let err = publisher.publish("ping", json!({}), "s").await.unwrap_err();

    let app = err.as_app().expect("application error");
    assert_eq!(app.kind(), ErrorKind::KinesisPutRecord);
    assert_eq!(app.http_status(), 500);
    // The fixed default message; the underlying cause is logged, not attached
    assert_eq!(app.message(), "Failed to put record in kinesis stream");
}

#[tokio::test]
async fn test_publish_recovers_after_failure() {
    let (stream, publisher) = publisher_with(EventConfig::new("eu-west-1"));

    stream.fail_next("transient");
    publisher.publish("ping", json!({}), "s").await.unwrap_err();
    publisher.publish("ping", json!({}), "s").await.unwrap();

    assert_eq!(stream.published().len(), 1);
}
