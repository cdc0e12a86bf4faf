//! Basic event publishing example.
//!
//! Demonstrates how to create a publisher and put event records on a
//! stream, with and without per-call overrides.
//!
//! Prerequisites: AWS credentials in the environment and an existing
//! Kinesis stream named `orders-stream`.

use kinevent::{EventConfig, Publisher};
use serde_json::json;

#[tokio::main]
async fn main() -> kinevent::Result<()> {
    // Configuration from the deployment environment (`region`, `SERVICE_USER`)
    let publisher = Publisher::with_defaults(EventConfig::from_env()).await;

    // 1. Simple publish (config defaults)
    let ack = publisher
        .publish(
            "order.created",
            json!({"orderId": 42, "amount": 100}),
            "orders-stream",
        )
        .await?;
    println!(
        "Stored record: shard {} sequence {}",
        ack.shard_id, ack.sequence_number
    );

    // 2. Publish with per-call overrides
    let ack = publisher
        .publish("order.archived", json!({"orderId": 42}), "orders-archive")
        .user("archive-job")
        .region("us-east-1")
        .send()
        .await?;
    println!(
        "Stored record: shard {} sequence {}",
        ack.shard_id, ack.sequence_number
    );

    Ok(())
}
