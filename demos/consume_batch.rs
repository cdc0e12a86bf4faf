//! Stream batch decoding example.
//!
//! Feeds a canned stream notification through the decoder the way a
//! stream-triggered function would receive it. No AWS access is needed;
//! the batch is built locally.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use kinevent::{build_payload, extract_event_payloads, EventConfig, KinesisEvent};
use serde_json::json;

fn main() -> kinevent::Result<()> {
    let config = EventConfig::new("eu-west-1").service_user("orders-service");

    // Build a batch the way producers would: one record per event
    let records: Vec<serde_json::Value> = [
        ("order.created", json!({"orderId": 1})),
        ("order.cancelled", json!({"orderId": 2})),
        ("order.created", json!({"orderId": 3})),
    ]
    .into_iter()
    .map(|(event_type, payload)| {
        let record = build_payload(event_type, &payload, "orders-stream", "orders-service");
        json!({
            "eventID": "shardId-000000000000:1",
            "eventSource": "aws:kinesis",
            "kinesis": {
                "partitionKey": record.partition_key,
                "sequenceNumber": "1",
                "data": BASE64.encode(record.data.as_bytes()),
            }
        })
    })
    .collect();

    let event: KinesisEvent = serde_json::from_value(json!({ "Records": records }))?;

    // Decode and keep only order.created records from our own service
    for payload in extract_event_payloads(&config, &event, "order.created") {
        println!("order created: {payload}");
    }

    Ok(())
}
