//! Request body validation example.
//!
//! Shows the three validation outcomes: an accepted body, a body with
//! missing fields, and a request without any body.

use kinevent::{require_body_params, RequestEvent};

#[tokio::main]
async fn main() {
    // 1. A complete body passes
    let event = RequestEvent::with_body(r#"{"orderId": 7, "amount": 100}"#);
    match require_body_params(&event, &["orderId", "amount"]).await {
        Ok(()) => println!("body accepted"),
        Err(err) => println!("rejected: {err}"),
    }

    // 2. Missing fields are named in the error
    let event = RequestEvent::with_body(r#"{"orderId": 7}"#);
    if let Err(err) = require_body_params(&event, &["orderId", "amount", "customer"]).await {
        if let Some(app) = err.as_app() {
            println!("rejected with HTTP {}: {}", app.http_status(), app.message());
        }
    }

    // 3. A request without a body names every required field
    let event = RequestEvent::default();
    if let Err(err) = require_body_params(&event, &["orderId", "amount"]).await {
        println!("rejected: {err}");
    }
}
