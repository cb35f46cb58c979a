#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Integration tests for the `/api/send` envelope endpoint.

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use {async_trait::async_trait, serde_json::json, tokio::net::TcpListener};

use {
    courier_gateway::server::{AppState, build_app},
    courier_telegram::Outbound,
};

/// One recorded outbound delivery attempt.
#[derive(Debug, Clone, PartialEq)]
enum Call {
    Text(String),
    Photo { filename: String, bytes: Vec<u8> },
    Audio { filename: String, bytes: Vec<u8> },
}

#[derive(Default)]
struct RecordingOutbound {
    calls: Arc<Mutex<Vec<Call>>>,
}

#[async_trait]
impl Outbound for RecordingOutbound {
    async fn send_text(&self, _chat_id: &str, text: &str) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(Call::Text(text.into()));
        Ok(())
    }

    async fn send_photo(&self, _chat_id: &str, bytes: Vec<u8>, filename: &str) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(Call::Photo {
            filename: filename.into(),
            bytes,
        });
        Ok(())
    }

    async fn send_audio(&self, _chat_id: &str, bytes: Vec<u8>, filename: &str) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(Call::Audio {
            filename: filename.into(),
            bytes,
        });
        Ok(())
    }
}

/// Start a gateway on an ephemeral port with a recording outbound.
async fn start_test_server() -> (SocketAddr, Arc<Mutex<Vec<Call>>>) {
    let outbound = RecordingOutbound::default();
    let calls = Arc::clone(&outbound.calls);
    let app = build_app(AppState {
        outbound: Arc::new(outbound),
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, calls)
}

async fn post_send(addr: SocketAddr, body: serde_json::Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("http://{addr}/api/send"))
        .json(&body)
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn missing_user_id_is_rejected_without_deliveries() {
    let (addr, calls) = start_test_server().await;

    let response = post_send(addr, json!({ "location": { "lat": 1.0, "lon": 2.0 } })).await;

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Missing user_id" }));
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn empty_user_id_is_rejected_without_deliveries() {
    let (addr, calls) = start_test_server().await;

    let response = post_send(addr, json!({ "user_id": "" })).await;

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Missing user_id" }));
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn envelope_without_content_is_acknowledged_with_no_deliveries() {
    let (addr, calls) = start_test_server().await;

    let response = post_send(addr, json!({ "user_id": "42" })).await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "status": "success" }));
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn full_envelope_is_relayed_in_order() {
    let (addr, calls) = start_test_server().await;

    let response = post_send(
        addr,
        json!({
            "user_id": "42",
            "location": { "lat": 37.7749, "lon": -122.4194 },
            "image": "data:image/jpeg;base64,ZmFrZS1qcGVn",
            "audio": "data:audio/webm;base64,ZmFrZS13ZWJt"
        }),
    )
    .await;

    assert_eq!(response.status(), 200);
    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 3);
    let Call::Text(text) = &calls[0] else {
        panic!("expected text first, got {calls:?}");
    };
    assert!(text.contains("37.7749") && text.contains("-122.4194"));
    assert_eq!(calls[1], Call::Photo {
        filename: "image.jpg".into(),
        bytes: b"fake-jpeg".to_vec(),
    });
    assert_eq!(calls[2], Call::Audio {
        filename: "audio.webm".into(),
        bytes: b"fake-webm".to_vec(),
    });
}

#[tokio::test]
async fn corrupt_image_is_acknowledged_and_sibling_audio_still_delivered() {
    let (addr, calls) = start_test_server().await;

    let response = post_send(
        addr,
        json!({
            "user_id": "42",
            "image": "data:image/jpeg;base64,@@corrupt@@",
            "audio": "data:audio/webm;base64,ZmFrZS13ZWJt"
        }),
    )
    .await;

    // Acceptance policy: the envelope was valid, so the caller sees success
    // even though the image never went out.
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "status": "success" }));

    let calls = calls.lock().unwrap();
    assert_eq!(calls[..], [Call::Audio {
        filename: "audio.webm".into(),
        bytes: b"fake-webm".to_vec(),
    }]);
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let (addr, _calls) = start_test_server().await;

    let response = reqwest::get(format!("http://{addr}/health")).await.unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
}
