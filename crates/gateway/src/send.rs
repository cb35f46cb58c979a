//! Envelope validation and per-kind relay dispatch for `/api/send`.

use std::fmt;

use {
    axum::{Json, extract::State, http::StatusCode},
    serde::Deserialize,
    serde_json::json,
    tracing::{info, warn},
};

use {courier_media::decode_data_url, courier_telegram::Outbound};

use crate::server::AppState;

/// Fixed upload filename for relayed images.
const IMAGE_FILENAME: &str = "image.jpg";
/// Fixed upload filename for relayed audio clips.
const AUDIO_FILENAME: &str = "audio.webm";

/// Inbound share envelope.
///
/// The three content fields are each independently optional; an envelope
/// carrying none of them is a valid no-op. `location` stays loosely typed
/// at this level because a malformed location must fail only its own
/// delivery, never the whole envelope.
#[derive(Debug, Default, Deserialize)]
pub struct SendRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub location: Option<serde_json::Value>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

/// Geographic point shared by the frontend.
#[derive(Debug, Deserialize)]
struct Location {
    lat: f64,
    lon: f64,
}

/// Content kinds an envelope may carry, in delivery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Location,
    Image,
    Audio,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Location => "location",
            Self::Image => "image",
            Self::Audio => "audio",
        })
    }
}

/// Result of one content-kind delivery attempt. Lives only for the
/// duration of the request; never persisted.
#[derive(Debug)]
pub enum DeliveryOutcome {
    Sent(ContentKind),
    Failed { kind: ContentKind, reason: String },
}

impl DeliveryOutcome {
    fn failed(kind: ContentKind, reason: impl fmt::Display) -> Self {
        Self::Failed {
            kind,
            reason: reason.to_string(),
        }
    }
}

/// `POST /api/send`
///
/// Validates the envelope, relays each present content kind, and
/// acknowledges. Acceptance policy: once the envelope is valid the caller
/// gets `{"status": "success"}` even when individual deliveries failed.
/// The caller is told "accepted", not "delivered". Per-kind outcomes are
/// logged below; switch on `outcomes` here to surface partial failures
/// instead.
pub async fn handle_send(
    State(state): State<AppState>,
    Json(request): Json<SendRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    let Some(user_id) = request.user_id.as_deref().filter(|id| !id.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Missing user_id" })),
        );
    };

    let outcomes = dispatch(state.outbound.as_ref(), user_id, &request).await;
    for outcome in &outcomes {
        match outcome {
            DeliveryOutcome::Sent(kind) => {
                info!(user_id, kind = %kind, "content relayed");
            },
            DeliveryOutcome::Failed { kind, reason } => {
                warn!(user_id, kind = %kind, reason = %reason, "delivery failed");
            },
        }
    }

    (StatusCode::OK, Json(json!({ "status": "success" })))
}

/// Attempt delivery of each present content kind, in the fixed order
/// location → image → audio. A failing kind never blocks the ones after
/// it; every attempt is reported in the returned outcome list.
pub async fn dispatch(
    outbound: &dyn Outbound,
    user_id: &str,
    request: &SendRequest,
) -> Vec<DeliveryOutcome> {
    let mut outcomes = Vec::new();

    if let Some(raw) = &request.location {
        outcomes.push(send_location(outbound, user_id, raw).await);
    }
    if let Some(data_url) = &request.image {
        outcomes.push(send_image(outbound, user_id, data_url).await);
    }
    if let Some(data_url) = &request.audio {
        outcomes.push(send_audio(outbound, user_id, data_url).await);
    }

    outcomes
}

async fn send_location(
    outbound: &dyn Outbound,
    user_id: &str,
    raw: &serde_json::Value,
) -> DeliveryOutcome {
    let location: Location = match serde_json::from_value(raw.clone()) {
        Ok(location) => location,
        Err(e) => return DeliveryOutcome::failed(ContentKind::Location, e),
    };
    let text = format!(
        "📍 Location:\nLatitude: {}\nLongitude: {}",
        location.lat, location.lon
    );
    match outbound.send_text(user_id, &text).await {
        Ok(()) => DeliveryOutcome::Sent(ContentKind::Location),
        Err(e) => DeliveryOutcome::failed(ContentKind::Location, e),
    }
}

async fn send_image(outbound: &dyn Outbound, user_id: &str, data_url: &str) -> DeliveryOutcome {
    let bytes = match decode_data_url(data_url) {
        Ok(bytes) => bytes,
        Err(e) => return DeliveryOutcome::failed(ContentKind::Image, e),
    };
    match outbound.send_photo(user_id, bytes, IMAGE_FILENAME).await {
        Ok(()) => DeliveryOutcome::Sent(ContentKind::Image),
        Err(e) => DeliveryOutcome::failed(ContentKind::Image, e),
    }
}

async fn send_audio(outbound: &dyn Outbound, user_id: &str, data_url: &str) -> DeliveryOutcome {
    let bytes = match decode_data_url(data_url) {
        Ok(bytes) => bytes,
        Err(e) => return DeliveryOutcome::failed(ContentKind::Audio, e),
    };
    match outbound.send_audio(user_id, bytes, AUDIO_FILENAME).await {
        Ok(()) => DeliveryOutcome::Sent(ContentKind::Audio),
        Err(e) => DeliveryOutcome::failed(ContentKind::Audio, e),
    }
}
