use {anyhow::Result, async_trait::async_trait};

/// Outbound delivery operations against the messaging platform.
///
/// The gateway dispatches through this seam; tests substitute a capturing
/// mock for the live Bot API.
#[async_trait]
pub trait Outbound: Send + Sync {
    /// Deliver a plain text message.
    async fn send_text(&self, chat_id: &str, text: &str) -> Result<()>;

    /// Deliver raw image bytes as a photo upload.
    async fn send_photo(&self, chat_id: &str, bytes: Vec<u8>, filename: &str) -> Result<()>;

    /// Deliver raw audio bytes as an audio upload.
    async fn send_audio(&self, chat_id: &str, bytes: Vec<u8>, filename: &str) -> Result<()>;
}
