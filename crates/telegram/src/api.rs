use {
    async_trait::async_trait,
    reqwest::{
        Client,
        multipart::{Form, Part},
    },
    serde_json::json,
    tracing::info,
};

use crate::{
    config::TelegramConfig,
    error::{Error, Result},
    outbound::Outbound,
};

/// Bot API client.
///
/// Each delivery is one `POST` against `<host>/bot<token>/<method>`: a JSON
/// body for text, a multipart form for binary media.
#[derive(Debug, Clone)]
pub struct BotApi {
    client: Client,
    config: TelegramConfig,
}

impl BotApi {
    #[must_use]
    pub fn new(config: TelegramConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{method}", self.config.api_base())
    }

    /// `sendMessage` with a JSON body `{chat_id, text}`.
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&json!({ "chat_id": chat_id, "text": text }))
            .send()
            .await?;
        into_result(response).await?;

        info!(chat_id, text_len = text.len(), "telegram text delivered");
        Ok(())
    }

    /// Upload a file part under `field` plus a `chat_id` form field.
    async fn send_file(
        &self,
        method: &str,
        field: &'static str,
        chat_id: &str,
        bytes: Vec<u8>,
        filename: &str,
    ) -> Result<()> {
        let byte_count = bytes.len();
        let part = Part::bytes(bytes).file_name(filename.to_string());
        let form = Form::new()
            .text("chat_id", chat_id.to_string())
            .part(field, part);

        let response = self
            .client
            .post(self.method_url(method))
            .multipart(form)
            .send()
            .await?;
        into_result(response).await?;

        info!(chat_id, method, bytes = byte_count, "telegram upload delivered");
        Ok(())
    }
}

/// Treat any non-2xx platform response as a delivery failure, carrying the
/// status and response body for the log line.
async fn into_result(response: reqwest::Response) -> Result<()> {
    if response.status().is_success() {
        return Ok(());
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(Error::Api { status, body })
}

#[async_trait]
impl Outbound for BotApi {
    async fn send_text(&self, chat_id: &str, text: &str) -> anyhow::Result<()> {
        self.send_message(chat_id, text).await?;
        Ok(())
    }

    async fn send_photo(&self, chat_id: &str, bytes: Vec<u8>, filename: &str) -> anyhow::Result<()> {
        self.send_file("sendPhoto", "photo", chat_id, bytes, filename)
            .await?;
        Ok(())
    }

    async fn send_audio(&self, chat_id: &str, bytes: Vec<u8>, filename: &str) -> anyhow::Result<()> {
        self.send_file("sendAudio", "audio", chat_id, bytes, filename)
            .await?;
        Ok(())
    }
}
