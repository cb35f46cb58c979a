use secrecy::{ExposeSecret, Secret};

use crate::error::{Error, Result};

/// Hosted Bot API endpoint.
const DEFAULT_API_HOST: &str = "https://api.telegram.org";

/// Environment variable holding the bot credential.
pub const TOKEN_ENV_VAR: &str = "BOT_TOKEN";

/// Bot credential and endpoint configuration, established once at startup
/// and shared read-only for the process lifetime.
#[derive(Clone)]
pub struct TelegramConfig {
    /// Bot token from @BotFather.
    token: Secret<String>,
    /// API host; tests point this at a local mock server.
    api_host: String,
}

impl TelegramConfig {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Secret::new(token.into()),
            api_host: DEFAULT_API_HOST.into(),
        }
    }

    /// Read the bot token from `BOT_TOKEN`. An absent or empty value is an
    /// error so the process refuses to serve without a credential.
    pub fn from_env() -> Result<Self> {
        match std::env::var(TOKEN_ENV_VAR) {
            Ok(token) if !token.is_empty() => Ok(Self::new(token)),
            _ => Err(Error::MissingToken),
        }
    }

    #[must_use]
    pub fn with_api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = host.into();
        self
    }

    /// Base URL with the credential templated in: `<host>/bot<token>`.
    pub(crate) fn api_base(&self) -> String {
        format!("{}/bot{}", self.api_host, self.token.expose_secret())
    }
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("token", &"[REDACTED]")
            .field("api_host", &self.api_host)
            .finish()
    }
}
