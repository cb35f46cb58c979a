//! Telegram Bot API transport.
//!
//! A thin client over the three Bot API methods the relay uses:
//! `sendMessage`, `sendPhoto`, and `sendAudio`. One outbound HTTP request
//! per delivery, no retries, transport-default timeouts.

pub mod api;
pub mod config;
pub mod error;
pub mod outbound;

pub use {
    api::BotApi,
    config::TelegramConfig,
    error::{Error, Result},
    outbound::Outbound,
};
