//! HTTP gateway for the relay.
//!
//! Receives share envelopes from the browser frontend and relays each
//! content item (location, image, audio) to Telegram on behalf of the
//! named recipient. The frontend never holds the bot credential.

pub mod send;
pub mod server;
