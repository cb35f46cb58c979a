//! Decoding of browser-supplied media payloads.

pub mod data_url;
pub mod error;

pub use {
    data_url::decode_data_url,
    error::{Error, Result},
};
