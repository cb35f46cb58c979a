use base64::Engine;

use crate::error::{Error, Result};

/// Decode a `data:` URL into raw bytes.
///
/// Everything up to the first comma is the metadata prefix
/// (`data:image/jpeg;base64`) and is discarded; the remainder must be
/// standard base64. The caller picks the filename per content kind, so the
/// prefix's MIME type is never inspected.
pub fn decode_data_url(input: &str) -> Result<Vec<u8>> {
    let Some(comma_pos) = input.find(',') else {
        return Err(Error::MissingSeparator);
    };
    let payload = &input[comma_pos + 1..];
    Ok(base64::engine::general_purpose::STANDARD.decode(payload)?)
}
