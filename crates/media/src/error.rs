#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("data URL has no comma separator")]
    MissingSeparator,

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

pub type Result<T> = std::result::Result<T, Error>;
