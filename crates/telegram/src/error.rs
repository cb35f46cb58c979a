use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("telegram API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("BOT_TOKEN is not set in the environment")]
    MissingToken,
}

pub type Result<T> = std::result::Result<T, Error>;
