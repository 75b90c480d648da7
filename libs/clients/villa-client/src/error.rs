use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Could not encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Response with status {status} could not be decoded: {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

pub type ClientResult<T> = Result<T, ClientError>;
