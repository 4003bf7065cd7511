use gatewire::{ApiError, SendError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing token; pass --token or set GATECTL_TOKEN")]
    MissingToken,
    #[error("missing credentials for the status channel; pass --token or --link")]
    MissingScope,
    #[error("invalid server URL: {0}")]
    InvalidServer(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("websocket failed: {0}")]
    Ws(Box<tokio_tungstenite::tungstenite::Error>),
    #[error("timed out waiting for the status channel to open")]
    Timeout,
    #[error("trigger refused: {0}")]
    Send(#[from] SendError),
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<tokio_tungstenite::tungstenite::Error> for CliError {
    fn from(error: tokio_tungstenite::tungstenite::Error) -> Self {
        Self::Ws(Box::new(error))
    }
}
