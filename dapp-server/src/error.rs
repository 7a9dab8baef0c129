use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use simple_dapp::SimpleDappError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No account connected")]
    NotConnected,

    #[error("Contract error: {0}")]
    Contract(#[from] SimpleDappError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match self {
            ServerError::NotConnected => StatusCode::CONFLICT,
            ServerError::Contract(SimpleDappError::ConnectionFailed(_)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ServerError::Contract(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
