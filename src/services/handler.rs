// src/services/handler.rs
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("backend unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned status {0}")]
    Status(u16),

    #[error("backend reply could not be decoded: {0}")]
    InvalidReply(String),

    #[error("{0}")]
    Other(String),
}

/// Produces a reply for one chat message.
///
/// Implementations are shared across concurrent requests and must not rely
/// on per-request mutable state.
#[async_trait]
pub trait ChatHandler: Send + Sync {
    async fn handle_chat(&self, message: &str, user_id: Option<&str>) -> Result<String, HandlerError>;
}
