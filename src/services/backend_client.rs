use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use super::handler::{ChatHandler, HandlerError};

#[derive(Serialize)]
struct ForwardRequest<'a> {
    message: &'a str,
    user_id: Option<&'a str>,
}

#[derive(Deserialize)]
struct ForwardResponse {
    reply: String,
}

/// Forwards chat messages to the backend over HTTP.
#[derive(Debug, Clone)]
pub struct BackendHandler {
    client: Client,
    endpoint: Url,
}

impl BackendHandler {
    pub fn new(backend_base: &str, chat_path: &str, timeout: Duration) -> anyhow::Result<Self> {
        let endpoint = join_endpoint(backend_base, chat_path)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn join_endpoint(base: &str, path: &str) -> anyhow::Result<Url> {
    let joined = format!(
        "{}/{}",
        base.trim().trim_end_matches('/'),
        path.trim().trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|e| anyhow::anyhow!("invalid backend url {joined:?}: {e}"))
}

#[async_trait]
impl ChatHandler for BackendHandler {
    async fn handle_chat(&self, message: &str, user_id: Option<&str>) -> Result<String, HandlerError> {
        let res = self
            .client
            .post(self.endpoint.clone())
            .json(&ForwardRequest { message, user_id })
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            tracing::warn!(%status, endpoint = %self.endpoint, "backend rejected chat message");
            return Err(HandlerError::Status(status.as_u16()));
        }

        let body = res.bytes().await?;
        let parsed: ForwardResponse =
            serde_json::from_slice(&body).map_err(|e| HandlerError::InvalidReply(e.to_string()))?;
        Ok(parsed.reply)
    }
}
