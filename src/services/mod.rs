pub mod assistant;
pub mod backend_client;
pub mod handler;

use std::sync::Arc;

use crate::config::{Config, HandlerKind};
use assistant::AssistantHandler;
use backend_client::BackendHandler;
use handler::ChatHandler;

/// Build the handler selected by `config.handler`.
pub fn build_handler(config: &Config) -> anyhow::Result<Arc<dyn ChatHandler>> {
    match config.handler {
        HandlerKind::Assistant => Ok(Arc::new(AssistantHandler)),
        HandlerKind::Backend => {
            let handler = BackendHandler::new(
                &config.backend_base,
                &config.backend_chat_path,
                config.backend_timeout,
            )?;
            tracing::info!(endpoint = %handler.endpoint(), "forwarding chat to backend");
            Ok(Arc::new(handler))
        }
    }
}
