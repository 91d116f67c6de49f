use crate::application::RelayChat;
use crate::config::RelayConfig;
use crate::infrastructure::groq::GroqClient;
use mindful_errors::AppError;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub relay_chat: Arc<RelayChat>,
    pub config: Arc<RelayConfig>,
}

impl AppContext {
    pub fn new(config: RelayConfig) -> Result<Self, AppError> {
        let client = GroqClient::new(&config)?;
        Ok(Self {
            relay_chat: Arc::new(RelayChat::new(client)),
            config: Arc::new(config),
        })
    }
}
